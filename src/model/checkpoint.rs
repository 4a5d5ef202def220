use chrono::{DateTime, Utc};

/// A timestamped note captured against a workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkpoint {
    pub id: String,
    pub workspace_id: String,
    /// Note text, whitespace-trimmed
    pub value: String,
    pub created_at: DateTime<Utc>,
}

/// The store's copy of a workspace, written on its first checkpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceRow {
    pub id: String,
    pub name: String,
    pub path: String,
}
