use serde::Serialize;

use crate::model::{Checkpoint, Workspace};
use crate::util::unicode::fit_to_width;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct WorkspaceJson {
    pub position: usize,
    pub name: String,
    pub modified: String,
    pub path: String,
}

#[derive(Serialize)]
pub struct CheckpointJson {
    pub id: String,
    pub workspace: String,
    pub value: String,
    pub created_at: String,
}

/// `position` is 1-based, matching the browser's index column.
pub fn workspace_to_json(position: usize, ws: &Workspace) -> WorkspaceJson {
    WorkspaceJson {
        position,
        name: ws.name.clone(),
        modified: ws.modified_date(),
        path: ws.path().display().to_string(),
    }
}

pub fn checkpoint_to_json(workspace: &str, cp: &Checkpoint) -> CheckpointJson {
    CheckpointJson {
        id: cp.id.clone(),
        workspace: workspace.to_string(),
        value: cp.value.clone(),
        created_at: cp.created_at.to_rfc3339(),
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// `  3  name      2024-05-01  /path/to/name`
pub fn format_workspace_line(position: usize, ws: &Workspace, name_width: usize) -> String {
    format!(
        "{:>3}  {}  {}  {}",
        position,
        fit_to_width(&ws.name, name_width),
        ws.modified_date(),
        ws.path().display(),
    )
}

/// Header line with the creation time, then the note indented by two spaces.
pub fn format_checkpoint(cp: &Checkpoint) -> Vec<String> {
    let mut lines = vec![cp.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()];
    lines.extend(cp.value.lines().map(|l| format!("  {}", l)));
    lines
}
