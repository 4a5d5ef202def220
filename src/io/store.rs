use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, OpenFlags, OptionalExtension, params};

use crate::model::checkpoint::Checkpoint;
use crate::model::workspace::Workspace;

const CREATE_WORKSPACES: &str =
    "CREATE TABLE IF NOT EXISTS workspaces (id TEXT UNIQUE, name TEXT, path TEXT)";
const CREATE_CHECKPOINTS: &str =
    "CREATE TABLE IF NOT EXISTS checkpoints (id TEXT, workspaceid TEXT, value TEXT, date INTEGER)";

/// Error type for checkpoint storage
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not open store {path}: {source}")]
    OpenError {
        path: String,
        source: rusqlite::Error,
    },
    #[error("store query failed: {0}")]
    QueryError(#[from] rusqlite::Error),
    #[error("stored date {0} is out of range")]
    InvalidDate(i64),
}

/// The insert side of the checkpoint store, as seen by the effect pipeline
pub trait CheckpointStore {
    /// Record `value` against `workspace`, creating the workspace row on
    /// first use. `value` is stored trimmed.
    fn insert_checkpoint(
        &mut self,
        workspace: &Workspace,
        value: &str,
    ) -> Result<Checkpoint, StoreError>;
}

/// SQLite-backed checkpoint store. The connection is released on `close`
/// or when the store is dropped.
pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|e| StoreError::OpenError {
            path: path.display().to_string(),
            source: e,
        })?;
        let store = Store { conn };
        store.bootstrap()?;
        Ok(store)
    }

    /// Open an existing store for lookups without creating or altering it.
    /// A missing file yields `None`.
    pub fn open_read_only(path: impl AsRef<Path>) -> Result<Option<Self>, StoreError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| StoreError::OpenError {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(Some(Store { conn }))
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(|e| StoreError::OpenError {
            path: ":memory:".to_string(),
            source: e,
        })?;
        let store = Store { conn };
        store.bootstrap()?;
        Ok(store)
    }

    fn bootstrap(&self) -> Result<(), StoreError> {
        self.conn.execute(CREATE_WORKSPACES, [])?;
        self.conn.execute(CREATE_CHECKPOINTS, [])?;
        Ok(())
    }

    pub fn close(self) -> Result<(), StoreError> {
        self.conn.close().map_err(|(_, e)| StoreError::QueryError(e))
    }

    /// Id of the stored row for the workspace called `name`, if one exists.
    #[cfg(test)]
    pub fn workspace_id(&self, name: &str) -> Result<Option<String>, StoreError> {
        let id = self
            .conn
            .query_row(
                "SELECT id FROM workspaces WHERE name = ?1",
                params![name],
                |row| row.get(0),
            )
            .optional()?;
        Ok(id)
    }

    #[cfg(test)]
    pub fn workspace_rows(
        &self,
    ) -> Result<Vec<crate::model::checkpoint::WorkspaceRow>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, path FROM workspaces ORDER BY name ASC")?;
        let rows = stmt.query_map([], |row| {
            Ok(crate::model::checkpoint::WorkspaceRow {
                id: row.get(0)?,
                name: row.get(1)?,
                path: row.get(2)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// All checkpoints for the workspace called `name`, oldest first.
    pub fn checkpoints_for(&self, name: &str) -> Result<Vec<Checkpoint>, StoreError> {
        let mut stmt = self.conn.prepare(
            "
            SELECT c.id, c.workspaceid, c.value, c.date
            FROM checkpoints c
            JOIN workspaces w ON w.id = c.workspaceid
            WHERE w.name = ?1
            ORDER BY c.date ASC, c.rowid ASC
            ",
        )?;
        let rows = stmt.query_map(params![name], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, i64>(3)?,
            ))
        })?;

        let mut checkpoints = Vec::new();
        for row in rows {
            let (id, workspace_id, value, date) = row?;
            let created_at =
                DateTime::<Utc>::from_timestamp(date, 0).ok_or(StoreError::InvalidDate(date))?;
            checkpoints.push(Checkpoint {
                id,
                workspace_id,
                value,
                created_at,
            });
        }
        Ok(checkpoints)
    }

    #[cfg(test)]
    pub fn checkpoint_count(&self) -> Result<usize, StoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM checkpoints", [], |row| row.get(0))?;
        Ok(count.max(0) as usize)
    }
}

impl CheckpointStore for Store {
    fn insert_checkpoint(
        &mut self,
        workspace: &Workspace,
        value: &str,
    ) -> Result<Checkpoint, StoreError> {
        let tx = self.conn.transaction()?;

        let existing: Option<String> = tx
            .query_row(
                "SELECT id FROM workspaces WHERE name = ?1",
                params![workspace.name],
                |row| row.get(0),
            )
            .optional()?;
        let workspace_id = match existing {
            Some(id) => id,
            None => {
                let id = uuid::Uuid::new_v4().to_string();
                tx.execute(
                    "INSERT INTO workspaces (id, name, path) VALUES (?1, ?2, ?3)",
                    params![id, workspace.name, workspace.path().display().to_string()],
                )?;
                tracing::debug!(workspace = %workspace.name, id = %id, "created workspace row");
                id
            }
        };

        // Second precision: the column holds a Unix timestamp.
        let created_at = DateTime::<Utc>::from_timestamp(Utc::now().timestamp(), 0)
            .unwrap_or(DateTime::UNIX_EPOCH);
        let checkpoint = Checkpoint {
            id: uuid::Uuid::new_v4().to_string(),
            workspace_id,
            value: value.trim().to_string(),
            created_at,
        };
        tx.execute(
            "INSERT INTO checkpoints (id, workspaceid, value, date) VALUES (?1, ?2, ?3, ?4)",
            params![
                checkpoint.id,
                checkpoint.workspace_id,
                checkpoint.value,
                checkpoint.created_at.timestamp()
            ],
        )?;
        tx.commit()?;

        tracing::info!(workspace = %workspace.name, checkpoint = %checkpoint.id, "checkpoint inserted");
        Ok(checkpoint)
    }
}
