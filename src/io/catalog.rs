use std::fs;
use std::path::{Path, PathBuf};

use crate::model::workspace::Workspace;

/// Directory entries that are never workspaces
const IGNORED_NAMES: &[&str] = &[".DS_Store"];

/// Error type for loading the workspace catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("could not read workspace root {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// The sorted, immutable set of workspaces loaded at startup
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    workspaces: Vec<Workspace>,
}

impl Catalog {
    /// Build a catalog, sorting ascending by name.
    pub fn new(mut workspaces: Vec<Workspace>) -> Self {
        workspaces.sort_by(|a, b| a.name.cmp(&b.name));
        Catalog { workspaces }
    }

    pub fn workspaces(&self) -> &[Workspace] {
        &self.workspaces
    }

    pub fn get(&self, index: usize) -> Option<&Workspace> {
        self.workspaces.get(index)
    }

    pub fn len(&self) -> usize {
        self.workspaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workspaces.is_empty()
    }

    /// Catalog indices of every workspace matching `query`.
    /// An empty query selects nothing.
    pub fn filter(&self, query: &str) -> Vec<usize> {
        if query.is_empty() {
            return Vec::new();
        }
        self.workspaces
            .iter()
            .enumerate()
            .filter(|(_, ws)| ws.matches(query))
            .map(|(i, _)| i)
            .collect()
    }
}

/// Load every immediate subdirectory of `root` as a workspace.
pub fn load_catalog(root: &Path) -> Result<Catalog, CatalogError> {
    let read_error = |e: std::io::Error| CatalogError::ReadError {
        path: root.to_path_buf(),
        source: e,
    };
    let mut workspaces = Vec::new();
    for entry in fs::read_dir(root).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if IGNORED_NAMES.contains(&name.as_str()) {
            continue;
        }
        if !entry.file_type().is_ok_and(|t| t.is_dir()) {
            continue;
        }
        workspaces.push(Workspace::new(root, name));
    }
    Ok(Catalog::new(workspaces))
}
