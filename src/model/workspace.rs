use std::cell::OnceCell;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, Utc};

/// A tracked project directory: one entry of the catalog.
///
/// Identity is `(parent, name)`. The modification time is read from the
/// filesystem on first use and cached; an unreadable entry reports the Unix
/// epoch.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub parent: PathBuf,
    pub name: String,
    modified: OnceCell<DateTime<Utc>>,
}

impl PartialEq for Workspace {
    fn eq(&self, other: &Self) -> bool {
        self.parent == other.parent && self.name == other.name
    }
}

impl Eq for Workspace {}

impl Workspace {
    pub fn new(parent: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Workspace {
            parent: parent.into(),
            name: name.into(),
            modified: OnceCell::new(),
        }
    }

    /// Build a workspace whose modification time is already known.
    pub fn with_modified(
        parent: impl Into<PathBuf>,
        name: impl Into<String>,
        modified: DateTime<Utc>,
    ) -> Self {
        let ws = Workspace::new(parent, name);
        let _ = ws.modified.set(modified);
        ws
    }

    /// Full path of the workspace directory
    pub fn path(&self) -> PathBuf {
        self.parent.join(&self.name)
    }

    pub fn modified(&self) -> DateTime<Utc> {
        *self
            .modified
            .get_or_init(|| read_modified(&self.path()).unwrap_or(DateTime::UNIX_EPOCH))
    }

    /// Local calendar date of the last modification, `YYYY-MM-DD`.
    pub fn modified_date(&self) -> String {
        self.modified()
            .with_timezone(&Local)
            .format("%Y-%m-%d")
            .to_string()
    }

    /// Whether `query` selects this workspace while filtering.
    ///
    /// Names match case-insensitively (exact or substring); the ISO date
    /// matches as a literal substring.
    pub fn matches(&self, query: &str) -> bool {
        let name = self.name.to_lowercase();
        let query_lower = query.to_lowercase();
        name == query_lower || name.contains(&query_lower) || self.modified_date().contains(query)
    }
}

fn read_modified(path: &Path) -> Option<DateTime<Utc>> {
    let modified = fs::metadata(path).ok()?.modified().ok()?;
    Some(DateTime::<Utc>::from(modified))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn ws(name: &str) -> Workspace {
        let modified = Local
            .with_ymd_and_hms(2024, 3, 15, 12, 0, 0)
            .unwrap()
            .with_timezone(&Utc);
        Workspace::with_modified("/dev/workspaces", name, modified)
    }

    #[test]
    fn path_joins_parent_and_name() {
        assert_eq!(ws("alpha").path(), PathBuf::from("/dev/workspaces/alpha"));
    }

    #[test]
    fn matches_name_case_insensitively() {
        let w = ws("Frontend-App");
        assert!(w.matches("frontend-app"));
        assert!(w.matches("END"));
        assert!(w.matches("app"));
        assert!(!w.matches("backend"));
    }

    #[test]
    fn matches_iso_date_substring() {
        let w = ws("alpha");
        assert_eq!(w.modified_date(), "2024-03-15");
        assert!(w.matches("2024-03"));
        assert!(w.matches("03-15"));
        assert!(!w.matches("2023"));
    }

    #[test]
    fn identity_ignores_cached_time() {
        let a = ws("alpha");
        let b = Workspace::new("/dev/workspaces", "alpha");
        assert_eq!(a, b);
        assert_ne!(a, Workspace::new("/elsewhere", "alpha"));
    }

    #[test]
    fn modified_reads_metadata_lazily() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("proj")).unwrap();
        let w = Workspace::new(tmp.path(), "proj");
        let age = Utc::now() - w.modified();
        assert!(age.num_minutes() < 5);
    }

    #[test]
    fn unreadable_entry_defaults_to_epoch() {
        let w = Workspace::new("/nonexistent/root", "gone");
        assert_eq!(w.modified(), DateTime::UNIX_EPOCH);
    }
}
