use chrono::{DateTime, Duration, Utc};

/// How long ago a workspace was last modified, bucketed for colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Age {
    /// Under a day
    Fresh,
    /// Under a week
    Recent,
    /// Under thirty days
    Stale,
    Old,
}

impl Age {
    pub fn since(modified: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let elapsed = now - modified;
        if elapsed < Duration::days(1) {
            Age::Fresh
        } else if elapsed < Duration::weeks(1) {
            Age::Recent
        } else if elapsed < Duration::days(30) {
            Age::Stale
        } else {
            Age::Old
        }
    }
}
