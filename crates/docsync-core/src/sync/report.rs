//! Per-item outcomes of a sync pass

use std::fmt;

use serde::{Deserialize, Serialize};

/// What happened to one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemStatus {
    /// Exported as a new document
    Created,
    /// Exported over an existing document
    Updated,
    /// Imported into a new local file
    Written,
    /// Imported over an existing local file
    Overwritten,
    /// Left alone, with the reason
    Skipped(String),
    /// Could not be transferred, with the error
    Failed(String),
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Updated => write!(f, "updated"),
            Self::Written => write!(f, "written"),
            Self::Overwritten => write!(f, "overwritten"),
            Self::Skipped(reason) => write!(f, "skipped: {reason}"),
            Self::Failed(error) => write!(f, "failed: {error}"),
        }
    }
}

/// Outcome for one item of a collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemOutcome {
    /// Collection the item belongs to
    pub collection: String,
    /// Collection-scoped relative path, or the folder for collection-level
    /// failures
    pub path: String,
    /// Document id, when one could be computed
    pub id: Option<String>,
    pub status: ItemStatus,
}

impl ItemOutcome {
    pub fn new(collection: &str, path: impl Into<String>, id: Option<String>, status: ItemStatus) -> Self {
        Self {
            collection: collection.to_string(),
            path: path.into(),
            id,
            status,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.status, ItemStatus::Failed(_))
    }
}

/// Report from an export or import run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    /// Outcomes in configuration order, then listing order
    pub outcomes: Vec<ItemOutcome>,
}

impl SyncReport {
    /// Whether every attempted item succeeded or was skipped
    pub fn success(&self) -> bool {
        !self.outcomes.iter().any(ItemOutcome::is_failure)
    }

    pub fn push(&mut self, outcome: ItemOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn failures(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.outcomes.iter().filter(|o| o.is_failure())
    }

    pub fn created(&self) -> usize {
        self.count(|s| matches!(s, ItemStatus::Created))
    }

    pub fn updated(&self) -> usize {
        self.count(|s| matches!(s, ItemStatus::Updated))
    }

    pub fn written(&self) -> usize {
        self.count(|s| matches!(s, ItemStatus::Written))
    }

    pub fn overwritten(&self) -> usize {
        self.count(|s| matches!(s, ItemStatus::Overwritten))
    }

    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, ItemStatus::Skipped(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, ItemStatus::Failed(_)))
    }

    fn count(&self, predicate: impl Fn(&ItemStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| predicate(&o.status)).count()
    }
}

impl Extend<ItemOutcome> for SyncReport {
    fn extend<I: IntoIterator<Item = ItemOutcome>>(&mut self, iter: I) {
        self.outcomes.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_success() {
        assert!(SyncReport::default().success());
    }

    #[test]
    fn test_skips_do_not_fail_the_run() {
        let mut report = SyncReport::default();
        report.push(ItemOutcome::new("posts", "a.md", None, ItemStatus::Written));
        report.push(ItemOutcome::new(
            "posts",
            "b.md",
            None,
            ItemStatus::Skipped("file exists".into()),
        ));
        assert!(report.success());
        assert_eq!(report.written(), 1);
        assert_eq!(report.skipped(), 1);
    }

    #[test]
    fn test_one_failure_fails_the_run() {
        let mut report = SyncReport::default();
        report.extend([
            ItemOutcome::new("posts", "a.md", None, ItemStatus::Created),
            ItemOutcome::new("posts", "b.md", None, ItemStatus::Failed("boom".into())),
        ]);
        assert!(!report.success());
        assert_eq!(report.failures().count(), 1);
        assert_eq!(report.created(), 1);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(ItemStatus::Updated.to_string(), "updated");
        assert_eq!(ItemStatus::Overwritten.to_string(), "overwritten");
        assert_eq!(
            ItemStatus::Skipped("file exists".into()).to_string(),
            "skipped: file exists"
        );
    }
}
