//! Traits related to remote issue trackers
use async_trait::async_trait;
use color_eyre::eyre::Result;

use crate::tracker::types::{Issue, Milestone};

/// Read-only access to the project's issue tracker.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// List every milestone in the repository, open and closed.
    async fn list_milestones(&self) -> Result<Vec<Milestone>>;

    /// List closed issues assigned to the given milestone. Pull requests are
    /// excluded.
    async fn closed_issues(&self, milestone_number: u64) -> Result<Vec<Issue>>;
}
