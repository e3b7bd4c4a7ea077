//! Compiling release notes for a version from the issue tracker.
use log::*;

use crate::{
    error::RelkitError,
    notes::{
        classify::{self, ClassifiedIssue},
        render,
    },
    result::Result,
    tracker::traits::IssueTracker,
    version,
};

/// Fetches, classifies, sorts, and renders the closed issues of a release.
pub struct NotesCompiler<'a> {
    tracker: &'a dyn IssueTracker,
    issue_link_base_url: String,
}

impl<'a> NotesCompiler<'a> {
    pub fn new(
        tracker: &'a dyn IssueTracker,
        issue_link_base_url: impl Into<String>,
    ) -> Self {
        Self {
            tracker,
            issue_link_base_url: issue_link_base_url.into(),
        }
    }

    /// Closed issues for the version's milestone, classified and ordered by
    /// priority.
    ///
    /// The milestone must exist before anything is fetched; a missing
    /// milestone is a named error, not an empty report.
    pub async fn issues_for_version(
        &self,
        release_version: &str,
    ) -> Result<Vec<ClassifiedIssue>> {
        let milestone_title = version::milestone_for(release_version);

        info!("collecting closed issues for milestone {milestone_title}");

        let milestones = self.tracker.list_milestones().await?;

        let milestone = milestones
            .iter()
            .find(|m| m.title == milestone_title)
            .ok_or_else(|| {
                RelkitError::MilestoneNotFound(milestone_title.to_string())
            })?;

        let issues = self.tracker.closed_issues(milestone.number).await?;

        let classified: Vec<ClassifiedIssue> =
            issues.iter().map(classify::classify).collect();

        classify::sort_by_priority(classified)
    }

    /// HTML notes table for the in-app plugin.
    pub async fn html(&self, release_version: &str) -> Result<String> {
        let issues = self.issues_for_version(release_version).await?;
        render::render_html(
            release_version,
            &self.issue_link_base_url,
            &issues,
        )
    }

    /// Markdown notes table for the tracker's release page.
    pub async fn markdown(&self, release_version: &str) -> Result<String> {
        let issues = self.issues_for_version(release_version).await?;
        render::render_markdown(&issues)
    }
}
