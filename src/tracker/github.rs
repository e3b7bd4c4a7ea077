//! Implements the IssueTracker trait for GitHub
use async_trait::async_trait;
use log::*;
use octocrab::Octocrab;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::{
    error::RelkitError,
    result::Result,
    tracker::{
        config::{DEFAULT_PAGE_SIZE, RemoteConfig},
        traits::IssueTracker,
        types::{Issue, Milestone},
    },
};

#[derive(Debug, Deserialize)]
struct MilestoneRec {
    number: u64,
    title: String,
}

#[derive(Debug, Deserialize)]
struct LabelRec {
    name: String,
}

#[derive(Debug, Deserialize)]
struct IssueRec {
    number: u64,
    title: String,
    #[serde(default)]
    labels: Vec<LabelRec>,
    // present only when the record is actually a pull request
    pull_request: Option<serde_json::Value>,
}

/// GitHub tracker client for milestone and issue queries.
pub struct GithubTracker {
    config: RemoteConfig,
    base_uri: String,
    instance: Octocrab,
}

impl GithubTracker {
    /// Create a GitHub client with personal access token authentication and
    /// API base URL configuration.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let base_uri = format!("{}://api.{}", config.scheme, config.host);
        let builder = Octocrab::builder()
            .personal_token(config.token.clone())
            .base_uri(base_uri.clone())?;
        let instance = builder.build()?;

        Ok(Self {
            config,
            base_uri,
            instance,
        })
    }
}

#[async_trait]
impl IssueTracker for GithubTracker {
    async fn list_milestones(&self) -> Result<Vec<Milestone>> {
        let endpoint = format!(
            "{}/repos/{}/{}/milestones",
            self.base_uri, self.config.owner, self.config.repo
        );

        let mut milestones: Vec<Milestone> = vec![];
        let mut page: u32 = 1;
        let mut has_more = true;

        while has_more {
            let route = format!(
                "{endpoint}?state=all&per_page={DEFAULT_PAGE_SIZE}&page={page}"
            );

            let result = self.instance.get(&route, None::<&()>).await;

            let recs: Vec<MilestoneRec> = match result {
                Err(octocrab::Error::GitHub { source, .. })
                    if source.status_code == StatusCode::NOT_FOUND =>
                {
                    return Err(RelkitError::tracker(format!(
                        "repository {}/{} not found on {}",
                        self.config.owner, self.config.repo, self.config.host
                    ))
                    .into());
                }
                Err(err) => return Err(err.into()),
                Ok(recs) => recs,
            };

            has_more = recs.len() == DEFAULT_PAGE_SIZE as usize;
            page += 1;

            for rec in recs {
                milestones.push(Milestone {
                    number: rec.number,
                    title: rec.title,
                });
            }
        }

        debug!(
            "found {} milestones in {}/{}",
            milestones.len(),
            self.config.owner,
            self.config.repo
        );

        Ok(milestones)
    }

    async fn closed_issues(&self, milestone_number: u64) -> Result<Vec<Issue>> {
        let endpoint = format!(
            "{}/repos/{}/{}/issues",
            self.base_uri, self.config.owner, self.config.repo
        );

        let mut issues: Vec<Issue> = vec![];
        let mut page: u32 = 1;
        let mut has_more = true;

        while has_more {
            let route = format!(
                "{endpoint}?milestone={milestone_number}&state=closed&per_page={DEFAULT_PAGE_SIZE}&page={page}"
            );

            let recs: Vec<IssueRec> =
                self.instance.get(&route, None::<&()>).await?;

            has_more = recs.len() == DEFAULT_PAGE_SIZE as usize;
            page += 1;

            for rec in recs {
                // the issues endpoint also returns pull requests
                if rec.pull_request.is_some() {
                    debug!("skipping pull request #{}", rec.number);
                    continue;
                }

                issues.push(Issue {
                    number: rec.number,
                    title: rec.title,
                    labels: rec
                        .labels
                        .into_iter()
                        .map(|label| label.name)
                        .collect(),
                });
            }
        }

        info!(
            "fetched {} closed issues for milestone {}",
            issues.len(),
            milestone_number
        );

        Ok(issues)
    }
}
