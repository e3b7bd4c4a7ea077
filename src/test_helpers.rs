//! Common test helper functions shared across test modules.
//!
//! This module provides reusable fixtures for tracker and issue data,
//! reducing duplication across different test suites.
use secrecy::SecretString;

use crate::tracker::{config::RemoteConfig, types::Issue};

/// Creates a test RemoteConfig with sensible defaults.
///
/// # Example
/// ```ignore
/// let config = create_test_remote_config();
/// ```
pub fn create_test_remote_config() -> RemoteConfig {
    RemoteConfig {
        host: "github.com".to_string(),
        scheme: "https".to_string(),
        owner: "myorg".to_string(),
        repo: "myapp".to_string(),
        token: SecretString::from("test-token".to_string()),
        issue_link_base_url: "https://github.com/myorg/myapp/issues"
            .to_string(),
    }
}

/// Creates a test Issue with the provided number, title, and labels.
///
/// # Example
/// ```ignore
/// let issue = create_test_issue(42, "Crash on startup", &["bug", "prio-high"]);
/// ```
pub fn create_test_issue(number: u64, title: &str, labels: &[&str]) -> Issue {
    Issue {
        number,
        title: title.to_string(),
        labels: labels.iter().map(|label| label.to_string()).collect(),
    }
}
