//! Configuration for issue tracker connections.
use secrecy::SecretString;

/// Default page size for paginated issue queries.
pub const DEFAULT_PAGE_SIZE: u8 = 100;

/// Remote tracker connection configuration for authenticating and querying
/// the project's issue tracker.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Tracker host (e.g., "github.com").
    pub host: String,
    /// URL scheme (http or https).
    pub scheme: String,
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Access token for authentication.
    pub token: SecretString,
    /// Base URL for issue links in rendered notes.
    pub issue_link_base_url: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            host: "".to_string(),
            scheme: "".to_string(),
            owner: "".to_string(),
            repo: "".to_string(),
            token: SecretString::from("".to_string()),
            issue_link_base_url: "".to_string(),
        }
    }
}
