//! Issue tracker access for release notes compilation.
//!
//! Provides token-based authentication and read-only milestone/issue queries
//! through a common trait, so the notes compiler can be tested against a
//! mock tracker.

/// Configuration and authentication for tracker connections.
pub mod config;

/// GitHub API client implementation for GitHub.com and Enterprise.
pub mod github;

/// Common trait for issue tracker abstraction.
pub mod traits;

/// Shared data types for milestones and issues.
pub mod types;
