//! Task execution for relkit.
//!
//! This module contains the implementation of all CLI tasks available in
//! relkit. Each task covers one step of developing, packaging, or releasing
//! the application.
//!
//! # Architecture
//!
//! The task system is organized into distinct modules:
//!
//! - **common**: Shared process-spawning helpers used across multiple tasks
//! - **development**: `test`, `clean`, `devel`, and `deps` keep a working
//!   copy healthy
//! - **maintenance**: `version` and `vendor` rewrite generated and bundled
//!   sources in place
//! - **distribution**: `install`, `register`, `sdist`, `wininst`, and
//!   `release-notes` drive the packaging tool and the issue tracker
//!
//! Each task module follows a consistent pattern:
//! 1. Load the project configuration
//! 2. Validate task preconditions
//! 3. Execute the task-specific workflow
//! 4. Propagate errors with enough context to act on
//!
//! # Error Handling
//!
//! All tasks use the unified error handling provided by the `result` module.
//! External tools run with inherited stdio, so their own output is the
//! primary diagnostic; relkit adds the rendered command line when an exit
//! status is non-zero.

/// Shared process-spawning helpers used across multiple tasks.
pub mod common;

/// Build-product cleanup.
pub mod clean;

/// Development dependency installation.
pub mod deps;

/// Development app runner.
pub mod devel;

/// Application installation with a GUI toolkit precondition check.
pub mod install;

/// Package index registration.
pub mod register;

/// Markdown release notes printed to stdout.
pub mod release_notes;

/// Source distribution builds, including the release notes plugin refresh.
pub mod sdist;


/// Bundled-library refresh from the upstream repository.
pub mod vendor;

/// Version module writer.
pub mod version;

/// Windows installer builds.
pub mod wininst;
