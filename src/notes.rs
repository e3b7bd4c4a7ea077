//! Release notes compilation from closed tracker issues.
//!
//! A release's notes are the closed issues on its milestone, classified by
//! type and priority labels, sorted by priority, and rendered two ways: an
//! HTML table spliced into the in-app release notes plugin, and a markdown
//! table for the tracker's release page.

/// Issue classification from tracker labels, and priority ordering.
pub mod classify;

/// Orchestration: milestone lookup, fetching, classifying, rendering.
pub mod compiler;

/// Splicing generated notes into the in-app plugin source.
pub mod plugin;

/// Tera templates for the HTML and markdown tables.
pub mod render;
