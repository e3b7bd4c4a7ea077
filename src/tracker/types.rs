//! Shared data types for milestones and issues.

/// A tracker milestone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    /// Tracker-assigned milestone number, used for issue queries.
    pub number: u64,
    /// Milestone title; release versions map onto these.
    pub title: String,
}

/// An issue with its labels, as fetched from the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    /// Label names exactly as the tracker reports them.
    pub labels: Vec<String>,
}
