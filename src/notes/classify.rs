//! Issue classification based on tracker labels.
use serde::Serialize;

use crate::{error::RelkitError, result::Result, tracker::types::Issue};

/// Issue categories shown in the Type column of release notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    Enhancement,
    Bug,
    Task,
    Unknown,
}

impl IssueKind {
    /// Derive the kind from the issue's labels. The first label that names a
    /// known kind wins; issues without one still appear in the notes, marked
    /// with an unknown type.
    pub fn from_labels(labels: &[String]) -> Self {
        for label in labels {
            match label.as_str() {
                "enhancement" => return Self::Enhancement,
                "bug" => return Self::Bug,
                "task" => return Self::Task,
                _ => {}
            }
        }

        Self::Unknown
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enhancement => "enhancement",
            Self::Bug => "bug",
            Self::Task => "task",
            Self::Unknown => "Unknown type",
        }
    }
}

impl Serialize for IssueKind {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            IssueKind::Enhancement => serializer.serialize_unit_variant(
                "IssueKind",
                0,
                "enhancement",
            ),
            IssueKind::Bug => {
                serializer.serialize_unit_variant("IssueKind", 1, "bug")
            }
            IssueKind::Task => {
                serializer.serialize_unit_variant("IssueKind", 2, "task")
            }
            IssueKind::Unknown => serializer.serialize_unit_variant(
                "IssueKind",
                3,
                "Unknown type",
            ),
        }
    }
}

/// Issue urgency shown in the Priority column and used for ordering.
///
/// The label scheme writes these as `prio-critical`, `prio-high`, and so on;
/// anything else derived from a `prio` label is [`Priority::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
    Unknown,
}

impl Priority {
    /// Derive the priority from the first `prio`-prefixed label, with the
    /// prefix and its separator stripped.
    pub fn from_labels(labels: &[String]) -> Self {
        for label in labels {
            if label.starts_with("prio") {
                return match label.get(5..).unwrap_or("") {
                    "critical" => Self::Critical,
                    "high" => Self::High,
                    "medium" => Self::Medium,
                    "low" => Self::Low,
                    _ => Self::Unknown,
                };
            }
        }

        Self::Unknown
    }

    /// Sort rank. `None` for priorities outside the ranking table.
    pub fn rank(&self) -> Option<u8> {
        match self {
            Self::Critical => Some(0),
            Self::High => Some(1),
            Self::Medium => Some(2),
            Self::Low => Some(3),
            Self::Unknown => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Unknown => "Unknown priority",
        }
    }
}

impl Serialize for Priority {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Priority::Critical => {
                serializer.serialize_unit_variant("Priority", 0, "critical")
            }
            Priority::High => {
                serializer.serialize_unit_variant("Priority", 1, "high")
            }
            Priority::Medium => {
                serializer.serialize_unit_variant("Priority", 2, "medium")
            }
            Priority::Low => {
                serializer.serialize_unit_variant("Priority", 3, "low")
            }
            Priority::Unknown => serializer.serialize_unit_variant(
                "Priority",
                4,
                "Unknown priority",
            ),
        }
    }
}

/// An issue joined with its derived kind and priority, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedIssue {
    pub number: u64,
    pub title: String,
    pub kind: IssueKind,
    pub priority: Priority,
}

/// Classify a fetched issue.
pub fn classify(issue: &Issue) -> ClassifiedIssue {
    ClassifiedIssue {
        number: issue.number,
        title: issue.title.clone(),
        kind: IssueKind::from_labels(&issue.labels),
        priority: Priority::from_labels(&issue.labels),
    }
}

/// Order issues by priority rank, keeping fetch order within a rank.
///
/// Fails loudly when any issue carries a priority outside the ranking table
/// so that mislabeled issues get fixed instead of sorting somewhere
/// arbitrary.
pub fn sort_by_priority(
    issues: Vec<ClassifiedIssue>,
) -> Result<Vec<ClassifiedIssue>> {
    let mut ranked: Vec<(u8, ClassifiedIssue)> =
        Vec::with_capacity(issues.len());

    for issue in issues {
        let rank = issue.priority.rank().ok_or_else(|| {
            RelkitError::unranked_priority(
                issue.number,
                issue.priority.as_str(),
            )
        })?;
        ranked.push((rank, issue));
    }

    ranked.sort_by_key(|(rank, _)| *rank);

    Ok(ranked.into_iter().map(|(_, issue)| issue).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::create_test_issue;

    #[test]
    fn derives_kind_from_first_matching_label() {
        let issue = create_test_issue(1, "a", &["wontfix", "task", "bug"]);
        assert_eq!(
            IssueKind::from_labels(&issue.labels),
            IssueKind::Task
        );
    }

    #[test]
    fn unlabeled_issues_report_unknown_kind_and_priority() {
        let classified = classify(&create_test_issue(2, "b", &[]));
        assert_eq!(classified.kind, IssueKind::Unknown);
        assert_eq!(classified.kind.as_str(), "Unknown type");
        assert_eq!(classified.priority, Priority::Unknown);
        assert_eq!(classified.priority.as_str(), "Unknown priority");
    }

    #[test]
    fn derives_priority_regardless_of_separator() {
        for label in ["prio-high", "prio:high", "prio high"] {
            let issue = create_test_issue(3, "c", &["bug", label]);
            assert_eq!(
                Priority::from_labels(&issue.labels),
                Priority::High,
                "label {label:?}"
            );
        }
    }

    #[test]
    fn unrecognized_priority_value_is_unknown() {
        let issue = create_test_issue(4, "d", &["prio-blocker"]);
        assert_eq!(Priority::from_labels(&issue.labels), Priority::Unknown);
    }

    #[test]
    fn sorts_by_priority_rank() {
        let issues: Vec<ClassifiedIssue> = [
            (1, &["bug", "prio-low"][..]),
            (2, &["bug", "prio-critical"]),
            (3, &["enhancement", "prio-medium"]),
            (4, &["task", "prio-high"]),
        ]
        .iter()
        .map(|(number, labels)| {
            classify(&create_test_issue(*number, "t", labels))
        })
        .collect();

        let sorted = sort_by_priority(issues).unwrap();

        let order: Vec<u64> = sorted.iter().map(|i| i.number).collect();
        assert_eq!(order, vec![2, 4, 3, 1]);
    }

    #[test]
    fn sort_is_stable_within_a_rank() {
        let issues: Vec<ClassifiedIssue> = [
            (10, &["bug", "prio-high"][..]),
            (11, &["bug", "prio-critical"]),
            (12, &["task", "prio-high"]),
            (13, &["bug", "prio-high"]),
        ]
        .iter()
        .map(|(number, labels)| {
            classify(&create_test_issue(*number, "t", labels))
        })
        .collect();

        let sorted = sort_by_priority(issues).unwrap();

        let order: Vec<u64> = sorted.iter().map(|i| i.number).collect();
        // fetch order preserved among the three high issues
        assert_eq!(order, vec![11, 10, 12, 13]);
    }

    #[test]
    fn unranked_priority_fails_the_sort() {
        let issues = vec![
            classify(&create_test_issue(20, "ok", &["bug", "prio-high"])),
            classify(&create_test_issue(21, "bad", &["bug"])),
        ];

        let err = sort_by_priority(issues).unwrap_err();
        let domain = err.downcast_ref::<RelkitError>().unwrap();

        assert!(matches!(
            domain,
            RelkitError::UnrankedPriority { issue: 21, .. }
        ));
        assert!(err.to_string().contains("issue #21"));
    }
}
