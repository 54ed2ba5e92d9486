//! Error types for docsite kernel operations.

use crate::nav::NodeId;
use crate::search::SearchResultCategory;

/// Errors arising from malformed navigation or search input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DocsiteError {
    /// A navigation node appears as its own descendant.
    ///
    /// `path` lists the keys from the top level down to the repeated node.
    #[error("navigation cycle: {} revisits an ancestor", .path.join(" > "))]
    Cycle { path: Vec<String> },

    /// A search result's meta payload does not belong to its category.
    #[error("meta mismatch on result `{id}`: category {category} but meta carries {}", describe_found(.found))]
    MetaMismatch {
        id: String,
        category: SearchResultCategory,
        found: Vec<SearchResultCategory>,
    },

    /// A search result's meta slot for its own category is malformed, e.g. a
    /// required field is missing.
    #[error("meta mismatch on result `{id}`: malformed meta for category {category}: {reason}")]
    MalformedMeta {
        id: String,
        category: SearchResultCategory,
        reason: String,
    },

    /// A search record lacks a usable id, category, url or score.
    ///
    /// `id` falls back to `#<index>` when the record has no string id.
    #[error("malformed search record `{id}`: {reason}")]
    MalformedRecord { id: String, reason: String },

    /// A search result's score is NaN or infinite.
    #[error("non-finite score on result `{id}`")]
    NonFiniteScore { id: String },

    /// A node id does not belong to the tree it was used with.
    #[error("unknown navigation node: {0}")]
    UnknownNode(NodeId),

    /// The site manifest cannot be turned into a navigation tree.
    #[error("invalid site manifest: {0}")]
    InvalidSite(String),
}

fn describe_found(found: &[SearchResultCategory]) -> String {
    if found.is_empty() {
        return "nothing".to_string();
    }
    found
        .iter()
        .map(|category| category.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Which kind of skip an aggregation warning records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    MetaMismatch,
    NonFiniteScore,
    MalformedRecord,
}

/// A recoverable problem reported alongside an aggregation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationWarning {
    pub kind: WarningKind,
    pub result_id: String,
    pub message: String,
}

impl AggregationWarning {
    /// Builds a warning from a skipped record's error.
    ///
    /// Returns `None` for errors that are not record-level skips.
    pub fn from_error(error: &DocsiteError) -> Option<Self> {
        let (kind, result_id) = match error {
            DocsiteError::MetaMismatch { id, .. } | DocsiteError::MalformedMeta { id, .. } => {
                (WarningKind::MetaMismatch, id.clone())
            }
            DocsiteError::MalformedRecord { id, .. } => (WarningKind::MalformedRecord, id.clone()),
            DocsiteError::NonFiniteScore { id } => (WarningKind::NonFiniteScore, id.clone()),
            _ => return None,
        };
        Some(Self {
            kind,
            result_id,
            message: error.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_message_names_key_path() {
        let err = DocsiteError::Cycle {
            path: vec!["components".into(), "x".into(), "x".into()],
        };
        assert_eq!(
            err.to_string(),
            "navigation cycle: components > x > x revisits an ancestor"
        );
    }

    #[test]
    fn mismatch_message_lists_found_payloads() {
        let err = DocsiteError::MetaMismatch {
            id: "r1".into(),
            category: SearchResultCategory::Icons,
            found: vec![SearchResultCategory::Components],
        };
        assert_eq!(
            err.to_string(),
            "meta mismatch on result `r1`: category icons but meta carries components"
        );
    }

    #[test]
    fn only_record_errors_become_warnings() {
        let skip = DocsiteError::NonFiniteScore { id: "r2".into() };
        let warning = AggregationWarning::from_error(&skip).expect("record-level error");
        assert_eq!(warning.kind, WarningKind::NonFiniteScore);
        assert_eq!(warning.result_id, "r2");

        let shape = DocsiteError::MalformedMeta {
            id: "r3".into(),
            category: SearchResultCategory::Tokens,
            reason: "missing field `token`".into(),
        };
        let warning = AggregationWarning::from_error(&shape).expect("record-level error");
        assert_eq!(warning.kind, WarningKind::MetaMismatch);

        let envelope = DocsiteError::MalformedRecord {
            id: "#4".into(),
            reason: "missing field `url`".into(),
        };
        let warning = AggregationWarning::from_error(&envelope).expect("record-level error");
        assert_eq!(warning.kind, WarningKind::MalformedRecord);
        assert_eq!(warning.result_id, "#4");

        let fatal = DocsiteError::Cycle { path: vec![] };
        assert!(AggregationWarning::from_error(&fatal).is_none());
    }
}
