//! The dashboard row record.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::options::UNASSIGNED_REVIEWER;
use super::status::Status;
use crate::table::{Column, TableRow};

/// One section of the dashboard outline.
///
/// `target` and `limit` look numeric but are kept as the text the user typed;
/// sorting compares them alphanumerically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Stable identity, unique within a table.
    pub id: u32,
    pub header: String,
    /// Section type label (see [`SECTION_TYPES`](super::SECTION_TYPES)).
    #[serde(rename = "type")]
    pub kind: String,
    pub status: Status,
    pub target: String,
    pub limit: String,
    /// Reviewer name, or [`UNASSIGNED_REVIEWER`].
    pub reviewer: String,
}

impl Row {
    /// Creates a not-started, unassigned row with zero target and limit.
    pub fn new(id: u32, header: impl Into<String>) -> Self {
        Self {
            id,
            header: header.into(),
            kind: "Narrative".to_string(),
            status: Status::NotStarted,
            target: "0".to_string(),
            limit: "0".to_string(),
            reviewer: UNASSIGNED_REVIEWER.to_string(),
        }
    }

    /// Sets the section type.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Sets the target.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Sets the limit.
    pub fn with_limit(mut self, limit: impl Into<String>) -> Self {
        self.limit = limit.into();
        self
    }

    /// Sets the reviewer.
    pub fn with_reviewer(mut self, reviewer: impl Into<String>) -> Self {
        self.reviewer = reviewer.into();
        self
    }

    /// Returns true if a real reviewer is assigned.
    pub fn is_assigned(&self) -> bool {
        self.reviewer != UNASSIGNED_REVIEWER
    }

    /// Returns the reviewer name, or `None` for the placeholder.
    pub fn assigned_reviewer(&self) -> Option<&str> {
        self.is_assigned().then_some(self.reviewer.as_str())
    }

    /// Column definitions for the dashboard table.
    ///
    /// The header column names the row and cannot be hidden.
    pub fn columns() -> Vec<Column> {
        vec![
            Column::new("header", "Header").always_visible(),
            Column::new("type", "Section Type"),
            Column::new("status", "Status"),
            Column::new("target", "Target"),
            Column::new("limit", "Limit"),
            Column::new("reviewer", "Reviewer"),
        ]
    }
}

impl TableRow for Row {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }

    fn cell(&self, column_id: &str) -> Option<Cow<'_, str>> {
        match column_id {
            "id" => Some(Cow::Owned(self.id.to_string())),
            "header" => Some(Cow::Borrowed(&self.header)),
            "type" => Some(Cow::Borrowed(&self.kind)),
            "status" => Some(Cow::Borrowed(self.status.label())),
            "target" => Some(Cow::Borrowed(&self.target)),
            "limit" => Some(Cow::Borrowed(&self.limit)),
            "reviewer" => Some(Cow::Borrowed(&self.reviewer)),
            _ => None,
        }
    }

    fn label(&self) -> String {
        self.header.clone()
    }
}
