//! Row progress status.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Progress status of a row.
///
/// Serialized as its display label (`"In Progress"`, not `"InProgress"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "Done")]
    Done,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Not Started")]
    NotStarted,
}

impl Status {
    /// All statuses in picker order.
    pub const ALL: [Status; 3] = [Status::Done, Status::InProgress, Status::NotStarted];

    /// Returns the display label.
    pub fn label(self) -> &'static str {
        match self {
            Status::Done => "Done",
            Status::InProgress => "In Progress",
            Status::NotStarted => "Not Started",
        }
    }

    /// Returns true if the work is finished.
    pub fn is_done(self) -> bool {
        self == Status::Done
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The label does not name a known status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for Status {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}
