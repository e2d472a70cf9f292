//! SaveError for row saves

/// Error returned by a [`RowSaver`](crate::detail::RowSaver).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveError {
    /// The save was rejected.
    #[error("save rejected: {reason}")]
    Rejected { reason: String },

    /// The save task ended before reporting an outcome.
    #[error("save task aborted")]
    Aborted,

    /// Submit was called on a view that is not open.
    #[error("detail view is not open")]
    NotOpen,

    /// The edit buffer's key differs from the row that was opened.
    #[error("row key changed from {original} to {edited}")]
    KeyChanged { original: String, edited: String },
}

impl SaveError {
    /// Creates a new rejection error.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }
}
