//! ShapeError for rows crossing the JSON boundary

/// A supplied record does not match the expected row shape.
#[derive(Debug, thiserror::Error)]
pub enum ShapeError {
    /// The input is not valid JSON, or a record is missing a field or has a
    /// field of the wrong type.
    #[error("invalid row data: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level value is not an array of records.
    #[error("expected an array of rows, got {actual}")]
    NotAnArray { actual: &'static str },

    /// A record inside the array failed to parse.
    #[error("row {index}: {source}")]
    Row {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl ShapeError {
    /// Creates an error for a record at the given array index.
    pub fn row(index: usize, source: serde_json::Error) -> Self {
        Self::Row { index, source }
    }
}
