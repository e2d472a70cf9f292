//! TableError for table state mutations

/// Error type for operations on [`TableState`](crate::table::TableState).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// Two rows share the same key; keys must be unique across the row set.
    #[error("duplicate row key '{key}'")]
    DuplicateKey { key: String },

    /// A page size of zero was requested.
    #[error("page size must be at least 1")]
    ZeroPageSize,
}

impl TableError {
    /// Creates a new duplicate key error.
    pub fn duplicate_key(key: impl Into<String>) -> Self {
        Self::DuplicateKey { key: key.into() }
    }
}
