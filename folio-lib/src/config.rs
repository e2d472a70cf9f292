//! Table configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for a dashboard table.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use folio_lib::TableConfig;
///
/// let config = TableConfig::default()
///     .with_page_size(20)
///     .with_save_delay(Duration::from_millis(250))
///     .with_hidden_column("limit");
/// assert_eq!(config.page_size, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Rows per page.
    ///
    /// Default: 10
    pub page_size: usize,

    /// Sizes offered by the rows-per-page picker.
    ///
    /// Default: 10, 20, 30, 40, 50
    pub page_size_options: Vec<usize>,

    /// How long the simulated save takes.
    ///
    /// Default: 1 second
    #[serde(rename = "save_delay_ms", with = "duration_ms")]
    pub save_delay: Duration,

    /// Columns hidden when the table is created.
    ///
    /// Default: none
    pub hidden_columns: Vec<String>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            page_size_options: vec![10, 20, 30, 40, 50],
            save_delay: Duration::from_secs(1),
            hidden_columns: Vec::new(),
        }
    }
}

impl TableConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the simulated save delay.
    pub fn with_save_delay(mut self, delay: Duration) -> Self {
        self.save_delay = delay;
        self
    }

    /// Hides a column on creation.
    pub fn with_hidden_column(mut self, column_id: impl Into<String>) -> Self {
        self.hidden_columns.push(column_id.into());
        self
    }

    /// Returns true if `size` is one of the picker's options.
    pub fn is_offered_page_size(&self, size: usize) -> bool {
        self.page_size_options.contains(&size)
    }
}

mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
