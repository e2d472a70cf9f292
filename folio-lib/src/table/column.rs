//! Column definitions.

/// A table column definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    /// Unique identifier, also the key passed to [`TableRow::cell`](super::TableRow::cell).
    pub id: String,
    /// Header text.
    pub header: String,
    /// Whether clicking the header sorts by this column.
    pub sortable: bool,
    /// Whether the column can be hidden from the column picker.
    pub hideable: bool,
}

impl Column {
    /// Create a sortable, hideable column.
    pub fn new(id: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            sortable: true,
            hideable: true,
        }
    }

    /// Disable sorting on this column.
    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Keep this column visible at all times.
    pub fn always_visible(mut self) -> Self {
        self.hideable = false;
        self
    }
}
