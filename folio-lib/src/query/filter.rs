//! Column filter values.

use crate::table::TableRow;

/// A filter applied to one column's cell text.
///
/// # Example
///
/// ```
/// use folio_lib::query::FilterValue;
///
/// let filter = FilterValue::contains("cover");
/// assert!(filter.matches(Some("Cover page")));
///
/// let filter = FilterValue::one_of(["Done", "In Progress"]);
/// assert!(!filter.matches(Some("Not Started")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// Case-insensitive substring match. The default text filter.
    Contains(String),
    /// Case-insensitive whole-value match.
    Equals(String),
    /// Exact match against any of the given values (faceted filters).
    OneOf(Vec<String>),
}

impl FilterValue {
    /// Creates a substring filter.
    pub fn contains(text: impl Into<String>) -> Self {
        FilterValue::Contains(text.into())
    }

    /// Creates a whole-value filter.
    pub fn equals(text: impl Into<String>) -> Self {
        FilterValue::Equals(text.into())
    }

    /// Creates a set membership filter.
    pub fn one_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterValue::OneOf(values.into_iter().map(Into::into).collect())
    }

    /// Returns true if this value filters nothing and should be removed.
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Contains(text) | FilterValue::Equals(text) => text.is_empty(),
            FilterValue::OneOf(values) => values.is_empty(),
        }
    }

    /// Tests a cell. A missing cell never matches.
    pub fn matches(&self, cell: Option<&str>) -> bool {
        let Some(cell) = cell else { return false };
        match self {
            FilterValue::Contains(text) => cell.to_lowercase().contains(&text.to_lowercase()),
            FilterValue::Equals(text) => cell.to_lowercase() == text.to_lowercase(),
            FilterValue::OneOf(values) => values.iter().any(|v| v == cell),
        }
    }
}

/// Active column filters, in the order they were first set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnFilters {
    filters: Vec<(String, FilterValue)>,
}

impl ColumnFilters {
    /// Creates an empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the filter for a column. `None` or an empty value removes it.
    ///
    /// Returns true if the filter set changed.
    pub fn set(&mut self, column_id: &str, value: Option<FilterValue>) -> bool {
        let position = self.filters.iter().position(|(id, _)| id == column_id);
        match (position, value.filter(|v| !v.is_empty())) {
            (Some(index), Some(value)) => {
                if self.filters[index].1 == value {
                    return false;
                }
                self.filters[index].1 = value;
                true
            }
            (Some(index), None) => {
                self.filters.remove(index);
                true
            }
            (None, Some(value)) => {
                self.filters.push((column_id.to_string(), value));
                true
            }
            (None, None) => false,
        }
    }

    /// Returns the filter for a column.
    pub fn get(&self, column_id: &str) -> Option<&FilterValue> {
        self.filters
            .iter()
            .find(|(id, _)| id == column_id)
            .map(|(_, value)| value)
    }

    /// Iterates over `(column_id, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.filters.iter().map(|(id, value)| (id.as_str(), value))
    }

    /// Removes every filter.
    pub fn clear(&mut self) {
        self.filters.clear();
    }

    /// Returns the number of active filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns true if no filter is active.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Tests a row against every active filter (logical AND).
    pub fn matches<R: TableRow>(&self, row: &R) -> bool {
        self.matches_except(row, None)
    }

    /// Like [`matches`](Self::matches), skipping the filter on `skip_column`.
    pub fn matches_except<R: TableRow>(&self, row: &R, skip_column: Option<&str>) -> bool {
        self.filters
            .iter()
            .filter(|(id, _)| Some(id.as_str()) != skip_column)
            .all(|(id, value)| value.matches(row.cell(id).as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_case_insensitive() {
        let filter = FilterValue::contains("PAGE");
        assert!(filter.matches(Some("Cover page")));
        assert!(!filter.matches(Some("Narrative")));
        assert!(!filter.matches(None));
    }

    #[test]
    fn test_equals_matches_whole_value() {
        let filter = FilterValue::equals("done");
        assert!(filter.matches(Some("Done")));
        assert!(!filter.matches(Some("Done soon")));
    }

    #[test]
    fn test_one_of() {
        let filter = FilterValue::one_of(["Done", "Not Started"]);
        assert!(filter.matches(Some("Done")));
        assert!(!filter.matches(Some("In Progress")));
    }

    #[test]
    fn test_empty_values_remove_filter() {
        let mut filters = ColumnFilters::new();
        assert!(filters.set("status", Some(FilterValue::equals("Done"))));
        assert_eq!(filters.len(), 1);

        assert!(filters.set("status", Some(FilterValue::contains(""))));
        assert!(filters.is_empty());

        assert!(!filters.set("status", None));
        assert!(!filters.set("type", Some(FilterValue::one_of(Vec::<String>::new()))));
    }

    #[test]
    fn test_set_replaces_existing() {
        let mut filters = ColumnFilters::new();
        filters.set("header", Some(FilterValue::contains("a")));
        filters.set("status", Some(FilterValue::equals("Done")));
        assert!(filters.set("header", Some(FilterValue::contains("b"))));
        assert!(!filters.set("header", Some(FilterValue::contains("b"))));

        let columns: Vec<&str> = filters.iter().map(|(id, _)| id).collect();
        assert_eq!(columns, vec!["header", "status"]);
        assert_eq!(filters.get("header"), Some(&FilterValue::contains("b")));
    }
}
