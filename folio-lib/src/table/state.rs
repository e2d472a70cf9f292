//! Table state and derived views.

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::config::TableConfig;
use crate::error::TableError;
use crate::query::{ColumnFilters, Direction, FilterValue, Pagination, SortSpec, alphanumeric_cmp};
use crate::reorder::{self, DragEnd, KeyboardMove};

use super::column::Column;
use super::selection::{PageSelection, Selection};
use super::TableRow;

/// State for one interactive table.
///
/// `TableState` manages a fixed set of rows with:
/// - Stored row order, changed only by drag reordering
/// - Key-based selection with page-scoped "select all"
/// - A display-only sort (stable; ties keep stored order)
/// - Per-column filters, AND-combined
/// - Column visibility
/// - Pagination with clamping
///
/// Mutations take `&mut self`; reads recompute from scratch every call.
#[derive(Debug, Clone)]
pub struct TableState<R: TableRow> {
    /// Rows in stored order.
    rows: Vec<R>,
    /// Column definitions.
    columns: Vec<Column>,
    /// Selection state (by row key).
    selection: Selection<R::Key>,
    /// Current sort.
    sort: SortSpec,
    /// Active column filters.
    filters: ColumnFilters,
    /// Column id -> visible. Missing entries are visible.
    visibility: HashMap<String, bool>,
    /// Page cursor.
    pagination: Pagination,
}

impl<R: TableRow> TableState<R> {
    /// Create a table with column definitions and initial rows.
    ///
    /// Fails if two rows share a key.
    pub fn new(columns: Vec<Column>, rows: Vec<R>) -> Result<Self, TableError> {
        Self::with_config(columns, rows, &TableConfig::default())
    }

    /// Create a table using the page size and hidden columns from `config`.
    pub fn with_config(
        columns: Vec<Column>,
        rows: Vec<R>,
        config: &TableConfig,
    ) -> Result<Self, TableError> {
        check_unique_keys(&rows)?;
        let mut state = Self {
            rows,
            columns,
            selection: Selection::new(),
            sort: SortSpec::none(),
            filters: ColumnFilters::new(),
            visibility: HashMap::new(),
            pagination: Pagination::new(config.page_size),
        };
        for column_id in &config.hidden_columns {
            state.set_column_visible(column_id, false);
        }
        Ok(state)
    }

    // -------------------------------------------------------------------------
    // Rows
    // -------------------------------------------------------------------------

    /// Replace the row sequence.
    ///
    /// Selection, sort, filters and visibility are kept; the page index is
    /// re-clamped. Rows with duplicate keys are rejected and nothing changes.
    pub fn set_rows(&mut self, rows: Vec<R>) -> Result<(), TableError> {
        check_unique_keys(&rows)?;
        debug!("TableState: set {} rows", rows.len());
        self.rows = rows;
        self.clamp_page();
        Ok(())
    }

    /// Get the rows in stored order.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Get the keys in stored order.
    pub fn row_keys(&self) -> Vec<R::Key> {
        self.rows.iter().map(TableRow::key).collect()
    }

    /// Find a row by key.
    pub fn row(&self, key: &R::Key) -> Option<&R> {
        self.rows.iter().find(|row| &row.key() == key)
    }

    /// Get the stored position of a row.
    pub fn index_of(&self, key: &R::Key) -> Option<usize> {
        self.rows.iter().position(|row| &row.key() == key)
    }

    /// Get the number of rows (unfiltered).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Replace the fields of the row with the same key.
    ///
    /// The row keeps its position. Returns false if no row has that key.
    pub fn update_row(&mut self, row: R) -> bool {
        let key = row.key();
        let Some(index) = self.index_of(&key) else {
            debug!("TableState: update for unknown row {}", key);
            return false;
        };
        self.rows[index] = row;
        self.clamp_page();
        true
    }

    // -------------------------------------------------------------------------
    // Reordering
    // -------------------------------------------------------------------------

    /// Move `dragged` to the stored position of `target`.
    ///
    /// Returns false (and changes nothing) if the keys are equal or either
    /// row is missing.
    pub fn move_row(&mut self, dragged: &R::Key, target: &R::Key) -> bool {
        let keys = self.row_keys();
        match reorder::positions(&keys, dragged, target) {
            Some((from, to)) => {
                debug!("TableState: move row {} from {} to {}", dragged, from, to);
                reorder::move_item(&mut self.rows, from, to);
                true
            }
            None => {
                debug!("TableState: ignored move {} -> {}", dragged, target);
                false
            }
        }
    }

    /// Apply a pointer or touch drag-end event.
    pub fn apply_drag_end(&mut self, event: &DragEnd<R::Key>) -> bool {
        match &event.over {
            Some(over) => self.move_row(&event.active, over),
            None => false,
        }
    }

    /// Move a row one step up or down in stored order (keyboard sensor).
    pub fn move_row_step(&mut self, key: &R::Key, step: KeyboardMove) -> bool {
        let keys = self.row_keys();
        match reorder::step_target(&keys, key, step) {
            Some(target) => self.move_row(key, &target),
            None => false,
        }
    }

    // -------------------------------------------------------------------------
    // Columns
    // -------------------------------------------------------------------------

    /// Get the column definitions.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Find a column by id.
    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    /// Get the columns that should be rendered, in definition order.
    pub fn visible_columns(&self) -> Vec<&Column> {
        self.columns
            .iter()
            .filter(|c| self.is_column_visible(&c.id))
            .collect()
    }

    /// Get the columns offered in the column picker.
    pub fn hideable_columns(&self) -> Vec<&Column> {
        self.columns.iter().filter(|c| c.hideable).collect()
    }

    /// Check if a column is visible.
    pub fn is_column_visible(&self, column_id: &str) -> bool {
        self.visibility.get(column_id).copied().unwrap_or(true)
    }

    /// Get the explicit visibility entries.
    pub fn column_visibility(&self) -> &HashMap<String, bool> {
        &self.visibility
    }

    /// Show or hide a column.
    ///
    /// Hidden columns still take part in sorting and filtering. Unknown
    /// columns, and hiding a column that is not hideable, are ignored.
    /// Returns true if visibility changed.
    pub fn set_column_visible(&mut self, column_id: &str, visible: bool) -> bool {
        let Some(column) = self.column(column_id) else {
            debug!("TableState: visibility for unknown column '{}'", column_id);
            return false;
        };
        if !visible && !column.hideable {
            debug!("TableState: column '{}' cannot be hidden", column_id);
            return false;
        }
        let previous = self.is_column_visible(column_id);
        self.visibility.insert(column_id.to_string(), visible);
        previous != visible
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Get the current sort.
    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    /// Replace the active sort with a single key, or clear it with `None`.
    ///
    /// Unknown and unsortable columns are ignored. Returns true if the sort
    /// changed.
    pub fn set_sort(&mut self, column_id: &str, direction: Option<Direction>) -> bool {
        let next = match direction {
            Some(direction) => {
                if !self.column(column_id).is_some_and(|c| c.sortable) {
                    debug!("TableState: column '{}' is not sortable", column_id);
                    return false;
                }
                match direction {
                    Direction::Asc => SortSpec::asc(column_id),
                    Direction::Desc => SortSpec::desc(column_id),
                }
            }
            None => SortSpec::none(),
        };
        self.set_sort_spec(next)
    }

    /// Replace the whole sort spec (multi-column sorting).
    pub fn set_sort_spec(&mut self, sort: SortSpec) -> bool {
        if self.sort == sort {
            return false;
        }
        self.sort = sort;
        true
    }

    /// Cycle a header click: unsorted -> ascending -> descending -> unsorted.
    ///
    /// Returns the new direction for the column.
    pub fn toggle_sort(&mut self, column_id: &str) -> Option<Direction> {
        let next = match self.sort.direction_of(column_id) {
            None => Some(Direction::Asc),
            Some(Direction::Asc) => Some(Direction::Desc),
            Some(Direction::Desc) => None,
        };
        self.set_sort(column_id, next);
        self.sort.direction_of(column_id)
    }

    // -------------------------------------------------------------------------
    // Filtering
    // -------------------------------------------------------------------------

    /// Get the active filters.
    pub fn filters(&self) -> &ColumnFilters {
        &self.filters
    }

    /// Replace the filter for one column. `None` or an empty value removes it.
    ///
    /// Unknown columns are ignored. Re-clamps the page index. Returns true if the filters changed.
    pub fn set_column_filter(&mut self, column_id: &str, value: Option<FilterValue>) -> bool {
        if self.column(column_id).is_none() {
            debug!("TableState: filter for unknown column '{}'", column_id);
            return false;
        }
        let changed = self.filters.set(column_id, value);
        if changed {
            self.clamp_page();
        }
        changed
    }

    /// Remove every filter.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    /// Distinct cell values of a column with their counts, in alphanumeric order.
    ///
    /// Counted over rows that pass every filter except the column's own, so a
    /// faceted picker keeps offering values that are currently filtered out.
    pub fn faceted_values(&self, column_id: &str) -> Vec<(String, usize)> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for row in &self.rows {
            if !self.filters.matches_except(row, Some(column_id)) {
                continue;
            }
            if let Some(cell) = row.cell(column_id) {
                *counts.entry(cell.into_owned()).or_default() += 1;
            }
        }
        let mut values: Vec<(String, usize)> = counts.into_iter().collect();
        values.sort_by(|a, b| alphanumeric_cmp(&a.0, &b.0).then_with(|| a.0.cmp(&b.0)));
        values
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Get the page cursor.
    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// Get the zero-based page index.
    pub fn page_index(&self) -> usize {
        self.pagination.page_index()
    }

    /// Get the page size.
    pub fn page_size(&self) -> usize {
        self.pagination.page_size()
    }

    /// Get the number of pages over the filtered rows.
    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.filtered_count())
    }

    /// Go to a page, clamped to the last valid page.
    pub fn set_page(&mut self, page_index: usize) -> bool {
        let total = self.filtered_count();
        self.pagination.set_page(page_index, total)
    }

    /// Change the page size; the page index is clamped to the new last page.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<bool, TableError> {
        if page_size == 0 {
            return Err(TableError::ZeroPageSize);
        }
        let total = self.filtered_count();
        Ok(self.pagination.set_page_size(page_size, total))
    }

    /// Check if there is a page before the current one.
    pub fn can_previous_page(&self) -> bool {
        self.page_index() > 0
    }

    /// Check if there is a page after the current one.
    pub fn can_next_page(&self) -> bool {
        self.page_index() + 1 < self.page_count()
    }

    /// Go to the next page, if any.
    pub fn next_page(&mut self) -> bool {
        self.can_next_page() && self.set_page(self.page_index() + 1)
    }

    /// Go to the previous page, if any.
    pub fn previous_page(&mut self) -> bool {
        self.can_previous_page() && self.set_page(self.page_index() - 1)
    }

    /// Go to the first page.
    pub fn first_page(&mut self) -> bool {
        self.set_page(0)
    }

    /// Go to the last page.
    pub fn last_page(&mut self) -> bool {
        self.set_page(usize::MAX)
    }

    fn clamp_page(&mut self) {
        let total = self.filtered_count();
        if self.pagination.clamp(total) {
            debug!("TableState: page index clamped to {}", self.pagination.page_index());
        }
    }

    // -------------------------------------------------------------------------
    // Derived views
    // -------------------------------------------------------------------------

    /// Rows passing every filter, in display order, across all pages.
    ///
    /// The sort is stable: rows with equal sort keys keep stored order.
    pub fn filtered_rows(&self) -> Vec<&R> {
        let mut rows: Vec<&R> = self.rows.iter().filter(|r| self.filters.matches(*r)).collect();
        if !self.sort.is_empty() {
            rows.sort_by(|a, b| self.sort.compare(*a, *b));
        }
        rows
    }

    /// Get the number of rows passing every filter.
    pub fn filtered_count(&self) -> usize {
        self.rows.iter().filter(|r| self.filters.matches(*r)).count()
    }

    /// Rows on the current page, in display order.
    ///
    /// Never longer than the page size and never contains a filtered-out row.
    pub fn visible_rows(&self) -> Vec<&R> {
        let rows = self.filtered_rows();
        let range = self.pagination.range(rows.len());
        rows[range].to_vec()
    }

    /// Keys of the rows on the current page.
    pub fn visible_keys(&self) -> Vec<R::Key> {
        self.visible_rows().into_iter().map(TableRow::key).collect()
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Select or deselect one row.
    ///
    /// Returns false if the row does not exist or was already in that state.
    pub fn toggle_row_selected(&mut self, key: &R::Key, selected: bool) -> bool {
        if self.index_of(key).is_none() {
            debug!("TableState: selection for unknown row {}", key);
            return false;
        }
        self.selection.set(key.clone(), selected)
    }

    /// Select or deselect exactly the rows on the current page.
    ///
    /// Rows on other pages are untouched. Returns the number of rows whose
    /// state changed.
    pub fn toggle_all_on_page(&mut self, selected: bool) -> usize {
        let keys = self.visible_keys();
        self.selection.set_all(&keys, selected)
    }

    /// State of the page's "select all" checkbox.
    pub fn page_selection(&self) -> PageSelection {
        self.selection.coverage(&self.visible_keys())
    }

    /// Check if a row is selected.
    pub fn is_selected(&self, key: &R::Key) -> bool {
        self.selection.is_selected(key)
    }

    /// Selected rows in stored order.
    pub fn selected_rows(&self) -> Vec<&R> {
        self.rows
            .iter()
            .filter(|row| self.selection.is_selected(&row.key()))
            .collect()
    }

    /// Get the number of selected rows still present in the table.
    pub fn selected_count(&self) -> usize {
        self.selected_rows().len()
    }

    /// Deselect everything.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }
}

fn check_unique_keys<R: TableRow>(rows: &[R]) -> Result<(), TableError> {
    let mut seen = HashSet::with_capacity(rows.len());
    for row in rows {
        let key = row.key();
        if !seen.insert(key.clone()) {
            return Err(TableError::duplicate_key(key.to_string()));
        }
    }
    Ok(())
}
