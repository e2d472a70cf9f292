//! Plain-text rendering of the table's visible page.

use std::fmt::Write;

use folio_lib::table::{PageSelection, TableRow};
use folio_lib::{Row, TableState};

/// Render the current page: header, rows and the footer lines.
pub fn page(table: &TableState<Row>) -> String {
    let columns = table.visible_columns();
    let rows = table.visible_rows();

    let mut cells: Vec<Vec<String>> = Vec::with_capacity(rows.len() + 1);
    let mut header = vec!["id".to_string()];
    header.extend(columns.iter().map(|c| c.header.clone()));
    cells.push(header);
    for row in &rows {
        let mut line = vec![row.id.to_string()];
        line.extend(
            columns
                .iter()
                .map(|c| row.cell(&c.id).map(|v| v.into_owned()).unwrap_or_default()),
        );
        cells.push(line);
    }

    let widths = column_widths(&cells);
    let mut out = String::new();
    for (i, line) in cells.iter().enumerate() {
        let mark = match i {
            0 => page_mark(table.page_selection()),
            _ => row_mark(table.is_selected(&rows[i - 1].key())),
        };
        let padded: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
            .collect();
        let _ = writeln!(out, "{} {}", mark, padded.join("  ").trim_end());
    }
    if rows.is_empty() {
        let _ = writeln!(out, "No results.");
    }

    let _ = writeln!(
        out,
        "{} of {} row(s) selected.",
        table.selected_count(),
        table.filtered_count()
    );
    let _ = writeln!(
        out,
        "Page {} of {}",
        table.page_index() + 1,
        table.page_count().max(1)
    );
    out
}

fn column_widths(cells: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = Vec::new();
    for line in cells {
        for (i, cell) in line.iter().enumerate() {
            let len = cell.chars().count();
            match widths.get_mut(i) {
                Some(w) => *w = (*w).max(len),
                None => widths.push(len),
            }
        }
    }
    widths
}

fn page_mark(selection: PageSelection) -> &'static str {
    match selection {
        PageSelection::None => "[ ]",
        PageSelection::Some => "[-]",
        PageSelection::All => "[x]",
    }
}

fn row_mark(selected: bool) -> &'static str {
    if selected { "[x]" } else { "[ ]" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_lib::TableConfig;
    use folio_lib::model::{Status, dashboard_table};

    fn table() -> TableState<Row> {
        let rows = vec![
            Row::new(1, "Cover page").with_status(Status::Done),
            Row::new(2, "Table of contents"),
            Row::new(3, "Executive summary"),
        ];
        dashboard_table(rows, &TableConfig::new().with_page_size(2)).unwrap()
    }

    #[test]
    fn test_page_lists_visible_rows() {
        let out = page(&table());
        assert!(out.contains("Cover page"));
        assert!(out.contains("Table of contents"));
        assert!(!out.contains("Executive summary"));
        assert!(out.contains("0 of 3 row(s) selected."));
        assert!(out.contains("Page 1 of 2"));
    }

    #[test]
    fn test_page_marks_selection() {
        let mut table = table();
        table.toggle_row_selected(&1, true);
        let out = page(&table);
        let first = out.lines().next().unwrap();
        assert!(first.starts_with("[-]"));
        assert!(out.lines().any(|l| l.starts_with("[x] 1")));
    }

    #[test]
    fn test_hidden_column_not_rendered() {
        let mut table = table();
        table.set_column_visible("reviewer", false);
        assert!(!page(&table).contains("Reviewer"));
    }

    #[test]
    fn test_empty_page() {
        let mut table = table();
        table.set_column_filter(
            "header",
            Some(folio_lib::query::FilterValue::contains("nothing matches")),
        );
        let out = page(&table);
        assert!(out.contains("No results."));
        assert!(out.contains("Page 1 of 1"));
    }
}
