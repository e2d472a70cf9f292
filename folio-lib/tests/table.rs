//! Tests for the table engine.

use folio_lib::TableConfig;
use folio_lib::error::TableError;
use folio_lib::model::{Row, Status, assigned_reviewers, dashboard_table};
use folio_lib::query::{Direction, FilterValue, SortSpec};
use folio_lib::reorder::{DragEnd, KeyboardMove};
use folio_lib::table::{PageSelection, TableState};

fn status_for(id: u32) -> Status {
    match id % 3 {
        0 => Status::Done,
        1 => Status::InProgress,
        _ => Status::NotStarted,
    }
}

fn rows(count: u32) -> Vec<Row> {
    (1..=count)
        .map(|id| {
            Row::new(id, format!("Section {}", id))
                .with_status(status_for(id))
                .with_target(((id * 7) % 11).to_string())
        })
        .collect()
}

fn table(rows: Vec<Row>) -> TableState<Row> {
    dashboard_table(rows, &TableConfig::default()).unwrap()
}

fn ids(rows: Vec<&Row>) -> Vec<u32> {
    rows.into_iter().map(|r| r.id).collect()
}

#[test]
fn test_status_filter_keeps_stored_order() {
    let mut table = table(vec![
        Row::new(1, "a").with_status(Status::Done),
        Row::new(2, "b").with_status(Status::InProgress),
        Row::new(3, "c").with_status(Status::Done),
    ]);
    table.set_column_filter("status", Some(FilterValue::equals("Done")));
    assert_eq!(ids(table.visible_rows()), vec![1, 3]);
}

#[test]
fn test_filters_are_and_combined() {
    let mut table = table(vec![
        Row::new(1, "Cover page").with_status(Status::Done),
        Row::new(2, "Cover letter").with_status(Status::InProgress),
        Row::new(3, "Design").with_status(Status::Done),
    ]);
    table.set_column_filter("header", Some(FilterValue::contains("cover")));
    assert_eq!(ids(table.visible_rows()), vec![1, 2]);

    table.set_column_filter("status", Some(FilterValue::equals("Done")));
    assert_eq!(ids(table.visible_rows()), vec![1]);

    table.set_column_filter("header", None);
    assert_eq!(ids(table.visible_rows()), vec![1, 3]);
}

#[test]
fn test_pages_concatenate_to_filtered_rows() {
    for page_size in 1..=7 {
        let mut table = table(rows(23));
        table.set_column_filter(
            "status",
            Some(FilterValue::one_of(["Done", "Not Started"])),
        );
        table.set_sort("target", Some(Direction::Desc));
        table.set_page_size(page_size).unwrap();

        let expected = ids(table.filtered_rows());
        let mut collected = Vec::new();
        for page in 0..table.page_count() {
            table.set_page(page);
            let visible = table.visible_rows();
            assert!(visible.len() <= page_size);
            assert!(visible.iter().all(|r| r.status != Status::InProgress));
            collected.extend(ids(visible));
        }
        assert_eq!(collected, expected, "page size {}", page_size);
    }
}

#[test]
fn test_sort_is_stable() {
    let targets = ["5", "3", "5", "3", "5"];
    let rows: Vec<Row> = targets
        .iter()
        .zip(1..)
        .map(|(target, id)| Row::new(id, "x").with_target(*target))
        .collect();
    let mut table = table(rows);

    table.set_sort("target", Some(Direction::Asc));
    assert_eq!(ids(table.visible_rows()), vec![2, 4, 1, 3, 5]);

    table.set_sort("target", Some(Direction::Desc));
    assert_eq!(ids(table.visible_rows()), vec![1, 3, 5, 2, 4]);

    table.set_sort("target", None);
    assert_eq!(ids(table.visible_rows()), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_numeric_text_sorts_by_value() {
    let mut table = table(vec![
        Row::new(1, "a").with_target("100"),
        Row::new(2, "b").with_target("9"),
        Row::new(3, "c").with_target("18"),
    ]);
    table.set_sort("target", Some(Direction::Asc));
    assert_eq!(ids(table.visible_rows()), vec![2, 3, 1]);
}

#[test]
fn test_multi_key_sort() {
    let mut table = table(vec![
        Row::new(1, "b").with_status(Status::Done),
        Row::new(2, "a").with_status(Status::NotStarted),
        Row::new(3, "a").with_status(Status::Done),
    ]);
    table.set_sort_spec(SortSpec::asc("status").then_desc("header"));
    assert_eq!(ids(table.visible_rows()), vec![1, 3, 2]);
}

#[test]
fn test_sort_does_not_change_stored_order() {
    let mut table = table(rows(5));
    table.set_sort("header", Some(Direction::Desc));
    assert_eq!(table.row_keys(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_sort_ignores_unknown_and_unsortable_columns() {
    let mut table = TableState::new(
        vec![
            folio_lib::table::Column::new("header", "Header"),
            folio_lib::table::Column::new("reviewer", "Reviewer").unsortable(),
        ],
        rows(3),
    )
    .unwrap();
    assert!(!table.set_sort("nope", Some(Direction::Asc)));
    assert!(!table.set_sort("reviewer", Some(Direction::Asc)));
    assert!(table.sort().is_empty());
}

#[test]
fn test_filter_ignores_unknown_columns() {
    let mut table = table(rows(3));
    assert!(!table.set_column_filter("nope", Some(FilterValue::contains("x"))));
    assert!(table.filters().is_empty());
    assert_eq!(table.visible_keys(), vec![1, 2, 3]);
}

#[test]
fn test_toggle_sort_cycles() {
    let mut table = table(rows(3));
    assert_eq!(table.toggle_sort("header"), Some(Direction::Asc));
    assert_eq!(table.toggle_sort("header"), Some(Direction::Desc));
    assert_eq!(table.toggle_sort("header"), None);
    assert!(table.sort().is_empty());
}

#[test]
fn test_select_all_is_page_scoped() {
    let mut table = table(rows(25));
    assert_eq!(table.toggle_all_on_page(true), 10);
    assert!(table.next_page());
    assert_eq!(table.toggle_all_on_page(true), 10);

    assert_eq!(table.selected_count(), 20);
    assert_eq!(ids(table.selected_rows()), (1..=20).collect::<Vec<_>>());
    assert_eq!(table.page_selection(), PageSelection::All);

    table.last_page();
    assert_eq!(table.page_index(), 2);
    assert_eq!(table.page_selection(), PageSelection::None);
}

#[test]
fn test_deselect_all_is_page_scoped() {
    let mut table = table(rows(25));
    table.toggle_all_on_page(true);
    table.next_page();
    table.toggle_all_on_page(true);

    table.toggle_all_on_page(false);
    assert_eq!(ids(table.selected_rows()), (1..=10).collect::<Vec<_>>());
}

#[test]
fn test_page_selection_partial() {
    let mut table = table(rows(5));
    assert_eq!(table.page_selection(), PageSelection::None);
    assert!(table.toggle_row_selected(&2, true));
    assert_eq!(table.page_selection(), PageSelection::Some);
    assert!(table.is_selected(&2));
}

#[test]
fn test_toggle_unknown_row_is_noop() {
    let mut table = table(rows(3));
    assert!(!table.toggle_row_selected(&42, true));
    assert_eq!(table.selected_count(), 0);
}

#[test]
fn test_selection_survives_sort_and_reorder() {
    let mut table = table(rows(5));
    table.toggle_row_selected(&4, true);
    table.set_sort("header", Some(Direction::Desc));
    table.move_row(&4, &1);
    assert!(table.is_selected(&4));
    assert_eq!(table.selected_count(), 1);

    table.clear_selection();
    assert_eq!(table.selected_count(), 0);
}

#[test]
fn test_page_size_change_clamps_index() {
    let mut table = table(rows(25));
    table.set_page(2);
    assert_eq!(table.page_index(), 2);

    assert_eq!(table.set_page_size(20), Ok(true));
    assert_eq!(table.page_index(), 1);

    assert_eq!(table.set_page_size(50), Ok(true));
    assert_eq!(table.page_index(), 0);

    assert_eq!(table.set_page_size(0), Err(TableError::ZeroPageSize));
    assert_eq!(table.page_size(), 50);
}

#[test]
fn test_filter_shrink_clamps_index() {
    let mut table = table(rows(25));
    table.set_page(2);
    table.set_column_filter("status", Some(FilterValue::equals("Done")));
    assert_eq!(table.filtered_count(), 8);
    assert_eq!(table.page_index(), 0);
    assert_eq!(table.visible_rows().len(), 8);
}

#[test]
fn test_set_page_clamps_to_last() {
    let mut table = table(rows(25));
    table.set_page(99);
    assert_eq!(table.page_index(), 2);
    assert_eq!(table.visible_rows().len(), 5);
    assert!(!table.can_next_page());
    assert!(!table.next_page());

    assert!(table.previous_page());
    assert!(table.first_page());
    assert!(!table.can_previous_page());

    let mut empty = self::table(Vec::new());
    empty.set_page(3);
    assert_eq!(empty.page_index(), 0);
    assert!(empty.visible_rows().is_empty());
}

#[test]
fn test_duplicate_keys_rejected() {
    let duplicated = vec![Row::new(1, "a"), Row::new(2, "b"), Row::new(1, "c")];
    assert_eq!(
        dashboard_table(duplicated.clone(), &TableConfig::default()).unwrap_err(),
        TableError::duplicate_key("1")
    );

    let mut table = table(rows(3));
    assert!(table.set_rows(duplicated).is_err());
    assert_eq!(table.row_keys(), vec![1, 2, 3]);
}

#[test]
fn test_set_rows_keeps_other_state() {
    let mut table = table(rows(25));
    table.set_sort("target", Some(Direction::Asc));
    table.set_column_filter("header", Some(FilterValue::contains("Section")));
    table.set_page(2);

    table.set_rows(rows(12)).unwrap();
    assert_eq!(table.sort().direction_of("target"), Some(Direction::Asc));
    assert!(table.filters().get("header").is_some());
    assert_eq!(table.page_index(), 1);
}

#[test]
fn test_hidden_columns_still_filter_and_sort() {
    let mut table = table(vec![
        Row::new(1, "a").with_limit("20"),
        Row::new(2, "b").with_limit("3"),
    ]);
    assert!(table.set_column_visible("limit", false));
    assert!(!table.set_column_visible("limit", false));
    assert!(!table.is_column_visible("limit"));
    assert!(table.visible_columns().iter().all(|c| c.id != "limit"));

    table.set_sort("limit", Some(Direction::Asc));
    assert_eq!(ids(table.visible_rows()), vec![2, 1]);

    table.set_column_filter("limit", Some(FilterValue::equals("20")));
    assert_eq!(ids(table.visible_rows()), vec![1]);

    assert!(table.set_column_visible("limit", true));
    assert_eq!(table.visible_columns().len(), 6);
}

#[test]
fn test_header_column_cannot_be_hidden() {
    let mut table = table(rows(1));
    assert!(!table.set_column_visible("header", false));
    assert!(table.is_column_visible("header"));
    assert!(!table.set_column_visible("drag", false));
    assert!(table.hideable_columns().iter().all(|c| c.id != "header"));
}

#[test]
fn test_faceted_values_ignore_own_filter() {
    let mut table = table(vec![
        Row::new(1, "a").with_kind("Design").with_status(Status::Done),
        Row::new(2, "b").with_kind("Design").with_status(Status::InProgress),
        Row::new(3, "c").with_kind("Narrative").with_status(Status::Done),
    ]);
    table.set_column_filter("status", Some(FilterValue::one_of(["Done"])));
    assert_eq!(
        table.faceted_values("status"),
        vec![("Done".to_string(), 2), ("In Progress".to_string(), 1)]
    );

    table.set_column_filter("type", Some(FilterValue::one_of(["Design"])));
    assert_eq!(
        table.faceted_values("status"),
        vec![("Done".to_string(), 1), ("In Progress".to_string(), 1)]
    );
    assert_eq!(
        table.faceted_values("type"),
        vec![("Design".to_string(), 1), ("Narrative".to_string(), 1)]
    );
}

#[test]
fn test_move_row_changes_stored_order() {
    let mut table = table(rows(4));
    assert!(table.move_row(&4, &2));
    assert_eq!(table.row_keys(), vec![1, 4, 2, 3]);

    assert!(!table.move_row(&3, &3));
    assert!(!table.move_row(&9, &1));
    assert_eq!(table.row_keys(), vec![1, 4, 2, 3]);
}

#[test]
fn test_drag_end_and_keyboard_moves() {
    let mut table = table(rows(4));
    assert!(table.apply_drag_end(&DragEnd::new(1, Some(3))));
    assert_eq!(table.row_keys(), vec![2, 3, 1, 4]);

    assert!(!table.apply_drag_end(&DragEnd::new(2, None)));

    assert!(table.move_row_step(&1, KeyboardMove::Down));
    assert_eq!(table.row_keys(), vec![2, 3, 4, 1]);
    assert!(!table.move_row_step(&1, KeyboardMove::Down));
    assert!(!table.move_row_step(&2, KeyboardMove::Up));
}

#[test]
fn test_update_row_keeps_position() {
    let mut table = table(rows(3));
    let edited = Row::new(2, "Renamed").with_status(Status::Done);
    assert!(table.update_row(edited));
    assert_eq!(table.row_keys(), vec![1, 2, 3]);
    assert_eq!(table.row(&2).map(|r| r.header.as_str()), Some("Renamed"));

    assert!(!table.update_row(Row::new(9, "ghost")));
    assert_eq!(table.len(), 3);
}

#[test]
fn test_config_applies_page_size_and_hidden_columns() {
    let config = TableConfig::default()
        .with_page_size(4)
        .with_hidden_column("reviewer");
    let table = dashboard_table(rows(10), &config).unwrap();
    assert_eq!(table.page_size(), 4);
    assert_eq!(table.page_count(), 3);
    assert!(!table.is_column_visible("reviewer"));
}

#[test]
fn test_assigned_reviewers_from_table() {
    let table = table(vec![
        Row::new(1, "a").with_reviewer("Eddie Lake"),
        Row::new(2, "b"),
        Row::new(3, "c").with_reviewer("Jamik Tashpulatov"),
    ]);
    assert_eq!(
        assigned_reviewers(table.rows()),
        vec!["Eddie Lake", "Jamik Tashpulatov"]
    );
}
