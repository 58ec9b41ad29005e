mod common;

use common::{schedule, schedule_columns};
use portal_table::{ColumnDescriptor, SortOrder, SortState, SortType, TableState};
use pretty_assertions::assert_eq;
use serde_json::json;

fn voyages(rows: &[serde_json::Value]) -> Vec<&str> {
    rows.iter().map(|r| r["voyage"].as_str().unwrap()).collect()
}

#[test]
fn defaults_to_first_page_unsorted() {
    let state = TableState::new();
    assert_eq!(state.page(), 1);
    assert_eq!(state.query(), "");
    assert_eq!(state.sort(), &SortState::none());
}

#[test]
fn query_change_resets_page() {
    let mut state = TableState::new();
    state.set_page(3);
    state.set_query("jeddah");
    assert_eq!(state.page(), 1);
}

#[test]
fn column_click_resets_page() {
    let columns = schedule_columns();
    let mut state = TableState::new();
    state.set_page(2);
    state.click_column("etaDate", &columns);
    assert_eq!(state.page(), 1);
    assert_eq!(state.sort(), &SortState::new("etaDate", SortOrder::Asc));

    state.set_page(2);
    state.click_column("etaDate", &columns);
    assert_eq!(state.page(), 1);
    assert_eq!(state.sort().order(), Some(SortOrder::Desc));
}

#[test]
fn clicks_on_unsortable_or_unknown_columns_are_ignored() {
    let columns = vec![
        ColumnDescriptor::new("etaDate", "ETA"),
        ColumnDescriptor::new("remarks", "Remarks").unsortable(),
    ];
    let mut state = TableState::new();
    state.click_column("etaDate", &columns);
    state.set_page(3);

    state.click_column("remarks", &columns);
    state.click_column("containerCount", &columns);
    assert_eq!(state.page(), 3);
    assert_eq!(state.sort(), &SortState::new("etaDate", SortOrder::Asc));
}

#[test]
fn page_below_one_clamps() {
    let mut state = TableState::new();
    state.set_page(0);
    assert_eq!(state.page(), 1);
}

#[test]
fn apply_runs_filter_sort_and_paginate() {
    let columns = schedule_columns();
    let mut state = TableState::new();
    state.set_query("port of");
    state.click_column("containerCount", &columns);

    let view = state.apply(&schedule(), &columns, 2);
    assert_eq!(view.total, 3);
    assert_eq!(view.total_pages, 2);
    assert_eq!(view.page, 1);
    assert_eq!(voyages(&view.rows), vec!["V-10", "V-102"]);

    state.set_page(2);
    let view = state.apply(&schedule(), &columns, 2);
    assert_eq!(voyages(&view.rows), vec!["V-7"]);
}

#[test]
fn search_keys_override_columns() {
    let mut state = TableState::new();
    state.set_search_keys(Some(vec!["vessel.name".to_string()]));
    state.set_query("port");

    let view = state.apply(&schedule(), &schedule_columns(), 10);
    assert_eq!(view.total, 0);
    assert!(view.rows.is_empty());
}

#[test]
fn state_round_trips_through_json() {
    let columns = schedule_columns();
    let mut state = TableState::new();
    state.set_query("kobe");
    state.click_column("vessel.name", &columns);
    state.set_page(4);

    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(
        json,
        json!({
            "query": "kobe",
            "sort": {"column": "vessel.name", "order": "asc"},
            "page": 4
        })
    );
    let back: TableState = serde_json::from_value(json).unwrap();
    assert_eq!(back, state);
}

// ── ColumnDescriptor ─────────────────────────────────────────────

#[test]
fn descriptor_json_uses_camel_case() {
    let col: ColumnDescriptor = serde_json::from_value(json!({
        "key": "quote.total",
        "label": "Total",
        "sortType": "number"
    }))
    .unwrap();
    assert!(col.sortable);
    assert_eq!(col.sort_type, Some(SortType::Number));

    let out = serde_json::to_value(&col).unwrap();
    assert_eq!(
        out,
        json!({"key": "quote.total", "label": "Total", "sortable": true, "sortType": "number"})
    );
}

#[test]
fn descriptor_with_unknown_sort_type_sorts_as_text() {
    let col: ColumnDescriptor = serde_json::from_value(json!({
        "key": "createdDate",
        "label": "Created",
        "sortable": false,
        "sortType": "currency"
    }))
    .unwrap();
    assert!(!col.sortable);
    assert_eq!(col.resolved_sort_type(), SortType::String);
}

#[test]
fn resolved_sort_type_falls_back_to_key() {
    assert_eq!(ColumnDescriptor::new("departureTime", "Dep").resolved_sort_type(), SortType::Date);
    assert_eq!(ColumnDescriptor::new("price", "Price").resolved_sort_type(), SortType::Number);
    assert_eq!(ColumnDescriptor::new("status", "Status").resolved_sort_type(), SortType::String);
}

#[test]
fn render_cell_uses_renderer_when_present() {
    let record = json!({"amount": 1250, "currency": "SAR"});
    let plain = ColumnDescriptor::new("amount", "Amount");
    let rendered = ColumnDescriptor::new("amount", "Amount").with_render(|value, row| {
        format!(
            "{} {}",
            value.and_then(|v| v.as_i64()).unwrap_or_default(),
            row["currency"].as_str().unwrap_or_default()
        )
    });

    assert_eq!(plain.render_cell(&record), "1250");
    assert_eq!(rendered.render_cell(&record), "1250 SAR");
    assert!(format!("{rendered:?}").contains("<fn>"));
}
