//! Shared fixtures for table tests.

#![allow(dead_code)]

use portal_table::{ColumnDescriptor, Record, SortType};
use serde_json::json;

/// A small vessel schedule with nested vessels, shaped dates and gaps.
pub fn schedule() -> Vec<Record> {
    vec![
        json!({
            "voyage": "V-102",
            "vessel": {"name": "Maersk Kobe"},
            "port": "Port of Jeddah",
            "etaDate": {"raw": "2025-07-12", "formatted": "12-Jul-2025"},
            "containerCount": 40
        }),
        json!({
            "voyage": "V-7",
            "vessel": {"name": "Ever Given"},
            "port": "Port of Dammam",
            "etaDate": {"raw": "2025-07-04", "formatted": "4-Jul-2025"},
            "containerCount": "120"
        }),
        json!({
            "voyage": "V-33",
            "vessel": null,
            "port": "King Abdullah Port",
            "etaDate": null,
            "containerCount": null
        }),
        json!({
            "voyage": "V-10",
            "vessel": {"name": "CMA CGM Jules"},
            "port": "Port of Jeddah",
            "etaDate": "TBA",
            "containerCount": 9
        }),
    ]
}

pub fn schedule_columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("voyage", "Voyage"),
        ColumnDescriptor::new("vessel.name", "Vessel"),
        ColumnDescriptor::new("port", "Port"),
        ColumnDescriptor::new("etaDate", "ETA"),
        ColumnDescriptor::new("containerCount", "Containers"),
    ]
}

/// Records `{k, i}` where `i` is the original position.
pub fn keyed(keys: &[i64]) -> Vec<Record> {
    keys.iter()
        .enumerate()
        .map(|(i, k)| json!({"k": k, "i": i}))
        .collect()
}

pub fn number_column(key: &str) -> ColumnDescriptor {
    ColumnDescriptor::new(key, key).with_sort_type(SortType::Number)
}

/// Field `field` of every record, as JSON.
pub fn column_of(records: &[Record], field: &str) -> Vec<serde_json::Value> {
    records.iter().map(|r| r[field].clone()).collect()
}
