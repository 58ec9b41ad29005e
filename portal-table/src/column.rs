use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::compare::SortType;
use crate::record::{Record, display_string, get_field};

/// Custom cell renderer: receives the field value (if any) and the whole row.
pub type CellRenderer = Arc<dyn Fn(Option<&Value>, &Record) -> String + Send + Sync>;

/// Describes how to locate, label and sort one column of a table.
///
/// The JSON form matches what the UI ships (`{"key", "label", "sortable",
/// "sortType"}`); `render` only exists on the Rust side.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDescriptor {
    /// Dotted field path into the record.
    pub key: String,
    pub label: String,
    #[serde(default = "default_sortable")]
    pub sortable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_type: Option<SortType>,
    #[serde(skip)]
    pub render: Option<CellRenderer>,
}

fn default_sortable() -> bool {
    true
}

impl ColumnDescriptor {
    /// A sortable column whose sort type is inferred from its key.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: true,
            sort_type: None,
            render: None,
        }
    }

    #[must_use]
    pub fn with_sort_type(mut self, sort_type: SortType) -> Self {
        self.sort_type = Some(sort_type);
        self
    }

    #[must_use]
    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    #[must_use]
    pub fn with_render<F>(mut self, render: F) -> Self
    where
        F: Fn(Option<&Value>, &Record) -> String + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    /// The declared sort type, or the one inferred from the key.
    pub fn resolved_sort_type(&self) -> SortType {
        self.sort_type.unwrap_or_else(|| SortType::infer(&self.key))
    }

    /// This column's field in `record`.
    pub fn value<'a>(&self, record: &'a Record) -> Option<&'a Value> {
        get_field(record, &self.key)
    }

    /// Display text for this column's cell in `record`.
    pub fn render_cell(&self, record: &Record) -> String {
        let value = self.value(record);
        match &self.render {
            Some(render) => render(value, record),
            None => value.map(display_string).unwrap_or_default(),
        }
    }
}

impl fmt::Debug for ColumnDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("sort_type", &self.sort_type)
            .field("render", &self.render.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// The keys searched when the caller does not name any: every column's key.
pub fn searchable_keys(columns: &[ColumnDescriptor]) -> Vec<&str> {
    columns.iter().map(|c| c.key.as_str()).collect()
}
