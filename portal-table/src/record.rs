use serde_json::{Number, Value};

/// One row of tabular data, usually a JSON object straight from the backend.
pub type Record = Value;

/// Looks up a dotted field path (e.g. `"vessel.name"`) in a record.
///
/// Returns `None` when any segment is missing, when an intermediate value is
/// not an object, or when the leaf is `null`.
pub fn get_field<'a>(record: &'a Record, path: &str) -> Option<&'a Value> {
    let mut current = record;
    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    (!current.is_null()).then_some(current)
}

/// A borrowed view over a `{ raw, formatted }` value.
///
/// Backend dates arrive in this shape so the UI can sort on the machine form
/// and display the human form.
#[derive(Debug, Clone, Copy)]
pub struct ShapedValue<'a> {
    raw: Option<&'a Value>,
    formatted: Option<&'a Value>,
}

impl<'a> ShapedValue<'a> {
    /// Returns the shaped view if `value` is an object with a `raw` or
    /// `formatted` field.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        let map = value.as_object()?;
        let raw = map.get("raw").filter(|v| !v.is_null());
        let formatted = map.get("formatted").filter(|v| !v.is_null());
        if !map.contains_key("raw") && !map.contains_key("formatted") {
            return None;
        }
        Some(Self { raw, formatted })
    }

    /// The value to compare on: `raw`, falling back to `formatted`.
    pub fn sort_key(&self) -> Option<&'a Value> {
        self.raw.or(self.formatted)
    }

    /// The value to show: `formatted`, falling back to `raw`.
    pub fn display(&self) -> Option<&'a Value> {
        self.formatted.or(self.raw)
    }
}

/// Unwraps a shaped value to its sort key; other values pass through.
pub(crate) fn sort_value(value: &Value) -> Option<&Value> {
    match ShapedValue::from_value(value) {
        Some(shaped) => shaped.sort_key(),
        None => Some(value),
    }
}

/// Renders a value as the text used for searching, string sorting and export.
pub fn display_string(value: &Value) -> String {
    if let Some(shaped) = ShapedValue::from_value(value) {
        return shaped.display().map(display_string).unwrap_or_default();
    }
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => number_text(n),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => items
            .iter()
            .map(display_string)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}

/// Whole-valued floats print without a fraction (`1250.0` as `1250`).
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => {
            if f == 0.0 {
                "0".to_string()
            } else {
                format!("{f:.0}")
            }
        }
        _ => n.to_string(),
    }
}
