//! CSV export of table records.
//!
//! Serialization is kept apart from delivery: `to_csv` builds the text and a
//! [`FileSink`] decides where it goes (a directory on disk, an in-memory
//! buffer handed to a browser download, ...).

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::column::ColumnDescriptor;
use crate::error::{TableError, TableResult};
use crate::record::{Record, display_string};

/// Destination for exported files.
pub trait FileSink {
    fn write_file(&mut self, name: &str, content: &str) -> io::Result<()>;
}

/// Writes exports into a directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl FileSink for DirectorySink {
    fn write_file(&mut self, name: &str, content: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.dir.join(name), content)
    }
}

/// Keeps exports in memory, keyed by file name.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: BTreeMap<String, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn into_files(self) -> BTreeMap<String, String> {
        self.files
    }
}

impl FileSink for MemorySink {
    fn write_file(&mut self, name: &str, content: &str) -> io::Result<()> {
        self.files.insert(name.to_string(), content.to_string());
        Ok(())
    }
}

/// Serializes records to CSV with LF line endings.
///
/// With descriptors the header is their labels and each cell is the column's
/// rendered text (its renderer, else the value at its dotted key). Without
/// them the header is the first record's field names and every row is read by
/// those names.
pub fn to_csv(records: &[Record], columns: Option<&[ColumnDescriptor]>) -> TableResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    match columns {
        Some(columns) => {
            writer.write_record(columns.iter().map(|c| c.label.as_str()))?;
            for record in records {
                writer.write_record(columns.iter().map(|c| c.render_cell(record)))?;
            }
        }
        None => {
            let keys: Vec<&str> = records
                .first()
                .and_then(|r| r.as_object())
                .map(|map| map.keys().map(String::as_str).collect())
                .unwrap_or_default();
            writer.write_record(&keys)?;
            for record in records {
                writer.write_record(keys.iter().map(|key| cell_text(record, key)))?;
            }
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Serializes `records` and hands them to `sink` as `filename`.
///
/// An empty record set is not an error: nothing is written and a warning is
/// logged. A `.csv` suffix is added when `filename` lacks one.
pub fn export_to_delimited_file(
    records: &[Record],
    filename: &str,
    columns: Option<&[ColumnDescriptor]>,
    sink: &mut dyn FileSink,
) -> TableResult<()> {
    if records.is_empty() {
        warn!(filename = %filename, "no records to export");
        return Ok(());
    }

    let filename = csv_filename(filename);
    let content = to_csv(records, columns)?;
    debug!(filename = %filename, rows = records.len(), bytes = content.len(), "exporting table");

    sink.write_file(&filename, &content)
        .map_err(|source| TableError::Export { filename, source })
}

fn cell_text(record: &Record, key: &str) -> String {
    record
        .get(key)
        .filter(|v| !v.is_null())
        .map(display_string)
        .unwrap_or_default()
}

fn csv_filename(name: &str) -> String {
    if name.to_lowercase().ends_with(".csv") {
        name.to_string()
    } else {
        format!("{name}.csv")
    }
}
