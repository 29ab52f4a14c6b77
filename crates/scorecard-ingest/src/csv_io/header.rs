//! CSV header reading.

use std::path::Path;

use crate::error::{IngestError, Result};

/// Column names found in the header row of a CSV file.
#[derive(Debug, Clone)]
pub struct CsvHeaders {
    /// Trimmed column names, in file order.
    pub columns: Vec<String>,
}

impl CsvHeaders {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns true if any column name still contains a `.` separator.
    pub fn has_dotted_names(&self) -> bool {
        self.columns.iter().any(|name| name.contains('.'))
    }
}

/// Normalizes a header value by trimming whitespace and a leading BOM.
pub fn normalize_header(value: &str) -> String {
    value.trim().trim_start_matches('\u{feff}').trim().to_string()
}

/// Reads only the header row of a CSV file.
pub fn read_header_row(path: &Path) -> Result<CsvHeaders> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;
    let record = reader.headers().map_err(|e| csv_error(path, e))?;
    let columns: Vec<String> = record.iter().map(normalize_header).collect();
    if columns.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    if columns.iter().all(String::is_empty) {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }
    Ok(CsvHeaders::new(columns))
}

fn csv_error(path: &Path, error: csv::Error) -> IngestError {
    if let csv::ErrorKind::Io(io) = error.kind()
        && io.kind() == std::io::ErrorKind::NotFound
    {
        return IngestError::FileNotFound {
            path: path.to_path_buf(),
        };
    }
    IngestError::CsvParse {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_header_strips_bom_and_whitespace() {
        assert_eq!(normalize_header("\u{feff}UniqueID "), "UniqueID");
        assert_eq!(normalize_header("  Date.of.Birth"), "Date.of.Birth");
    }

    #[test]
    fn dotted_names_are_detected() {
        let headers = CsvHeaders::new(vec!["UniqueID".into(), "Date.of.Birth".into()]);
        assert!(headers.has_dotted_names());
        assert_eq!(headers.len(), 2);
    }
}
