//! CSV file writing.

use std::fs::File;
use std::path::Path;

use polars::prelude::*;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Writes a DataFrame to a CSV file with a header row.
///
/// Nulls are written as empty cells. Parent directories are created when
/// missing.
pub fn write_csv_table(df: &mut DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|source| IngestError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
    }
    let mut file = File::create(path).map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    CsvWriter::new(&mut file).include_header(true).finish(df)?;
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "csv written"
    );
    Ok(())
}
