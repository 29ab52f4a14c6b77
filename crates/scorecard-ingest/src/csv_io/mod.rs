//! CSV reading and writing utilities.

mod header;
mod reader;
mod writer;

pub use header::CsvHeaders;
pub use reader::{
    IngestOptions, MAX_CSV_FILE_SIZE, check_file_size, read_csv_schema, read_csv_table,
    validate_dataframe_shape, validate_encoding,
};
pub use writer::write_csv_table;
