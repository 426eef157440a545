//! Error types shared by the format readers and writers.

use snafu::Snafu;

/// Convenience alias used throughout the crate.
pub type Result<T, E = FormatError> = std::result::Result<T, E>;

/// Errors produced while reading or writing tabular files.
///
/// Underlying library failures (`csv`, `fitsio`, `std::io`) are wrapped as
/// `source` fields with the offending path attached; nothing is retried or
/// recovered here.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum FormatError {
    /// Opening an input file failed.
    #[snafu(display("Failed to open {path}: {source}"))]
    OpenInput {
        /// The path that could not be opened.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Creating an output file failed.
    #[snafu(display("Failed to create {path}: {source}"))]
    CreateOutput {
        /// The path that could not be created.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The CSV parser reported an error while reading.
    #[snafu(display("CSV read error in {path}: {source}"))]
    CsvRead {
        /// The file being read.
        path: String,
        /// The underlying CSV error.
        source: csv::Error,
    },

    /// The CSV writer reported an error.
    #[snafu(display("CSV write error in {path}: {source}"))]
    CsvWrite {
        /// The file being written.
        path: String,
        /// The underlying CSV error.
        source: csv::Error,
    },

    /// Flushing or finishing an output stream failed.
    #[snafu(display("Failed to finish writing {path}: {source}"))]
    FinishOutput {
        /// The file being written.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// cfitsio reported an error while reading or writing.
    #[snafu(display("FITS error in {path}: {source}"))]
    Fits {
        /// The file involved.
        path: String,
        /// The underlying cfitsio error.
        source: fitsio::errors::Error,
    },

    /// No table HDU was found in a FITS input file.
    #[snafu(display("No table HDU found in {path}"))]
    NoTableHdu {
        /// The file that was searched.
        path: String,
    },

    /// A FITS table column has a type the converter does not handle.
    #[snafu(display(
        "Unsupported FITS column type {column_type} for column '{column}' in {path}"
    ))]
    UnsupportedColumnType {
        /// The file being read.
        path: String,
        /// The offending column name.
        column: String,
        /// Debug rendering of the column type.
        column_type: String,
    },

    /// Columns passed to [`crate::table::Table::new`] have differing lengths.
    #[snafu(display("Column '{column}' has {actual} rows; expected {expected}"))]
    ColumnLengthMismatch {
        /// The offending column name.
        column: String,
        /// Row count of the first column.
        expected: usize,
        /// Row count of the offending column.
        actual: usize,
    },
}
