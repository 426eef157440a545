use fits_table_core::error::FormatError;
use snafu::Snafu;

pub type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum CliError {
    /// The input name matched no recognized (extension, compression)
    /// combination. Fatal; aborts the batch.
    #[snafu(display("Unrecognized file extension: {filename}"))]
    UnrecognizedExtension { filename: String },

    /// A read or write failed in the format layer. The wrapped error
    /// already names the file, so it is surfaced as-is.
    #[snafu(display("{source}"))]
    Convert { source: FormatError },
}
