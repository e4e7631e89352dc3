//! Error types for the dump pipeline.

use geonames_types::FieldError;
use thiserror::Error;

/// Error a caller's sink may return for a record.
///
/// Sink errors never end the pipeline; they are logged and the row is counted
/// as skipped.
pub type SinkError = Box<dyn std::error::Error + Send + Sync>;

/// A row could not be turned into a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    /// The row has the wrong number of columns.
    #[error("invalid row length, expected {expected}, got {got}")]
    InvalidLength {
        /// Columns the record type requires.
        expected: usize,
        /// Columns the row actually had.
        got: usize,
    },

    /// A column failed to parse.
    #[error(transparent)]
    Field(#[from] FieldError),
}

/// Errors while fetching a dump file to the staging area.
#[derive(Error, Debug)]
pub enum DownloadError {
    /// The HTTP request or body transfer failed.
    #[error("send request => {0}")]
    Http(#[from] reqwest::Error),

    /// The dump host answered with something other than 200.
    #[error("unexpected status code: {status}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
    },

    /// The staging file could not be created or written.
    #[error("stage file => {0}")]
    Stage(#[from] std::io::Error),
}

/// Errors while reading a staged dump file.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The archive has no entry named after the dump file.
    #[error("file not found in archive: {name}")]
    FileNotFoundInArchive {
        /// The entry name that was looked for.
        name: String,
    },

    /// The archive directory or an entry header is unreadable.
    #[error("open archive => {0}")]
    Archive(#[from] zip::result::ZipError),

    /// The staged file could not be reopened for reading.
    #[error("open staged file => {0}")]
    Open(std::io::Error),

    /// Reading the next line failed.
    #[error("read line => {0}")]
    Io(#[from] std::io::Error),

    /// A line is longer than the scanner accepts.
    #[error("line {line} exceeds maximum length of {max} bytes")]
    LineTooLong {
        /// 1-based line number.
        line: usize,
        /// Configured maximum in bytes.
        max: usize,
    },

    /// The cancellation token tripped between lines.
    #[error("operation cancelled")]
    Cancelled,
}

/// Terminal error of a dump operation.
#[derive(Error, Debug)]
pub enum DumpError {
    /// Fetching the file failed.
    #[error("download file => {0}")]
    Download(#[from] DownloadError),

    /// Reading the staged file failed.
    #[error("parse file => {0}")]
    Parse(ParseError),

    /// The blocking scanner task panicked or was aborted.
    #[error("scanner task failed => {0}")]
    Worker(#[from] tokio::task::JoinError),

    /// The cancellation token tripped.
    #[error("operation cancelled")]
    Cancelled,
}

impl From<ParseError> for DumpError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Cancelled => Self::Cancelled,
            other => Self::Parse(other),
        }
    }
}

impl DumpError {
    /// Returns true if the operation ended because its token was cancelled.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Returns the HTTP status if the dump host answered with a non-200 status.
    #[must_use]
    pub const fn unexpected_status(&self) -> Option<u16> {
        match self {
            Self::Download(DownloadError::UnexpectedStatus { status }) => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the archive lacked the expected text entry.
    #[must_use]
    pub const fn is_file_not_found_in_archive(&self) -> bool {
        matches!(self, Self::Parse(ParseError::FileNotFoundInArchive { .. }))
    }
}
