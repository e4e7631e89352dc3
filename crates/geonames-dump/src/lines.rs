//! Line-oriented scanning of dump text and the per-row record pipeline.

use std::io::{BufRead, Read};
use std::marker::PhantomData;
use std::ops::ControlFlow;

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::records::FromRow;
use crate::{ParseError, SinkError};

/// Default upper bound for a single line, in bytes.
pub const DEFAULT_MAX_LINE_LEN: usize = 1024 * 1024;

/// A non-blank, non-comment line of a dump file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based line number, counting blank and comment lines.
    pub number: usize,
    /// Line text without the line terminator.
    pub text: String,
}

impl Line {
    /// Splits the line on single tabs. Fields are not trimmed.
    #[must_use]
    pub fn fields(&self) -> Vec<String> {
        self.text.split('\t').map(str::to_string).collect()
    }
}

/// How the first data line of a file is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Every data line is a record.
    #[default]
    Plain,
    /// The first non-comment, non-blank line is a header and is dropped.
    SkipHeader,
}

/// Options for [`parse_records`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Header handling.
    pub layout: Layout,
    /// Longest accepted line in bytes; longer lines end the scan.
    pub max_line_len: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            layout: Layout::Plain,
            max_line_len: DEFAULT_MAX_LINE_LEN,
        }
    }
}

impl ParseOptions {
    /// Sets the header handling.
    #[must_use]
    pub const fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the longest accepted line.
    #[must_use]
    pub const fn with_max_line_len(mut self, max_line_len: usize) -> Self {
        self.max_line_len = max_line_len;
        self
    }
}

/// Counters for one parsed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseSummary {
    /// Lines read, including blank and comment lines.
    pub lines: usize,
    /// Records handed to the sink without error.
    pub records: usize,
    /// Rows dropped because demarshalling or the sink failed.
    pub skipped: usize,
}

/// Scans `reader` line by line and emits every data line.
///
/// Blank lines and lines starting with `#` are skipped. A trailing `\r` is
/// removed and does not count towards `max_line_len`. Lines that are not
/// valid UTF-8 are logged and skipped. The token is checked before each line
/// is read. Returning
/// [`ControlFlow::Break`] from `emit` stops the scan early without error.
///
/// Returns the number of lines read.
///
/// # Errors
///
/// Returns [`ParseError::Cancelled`] if the token trips,
/// [`ParseError::LineTooLong`] if a line exceeds `max_line_len` bytes, or
/// [`ParseError::Io`] if reading fails.
pub fn scan_lines<R, F>(
    mut reader: R,
    cancel: &CancellationToken,
    max_line_len: usize,
    mut emit: F,
) -> Result<usize, ParseError>
where
    R: BufRead,
    F: FnMut(Line) -> ControlFlow<()>,
{
    // Room for the content plus a `\r\n` terminator.
    let limit = u64::try_from(max_line_len)
        .unwrap_or(u64::MAX)
        .saturating_add(2);
    let mut number = 0;
    let mut buf = Vec::new();

    loop {
        if cancel.is_cancelled() {
            return Err(ParseError::Cancelled);
        }

        buf.clear();
        if reader.by_ref().take(limit).read_until(b'\n', &mut buf)? == 0 {
            return Ok(number);
        }
        number += 1;

        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
        if buf.len() > max_line_len {
            return Err(ParseError::LineTooLong {
                line: number,
                max: max_line_len,
            });
        }

        if buf.is_empty() || buf[0] == b'#' {
            continue;
        }

        let text = match String::from_utf8(std::mem::take(&mut buf)) {
            Ok(text) => text,
            Err(error) => {
                warn!(
                    line = number,
                    error = %error.utf8_error(),
                    "skipping row with invalid UTF-8"
                );
                buf = error.into_bytes();
                continue;
            }
        };
        if emit(Line { number, text }).is_break() {
            return Ok(number);
        }
    }
}

/// Turns scanned lines into records and feeds them to a sink.
///
/// Row and sink failures are logged and counted, never returned.
pub(crate) struct RecordSink<T, F> {
    header_pending: bool,
    sink: F,
    summary: ParseSummary,
    _record: PhantomData<fn() -> T>,
}

impl<T, F> RecordSink<T, F>
where
    T: FromRow,
    F: FnMut(T) -> Result<(), SinkError>,
{
    pub(crate) fn new(layout: Layout, sink: F) -> Self {
        Self {
            header_pending: layout == Layout::SkipHeader,
            sink,
            summary: ParseSummary::default(),
            _record: PhantomData,
        }
    }

    pub(crate) fn accept(&mut self, line: Line) {
        if self.header_pending {
            self.header_pending = false;
            debug!(line = line.number, text = %line.text, "skipping header");
            return;
        }

        let result = T::from_row(line.fields())
            .map_err(SinkError::from)
            .and_then(&mut self.sink);
        match result {
            Ok(()) => self.summary.records += 1,
            Err(error) => {
                self.summary.skipped += 1;
                warn!(
                    line = line.number,
                    text = %line.text,
                    error = %error,
                    "skipping row"
                );
            }
        }
    }

    pub(crate) fn finish(mut self, lines: usize) -> ParseSummary {
        self.summary.lines = lines;
        self.summary
    }
}

/// Runs the whole record pipeline over `reader` on the current thread.
///
/// Each data line is split on tabs, demarshalled into `T` and passed to
/// `sink`, in input order. Rows that fail to demarshal, and records the sink
/// rejects, are logged as warnings and skipped.
///
/// # Errors
///
/// Returns the scanner's terminal error: cancellation, an over-long line or
/// an I/O failure.
///
/// # Example
///
/// ```
/// use geonames_dump::{AdminDivision, ParseOptions, parse_records};
/// use tokio_util::sync::CancellationToken;
///
/// let text = "# code\tname\tascii\tid\nAT.07\tTyrol\tTyrol\t2763586\n\n";
/// let mut divisions = Vec::new();
/// let summary = parse_records(
///     text.as_bytes(),
///     &CancellationToken::new(),
///     ParseOptions::default(),
///     |division: AdminDivision| {
///         divisions.push(division);
///         Ok(())
///     },
/// )
/// .unwrap();
///
/// assert_eq!(summary.records, 1);
/// assert_eq!(divisions[0].code, "AT.07");
/// ```
pub fn parse_records<T, R, F>(
    reader: R,
    cancel: &CancellationToken,
    options: ParseOptions,
    sink: F,
) -> Result<ParseSummary, ParseError>
where
    T: FromRow,
    R: BufRead,
    F: FnMut(T) -> Result<(), SinkError>,
{
    let mut records = RecordSink::new(options.layout, sink);
    let lines = scan_lines(reader, cancel, options.max_line_len, |line| {
        records.accept(line);
        ControlFlow::Continue(())
    })?;
    Ok(records.finish(lines))
}
