//! Opening staged dump files, archived or plain.

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::ops::ControlFlow;

use tokio_util::sync::CancellationToken;
use tracing::debug;
use zip::ZipArchive;

use crate::ParseError;
use crate::file::archive_entry_name;
use crate::lines::{Line, scan_lines};

/// Returns the index of the first entry named exactly `name`.
///
/// Entries are visited in central directory order; matching is
/// case-sensitive and nested archives are not searched.
///
/// # Errors
///
/// Returns [`ParseError::FileNotFoundInArchive`] if no entry matches, or
/// [`ParseError::Archive`] if an entry header is unreadable.
pub fn find_entry<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<usize, ParseError> {
    for index in 0..archive.len() {
        if archive.by_index_raw(index)?.name() == name {
            return Ok(index);
        }
    }
    Err(ParseError::FileNotFoundInArchive {
        name: name.to_string(),
    })
}

/// Scans a staged file, descending into its text entry if it is an archive.
///
/// `file_name` is the name on the dump host; it decides whether `staged` is
/// read as a zip archive and which entry is selected.
pub(crate) fn scan_staged<F>(
    staged: File,
    file_name: &str,
    cancel: &CancellationToken,
    max_line_len: usize,
    emit: F,
) -> Result<usize, ParseError>
where
    F: FnMut(Line) -> ControlFlow<()>,
{
    let Some(entry_name) = archive_entry_name(file_name) else {
        return scan_lines(BufReader::new(staged), cancel, max_line_len, emit);
    };

    let mut archive = ZipArchive::new(staged)?;
    let index = find_entry(&mut archive, &entry_name)?;
    let entry = archive.by_index(index)?;
    debug!(entry = %entry_name, size = entry.size(), "selected archive entry");

    scan_lines(BufReader::new(entry), cancel, max_line_len, emit)
}
