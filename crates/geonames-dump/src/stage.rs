//! Staging of downloaded dump files on local disk.

use std::path::Path;

use futures::StreamExt;
use reqwest::{Client, StatusCode};
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::{DownloadError, DumpError};

/// Downloads `url` into a fresh temporary file under `dir`.
///
/// The file is named `geonames-<random>-<file_name>` and is removed when the
/// returned handle is dropped, including on every error path here.
pub(crate) async fn stage(
    http: &Client,
    cancel: &CancellationToken,
    url: &str,
    file_name: &str,
    dir: &Path,
) -> Result<NamedTempFile, DumpError> {
    let response = tokio::select! {
        biased;
        () = cancel.cancelled() => return Err(DumpError::Cancelled),
        response = http.get(url).send() => response.map_err(DownloadError::Http)?,
    };

    let status = response.status();
    if status != StatusCode::OK {
        return Err(DownloadError::UnexpectedStatus {
            status: status.as_u16(),
        }
        .into());
    }

    let staged = tempfile::Builder::new()
        .prefix("geonames-")
        .suffix(&format!("-{file_name}"))
        .tempfile_in(dir)
        .map_err(DownloadError::Stage)?;
    let mut out = tokio::fs::File::from_std(staged.reopen().map_err(DownloadError::Stage)?);

    let mut body = response.bytes_stream();
    let mut written: u64 = 0;
    loop {
        let chunk = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(DumpError::Cancelled),
            chunk = body.next() => chunk,
        };
        match chunk {
            Some(Ok(bytes)) => {
                out.write_all(&bytes).await.map_err(DownloadError::Stage)?;
                written += bytes.len() as u64;
            }
            Some(Err(err)) => return Err(DownloadError::Http(err).into()),
            None => break,
        }
    }
    out.flush().await.map_err(DownloadError::Stage)?;

    debug!(path = %staged.path().display(), bytes = written, "staged download");
    Ok(staged)
}
