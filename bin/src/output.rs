//! Output helpers for the geonames CLI.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::io::{BufWriter, Stdout, Write};

/// Writes records to stdout, one JSON object per line.
pub(crate) struct NdjsonWriter {
    out: BufWriter<Stdout>,
    progress: ProgressBar,
    written: u64,
}

impl NdjsonWriter {
    pub(crate) fn new(progress: ProgressBar) -> Self {
        Self {
            out: BufWriter::new(std::io::stdout()),
            progress,
            written: 0,
        }
    }

    /// Writes one record and ticks the spinner.
    pub(crate) fn write<T: Serialize>(&mut self, record: &T) -> std::io::Result<()> {
        serde_json::to_writer(&mut self.out, record)?;
        self.out.write_all(b"\n")?;
        self.written += 1;
        if self.written % 10_000 == 0 {
            self.progress.set_position(self.written);
        }
        Ok(())
    }

    /// Flushes stdout and returns the number of records written.
    pub(crate) fn finish(mut self) -> Result<u64> {
        self.out.flush().context("Failed to flush stdout")?;
        self.progress.set_position(self.written);
        Ok(self.written)
    }
}

/// Creates a stderr spinner counting records, hidden in quiet mode.
pub(crate) fn spinner(quiet: bool, message: String) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let progress = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .template("{spinner:.green} [{elapsed_precise}] {pos} records {msg}")
    {
        progress.set_style(style);
    }
    progress.set_message(message);
    progress.enable_steady_tick(std::time::Duration::from_millis(120));
    progress
}

/// Prints a web-service result as pretty JSON.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize result")?;
    println!("{json}");
    Ok(())
}
