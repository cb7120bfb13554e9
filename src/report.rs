//! Console lines for the interactive fetch loop.

use std::io::{self, Write};

use crate::downloader::{Downloader, FileDownloader, Outcome};
use crate::error::FetchError;

const UNKNOWN: &str = "unknown";

pub fn write_welcome<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nWelcome to the Ubuntu Image Fetcher")?;
    writeln!(out, "A tool for mindfully collecting images from the web")?;
    writeln!(out, "Ubuntu Principle: 'I am because we are'\n")
}

pub fn write_farewell<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nConnection strengthened. Community enriched.\n")
}

/// Fetches every URL in order. A failed URL is reported and never stops the batch.
pub fn run_batch<T, W>(downloader: &Downloader<T>, urls: &[String], out: &mut W) -> io::Result<()>
where
    T: FileDownloader,
    W: Write,
{
    for url in urls {
        writeln!(out, "\nConnecting to: {}", url)?;

        let result = downloader.download(url);

        if let Err(err) = &result {
            tracing::debug!(%url, error = %err, "fetch failed");
        }

        write_result(out, &result)?;
    }

    Ok(())
}

pub fn write_result<W: Write>(out: &mut W, result: &Result<Outcome, FetchError>) -> io::Result<()> {
    match result {
        Ok(Outcome::Saved(download)) => {
            let headers = &download.headers;

            writeln!(out, "✓ Successfully fetched: {}", download.file_name)?;
            writeln!(out, "✓ Saved to: {}", download.file.display())?;
            writeln!(
                out,
                "✓ Content-Type: {}",
                headers.content_type.as_deref().unwrap_or(UNKNOWN)
            )?;
            writeln!(
                out,
                "✓ Content-Length: {}",
                headers.content_length.as_deref().unwrap_or(UNKNOWN)
            )
        }
        Ok(Outcome::Duplicate { .. }) => {
            writeln!(out, "✓ Duplicate image detected, already downloaded. Skipping.")
        }
        Err(FetchError::UnsafeContentType(_)) => {
            writeln!(out, "✗ Unsafe file type detected. Skipping.")
        }
        Err(err) if err.is_network() => writeln!(out, "✗ Connection error: {}", err),
        Err(err) => writeln!(out, "✗ Unexpected error: {}", err),
    }
}
