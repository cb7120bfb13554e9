use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use image_fetcher::input::parse_url_list;
use image_fetcher::{logging, report, Downloader, FetchConfig};

fn main() -> ExitCode {
    logging::init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("✗ Unexpected error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    report::write_welcome(&mut out)?;

    write!(out, "Enter one or more image URLs (comma-separated): ")?;
    out.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    let urls = parse_url_list(&line);

    let config = FetchConfig::default();
    let downloader = Downloader::new(&config)?;

    report::run_batch(&downloader, &urls, &mut out)?;
    report::write_farewell(&mut out)?;

    Ok(())
}
