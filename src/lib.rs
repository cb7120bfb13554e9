pub mod config;
mod downloader;
pub mod error;
pub mod input;
pub mod logging;
pub mod report;

pub use config::FetchConfig;
pub use downloader::{
    digest_hex, is_safe_image, resolve_filename, Download, Downloader, FileDownloader,
    HashMarkers, Outcome, Payload, Response, ResponseHeaders, Seen, UReqFetcher,
};
pub use error::FetchError;
