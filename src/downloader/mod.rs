mod dedup;
mod fetcher;
mod filename;
mod validate;

use std::fs;
use std::path::{Path, PathBuf};

use url::Url;

use crate::config::FetchConfig;
use crate::error::FetchError;

pub use dedup::{digest_hex, HashMarkers, Seen};
pub use fetcher::UReqFetcher;
pub use filename::resolve_filename;
pub use validate::is_safe_image;

#[cfg(test)]
pub(crate) use fetcher::MockFetcher;

/// Headers the fetch loop cares about, as the server declared them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseHeaders {
    pub content_type: Option<String>,
    pub content_length: Option<String>,
}

#[derive(Debug, PartialEq)]
pub struct Payload {
    pub body: Vec<u8>,
    pub headers: ResponseHeaders,
}

#[derive(Debug, PartialEq)]
pub enum Response {
    Ok(Payload),
    Status(u16),
    NetworkError(String),
    InvalidBody(String),
}

impl Response {
    pub fn ok(body: Vec<u8>, headers: ResponseHeaders) -> Self {
        Self::Ok(Payload { body, headers })
    }

    pub fn status(code: u16) -> Self {
        Self::Status(code)
    }

    pub fn network_error(message: impl Into<String>) -> Self {
        Self::NetworkError(message.into())
    }

    pub fn invalid_body(message: impl Into<String>) -> Self {
        Self::InvalidBody(message.into())
    }
}

pub trait FileDownloader {
    fn fetch(&self, url: &str) -> Response;
}

pub struct Downloader<T: FileDownloader> {
    fetcher: T,
    path: PathBuf,
    markers: HashMarkers,
}

/// A freshly saved image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub source: String,
    pub file_name: String,
    pub file: PathBuf,
    pub size: usize,
    pub digest: String,
    pub headers: ResponseHeaders,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Saved(Download),
    /// Same bytes were fetched before (from any URL); nothing was written.
    Duplicate { digest: String },
}

impl<T> Downloader<T>
where
    T: FileDownloader,
{
    /// Creates the fetch directory if needed. Safe to call when it already exists.
    pub fn with_fetcher(config: &FetchConfig, fetcher: T) -> Result<Self, FetchError> {
        let path = config.fetch_dir.clone();

        fs::create_dir_all(&path)?;

        let markers = HashMarkers::new(&path);

        Ok(Downloader {
            fetcher,
            path,
            markers,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fetches one URL and saves it unless it is not an image or was seen before.
    pub fn download(&self, url: &str) -> Result<Outcome, FetchError> {
        let url = Url::parse(url)?;

        tracing::debug!(%url, "fetching");

        let Payload { body, headers } = match self.fetcher.fetch(url.as_str()) {
            Response::Ok(payload) => payload,
            Response::Status(code) => return Err(FetchError::Status(code)),
            Response::NetworkError(message) => return Err(FetchError::Network(message)),
            Response::InvalidBody(message) => return Err(FetchError::InvalidBody(message)),
        };

        let content_type = headers.content_type.as_deref();

        if !is_safe_image(content_type) {
            tracing::info!(%url, ?content_type, "rejected non-image response");
            return Err(FetchError::UnsafeContentType(headers.content_type));
        }

        validate::log_sniffed_format(content_type, &body);

        let digest = match self.markers.check_and_mark(&body)? {
            Seen::Duplicate(digest) => {
                tracing::info!(%url, %digest, "skipping duplicate content");
                return Ok(Outcome::Duplicate { digest });
            }
            Seen::New(digest) => digest,
        };

        let file_name = resolve_filename(&url, content_type);
        let file = self.path.join(&file_name);

        fs::write(&file, &body)?;

        tracing::info!(%url, file = %file.display(), size = body.len(), "saved image");

        Ok(Outcome::Saved(Download {
            source: String::from(url.as_str()),
            file_name,
            file,
            size: body.len(),
            digest,
            headers,
        }))
    }
}

impl Downloader<UReqFetcher> {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let fetcher = UReqFetcher::new(config.timeout);
        Downloader::with_fetcher(config, fetcher)
    }
}
