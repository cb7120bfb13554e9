use std::path::{Path, PathBuf};
use std::time::Duration;

/// Directory, relative to the working directory, that holds saved images and hash markers.
pub const DEFAULT_FETCH_DIR: &str = "Fetched_Images";

/// Timeout applied to each GET request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings threaded through the downloader and the marker set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Destination for saved images and `<sha256>.hash` markers.
    pub fetch_dir: PathBuf,
    /// Upper bound for a single request, not for the whole batch.
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            fetch_dir: PathBuf::from(DEFAULT_FETCH_DIR),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl FetchConfig {
    pub fn with_fetch_dir(mut self, fetch_dir: impl AsRef<Path>) -> Self {
        self.fetch_dir = fetch_dir.as_ref().to_path_buf();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
