mod ureq_fetcher;

use super::{FileDownloader, Response, ResponseHeaders};

pub use ureq_fetcher::UReqFetcher;

#[cfg(test)]
mod mock_fetcher;

#[cfg(test)]
pub use mock_fetcher::MockFetcher;
