use std::io::Read;
use std::time::Duration;

use ureq::{Agent, AgentBuilder};

use crate::config::DEFAULT_TIMEOUT;

use super::{FileDownloader, Response, ResponseHeaders};

/// Blocking GET with default headers and a per-request timeout.
pub struct UReqFetcher {
    agent: Agent,
}

impl FileDownloader for UReqFetcher {
    fn fetch(&self, url: &str) -> Response {
        let response = self.agent.get(url).call();

        match response {
            Ok(response) => {
                let headers = ResponseHeaders {
                    content_type: response.header("Content-Type").map(str::to_string),
                    content_length: response.header("Content-Length").map(str::to_string),
                };

                let mut body = Vec::new();

                if let Err(err) = response.into_reader().read_to_end(&mut body) {
                    return Response::invalid_body(err.to_string());
                }

                Response::ok(body, headers)
            }

            Err(ureq::Error::Status(code, _)) => Response::status(code),

            Err(ureq::Error::Transport(transport)) => {
                Response::network_error(transport.to_string())
            }
        }
    }
}

impl UReqFetcher {
    pub fn new(timeout: Duration) -> Self {
        let agent = AgentBuilder::new().timeout(timeout).build();

        UReqFetcher { agent }
    }
}

impl Default for UReqFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}
