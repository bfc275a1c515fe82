//! Reqwest-backed HttpClient implementation

use std::time::Duration;

use crate::error::Error;
use crate::remote::http::{FetchFuture, HttpClient};

/// Per-request timeout for key fetches
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// [`HttpClient`] backed by a shared `reqwest::Client`
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Create a client with the default connection pool
    pub fn new() -> Self {
        Self::default()
    }
}

impl HttpClient for ReqwestClient {
    fn fetch(&self, url: &str) -> FetchFuture<'_> {
        let client = self.client.clone();
        let url = url.to_string();
        Box::pin(async move {
            let response = client
                .get(&url)
                .timeout(FETCH_TIMEOUT)
                .send()
                .await
                .map_err(|e| Error::Transport(format!("network: {e}")))?;

            if !response.status().is_success() {
                return Err(Error::Transport(format!(
                    "http: status {}",
                    response.status()
                )));
            }

            let bytes = response
                .bytes()
                .await
                .map_err(|e| Error::Transport(format!("network: {e}")))?;
            Ok(bytes.to_vec())
        })
    }
}
