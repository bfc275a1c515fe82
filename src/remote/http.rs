//! HTTP client trait

use std::future::Future;
use std::pin::Pin;

use crate::error::Result;

/// Future returned by [`HttpClient::fetch`]
pub type FetchFuture<'a> = Pin<Box<dyn Future<Output = Result<Vec<u8>>> + Send + 'a>>;

/// A client that can GET a URL and return the response body
///
/// Implementations should report failures as
/// [`Error::Transport`](crate::Error::Transport) with a
/// `"component: description"` message (e.g. `"network: connection refused"`,
/// `"http: status 404"`) and must impose a bounded timeout on the underlying
/// call: an unresponsive issuer otherwise stalls every validation needing
/// that issuer's key.
pub trait HttpClient: Send + Sync {
    /// Fetch the body at `url`
    fn fetch(&self, url: &str) -> FetchFuture<'_>;
}
