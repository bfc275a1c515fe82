//! HTTP transport abstraction for key fetching
//!
//! The resolver performs exactly one kind of network call: GET a JSON body
//! from an issuer's key endpoint. This module defines the [`HttpClient`]
//! trait for that call and, behind the default `remote` feature, a
//! `reqwest`-backed implementation with a bounded timeout.

mod http;

#[cfg(feature = "remote")]
mod client;

pub use http::{FetchFuture, HttpClient};

#[cfg(feature = "remote")]
pub use client::ReqwestClient;
