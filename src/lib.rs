//! # tokengate - Local bearer token validation
//!
//! **tokengate** validates signed bearer tokens (JWTs) presented to a
//! resource server without calling the issuing authority's introspection
//! endpoint. Validation is entirely local except for one network round-trip
//! per distinct issuer to fetch that issuer's public signing key, which is
//! then cached for the lifetime of the validator.
//!
//! ## Validation flow
//!
//! ```text
//! raw token string
//!     │ decode payload          -> TokenMalformed
//!     │ time window (iat/exp)   -> TimeWindowFuture / TimeWindowExpired
//!     │ client id present       -> ClientIdMissing
//!     │ authorities well-formed -> NullAuthority
//!     │ key resolution          -> IssuerMissing / IssuerUntrusted /
//!     │   (cache or one fetch)     IssuerInvalidFormat / KeyFetchFailure
//!     │ signature verification  -> SignatureInvalid
//!     ▼
//! Claims (exactly as decoded in the first step)
//! ```
//!
//! The pipeline is fail-fast: the first failing check terminates it, nothing
//! is retried internally, and every error classifies as unauthorized
//! ([`Error::status`] is 401 for all kinds).
//!
//! ## Key resolution
//!
//! The issuer claim doubles as the key location: an issuer of the shape
//! `http(s)://<host-and-path>/oauth/token` publishes its verification key at
//! `<scheme>://<host-and-path>/token_key`, where the scheme comes from
//! configuration rather than from the issuer string. A configurable trust
//! pattern gates which issuers are fetched from at all; a cache hit bypasses
//! that gate entirely (trust was established when the issuer was first seen).
//! Concurrent resolutions for one issuer coalesce into a single fetch.
//!
//! ## Quick start
//!
//! ```ignore
//! use std::sync::Arc;
//! use regex::Regex;
//! use tokengate::{ReqwestClient, TokenValidator, ValidatorConfig};
//!
//! let validator = TokenValidator::new(
//!     ValidatorConfig::new()
//!         .trusted_issuers(Regex::new(r"^https://uaa\.example\.com/oauth/token$")?)
//!         .use_https(true),
//!     Arc::new(ReqwestClient::new()),
//! );
//!
//! let claims = validator.validate(bearer_token).await?;
//! println!("user: {:?}", claims.user_name);
//! ```
//!
//! The HTTP transport is abstracted behind [`HttpClient`]; the
//! `reqwest`-backed [`ReqwestClient`] ships behind the default `remote`
//! feature, and any other client can be plugged in.

pub mod claims;
pub mod config;
pub mod error;
pub mod keys;
pub mod remote;
pub mod resolver;
pub mod token;
pub mod utils;
pub mod validator;

pub use claims::Claims;
pub use config::ValidatorConfig;
pub use error::{Error, Result};
pub use keys::{KeyCache, MemoryKeyCache, PublicKeyRecord};
pub use remote::HttpClient;
pub use resolver::KeyResolver;
pub use token::ParsedToken;
pub use validator::TokenValidator;

#[cfg(feature = "remote")]
pub use remote::ReqwestClient;
