//! Issuer key resolution
//!
//! Given a trusted issuer identifier, derives the issuer's key endpoint,
//! fetches the signing key material, and caches it for the lifetime of the
//! resolver. A cache hit returns immediately and bypasses the trust and
//! format checks entirely: trust was established the first time the issuer
//! was seen, so entries persist even if the trust policy is later tightened.
//! That is an operational caveat of the no-eviction cache, not a bug;
//! deployments needing invalidation can inject their own [`KeyCache`].

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use log::debug;
use regex::Regex;
use tokio::sync::Mutex as AsyncMutex;

use crate::config::ValidatorConfig;
use crate::error::{Error, Result};
use crate::keys::{KeyCache, MemoryKeyCache, PublicKeyRecord};
use crate::remote::HttpClient;

static ISSUER_SHAPE: OnceLock<Regex> = OnceLock::new();

/// Issuers must look like `http(s)://<host-and-path>/oauth/token`
fn issuer_shape() -> &'static Regex {
    ISSUER_SHAPE.get_or_init(|| {
        Regex::new(r"^http.*://(.+)/oauth/token$").expect("issuer shape pattern is well-formed")
    })
}

/// Resolves and caches issuer signing keys
///
/// Concurrent resolutions for the same issuer coalesce on a per-issuer lock:
/// one caller performs the fetch, the rest find the record in the cache once
/// the lock is released, so at most one outbound request happens per
/// distinct issuer.
pub struct KeyResolver {
    config: Arc<ValidatorConfig>,
    client: Arc<dyn HttpClient>,
    cache: Arc<dyn KeyCache>,
    inflight: AsyncMutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

impl KeyResolver {
    /// Create a resolver with the default in-memory, no-expiry cache
    pub fn new(config: Arc<ValidatorConfig>, client: Arc<dyn HttpClient>) -> Self {
        Self::with_cache(config, client, Arc::new(MemoryKeyCache::new()))
    }

    /// Create a resolver with an injected cache implementation
    pub fn with_cache(
        config: Arc<ValidatorConfig>,
        client: Arc<dyn HttpClient>,
        cache: Arc<dyn KeyCache>,
    ) -> Self {
        Self {
            config,
            client,
            cache,
            inflight: AsyncMutex::new(HashMap::new()),
        }
    }

    /// Resolve the public signing key for `issuer`
    ///
    /// Failure ordering on a cache miss: empty issuer, trust check, URL
    /// format check, fetch, parse. A fetch failure is terminal for this call;
    /// the next call for the same issuer simply tries again. Issuers that
    /// fail the trust or format checks leave no state behind.
    pub async fn resolve_key(&self, issuer: &str) -> Result<PublicKeyRecord> {
        if issuer.is_empty() {
            return Err(Error::IssuerMissing);
        }

        if let Some(record) = self.cache.get(issuer) {
            debug!("token key cache hit for {issuer}");
            return Ok(record);
        }

        let endpoint = self.key_endpoint(issuer)?;

        // Per-issuer single flight: losers of the race block on the gate,
        // then find the winner's record in the cache. The entry is removed
        // once the fetch settles so rejected or transient issuers cannot
        // grow the map without bound.
        let gate = {
            let mut inflight = self.inflight.lock().await;
            Arc::clone(inflight.entry(issuer.to_string()).or_default())
        };
        let result = {
            let _fetching = gate.lock().await;
            self.fetch_key(issuer, &endpoint).await
        };
        self.inflight.lock().await.remove(issuer);
        result
    }

    async fn fetch_key(&self, issuer: &str, endpoint: &str) -> Result<PublicKeyRecord> {
        if let Some(record) = self.cache.get(issuer) {
            return Ok(record);
        }

        debug!("fetching token key for {issuer} from {endpoint}");
        let body = self.client.fetch(endpoint).await.map_err(|e| {
            Error::KeyFetchFailure {
                issuer: issuer.to_string(),
                cause: e.to_string(),
            }
        })?;
        let record = parse_key_response(&body).map_err(|cause| Error::KeyFetchFailure {
            issuer: issuer.to_string(),
            cause,
        })?;

        self.cache.insert(issuer, record.clone());
        debug!("cached token key for {issuer}");
        Ok(record)
    }

    /// Derive the key endpoint for `issuer` after the trust and format checks
    ///
    /// `<issuer host and path>/token_key`, with the scheme chosen by
    /// configuration rather than taken from the issuer string.
    pub fn key_endpoint(&self, issuer: &str) -> Result<String> {
        self.check_trusted(issuer)?;

        let host_and_path = issuer_shape()
            .captures(issuer)
            .and_then(|captures| captures.get(1))
            .ok_or_else(|| Error::IssuerInvalidFormat(issuer.to_string()))?;

        let scheme = if self.config.use_https { "https" } else { "http" };
        Ok(format!("{scheme}://{}/token_key", host_and_path.as_str()))
    }

    fn check_trusted(&self, issuer: &str) -> Result<()> {
        if let Some(pattern) = &self.config.trusted_issuer_pattern {
            if !pattern.is_match(issuer) {
                return Err(Error::IssuerUntrusted(issuer.to_string()));
            }
        }
        Ok(())
    }
}

fn parse_key_response(body: &[u8]) -> std::result::Result<PublicKeyRecord, String> {
    let text = std::str::from_utf8(body).map_err(|e| format!("utf8 decode failed: {e}"))?;
    miniserde::json::from_str(text).map_err(|_| "invalid token key json".to_string())
}
