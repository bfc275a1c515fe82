//! The validation pipeline and its composition root
//!
//! [`TokenValidator`] wires configuration into a [`KeyResolver`] and exposes
//! the single entry point [`validate`](TokenValidator::validate). The
//! pipeline is a fixed ordered sequence of checks; the first failure
//! terminates it and nothing partial is returned:
//!
//! 1. decode the payload
//! 2. time window (issued-at, expiry, both tolerant of clock skew)
//! 3. client identifier presence
//! 4. authorities well-formedness
//! 5. key resolution (the only step that can suspend on the network)
//! 6. cryptographic signature verification
//!
//! Whether a credential was presented at all is the HTTP layer's concern and
//! is checked before this crate is ever invoked.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use log::trace;

use crate::claims::Claims;
use crate::config::ValidatorConfig;
use crate::error::{Error, Result};
use crate::keys::{verify_signature, KeyCache};
use crate::remote::HttpClient;
use crate::resolver::KeyResolver;
use crate::token::ParsedToken;

/// Validates bearer tokens against a trust policy and remotely resolved keys
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use tokengate::{ReqwestClient, TokenValidator, ValidatorConfig};
///
/// let validator = TokenValidator::new(
///     ValidatorConfig::new().use_https(true),
///     Arc::new(ReqwestClient::new()),
/// );
/// let claims = validator.validate(token_str).await?;
/// println!("client: {:?}", claims.client_id);
/// ```
pub struct TokenValidator {
    config: Arc<ValidatorConfig>,
    resolver: KeyResolver,
}

impl TokenValidator {
    /// Create a validator with the default in-memory key cache
    pub fn new(config: ValidatorConfig, client: Arc<dyn HttpClient>) -> Self {
        let config = Arc::new(config);
        let resolver = KeyResolver::new(Arc::clone(&config), client);
        Self { config, resolver }
    }

    /// Create a validator with an injected key cache
    pub fn with_cache(
        config: ValidatorConfig,
        client: Arc<dyn HttpClient>,
        cache: Arc<dyn KeyCache>,
    ) -> Self {
        let config = Arc::new(config);
        let resolver = KeyResolver::with_cache(Arc::clone(&config), client, cache);
        Self { config, resolver }
    }

    /// The resolver backing this validator
    pub fn resolver(&self) -> &KeyResolver {
        &self.resolver
    }

    /// Run the pipeline over a compact token string
    ///
    /// On success returns the claims exactly as decoded in the first step,
    /// untouched by the later checks.
    pub async fn validate(&self, token: &str) -> Result<Claims> {
        let parsed = ParsedToken::from_string(token)?;

        check_time_window(parsed.claims(), self.config.max_clock_skew_secs, now_millis())?;
        check_client_id(parsed.claims())?;
        check_authorities(parsed.claims())?;

        let issuer = parsed.claims().issuer.clone().unwrap_or_default();
        let record = self.resolver.resolve_key(&issuer).await?;

        verify_signature(&parsed.signing_input(), parsed.signature(), &record)?;
        trace!("validated token issued by {issuer}");

        Ok(parsed.into_claims())
    }
}

/// Reject tokens outside their validity window, tolerating `skew` seconds of
/// clock drift. Absent claims pass: there is no claim to violate, and callers
/// requiring a mandatory expiry must enforce it externally.
///
/// Claim values are attacker-supplied, so the second-to-millisecond scaling
/// saturates instead of wrapping; a claim pinned at either end of the `i64`
/// range stays at that end of the window.
fn check_time_window(claims: &Claims, skew: i64, now_ms: i64) -> Result<()> {
    if let Some(issued_at) = claims.issued_at {
        if issued_at.saturating_sub(skew).saturating_mul(1000) > now_ms {
            return Err(Error::TimeWindowFuture);
        }
    }
    if let Some(expiry) = claims.expiry {
        if expiry.saturating_add(skew).saturating_mul(1000) < now_ms {
            return Err(Error::TimeWindowExpired);
        }
    }
    Ok(())
}

fn check_client_id(claims: &Claims) -> Result<()> {
    match claims.client_id.as_deref() {
        Some(client_id) if !client_id.is_empty() => Ok(()),
        _ => Err(Error::ClientIdMissing),
    }
}

fn check_authorities(claims: &Claims) -> Result<()> {
    if let Some(authorities) = &claims.authorities {
        if authorities.iter().any(|authority| authority.is_none()) {
            return Err(Error::NullAuthority);
        }
    }
    Ok(())
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}
