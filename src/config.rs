//! Validator configuration

use regex::Regex;

/// Default clock skew tolerance in seconds
pub const DEFAULT_CLOCK_SKEW_SECS: i64 = 60;

/// Immutable configuration supplied when constructing a
/// [`TokenValidator`](crate::TokenValidator)
///
/// # Example
///
/// ```ignore
/// use regex::Regex;
/// use tokengate::ValidatorConfig;
///
/// let config = ValidatorConfig::new()
///     .trusted_issuers(Regex::new(r"^http://(.*\.)?apps\.example\.com/oauth/token$")?)
///     .use_https(true);
/// ```
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Pattern matched against the issuer claim; `None` means open trust and
    /// the check is skipped (caller's responsibility).
    pub(crate) trusted_issuer_pattern: Option<Regex>,

    /// Scheme for the derived key endpoint, independent of the scheme in the
    /// issuer string itself.
    pub(crate) use_https: bool,

    /// Tolerance absorbing clock drift between issuer and verifier.
    pub(crate) max_clock_skew_secs: i64,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            trusted_issuer_pattern: None,
            use_https: true,
            max_clock_skew_secs: DEFAULT_CLOCK_SKEW_SECS,
        }
    }
}

impl ValidatorConfig {
    /// Create a configuration with defaults: open trust, https key endpoints,
    /// 60 second clock skew
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict which issuers may be resolved at all
    pub fn trusted_issuers(mut self, pattern: Regex) -> Self {
        self.trusted_issuer_pattern = Some(pattern);
        self
    }

    /// Choose the transport scheme for derived key endpoints
    pub fn use_https(mut self, use_https: bool) -> Self {
        self.use_https = use_https;
        self
    }

    /// Override the clock skew tolerance in seconds
    pub fn clock_skew_secs(mut self, secs: i64) -> Self {
        self.max_clock_skew_secs = secs;
        self
    }
}
