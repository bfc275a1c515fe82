//! Public key records, the key cache, and signature verification

mod cache;
mod verify;

pub use cache::{KeyCache, MemoryKeyCache};
pub use verify::verify_signature;

use miniserde::Deserialize;

/// Public signing key material fetched from an issuer's `token_key` endpoint
///
/// Expected response body:
///
/// ```json
/// { "alg": "SHA256withRSA",
///   "value": "-----BEGIN PUBLIC KEY-----\n...",
///   "kty": "RSA",
///   "use": "sig" }
/// ```
///
/// Any other top-level fields are accepted and ignored. A missing `value`
/// makes signature verification impossible and is reported as a parse
/// failure. Immutable once cached.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PublicKeyRecord {
    /// Signature algorithm name (`SHA256withRSA` style or the JWT `RS256`
    /// style); SHA-256 is assumed when absent
    pub alg: Option<String>,

    /// PEM-like key text; may carry literal backslash-newline escape
    /// sequences that must be unescaped before use
    pub value: String,

    /// Key type tag
    pub kty: Option<String>,

    /// Usage tag
    #[serde(rename = "use")]
    pub usage: Option<String>,
}

impl PublicKeyRecord {
    /// Key material with literal backslash-newline pairs unescaped into real
    /// newlines
    pub fn pem(&self) -> String {
        self.value.replace("\\\n", "\n")
    }
}
