//! Error types for token validation
//!
//! Every failure the pipeline can produce is a variant of [`Error`]. All of
//! them classify as unauthorized ([`Error::status`] returns 401); callers are
//! expected to match on the kind, while the `Display` messages are the stable
//! surface for logs and tests.

/// Errors that can occur while validating a token or resolving a signing key
///
/// The pipeline is strictly fail-fast: the first failing check aborts the
/// validation attempt and its error is returned. Nothing is retried
/// internally and no error kind is fatal to the process.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Token is not three dot-separated segments with a decodable payload
    TokenMalformed,

    /// The issuer claim is absent or empty
    IssuerMissing,

    /// The issuer claim does not match the configured trust pattern
    IssuerUntrusted(String),

    /// The issuer claim does not match the `http(s)://<host>/oauth/token` shape
    IssuerInvalidFormat(String),

    /// Transport or parse failure while retrieving the issuer's public key
    KeyFetchFailure { issuer: String, cause: String },

    /// The issued-at claim is too far ahead of the current time
    TimeWindowFuture,

    /// The expiry claim is too far behind the current time
    TimeWindowExpired,

    /// The client identifier claim is absent or empty
    ClientIdMissing,

    /// A null entry appeared in the authorities list
    NullAuthority,

    /// Cryptographic signature verification failed; carries the underlying
    /// cause (`"invalid signature"` for a mismatch)
    SignatureInvalid(String),

    /// Error channel for [`HttpClient`](crate::remote::HttpClient)
    /// implementations. The resolver maps this into [`Error::KeyFetchFailure`]
    /// before it reaches a caller.
    Transport(String),
}

impl Error {
    /// Numeric status classification for the caller-facing `{status, message}`
    /// surface. Every validation failure is an unauthorized response.
    pub fn status(&self) -> u16 {
        401
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::TokenMalformed => write!(f, "jwt malformed"),
            Error::IssuerMissing => write!(f, "Issuer can not be undefined"),
            Error::IssuerUntrusted(iss) => write!(f, "Issuer is not trusted: {iss}"),
            Error::IssuerInvalidFormat(iss) => write!(f, "invalid Issuer: {iss}"),
            Error::KeyFetchFailure { issuer, cause } => {
                write!(f, "failed to fetch token key for {issuer}: {cause}")
            }
            Error::TimeWindowFuture => write!(f, "Token validity window is in the future."),
            Error::TimeWindowExpired => write!(f, "Token is expired."),
            Error::ClientIdMissing => write!(f, "client id does not exist in token"),
            Error::NullAuthority => {
                write!(f, "null authority not allowed in authority list of JWT token.")
            }
            Error::SignatureInvalid(cause) => write!(f, "{cause}"),
            Error::Transport(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {}

/// Result type alias for tokengate operations
pub type Result<T> = std::result::Result<T, Error>;
