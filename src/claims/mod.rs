//! Claim vocabulary and the decoded claims type
//!
//! The claim name constants record the wire names of the claims the pipeline
//! reads; [`Claims`] maps each of them onto a typed field.

use miniserde::Deserialize;

/// Issuer claim name
pub const ISS: &str = "iss";
/// Subject claim name
pub const SUB: &str = "sub";
/// Issued-at claim name (seconds since Unix epoch)
pub const IAT: &str = "iat";
/// Expiry claim name (seconds since Unix epoch)
pub const EXP: &str = "exp";
/// Client identifier claim name
pub const CLIENT_ID: &str = "client_id";
/// Authorities list claim name
pub const AUTHORITIES: &str = "authorities";
/// User name claim name
pub const USER_NAME: &str = "user_name";
/// Email claim name
pub const EMAIL: &str = "email";
/// User identifier claim name
pub const USER_ID: &str = "user_id";

/// Claims decoded from a token payload
///
/// Decoded once per `validate` call, never mutated afterwards, and returned
/// to the caller on success. Unknown payload fields are ignored; every claim
/// the pipeline reads is optional at the type level so that absence can be
/// handled per check (an absent `exp`, for instance, passes the time window
/// check by design).
///
/// `authorities` elements are `Option` so that `null` entries survive
/// decoding; the pipeline rejects them with
/// [`Error::NullAuthority`](crate::Error::NullAuthority).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Claims {
    /// Issuer (`iss`) - the authority that signed the token
    #[serde(rename = "iss")]
    pub issuer: Option<String>,

    /// Subject (`sub`)
    #[serde(rename = "sub")]
    pub subject: Option<String>,

    /// Issued At (`iat`), seconds since Unix epoch
    #[serde(rename = "iat")]
    pub issued_at: Option<i64>,

    /// Expiration Time (`exp`), seconds since Unix epoch
    #[serde(rename = "exp")]
    pub expiry: Option<i64>,

    /// Client identifier (`client_id`)
    pub client_id: Option<String>,

    /// Granted authorities (`authorities`)
    pub authorities: Option<Vec<Option<String>>>,

    /// User name (`user_name`)
    pub user_name: Option<String>,

    /// Email (`email`)
    pub email: Option<String>,

    /// User identifier (`user_id`)
    pub user_id: Option<String>,
}
