//! Compact token parsing
//!
//! A token is an opaque three-segment string: header, payload, and signature,
//! each Base64URL-encoded and joined by `.`. Parsing decodes the payload into
//! [`Claims`] without verifying anything; the pipeline owns the checks.

use crate::claims::Claims;
use crate::error::{Error, Result};
use crate::utils::base64url;

/// A token split into its segments with the payload decoded
///
/// The claims in here are untrusted until the pipeline has run to completion.
#[derive(Debug)]
pub struct ParsedToken {
    header_b64: String,
    payload_b64: String,
    signature_b64: String,
    claims: Claims,
}

impl ParsedToken {
    /// Parse a compact token string
    ///
    /// Any structural failure (wrong segment count, undecodable payload,
    /// payload that is not a JSON object) is [`Error::TokenMalformed`].
    pub fn from_string(token: &str) -> Result<Self> {
        let mut segments = token.split('.');
        let (Some(header_b64), Some(payload_b64), Some(signature_b64), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(Error::TokenMalformed);
        };

        let payload_json = base64url::decode(payload_b64).ok_or(Error::TokenMalformed)?;
        let claims: Claims =
            miniserde::json::from_str(&payload_json).map_err(|_| Error::TokenMalformed)?;

        Ok(Self {
            header_b64: header_b64.to_string(),
            payload_b64: payload_b64.to_string(),
            signature_b64: signature_b64.to_string(),
            claims,
        })
    }

    /// The decoded claims (untrusted before validation completes)
    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    /// Consume the token, keeping only the claims
    pub fn into_claims(self) -> Claims {
        self.claims
    }

    /// The `header.payload` text the signature was computed over
    pub(crate) fn signing_input(&self) -> String {
        format!("{}.{}", self.header_b64, self.payload_b64)
    }

    pub(crate) fn signature(&self) -> &str {
        &self.signature_b64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(payload: &str) -> String {
        format!(
            "{}.{}.{}",
            base64url::encode(r#"{"alg":"RS256","typ":"JWT"}"#),
            base64url::encode(payload),
            base64url::encode("sig")
        )
    }

    #[test]
    fn test_parse_valid_token() {
        let token = token_with_payload(r#"{"iss":"http://x/oauth/token","client_id":"cf"}"#);
        let parsed = ParsedToken::from_string(&token).unwrap();
        assert_eq!(parsed.claims().issuer.as_deref(), Some("http://x/oauth/token"));
        assert_eq!(parsed.claims().client_id.as_deref(), Some("cf"));
    }

    #[test]
    fn test_signing_input_excludes_signature() {
        let token = token_with_payload(r#"{"client_id":"cf"}"#);
        let parsed = ParsedToken::from_string(&token).unwrap();
        let dot_count = parsed.signing_input().matches('.').count();
        assert_eq!(dot_count, 1);
        assert!(token.starts_with(&parsed.signing_input()));
    }

    #[test]
    fn test_wrong_segment_count_is_malformed() {
        for input in ["", "abc", "a.b", "a.b.c.d"] {
            assert_eq!(
                ParsedToken::from_string(input).unwrap_err(),
                Error::TokenMalformed,
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_undecodable_payload_is_malformed() {
        let token = format!("{}.!!!.{}", base64url::encode("{}"), base64url::encode("s"));
        assert_eq!(
            ParsedToken::from_string(&token).unwrap_err(),
            Error::TokenMalformed
        );
    }

    #[test]
    fn test_non_json_payload_is_malformed() {
        let token = token_with_payload("not json");
        assert_eq!(
            ParsedToken::from_string(&token).unwrap_err(),
            Error::TokenMalformed
        );
    }
}
