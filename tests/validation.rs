//! End-to-end pipeline tests against a mocked key endpoint

mod common;

use std::sync::Arc;

use regex::Regex;

use common::*;
use tokengate::{Claims, Error, HttpClient, TokenValidator, ValidatorConfig};

fn trusting_config() -> ValidatorConfig {
    ValidatorConfig::new()
        .trusted_issuers(Regex::new(r"^http://localhost:8080/uaa/oauth/token$").unwrap())
}

fn validator(config: ValidatorConfig) -> TokenValidator {
    TokenValidator::new(config, Arc::new(StaticClient::key_endpoint()))
}

#[tokio::test]
async fn test_valid_token_returns_decoded_claims() {
    let now = now_secs();
    let token = sign_token(&standard_payload(TOKEN_ISSUER, now, now + 3600));

    let claims = validator(trusting_config()).validate(&token).await.unwrap();

    let expected = Claims {
        issuer: Some(TOKEN_ISSUER.to_string()),
        subject: Some("1adc931e-d65f-4357-b90d-dd4131b8749a".to_string()),
        issued_at: Some(now),
        expiry: Some(now + 3600),
        client_id: Some("cf".to_string()),
        authorities: Some(vec![Some("uaa.resource".to_string())]),
        user_name: Some("marissa".to_string()),
        email: Some("marissa@test.com".to_string()),
        user_id: Some("1adc931e-d65f-4357-b90d-dd4131b8749a".to_string()),
    };
    assert_eq!(claims, expected);
}

#[tokio::test]
async fn test_tampered_payload_fails_signature() {
    let now = now_secs();
    let token = sign_token(&standard_payload(TOKEN_ISSUER, now, now + 3600));
    let tampered = tamper_payload(&token, "marissa", "mallory");

    let err = validator(trusting_config())
        .validate(&tampered)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::SignatureInvalid(_)));
    assert_eq!(err.to_string(), "invalid signature");
}

#[tokio::test]
async fn test_expired_token() {
    let now = now_secs();
    let token = sign_token(&standard_payload(TOKEN_ISSUER, now - 7200, now - 3600));

    let err = validator(trusting_config())
        .validate(&token)
        .await
        .unwrap_err();
    assert_eq!(err, Error::TimeWindowExpired);
    assert_eq!(err.to_string(), "Token is expired.");
}

#[tokio::test]
async fn test_token_issued_in_the_future() {
    let now = now_secs();
    let token = sign_token(&standard_payload(TOKEN_ISSUER, now + 3600, now + 7200));

    let err = validator(trusting_config())
        .validate(&token)
        .await
        .unwrap_err();
    assert_eq!(err, Error::TimeWindowFuture);
    assert_eq!(err.to_string(), "Token validity window is in the future.");
}

#[tokio::test]
async fn test_maximum_issued_at_rejected_as_future() {
    // iat at the top of the i64 range must fail the window check cleanly
    // rather than overflow the millisecond scaling
    let token = sign_token(&standard_payload(TOKEN_ISSUER, i64::MAX, i64::MAX));

    let err = validator(trusting_config()).validate(&token).await.unwrap_err();
    assert_eq!(err, Error::TimeWindowFuture);
}

#[tokio::test]
async fn test_missing_client_id() {
    let now = now_secs();
    let payload = format!(
        r#"{{"iss":"{TOKEN_ISSUER}","iat":{},"exp":{},"user_name":"marissa"}}"#,
        now,
        now + 3600
    );
    let token = sign_token(&payload);

    let err = validator(trusting_config())
        .validate(&token)
        .await
        .unwrap_err();
    assert_eq!(err, Error::ClientIdMissing);
}

#[tokio::test]
async fn test_null_authority_rejected() {
    let now = now_secs();
    let payload = format!(
        r#"{{"iss":"{TOKEN_ISSUER}","iat":{},"exp":{},"client_id":"cf","authorities":["uaa.resource",null]}}"#,
        now,
        now + 3600
    );
    let token = sign_token(&payload);

    let err = validator(trusting_config())
        .validate(&token)
        .await
        .unwrap_err();
    assert_eq!(err, Error::NullAuthority);
}

#[tokio::test]
async fn test_untrusted_issuer() {
    let now = now_secs();
    let token = sign_token(&standard_payload(TOKEN_ISSUER, now, now + 3600));

    let config = ValidatorConfig::new().trusted_issuers(
        Regex::new(r"^http://(.*\.)?apps\.trustedissuer\.com/oauth/token$").unwrap(),
    );
    let err = validator(config).validate(&token).await.unwrap_err();
    assert_eq!(err, Error::IssuerUntrusted(TOKEN_ISSUER.to_string()));
    assert!(err.to_string().contains(TOKEN_ISSUER));
}

#[tokio::test]
async fn test_trusted_issuer_with_invalid_shape() {
    let now = now_secs();
    let issuer = "http://localhost:8080/uaa/token";
    let token = sign_token(&standard_payload(issuer, now, now + 3600));

    let config = ValidatorConfig::new()
        .trusted_issuers(Regex::new(r"^http://localhost:8080/.*$").unwrap());
    let err = validator(config).validate(&token).await.unwrap_err();
    assert_eq!(err, Error::IssuerInvalidFormat(issuer.to_string()));
}

#[tokio::test]
async fn test_missing_issuer_claim() {
    let now = now_secs();
    let payload = format!(r#"{{"iat":{},"exp":{},"client_id":"cf"}}"#, now, now + 3600);
    let token = sign_token(&payload);

    let err = validator(ValidatorConfig::new())
        .validate(&token)
        .await
        .unwrap_err();
    assert_eq!(err, Error::IssuerMissing);
}

#[tokio::test]
async fn test_non_token_string_is_malformed() {
    let err = validator(trusting_config())
        .validate("this is not a token")
        .await
        .unwrap_err();
    assert_eq!(err, Error::TokenMalformed);
    assert_eq!(err.to_string(), "jwt malformed");
    assert_eq!(err.status(), 401);
}

#[tokio::test]
async fn test_key_fetched_once_across_validations() {
    let now = now_secs();
    let token = sign_token(&standard_payload(TOKEN_ISSUER, now, now + 3600));

    let client = Arc::new(CountingClient::key_endpoint());
    let validator = TokenValidator::new(
        trusting_config(),
        Arc::clone(&client) as Arc<dyn HttpClient>,
    );

    validator.validate(&token).await.unwrap();
    validator.validate(&token).await.unwrap();
    validator.validate(&token).await.unwrap();
    assert_eq!(client.count.load(std::sync::atomic::Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_escaped_key_material_is_unescaped() {
    // Key body whose PEM newlines arrive as literal backslash-newline pairs
    let escaped_value = VERIFYING_KEY_PEM.replace('\n', r"\\\n");
    let body = format!(r#"{{"alg":"SHA256withRSA","value":"{escaped_value}","kty":"RSA","use":"sig"}}"#);

    let now = now_secs();
    let token = sign_token(&standard_payload(TOKEN_ISSUER, now, now + 3600));

    let validator = TokenValidator::new(
        trusting_config(),
        Arc::new(StaticClient::with_body(body)),
    );
    let claims = validator.validate(&token).await.unwrap();
    assert_eq!(claims.client_id.as_deref(), Some("cf"));
}

#[tokio::test]
async fn test_key_fetch_failure_carries_issuer_and_cause() {
    let now = now_secs();
    let token = sign_token(&standard_payload(TOKEN_ISSUER, now, now + 3600));

    let validator = TokenValidator::new(
        trusting_config(),
        Arc::new(StaticClient::with_body("not json".to_string())),
    );
    let err = validator.validate(&token).await.unwrap_err();
    assert_eq!(
        err,
        Error::KeyFetchFailure {
            issuer: TOKEN_ISSUER.to_string(),
            cause: "invalid token key json".to_string(),
        }
    );
    assert_eq!(err.status(), 401);
}
