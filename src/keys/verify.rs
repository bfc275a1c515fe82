//! Cryptographic signature verification against a resolved key record

use ring::signature::{self, UnparsedPublicKey};

use crate::error::{Error, Result};
use crate::keys::PublicKeyRecord;
use crate::utils::{base64url, der, pem};

fn verification_algorithm(
    alg: Option<&str>,
) -> Result<&'static dyn signature::VerificationAlgorithm> {
    match alg {
        // UAA-style names alongside the JWT registry names; SHA-256 when the
        // record does not say
        None | Some("SHA256withRSA") | Some("RS256") => {
            Ok(&signature::RSA_PKCS1_2048_8192_SHA256)
        }
        Some("SHA384withRSA") | Some("RS384") => Ok(&signature::RSA_PKCS1_2048_8192_SHA384),
        Some("SHA512withRSA") | Some("RS512") => Ok(&signature::RSA_PKCS1_2048_8192_SHA512),
        Some(other) => Err(Error::SignatureInvalid(format!(
            "unsupported algorithm: {other}"
        ))),
    }
}

/// Verify `signature_b64` over `signing_input` (the `header.payload` text of
/// the token) with the key carried by `record`
///
/// Every failure surfaces as [`Error::SignatureInvalid`]; a cryptographic
/// mismatch carries the cause `invalid signature`.
pub fn verify_signature(
    signing_input: &str,
    signature_b64: &str,
    record: &PublicKeyRecord,
) -> Result<()> {
    let algorithm = verification_algorithm(record.alg.as_deref())?;

    let spki = pem::decode_block(&record.pem())
        .ok_or_else(|| Error::SignatureInvalid("malformed public key".to_string()))?;
    let rsa_der = der::rsa_public_key_from_spki(&spki)
        .ok_or_else(|| Error::SignatureInvalid("malformed public key".to_string()))?;

    let signature_bytes = base64url::decode_bytes(signature_b64)
        .ok_or_else(|| Error::SignatureInvalid("invalid signature".to_string()))?;

    UnparsedPublicKey::new(algorithm, &rsa_der)
        .verify(signing_input.as_bytes(), &signature_bytes)
        .map_err(|_| Error::SignatureInvalid("invalid signature".to_string()))
}
