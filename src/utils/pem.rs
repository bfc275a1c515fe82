//! Minimal PEM block decoding
//!
//! Key material arrives as PEM text (`-----BEGIN PUBLIC KEY-----` ...). Only
//! the first block is read; the label is not interpreted.

use crate::utils::base64url;

/// Decode the body of the first PEM block in `text` to DER bytes
pub fn decode_block(text: &str) -> Option<Vec<u8>> {
    let mut body = String::new();
    let mut in_block = false;

    for line in text.lines() {
        let line = line.trim();
        if line.starts_with("-----BEGIN ") {
            in_block = true;
            continue;
        }
        if line.starts_with("-----END ") {
            break;
        }
        if in_block {
            body.push_str(line);
        }
    }

    if !in_block || body.is_empty() {
        return None;
    }
    base64url::decode_standard(&body)
}
