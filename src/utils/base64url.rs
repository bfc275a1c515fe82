//! Base64 decoding and encoding per RFC 4648
//!
//! Token segments use the URL-safe alphabet without padding; PEM bodies use
//! the standard alphabet. Failures are reported as `None` and mapped to the
//! appropriate error kind at the call site.

const URL_SAFE: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";
const STANDARD: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

fn sextet(alphabet: &[u8; 64], byte: u8) -> Option<u32> {
    alphabet.iter().position(|&c| c == byte).map(|i| i as u32)
}

fn decode_alphabet(alphabet: &[u8; 64], input: &str) -> Option<Vec<u8>> {
    let mut out = Vec::with_capacity(input.len() * 3 / 4);
    let mut buffer = 0u32;
    let mut bits = 0u32;
    let mut count = 0usize;

    for byte in input.bytes() {
        buffer = (buffer << 6) | sextet(alphabet, byte)?;
        bits += 6;
        count += 1;
        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
        }
    }

    // A single trailing sextet cannot encode a byte
    if count % 4 == 1 {
        return None;
    }
    Some(out)
}

/// Encode bytes with the URL-safe alphabet, no padding
pub fn encode_bytes(input: &[u8]) -> String {
    let mut out = String::with_capacity(input.len().div_ceil(3) * 4);
    for chunk in input.chunks(3) {
        let group = u32::from_be_bytes([
            0,
            chunk[0],
            chunk.get(1).copied().unwrap_or(0),
            chunk.get(2).copied().unwrap_or(0),
        ]);
        for i in 0..=chunk.len() {
            let shift = 18 - 6 * i;
            out.push(URL_SAFE[((group >> shift) & 0x3f) as usize] as char);
        }
    }
    out
}

/// Encode a string with the URL-safe alphabet, no padding
pub fn encode(input: &str) -> String {
    encode_bytes(input.as_bytes())
}

/// Decode a URL-safe Base64 string to bytes
pub fn decode_bytes(input: &str) -> Option<Vec<u8>> {
    decode_alphabet(URL_SAFE, input)
}

/// Decode a URL-safe Base64 string to UTF-8 text
pub fn decode(input: &str) -> Option<String> {
    String::from_utf8(decode_bytes(input)?).ok()
}

/// Decode standard-alphabet Base64, tolerating padding and whitespace
///
/// Used for PEM bodies, which are line-wrapped and padded.
pub fn decode_standard(input: &str) -> Option<Vec<u8>> {
    let cleaned: String = input
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && *c != '=')
        .collect();
    decode_alphabet(STANDARD, &cleaned)
}
