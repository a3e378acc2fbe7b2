//! Byte buffers as JavaScript literals.
//!
//! A literal is an expression, not a shared constant: every evaluation of
//! `Uint8Array.from(atob('...'), e => e.charCodeAt())` allocates a fresh
//! buffer, so a case can compare several copies without aliasing.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::{Error, Result};

const LITERAL_PREFIX: &str = "Uint8Array.from(atob('";
const LITERAL_SUFFIX: &str = "'), e => e.charCodeAt())";

/// Render `data` as an expression that rebuilds the same bytes at runtime.
pub fn encode_literal(data: &[u8]) -> String {
    let encoded = STANDARD.encode(data);
    let mut literal =
        String::with_capacity(LITERAL_PREFIX.len() + encoded.len() + LITERAL_SUFFIX.len());
    literal.push_str(LITERAL_PREFIX);
    literal.push_str(&encoded);
    literal.push_str(LITERAL_SUFFIX);
    literal
}

/// Recover the bytes carried by a literal produced by [`encode_literal`].
pub fn decode_literal(literal: &str) -> Result<Vec<u8>> {
    let payload = literal
        .trim()
        .strip_prefix(LITERAL_PREFIX)
        .and_then(|rest| rest.strip_suffix(LITERAL_SUFFIX))
        .ok_or_else(|| Error::Encoding(format!("not a Uint8Array literal: {literal:.48}")))?;
    STANDARD
        .decode(payload)
        .map_err(|e| Error::Encoding(e.to_string()))
}
