//! # Value Envelope Adapter
//!
//! The wire encoding applied to listing amounts and prices: the decimal
//! text of the number, base64-encoded, behind an `FHE-` marker prefix.
//!
//! This is NOT encryption. The encoding is publicly invertible and exists
//! for wire compatibility with the deployed records; genuine
//! confidentiality would require a real cipher and a verified
//! authorization gate in front of decoding.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::domain::ValueError;
use crate::ports::outbound::ValueCodec;

/// Marker prefix carried by enveloped values.
pub const ENVELOPE_PREFIX: &str = "FHE-";

/// Default [`ValueCodec`]: `FHE-` + base64 over the decimal text.
///
/// Decoding also accepts a bare decimal number with no prefix, matching
/// records written before the envelope was introduced.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvelopeValueCodec;

impl EnvelopeValueCodec {
    pub fn new() -> Self {
        Self
    }
}

impl ValueCodec for EnvelopeValueCodec {
    fn encode(&self, value: f64) -> String {
        format!("{}{}", ENVELOPE_PREFIX, BASE64.encode(value.to_string()))
    }

    fn decode(&self, encoded: &str) -> Result<f64, ValueError> {
        let text = match encoded.strip_prefix(ENVELOPE_PREFIX) {
            Some(body) => {
                let bytes = BASE64.decode(body).map_err(|_| ValueError::InvalidBase64)?;
                String::from_utf8(bytes).map_err(|_| ValueError::InvalidBase64)?
            }
            None => encoded.to_string(),
        };
        text.trim()
            .parse::<f64>()
            .map_err(|_| ValueError::NotANumber { text })
    }
}
