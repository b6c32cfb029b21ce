use crate::shared::error::TevCatError;
use crate::shared::Result;
use base64::Engine as _;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Raw JSON collections carried by the payload
///
/// Records stay untyped here; `RecordBuilder` coerces them field by field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DecodedPayload {
    pub sources: Vec<Map<String, Value>>,
    pub catalogs: Map<String, Value>,
}

/// PayloadDecoder service - base64 + JSON decoding of the embedded catalog
pub struct PayloadDecoder;

impl PayloadDecoder {
    /// Decodes the first `length` characters of `data`.
    ///
    /// A `length` beyond the end of `data` uses the whole string.
    ///
    /// # Errors
    /// `TevCatError::InvalidPayload` on malformed base64, non UTF-8 bytes,
    /// invalid JSON, or a JSON document without the `sources` array and the
    /// `catalogs` object.
    pub fn decode(data: &str, length: usize) -> Result<DecodedPayload> {
        let truncated = match data.char_indices().nth(length) {
            Some((end, _)) => &data[..end],
            None => data,
        };

        let bytes = base64::engine::general_purpose::STANDARD
            .decode(truncated)
            .map_err(|e| invalid(format!("malformed base64: {}", e)))?;

        let text =
            String::from_utf8(bytes).map_err(|e| invalid(format!("payload is not UTF-8: {}", e)))?;

        Self::parse_json(&text)
    }

    /// Parses already-decoded JSON text.
    pub fn parse_json(text: &str) -> Result<DecodedPayload> {
        serde_json::from_str(text)
            .map_err(|e| invalid(format!("invalid catalog JSON: {}", e)).into())
    }
}

fn invalid(details: String) -> TevCatError {
    TevCatError::InvalidPayload { details }
}
