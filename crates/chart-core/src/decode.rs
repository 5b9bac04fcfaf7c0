// File: crates/chart-core/src/decode.rs
// Summary: Best-effort decoding of serialized series payloads with a fallback.

use tracing::error;

use crate::error::DecodeError;
use crate::series::SeriesData;

/// Parse a serialized payload. Any syntactically valid JSON value is accepted
/// without shape or length checks.
pub fn try_decode(raw: Option<&str>) -> Result<SeriesData, DecodeError> {
    let raw = raw.ok_or(DecodeError::Missing)?;
    let value = serde_json::from_str(raw)?;
    Ok(SeriesData::from_value(value))
}

/// Decode `raw`, substituting `fallback` on any failure. Never fails; each
/// fallback is reported as one error event.
pub fn decode(raw: Option<&str>, fallback: &SeriesData) -> SeriesData {
    match try_decode(raw) {
        Ok(series) => series,
        Err(err) => {
            error!(error = %err, "payload decoding failed, using fallback series");
            fallback.clone()
        }
    }
}
