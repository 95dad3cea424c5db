use crate::error::RidgelineError;
use crate::minutia::{Minutia, MinutiaKind};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use tracing::debug;

/// Leading magic of a finger minutiae record.
const RECORD_MAGIC: &[u8; 4] = b"FMR\0";

/// Byte offset of the big-endian u16 minutiae count.
const COUNT_OFFSET: usize = 26;

/// Size of one fixed-layout minutia record: x u16, y u16, angle u8, type u8.
const MINUTIA_RECORD_LEN: usize = 6;

/// Decode a base64 template payload into raw record bytes.
pub fn decode_template(encoded: &str) -> Result<Vec<u8>, RidgelineError> {
    BASE64
        .decode(encoded.trim())
        .map_err(|e| RidgelineError::Decode(format!("invalid base64 template: {e}")))
}

/// Parse the minutiae list out of a raw template record.
///
/// The header carries the declared minutiae count at a fixed offset, followed
/// immediately by that many 6-byte records, big-endian. A buffer that runs
/// out before the declared count is reached yields the records parsed so far;
/// truncation is a recoverable condition, not an error.
pub fn parse_minutiae(data: &[u8]) -> Result<Vec<Minutia>, RidgelineError> {
    if data.len() < RECORD_MAGIC.len() || &data[..RECORD_MAGIC.len()] != RECORD_MAGIC {
        return Err(RidgelineError::Parse(
            "missing finger minutiae record magic".to_string(),
        ));
    }

    if data.len() < COUNT_OFFSET + 2 {
        return Err(RidgelineError::Parse(format!(
            "template too short for header: {} bytes",
            data.len()
        )));
    }

    let declared = u16::from_be_bytes([data[COUNT_OFFSET], data[COUNT_OFFSET + 1]]) as usize;
    debug!("template length: {} bytes", data.len());
    debug!("declared minutiae count: {declared}");

    let mut minutiae = Vec::new();
    let mut offset = COUNT_OFFSET + 2;
    for i in 0..declared {
        if offset + MINUTIA_RECORD_LEN > data.len() {
            debug!("buffer exhausted at minutia {i} (offset {offset}), stopping early");
            break;
        }
        let x = u16::from_be_bytes([data[offset], data[offset + 1]]);
        let y = u16::from_be_bytes([data[offset + 2], data[offset + 3]]);
        let angle = data[offset + 4];
        let kind = MinutiaKind::from(data[offset + 5]);
        minutiae.push(Minutia::new(x, y, angle, kind));
        offset += MINUTIA_RECORD_LEN;
    }

    debug!("parsed {} minutiae", minutiae.len());
    Ok(minutiae)
}

/// Decode and parse in one step: base64 text in, minutiae list out.
pub fn parse_template(encoded: &str) -> Result<Vec<Minutia>, RidgelineError> {
    let raw = decode_template(encoded)?;
    parse_minutiae(&raw)
}
