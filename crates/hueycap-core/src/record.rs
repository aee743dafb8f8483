// crates/hueycap-core/src/record.rs
//
// Payload classification for one captured control transfer.
//
// Token layout (two hex chars each):
//   00 08 AH AL B0 [B1 B2 B3]   memory write, 16-bit BE address, 1..4 bytes
//   04 VH VL ..                 calibration request
//   53 VH VL ..                 calibration response
//   00 04 V3 V2 V1 V0 ..        device response, 32-bit BE value
//   00 53 xx xx VH VL ..        device response, 16-bit BE value
//
// Anything else is ignored. Only the tokens a kind consumes are decoded.

use crate::error::DecodeReason;

/// Largest payload carried by a single memory write record.
pub const WRITE_PAYLOAD_MAX: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordKind {
    MemoryWrite { address: u16, payload: Vec<u8> },
    CalibrationRequest { raw: [String; 2], value: u16 },
    CalibrationResponse { value: u16 },
    DeviceResponse04 { value: u32 },
    DeviceResponse53 { value: u16 },
    Unrecognized,
}

impl RecordKind {
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::MemoryWrite { .. } => "write",
            RecordKind::CalibrationRequest { .. } => "req04",
            RecordKind::CalibrationResponse { .. } => "req53",
            RecordKind::DeviceResponse04 { .. } => "res04",
            RecordKind::DeviceResponse53 { .. } => "res53",
            RecordKind::Unrecognized => "other",
        }
    }
}

/// Split a payload field into its comma separated tokens.
pub fn split_payload(field: &str) -> Vec<&str> {
    field.split(',').map(str::trim).collect()
}

/// Classify a token sequence.
///
/// Precedence is fixed: the `00` prefixed kinds are resolved by their second
/// token, so a memory write can never be mistaken for a `04`/`53` record.
pub fn classify(tokens: &[&str]) -> Result<RecordKind, DecodeReason> {
    match tokens.first().copied() {
        Some("00") => {
            need(tokens, 2, "device")?;
            match tokens[1] {
                "08" => memory_write(tokens),
                "04" => {
                    need(tokens, 6, "res04")?;
                    let v = be_value(tokens, 2..6)?;
                    Ok(RecordKind::DeviceResponse04 { value: v })
                }
                "53" => {
                    need(tokens, 6, "res53")?;
                    let v = be_value(tokens, 4..6)?;
                    Ok(RecordKind::DeviceResponse53 { value: v as u16 })
                }
                _ => Ok(RecordKind::Unrecognized),
            }
        }
        Some("04") => {
            need(tokens, 3, "req04")?;
            let v = be_value(tokens, 1..3)?;
            Ok(RecordKind::CalibrationRequest {
                raw: [tokens[1].to_string(), tokens[2].to_string()],
                value: v as u16,
            })
        }
        Some("53") => {
            need(tokens, 3, "req53")?;
            let v = be_value(tokens, 1..3)?;
            Ok(RecordKind::CalibrationResponse { value: v as u16 })
        }
        _ => Ok(RecordKind::Unrecognized),
    }
}

fn memory_write(tokens: &[&str]) -> Result<RecordKind, DecodeReason> {
    // at least one payload byte after the address
    need(tokens, 5, "write")?;
    let address = be_value(tokens, 2..4)? as u16;

    let end = tokens.len().min(4 + WRITE_PAYLOAD_MAX);
    let mut payload = Vec::with_capacity(end - 4);
    for i in 4..end {
        payload.push(byte_at(tokens, i)?);
    }
    Ok(RecordKind::MemoryWrite { address, payload })
}

fn need(tokens: &[&str], n: usize, kind: &'static str) -> Result<(), DecodeReason> {
    if tokens.len() < n {
        return Err(DecodeReason::TooFewTokens {
            kind,
            need: n,
            got: tokens.len(),
        });
    }
    Ok(())
}

fn byte_at(tokens: &[&str], index: usize) -> Result<u8, DecodeReason> {
    let token = tokens[index];
    let mut out = [0u8; 1];
    hex::decode_to_slice(token, &mut out).map_err(|_| DecodeReason::BadHex {
        index,
        token: token.to_string(),
    })?;
    Ok(out[0])
}

/// Big-endian concatenation of the bytes in `range` (at most 4).
fn be_value(tokens: &[&str], range: std::ops::Range<usize>) -> Result<u32, DecodeReason> {
    let mut acc = 0u32;
    for i in range {
        acc = (acc << 8) | byte_at(tokens, i)? as u32;
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_trims_tokens() {
        assert_eq!(split_payload("00, 08 ,AA"), vec!["00", "08", "AA"]);
    }

    #[test]
    fn lowercase_hex_is_accepted() {
        let k = classify(&["00", "53", "00", "00", "ab", "cd"]).unwrap();
        assert_eq!(k, RecordKind::DeviceResponse53 { value: 0xABCD });
    }

    #[test]
    fn single_char_token_is_bad_hex() {
        let err = classify(&["04", "7", "00"]).unwrap_err();
        assert_eq!(
            err,
            DecodeReason::BadHex {
                index: 1,
                token: "7".into()
            }
        );
    }
}
