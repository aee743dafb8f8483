use crate::config::CaptureConfig;
use crate::error::{CaptureError, Result};

/// Widest capture export we expect to see.
pub const MAX_PAYLOAD_FIELD: usize = 64;

pub fn validate_config(c: &CaptureConfig) -> Result<()> {
    if c.payload_field > MAX_PAYLOAD_FIELD {
        return Err(CaptureError::Validation(format!(
            "payload_field must be <= {MAX_PAYLOAD_FIELD}, got {}",
            c.payload_field
        )));
    }
    Ok(())
}
