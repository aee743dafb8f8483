// crates/hueycap-core/src/config.rs

use crate::order::RowOrder;

/// Field of a Beagle CSV export holding the transfer payload.
pub const DEFAULT_PAYLOAD_FIELD: usize = 7;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptureConfig {
    /// Zero-based CSV field containing the comma separated hex tokens.
    pub payload_field: usize,
    pub order: RowOrder,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            payload_field: DEFAULT_PAYLOAD_FIELD,
            order: RowOrder::NewestFirst,
        }
    }
}
