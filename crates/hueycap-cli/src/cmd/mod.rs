// crates/hueycap-cli/src/cmd/mod.rs

use hueycap_core::{CaptureConfig, RowOrder};

pub mod classify;
pub mod dump;
pub mod reconstruct;

/// Map the shared capture flags onto the core config.
pub fn capture_config(payload_field: usize, chronological: bool) -> CaptureConfig {
    CaptureConfig {
        payload_field,
        order: if chronological {
            RowOrder::Chronological
        } else {
            RowOrder::NewestFirst
        },
    }
}
