pub mod error;
pub mod validate;

pub mod calibration;
pub mod capture;
pub mod config;
pub mod image;
pub mod order;
pub mod reconstruct;
pub mod record;

pub use crate::calibration::{CalibrationTracker, Diagnostic, Ratio};
pub use crate::config::CaptureConfig;
pub use crate::error::{CaptureError, DecodeReason, Result};
pub use crate::image::{MemoryImage, Slot, EEPROM_SIZE, SENTINEL};
pub use crate::order::RowOrder;
pub use crate::reconstruct::{reconstruct, PassStats, Reconstruction, Reconstructor};
pub use crate::record::RecordKind;
