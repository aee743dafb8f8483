// crates/hueycap-core/src/reconstruct.rs
//
// Single pass over a capture log. Memory writes go to the image, everything
// else to the calibration tracker. Any decode or range failure aborts the pass
// and the partially built state is dropped with it.

use crate::calibration::{CalibrationTracker, Diagnostic};
use crate::capture::Row;
use crate::config::CaptureConfig;
use crate::error::{CaptureError, DecodeReason, Result};
use crate::image::MemoryImage;
use crate::order::chronological;
use crate::record::{classify, split_payload, RecordKind};
use crate::validate::validate_config;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PassStats {
    pub rows: usize,
    pub writes: usize,
    pub req04: usize,
    pub req53: usize,
    pub res04: usize,
    pub res53: usize,
    pub unrecognized: usize,
    pub bytes_written: usize,
    /// Bytes that replaced an earlier write to the same address.
    pub overwrites: usize,
}

impl PassStats {
    fn count(&mut self, kind: &RecordKind) {
        self.rows += 1;
        match kind {
            RecordKind::MemoryWrite { .. } => self.writes += 1,
            RecordKind::CalibrationRequest { .. } => self.req04 += 1,
            RecordKind::CalibrationResponse { .. } => self.req53 += 1,
            RecordKind::DeviceResponse04 { .. } => self.res04 += 1,
            RecordKind::DeviceResponse53 { .. } => self.res53 += 1,
            RecordKind::Unrecognized => self.unrecognized += 1,
        }
    }
}

/// Outcome of a successful pass.
#[derive(Clone, Debug)]
pub struct Reconstruction {
    pub image: MemoryImage,
    pub stats: PassStats,
    /// Reference count in effect when the log ended.
    pub reference: u32,
}

pub struct Reconstructor {
    config: CaptureConfig,
    image: MemoryImage,
    tracker: CalibrationTracker,
    stats: PassStats,
}

impl Reconstructor {
    pub fn new(config: CaptureConfig) -> Result<Self> {
        validate_config(&config)?;
        Ok(Self {
            config,
            image: MemoryImage::new(),
            tracker: CalibrationTracker::new(),
            stats: PassStats::default(),
        })
    }

    /// Apply one row. `row_index` is only used for error reporting.
    /// Rows must be fed in chronological order.
    pub fn process_row(&mut self, row_index: usize, row: &[String]) -> Result<Option<Diagnostic>> {
        let field = self.config.payload_field;
        let payload = row.get(field).ok_or(CaptureError::Decode {
            row: row_index,
            reason: DecodeReason::MissingField(field),
        })?;

        let tokens = split_payload(payload);
        let kind = classify(&tokens).map_err(|reason| CaptureError::Decode {
            row: row_index,
            reason,
        })?;
        tracing::debug!(row = row_index, kind = kind.label(), "classified");
        self.stats.count(&kind);

        if let RecordKind::MemoryWrite { address, payload } = &kind {
            let overwrites = self
                .image
                .write_block(*address as usize, payload)
                .map_err(|e| CaptureError::Range {
                    row: row_index,
                    address: e.address,
                })?;
            if overwrites > 0 {
                tracing::debug!(row = row_index, address, overwrites, "overwrote earlier bytes");
            }
            self.stats.bytes_written += payload.len();
            self.stats.overwrites += overwrites;
            return Ok(None);
        }

        Ok(self.tracker.observe(&kind))
    }

    pub fn finish(self) -> Reconstruction {
        Reconstruction {
            image: self.image,
            stats: self.stats,
            reference: self.tracker.reference(),
        }
    }
}

/// Rebuild the memory image from rows as stored on disk.
/// Diagnostics are handed to `on_diag` as they occur.
pub fn reconstruct<F>(rows: Vec<Row>, config: CaptureConfig, mut on_diag: F) -> Result<Reconstruction>
where
    F: FnMut(&Diagnostic),
{
    let order = config.order;
    let mut r = Reconstructor::new(config)?;

    let indexed: Vec<(usize, Row)> = rows.into_iter().enumerate().collect();
    for (index, row) in chronological(indexed, order) {
        if let Some(d) = r.process_row(index, &row)? {
            on_diag(&d);
        }
    }

    let out = r.finish();
    tracing::info!(
        rows = out.stats.rows,
        writes = out.stats.writes,
        written = out.image.written_count(),
        "reconstruction complete"
    );
    Ok(out)
}
