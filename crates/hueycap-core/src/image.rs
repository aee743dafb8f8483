// crates/hueycap-core/src/image.rs
//
// Sparse EEPROM image: every address is either written or untouched.
// Serialized form is always EEPROM_SIZE bytes; untouched addresses become SENTINEL.

use std::ops::Range;

use thiserror::Error;

use crate::error::{CaptureError, Result};

/// Memory size of the sensor.
pub const EEPROM_SIZE: usize = 1024;

/// Output byte for addresses never written.
pub const SENTINEL: u8 = 0xFE;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Slot {
    Written(u8),
    #[default]
    Unwritten,
}

#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
#[error("address 0x{address:04X} outside image")]
pub struct OutOfRange {
    pub address: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryImage {
    slots: [Slot; EEPROM_SIZE],
}

impl Default for MemoryImage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryImage {
    pub fn new() -> Self {
        Self {
            slots: [Slot::Unwritten; EEPROM_SIZE],
        }
    }

    /// Set one byte, returning what the slot held before.
    pub fn write(&mut self, address: usize, byte: u8) -> std::result::Result<Slot, OutOfRange> {
        let slot = self
            .slots
            .get_mut(address)
            .ok_or(OutOfRange { address })?;
        Ok(std::mem::replace(slot, Slot::Written(byte)))
    }

    /// Write consecutive bytes starting at `address`.
    /// Returns how many of them replaced an earlier write.
    /// Nothing is written when any byte would land out of range.
    pub fn write_block(&mut self, address: usize, bytes: &[u8]) -> std::result::Result<usize, OutOfRange> {
        if bytes.is_empty() {
            return Ok(0);
        }
        if address + bytes.len() > EEPROM_SIZE {
            // first offending address
            return Err(OutOfRange {
                address: address.max(EEPROM_SIZE),
            });
        }

        let mut overwrites = 0;
        for (i, &b) in bytes.iter().enumerate() {
            if let Slot::Written(_) = self.write(address + i, b)? {
                overwrites += 1;
            }
        }
        Ok(overwrites)
    }

    pub fn slot(&self, address: usize) -> Option<Slot> {
        self.slots.get(address).copied()
    }

    pub fn written_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| matches!(s, Slot::Written(_)))
            .count()
    }

    /// Maximal runs of written addresses, in address order.
    pub fn written_ranges(&self) -> Vec<Range<usize>> {
        let mut out = Vec::new();
        let mut start: Option<usize> = None;
        for (i, s) in self.slots.iter().enumerate() {
            match (s, start) {
                (Slot::Written(_), None) => start = Some(i),
                (Slot::Unwritten, Some(st)) => {
                    out.push(st..i);
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(st) = start {
            out.push(st..EEPROM_SIZE);
        }
        out
    }

    pub fn serialize(&self) -> Vec<u8> {
        self.slots
            .iter()
            .map(|s| match *s {
                Slot::Written(b) => b,
                Slot::Unwritten => SENTINEL,
            })
            .collect()
    }

    /// Load a dumped image. SENTINEL bytes read back as unwritten, so an
    /// explicit 0xFE write cannot be told apart from an untouched address.
    pub fn from_serialized(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != EEPROM_SIZE {
            return Err(CaptureError::Validation(format!(
                "image must be {EEPROM_SIZE} bytes, got {}",
                bytes.len()
            )));
        }
        let mut img = Self::new();
        for (slot, &b) in img.slots.iter_mut().zip(bytes) {
            if b != SENTINEL {
                *slot = Slot::Written(b);
            }
        }
        Ok(img)
    }
}
