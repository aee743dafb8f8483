// crates/hueycap-core/src/calibration.rs
//
// Running calibration state carried across records.
// The reference count comes from the latest `00 53` device response and feeds
// the factor/luminance reported for later `04` requests and `00 04` responses.

use std::fmt;

use crate::record::RecordKind;

/// Multiplier the request factor is compared against.
pub const EXPECTED_FACTOR: f64 = 2.9;

/// Scale applied to the reference count when deriving luminance.
pub const LUMINANCE_SCALE: f64 = 1000.0;

/// Result of a division whose divisor may be zero.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Ratio {
    Finite(f64),
    NonFinite,
}

impl Ratio {
    pub fn divide(num: f64, den: f64) -> Self {
        let v = num / den;
        if v.is_finite() {
            Ratio::Finite(v)
        } else {
            Ratio::NonFinite
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Ratio::Finite(v) => Some(v),
            Ratio::NonFinite => None,
        }
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (*self, f.precision()) {
            (Ratio::Finite(v), Some(p)) => write!(f, "{v:.p$}"),
            (Ratio::Finite(v), None) => write!(f, "{v}"),
            (Ratio::NonFinite, _) => f.write_str("non-finite"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Diagnostic {
    Request04 {
        raw: [String; 2],
        value: u16,
        factor: Ratio,
        expected: f64,
    },
    Request53 {
        value: u16,
    },
    Response04 {
        value: u32,
        luminance: Ratio,
    },
    Response53 {
        value: u16,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Request04 {
                raw,
                value,
                factor,
                expected,
            } => {
                writeln!(f, "REQ 04 raw=[{}, {}]", raw[0], raw[1])?;
                writeln!(f, "REQ 04 = {value}")?;
                write!(f, "factor = {factor:.6} expected = {expected:.3}")
            }
            Diagnostic::Request53 { value } => write!(f, "REQ 53 = {value}"),
            Diagnostic::Response04 { value, luminance } => {
                write!(f, "res 04 = {value} luminance = {luminance:.9}")
            }
            Diagnostic::Response53 { value } => write!(f, "res 53 = {value} (new reference)"),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct CalibrationTracker {
    reference: u32,
}

impl CalibrationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reference(&self) -> u32 {
        self.reference
    }

    /// Feed one classified record. Memory writes and unrecognized records
    /// produce nothing.
    pub fn observe(&mut self, kind: &RecordKind) -> Option<Diagnostic> {
        match kind {
            RecordKind::CalibrationRequest { raw, value } => {
                let reference = self.reference as f64;
                let factor = Ratio::divide(*value as f64, reference);
                if factor == Ratio::NonFinite {
                    tracing::debug!(value, "request factor with zero reference");
                }
                Some(Diagnostic::Request04 {
                    raw: raw.clone(),
                    value: *value,
                    factor,
                    expected: EXPECTED_FACTOR * reference,
                })
            }
            RecordKind::CalibrationResponse { value } => {
                Some(Diagnostic::Request53 { value: *value })
            }
            RecordKind::DeviceResponse04 { value } => {
                let luminance =
                    Ratio::divide(self.reference as f64 * LUMINANCE_SCALE, *value as f64);
                if luminance == Ratio::NonFinite {
                    tracing::debug!(reference = self.reference, "luminance with zero count");
                }
                Some(Diagnostic::Response04 {
                    value: *value,
                    luminance,
                })
            }
            RecordKind::DeviceResponse53 { value } => {
                self.reference = *value as u32;
                Some(Diagnostic::Response53 { value: *value })
            }
            RecordKind::MemoryWrite { .. } | RecordKind::Unrecognized => None,
        }
    }
}
