use thiserror::Error;

pub type Result<T> = std::result::Result<T, CaptureError>;

/// Why a single capture row could not be decoded.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DecodeReason {
    #[error("missing payload field {0}")]
    MissingField(usize),

    #[error("{kind} record needs {need} tokens, got {got}")]
    TooFewTokens {
        kind: &'static str,
        need: usize,
        got: usize,
    },

    #[error("token {index} ({token:?}) is not a hex byte")]
    BadHex { index: usize, token: String },
}

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("decode error at row {row}: {reason}")]
    Decode { row: usize, reason: DecodeReason },

    #[error("range error at row {row}: address 0x{address:04X} is outside the image")]
    Range { row: usize, address: usize },

    #[error("validation error: {0}")]
    Validation(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
