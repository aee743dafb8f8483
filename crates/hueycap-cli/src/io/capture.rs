// crates/hueycap-cli/src/io/capture.rs

use anyhow::{Context, Result};
use hueycap_core::capture::{read_rows_path, Row};

/// Load every row of a capture CSV.
pub fn load_rows(path: &str) -> Result<Vec<Row>> {
    read_rows_path(path).with_context(|| format!("read capture {path}"))
}
