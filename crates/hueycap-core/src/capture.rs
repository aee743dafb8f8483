// crates/hueycap-core/src/capture.rs
//
// CSV boundary: rows come back exactly as stored (no header skipping,
// ragged rows allowed). Missing fields are reported later per row.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::Result;

pub type Row = Vec<String>;

pub fn read_rows<R: Read>(reader: R) -> Result<Vec<Row>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        rows.push(rec.iter().map(str::to_owned).collect());
    }
    tracing::debug!(rows = rows.len(), "capture rows read");
    Ok(rows)
}

pub fn read_rows_path(path: impl AsRef<Path>) -> Result<Vec<Row>> {
    let f = File::open(path)?;
    read_rows(BufReader::new(f))
}
