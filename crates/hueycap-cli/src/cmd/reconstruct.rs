use anyhow::Context;
use clap::Args;
use hueycap_core::config::DEFAULT_PAYLOAD_FIELD;
use hueycap_core::{reconstruct, EEPROM_SIZE};

use crate::io::{bin, capture, jsonl};

#[derive(Args, Debug)]
pub struct ReconstructArgs {
    /// Input capture log (CSV, newest row first unless --chronological)
    #[arg(long)]
    pub r#in: String,

    /// Output image path (default: <in>.bin)
    #[arg(long)]
    pub out: Option<String>,

    /// Rows are already oldest first; do not reverse them
    #[arg(long)]
    pub chronological: bool,

    /// Zero-based CSV field holding the hex payload
    #[arg(long, default_value_t = DEFAULT_PAYLOAD_FIELD)]
    pub payload_field: usize,

    /// Also write diagnostics as JSON lines (only after a successful pass)
    #[arg(long)]
    pub diag_jsonl: Option<String>,

    /// Do not print diagnostics to stdout
    #[arg(long)]
    pub quiet: bool,
}

pub fn run(args: ReconstructArgs) -> anyhow::Result<()> {
    let config = super::capture_config(args.payload_field, args.chronological);
    let rows = capture::load_rows(&args.r#in)?;

    let quiet = args.quiet;
    let mut diags = Vec::new();
    let rec = reconstruct(rows, config, |d| {
        if !quiet {
            println!("{d}");
        }
        diags.push(d.clone());
    })
    .with_context(|| format!("reconstruct {}", args.r#in))?;

    // nothing touches disk until the whole log decoded
    let out_path = args.out.unwrap_or_else(|| format!("{}.bin", args.r#in));
    let bytes = rec.image.serialize();

    // diagnostics first: a failed image write takes the jsonl back out
    if let Some(p) = &args.diag_jsonl {
        jsonl::write_diagnostics_file(p, &diags)?;
        tracing::info!(path = %p, lines = diags.len(), "diagnostics written");
    }
    if let Err(e) = bin::write_image_file(&out_path, &bytes) {
        if let Some(p) = &args.diag_jsonl {
            let _ = std::fs::remove_file(p);
        }
        return Err(e);
    }
    tracing::info!(path = %out_path, bytes = bytes.len(), "image written");

    let s = &rec.stats;
    eprintln!("ROWS={}", s.rows);
    eprintln!("WRITES={}", s.writes);
    eprintln!("BYTES_WRITTEN={}", s.bytes_written);
    eprintln!("OVERWRITES={}", s.overwrites);
    eprintln!(
        "CALIBRATION=req04:{} req53:{} res04:{} res53:{} other:{}",
        s.req04, s.req53, s.res04, s.res53, s.unrecognized
    );
    eprintln!("REFERENCE={}", rec.reference);
    eprintln!("COVERAGE={}/{}", rec.image.written_count(), EEPROM_SIZE);
    eprintln!("IMAGE_CRC32={:08x}", bin::crc32(&bytes));
    eprintln!("OUT_PATH={}", out_path);
    Ok(())
}
