use anyhow::Context;
use clap::Args;
use hueycap_core::config::DEFAULT_PAYLOAD_FIELD;
use hueycap_core::order::chronological;
use hueycap_core::record::{classify, split_payload};
use hueycap_core::validate::validate_config;
use hueycap_core::RecordKind;

use crate::io::capture;

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Input capture log (CSV)
    #[arg(long)]
    pub r#in: String,

    /// Rows are already oldest first; do not reverse them
    #[arg(long)]
    pub chronological: bool,

    /// Zero-based CSV field holding the hex payload
    #[arg(long, default_value_t = DEFAULT_PAYLOAD_FIELD)]
    pub payload_field: usize,

    /// Skip rows that are not understood
    #[arg(long)]
    pub known_only: bool,
}

pub fn run(args: ClassifyArgs) -> anyhow::Result<()> {
    let config = super::capture_config(args.payload_field, args.chronological);
    validate_config(&config)?;

    let rows = capture::load_rows(&args.r#in)?;
    let indexed: Vec<_> = rows.into_iter().enumerate().collect();

    let mut known = 0usize;
    let mut other = 0usize;
    for (index, row) in chronological(indexed, config.order) {
        let payload = row
            .get(config.payload_field)
            .with_context(|| format!("row {index}: missing payload field {}", config.payload_field))?;
        let tokens = split_payload(payload);
        let kind = classify(&tokens).with_context(|| format!("row {index}: {payload}"))?;

        if kind == RecordKind::Unrecognized {
            other += 1;
            if args.known_only {
                continue;
            }
        } else {
            known += 1;
        }
        println!("#{:>6} {:<6} {}", index, kind.label(), tokens.join(" "));
    }

    eprintln!("classify ok: known={} other={}", known, other);
    Ok(())
}
