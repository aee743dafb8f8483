use clap::Args;
use hueycap_core::{Slot, EEPROM_SIZE};

use crate::io::bin;

#[derive(Args, Debug)]
pub struct DumpArgs {
    /// Reconstructed image (.bin)
    #[arg(long)]
    pub r#in: String,

    /// Bytes per line
    #[arg(long, default_value_t = 16)]
    pub width: usize,
}

pub fn run(args: DumpArgs) -> anyhow::Result<()> {
    if args.width == 0 {
        anyhow::bail!("width must be > 0");
    }
    let img = bin::read_image_file(&args.r#in)?;

    for base in (0..EEPROM_SIZE).step_by(args.width) {
        let end = (base + args.width).min(EEPROM_SIZE);
        let mut line = format!("{:04x}:", base);
        for addr in base..end {
            match img.slot(addr) {
                Some(Slot::Written(b)) => line.push_str(&format!(" {:02x}", b)),
                _ => line.push_str(" .."),
            }
        }
        println!("{line}");
    }

    let ranges: Vec<String> = img
        .written_ranges()
        .iter()
        .map(|r| format!("{:04x}-{:04x}", r.start, r.end - 1))
        .collect();

    eprintln!("--- coverage ---");
    eprintln!("file            = {}", args.r#in);
    eprintln!("written         = {}/{}", img.written_count(), EEPROM_SIZE);
    eprintln!("ranges          = {}", ranges.len());
    for r in &ranges {
        eprintln!("  {r}");
    }
    Ok(())
}
