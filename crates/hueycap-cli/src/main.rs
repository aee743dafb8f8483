// crates/hueycap-cli/src/main.rs

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "hueycap")]
#[command(about = "Huey capture log tools (EEPROM image reconstruction)", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rebuild the 1024-byte memory image from a capture log (.csv -> .bin)
    Reconstruct(cmd::reconstruct::ReconstructArgs),

    /// List how each capture row is classified
    Classify(cmd::classify::ClassifyArgs),

    /// Hex dump a reconstructed image (unwritten bytes shown as ..)
    Dump(cmd::dump::DumpArgs),
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Commands::Reconstruct(args) => cmd::reconstruct::run(args),
        Commands::Classify(args) => cmd::classify::run(args),
        Commands::Dump(args) => cmd::dump::run(args),
    }
}
