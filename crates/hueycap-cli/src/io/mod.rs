// crates/hueycap-cli/src/io/mod.rs

pub mod bin;
pub mod capture;
pub mod jsonl;
