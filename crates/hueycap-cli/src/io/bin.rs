// crates/hueycap-cli/src/io/bin.rs

use anyhow::Context;
use hueycap_core::MemoryImage;

/// Write a serialized image (always EEPROM_SIZE bytes).
pub fn write_image_file(path: &str, bytes: &[u8]) -> anyhow::Result<()> {
    std::fs::write(path, bytes).with_context(|| format!("write image bin: {path}"))?;
    Ok(())
}

/// Read an image written by `write_image_file`.
pub fn read_image_file(path: &str) -> anyhow::Result<MemoryImage> {
    let bytes = std::fs::read(path).with_context(|| format!("read image bin: {path}"))?;
    let img = MemoryImage::from_serialized(&bytes).with_context(|| format!("decode image {path}"))?;
    Ok(img)
}

pub fn crc32(bytes: &[u8]) -> u32 {
    let mut h = crc32fast::Hasher::new();
    h.update(bytes);
    h.finalize()
}
