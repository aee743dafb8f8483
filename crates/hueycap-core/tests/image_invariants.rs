use hueycap_core::image::OutOfRange;
use hueycap_core::{MemoryImage, Slot, EEPROM_SIZE, SENTINEL};

#[test]
fn empty_image_is_all_sentinel() {
    let bytes = MemoryImage::new().serialize();
    assert_eq!(bytes.len(), EEPROM_SIZE);
    assert!(bytes.iter().all(|&b| b == SENTINEL));
}

#[test]
fn written_zero_differs_from_unwritten() {
    let mut img = MemoryImage::new();
    img.write(5, 0x00).unwrap();
    assert_eq!(img.slot(5), Some(Slot::Written(0)));
    assert_eq!(img.slot(6), Some(Slot::Unwritten));
    let bytes = img.serialize();
    assert_eq!(bytes[5], 0x00);
    assert_eq!(bytes[6], SENTINEL);
}

#[test]
fn later_write_wins() {
    let mut img = MemoryImage::new();
    assert_eq!(img.write(10, 1).unwrap(), Slot::Unwritten);
    assert_eq!(img.write(10, 2).unwrap(), Slot::Written(1));
    assert_eq!(img.serialize()[10], 2);
    assert_eq!(img.written_count(), 1);
}

#[test]
fn out_of_range_write_fails() {
    let mut img = MemoryImage::new();
    assert_eq!(img.write(EEPROM_SIZE, 1), Err(OutOfRange { address: EEPROM_SIZE }));
    assert_eq!(img.written_count(), 0);
}

#[test]
fn block_crossing_the_end_writes_nothing() {
    let mut img = MemoryImage::new();
    let err = img.write_block(EEPROM_SIZE - 2, &[1, 2, 3, 4]).unwrap_err();
    assert_eq!(err.address, EEPROM_SIZE);
    assert_eq!(img.written_count(), 0);

    assert_eq!(img.write_block(EEPROM_SIZE - 4, &[1, 2, 3, 4]), Ok(0));
    assert_eq!(img.write_block(EEPROM_SIZE - 2, &[9, 9]), Ok(2));
}

#[test]
fn written_ranges_are_maximal_runs() {
    let mut img = MemoryImage::new();
    img.write_block(0, &[1, 2, 3]).unwrap();
    img.write_block(8, &[4]).unwrap();
    img.write(EEPROM_SIZE - 1, 5).unwrap();
    assert_eq!(img.written_ranges(), vec![0..3, 8..9, EEPROM_SIZE - 1..EEPROM_SIZE]);
}

#[test]
fn serialized_image_reads_back() {
    let mut img = MemoryImage::new();
    img.write_block(0x20, &[0xDE, 0xAD, 0xBE, 0xEF]).unwrap();
    let back = MemoryImage::from_serialized(&img.serialize()).unwrap();
    assert_eq!(back, img);
}

#[test]
fn serialized_image_must_be_full_size() {
    assert!(MemoryImage::from_serialized(&[0u8; 16]).is_err());
}
