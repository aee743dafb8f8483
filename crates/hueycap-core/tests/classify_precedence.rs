use hueycap_core::record::{classify, split_payload};
use hueycap_core::{DecodeReason, RecordKind};

fn kind(payload: &str) -> RecordKind {
    classify(&split_payload(payload)).unwrap()
}

#[test]
fn memory_write_carries_address_and_payload() {
    assert_eq!(
        kind("00,08,01,F0,11,22,33,44"),
        RecordKind::MemoryWrite {
            address: 0x01F0,
            payload: vec![0x11, 0x22, 0x33, 0x44]
        }
    );
}

#[test]
fn memory_write_payload_is_capped_at_four_bytes() {
    assert_eq!(
        kind("00,08,00,10,01,02,03,04,05,06"),
        RecordKind::MemoryWrite {
            address: 0x0010,
            payload: vec![1, 2, 3, 4]
        }
    );
}

#[test]
fn short_memory_write_keeps_present_bytes() {
    assert_eq!(
        kind("00,08,00,01,AA"),
        RecordKind::MemoryWrite {
            address: 1,
            payload: vec![0xAA]
        }
    );
}

#[test]
fn calibration_request_and_response() {
    assert_eq!(
        kind("04,01,2C,00,00,00,00,00"),
        RecordKind::CalibrationRequest {
            raw: ["01".into(), "2C".into()],
            value: 300
        }
    );
    assert_eq!(kind("53,CC,DD"), RecordKind::CalibrationResponse { value: 0xCCDD });
}

#[test]
fn device_responses() {
    assert_eq!(
        kind("00,04,00,01,86,A0,00,00"),
        RecordKind::DeviceResponse04 { value: 100_000 }
    );
    assert_eq!(
        kind("00,53,12,34,AA,BB,00,00"),
        RecordKind::DeviceResponse53 { value: 0xAABB }
    );
}

#[test]
fn device_prefix_is_not_a_calibration_record() {
    // second token 04/53 under a 00 prefix is a device response, never a request
    assert!(matches!(kind("00,04,00,00,00,01"), RecordKind::DeviceResponse04 { .. }));
    assert!(matches!(kind("00,53,00,00,00,01"), RecordKind::DeviceResponse53 { .. }));
}

#[test]
fn unknown_rows_are_ignored_without_decoding() {
    assert_eq!(kind("00,02,zz"), RecordKind::Unrecognized);
    assert_eq!(kind("Control Transfer"), RecordKind::Unrecognized);
    assert_eq!(kind(""), RecordKind::Unrecognized);
    assert_eq!(kind("08,00,08"), RecordKind::Unrecognized);
}

#[test]
fn too_few_tokens_is_decode_error() {
    assert_eq!(
        classify(&["00"]).unwrap_err(),
        DecodeReason::TooFewTokens {
            kind: "device",
            need: 2,
            got: 1
        }
    );
    assert!(classify(&split_payload("00,08,00,01")).is_err());
    assert!(classify(&split_payload("04,01")).is_err());
    assert!(classify(&split_payload("00,04,00,01,02")).is_err());
}

#[test]
fn non_hex_token_is_decode_error() {
    let err = classify(&split_payload("00,08,00,0G,01")).unwrap_err();
    assert_eq!(
        err,
        DecodeReason::BadHex {
            index: 3,
            token: "0G".into()
        }
    );
}
