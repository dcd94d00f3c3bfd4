//! Integration tests for the record grammar and interpreter, plus
//! property tests over the bit-packing rules.

use proptest::prelude::*;
use wmbus_rs::payload::data_encoding::{data_str_decode, decode_int};
use wmbus_rs::payload::decode::{decode_storage_number, decode_tariff};
use wmbus_rs::payload::record::DataInformationBlock;
use wmbus_rs::{decode_manufacturer, decode_record, parse_records, FunctionField, WMBusError};

#[test]
fn record_walk_yields_ordered_records() {
    let payload = [
        0x2F, 0x2F, // verification bytes
        0x02, 0x65, 0x9D, 0x0B, // DR1
        0x42, 0x65, 0x9A, 0x0B, // DR2
        0x82, 0x01, 0x65, 0x52, 0x0B, // DR3
        0x02, 0xFB, 0x1A, 0x2F, 0x02, // DR4
        0x42, 0xFB, 0x1A, 0x2F, 0x02, // DR5
        0x82, 0x01, 0xFB, 0x1A, 0x4B, 0x02, // DR6
        0x02, 0xFD, 0x3A, 0x4E, 0x01, // DR7
        0x42, 0xFD, 0x3A, 0x4F, 0x01, // DR8
        0x82, 0x01, 0xFD, 0x3A, 0x43, 0x01, // DR9
        0x02, 0xFD, 0x0F, 0x04, 0x00, // DR10
        0x2F, 0x2F, 0x2F, 0x2F, 0x2F, 0x2F, // filler
        0x2F, 0x2F, 0x2F, 0x2F, 0x2F, 0x2F,
    ];

    let block = parse_records(&payload).unwrap();
    assert_eq!(block.records.len(), 10);
    assert!(!block.more_records_follow);

    // Data sizes always match the copied data
    for record in &block.records {
        assert_eq!(record.data_size, record.data.len());
    }

    let decoded: Vec<_> = block
        .records
        .iter()
        .map(|r| decode_record(r).unwrap())
        .collect();

    // Temperatures in °C, humidity in %, dimensionless counters
    assert_eq!(decoded[0].unit, "°C");
    assert_eq!(decoded[0].value, "29.73");
    assert_eq!(decoded[1].storage_number, 1);
    assert_eq!(decoded[2].storage_number, 2);
    assert_eq!(decoded[3].unit, "%");
    assert_eq!(decoded[3].value, "55.90");
    assert_eq!(decoded[6].value_type, "DIMENSIONLESS");
    assert_eq!(decoded[9].value_type, "SOFTWARE_VERSION");

    for record in &decoded {
        assert_eq!(record.function, FunctionField::Instantaneous);
    }
}

#[test]
fn function_field_variants() {
    let payload = [
        0x02, 0x65, 0x9D, 0x0B, // instantaneous
        0x12, 0x65, 0x9D, 0x0B, // maximum
        0x22, 0x65, 0x9D, 0x0B, // minimum
        0x32, 0x65, 0x9D, 0x0B, // error state
    ];
    let block = parse_records(&payload).unwrap();
    let functions: Vec<_> = block
        .records
        .iter()
        .map(|r| decode_record(r).unwrap().function)
        .collect();

    assert_eq!(
        functions,
        vec![
            FunctionField::Instantaneous,
            FunctionField::Maximum,
            FunctionField::Minimum,
            FunctionField::ValueDuringError,
        ]
    );
}

#[test]
fn lvar_maximum_ascii_length() {
    // LVAR 0xBF: 191 ASCII bytes
    let mut payload = vec![0x0D, 0x78, 0xBF];
    payload.extend(std::iter::repeat(b'A').take(191));
    let block = parse_records(&payload).unwrap();

    assert_eq!(block.records[0].data_size, 191);

    // One byte short must fail
    let mut short = vec![0x0D, 0x78, 0xBF];
    short.extend(std::iter::repeat(b'A').take(190));
    assert!(matches!(
        parse_records(&short),
        Err(WMBusError::PrematureEnd(_))
    ));
}

#[test]
fn extension_chain_boundaries() {
    // Ten DIFEs parse, eleven do not
    let mut ten = vec![0x82];
    ten.extend_from_slice(&[0x81; 9]);
    ten.push(0x01);
    ten.extend_from_slice(&[0x65, 0x52, 0x0B]);
    assert_eq!(parse_records(&ten).unwrap().records[0].dib.difes.len(), 10);

    let mut eleven = vec![0x82];
    eleven.extend_from_slice(&[0x81; 10]);
    eleven.push(0x01);
    eleven.extend_from_slice(&[0x65, 0x52, 0x0B]);
    assert!(matches!(
        parse_records(&eleven),
        Err(WMBusError::TooManyDifes)
    ));
}

#[test]
fn decoding_twice_gives_identical_records() {
    let payload = [0x02, 0xFB, 0x1A, 0x2F, 0x02, 0x0C, 0x13, 0x34, 0x12, 0x00, 0x00];

    let first: Vec<_> = parse_records(&payload)
        .unwrap()
        .records
        .iter()
        .map(|r| decode_record(r).unwrap())
        .collect();
    let second: Vec<_> = parse_records(&payload)
        .unwrap()
        .records
        .iter()
        .map(|r| decode_record(r).unwrap())
        .collect();

    assert_eq!(first, second);
}

proptest! {
    #[test]
    fn prop_manufacturer_decode_is_pure_and_in_range(b0 in any::<u8>(), b1 in any::<u8>()) {
        let first = decode_manufacturer([b0, b1]);
        let second = decode_manufacturer([b0, b1]);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.chars().count(), 3);
        // Base-32 + 64 lands in '@'..='_'
        for ch in first.chars() {
            prop_assert!(('@'..='_').contains(&ch));
        }
    }

    #[test]
    fn prop_storage_number_monotone_in_chain(
        dif in any::<u8>(),
        difes in proptest::collection::vec(any::<u8>(), 0..9),
        extra in any::<u8>(),
    ) {
        let shorter = DataInformationBlock { dif, difes: difes.clone() };
        let mut longer_difes = difes;
        longer_difes.push(extra);
        let longer = DataInformationBlock { dif, difes: longer_difes };

        // Appending a DIFE can only add higher-order bits
        prop_assert!(decode_storage_number(&longer) >= decode_storage_number(&shorter));
    }

    #[test]
    fn prop_tariff_fits_two_bits_per_dife(
        difes in proptest::collection::vec(any::<u8>(), 0..10),
    ) {
        let dib = DataInformationBlock { dif: 0x82, difes: difes.clone() };
        let tariff = decode_tariff(&dib);
        prop_assert!(u64::from(tariff) < (1u64 << (2 * difes.len().max(1))));
    }

    #[test]
    fn prop_reversed_string_roundtrip(text in "[ -~]{0,16}") {
        // Reversing the wire bytes twice gives the original back
        let wire: Vec<u8> = text.bytes().rev().collect();
        let mut decoded = String::new();
        data_str_decode(&mut decoded, &wire);
        prop_assert_eq!(decoded, text);
    }

    #[test]
    fn prop_int_decode_two_complement(value in i32::MIN..=i32::MAX) {
        let bytes = value.to_le_bytes();
        let (_, decoded) = decode_int(&bytes, 4).unwrap();
        prop_assert_eq!(decoded, i64::from(value));
    }
}
