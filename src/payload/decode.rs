//! Record interpretation: maps a raw [`DataRecord`] to its semantic value.
//!
//! The DIF carries the function field and the storage-number seed bit; each
//! DIFE contributes four more storage bits, two tariff bits, and one
//! subdevice bit. The VIB resolves to unit, exponent, and type through the
//! lookup tables, and the record data is rendered according to the coded
//! data length.

use crate::constants::*;
use crate::error::WMBusError;
use crate::payload::data_encoding::{
    data_bin_decode, data_str_decode, decode_bcd_hex, decode_date_cp16, decode_datetime_cp32,
    decode_float, decode_int,
};
use crate::payload::record::{DataInformationBlock, DataRecord};
use crate::payload::vif::unit_lookup;
use serde::Serialize;

/// The function field of a data record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FunctionField {
    Instantaneous,
    Maximum,
    Minimum,
    ValueDuringError,
    Unknown,
}

impl FunctionField {
    pub fn from_dif(dif: u8) -> Self {
        match dif & WMBUS_DIF_MASK_FUNCTION {
            0x00 => FunctionField::Instantaneous,
            0x10 => FunctionField::Maximum,
            0x20 => FunctionField::Minimum,
            0x30 => FunctionField::ValueDuringError,
            _ => FunctionField::Unknown,
        }
    }
}

impl std::fmt::Display for FunctionField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            FunctionField::Instantaneous => "Instantaneous value",
            FunctionField::Maximum => "Maximum value",
            FunctionField::Minimum => "Minimum value",
            FunctionField::ValueDuringError => "Value during error state",
            FunctionField::Unknown => "Unknown",
        };
        f.write_str(text)
    }
}

/// The raw (unformatted) value of a record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RecordValue {
    Numeric(f64),
    Text(String),
}

/// A fully interpreted data record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedRecord {
    pub function: FunctionField,
    pub storage_number: u64,
    pub tariff: u32,
    pub device: u32,
    pub unit: String,
    pub exponent: f64,
    #[serde(rename = "type")]
    pub value_type: String,
    pub value: String,
    pub raw_value: Option<RecordValue>,
}

/// Storage number: bit 6 of the DIF seeds bit 0, each DIFE adds its low
/// nibble at bit positions 1, 5, 9, ...
pub fn decode_storage_number(dib: &DataInformationBlock) -> u64 {
    let mut result = u64::from((dib.dif & WMBUS_DIF_MASK_STORAGE_NO) >> 6);
    let mut bit_index = 1;

    for dife in &dib.difes {
        result |= u64::from(dife & WMBUS_DIFE_MASK_STORAGE_NO) << bit_index;
        bit_index += 4;
    }

    result
}

/// Tariff: two bits per DIFE, first DIFE least significant.
pub fn decode_tariff(dib: &DataInformationBlock) -> u32 {
    let mut result = 0;
    let mut bit_index = 0;

    for dife in &dib.difes {
        result |= u32::from((dife & WMBUS_DIFE_MASK_TARIFF) >> 4) << bit_index;
        bit_index += 2;
    }

    result
}

/// Subdevice: one bit per DIFE, first DIFE least significant.
pub fn decode_device(dib: &DataInformationBlock) -> u32 {
    let mut result = 0;

    for (idx, dife) in dib.difes.iter().enumerate() {
        result |= u32::from((dife & WMBUS_DIFE_MASK_DEVICE) >> 6) << idx;
    }

    result
}

/// Interprets one raw record.
pub fn decode_record(record: &DataRecord) -> Result<DecodedRecord, WMBusError> {
    if record.is_terminator() {
        let mut dump = String::new();
        data_bin_decode(&mut dump, &record.data);
        let value_type = if record.is_manufacturer_specific() {
            "MANUFACTURER_SPECIFIC"
        } else {
            "MORE_RECORDS_FOLLOW"
        };

        return Ok(DecodedRecord {
            function: FunctionField::from_dif(record.dib.dif),
            storage_number: 0,
            tariff: 0,
            device: 0,
            unit: String::new(),
            exponent: 1.0,
            value_type: value_type.to_string(),
            value: dump.clone(),
            raw_value: if dump.is_empty() {
                None
            } else {
                Some(RecordValue::Text(dump))
            },
        });
    }

    let unit = unit_lookup(&record.vib)?;
    let (value, raw_value) = decode_value(record, unit.exponent)?;

    Ok(DecodedRecord {
        function: FunctionField::from_dif(record.dib.dif),
        storage_number: decode_storage_number(&record.dib),
        tariff: decode_tariff(&record.dib),
        device: decode_device(&record.dib),
        unit: unit.unit,
        exponent: unit.exponent,
        value_type: unit.vif_type.to_string(),
        value,
        raw_value,
    })
}

fn decode_value(
    record: &DataRecord,
    exponent: f64,
) -> Result<(String, Option<RecordValue>), WMBusError> {
    let data = &record.data;
    let vif = record.vib.vif & WMBUS_WITHOUT_EXTENSION;

    match record.dib.dif & WMBUS_DIF_MASK_DATA {
        // No data, or selection for readout
        0x0 | 0x8 => Ok((String::new(), None)),

        // 1 byte integer (8 bit)
        0x1 => {
            let (_, value) = decode_int(data, 1)?;
            Ok((format!("{value}"), Some(RecordValue::Numeric(value as f64))))
        }

        // 2 byte (16 bit)
        0x2 => {
            if vif == 0x6C {
                // E110 1100: time point (date)
                let (_, date) = decode_date_cp16(data)?;
                Ok((date.clone(), Some(RecordValue::Text(date))))
            } else {
                let (_, value) = decode_int(data, 2)?;
                let scaled = value as f64 * exponent;
                Ok((format!("{scaled:.2}"), Some(RecordValue::Numeric(scaled))))
            }
        }

        // 3 byte integer (24 bit)
        0x3 => {
            let (_, value) = decode_int(data, 3)?;
            Ok((format!("{value}"), Some(RecordValue::Numeric(value as f64))))
        }

        // 4 byte (32 bit)
        0x4 => {
            if vif == 0x6D {
                // E110 1101: time point (date & time)
                let (_, stamp) = decode_datetime_cp32(data)?;
                Ok((stamp.clone(), Some(RecordValue::Text(stamp))))
            } else {
                let (_, value) = decode_int(data, 4)?;
                Ok((format!("{value}"), Some(RecordValue::Numeric(value as f64))))
            }
        }

        // 4 byte real (32 bit)
        0x5 => {
            let (_, value) = decode_float(data)?;
            Ok((
                format!("{value}"),
                Some(RecordValue::Numeric(f64::from(value))),
            ))
        }

        // 6 byte integer (48 bit)
        0x6 => {
            let (_, value) = decode_int(data, 6)?;
            Ok((format!("{value}"), Some(RecordValue::Numeric(value as f64))))
        }

        // 8 byte integer (64 bit)
        0x7 => {
            let (_, value) = decode_int(data, 8)?;
            Ok((format!("{value}"), Some(RecordValue::Numeric(value as f64))))
        }

        // 2/4/6/8/12 digit BCD
        0x9 | 0xA | 0xB | 0xC | 0xE => {
            let (_, value) = decode_bcd_hex(data, record.data_size)?;
            Ok((
                format!("{value:X}"),
                Some(RecordValue::Numeric(value as f64)),
            ))
        }

        // Variable length: rendered as the reversed ASCII string
        0xD => {
            let mut text = String::with_capacity(data.len());
            data_str_decode(&mut text, data);
            Ok((text.clone(), Some(RecordValue::Text(text))))
        }

        // Special functions: opaque, hex dumped
        _ => {
            let mut dump = String::new();
            data_bin_decode(&mut dump, data);
            Ok((dump.clone(), Some(RecordValue::Text(dump))))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::record::{parse_records, ValueInformationBlock};

    fn record(dif: u8, difes: &[u8], vif: u8, vifes: &[u8], data: &[u8]) -> DataRecord {
        DataRecord {
            dib: DataInformationBlock {
                dif,
                difes: difes.to_vec(),
            },
            vib: ValueInformationBlock {
                vif,
                vifes: vifes.to_vec(),
                custom_vif: None,
            },
            data: data.to_vec(),
            data_size: data.len(),
        }
    }

    #[test]
    fn test_function_field() {
        assert_eq!(FunctionField::from_dif(0x02), FunctionField::Instantaneous);
        assert_eq!(FunctionField::from_dif(0x12), FunctionField::Maximum);
        assert_eq!(FunctionField::from_dif(0x22), FunctionField::Minimum);
        assert_eq!(FunctionField::from_dif(0x32), FunctionField::ValueDuringError);
    }

    #[test]
    fn test_storage_number_from_dif_bit() {
        let dib = DataInformationBlock {
            dif: 0x42,
            difes: vec![],
        };
        assert_eq!(decode_storage_number(&dib), 1);
    }

    #[test]
    fn test_storage_number_from_dife_chain() {
        // First DIFE low nibble lands at bit 1
        let dib = DataInformationBlock {
            dif: 0x82,
            difes: vec![0x01],
        };
        assert_eq!(decode_storage_number(&dib), 2);

        // Second DIFE shifts by four more bits
        let dib = DataInformationBlock {
            dif: 0x82,
            difes: vec![0x81, 0x01],
        };
        assert_eq!(decode_storage_number(&dib), 2 + (1 << 5));
    }

    #[test]
    fn test_tariff_and_device() {
        let dib = DataInformationBlock {
            dif: 0x82,
            difes: vec![0x70, 0x10],
        };
        // First DIFE tariff bits 11, second 01 -> 0b0111
        assert_eq!(decode_tariff(&dib), 0b0111);
        // First DIFE device bit set, second clear
        assert_eq!(decode_device(&dib), 0b01);
    }

    #[test]
    fn test_decode_two_byte_scaled() {
        let rec = record(0x02, &[], 0x65, &[], &[0x9D, 0x0B]);
        let decoded = decode_record(&rec).unwrap();

        assert_eq!(decoded.value, "29.73");
        assert_eq!(decoded.unit, "°C");
        assert_eq!(decoded.exponent, 1e-2);
        assert_eq!(decoded.raw_value, Some(RecordValue::Numeric(29.73)));
    }

    #[test]
    fn test_decode_one_byte_integer() {
        let rec = record(0x01, &[], 0x13, &[], &[0xFB]);
        let decoded = decode_record(&rec).unwrap();
        assert_eq!(decoded.value, "-5");
    }

    #[test]
    fn test_decode_four_byte_integer() {
        let rec = record(0x04, &[], 0x13, &[], &[0x40, 0xE2, 0x01, 0x00]);
        let decoded = decode_record(&rec).unwrap();
        assert_eq!(decoded.value, "123456");
        assert_eq!(decoded.value_type, "VOLUME");
    }

    #[test]
    fn test_decode_bcd_as_hex_digits() {
        let rec = record(0x0C, &[], 0x13, &[], &[0x34, 0x12, 0x00, 0x00]);
        let decoded = decode_record(&rec).unwrap();
        assert_eq!(decoded.value, "1234");
    }

    #[test]
    fn test_decode_date_point() {
        let rec = record(0x02, &[], 0x6C, &[], &[0x11, 0x35]);
        let decoded = decode_record(&rec).unwrap();
        assert_eq!(decoded.value, "2024-05-17");
        assert_eq!(decoded.value_type, "DATE");
    }

    #[test]
    fn test_decode_humidity_extension() {
        let rec = record(0x02, &[], 0xFB, &[0x1A], &[0x2F, 0x02]);
        let decoded = decode_record(&rec).unwrap();

        assert_eq!(decoded.unit, "%");
        assert_eq!(decoded.value, "55.90");
    }

    #[test]
    fn test_decode_records_from_captured_payload() {
        // Decrypted application payload of a LAS room sensor transmission
        let payload = [
            0x2F, 0x2F, // verification bytes
            0x02, 0x65, 0x9D, 0x0B, // external temperature
            0x42, 0x65, 0x9A, 0x0B, // external temperature, storage 1
            0x82, 0x01, 0x65, 0x52, 0x0B, // external temperature, storage 2
            0x02, 0xFB, 0x1A, 0x2F, 0x02, // relative humidity
            0x42, 0xFB, 0x1A, 0x2F, 0x02, // relative humidity, storage 1
            0x02, 0xFD, 0x3A, 0x4E, 0x01, // dimensionless counter
            0x2F, 0x2F, 0x2F, 0x2F, // block padding
        ];
        let block = parse_records(&payload).unwrap();
        assert_eq!(block.records.len(), 6);

        let decoded: Vec<_> = block
            .records
            .iter()
            .map(|r| decode_record(r).unwrap())
            .collect();

        assert_eq!(decoded[0].value, "29.73");
        assert_eq!(decoded[0].storage_number, 0);
        assert_eq!(decoded[1].value, "29.70");
        assert_eq!(decoded[1].storage_number, 1);
        assert_eq!(decoded[2].storage_number, 2);
        assert_eq!(decoded[3].unit, "%");
        assert_eq!(decoded[5].value, "334.00");
    }

    #[test]
    fn test_decode_manufacturer_specific_record() {
        let payload = [0x0F, 0xCA, 0xFE];
        let block = parse_records(&payload).unwrap();
        let decoded = decode_record(&block.records[0]).unwrap();

        assert_eq!(decoded.value_type, "MANUFACTURER_SPECIFIC");
        assert_eq!(decoded.value, "CA FE");
    }
}
