//! Data record grammar: DIB (DIF + DIFE chain), VIB (VIF + VIFE chain),
//! LVAR length resolution, and the payload walker producing raw records.
//!
//! The walker consumes a decrypted application payload and yields the
//! ordered record list. Idle filler bytes (0x2F) are skipped wherever they
//! appear: the two leading AES verification bytes and the block padding at
//! the end of the payload both fall out of this rule.

use crate::constants::*;
use crate::error::WMBusError;
use crate::payload::data_encoding::data_str_decode;
use crate::payload::reader::PayloadReader;

/// The Data Information Block of one record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataInformationBlock {
    pub dif: u8,
    /// Extension bytes in wire order, at most [`WMBUS_MAX_EXTENSIONS`].
    pub difes: Vec<u8>,
}

/// The Value Information Block of one record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueInformationBlock {
    pub vif: u8,
    /// Extension bytes in wire order, at most [`WMBUS_MAX_EXTENSIONS`].
    pub vifes: Vec<u8>,
    /// Plain-text unit label when `vif & 0x7F == 0x7C`.
    pub custom_vif: Option<String>,
}

/// One raw data record: header blocks plus the unprocessed value bytes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataRecord {
    pub dib: DataInformationBlock,
    pub vib: ValueInformationBlock,
    pub data: Vec<u8>,
    pub data_size: usize,
}

impl DataRecord {
    /// A manufacturer-specific trailing block (DIF 0x0F).
    pub fn is_manufacturer_specific(&self) -> bool {
        self.dib.dif == WMBUS_DIF_MANUFACTURER_SPECIFIC
    }

    /// Terminator record kinds that carry the rest of the payload opaquely.
    pub fn is_terminator(&self) -> bool {
        self.dib.dif == WMBUS_DIF_MANUFACTURER_SPECIFIC
            || self.dib.dif == WMBUS_DIF_MORE_RECORDS_FOLLOW
    }
}

/// All records of one telegram.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableDataBlock {
    pub records: Vec<DataRecord>,
    /// Set when a 0x1F marker announced a follow-up telegram.
    pub more_records_follow: bool,
}

/// Looks up the coded data length for a DIF low nibble.
pub fn dif_data_length(dif: u8) -> usize {
    match dif & WMBUS_DIF_MASK_DATA {
        0x0 => 0,
        0x1 => 1,
        0x2 => 2,
        0x3 => 3,
        0x4 => 4,
        0x5 => 4, // 32-bit real
        0x6 => 6,
        0x7 => 8,
        0x8 => 0, // selection for readout
        0x9 => 1,
        0xA => 2,
        0xB => 3,
        0xC => 4,
        0xD => 0, // variable length, resolved from the LVAR byte
        0xE => 6,
        _ => 8, // 0xF: special
    }
}

/// Resolves an LVAR length byte into the record data size.
pub fn lvar_data_length(lvar: u8) -> Result<usize, WMBusError> {
    match lvar {
        0x00..=0xBF => Ok(lvar as usize),
        0xC0..=0xCF => Ok((lvar as usize - 0xC0) * 2),
        0xD0..=0xDF => Ok((lvar as usize - 0xD0) * 2),
        0xE0..=0xEF => Ok(lvar as usize - 0xE0),
        0xF0..=0xFA => Ok(lvar as usize - 0xF0),
        _ => Err(WMBusError::UnknownLvar(lvar)),
    }
}

/// Walks a decrypted payload and collects its data records.
pub fn parse_records(payload: &[u8]) -> Result<VariableDataBlock, WMBusError> {
    let mut reader = PayloadReader::new(payload);
    let mut block = VariableDataBlock::default();

    loop {
        let skipped = reader.skip_while_eq(WMBUS_DIF_IDLE_FILLER);
        if skipped > 0 {
            log::trace!("skipped {skipped} idle filler byte(s)");
        }
        if reader.is_empty() {
            break;
        }

        let dif = reader.read_u8()?;

        if dif == WMBUS_DIF_MANUFACTURER_SPECIFIC || dif == WMBUS_DIF_MORE_RECORDS_FOLLOW {
            if dif == WMBUS_DIF_MORE_RECORDS_FOLLOW {
                block.more_records_follow = true;
            }

            // The remainder of the payload belongs to this record, no VIB
            let data = reader.take_rest().to_vec();
            block.records.push(DataRecord {
                dib: DataInformationBlock { dif, difes: Vec::new() },
                vib: ValueInformationBlock::default(),
                data_size: data.len(),
                data,
            });
            break;
        }

        let mut difes = Vec::with_capacity(WMBUS_MAX_EXTENSIONS);
        let mut chain = dif;
        while chain & WMBUS_EXTENSION_BIT != 0 {
            if difes.len() >= WMBUS_MAX_EXTENSIONS {
                return Err(WMBusError::TooManyDifes);
            }
            chain = reader.read_u8()?;
            difes.push(chain);
        }

        let mut data_size = dif_data_length(dif);

        let vif = reader.read_u8()?;

        let mut custom_vif = None;
        if vif & WMBUS_WITHOUT_EXTENSION == 0x7C {
            let label_len = reader.read_u8()? as usize;
            if label_len > WMBUS_CUSTOM_VIF_SIZE {
                return Err(WMBusError::CustomVifTooLong(label_len));
            }
            let label = reader.take(label_len)?;
            let mut decoded = String::with_capacity(label_len);
            data_str_decode(&mut decoded, label);
            custom_vif = Some(decoded);
        }

        let mut vifes = Vec::with_capacity(WMBUS_MAX_EXTENSIONS);
        let mut chain = vif;
        while chain & WMBUS_EXTENSION_BIT != 0 {
            if vifes.len() >= WMBUS_MAX_EXTENSIONS {
                return Err(WMBusError::TooManyVifes);
            }
            chain = reader.read_u8()?;
            vifes.push(chain);
        }

        if dif & WMBUS_DIF_MASK_DATA == 0x0D {
            data_size = lvar_data_length(reader.read_u8()?)?;
        }

        let data = reader.take(data_size)?.to_vec();

        block.records.push(DataRecord {
            dib: DataInformationBlock { dif, difes },
            vib: ValueInformationBlock { vif, vifes, custom_vif },
            data_size,
            data,
        });
    }

    Ok(block)
}
