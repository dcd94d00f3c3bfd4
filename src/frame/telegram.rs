//! Telegram model and structural validation.
//!
//! A received telegram is one of three link-layer shapes: a single-byte ACK,
//! a five-byte short frame, or a long/control frame carrying the application
//! header and payload. The shapes are modeled as a tagged enum so that no
//! field is ever half-populated.

use crate::constants::*;
use crate::error::WMBusError;
use crate::payload::data_encoding::decode_bcd_hex;
use crate::payload::record::VariableDataBlock;
use crate::vendors::decode_manufacturer;

/// Receive-side configuration affecting frame length accounting.
#[derive(Debug, Clone, Copy)]
pub struct FrameConfig {
    /// The gateway appends a link-layer CRC byte after the payload.
    pub crc_enabled: bool,
    /// The gateway appends an RSSI byte after the payload.
    pub rssi_enabled: bool,
    /// Verify the arithmetic checksum byte (off by default, the wM-Bus
    /// link relies on the radio CRC instead).
    pub verify_checksum: bool,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            crc_enabled: true,
            rssi_enabled: false,
            verify_checksum: false,
        }
    }
}

/// The fixed application header of a long frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WMBusHeader {
    /// Manufacturer field, LSB first as on the wire.
    pub manufacturer: [u8; 2],
    /// Device id (serial number), LSB first as on the wire.
    pub id: [u8; 4],
    pub version: u8,
    pub device_type: u8,
    pub access_number: u8,
    pub status: u8,
    pub n_encrypted_blocks: u8,
    pub encryption_mode: u8,
}

/// A five-byte short frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortFrame {
    pub start: u8,
    pub control: u8,
    pub address: u8,
    pub checksum: u8,
    pub stop: u8,
}

/// A long or control frame.
#[derive(Debug, Clone, PartialEq)]
pub struct LongFrame {
    pub start: u8,
    pub length: u8,
    pub control: u8,
    pub header: WMBusHeader,
    pub ci: u8,
    /// Application payload; encrypted until [`LongFrame::decrypt`] runs.
    pub payload: Vec<u8>,
    pub checksum: u8,
    pub stop: u8,
    pub crc_enabled: bool,
    pub rssi_enabled: bool,
}

/// One complete framed message from the link.
#[derive(Debug, Clone, PartialEq)]
pub enum Telegram {
    Ack,
    Short(ShortFrame),
    Long(LongFrame),
}

impl Telegram {
    pub fn as_long(&self) -> Option<&LongFrame> {
        match self {
            Telegram::Long(frame) => Some(frame),
            _ => None,
        }
    }

    pub fn into_long(self) -> Result<LongFrame, WMBusError> {
        match self {
            Telegram::Long(frame) => Ok(frame),
            _ => Err(WMBusError::NotALongFrame),
        }
    }
}

/// Checks a short-frame control byte against the allowed request codes.
pub fn verify_control_short(control: u8) -> Result<(), WMBusError> {
    const ALLOWED: &[u8] = &[
        WMBUS_CONTROL_MASK_SND_NKE,
        WMBUS_CONTROL_MASK_REQ_UD1,
        WMBUS_CONTROL_MASK_REQ_UD1 | WMBUS_CONTROL_MASK_FCB,
        WMBUS_CONTROL_MASK_REQ_UD2,
        WMBUS_CONTROL_MASK_REQ_UD2 | WMBUS_CONTROL_MASK_FCB,
    ];

    if ALLOWED.contains(&control) {
        Ok(())
    } else {
        Err(WMBusError::BadControl(control))
    }
}

/// Checks a long-frame control byte against the allowed send/response codes.
pub fn verify_control_long(control: u8) -> Result<(), WMBusError> {
    const ALLOWED: &[u8] = &[
        WMBUS_CONTROL_MASK_SND_UD,
        WMBUS_CONTROL_MASK_SND_NR,
        WMBUS_CONTROL_MASK_SND_UD | WMBUS_CONTROL_MASK_FCB,
        WMBUS_CONTROL_MASK_RSP_UD,
        WMBUS_CONTROL_MASK_RSP_UD | WMBUS_CONTROL_MASK_DFC,
        WMBUS_CONTROL_MASK_RSP_UD | WMBUS_CONTROL_MASK_ACD,
        WMBUS_CONTROL_MASK_RSP_UD | WMBUS_CONTROL_MASK_DFC | WMBUS_CONTROL_MASK_ACD,
    ];

    if ALLOWED.contains(&control) {
        Ok(())
    } else {
        Err(WMBusError::BadControl(control))
    }
}

impl ShortFrame {
    pub fn verify(&self) -> Result<(), WMBusError> {
        if self.start != WMBUS_FRAME_SHORT_START {
            return Err(WMBusError::BadStart(self.start));
        }
        verify_control_short(self.control)?;
        if self.stop != WMBUS_FRAME_STOP {
            return Err(WMBusError::BadStop(self.stop));
        }
        Ok(())
    }
}

impl LongFrame {
    /// A control frame carries no application payload.
    pub fn is_control(&self) -> bool {
        self.payload.is_empty()
    }

    /// The frame length as counted by the length byte: payload plus the
    /// link/network overhead, plus the optional RSSI and CRC bytes.
    pub fn calculate_length(&self) -> usize {
        let mut length = self.payload.len() + WMBUS_FRAME_LENGTH_OVERHEAD;
        if WMBUS_CI_LONG_HEADER.contains(&self.ci) {
            length += WMBUS_LONG_HEADER_EXTRA;
        }
        if self.rssi_enabled {
            length += 1;
        }
        if self.crc_enabled {
            length += 1;
        }
        length
    }

    /// Arithmetic checksum: byte sum of control, CI, and payload, no carry.
    pub fn calculate_checksum(&self) -> u8 {
        let mut checksum = self.control.wrapping_add(self.ci);
        for byte in &self.payload {
            checksum = checksum.wrapping_add(*byte);
        }
        checksum
    }

    pub fn verify(&self, config: &FrameConfig) -> Result<(), WMBusError> {
        if self.start != WMBUS_FRAME_LONG_START {
            return Err(WMBusError::BadStart(self.start));
        }
        verify_control_long(self.control)?;

        let computed = self.calculate_length();
        if usize::from(self.length) != computed {
            return Err(WMBusError::BadLength {
                header: self.length,
                computed,
            });
        }

        if self.stop != WMBUS_FRAME_STOP {
            return Err(WMBusError::BadStop(self.stop));
        }

        if config.verify_checksum {
            let calculated = self.calculate_checksum();
            if calculated != self.checksum {
                return Err(WMBusError::BadChecksum {
                    expected: self.checksum,
                    calculated,
                });
            }
        }

        Ok(())
    }

    /// Serial number: the id bytes composed little-endian, printed as
    /// uppercase hex (each BCD byte reads as two decimal digits).
    pub fn serial_number(&self) -> String {
        let (_, value) = decode_bcd_hex(&self.header.id, 4).unwrap_or((&[], 0));
        format!("{value:X}")
    }

    /// Three-letter manufacturer code from the base-32 packed field.
    pub fn manufacturer(&self) -> String {
        decode_manufacturer(self.header.manufacturer)
    }

    /// Walks the application payload into raw data records.
    ///
    /// Fails with [`WMBusError::NotDecrypted`] when the payload is still
    /// ciphertext.
    pub fn parse_records(&self) -> Result<VariableDataBlock, WMBusError> {
        if self.has_encryption_mode() && !self.is_decrypted() {
            return Err(WMBusError::NotDecrypted);
        }
        crate::payload::record::parse_records(&self.payload)
    }
}
