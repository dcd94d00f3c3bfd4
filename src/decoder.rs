//! Frame assembly: identity plus interpreted records.
//!
//! [`LongFrame::decode`] combines the link-layer identity (serial number,
//! manufacturer, product, device type, status) with the interpreted record
//! list into the public [`DecodedFrame`]. Lookup misses degrade to empty
//! strings with a logged warning; record-level failures drop the record,
//! never the frame.

use crate::error::WMBusError;
use crate::frame::telegram::LongFrame;
use crate::payload::decode::{decode_record, DecodedRecord};
use crate::vendors::{decode_status, device_type_lookup, product_lookup};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A fully decoded meter frame.
#[derive(Debug, Clone, Serialize)]
pub struct DecodedFrame {
    pub serial_number: String,
    pub manufacturer: String,
    /// Empty when the (manufacturer, version) pair is not in the database.
    pub product_name: String,
    pub device_type: String,
    pub version: u8,
    pub access_number: u8,
    pub status: u8,
    pub readable_status: String,
    pub records: Vec<DecodedRecord>,
    pub parsed_at: DateTime<Utc>,
}

impl LongFrame {
    /// Product name for this frame's manufacturer and version.
    pub fn product_name(&self) -> Result<&'static str, WMBusError> {
        product_lookup(&self.manufacturer(), self.header.version)
    }

    /// Decodes the frame into identity fields and interpreted records.
    ///
    /// The payload must already be decrypted. Product lookup misses and
    /// per-record interpretation failures are logged and skipped.
    pub fn decode(&self) -> Result<DecodedFrame, WMBusError> {
        let serial_number = self.serial_number();
        let manufacturer = self.manufacturer();

        let product_name = match self.product_name() {
            Ok(name) => name.to_string(),
            Err(err) => {
                log::warn!("{err}");
                String::new()
            }
        };

        let block = self.parse_records()?;
        let mut records = Vec::with_capacity(block.records.len());
        for record in &block.records {
            match decode_record(record) {
                Ok(decoded) => records.push(decoded),
                Err(err) => {
                    log::warn!(
                        "skipping record (DIF 0x{:02X}, VIF 0x{:02X}): {err}",
                        record.dib.dif,
                        record.vib.vif
                    );
                }
            }
        }

        Ok(DecodedFrame {
            serial_number,
            manufacturer,
            product_name,
            device_type: device_type_lookup(self.header.device_type),
            version: self.header.version,
            access_number: self.header.access_number,
            status: self.header.status,
            readable_status: decode_status(self.header.status),
            records,
            parsed_at: Utc::now(),
        })
    }
}
