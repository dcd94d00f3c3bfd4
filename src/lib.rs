//! # wmbus-rs - A Rust Crate for Wireless M-Bus Telegram Decoding
//!
//! The wmbus-rs crate decodes Wireless M-Bus (wM-Bus) telegrams per
//! EN 13757-4 / OMS-Spec Vol. 2, turning the byte stream of a radio
//! gateway into fully decoded meter frames: identity, protocol metadata,
//! and semantic data records.
//!
//! ## Features
//!
//! - Incremental stream framing with resynchronization over noisy links
//! - AES-128-CBC payload decryption (encryption modes 4 and 5) with the
//!   meter-derived initialization vector
//! - DIF/DIFE + VIF/VIFE record grammar: storage number, tariff,
//!   subdevice, unit, exponent, and typed values
//! - Manufacturer, device-type, status, and product-name lookups
//! - A channel-based streaming facade with cooperative cancellation
//!
//! ## Usage
//!
//! ```rust,no_run
//! use wmbus_rs::{parse, ParseOutcome, Telegram};
//! use wmbus_rs::keys::{AesKey, KeyStore, StaticKeyStore};
//!
//! # fn main() -> Result<(), wmbus_rs::WMBusError> {
//! # let raw: Vec<u8> = vec![];
//! let mut keys = StaticKeyStore::new();
//! keys.insert("25654", AesKey::from_hex("27F92762F66A41CB267131DB09122246")?);
//!
//! if let ParseOutcome::Frame { telegram: Telegram::Long(mut frame), .. } = parse(&raw)? {
//!     if frame.has_encryption_mode() {
//!         let key = keys.key_for_serial(&frame.serial_number())?;
//!         frame.decrypt(&key)?;
//!     }
//!     let decoded = frame.decode()?;
//!     println!("{} [{}]", decoded.serial_number, decoded.product_name);
//!     for record in &decoded.records {
//!         println!("  {} {} ({})", record.value, record.unit, record.function);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod decoder;
pub mod error;
pub mod frame;
pub mod keys;
pub mod logging;
pub mod payload;
pub mod vendors;

pub use crate::error::WMBusError;
pub use crate::logging::{init_logger, log_info};

// Link layer
pub use frame::{
    parse, parse_with_config, spawn_stream, ByteSource, CancelToken, FrameConfig, Framer,
    LongFrame, ParseOutcome, ShortFrame, Telegram, WMBusHeader,
};

// Application layer
pub use decoder::DecodedFrame;
pub use keys::{AesKey, KeyStore, StaticKeyStore};
pub use payload::{
    decode_record, parse_records, DataRecord, DecodedRecord, FunctionField, RecordValue,
    VariableDataBlock,
};

// Identity lookups
pub use vendors::{decode_manufacturer, decode_status, device_type_lookup, StatusFlags};
