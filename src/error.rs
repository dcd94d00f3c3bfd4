//! # wM-Bus Error Handling
//!
//! This module defines the WMBusError enum, which represents the different
//! error types that can occur while framing, decrypting, and decoding
//! wireless M-Bus telegrams.

use thiserror::Error;

/// Represents the different error types that can occur in the wM-Bus crate.
#[derive(Debug, Error)]
pub enum WMBusError {
    /// Indicates an error reported by the underlying byte source.
    #[error("Byte source error: {0}")]
    SourceError(String),

    /// Three consecutive zero-byte reads while waiting for a frame.
    #[error("Timeout while waiting for frame data")]
    Timeout,

    /// The accumulator would exceed its bound before the frame completes.
    #[error("Frame larger than receive buffer ({0} bytes)")]
    BufferOverflow(usize),

    /// A byte that is not a known frame start was encountered.
    #[error("Invalid frame start byte: 0x{0:02X}")]
    BadStart(u8),

    /// The control byte is not in the allowed set for the frame type.
    #[error("Unknown control code: 0x{0:02X}")]
    BadControl(u8),

    /// The stop byte is not 0x16.
    #[error("Invalid frame stop byte: 0x{0:02X}")]
    BadStop(u8),

    /// The length byte disagrees with the computed frame length.
    #[error("Frame length mismatch: header says {header}, computed {computed}")]
    BadLength { header: u8, computed: usize },

    /// The Control Information byte is not a known header variant.
    #[error("Unknown Control Information byte: 0x{0:02X}")]
    BadCI(u8),

    /// The arithmetic checksum does not match (only when verification is on).
    #[error("Invalid checksum: expected 0x{expected:02X}, calculated 0x{calculated:02X}")]
    BadChecksum { expected: u8, calculated: u8 },

    /// The encrypted payload is not a multiple of the AES block size.
    #[error("Encrypted payload length {0} is not block aligned")]
    UnalignedCipher(usize),

    /// The post-decrypt filler check failed: wrong key supplied.
    #[error("Decryption verification failed, check that the supplied AES key is correct")]
    BadKey,

    /// The frame uses an encryption mode this crate does not decrypt.
    #[error("Unsupported encryption mode: 0x{0:02X}")]
    UnsupportedEncryptionMode(u8),

    /// Record parsing was attempted on a still-encrypted payload.
    #[error("Payload is not decrypted, call decrypt with the device key first")]
    NotDecrypted,

    /// Indicates an AES key of the wrong size.
    #[error("Invalid AES key length: expected 16, got {0}")]
    InvalidKeyLength(usize),

    /// No key is known for the given serial number.
    #[error("No AES key for serial number {0}")]
    UnknownDevice(String),

    /// The record cursor ran past the end of the payload.
    #[error("Premature end of data record at offset {0}")]
    PrematureEnd(usize),

    /// A DIFE chain longer than the allowed maximum.
    #[error("Too many DIFE bytes in record")]
    TooManyDifes,

    /// A VIFE chain longer than the allowed maximum.
    #[error("Too many VIFE bytes in record")]
    TooManyVifes,

    /// A plain-text VIF label longer than the allowed maximum.
    #[error("Variable length VIF too long: {0}")]
    CustomVifTooLong(usize),

    /// Indicates an unknown DIF data-length code.
    #[error("Unknown DIF: 0x{0:02X}")]
    UnknownDif(u8),

    /// Indicates an unknown Value Information Field code.
    #[error("Unknown VIF: 0x{0:02X}")]
    UnknownVif(u8),

    /// Indicates an unknown LVAR length code.
    #[error("Unknown variable length code: 0x{0:02X}")]
    UnknownLvar(u8),

    /// Manufacturer bytes outside the printable base-32 range.
    #[error("Invalid manufacturer id: 0x{0:04X}")]
    InvalidManufacturer(u16),

    /// No product entry for the (manufacturer, version) pair.
    #[error("Unknown product for manufacturer {manufacturer}, version 0x{version:02X}")]
    UnknownProduct { manufacturer: String, version: u8 },

    /// The requested operation only applies to long frames.
    #[error("Operation requires a long frame")]
    NotALongFrame,

    /// Indicates a nom parsing error from the scalar decoders.
    #[error("Decode error: {0}")]
    DecodeError(String),
}

impl<E: std::fmt::Debug> From<nom::Err<E>> for WMBusError {
    fn from(err: nom::Err<E>) -> Self {
        WMBusError::DecodeError(format!("{err:?}"))
    }
}
