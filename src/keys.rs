//! AES key material and per-device key lookup.
//!
//! Keys are supplied per frame by a [`KeyStore`] once the serial number has
//! been decoded; the decoder itself never persists key material.

use crate::error::WMBusError;
use std::collections::HashMap;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// AES-128 key for wM-Bus payload decryption.
///
/// The key bytes are wiped from memory when the value is dropped.
#[derive(Clone, PartialEq, Zeroize, ZeroizeOnDrop)]
pub struct AesKey {
    key: [u8; 16],
}

impl AesKey {
    /// Create an AES key from a 16-byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, WMBusError> {
        if bytes.len() != 16 {
            return Err(WMBusError::InvalidKeyLength(bytes.len()));
        }

        let mut key = [0u8; 16];
        key.copy_from_slice(bytes);
        Ok(Self { key })
    }

    /// Create an AES key from a 32-character hex string.
    pub fn from_hex(hex_str: &str) -> Result<Self, WMBusError> {
        let bytes =
            hex::decode(hex_str).map_err(|_| WMBusError::InvalidKeyLength(hex_str.len() / 2))?;
        Self::from_bytes(&bytes)
    }

    /// Get the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.key
    }
}

impl std::fmt::Debug for AesKey {
    // Key material stays out of logs
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AesKey(****)")
    }
}

/// Maps a decoded serial number to the device's AES key.
///
/// Called exactly once per encrypted frame, after the serial number has been
/// decoded from the link-layer header.
pub trait KeyStore {
    fn key_for_serial(&self, serial: &str) -> Result<AesKey, WMBusError>;
}

/// A fixed in-memory key table.
#[derive(Debug, Default)]
pub struct StaticKeyStore {
    keys: HashMap<String, AesKey>,
}

impl StaticKeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a key for a serial number (uppercase hex, as decoded).
    pub fn insert(&mut self, serial: impl Into<String>, key: AesKey) {
        self.keys.insert(serial.into(), key);
    }
}

impl KeyStore for StaticKeyStore {
    fn key_for_serial(&self, serial: &str) -> Result<AesKey, WMBusError> {
        self.keys
            .get(serial)
            .cloned()
            .ok_or_else(|| WMBusError::UnknownDevice(serial.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_bytes_wrong_length() {
        assert!(matches!(
            AesKey::from_bytes(&[0u8; 15]),
            Err(WMBusError::InvalidKeyLength(15))
        ));
    }

    #[test]
    fn test_key_from_hex_roundtrip() {
        let key = AesKey::from_hex("27F92762F66A41CB267131DB09122246").unwrap();
        assert_eq!(
            key.as_bytes(),
            &[
                0x27, 0xF9, 0x27, 0x62, 0xF6, 0x6A, 0x41, 0xCB, 0x26, 0x71, 0x31, 0xDB, 0x09,
                0x12, 0x22, 0x46,
            ]
        );
    }

    #[test]
    fn test_static_store_lookup() {
        let mut store = StaticKeyStore::new();
        store.insert("25654", AesKey::from_bytes(&[0u8; 16]).unwrap());

        assert!(store.key_for_serial("25654").is_ok());
        assert!(matches!(
            store.key_for_serial("99999"),
            Err(WMBusError::UnknownDevice(_))
        ));
    }

    #[test]
    fn test_debug_hides_key_material() {
        let key = AesKey::from_bytes(&[0xAB; 16]).unwrap();
        let rendered = format!("{key:?}");
        assert!(!rendered.contains("AB"));
    }
}
