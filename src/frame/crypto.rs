//! Payload decryption per EN 13757-4 / OMS Vol. 2.
//!
//! Mode 5 (AES-128-CBC with the meter-derived IV) is the mode seen in the
//! field; mode 4 (zero IV) is kept for completeness. Mode 2 is a DES-era
//! mode whose 8-byte IV cannot feed AES, so it is derived but refused.
//!
//! Decryption happens in place on the payload owned by the frame. Success
//! is verified through the two leading 0x2F filler bytes.

use crate::constants::WMBUS_AES_BLOCK_SIZE;
use crate::error::WMBusError;
use crate::frame::telegram::LongFrame;
use crate::keys::AesKey;
use aes::Aes128;
use cbc::cipher::block_padding::NoPadding;
use cbc::cipher::{BlockDecryptMut, KeyIvInit};

type Aes128CbcDec = cbc::Decryptor<Aes128>;

impl LongFrame {
    /// True when the configuration word announces an encrypted payload.
    pub fn has_encryption_mode(&self) -> bool {
        self.header.encryption_mode & 0x0F != 0
    }

    /// Checks the two leading AES verification bytes.
    ///
    /// Unencrypted frames always count as decrypted.
    pub fn is_decrypted(&self) -> bool {
        if self.has_encryption_mode() {
            self.payload.len() >= 2 && self.payload[0] == 0x2F && self.payload[1] == 0x2F
        } else {
            true
        }
    }

    /// Derives the initialization vector for the frame's encryption mode,
    /// LSB first.
    ///
    /// Mode 5 builds the IV from the link-layer identity:
    /// manufacturer (2) | id (4) | version | device type | access number x 8.
    pub fn crypto_iv(&self) -> Result<Vec<u8>, WMBusError> {
        match self.header.encryption_mode & 0x0F {
            2 => Ok(vec![0u8; 8]),
            4 => Ok(vec![0u8; WMBUS_AES_BLOCK_SIZE]),
            5 => {
                let mut iv = Vec::with_capacity(WMBUS_AES_BLOCK_SIZE);
                iv.extend_from_slice(&self.header.manufacturer);
                iv.extend_from_slice(&self.header.id);
                iv.push(self.header.version);
                iv.push(self.header.device_type);
                iv.extend(std::iter::repeat(self.header.access_number).take(8));
                Ok(iv)
            }
            mode => Err(WMBusError::UnsupportedEncryptionMode(mode)),
        }
    }

    /// Decrypts the payload in place with AES-128-CBC and verifies the
    /// result through the leading filler bytes.
    ///
    /// No-op when the frame is not encrypted. On a failed verification the
    /// payload is discarded and [`WMBusError::BadKey`] is returned.
    pub fn decrypt(&mut self, key: &AesKey) -> Result<(), WMBusError> {
        if !self.has_encryption_mode() {
            return Ok(());
        }

        let iv = self.crypto_iv()?;
        if iv.len() != WMBUS_AES_BLOCK_SIZE {
            return Err(WMBusError::UnsupportedEncryptionMode(
                self.header.encryption_mode & 0x0F,
            ));
        }

        if self.payload.is_empty() || self.payload.len() % WMBUS_AES_BLOCK_SIZE != 0 {
            return Err(WMBusError::UnalignedCipher(self.payload.len()));
        }

        let decryptor = Aes128CbcDec::new_from_slices(key.as_bytes(), &iv)
            .map_err(|_| WMBusError::InvalidKeyLength(key.as_bytes().len()))?;
        let payload_len = self.payload.len();
        if decryptor
            .decrypt_padded_mut::<NoPadding>(&mut self.payload)
            .is_err()
        {
            return Err(WMBusError::UnalignedCipher(payload_len));
        }

        if !self.is_decrypted() {
            self.payload.clear();
            return Err(WMBusError::BadKey);
        }

        log::debug!(
            "decrypted {} payload byte(s) for device {}",
            self.payload.len(),
            self.serial_number()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{WMBUS_CONTROL_MASK_SND_NR, WMBUS_FRAME_LONG_START, WMBUS_FRAME_STOP};
    use crate::frame::telegram::WMBusHeader;
    use cbc::cipher::BlockEncryptMut;

    type Aes128CbcEnc = cbc::Encryptor<Aes128>;

    fn frame_with_mode(mode: u8, payload: Vec<u8>) -> LongFrame {
        LongFrame {
            start: WMBUS_FRAME_LONG_START,
            length: 0,
            control: WMBUS_CONTROL_MASK_SND_NR,
            header: WMBusHeader {
                manufacturer: [0x33, 0x30],
                id: [0x54, 0x56, 0x02, 0x00],
                version: 0x0B,
                device_type: 0x02,
                access_number: 0x87,
                status: 0x00,
                n_encrypted_blocks: (payload.len() / 16) as u8,
                encryption_mode: mode,
            },
            ci: 0x7A,
            payload,
            checksum: 0,
            stop: WMBUS_FRAME_STOP,
            crc_enabled: true,
            rssi_enabled: false,
        }
    }

    #[test]
    fn test_mode5_iv_layout() {
        let frame = frame_with_mode(0x25, vec![0u8; 16]);
        let iv = frame.crypto_iv().unwrap();

        assert_eq!(
            iv,
            vec![
                0x33, 0x30, 0x54, 0x56, 0x02, 0x00, 0x0B, 0x02, 0x87, 0x87, 0x87, 0x87, 0x87,
                0x87, 0x87, 0x87,
            ]
        );
    }

    #[test]
    fn test_mode4_iv_is_zero() {
        let frame = frame_with_mode(0x04, vec![0u8; 16]);
        assert_eq!(frame.crypto_iv().unwrap(), vec![0u8; 16]);
    }

    #[test]
    fn test_mode2_refused_by_decrypt() {
        let mut frame = frame_with_mode(0x02, vec![0u8; 16]);
        let key = AesKey::from_bytes(&[0u8; 16]).unwrap();

        assert_eq!(frame.crypto_iv().unwrap().len(), 8);
        assert!(matches!(
            frame.decrypt(&key),
            Err(WMBusError::UnsupportedEncryptionMode(2))
        ));
    }

    #[test]
    fn test_unknown_mode() {
        let frame = frame_with_mode(0x03, vec![0u8; 16]);
        assert!(matches!(
            frame.crypto_iv(),
            Err(WMBusError::UnsupportedEncryptionMode(3))
        ));
    }

    #[test]
    fn test_unaligned_payload() {
        let mut frame = frame_with_mode(0x25, vec![0u8; 15]);
        let key = AesKey::from_bytes(&[0u8; 16]).unwrap();
        assert!(matches!(
            frame.decrypt(&key),
            Err(WMBusError::UnalignedCipher(15))
        ));
    }

    #[test]
    fn test_decrypt_roundtrip_mode5() {
        let key = AesKey::from_bytes(&[0x42; 16]).unwrap();

        // Build ciphertext the way a meter would: filler-led plaintext,
        // encrypted with the mode 5 IV
        let plaintext: Vec<u8> = {
            let mut p = vec![0x2F, 0x2F, 0x02, 0x65, 0x9D, 0x0B];
            p.resize(16, 0x2F);
            p
        };

        let reference = frame_with_mode(0x25, vec![]);
        let iv = reference.crypto_iv().unwrap();
        let mut ciphertext = plaintext.clone();
        Aes128CbcEnc::new_from_slices(key.as_bytes(), &iv)
            .unwrap()
            .encrypt_padded_mut::<NoPadding>(&mut ciphertext, 16)
            .unwrap();

        let mut frame = frame_with_mode(0x25, ciphertext);
        assert!(!frame.is_decrypted());
        frame.decrypt(&key).unwrap();

        assert!(frame.is_decrypted());
        assert_eq!(frame.payload, plaintext);
    }

    #[test]
    fn test_wrong_key_detected_and_payload_discarded() {
        let good = AesKey::from_bytes(&[0x42; 16]).unwrap();
        let bad = AesKey::from_bytes(&[0x43; 16]).unwrap();

        let reference = frame_with_mode(0x25, vec![]);
        let iv = reference.crypto_iv().unwrap();
        let mut ciphertext = vec![0x2F; 16];
        Aes128CbcEnc::new_from_slices(good.as_bytes(), &iv)
            .unwrap()
            .encrypt_padded_mut::<NoPadding>(&mut ciphertext, 16)
            .unwrap();

        let mut frame = frame_with_mode(0x25, ciphertext);
        assert!(matches!(frame.decrypt(&bad), Err(WMBusError::BadKey)));
        assert!(frame.payload.is_empty());
    }

    #[test]
    fn test_unencrypted_frame_is_a_noop() {
        let mut frame = frame_with_mode(0x00, vec![0x02, 0x65, 0x9D, 0x0B]);
        let key = AesKey::from_bytes(&[0u8; 16]).unwrap();

        frame.decrypt(&key).unwrap();
        assert!(frame.is_decrypted());
        assert_eq!(frame.payload, vec![0x02, 0x65, 0x9D, 0x0B]);
    }
}
