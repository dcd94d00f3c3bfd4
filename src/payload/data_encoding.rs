//! # wM-Bus Data Encoding and Decoding
//!
//! This module provides functions for decoding the scalar data types carried
//! by wM-Bus data records: little-endian signed integers, BCD, IEEE-754
//! singles, and the reversed ASCII strings used for plain-text units.

use nom::{bytes::complete::take, combinator::map, IResult};

/// Decodes a reversed ASCII string (the link transmits strings LSB first).
pub fn data_str_decode(dst: &mut String, src: &[u8]) {
    dst.clear();
    for item in src.iter().rev() {
        dst.push(*item as char);
    }
}

/// Decodes a binary blob into a hex dump string ("AA BB CC").
pub fn data_bin_decode(dst: &mut String, src: &[u8]) {
    dst.clear();
    for item in src {
        dst.push_str(&format!("{item:02X} "));
    }
    if dst.ends_with(' ') {
        dst.pop();
    }
}

/// Decodes a little-endian two's-complement signed integer of 1..=8 bytes.
pub fn decode_int(input: &[u8], size: usize) -> IResult<&[u8], i64> {
    map(take(size), move |bytes: &[u8]| {
        let mut value: u64 = 0;
        for &byte in bytes.iter().rev() {
            value = (value << 8) | u64::from(byte);
        }

        // Sign extend from the most-significant wire byte
        if size > 0 && size < 8 && bytes[size - 1] & 0x80 != 0 {
            (value as i64) - (1i64 << (size * 8))
        } else {
            value as i64
        }
    })(input)
}

/// Decodes packed BCD, least-significant byte first.
///
/// A high nibble of 0xF in the most-significant byte marks a negative value;
/// non-digit nibbles elsewhere contribute zero.
pub fn decode_bcd(input: &[u8], size: usize) -> IResult<&[u8], i64> {
    map(take(size), move |bytes: &[u8]| {
        let mut value: i64 = 0;
        let negative = size > 0 && bytes[size - 1] >> 4 == 0xF;

        for (idx, &byte) in bytes.iter().enumerate().rev() {
            let hi = byte >> 4;
            let lo = byte & 0x0F;

            value *= 10;
            if hi < 0xA && !(negative && idx == size - 1) {
                value += i64::from(hi);
            }

            value *= 10;
            if lo < 0xA {
                value += i64::from(lo);
            }
        }

        if negative {
            -value
        } else {
            value
        }
    })(input)
}

/// Composes bytes little-endian into an unsigned value.
///
/// Used for serial numbers and for rendering BCD fields as their hexadecimal
/// digit string (each BCD byte already reads as two decimal digits in hex).
pub fn decode_bcd_hex(input: &[u8], size: usize) -> IResult<&[u8], u64> {
    map(take(size), |bytes: &[u8]| {
        let mut value: u64 = 0;
        for (i, &byte) in bytes.iter().enumerate() {
            value |= u64::from(byte) << (i * 8);
        }
        value
    })(input)
}

/// Decodes a little-endian IEEE-754 single.
pub fn decode_float(input: &[u8]) -> IResult<&[u8], f32> {
    map(take(4usize), |bytes: &[u8]| {
        f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    })(input)
}

/// Decodes a Type G (CP16) date point into `YYYY-MM-DD`.
pub fn decode_date_cp16(input: &[u8]) -> IResult<&[u8], String> {
    map(take(2usize), |bytes: &[u8]| {
        let year = 1900 + u32::from(((bytes[0] & 0xE0) >> 5) | ((bytes[1] & 0xF0) >> 1)) + 100;
        let month = bytes[1] & 0x0F;
        let day = bytes[0] & 0x1F;
        format!("{year:04}-{month:02}-{day:02}")
    })(input)
}

/// Decodes a Type F (CP32) date and time point into `YYYY-MM-DDTHH:MM`.
pub fn decode_datetime_cp32(input: &[u8]) -> IResult<&[u8], String> {
    map(take(4usize), |bytes: &[u8]| {
        let minute = bytes[0] & 0x3F;
        let hour = bytes[1] & 0x1F;
        let day = bytes[2] & 0x1F;
        let month = bytes[3] & 0x0F;
        let year = 1900 + u32::from(((bytes[2] & 0xE0) >> 5) | ((bytes[3] & 0xF0) >> 1)) + 100;
        format!("{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}")
    })(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_int_positive() {
        let (_, value) = decode_int(&[0x9D, 0x0B], 2).unwrap();
        assert_eq!(value, 0x0B9D);
    }

    #[test]
    fn test_decode_int_negative_two_complement() {
        let (_, value) = decode_int(&[0xFF], 1).unwrap();
        assert_eq!(value, -1);

        let (_, value) = decode_int(&[0xFE, 0xFF], 2).unwrap();
        assert_eq!(value, -2);

        // Negative with low bits set: canonical two's complement, not the
        // historical invert-and-subtract variant
        let (_, value) = decode_int(&[0x9C, 0xFF], 2).unwrap();
        assert_eq!(value, -100);
    }

    #[test]
    fn test_decode_int_wide() {
        let (_, value) = decode_int(&[0x01, 0x00, 0x00, 0x00, 0x00, 0x00], 6).unwrap();
        assert_eq!(value, 1);

        let (_, value) = decode_int(&[0xFF; 8], 8).unwrap();
        assert_eq!(value, -1);
    }

    #[test]
    fn test_decode_bcd() {
        let (_, value) = decode_bcd(&[0x34, 0x12, 0x00, 0x00], 4).unwrap();
        assert_eq!(value, 1234);
    }

    #[test]
    fn test_decode_bcd_negative() {
        // 0xF in the top nibble of the most significant byte flips the sign
        let (_, value) = decode_bcd(&[0x34, 0x12, 0x00, 0xF0], 4).unwrap();
        assert_eq!(value, -1234);
    }

    #[test]
    fn test_decode_bcd_skips_non_digit_nibbles() {
        let (_, value) = decode_bcd(&[0x3B, 0x12], 2).unwrap();
        // 0xB low nibble is not a decimal digit, contributes zero
        assert_eq!(value, 1230);
    }

    #[test]
    fn test_decode_bcd_hex_serial() {
        let (_, value) = decode_bcd_hex(&[0x54, 0x56, 0x02, 0x00], 4).unwrap();
        assert_eq!(format!("{value:X}"), "25654");
    }

    #[test]
    fn test_decode_float() {
        let bytes = 1.5f32.to_le_bytes();
        let (_, value) = decode_float(&bytes).unwrap();
        assert_eq!(value, 1.5);
    }

    #[test]
    fn test_decode_date_cp16() {
        // day 17, month 5, year 2024 (24 years past the 2000 epoch)
        let (_, date) = decode_date_cp16(&[0x11, 0x35]).unwrap();
        assert_eq!(date, "2024-05-17");
    }

    #[test]
    fn test_decode_datetime_cp32() {
        let (_, stamp) = decode_datetime_cp32(&[0x1E, 0x0A, 0x11, 0x35]).unwrap();
        assert_eq!(stamp, "2024-05-17T10:30");
    }

    #[test]
    fn test_data_str_decode_reverses() {
        let mut out = String::new();
        data_str_decode(&mut out, b"Wk"); // transmitted LSB first
        assert_eq!(out, "kW");
    }

    #[test]
    fn test_data_bin_decode() {
        let mut out = String::new();
        data_bin_decode(&mut out, &[0xAA, 0x0B]);
        assert_eq!(out, "AA 0B");
    }
}
