//! Single-shot telegram parsing.
//!
//! [`parse`] inspects a byte buffer and either returns a validated
//! [`Telegram`] with the number of bytes it consumed, or reports how many
//! more bytes are needed before a decision can be made. Structural failures
//! (bad start, control, stop, length, CI) are errors; the incremental
//! framer uses them to resynchronize.

use crate::constants::*;
use crate::error::WMBusError;
use crate::frame::telegram::{
    verify_control_long, FrameConfig, LongFrame, ShortFrame, Telegram,
    WMBusHeader,
};

/// The result of a single parse attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// A complete telegram; `consumed` bytes belong to it.
    Frame { telegram: Telegram, consumed: usize },
    /// The buffer holds a valid prefix; this many more bytes are required.
    NeedMore(usize),
}

/// Parses with the default receive configuration (link CRC byte present).
pub fn parse(data: &[u8]) -> Result<ParseOutcome, WMBusError> {
    parse_with_config(data, &FrameConfig::default())
}

/// Parses one telegram from the front of `data`.
pub fn parse_with_config(
    data: &[u8],
    config: &FrameConfig,
) -> Result<ParseOutcome, WMBusError> {
    if data.is_empty() {
        return Ok(ParseOutcome::NeedMore(1));
    }

    match data[0] {
        WMBUS_FRAME_ACK_START => Ok(ParseOutcome::Frame {
            telegram: Telegram::Ack,
            consumed: 1,
        }),

        WMBUS_FRAME_SHORT_START => parse_short(data),

        WMBUS_FRAME_LONG_START => parse_long(data, config),

        other => Err(WMBusError::BadStart(other)),
    }
}

fn parse_short(data: &[u8]) -> Result<ParseOutcome, WMBusError> {
    if data.len() < WMBUS_FRAME_BASE_SIZE_SHORT {
        return Ok(ParseOutcome::NeedMore(
            WMBUS_FRAME_BASE_SIZE_SHORT - data.len(),
        ));
    }

    let frame = ShortFrame {
        start: data[0],
        control: data[1],
        address: data[2],
        checksum: data[3],
        stop: data[4],
    };
    frame.verify()?;

    Ok(ParseOutcome::Frame {
        telegram: Telegram::Short(frame),
        consumed: WMBUS_FRAME_BASE_SIZE_SHORT,
    })
}

fn parse_long(data: &[u8], config: &FrameConfig) -> Result<ParseOutcome, WMBusError> {
    if data.len() < WMBUS_FRAME_LONG_PREFIX {
        return Ok(ParseOutcome::NeedMore(WMBUS_FRAME_LONG_PREFIX - data.len()));
    }

    let length = data[1];
    let control = data[2];

    // Early control check: a 0x68 inside another frame's body would rarely
    // be followed by a valid control byte, so this catches mid-frame resync
    verify_control_long(control)?;

    // The length byte counts everything between itself and the stop byte
    let total = usize::from(length) + 3;

    let mut overhead = WMBUS_FRAME_LENGTH_OVERHEAD;
    if config.rssi_enabled {
        overhead += 1;
    }
    if config.crc_enabled {
        overhead += 1;
    }
    if usize::from(length) < overhead {
        return Err(WMBusError::BadLength {
            header: length,
            computed: overhead,
        });
    }

    if data.len() < total {
        return Ok(ParseOutcome::NeedMore(total - data.len()));
    }

    let ci = data[11];
    let (payload_offset, app_overhead) = if WMBUS_CI_SHORT_HEADER.contains(&ci) {
        (WMBUS_SHORT_HEADER_PAYLOAD_OFFSET, overhead)
    } else if WMBUS_CI_LONG_HEADER.contains(&ci) {
        (
            WMBUS_LONG_HEADER_PAYLOAD_OFFSET,
            overhead + WMBUS_LONG_HEADER_EXTRA,
        )
    } else {
        return Err(WMBusError::BadCI(ci));
    };

    let payload_size = usize::from(length)
        .checked_sub(app_overhead)
        .ok_or(WMBusError::BadLength {
            header: length,
            computed: app_overhead,
        })?;

    // ACC / STATUS / NBLOCKS / MODE sit right before the payload
    let app = payload_offset - 4;
    let header = WMBusHeader {
        manufacturer: [data[3], data[4]],
        id: [data[5], data[6], data[7], data[8]],
        version: data[9],
        device_type: data[10],
        access_number: data[app],
        status: data[app + 1],
        n_encrypted_blocks: data[app + 2],
        encryption_mode: data[app + 3],
    };

    let frame = LongFrame {
        start: data[0],
        length,
        control,
        header,
        ci,
        payload: data[payload_offset..payload_offset + payload_size].to_vec(),
        checksum: data[total - 2],
        stop: data[total - 1],
        crc_enabled: config.crc_enabled,
        rssi_enabled: config.rssi_enabled,
    };
    frame.verify(config)?;

    if frame.is_control() {
        log::debug!("received control frame, C=0x{control:02X}");
    }

    Ok(ParseOutcome::Frame {
        telegram: Telegram::Long(frame),
        consumed: total,
    })
}
