//! Incremental stream framer.
//!
//! Pulls bytes from an opaque source until one complete telegram is
//! buffered, resynchronizing on garbage. The accumulator is bounded;
//! three consecutive zero-byte reads abort the frame with a timeout.

use crate::constants::{WMBUS_MAX_ZERO_READS, WMBUS_PACKET_BUFF_SIZE};
use crate::error::WMBusError;
use crate::frame::parse::{parse_with_config, ParseOutcome};
use crate::frame::telegram::{FrameConfig, Telegram};
use bytes::{Buf, BytesMut};

/// An opaque byte producer.
///
/// The source never parses. It may block, may return fewer bytes than
/// requested, and returns an empty chunk when no data arrived in time.
pub trait ByteSource {
    fn read(&mut self, max_wanted: usize) -> Result<Vec<u8>, WMBusError>;
}

/// Incremental telegram framer over a [`ByteSource`].
#[derive(Debug)]
pub struct Framer<S> {
    source: S,
    buf: BytesMut,
    config: FrameConfig,
}

impl<S: ByteSource> Framer<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, FrameConfig::default())
    }

    pub fn with_config(source: S, config: FrameConfig) -> Self {
        Self {
            source,
            buf: BytesMut::with_capacity(WMBUS_PACKET_BUFF_SIZE),
            config,
        }
    }

    /// Blocks until one telegram is complete, a structural failure makes
    /// the stream unrecoverable, or the source stays silent.
    pub fn next_telegram(&mut self) -> Result<Telegram, WMBusError> {
        let mut wanted = 1usize;
        let mut zero_reads = 0u32;

        loop {
            if self.buf.len() + wanted > WMBUS_PACKET_BUFF_SIZE {
                self.buf.clear();
                return Err(WMBusError::BufferOverflow(WMBUS_PACKET_BUFF_SIZE));
            }

            let chunk = self.source.read(wanted)?;
            if chunk.is_empty() {
                zero_reads += 1;
                if zero_reads >= WMBUS_MAX_ZERO_READS {
                    self.buf.clear();
                    return Err(WMBusError::Timeout);
                }
                continue;
            }
            zero_reads = 0;
            self.buf.extend_from_slice(&chunk);

            loop {
                match parse_with_config(&self.buf, &self.config) {
                    Ok(ParseOutcome::Frame { telegram, consumed }) => {
                        self.buf.advance(consumed);
                        return Ok(telegram);
                    }
                    Ok(ParseOutcome::NeedMore(n)) => {
                        wanted = n;
                        break;
                    }
                    Err(WMBusError::BadStart(byte)) => {
                        // Garbage before a start byte, discard and rescan
                        log::trace!("discarding non-start byte 0x{byte:02X}");
                        self.buf.advance(1);
                    }
                    Err(WMBusError::BadControl(control)) => {
                        // A start byte inside another frame's body, slide
                        log::debug!(
                            "start byte with invalid control 0x{control:02X}, sliding one byte"
                        );
                        self.buf.advance(1);
                    }
                    Err(err) => {
                        // Structurally broken frame, drop it and reseek
                        log::warn!("dropping malformed frame: {err}");
                        self.buf.clear();
                        wanted = 1;
                        break;
                    }
                }

                if self.buf.is_empty() {
                    wanted = 1;
                    break;
                }
            }
        }
    }

    /// Bytes currently buffered but not yet consumed.
    pub fn buffered(&self) -> usize {
        self.buf.len()
    }
}
