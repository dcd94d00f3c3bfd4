//! Streaming facade over the framer.
//!
//! One producer task per source repeatedly pulls telegrams and publishes
//! them on a bounded channel, preserving arrival order. Malformed frames
//! and timeouts are dropped with a logged warning; cancellation stops the
//! task between frames and closes the channel.

use crate::error::WMBusError;
use crate::frame::framer::{ByteSource, Framer};
use crate::frame::telegram::{FrameConfig, Telegram};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Channel capacity, matching the original gateway's stream depth.
const STREAM_CHANNEL_CAPACITY: usize = 1024;

/// Cooperative cancellation handle for a telegram stream.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests the stream to stop after the frame in progress.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Spawns the producer task for `source` and returns the telegram channel
/// plus its cancellation token.
///
/// The channel closes when the token is cancelled, the receiver is dropped,
/// or the source fails.
pub fn spawn_stream<S>(
    source: S,
    config: FrameConfig,
) -> (mpsc::Receiver<Telegram>, CancelToken)
where
    S: ByteSource + Send + 'static,
{
    let (tx, rx) = mpsc::channel(STREAM_CHANNEL_CAPACITY);
    let token = CancelToken::new();
    let task_token = token.clone();

    tokio::task::spawn_blocking(move || {
        let mut framer = Framer::with_config(source, config);

        while !task_token.is_cancelled() {
            match framer.next_telegram() {
                Ok(telegram) => {
                    if tx.blocking_send(telegram).is_err() {
                        log::debug!("telegram stream receiver dropped, stopping");
                        break;
                    }
                }
                Err(WMBusError::Timeout) => {
                    log::debug!("no frame within timeout window");
                }
                Err(err @ WMBusError::SourceError(_)) => {
                    log::error!("byte source failed: {err}");
                    break;
                }
                Err(err) => {
                    log::warn!("dropping frame: {err}");
                }
            }
        }
        // tx drops here and closes the channel
    });

    (rx, token)
}
