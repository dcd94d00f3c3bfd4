//! # Wireless M-Bus Frame Handling
//!
//! This module covers the link layer of the decoder: the telegram model,
//! single-shot parsing, the incremental stream framer, payload decryption,
//! and the channel-based streaming facade.

pub mod crypto;
pub mod framer;
pub mod parse;
pub mod stream;
pub mod telegram;

pub use framer::{ByteSource, Framer};
pub use parse::{parse, parse_with_config, ParseOutcome};
pub use stream::{spawn_stream, CancelToken};
pub use telegram::{FrameConfig, LongFrame, ShortFrame, Telegram, WMBusHeader};
