//! Wireless M-Bus Protocol Constants
//!
//! This module defines constants used in the wM-Bus protocol implementation,
//! based on the EN 13757-4 standard and OMS-Spec Vol. 2.

/// ACK frame start byte
pub const WMBUS_FRAME_ACK_START: u8 = 0xE5;

/// Short frame start byte
pub const WMBUS_FRAME_SHORT_START: u8 = 0x10;

/// Long/control frame start byte
pub const WMBUS_FRAME_LONG_START: u8 = 0x68;

/// Frame stop byte
pub const WMBUS_FRAME_STOP: u8 = 0x16;

/// Total size of a short frame (start, control, address, checksum, stop)
pub const WMBUS_FRAME_BASE_SIZE_SHORT: usize = 5;

/// Bytes needed before the length of a long frame is known
pub const WMBUS_FRAME_LONG_PREFIX: usize = 3;

/// Bound on the framer accumulator
pub const WMBUS_PACKET_BUFF_SIZE: usize = 2048;

/// Consecutive zero-byte reads before the framer gives up
pub const WMBUS_MAX_ZERO_READS: u32 = 3;

// Control masks (full control bytes for common commands)
pub const WMBUS_CONTROL_MASK_SND_NKE: u8 = 0x40;
pub const WMBUS_CONTROL_MASK_SND_NR: u8 = 0x44;
pub const WMBUS_CONTROL_MASK_SND_UD: u8 = 0x53;
pub const WMBUS_CONTROL_MASK_REQ_UD1: u8 = 0x5A;
pub const WMBUS_CONTROL_MASK_REQ_UD2: u8 = 0x5B;
pub const WMBUS_CONTROL_MASK_RSP_UD: u8 = 0x08;

// Control flag bits
pub const WMBUS_CONTROL_MASK_FCB: u8 = 0x20;
pub const WMBUS_CONTROL_MASK_FCV: u8 = 0x10;
pub const WMBUS_CONTROL_MASK_ACD: u8 = 0x20;
pub const WMBUS_CONTROL_MASK_DFC: u8 = 0x10;

/// CI values carrying the one-byte application header
/// (ACC + STATUS + NBLOCKS + MODE at offsets 12..16, payload at 16)
pub const WMBUS_CI_SHORT_HEADER: &[u8] = &[
    0x61, 0x65, 0x6A, 0x6E, 0x74, 0x7A, 0x7B, 0x7D, 0x7F, 0x8A,
];

/// CI values carrying the 12-byte long application header (payload at 24)
pub const WMBUS_CI_LONG_HEADER: &[u8] = &[
    0x60, 0x64, 0x6B, 0x6F, 0x72, 0x75, 0x7C, 0x7E, 0x80, 0x8B, 0x37,
];

/// Fixed link+network layer overhead counted by the length byte:
/// C + M(2) + ID(4) + V + T + CI + ACC + STATUS + NBLOCKS + MODE + checksum
pub const WMBUS_FRAME_LENGTH_OVERHEAD: usize = 15;

/// Extra header bytes when the CI selects the long application header
pub const WMBUS_LONG_HEADER_EXTRA: usize = 8;

/// Offset of the application payload for short-CI-header frames
pub const WMBUS_SHORT_HEADER_PAYLOAD_OFFSET: usize = 16;

/// Offset of the application payload for long-CI-header frames
pub const WMBUS_LONG_HEADER_PAYLOAD_OFFSET: usize = 24;

/// AES block size used by encryption modes 4 and 5
pub const WMBUS_AES_BLOCK_SIZE: usize = 16;

/// Idle filler byte (AES block padding and post-decrypt verification)
pub const WMBUS_DIF_IDLE_FILLER: u8 = 0x2F;

/// DIF marking a manufacturer-specific data block
pub const WMBUS_DIF_MANUFACTURER_SPECIFIC: u8 = 0x0F;

/// DIF marking that more records follow in a subsequent telegram
pub const WMBUS_DIF_MORE_RECORDS_FOLLOW: u8 = 0x1F;

/// DIF/DIFE/VIF/VIFE extension bit
pub const WMBUS_EXTENSION_BIT: u8 = 0x80;

/// Mask selecting a VIF/VIFE code without its extension bit
pub const WMBUS_WITHOUT_EXTENSION: u8 = 0x7F;

// DIF masks
pub const WMBUS_DIF_MASK_DATA: u8 = 0x0F;
pub const WMBUS_DIF_MASK_FUNCTION: u8 = 0x30;
pub const WMBUS_DIF_MASK_STORAGE_NO: u8 = 0x40;

// DIFE masks
pub const WMBUS_DIFE_MASK_STORAGE_NO: u8 = 0x0F;
pub const WMBUS_DIFE_MASK_TARIFF: u8 = 0x30;
pub const WMBUS_DIFE_MASK_DEVICE: u8 = 0x40;

/// Cap on DIFE/VIFE extension chains
pub const WMBUS_MAX_EXTENSIONS: usize = 10;

/// Cap on the plain-text VIF label (VIF 0x7C)
pub const WMBUS_CUSTOM_VIF_SIZE: usize = 16;

// Medium (device type) codes from the link-layer header
pub const WMBUS_MEDIUM_OTHER: u8 = 0x00;
pub const WMBUS_MEDIUM_OIL: u8 = 0x01;
pub const WMBUS_MEDIUM_ELECTRICITY: u8 = 0x02;
pub const WMBUS_MEDIUM_GAS: u8 = 0x03;
pub const WMBUS_MEDIUM_HEAT_OUT: u8 = 0x04;
pub const WMBUS_MEDIUM_STEAM: u8 = 0x05;
pub const WMBUS_MEDIUM_HOT_WATER: u8 = 0x06;
pub const WMBUS_MEDIUM_WATER: u8 = 0x07;
pub const WMBUS_MEDIUM_HEAT_COST: u8 = 0x08;
pub const WMBUS_MEDIUM_COMPR_AIR: u8 = 0x09;
pub const WMBUS_MEDIUM_COOL_OUT: u8 = 0x0A;
pub const WMBUS_MEDIUM_COOL_IN: u8 = 0x0B;
pub const WMBUS_MEDIUM_HEAT_IN: u8 = 0x0C;
pub const WMBUS_MEDIUM_HEAT_COOL: u8 = 0x0D;
pub const WMBUS_MEDIUM_BUS: u8 = 0x0E;
pub const WMBUS_MEDIUM_UNKNOWN: u8 = 0x0F;
pub const WMBUS_MEDIUM_IRRIGATION: u8 = 0x10;
pub const WMBUS_MEDIUM_WATER_LOGGER: u8 = 0x11;
pub const WMBUS_MEDIUM_GAS_LOGGER: u8 = 0x12;
pub const WMBUS_MEDIUM_GAS_CONV: u8 = 0x13;
pub const WMBUS_MEDIUM_CALORIFIC: u8 = 0x14;
pub const WMBUS_MEDIUM_BOIL_WATER: u8 = 0x15;
pub const WMBUS_MEDIUM_COLD_WATER: u8 = 0x16;
pub const WMBUS_MEDIUM_DUAL_WATER: u8 = 0x17;
pub const WMBUS_MEDIUM_PRESSURE: u8 = 0x18;
pub const WMBUS_MEDIUM_ADC: u8 = 0x19;
pub const WMBUS_MEDIUM_SMOKE: u8 = 0x1A;
pub const WMBUS_MEDIUM_ROOM_SENSOR: u8 = 0x1B;
pub const WMBUS_MEDIUM_GAS_DETECTOR: u8 = 0x1C;
pub const WMBUS_MEDIUM_BREAKER_E: u8 = 0x20;
pub const WMBUS_MEDIUM_VALVE: u8 = 0x21;
pub const WMBUS_MEDIUM_CUSTOMER_UNIT: u8 = 0x25;
pub const WMBUS_MEDIUM_WASTE_WATER: u8 = 0x28;
pub const WMBUS_MEDIUM_GARBAGE: u8 = 0x29;
pub const WMBUS_MEDIUM_VOC: u8 = 0x2B;
pub const WMBUS_MEDIUM_SERVICE_UNIT: u8 = 0x30;
pub const WMBUS_MEDIUM_RC_SYSTEM: u8 = 0x36;
pub const WMBUS_MEDIUM_RC_METER: u8 = 0x37;
