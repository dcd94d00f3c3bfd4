//! Device identity lookups: manufacturer code, device type (medium), meter
//! status, and the per-vendor product database.
//!
//! Manufacturer IDs follow the FLAG Association base-32 packing:
//! three letters A–Z in five bits each, offset by 64.

pub mod products;

use crate::constants::*;
use bitflags::bitflags;

pub use products::{product_lookup, PRODUCTS};

/// Decodes the 16-bit little-endian manufacturer field into its
/// three-letter code. Pure function: the same two bytes always map to the
/// same string.
pub fn decode_manufacturer(bytes: [u8; 2]) -> String {
    let id = u16::from_le_bytes(bytes);

    let mut code = String::with_capacity(3);
    code.push((((id >> 10) & 0x1F) as u8 + 64) as char);
    code.push((((id >> 5) & 0x1F) as u8 + 64) as char);
    code.push(((id & 0x1F) as u8 + 64) as char);
    code
}

bitflags! {
    /// Error bits of the meter status byte.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StatusFlags: u8 {
        const LOW_BATTERY = 0x04;
        const PERMANENT_ERROR = 0x08;
        const SABOTAGE = 0x40;
    }
}

/// Maps the status byte to a readable string.
pub fn decode_status(status: u8) -> String {
    match status {
        0x00 | 0x02 | 0x10 | 0x20 | 0x80 => "OK".to_string(),
        0x04 => "Low battery".to_string(),
        0x08 => "Permanent error/Sabotage enclosure".to_string(),
        0x40 => "Sabotage enclosure".to_string(),
        other => format!("Unknown status (0x{other:02X})"),
    }
}

/// Maps the device-type byte from the link-layer header to a medium name.
pub fn device_type_lookup(device_type: u8) -> String {
    let name = match device_type {
        WMBUS_MEDIUM_OTHER => "Other",
        WMBUS_MEDIUM_OIL => "Oil",
        WMBUS_MEDIUM_ELECTRICITY => "Electricity",
        WMBUS_MEDIUM_GAS => "Gas",
        WMBUS_MEDIUM_HEAT_OUT => "Heat: Outlet",
        WMBUS_MEDIUM_STEAM => "Steam",
        WMBUS_MEDIUM_HOT_WATER => "Warm water (30-90°C)",
        WMBUS_MEDIUM_WATER => "Water",
        WMBUS_MEDIUM_HEAT_COST => "Heat Cost Allocator",
        WMBUS_MEDIUM_COMPR_AIR => "Compressed Air",
        WMBUS_MEDIUM_COOL_OUT => "Cooling load meter: Outlet",
        WMBUS_MEDIUM_COOL_IN => "Cooling load meter: Inlet",
        WMBUS_MEDIUM_HEAT_IN => "Heat: Inlet",
        WMBUS_MEDIUM_HEAT_COOL => "Heat / Cooling load meter",
        WMBUS_MEDIUM_BUS => "Bus / System",
        WMBUS_MEDIUM_UNKNOWN => "Unknown Device type",
        WMBUS_MEDIUM_IRRIGATION => "Irrigation Water",
        WMBUS_MEDIUM_WATER_LOGGER => "Water Logger",
        WMBUS_MEDIUM_GAS_LOGGER => "Gas Logger",
        WMBUS_MEDIUM_GAS_CONV => "Gas Converter",
        WMBUS_MEDIUM_CALORIFIC => "Calorific value",
        WMBUS_MEDIUM_BOIL_WATER => "Hot water (>90°C)",
        WMBUS_MEDIUM_COLD_WATER => "Cold water",
        WMBUS_MEDIUM_DUAL_WATER => "Dual water",
        WMBUS_MEDIUM_PRESSURE => "Pressure",
        WMBUS_MEDIUM_ADC => "A/D Converter",
        WMBUS_MEDIUM_SMOKE => "Smoke Detector",
        WMBUS_MEDIUM_ROOM_SENSOR => "Ambient Sensor",
        WMBUS_MEDIUM_GAS_DETECTOR => "Gas Detector",
        WMBUS_MEDIUM_BREAKER_E => "Breaker: Electricity",
        WMBUS_MEDIUM_VALVE => "Valve: Gas or Water",
        WMBUS_MEDIUM_CUSTOMER_UNIT => "Customer Unit: Display Device",
        WMBUS_MEDIUM_WASTE_WATER => "Waste Water",
        WMBUS_MEDIUM_GARBAGE => "Garbage",
        WMBUS_MEDIUM_VOC => "VOC Sensor",
        WMBUS_MEDIUM_SERVICE_UNIT => "Service Unit",
        WMBUS_MEDIUM_RC_SYSTEM => "Radio Converter: System",
        WMBUS_MEDIUM_RC_METER => "Radio Converter: Meter",
        0x22..=0x3F => "Reserved",
        other => return format!("Unknown medium (0x{other:02X})"),
    };

    name.to_string()
}
