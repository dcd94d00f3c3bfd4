//! VIF/VIFE Mapping Tables and Lookup Functions
//!
//! Lookups for wM-Bus Value Information Fields (VIF) and their FD/FB
//! extension tables as defined in EN 13757-3. Primary codes are keyed by
//! `vif & 0x7F`; extension codes are offset into the 0x100 (FD) and 0x200
//! (FB) ranges.

use crate::payload::vif::VifInfo;

/// Primary VIF codes (masked, 0x00–0x7F) as defined in EN 13757-3.
///
/// Row layout: (code, exponent, unit, type tag, description).
pub const VIF_CODES: &[(u16, f64, &str, &str, &str)] = &[
    (0x00, 1e-3, "Wh", "ENERGY_WH", "Energy"),
    (0x01, 1e-2, "Wh", "ENERGY_WH", "Energy"),
    (0x02, 1e-1, "Wh", "ENERGY_WH", "Energy"),
    (0x03, 1e0, "Wh", "ENERGY_WH", "Energy"),
    (0x04, 1e1, "Wh", "ENERGY_WH", "Energy"),
    (0x05, 1e2, "Wh", "ENERGY_WH", "Energy"),
    (0x06, 1e3, "Wh", "ENERGY_WH", "Energy"),
    (0x07, 1e4, "Wh", "ENERGY_WH", "Energy"),
    (0x08, 1e0, "J", "ENERGY_J", "Energy"),
    (0x09, 1e1, "J", "ENERGY_J", "Energy"),
    (0x0A, 1e2, "J", "ENERGY_J", "Energy"),
    (0x0B, 1e3, "J", "ENERGY_J", "Energy"),
    (0x0C, 1e4, "J", "ENERGY_J", "Energy"),
    (0x0D, 1e5, "J", "ENERGY_J", "Energy"),
    (0x0E, 1e6, "J", "ENERGY_J", "Energy"),
    (0x0F, 1e7, "J", "ENERGY_J", "Energy"),
    (0x10, 1e-6, "m^3", "VOLUME", "Volume"),
    (0x11, 1e-5, "m^3", "VOLUME", "Volume"),
    (0x12, 1e-4, "m^3", "VOLUME", "Volume"),
    (0x13, 1e-3, "m^3", "VOLUME", "Volume"),
    (0x14, 1e-2, "m^3", "VOLUME", "Volume"),
    (0x15, 1e-1, "m^3", "VOLUME", "Volume"),
    (0x16, 1e0, "m^3", "VOLUME", "Volume"),
    (0x17, 1e1, "m^3", "VOLUME", "Volume"),
    (0x18, 1e-3, "kg", "MASS", "Mass"),
    (0x19, 1e-2, "kg", "MASS", "Mass"),
    (0x1A, 1e-1, "kg", "MASS", "Mass"),
    (0x1B, 1e0, "kg", "MASS", "Mass"),
    (0x1C, 1e1, "kg", "MASS", "Mass"),
    (0x1D, 1e2, "kg", "MASS", "Mass"),
    (0x1E, 1e3, "kg", "MASS", "Mass"),
    (0x1F, 1e4, "kg", "MASS", "Mass"),
    (0x20, 1.0, "s", "ON_TIME", "On time"),
    (0x21, 1.0, "min", "ON_TIME", "On time"),
    (0x22, 1.0, "h", "ON_TIME", "On time"),
    (0x23, 1.0, "days", "ON_TIME", "On time"),
    (0x24, 1.0, "s", "OPERATING_TIME", "Operating time"),
    (0x25, 1.0, "min", "OPERATING_TIME", "Operating time"),
    (0x26, 1.0, "h", "OPERATING_TIME", "Operating time"),
    (0x27, 1.0, "days", "OPERATING_TIME", "Operating time"),
    (0x28, 1e-3, "W", "POWER_W", "Power"),
    (0x29, 1e-2, "W", "POWER_W", "Power"),
    (0x2A, 1e-1, "W", "POWER_W", "Power"),
    (0x2B, 1e0, "W", "POWER_W", "Power"),
    (0x2C, 1e1, "W", "POWER_W", "Power"),
    (0x2D, 1e2, "W", "POWER_W", "Power"),
    (0x2E, 1e3, "W", "POWER_W", "Power"),
    (0x2F, 1e4, "W", "POWER_W", "Power"),
    (0x30, 1e0, "J/h", "POWER_J_H", "Power"),
    (0x31, 1e1, "J/h", "POWER_J_H", "Power"),
    (0x32, 1e2, "J/h", "POWER_J_H", "Power"),
    (0x33, 1e3, "J/h", "POWER_J_H", "Power"),
    (0x34, 1e4, "J/h", "POWER_J_H", "Power"),
    (0x35, 1e5, "J/h", "POWER_J_H", "Power"),
    (0x36, 1e6, "J/h", "POWER_J_H", "Power"),
    (0x37, 1e7, "J/h", "POWER_J_H", "Power"),
    (0x38, 1e-6, "m^3/h", "VOLUME_FLOW", "Volume flow"),
    (0x39, 1e-5, "m^3/h", "VOLUME_FLOW", "Volume flow"),
    (0x3A, 1e-4, "m^3/h", "VOLUME_FLOW", "Volume flow"),
    (0x3B, 1e-3, "m^3/h", "VOLUME_FLOW", "Volume flow"),
    (0x3C, 1e-2, "m^3/h", "VOLUME_FLOW", "Volume flow"),
    (0x3D, 1e-1, "m^3/h", "VOLUME_FLOW", "Volume flow"),
    (0x3E, 1e0, "m^3/h", "VOLUME_FLOW", "Volume flow"),
    (0x3F, 1e1, "m^3/h", "VOLUME_FLOW", "Volume flow"),
    (0x40, 1e-7, "m^3/min", "VOLUME_FLOW_EXT", "Volume flow"),
    (0x41, 1e-6, "m^3/min", "VOLUME_FLOW_EXT", "Volume flow"),
    (0x42, 1e-5, "m^3/min", "VOLUME_FLOW_EXT", "Volume flow"),
    (0x43, 1e-4, "m^3/min", "VOLUME_FLOW_EXT", "Volume flow"),
    (0x44, 1e-3, "m^3/min", "VOLUME_FLOW_EXT", "Volume flow"),
    (0x45, 1e-2, "m^3/min", "VOLUME_FLOW_EXT", "Volume flow"),
    (0x46, 1e-1, "m^3/min", "VOLUME_FLOW_EXT", "Volume flow"),
    (0x47, 1e0, "m^3/min", "VOLUME_FLOW_EXT", "Volume flow"),
    (0x48, 1e-9, "m^3/s", "VOLUME_FLOW_EXT_S", "Volume flow"),
    (0x49, 1e-8, "m^3/s", "VOLUME_FLOW_EXT_S", "Volume flow"),
    (0x4A, 1e-7, "m^3/s", "VOLUME_FLOW_EXT_S", "Volume flow"),
    (0x4B, 1e-6, "m^3/s", "VOLUME_FLOW_EXT_S", "Volume flow"),
    (0x4C, 1e-5, "m^3/s", "VOLUME_FLOW_EXT_S", "Volume flow"),
    (0x4D, 1e-4, "m^3/s", "VOLUME_FLOW_EXT_S", "Volume flow"),
    (0x4E, 1e-3, "m^3/s", "VOLUME_FLOW_EXT_S", "Volume flow"),
    (0x4F, 1e-2, "m^3/s", "VOLUME_FLOW_EXT_S", "Volume flow"),
    (0x50, 1e-3, "kg/h", "MASS_FLOW", "Mass flow"),
    (0x51, 1e-2, "kg/h", "MASS_FLOW", "Mass flow"),
    (0x52, 1e-1, "kg/h", "MASS_FLOW", "Mass flow"),
    (0x53, 1e0, "kg/h", "MASS_FLOW", "Mass flow"),
    (0x54, 1e1, "kg/h", "MASS_FLOW", "Mass flow"),
    (0x55, 1e2, "kg/h", "MASS_FLOW", "Mass flow"),
    (0x56, 1e3, "kg/h", "MASS_FLOW", "Mass flow"),
    (0x57, 1e4, "kg/h", "MASS_FLOW", "Mass flow"),
    (0x58, 1e-3, "°C", "FLOW_TEMPERATURE", "Flow temperature"),
    (0x59, 1e-2, "°C", "FLOW_TEMPERATURE", "Flow temperature"),
    (0x5A, 1e-1, "°C", "FLOW_TEMPERATURE", "Flow temperature"),
    (0x5B, 1e0, "°C", "FLOW_TEMPERATURE", "Flow temperature"),
    (0x5C, 1e-3, "°C", "RETURN_TEMPERATURE", "Return temperature"),
    (0x5D, 1e-2, "°C", "RETURN_TEMPERATURE", "Return temperature"),
    (0x5E, 1e-1, "°C", "RETURN_TEMPERATURE", "Return temperature"),
    (0x5F, 1e0, "°C", "RETURN_TEMPERATURE", "Return temperature"),
    (0x60, 1e-3, "K", "TEMPERATURE_DIFFERENCE", "Temperature difference"),
    (0x61, 1e-2, "K", "TEMPERATURE_DIFFERENCE", "Temperature difference"),
    (0x62, 1e-1, "K", "TEMPERATURE_DIFFERENCE", "Temperature difference"),
    (0x63, 1e0, "K", "TEMPERATURE_DIFFERENCE", "Temperature difference"),
    (0x64, 1e-3, "°C", "EXTERNAL_TEMPERATURE", "External temperature"),
    (0x65, 1e-2, "°C", "EXTERNAL_TEMPERATURE", "External temperature"),
    (0x66, 1e-1, "°C", "EXTERNAL_TEMPERATURE", "External temperature"),
    (0x67, 1e0, "°C", "EXTERNAL_TEMPERATURE", "External temperature"),
    (0x68, 1e-3, "bar", "PRESSURE", "Pressure"),
    (0x69, 1e-2, "bar", "PRESSURE", "Pressure"),
    (0x6A, 1e-1, "bar", "PRESSURE", "Pressure"),
    (0x6B, 1e0, "bar", "PRESSURE", "Pressure"),
    (0x6C, 1.0, "", "DATE", "Time point (date)"),
    (0x6D, 1.0, "", "DATE_TIME", "Time point (date & time)"),
    (0x6E, 1.0, "units", "HCA", "Units for H.C.A."),
    (0x6F, 1.0, "", "RESERVED", "Reserved"),
    (0x70, 1.0, "s", "AVG_DURATION", "Averaging duration"),
    (0x71, 1.0, "min", "AVG_DURATION", "Averaging duration"),
    (0x72, 1.0, "h", "AVG_DURATION", "Averaging duration"),
    (0x73, 1.0, "days", "AVG_DURATION", "Averaging duration"),
    (0x74, 1.0, "s", "ACTUALITY_DURATION", "Actuality duration"),
    (0x75, 1.0, "min", "ACTUALITY_DURATION", "Actuality duration"),
    (0x76, 1.0, "h", "ACTUALITY_DURATION", "Actuality duration"),
    (0x77, 1.0, "days", "ACTUALITY_DURATION", "Actuality duration"),
    (0x78, 1.0, "", "FABRICATION_NO", "Fabrication number"),
    (0x79, 1.0, "", "IDENTIFICATION", "(Enhanced) identification"),
    (0x7A, 1.0, "", "ADDRESS", "Bus address"),
    (0x7B, 1.0, "", "RESERVED", "Reserved"),
    (0x7D, 1.0, "", "RESERVED", "Reserved"),
    (0x7E, 1.0, "", "ANY_VIF", "Any VIF"),
    (0x7F, 1.0, "", "MANUFACTURER_SPECIFIC", "Manufacturer specific"),
];

/// FD extension codes (first VIFE after VIF 0xFD), offset into 0x100.
pub const VIFE_FD_CODES: &[(u16, f64, &str, &str, &str)] = &[
    (0x108, 1.0, "", "ACCESS_NUMBER", "Access number (transmission count)"),
    (0x109, 1.0, "", "MEDIUM", "Medium (as in fixed header)"),
    (0x10A, 1.0, "", "MANUFACTURER", "Manufacturer (as in fixed header)"),
    (0x10B, 1.0, "", "PARAMETER_SET_ID", "Parameter set identification"),
    (0x10C, 1.0, "", "MODEL_VERSION", "Model / Version"),
    (0x10D, 1.0, "", "HARDWARE_VERSION", "Hardware version #"),
    (0x10E, 1.0, "", "FIRMWARE_VERSION", "Firmware version #"),
    (0x10F, 1.0, "", "SOFTWARE_VERSION", "Software version #"),
    (0x110, 1.0, "", "CUSTOMER_LOCATION", "Customer location"),
    (0x111, 1.0, "", "CUSTOMER", "Customer"),
    (0x112, 1.0, "", "ACCESS_CODE_USER", "Access code user"),
    (0x113, 1.0, "", "ACCESS_CODE_OPERATOR", "Access code operator"),
    (0x114, 1.0, "", "ACCESS_CODE_SYSTEM_OPERATOR", "Access code system operator"),
    (0x115, 1.0, "", "ACCESS_CODE_DEVELOPER", "Access code developer"),
    (0x116, 1.0, "", "PASSWORD", "Password"),
    (0x117, 1.0, "", "ERROR_FLAGS", "Error flags (binary)"),
    (0x118, 1.0, "", "ERROR_MASK", "Error mask"),
    (0x119, 1.0, "", "RESERVED", "Reserved"),
    (0x11A, 1.0, "", "DIGITAL_OUTPUT", "Digital output (binary)"),
    (0x11B, 1.0, "", "DIGITAL_INPUT", "Digital input (binary)"),
    (0x11C, 1.0, "Baud", "BAUDRATE", "Baudrate"),
    (0x11D, 1.0, "bittimes", "RESPONSE_DELAY", "Response delay time"),
    (0x11E, 1.0, "", "RETRY", "Retry"),
    (0x11F, 1.0, "", "RESERVED", "Reserved"),
    (0x120, 1.0, "", "FIRST_STORAGE_NO", "First storage # for cyclic storage"),
    (0x121, 1.0, "", "LAST_STORAGE_NO", "Last storage # for cyclic storage"),
    (0x122, 1.0, "", "STORAGE_BLOCK_SIZE", "Size of storage block"),
    (0x123, 1.0, "", "RESERVED", "Reserved"),
    (0x124, 1.0, "s", "STORAGE_INTERVAL", "Storage interval"),
    (0x125, 1.0, "min", "STORAGE_INTERVAL", "Storage interval"),
    (0x126, 1.0, "h", "STORAGE_INTERVAL", "Storage interval"),
    (0x127, 1.0, "days", "STORAGE_INTERVAL", "Storage interval"),
    (0x128, 1.0, "months", "STORAGE_INTERVAL", "Storage interval month(s)"),
    (0x129, 1.0, "years", "STORAGE_INTERVAL", "Storage interval year(s)"),
    (0x12A, 1.0, "", "RESERVED", "Reserved"),
    (0x12B, 1.0, "", "RESERVED", "Reserved"),
    (0x12C, 1.0, "s", "DURATION_SINCE_READOUT", "Duration since last readout"),
    (0x12D, 1.0, "min", "DURATION_SINCE_READOUT", "Duration since last readout"),
    (0x12E, 1.0, "h", "DURATION_SINCE_READOUT", "Duration since last readout"),
    (0x12F, 1.0, "days", "DURATION_SINCE_READOUT", "Duration since last readout"),
    (0x130, 1.0, "", "TARIFF_START", "Start (date/time) of tariff"),
    (0x131, 1.0, "min", "TARIFF_DURATION", "Duration of tariff"),
    (0x132, 1.0, "h", "TARIFF_DURATION", "Duration of tariff"),
    (0x133, 1.0, "days", "TARIFF_DURATION", "Duration of tariff"),
    (0x134, 1.0, "s", "TARIFF_PERIOD", "Period of tariff"),
    (0x135, 1.0, "min", "TARIFF_PERIOD", "Period of tariff"),
    (0x136, 1.0, "h", "TARIFF_PERIOD", "Period of tariff"),
    (0x137, 1.0, "days", "TARIFF_PERIOD", "Period of tariff"),
    (0x138, 1.0, "months", "TARIFF_PERIOD", "Period of tariff month(s)"),
    (0x139, 1.0, "years", "TARIFF_PERIOD", "Period of tariff year(s)"),
    (0x13A, 1.0, "", "DIMENSIONLESS", "Dimensionless / no VIF"),
    (0x13B, 1.0, "", "RESERVED", "Reserved"),
    (0x160, 1.0, "", "RESET_COUNTER", "Reset counter"),
    (0x161, 1.0, "", "CUMULATION_COUNTER", "Cumulation counter"),
    (0x162, 1.0, "", "CONTROL_SIGNAL", "Control signal"),
    (0x163, 1.0, "", "DAY_OF_WEEK", "Day of week"),
    (0x164, 1.0, "", "WEEK_NUMBER", "Week number"),
    (0x165, 1.0, "", "DAY_CHANGE_TIME", "Time point of day change"),
    (0x166, 1.0, "", "PARAMETER_ACTIVATION", "State of parameter activation"),
    (0x167, 1.0, "", "SUPPLIER_INFO", "Special supplier information"),
    (0x168, 1.0, "h", "DURATION_SINCE_CUMULATION", "Duration since last cumulation"),
    (0x169, 1.0, "days", "DURATION_SINCE_CUMULATION", "Duration since last cumulation"),
    (0x16A, 1.0, "months", "DURATION_SINCE_CUMULATION", "Duration since last cumulation"),
    (0x16B, 1.0, "years", "DURATION_SINCE_CUMULATION", "Duration since last cumulation"),
    (0x16C, 1.0, "h", "BATTERY_OPERATING_TIME", "Operating time battery"),
    (0x16D, 1.0, "days", "BATTERY_OPERATING_TIME", "Operating time battery"),
    (0x16E, 1.0, "months", "BATTERY_OPERATING_TIME", "Operating time battery"),
    (0x16F, 1.0, "years", "BATTERY_OPERATING_TIME", "Operating time battery"),
    (0x170, 1.0, "", "BATTERY_CHANGE_DATE", "Date and time of battery change"),
];

/// FB extension codes (first VIFE after VIF 0xFB), offset into 0x200.
pub const VIFE_FB_CODES: &[(u16, f64, &str, &str, &str)] = &[
    (0x200, 1e5, "Wh", "ENERGY_WH", "Energy (0.1 MWh)"),
    (0x201, 1e6, "Wh", "ENERGY_WH", "Energy (MWh)"),
    (0x208, 1e8, "J", "ENERGY_J", "Energy (0.1 GJ)"),
    (0x209, 1e9, "J", "ENERGY_J", "Energy (GJ)"),
    (0x210, 1e2, "m^3", "VOLUME", "Volume (100 m^3)"),
    (0x211, 1e3, "m^3", "VOLUME", "Volume (1000 m^3)"),
    (0x218, 1e5, "kg", "MASS", "Mass (100 t)"),
    (0x219, 1e6, "kg", "MASS", "Mass (1000 t)"),
    (0x21A, 1e-1, "%", "RELATIVE_HUMIDITY", "Relative humidity"),
    (0x221, 1e-1, "feet^3", "VOLUME", "Volume (0.1 feet^3)"),
    (0x222, 1e-1, "gal", "VOLUME", "Volume (0.1 american gallon)"),
    (0x223, 1e0, "gal", "VOLUME", "Volume (american gallon)"),
    (0x224, 1e-3, "gal/min", "VOLUME_FLOW", "Volume flow (0.001 american gallon/min)"),
    (0x225, 1e0, "gal/min", "VOLUME_FLOW", "Volume flow (american gallon/min)"),
    (0x226, 1e0, "gal/h", "VOLUME_FLOW", "Volume flow (american gallon/h)"),
    (0x228, 1e5, "W", "POWER_W", "Power (0.1 MW)"),
    (0x229, 1e6, "W", "POWER_W", "Power (MW)"),
    (0x230, 1e8, "J/h", "POWER_J_H", "Power (0.1 GJ/h)"),
    (0x231, 1e9, "J/h", "POWER_J_H", "Power (GJ/h)"),
    (0x258, 1e-3, "°F", "FLOW_TEMPERATURE", "Flow temperature"),
    (0x259, 1e-2, "°F", "FLOW_TEMPERATURE", "Flow temperature"),
    (0x25A, 1e-1, "°F", "FLOW_TEMPERATURE", "Flow temperature"),
    (0x25B, 1e0, "°F", "FLOW_TEMPERATURE", "Flow temperature"),
    (0x25C, 1e-3, "°F", "RETURN_TEMPERATURE", "Return temperature"),
    (0x25D, 1e-2, "°F", "RETURN_TEMPERATURE", "Return temperature"),
    (0x25E, 1e-1, "°F", "RETURN_TEMPERATURE", "Return temperature"),
    (0x25F, 1e0, "°F", "RETURN_TEMPERATURE", "Return temperature"),
    (0x260, 1e-3, "°F", "TEMPERATURE_DIFFERENCE", "Temperature difference"),
    (0x261, 1e-2, "°F", "TEMPERATURE_DIFFERENCE", "Temperature difference"),
    (0x262, 1e-1, "°F", "TEMPERATURE_DIFFERENCE", "Temperature difference"),
    (0x263, 1e0, "°F", "TEMPERATURE_DIFFERENCE", "Temperature difference"),
    (0x264, 1e-3, "°F", "EXTERNAL_TEMPERATURE", "External temperature"),
    (0x265, 1e-2, "°F", "EXTERNAL_TEMPERATURE", "External temperature"),
    (0x266, 1e-1, "°F", "EXTERNAL_TEMPERATURE", "External temperature"),
    (0x267, 1e0, "°F", "EXTERNAL_TEMPERATURE", "External temperature"),
    (0x270, 1e-3, "°F", "TEMPERATURE_LIMIT", "Cold / warm temperature limit"),
    (0x271, 1e-2, "°F", "TEMPERATURE_LIMIT", "Cold / warm temperature limit"),
    (0x272, 1e-1, "°F", "TEMPERATURE_LIMIT", "Cold / warm temperature limit"),
    (0x273, 1e0, "°F", "TEMPERATURE_LIMIT", "Cold / warm temperature limit"),
    (0x274, 1e-3, "°C", "TEMPERATURE_LIMIT", "Cold / warm temperature limit"),
    (0x275, 1e-2, "°C", "TEMPERATURE_LIMIT", "Cold / warm temperature limit"),
    (0x276, 1e-1, "°C", "TEMPERATURE_LIMIT", "Cold / warm temperature limit"),
    (0x277, 1e0, "°C", "TEMPERATURE_LIMIT", "Cold / warm temperature limit"),
    (0x278, 1e-3, "W", "MAX_POWER", "Cumulative count max power"),
    (0x279, 1e-2, "W", "MAX_POWER", "Cumulative count max power"),
    (0x27A, 1e-1, "W", "MAX_POWER", "Cumulative count max power"),
    (0x27B, 1e0, "W", "MAX_POWER", "Cumulative count max power"),
    (0x27C, 1e1, "W", "MAX_POWER", "Cumulative count max power"),
    (0x27D, 1e2, "W", "MAX_POWER", "Cumulative count max power"),
    (0x27E, 1e3, "W", "MAX_POWER", "Cumulative count max power"),
    (0x27F, 1e4, "W", "MAX_POWER", "Cumulative count max power"),
];

fn find(
    table: &'static [(u16, f64, &'static str, &'static str, &'static str)],
    code: u16,
) -> Option<VifInfo> {
    table
        .iter()
        .find(|entry| entry.0 == code)
        .map(|&(vif, exponent, unit, vif_type, description)| VifInfo {
            vif,
            exponent,
            unit,
            vif_type,
            description,
        })
}

/// Looks up a primary VIF code (already masked with 0x7F).
pub fn lookup_primary_vif(code: u8) -> Option<VifInfo> {
    find(VIF_CODES, u16::from(code))
}

/// Looks up an FD extension code; the computed voltage/current ranges are
/// resolved here rather than stored row by row.
pub fn lookup_vife_fd(code: u8) -> Option<VifInfo> {
    match code {
        // E000 00nn / E000 01nn: credit / debit of 10^(nn-3) currency units
        0x00..=0x03 => Some(VifInfo {
            vif: 0x100 + u16::from(code),
            exponent: 10f64.powi(i32::from(code & 0x03) - 3),
            unit: "currency units",
            vif_type: "CREDIT",
            description: "Credit",
        }),
        0x04..=0x07 => Some(VifInfo {
            vif: 0x100 + u16::from(code),
            exponent: 10f64.powi(i32::from(code & 0x03) - 3),
            unit: "currency units",
            vif_type: "DEBIT",
            description: "Debit",
        }),
        // E100 nnnn: 10^(nnnn-9) V
        0x40..=0x4F => Some(VifInfo {
            vif: 0x100 + u16::from(code),
            exponent: 10f64.powi(i32::from(code & 0x0F) - 9),
            unit: "V",
            vif_type: "VOLTAGE",
            description: "Voltage",
        }),
        // E101 nnnn: 10^(nnnn-12) A
        0x50..=0x5F => Some(VifInfo {
            vif: 0x100 + u16::from(code),
            exponent: 10f64.powi(i32::from(code & 0x0F) - 12),
            unit: "A",
            vif_type: "CURRENT",
            description: "Current",
        }),
        _ => find(VIFE_FD_CODES, 0x100 + u16::from(code)),
    }
}

/// Looks up an FB extension code.
pub fn lookup_vife_fb(code: u8) -> Option<VifInfo> {
    find(VIFE_FB_CODES, 0x200 + u16::from(code))
}
