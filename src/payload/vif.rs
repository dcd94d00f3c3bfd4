//! Value Information Block interpretation.
//!
//! Resolves a parsed VIB (VIF + VIFE chain, possibly a plain-text label)
//! into unit, exponent, and semantic type. Escape codes 0xFB and 0xFD select
//! the extension tables keyed by the first VIFE; 0x7C carries its unit as a
//! reversed ASCII label; 0xFC combines the label with a decimal factor VIFE.

use crate::constants::WMBUS_WITHOUT_EXTENSION;
use crate::error::WMBusError;
use crate::payload::record::ValueInformationBlock;
use crate::payload::vif_maps::{lookup_primary_vif, lookup_vife_fb, lookup_vife_fd};

/// A static VIF table entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VifInfo {
    /// Table key: primary code, or extension code offset into 0x100/0x200.
    pub vif: u16,
    pub exponent: f64,
    pub unit: &'static str,
    pub vif_type: &'static str,
    pub description: &'static str,
}

/// A resolved unit for one record, owned so plain-text labels fit.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitInfo {
    pub exponent: f64,
    pub unit: String,
    pub vif_type: &'static str,
    pub description: &'static str,
}

impl From<VifInfo> for UnitInfo {
    fn from(info: VifInfo) -> Self {
        UnitInfo {
            exponent: info.exponent,
            unit: info.unit.to_string(),
            vif_type: info.vif_type,
            description: info.description,
        }
    }
}

/// Resolves the unit, exponent, and type for a Value Information Block.
pub fn unit_lookup(vib: &ValueInformationBlock) -> Result<UnitInfo, WMBusError> {
    match vib.vif {
        0xFB => {
            let code = vib.vifes.first().ok_or(WMBusError::UnknownVif(0xFB))?
                & WMBUS_WITHOUT_EXTENSION;
            lookup_vife_fb(code)
                .map(UnitInfo::from)
                .ok_or(WMBusError::UnknownVif(code))
        }
        0xFD => {
            let code = vib.vifes.first().ok_or(WMBusError::UnknownVif(0xFD))?
                & WMBUS_WITHOUT_EXTENSION;
            lookup_vife_fd(code)
                .map(UnitInfo::from)
                .ok_or(WMBusError::UnknownVif(code))
        }
        0xFC => {
            let code = vib.vifes.first().ok_or(WMBusError::UnknownVif(0xFC))?
                & WMBUS_WITHOUT_EXTENSION;
            let factor = match code {
                0x70..=0x77 => 10f64.powi(i32::from(code & 0x07) - 6),
                0x78..=0x7B => 10f64.powi(i32::from(code & 0x03) - 3),
                0x7D => 1.0,
                _ => return Err(WMBusError::UnknownVif(code)),
            };
            Ok(UnitInfo {
                exponent: factor,
                unit: vib.custom_vif.clone().unwrap_or_default(),
                vif_type: "VARIABLE_VIF",
                description: "",
            })
        }
        vif if vif & WMBUS_WITHOUT_EXTENSION == 0x7C => Ok(UnitInfo {
            exponent: 1.0,
            unit: vib.custom_vif.clone().unwrap_or_default(),
            vif_type: "VARIABLE_VIF",
            description: "",
        }),
        vif => {
            let code = vif & WMBUS_WITHOUT_EXTENSION;
            lookup_primary_vif(code)
                .map(UnitInfo::from)
                .ok_or(WMBusError::UnknownVif(code))
        }
    }
}
