//! Product-name database keyed by (manufacturer code, version byte).
//!
//! Populated per vendor as devices are encountered in the field.

use crate::error::WMBusError;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Known products by (manufacturer, version).
pub static PRODUCTS: Lazy<HashMap<(&'static str, u8), &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();

    // Elvaco LAN-WMBUS sensor family
    map.insert(("LAS", 0x01), "LAN-WMBUS-E-VOC");
    map.insert(("LAS", 0x03), "LAN-WMBUS-E-CO2");
    map.insert(("LAS", 0x07), "LAN-WMBUS-C-TH / LAN-WMBUS-G2-TH");
    map.insert(("LAS", 0x0B), "LAN-WMBUS-G2-LDS");
    map.insert(("LAS", 0x14), "LAN-WMBUS-G2-DC / LAN-WMBUS-G2-P");
    map.insert(("LAS", 0x1E), "LAN-WMBUS-G2-EXT / LAN-WMBUS-G2-OOP");

    map
});

/// Looks up the product name for a manufacturer code and version byte.
pub fn product_lookup(manufacturer: &str, version: u8) -> Result<&'static str, WMBusError> {
    PRODUCTS
        .get(&(manufacturer, version))
        .copied()
        .ok_or_else(|| WMBusError::UnknownProduct {
            manufacturer: manufacturer.to_string(),
            version,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_product() {
        assert_eq!(product_lookup("LAS", 0x0B).unwrap(), "LAN-WMBUS-G2-LDS");
    }

    #[test]
    fn test_unknown_version() {
        assert!(matches!(
            product_lookup("LAS", 0x99),
            Err(WMBusError::UnknownProduct { .. })
        ));
    }

    #[test]
    fn test_unknown_manufacturer() {
        assert!(matches!(
            product_lookup("XYZ", 0x01),
            Err(WMBusError::UnknownProduct { .. })
        ));
    }
}
