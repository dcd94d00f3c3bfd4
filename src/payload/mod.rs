//! The payload module contains the components responsible for decoding and
//! processing the application payload of a wM-Bus telegram.

pub mod data_encoding;
pub mod decode;
pub mod reader;
pub mod record;
pub mod vif;
pub mod vif_maps;

pub use decode::{decode_record, DecodedRecord, FunctionField, RecordValue};
pub use record::{
    parse_records, DataInformationBlock, DataRecord, ValueInformationBlock, VariableDataBlock,
};
pub use vif::{unit_lookup, UnitInfo, VifInfo};
