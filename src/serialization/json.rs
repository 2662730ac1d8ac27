//! JSON serializer for human-readable rule data.

use std::io::{Read, Write};

use super::{RuleSetSerializer, SerializationError};
use crate::rules::RuleSetData;

/// JSON serializer for human-readable format.
///
/// Writes a single `{"modes": [...]}` document, the same shape
/// [`RuleSet::from_json_str`](crate::rules::RuleSet::from_json_str) reads.
/// Useful for inspecting or hand-editing rule data.
pub struct JsonSerializer;

impl RuleSetSerializer for JsonSerializer {
    fn serialize_data<W: Write>(data: &RuleSetData, writer: W) -> Result<(), SerializationError> {
        serde_json::to_writer_pretty(writer, data)?;
        Ok(())
    }

    fn deserialize_data<R: Read>(reader: R) -> Result<RuleSetData, SerializationError> {
        Ok(serde_json::from_reader(reader)?)
    }
}
