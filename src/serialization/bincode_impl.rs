//! Bincode serializer for compact binary format.

use std::io::{Read, Write};

use super::{RuleSetSerializer, SerializationError};
use crate::rules::RuleSetData;

/// Bincode serializer for compact binary format.
///
/// Smaller and faster to load than JSON; suited to shipping a prepared
/// rule set alongside an application.
pub struct BincodeSerializer;

impl RuleSetSerializer for BincodeSerializer {
    fn serialize_data<W: Write>(data: &RuleSetData, mut writer: W) -> Result<(), SerializationError> {
        bincode::serialize_into(&mut writer, data)?;
        Ok(())
    }

    fn deserialize_data<R: Read>(mut reader: R) -> Result<RuleSetData, SerializationError> {
        Ok(bincode::deserialize_from(&mut reader)?)
    }
}
