//! Gzip compression wrapper for serializers.

use std::io::{Read, Write};

use super::{RuleSetSerializer, SerializationError};
use crate::rules::RuleSetData;

/// Gzip-compressed serializer wrapper.
///
/// Applies gzip compression to any underlying serializer. Rule data is
/// highly repetitive and compresses well.
///
/// # Example
///
/// ```rust,ignore
/// use libbmpm::rules::RuleSet;
/// use libbmpm::serialization::{GzipSerializer, JsonSerializer, RuleSetSerializer};
///
/// let rules = RuleSet::bundled();
/// GzipSerializer::<JsonSerializer>::save(&rules, "rules.json.gz")?;
/// let loaded = GzipSerializer::<JsonSerializer>::load("rules.json.gz")?;
/// ```
pub struct GzipSerializer<S> {
    _inner: std::marker::PhantomData<S>,
}

impl<S: RuleSetSerializer> RuleSetSerializer for GzipSerializer<S> {
    fn serialize_data<W: Write>(data: &RuleSetData, writer: W) -> Result<(), SerializationError> {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let mut encoder = GzEncoder::new(writer, Compression::default());
        S::serialize_data(data, &mut encoder)?;
        encoder.finish().map_err(SerializationError::Io)?;
        Ok(())
    }

    fn deserialize_data<R: Read>(reader: R) -> Result<RuleSetData, SerializationError> {
        use flate2::read::GzDecoder;

        let decoder = GzDecoder::new(reader);
        S::deserialize_data(decoder)
    }
}
