//! Rule-set serialization support.
//!
//! This module persists and restores whole rule sets in JSON or bincode,
//! optionally gzip-compressed. Serializers write the *source* rule data
//! ([`RuleSetData`]); loading always recompiles and revalidates it, so a
//! corrupted or hand-edited file is rejected with the same errors as any
//! other rule data.
//!
//! # Example
//!
//! ```rust,ignore
//! use libbmpm::rules::RuleSet;
//! use libbmpm::serialization::{BincodeSerializer, RuleSetSerializer};
//! use std::fs::File;
//!
//! let rules = RuleSet::bundled();
//!
//! // Serialize to file
//! let file = File::create("rules.bin")?;
//! BincodeSerializer::serialize(&rules, file)?;
//!
//! // Deserialize from file
//! let file = File::open("rules.bin")?;
//! let loaded = BincodeSerializer::deserialize(file)?;
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use tracing::debug;

use crate::rules::{RuleError, RuleSet, RuleSetData};

// Serializer implementations
mod bincode_impl;
mod json;

#[cfg(feature = "compression")]
mod compression_impl;

// Re-exports
pub use self::bincode_impl::BincodeSerializer;
pub use self::json::JsonSerializer;

#[cfg(feature = "compression")]
pub use self::compression_impl::GzipSerializer;

/// Trait for serializing and deserializing rule sets.
pub trait RuleSetSerializer {
    /// Write rule data.
    ///
    /// # Arguments
    ///
    /// * `data` - The rule data to serialize
    /// * `writer` - Where to write the serialized data
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    fn serialize_data<W: Write>(data: &RuleSetData, writer: W) -> Result<(), SerializationError>;

    /// Read rule data without compiling it.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or decoding fails.
    fn deserialize_data<R: Read>(reader: R) -> Result<RuleSetData, SerializationError>;

    /// Serialize a rule set to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    fn serialize<W: Write>(rules: &RuleSet, writer: W) -> Result<(), SerializationError> {
        Self::serialize_data(&rules.to_data(), writer)
    }

    /// Deserialize and validate a rule set from a reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or decoding fails, or
    /// [`SerializationError::Rules`] if the data does not validate.
    fn deserialize<R: Read>(reader: R) -> Result<RuleSet, SerializationError> {
        let data = Self::deserialize_data(reader)?;
        Ok(RuleSet::from_data(data)?)
    }

    /// Serialize a rule set to the file at `path`.
    fn save(rules: &RuleSet, path: impl AsRef<Path>) -> Result<(), SerializationError> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        Self::serialize(rules, &mut writer)?;
        writer.flush()?;
        debug!(path = %path.display(), "saved rule set");
        Ok(())
    }

    /// Deserialize a rule set from the file at `path`.
    fn load(path: impl AsRef<Path>) -> Result<RuleSet, SerializationError> {
        let path = path.as_ref();
        let rules = Self::deserialize(BufReader::new(File::open(path)?))?;
        debug!(path = %path.display(), "loaded rule set");
        Ok(rules)
    }
}

/// Errors that can occur during serialization/deserialization.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// Error during bincode serialization
    #[error("Bincode error: {0}")]
    Bincode(#[from] bincode::Error),
    /// Error during JSON serialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The decoded data is not a valid rule set
    #[error("Invalid rule data: {0}")]
    Rules(#[from] RuleError),
}
