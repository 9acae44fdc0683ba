//! Reading facade: open a WAV file and expose its GUANO metadata.

use crate::error::Result;
use crate::metadata::GuanoMetadata;
use crate::riff::{RiffContainer, GUANO_CHUNK_ID};
use log::info;
use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;

/// A parsed WAV file with its metadata chunk decoded.
///
/// Construction parses the whole container up front; a malformed container
/// or metadata chunk fails construction with a typed error rather than
/// yielding an empty-but-usable reader. A file without a `guan` chunk is
/// fine, though: its metadata store is simply empty.
#[derive(Debug)]
pub struct GuanoReader {
    container: RiffContainer,
    metadata: GuanoMetadata,
}

impl GuanoReader {
    /// Read and parse a WAV file from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let reader = Self::from_bytes(&bytes)?;
        info!(
            "read {}: {} chunks, {} metadata fields",
            path.display(),
            reader.container.chunks().len(),
            reader.metadata.len()
        );
        Ok(reader)
    }

    /// Read and parse a WAV stream.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes(&bytes)
    }

    /// Parse an in-memory WAV byte stream.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let container = RiffContainer::parse(bytes)?;
        let metadata = match container.chunk(GUANO_CHUNK_ID) {
            Some(chunk) => GuanoMetadata::parse(chunk)?,
            None => GuanoMetadata::new(),
        };
        Ok(Self {
            container,
            metadata,
        })
    }

    /// The underlying chunk container.
    pub fn container(&self) -> &RiffContainer {
        &self.container
    }

    /// The decoded metadata store.
    pub fn metadata(&self) -> &GuanoMetadata {
        &self.metadata
    }

    /// Known namespace names; `""` is the top level.
    pub fn namespaces(&self) -> Vec<&str> {
        self.metadata.namespaces()
    }

    /// Field names within one namespace.
    pub fn fieldnames(&self, namespace: &str) -> Vec<&str> {
        self.metadata.fieldnames(namespace)
    }

    /// Read-only view of one namespace's field/value map.
    pub fn fields(&self, namespace: &str) -> Option<&BTreeMap<String, String>> {
        self.metadata.fields(namespace)
    }

    /// Fetch a field's text; the key may carry a `namespace|` prefix.
    pub fn get_str(&self, key: impl AsRef<str>) -> Result<&str> {
        self.metadata.get_str(key)
    }

    /// Fetch a field's text from an explicit namespace.
    pub fn get_str_ns(&self, namespace: &str, field: &str) -> Result<&str> {
        self.metadata.get_str_ns(namespace, field)
    }

    /// Fetch a field parsed as a signed integer.
    pub fn get_int(&self, key: impl AsRef<str>) -> Result<i64> {
        self.metadata.get_int(key)
    }

    /// Fetch a field from an explicit namespace, parsed as a signed integer.
    pub fn get_int_ns(&self, namespace: &str, field: &str) -> Result<i64> {
        self.metadata.get_int_ns(namespace, field)
    }

    /// Fetch a field parsed as a float.
    pub fn get_float(&self, key: impl AsRef<str>) -> Result<f64> {
        self.metadata.get_float(key)
    }

    /// Fetch a field from an explicit namespace, parsed as a float.
    pub fn get_float_ns(&self, namespace: &str, field: &str) -> Result<f64> {
        self.metadata.get_float_ns(namespace, field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GuanoError;
    use crate::fields::GuanoField;
    use crate::riff::write_wav;
    use std::io::Cursor;

    fn sample_wav(metadata: &str) -> Vec<u8> {
        let mut bytes = Vec::new();
        write_wav(&mut bytes, &[0i16; 4], 44_100, metadata.as_bytes()).unwrap();
        bytes
    }

    #[test]
    fn test_reads_metadata_fields() {
        let bytes = sample_wav(
            "GUANO|Version: 1.0\nTimestamp: 2020-01-01T00:00:00Z\nMSFT|Fnord: 42\n",
        );
        let reader = GuanoReader::from_bytes(&bytes).unwrap();

        assert_eq!(
            reader.get_str(GuanoField::Timestamp).unwrap(),
            "2020-01-01T00:00:00Z"
        );
        assert_eq!(reader.get_int_ns("MSFT", "Fnord").unwrap(), 42);
        assert_eq!(reader.namespaces(), vec!["", "MSFT"]);
        assert_eq!(reader.fieldnames(""), vec!["Timestamp"]);
    }

    #[test]
    fn test_missing_metadata_chunk_yields_empty_store() {
        // Hand-rolled WAV with no guan chunk at all.
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"RIFF");
        bytes.extend_from_slice(&(4u32 + 8 + 4).to_le_bytes());
        bytes.extend_from_slice(b"WAVE");
        bytes.extend_from_slice(b"data");
        bytes.extend_from_slice(&4u32.to_le_bytes());
        bytes.extend_from_slice(&[0, 0, 0, 0]);

        let reader = GuanoReader::from_bytes(&bytes).unwrap();
        assert!(reader.metadata().is_empty());
        assert!(reader.namespaces().is_empty());
        assert!(matches!(
            reader.get_str(GuanoField::Make),
            Err(GuanoError::MissingField { .. })
        ));
    }

    #[test]
    fn test_bad_container_fails_construction() {
        let err = GuanoReader::from_bytes(b"RIFXxxxxWAVE").unwrap_err();
        assert!(matches!(err, GuanoError::Format(_)), "got {err:?}");
    }

    #[test]
    fn test_malformed_metadata_fails_construction() {
        // A bad line must surface as an error, not an empty reader.
        let bytes = sample_wav("GUANO|Version: 1.0\nbroken line\n");
        let err = GuanoReader::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, GuanoError::MalformedLine(_)), "got {err:?}");
    }

    #[test]
    fn test_from_reader() {
        let bytes = sample_wav("GUANO|Version: 1.0\nMake: Pettersson\n");
        let reader = GuanoReader::from_reader(Cursor::new(bytes)).unwrap();
        assert_eq!(reader.get_str(GuanoField::Make).unwrap(), "Pettersson");
    }

    #[test]
    fn test_reader_debug_format() {
        let bytes = sample_wav("GUANO|Version: 1.0\nMake: Pettersson\n");
        let reader = GuanoReader::from_bytes(&bytes).unwrap();
        let rendered = format!("{reader:?}");
        assert!(rendered.contains("GuanoReader"), "got {rendered}");
        assert!(rendered.contains("Pettersson"), "got {rendered}");
    }
}
