//! Writing facade: build a metadata-tagged mono WAV file.

use crate::error::{GuanoError, Result};
use crate::fields::GuanoField;
use crate::metadata::GuanoMetadata;
use crate::riff::write_wav;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug)]
struct AudioData {
    sample_rate: u32,
    samples: Vec<i16>,
}

/// Accumulates metadata fields and 16-bit mono samples, then serializes
/// them as one WAV stream.
///
/// [`GuanoWaveWriter::write_to`] refuses to run without audio data; the
/// stricter [`GuanoWaveWriter::validate`] additionally requires a top-level
/// `Timestamp` field and is meant as an opt-in pre-flight check. On a
/// failed write a partially written file may remain on disk.
#[derive(Debug, Default)]
pub struct GuanoWaveWriter {
    metadata: GuanoMetadata,
    audio: Option<AudioData>,
}

impl GuanoWaveWriter {
    /// A writer with no fields and no audio.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the accumulated metadata.
    pub fn metadata(&self) -> &GuanoMetadata {
        &self.metadata
    }

    /// Supply the samples and their rate; replaces any previous audio.
    pub fn set_audio_data(&mut self, sample_rate: u32, samples: Vec<i16>) {
        self.audio = Some(AudioData {
            sample_rate,
            samples,
        });
    }

    /// Store a text field; the key may carry a `namespace|` prefix.
    pub fn set_str(&mut self, key: impl AsRef<str>, value: impl Into<String>) {
        self.metadata.set_str(key, value);
    }

    /// Store a text field under an explicit namespace.
    pub fn set_str_ns(&mut self, namespace: &str, field: &str, value: impl Into<String>) {
        self.metadata.set_str_ns(namespace, field, value);
    }

    /// Store an integer field.
    pub fn set_int(&mut self, key: impl AsRef<str>, value: i64) {
        self.metadata.set_int(key, value);
    }

    /// Store an integer field under an explicit namespace.
    pub fn set_int_ns(&mut self, namespace: &str, field: &str, value: i64) {
        self.metadata.set_int_ns(namespace, field, value);
    }

    /// Store a float field.
    pub fn set_float(&mut self, key: impl AsRef<str>, value: f64) {
        self.metadata.set_float(key, value);
    }

    /// Store a float field under an explicit namespace.
    pub fn set_float_ns(&mut self, namespace: &str, field: &str, value: f64) {
        self.metadata.set_float_ns(namespace, field, value);
    }

    /// Pre-flight check: audio data present and a top-level `Timestamp` set.
    pub fn validate(&self) -> Result<()> {
        if self.audio.is_none() {
            return Err(GuanoError::Validation("no audio data set".into()));
        }
        if self.metadata.get_str(GuanoField::Timestamp).is_err() {
            return Err(GuanoError::Validation(
                "required top-level Timestamp field missing".into(),
            ));
        }
        Ok(())
    }

    /// Boolean form of [`GuanoWaveWriter::validate`].
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Serialize to a stream and flush it. Fails if no audio data is set.
    pub fn write_to<W: Write>(&self, mut out: W) -> Result<()> {
        let audio = self
            .audio
            .as_ref()
            .ok_or_else(|| GuanoError::Validation("no audio data set".into()))?;
        let metadata = self.metadata.render();
        write_wav(&mut out, &audio.samples, audio.sample_rate, metadata.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Serialize to a file on disk.
    pub fn write_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))?;
        info!(
            "wrote {}: {} samples, {} metadata fields",
            path.display(),
            self.audio.as_ref().map_or(0, |a| a.samples.len()),
            self.metadata.len()
        );
        Ok(())
    }

    /// Serialize to an in-memory byte vector.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.write_to(&mut bytes)?;
        Ok(bytes)
    }
}
