//! RIFF/WAVE chunk container codec.
//!
//! GUANO metadata lives in a reserved `guan` subchunk of an otherwise
//! ordinary WAV file. This module parses a byte stream into its chunks and
//! assembles the fixed `fmt `/`data`/`guan` sequence back into one.

use crate::error::{GuanoError, Result};
use log::debug;
use std::fmt;
use std::io::Write;

/// The FourCC identifier of the RIFF magic.
pub const RIFF_TAG: [u8; 4] = *b"RIFF";

/// The FourCC identifier of the WAVE form type.
pub const WAVE_TAG: [u8; 4] = *b"WAVE";

/// The FourCC identifier of the PCM format chunk.
pub const FMT_CHUNK_ID: [u8; 4] = *b"fmt ";

/// The FourCC identifier of the sample data chunk.
pub const DATA_CHUNK_ID: [u8; 4] = *b"data";

/// The FourCC identifier of the GUANO metadata chunk.
pub const GUANO_CHUNK_ID: [u8; 4] = *b"guan";

const FMT_BODY_SIZE: u32 = 16;

/// One tagged, length-prefixed block from a RIFF container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chunk {
    /// Four ASCII bytes; short tags are space-padded (`fmt `).
    pub id: [u8; 4],
    /// Exactly the declared number of payload bytes.
    pub data: Vec<u8>,
}

impl Chunk {
    /// The chunk id as printable text (lossy for non-ASCII tags).
    pub fn id_str(&self) -> String {
        String::from_utf8_lossy(&self.id).into_owned()
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.id_str(), self.data.len())
    }
}

/// A parsed RIFF/WAVE container: the chunk sequence in wire order, plus an
/// id-keyed lookup.
///
/// When the same id occurs more than once, [`RiffContainer::chunk`] returns
/// the last occurrence while [`RiffContainer::chunk_ids`] lists ids in
/// first-seen order. That split is inherited from the convention this codec
/// implements; don't rely on either beyond what the tests pin down.
#[derive(Clone, Debug)]
pub struct RiffContainer {
    riff_size: u32,
    chunks: Vec<Chunk>,
}

impl RiffContainer {
    /// Parse a complete RIFF/WAVE byte stream into its chunks.
    ///
    /// Strict on structure: a missing `RIFF` or `WAVE` tag, a truncated
    /// chunk header, or a payload shorter than its declared size all fail
    /// with [`GuanoError::Format`] and no partial result. Running out of
    /// input exactly at a chunk boundary is the normal end of parsing.
    ///
    /// No alignment padding is skipped between chunks: writers of this
    /// convention declare padded sizes for the chunk they pad.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < 12 {
            return Err(GuanoError::Format(format!(
                "header too short for RIFF/WAVE ({} bytes)",
                bytes.len()
            )));
        }
        if bytes[0..4] != RIFF_TAG {
            return Err(GuanoError::Format("missing RIFF magic".into()));
        }
        // Declared total size; recorded but not checked against the stream.
        let riff_size = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        if bytes[8..12] != WAVE_TAG {
            return Err(GuanoError::Format("missing WAVE form type".into()));
        }

        let mut chunks = Vec::new();
        let mut pos = 12;
        while pos < bytes.len() {
            if bytes.len() - pos < 8 {
                return Err(GuanoError::Format(format!(
                    "truncated chunk header at offset {pos} ({} bytes left)",
                    bytes.len() - pos
                )));
            }
            let id = [bytes[pos], bytes[pos + 1], bytes[pos + 2], bytes[pos + 3]];
            let size = u32::from_le_bytes([
                bytes[pos + 4],
                bytes[pos + 5],
                bytes[pos + 6],
                bytes[pos + 7],
            ]) as usize;
            let data_start = pos + 8;
            if size > bytes.len() - data_start {
                return Err(GuanoError::Format(format!(
                    "truncated {:?} chunk at offset {pos}: declared {size} bytes, {} available",
                    String::from_utf8_lossy(&id),
                    bytes.len() - data_start
                )));
            }
            chunks.push(Chunk {
                id,
                data: bytes[data_start..data_start + size].to_vec(),
            });
            pos = data_start + size;
        }

        debug!("parsed {} chunks, declared RIFF size {riff_size}", chunks.len());
        Ok(Self { riff_size, chunks })
    }

    /// The declared total size from the RIFF header (stream length minus 8
    /// for well-formed files; not enforced).
    pub fn riff_size(&self) -> u32 {
        self.riff_size
    }

    /// All chunks in wire order, duplicates included.
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Chunk ids in first-seen order, without duplicates.
    pub fn chunk_ids(&self) -> Vec<[u8; 4]> {
        let mut ids: Vec<[u8; 4]> = Vec::new();
        for chunk in &self.chunks {
            if !ids.contains(&chunk.id) {
                ids.push(chunk.id);
            }
        }
        ids
    }

    /// Whether a chunk with the given id is present.
    pub fn has_chunk(&self, id: [u8; 4]) -> bool {
        self.chunks.iter().any(|c| c.id == id)
    }

    /// Payload of the chunk with the given id; the last occurrence wins.
    pub fn chunk(&self, id: [u8; 4]) -> Option<&[u8]> {
        self.chunks
            .iter()
            .rev()
            .find(|c| c.id == id)
            .map(|c| c.data.as_slice())
    }
}

/// Assemble a complete 16-bit mono WAV stream with a trailing `guan` chunk.
///
/// Chunk order is fixed: `fmt `, `data`, `guan`. The metadata payload is
/// right-padded with one `\n` byte when its length is odd so the chunk
/// occupies an even number of bytes, and the declared chunk size is the
/// padded length.
pub fn write_wav<W: Write>(
    out: &mut W,
    samples: &[i16],
    sample_rate: u32,
    metadata: &[u8],
) -> Result<()> {
    const CHANNELS: u32 = 1;
    const SAMPLE_WIDTH: u32 = 2; // bytes

    let data_size = samples.len() as u32 * SAMPLE_WIDTH;
    let padded_meta_size = metadata.len() as u32 + metadata.len() as u32 % 2;
    let riff_size = 4 + (8 + FMT_BODY_SIZE) + (8 + data_size) + (8 + padded_meta_size);

    out.write_all(&RIFF_TAG)?;
    out.write_all(&riff_size.to_le_bytes())?;
    out.write_all(&WAVE_TAG)?;

    // fmt : 16-byte PCM format body
    out.write_all(&FMT_CHUNK_ID)?;
    out.write_all(&FMT_BODY_SIZE.to_le_bytes())?;
    out.write_all(&1u16.to_le_bytes())?; // format tag: PCM
    out.write_all(&(CHANNELS as u16).to_le_bytes())?;
    out.write_all(&sample_rate.to_le_bytes())?;
    out.write_all(&(sample_rate * CHANNELS * SAMPLE_WIDTH).to_le_bytes())?; // byte rate
    out.write_all(&((CHANNELS * SAMPLE_WIDTH) as u16).to_le_bytes())?; // block align
    out.write_all(&((SAMPLE_WIDTH * 8) as u16).to_le_bytes())?; // bits per sample

    // data: raw little-endian samples
    out.write_all(&DATA_CHUNK_ID)?;
    out.write_all(&data_size.to_le_bytes())?;
    for &sample in samples {
        out.write_all(&sample.to_le_bytes())?;
    }

    // guan: metadata, even-padded
    out.write_all(&GUANO_CHUNK_ID)?;
    out.write_all(&padded_meta_size.to_le_bytes())?;
    out.write_all(metadata)?;
    if metadata.len() % 2 == 1 {
        out.write_all(b"\n")?;
    }
    Ok(())
}
