//! Read and write GUANO metadata embedded in WAV files.
//!
//! GUANO (the Grand Unified Acoustic Notation Ontology,
//! <https://github.com/riggsd/guano-spec>) is the metadata convention used
//! by bat detectors and other acoustic monitoring gear: human-readable
//! `field: value` lines, optionally namespaced with a `|` prefix, carried
//! in a reserved `guan` chunk of an ordinary RIFF/WAVE file.
//!
//! [`GuanoReader`] parses a WAV file and exposes its metadata;
//! [`GuanoWaveWriter`] builds a 16-bit mono WAV with a metadata chunk. The
//! lower layers are public too: [`riff`] for the chunk container codec and
//! [`metadata`] for the text codec and store.
//!
//! ```no_run
//! use guano_wav::{GuanoField, GuanoReader};
//!
//! fn main() -> guano_wav::Result<()> {
//!     let reader = GuanoReader::open("recording.wav")?;
//!     println!("recorded {}", reader.get_str(GuanoField::Timestamp)?);
//!     for namespace in reader.namespaces() {
//!         println!("{namespace:?}: {} fields", reader.fieldnames(namespace).len());
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod fields;
pub mod metadata;
pub mod reader;
pub mod riff;
pub mod writer;

pub use error::{GuanoError, Result};
pub use fields::GuanoField;
pub use metadata::{GuanoMetadata, GUANO_VERSION};
pub use reader::GuanoReader;
pub use riff::{Chunk, RiffContainer};
pub use writer::GuanoWaveWriter;
