//! End-to-end file round-trips, cross-checked against an independent WAV
//! implementation (hound).

use guano_wav::riff::{DATA_CHUNK_ID, GUANO_CHUNK_ID};
use guano_wav::{GuanoField, GuanoReader, GuanoWaveWriter};
use std::fs;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("guano-wav-{}-{name}", std::process::id()))
}

fn demo_writer(samples: Vec<i16>) -> GuanoWaveWriter {
    let mut writer = GuanoWaveWriter::new();
    writer.set_str(GuanoField::Timestamp, "2020-01-01T00:00:00Z");
    writer.set_str(GuanoField::Make, "Pettersson");
    writer.set_float(GuanoField::Length, 0.001);
    writer.set_str_ns("MSFT", "Fnord", "42");
    writer.set_audio_data(44_100, samples);
    writer
}

#[test]
fn file_round_trip_preserves_fields() {
    let path = temp_path("roundtrip.wav");
    let writer = demo_writer(vec![0, 1000, -1000, 0]);
    writer.validate().unwrap();
    writer.write_to_path(&path).unwrap();

    let reader = GuanoReader::open(&path).unwrap();
    assert_eq!(
        reader.get_str(GuanoField::Timestamp).unwrap(),
        "2020-01-01T00:00:00Z"
    );
    assert_eq!(reader.get_str(GuanoField::Make).unwrap(), "Pettersson");
    assert_eq!(reader.get_float(GuanoField::Length).unwrap(), 0.001);
    assert_eq!(reader.get_int_ns("MSFT", "Fnord").unwrap(), 42);
    assert_eq!(reader.metadata().version(), Some("1.0"));

    // The metadata chunk always occupies an even number of bytes.
    let guan = reader.container().chunk(GUANO_CHUNK_ID).unwrap();
    assert_eq!(guan.len() % 2, 0);

    let _ = fs::remove_file(&path);
}

#[test]
fn hound_reads_files_we_write() {
    let path = temp_path("hound-check.wav");
    let samples = vec![0i16, 512, -512, 12_345, -12_345, i16::MAX, i16::MIN];
    demo_writer(samples.clone()).write_to_path(&path).unwrap();

    let mut reader = hound::WavReader::open(&path).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 44_100);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);

    let read_back: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(read_back, samples);

    let _ = fs::remove_file(&path);
}

#[test]
fn files_from_other_writers_parse_without_metadata() {
    let path = temp_path("hound-written.wav");
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 22_050,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(&path, spec).unwrap();
    for s in [0i16, 5, -5, 0] {
        writer.write_sample(s).unwrap();
    }
    writer.finalize().unwrap();

    let reader = GuanoReader::open(&path).unwrap();
    assert!(reader.metadata().is_empty());
    assert!(reader.container().has_chunk(DATA_CHUNK_ID));
    assert_eq!(reader.container().chunk(DATA_CHUNK_ID).unwrap().len(), 8);

    let _ = fs::remove_file(&path);
}
