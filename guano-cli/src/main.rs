use chrono::Utc;
use clap::{Parser, Subcommand};
use guano_wav::{GuanoField, GuanoMetadata, GuanoReader, GuanoWaveWriter};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "guano", about = "Inspect and write GUANO metadata in WAV files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the metadata fields of a WAV file
    Dump {
        /// Path to a WAV file
        file: PathBuf,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the RIFF chunks of a WAV file
    Chunks {
        /// Path to a WAV file
        file: PathBuf,
    },
    /// Write a small tagged WAV file with a synthetic tone
    Demo {
        /// Output path
        out: PathBuf,

        /// Sample rate in Hz
        #[arg(long, default_value_t = 44_100)]
        sample_rate: u32,

        /// Recording length in seconds
        #[arg(long, default_value_t = 0.5)]
        seconds: f64,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Dump { file, json } => {
            let reader = GuanoReader::open(&file).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });

            if json {
                let rendered = serde_json::to_string_pretty(reader.metadata()).unwrap();
                println!("{rendered}");
            } else {
                println!(
                    "{}: {} chunks, {} metadata fields",
                    file.display(),
                    reader.container().chunks().len(),
                    reader.metadata().len()
                );
                print_fields(reader.metadata());
            }
        }

        Commands::Chunks { file } => {
            let reader = GuanoReader::open(&file).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });

            let container = reader.container();
            println!("{}: declared RIFF size {}", file.display(), container.riff_size());
            for chunk in container.chunks() {
                println!("  {:4} {:>9} bytes", chunk.id_str(), chunk.data.len());
            }
        }

        Commands::Demo {
            out,
            sample_rate,
            seconds,
        } => {
            let samples = sine_samples(sample_rate, 440.0, seconds);

            let mut writer = GuanoWaveWriter::new();
            writer.set_str(
                GuanoField::Timestamp,
                Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            );
            writer.set_str(GuanoField::Make, "guano-cli");
            writer.set_int(GuanoField::Samplerate, i64::from(sample_rate));
            writer.set_float(GuanoField::Length, seconds);
            writer.set_str(GuanoField::SpeciesManualId, "Myotis myotis");
            writer.set_str(GuanoField::Note, "synthetic 440 Hz demo tone");
            writer.set_str("MSFT|Fnord", "42");
            writer.set_audio_data(sample_rate, samples);

            writer.validate().unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });
            writer.write_to_path(&out).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });

            eprintln!("Wrote {}", out.display());
            print_fields(writer.metadata());
        }
    }
}

fn sine_samples(sample_rate: u32, frequency: f64, duration: f64) -> Vec<i16> {
    let count = (f64::from(sample_rate) * duration) as usize;
    (0..count)
        .map(|i| {
            let t = i as f64 / f64::from(sample_rate);
            (0.4 * (2.0 * std::f64::consts::PI * frequency * t).sin() * f64::from(i16::MAX)) as i16
        })
        .collect()
}

fn print_fields(metadata: &GuanoMetadata) {
    if let Some(version) = metadata.version() {
        println!("  GUANO|Version: {version}");
    }
    for namespace in metadata.namespaces() {
        for field in metadata.fieldnames(namespace) {
            let value = metadata.get_str_ns(namespace, field).unwrap_or_default();
            if namespace.is_empty() {
                println!("  {field}: {value}");
            } else {
                println!("  {namespace}|{field}: {value}");
            }
        }
    }
}
