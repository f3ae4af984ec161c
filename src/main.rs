mod chunker;
mod config;
mod labels;
mod normalize;
mod output;
mod pipeline;

use crate::config::{load_config, SliceConfig, DEFAULT_SAMPLE_SIZE};
use crate::labels::CamelSplitter;
use crate::output::{write_keyed_json, write_manifest, write_table_csv, write_table_json};
use crate::pipeline::{keyed_samples, labeled_rows, run_slice};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tess")]
#[command(about = "Tessera - slice text corpora into word samples", long_about = None)]
struct Cli {
    /// Folder of .txt files to slice
    folder: PathBuf,

    /// Words per sample
    #[arg(short, long, default_value_t = DEFAULT_SAMPLE_SIZE)]
    sample_size: usize,

    /// Window step divisor; 1 means no overlap
    #[arg(short, long, default_value_t = 1)]
    overlap_ratio: usize,

    /// Emit a Translator/Work/Chunk table instead of keyed samples
    #[arg(short, long)]
    labels: bool,

    /// Table format used with --labels and --out
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Write results to this file instead of only summarizing
    #[arg(long)]
    out: Option<PathBuf>,

    /// Read sample_size and overlap_ratio from a JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Csv,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match cli.config {
        Some(path) => load_config(&path)?,
        None => SliceConfig {
            sample_size: cli.sample_size,
            overlap_ratio: cli.overlap_ratio,
        },
    };

    let files = run_slice(&cli.folder, &config)?;
    let file_count = files.len();

    if cli.labels {
        let rows = labeled_rows(files, &CamelSplitter::default());
        if let Some(out) = &cli.out {
            match cli.format {
                Format::Csv => write_table_csv(out, &rows)?,
                Format::Json => write_table_json(out, &rows)?,
            }
            write_manifest(out, file_count, rows.len())?;
            println!("✅ Wrote {} rows from {} files to {:?}", rows.len(), file_count, out);
        } else {
            println!("✅ {} labeled samples from {} files", rows.len(), file_count);
        }
    } else {
        let samples = keyed_samples(files);
        if let Some(out) = &cli.out {
            write_keyed_json(out, &samples)?;
            write_manifest(out, file_count, samples.len())?;
            println!("✅ Wrote {} samples from {} files to {:?}", samples.len(), file_count, out);
        } else {
            println!("✅ {} samples from {} files", samples.len(), file_count);
        }
    }

    Ok(())
}
