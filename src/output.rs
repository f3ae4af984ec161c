use crate::pipeline::SampleRow;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Sidecar stamp written next to an output file.
#[derive(Serialize, Deserialize)]
pub struct Manifest {
    pub generated_at: DateTime<Utc>,
    pub files: usize,
    pub samples: usize,
}

pub fn write_keyed_json(path: &Path, samples: &HashMap<String, Vec<String>>) -> Result<()> {
    let content = serde_json::to_string_pretty(samples)?;
    fs::write(path, content).with_context(|| format!("failed to write {:?}", path))?;
    Ok(())
}

pub fn write_table_json(path: &Path, rows: &[SampleRow]) -> Result<()> {
    let content = serde_json::to_string_pretty(rows)?;
    fs::write(path, content).with_context(|| format!("failed to write {:?}", path))?;
    Ok(())
}

pub fn write_table_csv(path: &Path, rows: &[SampleRow]) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("failed to write {:?}", path))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Stamp the run next to `out_path`, like `results.csv` -> `results.manifest.json`.
pub fn write_manifest(out_path: &Path, files: usize, samples: usize) -> Result<PathBuf> {
    let manifest = Manifest {
        generated_at: Utc::now(),
        files,
        samples,
    };
    let path = out_path.with_extension("manifest.json");
    fs::write(&path, serde_json::to_string_pretty(&manifest)?)?;
    Ok(path)
}
