use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Only directory entries ending in this suffix are read. The comparison is
/// a literal, case-sensitive suffix check.
pub const TEXT_SUFFIX: &str = ".txt";

pub const DEFAULT_SAMPLE_SIZE: usize = 1000;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SliceConfig {
    /// Words per sample.
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
    /// Window step divisor; 1 means no overlap.
    #[serde(default = "default_overlap_ratio")]
    pub overlap_ratio: usize,
}

fn default_sample_size() -> usize {
    DEFAULT_SAMPLE_SIZE
}

fn default_overlap_ratio() -> usize {
    1
}

impl Default for SliceConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            overlap_ratio: 1,
        }
    }
}

pub fn load_config(path: &Path) -> Result<SliceConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("could not read config {:?}", path))?;
    let config: SliceConfig = serde_json::from_str(&content)?;
    Ok(config)
}
