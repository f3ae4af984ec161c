use crate::chunker::Chunker;
use crate::config::{SliceConfig, TEXT_SUFFIX};
use crate::labels::StemSplit;
use crate::normalize::{decode_latin1, normalize};
use anyhow::{ensure, Context, Result};
use log::info;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One processed file: its stem and the word samples sliced out of it.
#[derive(Debug, Clone)]
pub struct FileSamples {
    pub stem: String,
    pub samples: Vec<Vec<String>>,
}

/// One row of the labeled sample table.
#[derive(Debug, Clone, Serialize)]
pub struct SampleRow {
    #[serde(rename = "Translator")]
    pub translator: String,
    #[serde(rename = "Work")]
    pub work: String,
    #[serde(rename = "Chunk")]
    pub chunk: String,
}

/// Read, normalize and slice every `.txt` file directly under `folder`.
/// Files come back in sorted filename order, each one an independent
/// partial result; an unreadable file fails the whole run.
pub fn run_slice(folder: &Path, config: &SliceConfig) -> Result<Vec<FileSamples>> {
    let chunker = Chunker {
        sample_size: config.sample_size,
        overlap_ratio: config.overlap_ratio,
    };
    chunker.validate()?;

    let paths = collect_text_files(folder)?;
    paths
        .par_iter()
        .map(|path| process_file(path, &chunker))
        .collect()
}

/// Fold per-file results into a flat map keyed by `<stem>_<index>`.
pub fn keyed_samples(files: Vec<FileSamples>) -> HashMap<String, Vec<String>> {
    let mut keyed = HashMap::new();
    for file in files {
        for (i, sample) in file.samples.into_iter().enumerate() {
            keyed.insert(format!("{}_{}", file.stem, i), sample);
        }
    }
    keyed
}

/// Fold per-file results into labeled table rows, ordered by file then
/// sample index. Each sample's words are rejoined with single spaces.
pub fn labeled_rows(files: Vec<FileSamples>, splitter: &dyn StemSplit) -> Vec<SampleRow> {
    let mut rows = Vec::new();
    for file in files {
        let labels = splitter.split(&file.stem);
        for sample in file.samples {
            rows.push(SampleRow {
                translator: labels.translator.clone(),
                work: labels.work.clone(),
                chunk: sample.join(" "),
            });
        }
    }
    rows
}

fn collect_text_files(folder: &Path) -> Result<Vec<PathBuf>> {
    ensure!(
        folder.is_dir(),
        "{:?} does not exist or is not a directory",
        folder
    );

    let mut paths = Vec::new();
    for entry in WalkDir::new(folder).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if !entry.file_name().to_string_lossy().ends_with(TEXT_SUFFIX) {
            continue;
        }
        paths.push(entry.into_path());
    }

    // Listing order is platform-dependent; sort so sample keys and row
    // order come out the same everywhere.
    paths.sort();
    Ok(paths)
}

fn process_file(path: &Path, chunker: &Chunker) -> Result<FileSamples> {
    let file_name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    let stem = file_name
        .strip_suffix(TEXT_SUFFIX)
        .unwrap_or(&file_name)
        .to_string();

    let bytes =
        fs::read(path).with_context(|| format!("failed to read {:?}", path))?;
    let text = normalize(&decode_latin1(&bytes));
    let words: Vec<String> = text.split_whitespace().map(str::to_string).collect();
    let samples = chunker.chunk(&words)?;

    info!("'{}' split into {} samples", file_name, samples.len());

    Ok(FileSamples { stem, samples })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::CamelSplitter;
    use tempfile::tempdir;

    fn write_words(dir: &Path, name: &str, n: usize) {
        let text: Vec<String> = (0..n).map(|i| format!("w{i}")).collect();
        fs::write(dir.join(name), text.join(" ")).unwrap();
    }

    fn config(sample_size: usize, overlap_ratio: usize) -> SliceConfig {
        SliceConfig {
            sample_size,
            overlap_ratio,
        }
    }

    #[test]
    fn test_keyed_end_to_end() -> Result<()> {
        let dir = tempdir()?;
        write_words(dir.path(), "Example.txt", 2500);

        let files = run_slice(dir.path(), &config(1000, 1))?;
        assert_eq!(files.len(), 1);

        let keyed = keyed_samples(files);
        assert_eq!(keyed.len(), 2);
        assert_eq!(keyed["Example_0"].len(), 1000);
        assert_eq!(keyed["Example_1"].len(), 1000);
        // Trailing 500 words are discarded.
        assert_eq!(keyed["Example_0"][0], "w0");
        assert_eq!(keyed["Example_1"][0], "w1000");
        assert_eq!(keyed["Example_1"][999], "w1999");
        Ok(())
    }

    #[test]
    fn test_keyed_end_to_end_with_overlap() -> Result<()> {
        let dir = tempdir()?;
        write_words(dir.path(), "Example.txt", 2500);

        let keyed = keyed_samples(run_slice(dir.path(), &config(1000, 2))?);
        // step 500, (2500 / 1000) * 2 = 4 windows
        assert_eq!(keyed.len(), 4);
        for i in 0..4 {
            let sample = &keyed[&format!("Example_{i}")];
            assert_eq!(sample.len(), 1000);
            assert_eq!(sample[0], format!("w{}", i * 500));
        }
        Ok(())
    }

    #[test]
    fn test_overlap_short_trailing_sample() -> Result<()> {
        let dir = tempdir()?;
        write_words(dir.path(), "Example.txt", 2100);

        let keyed = keyed_samples(run_slice(dir.path(), &config(1000, 2))?);
        assert_eq!(keyed.len(), 4);
        // The last window starts at 1500 and runs past the 2100th word.
        assert_eq!(keyed["Example_3"].len(), 2100 - 3 * 500);
        Ok(())
    }

    #[test]
    fn test_normalization_applied_before_slicing() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("Sample.txt"), "It's RAINING, cats & dogs!")?;

        let keyed = keyed_samples(run_slice(dir.path(), &config(4, 1))?);
        assert_eq!(keyed.len(), 1);
        assert_eq!(keyed["Sample_0"], vec!["its", "raining", "cats", "dogs"]);
        Ok(())
    }

    #[test]
    fn test_latin1_content_decodes() -> Result<()> {
        let dir = tempdir()?;
        // "café au lait" with a Latin-1 e-acute byte.
        fs::write(
            dir.path().join("Drink.txt"),
            [0x63, 0x61, 0x66, 0xE9, 0x20, 0x61, 0x75, 0x20, 0x6C, 0x61, 0x69, 0x74],
        )?;

        let keyed = keyed_samples(run_slice(dir.path(), &config(3, 1))?);
        assert_eq!(keyed["Drink_0"], vec!["café", "au", "lait"]);
        Ok(())
    }

    #[test]
    fn test_non_txt_entries_skipped() -> Result<()> {
        let dir = tempdir()?;
        write_words(dir.path(), "notes.md", 50);
        fs::write(dir.path().join("README"), "ten words would go here")?;
        fs::create_dir(dir.path().join("nested.txt"))?;

        let files = run_slice(dir.path(), &config(5, 1))?;
        assert!(files.is_empty());
        Ok(())
    }

    #[test]
    fn test_missing_folder_is_an_error() {
        let result = run_slice(Path::new("/nonexistent/corpus"), &config(10, 1));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_config_rejected_before_reading() -> Result<()> {
        let dir = tempdir()?;
        write_words(dir.path(), "Example.txt", 100);

        assert!(run_slice(dir.path(), &config(0, 1)).is_err());
        assert!(run_slice(dir.path(), &config(10, 0)).is_err());
        Ok(())
    }

    #[test]
    fn test_keys_unique_and_deterministic() -> Result<()> {
        let dir = tempdir()?;
        write_words(dir.path(), "BetaWork.txt", 30);
        write_words(dir.path(), "AlphaWork.txt", 30);

        let first = run_slice(dir.path(), &config(10, 1))?;
        let second = run_slice(dir.path(), &config(10, 1))?;

        let stems: Vec<&str> = first.iter().map(|f| f.stem.as_str()).collect();
        assert_eq!(stems, vec!["AlphaWork", "BetaWork"]);

        let keyed = keyed_samples(first);
        assert_eq!(keyed.len(), 6);

        let again = keyed_samples(second);
        assert_eq!(keyed, again);
        Ok(())
    }

    #[test]
    fn test_labeled_rows_order_and_labels() -> Result<()> {
        let dir = tempdir()?;
        write_words(dir.path(), "SmithMobyDick.txt", 6);
        write_words(dir.path(), "PopeIliad.txt", 9);

        let files = run_slice(dir.path(), &config(3, 1))?;
        let rows = labeled_rows(files, &CamelSplitter::default());

        // PopeIliad sorts first: 3 samples, then SmithMobyDick's 2.
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].translator, "Pope");
        assert_eq!(rows[0].work, "Iliad");
        assert_eq!(rows[0].chunk, "w0 w1 w2");
        assert_eq!(rows[2].chunk, "w6 w7 w8");
        assert_eq!(rows[3].translator, "Smith");
        assert_eq!(rows[3].work, "MobyDick");
        assert_eq!(rows[4].chunk, "w3 w4 w5");
        Ok(())
    }

    #[test]
    fn test_file_too_short_for_one_sample() -> Result<()> {
        let dir = tempdir()?;
        write_words(dir.path(), "Tiny.txt", 12);

        let files = run_slice(dir.path(), &config(1000, 1))?;
        assert_eq!(files.len(), 1);
        assert!(files[0].samples.is_empty());
        assert!(keyed_samples(files).is_empty());
        Ok(())
    }
}
