use anyhow::{ensure, Result};

/// Slices a word list into windows of `sample_size` words. `overlap_ratio`
/// divides the step between window starts: 1 gives back-to-back windows,
/// 2 starts each window halfway into the previous one, and so on.
pub struct Chunker {
    pub sample_size: usize,
    pub overlap_ratio: usize,
}

impl Default for Chunker {
    fn default() -> Self {
        Self {
            sample_size: 1000,
            overlap_ratio: 1,
        }
    }
}

impl Chunker {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.sample_size > 0, "sample_size must be positive");
        ensure!(self.overlap_ratio > 0, "overlap_ratio must be positive");
        ensure!(
            self.overlap_ratio <= self.sample_size,
            "overlap_ratio ({}) must not exceed sample_size ({})",
            self.overlap_ratio,
            self.sample_size
        );
        Ok(())
    }

    pub fn chunk(&self, words: &[String]) -> Result<Vec<Vec<String>>> {
        self.validate()?;

        let step = self.sample_size / self.overlap_ratio;
        let count = (words.len() / self.sample_size) * self.overlap_ratio;

        let mut samples = Vec::with_capacity(count);
        for i in 0..count {
            let start = i * step;
            // Overlapping windows can run past the end of the list; clamp
            // and keep the short sample.
            let end = (start + self.sample_size).min(words.len());
            samples.push(words[start..end].to_vec());
        }

        Ok(samples)
    }
}
