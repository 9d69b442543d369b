//! Optional `lightread.toml` configuration.
//!
//! Tuning knobs for segmentation and quiz synthesis. Every field defaults,
//! so a missing or partial file is fine.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use lightread_core::segmenter::SegmentOptions;
use lightread_core::synthesizer::QuizOptions;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    pub segmenter: SegmentOptions,
    pub quiz: QuizOptions,
    /// Book files whose trimmed text is under this many characters are
    /// rejected at load time.
    pub min_book_len: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            segmenter: SegmentOptions::default(),
            quiz: QuizOptions::default(),
            min_book_len: 30,
        }
    }
}

/// Load config from `path`, falling back to defaults when the file does not
/// exist.
pub fn load_config(path: &Path) -> Result<ReaderConfig> {
    if !path.exists() {
        return Ok(ReaderConfig::default());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}
