//! Chapter segmentation.
//!
//! Splits a raw book text into ordered chapters, either along detected
//! "Chapter ..." heading lines or, when too few headings exist, into
//! fixed-width chunks. Never fails: input with no usable text yields an
//! empty chapter list.

use serde::Deserialize;

use crate::model::Chapter;

/// Tuning knobs for [`segment_with`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SegmentOptions {
    /// Chunk width in characters for the no-headings fallback.
    pub chunk_width: usize,
    /// Chapters whose trimmed body is at or under this length are dropped.
    pub min_chapter_len: usize,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            chunk_width: 9000,
            min_chapter_len: 30,
        }
    }
}

/// Split `raw` into chapters with default options.
pub fn segment(raw: &str) -> Vec<Chapter> {
    segment_with(raw, &SegmentOptions::default())
}

/// Split `raw` into chapters.
///
/// Heading lines start chapters when at least two are present; a lone
/// heading is treated as noise and the whole text falls back to fixed-width
/// chunks labelled "Chapter 1..N". Chapters with bodies at or under
/// `min_chapter_len` characters are dropped, so heading lines sitting next
/// to each other do not produce spurious near-empty chapters.
pub fn segment_with(raw: &str, options: &SegmentOptions) -> Vec<Chapter> {
    let normalized = raw.replace("\r\n", "\n");
    let lines: Vec<&str> = normalized.split('\n').collect();

    let heading_indexes: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_heading_line(line))
        .map(|(i, _)| i)
        .collect();

    let mut chapters = Vec::new();
    if heading_indexes.len() >= 2 {
        for (i, &start) in heading_indexes.iter().enumerate() {
            let end = heading_indexes
                .get(i + 1)
                .copied()
                .unwrap_or(lines.len());
            let mut title = lines[start].trim().to_string();
            if title.is_empty() {
                title = format!("Chapter {}", i + 1);
            }
            let body = lines[start + 1..end].join("\n");
            chapters.push(Chapter::new(title, body.trim()));
        }
    } else {
        let width = options.chunk_width.max(1);
        let chars: Vec<char> = raw.chars().collect();
        for (i, chunk) in chars.chunks(width).enumerate() {
            let text: String = chunk.iter().collect();
            chapters.push(Chapter::new(format!("Chapter {}", i + 1), text.trim()));
        }
    }

    chapters.retain(|c| c.text.chars().count() > options.min_chapter_len);
    chapters
}

/// A heading is a line that, after trimming, starts with the
/// case-insensitive token "chapter": the word followed by end of line or a
/// separator. "Chapter 12" and "CHAPTER" match; "Chapters" does not.
fn is_heading_line(line: &str) -> bool {
    let trimmed = line.trim();
    let Some(head) = trimmed.get(..7) else {
        return false;
    };
    if !head.eq_ignore_ascii_case("chapter") {
        return false;
    }
    match trimmed[7..].chars().next() {
        None => true,
        Some(c) => !c.is_alphanumeric() && c != '_',
    }
}
