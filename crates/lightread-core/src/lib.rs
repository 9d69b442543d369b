//! lightread-core — chapter segmentation, quiz synthesis, and grading.
//!
//! Pure, synchronous functions over in-memory text: no I/O, no ambient
//! state. The session and CLI crates glue these into the reading tracker.

pub mod error;
pub mod model;
pub mod scoring;
pub mod segmenter;
pub mod synthesizer;
