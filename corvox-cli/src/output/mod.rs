//! Corpus output writers
//!
//! Every run produces two streams: accepted sentences and rejected
//! sentences tagged with their reason. Both destinations are created up
//! front so an unusable path aborts before any processing.

use anyhow::Result;
use corvox_engine::Extraction;
use std::path::Path;

pub mod json;
pub mod text;

pub use json::JsonCorpusWriter;
pub use text::TextCorpusWriter;

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One sentence per line; rejects prefixed with their reason tag
    Text,
    /// JSON arrays of accepted sentences and tagged rejections
    Json,
}

/// Writes the accepted and rejected streams of a run
pub enum CorpusWriter {
    /// Line-oriented writers
    Text(TextCorpusWriter),
    /// Buffering JSON writers
    Json(JsonCorpusWriter),
}

impl CorpusWriter {
    /// Create both output destinations; fails before any processing
    /// happens when either path is unusable
    pub fn create(accepted: &Path, rejected: &Path, format: OutputFormat) -> Result<Self> {
        match format {
            OutputFormat::Text => Ok(CorpusWriter::Text(TextCorpusWriter::create(
                accepted, rejected,
            )?)),
            OutputFormat::Json => Ok(CorpusWriter::Json(JsonCorpusWriter::create(
                accepted, rejected,
            )?)),
        }
    }

    /// Append one extraction's results
    pub fn record(&mut self, extraction: &Extraction) -> Result<()> {
        match self {
            CorpusWriter::Text(writer) => writer.record(extraction),
            CorpusWriter::Json(writer) => writer.record(extraction),
        }
    }

    /// Flush and finalize both streams
    pub fn finish(&mut self) -> Result<()> {
        match self {
            CorpusWriter::Text(writer) => writer.finish(),
            CorpusWriter::Json(writer) => writer.finish(),
        }
    }
}
