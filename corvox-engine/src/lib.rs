//! Extraction pipeline orchestration
//!
//! This crate composes the `corvox-core` stages over document batches:
//! locale rule sets, the base segmenter, configuration, and the
//! pipeline driver producing accepted and rejected sentence streams.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod input;
pub mod language;
pub mod pipeline;
pub mod segmenter;

// Re-export key types
pub use config::{ExtractorConfig, RuleSpec};
pub use error::{EngineError, Result};
pub use input::RawDocument;
pub use language::LocaleRules;
pub use pipeline::{Extraction, SentenceExtractor, SentenceExtractorBuilder};
pub use segmenter::{RuleSegmenter, Segmenter};

// Re-export from core for convenience
pub use corvox_core::{FilterVerdict, RejectReason, Rejection, SeenSet};
