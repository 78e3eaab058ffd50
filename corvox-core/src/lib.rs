//! Sentence extraction and validation primitives for voice-corpus building
//!
//! This crate holds the pure pipeline stages: typographic normalization,
//! numeric expansion, sentence-start overrides, non-prose classification,
//! and the acceptance filter chain. No I/O happens here; orchestration
//! lives in `corvox-engine`.

#![warn(missing_docs)]

pub mod boundary;
pub mod classify;
pub mod error;
pub mod filter;
pub mod frequency;
pub mod normalize;
pub mod numbers;
pub mod token;

// Re-export key types
pub use boundary::apply_boundary_overrides;
pub use classify::{classify, is_markup_artifact, Decision};
pub use error::CoreError;
pub use filter::{FilterChain, FilterVerdict, RejectReason, Rejection, SeenSet};
pub use frequency::FrequencyProfile;
pub use normalize::{Matcher, NormRule, Normalizer};
pub use numbers::{NumberSpeller, NumericExpander};
pub use token::{SentenceCandidate, Token, TokenKind};
