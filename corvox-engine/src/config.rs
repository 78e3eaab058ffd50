//! Extractor configuration

use crate::error::{EngineError, Result};

/// A normalization rule override as plain data, compiled by the builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec {
    /// Literal substring or regex pattern
    pub pattern: String,
    /// Replacement text (`$1`-style groups allowed for regex rules)
    pub replacement: String,
    /// Interpret `pattern` as a regular expression
    pub regex: bool,
}

/// Extraction pipeline configuration
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Target locale code ("fr", "en")
    pub locale: String,
    /// Word-count lower bound, exclusive
    pub min_words: usize,
    /// Word-count upper bound, exclusive
    pub max_words: usize,
    /// Target alphabet override; defaults to the locale's
    pub alphabet: Option<String>,
    /// Normalization rule override; defaults to the locale's built-in table
    pub rules: Option<Vec<RuleSpec>>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            locale: "fr".to_string(),
            min_words: 1,
            max_words: 15,
            alphabet: None,
            rules: None,
        }
    }
}

impl ExtractorConfig {
    /// Create a configuration for a locale with default bounds
    pub fn new(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
            ..Self::default()
        }
    }

    /// Reject configurations that can never accept a sentence
    pub fn validate(&self) -> Result<()> {
        if self.min_words + 1 >= self.max_words {
            return Err(EngineError::ConfigError(format!(
                "word-count bounds ({}, {}) are exclusive and admit nothing",
                self.min_words, self.max_words
            )));
        }
        if matches!(&self.alphabet, Some(a) if a.is_empty()) {
            return Err(EngineError::ConfigError(
                "alphabet override is empty".to_string(),
            ));
        }
        Ok(())
    }
}
