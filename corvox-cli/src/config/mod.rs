//! Configuration file handling

use anyhow::{Context, Result};
use corvox_engine::{ExtractorConfig, RuleSpec};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure (TOML)
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Extraction configuration
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Normalization rule overrides
    #[serde(default)]
    pub normalization: NormalizationConfig,
}

/// Extraction-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct ExtractionConfig {
    /// Target locale code
    pub language: String,

    /// Word-count lower bound, exclusive
    pub min_words: usize,

    /// Word-count upper bound, exclusive
    pub max_words: usize,

    /// Alphabet override; defaults to the locale alphabet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alphabet: Option<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            language: "fr".to_string(),
            min_words: 1,
            max_words: 15,
            alphabet: None,
        }
    }
}

/// Normalization rule overrides; when rules are present they replace the
/// locale's built-in table
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct NormalizationConfig {
    /// Ordered rule list
    #[serde(default)]
    pub rules: Vec<RuleEntry>,
}

/// One rewrite rule in the configuration file
#[derive(Debug, Deserialize, Serialize)]
pub struct RuleEntry {
    /// Literal substring or regex pattern
    pub pattern: String,

    /// Replacement text
    pub replacement: String,

    /// Interpret `pattern` as a regular expression
    #[serde(default)]
    pub regex: bool,
}

impl CliConfig {
    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Convert into an engine configuration
    pub fn to_extractor_config(&self) -> ExtractorConfig {
        let rules = if self.normalization.rules.is_empty() {
            None
        } else {
            Some(
                self.normalization
                    .rules
                    .iter()
                    .map(|rule| RuleSpec {
                        pattern: rule.pattern.clone(),
                        replacement: rule.replacement.clone(),
                        regex: rule.regex,
                    })
                    .collect(),
            )
        };
        ExtractorConfig {
            locale: self.extraction.language.clone(),
            min_words: self.extraction.min_words,
            max_words: self.extraction.max_words,
            alphabet: self.extraction.alphabet.clone(),
            rules,
        }
    }
}
