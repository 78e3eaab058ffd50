//! Pipeline driver
//!
//! Composes normalization, numeric expansion, segmentation, non-prose
//! classification, and the acceptance filter chain over a document
//! batch. Every sentence ends in exactly one of the two output streams;
//! a malformed sentence degrades to a rejection or a discard, never a
//! failed run.

use crate::config::{ExtractorConfig, RuleSpec};
use crate::error::Result;
use crate::input::RawDocument;
use crate::language;
use crate::segmenter::{RuleSegmenter, Segmenter};
use corvox_core::{
    apply_boundary_overrides, classify, is_markup_artifact, FilterChain, FilterVerdict,
    FrequencyProfile, NormRule, Normalizer, NumericExpander, Rejection, SeenSet,
    SentenceCandidate,
};
use std::collections::HashSet;

/// Result of one extraction run
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Accepted sentences, in acceptance order
    pub accepted: Vec<String>,
    /// Rejected sentences with their reasons
    pub rejected: Vec<Rejection>,
}

impl Extraction {
    fn absorb(&mut self, other: Extraction) {
        self.accepted.extend(other.accepted);
        self.rejected.extend(other.rejected);
    }
}

/// Sentence extraction pipeline
///
/// Built once per run from an [`ExtractorConfig`]; construction is the
/// only fallible step, processing itself never errors.
pub struct SentenceExtractor {
    normalizer: Normalizer,
    expander: NumericExpander,
    segmenter: RuleSegmenter,
    chain: FilterChain,
    stopwords: HashSet<String>,
}

impl SentenceExtractor {
    /// Create an extractor with the default (French) configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ExtractorConfig::default())
    }

    /// Create an extractor for a specific locale
    pub fn with_locale(locale: &str) -> Result<Self> {
        Self::with_config(ExtractorConfig::new(locale))
    }

    /// Create an extractor from a validated configuration
    pub fn with_config(config: ExtractorConfig) -> Result<Self> {
        config.validate()?;
        let locale = language::for_locale(&config.locale)?;

        let rules = match &config.rules {
            Some(specs) => compile_rules(specs)?,
            None => locale.rules,
        };
        let alphabet = config.alphabet.as_deref().unwrap_or(locale.alphabet);
        let chain = FilterChain::new(config.min_words, config.max_words, alphabet)?;

        Ok(Self {
            normalizer: Normalizer::new(rules),
            expander: NumericExpander::new(locale.speller),
            segmenter: RuleSegmenter,
            chain,
            stopwords: locale.stopwords,
        })
    }

    /// Builder entry point
    pub fn builder() -> SentenceExtractorBuilder {
        SentenceExtractorBuilder::new()
    }

    /// Extract over a fresh duplicate set
    pub fn extract(&self, documents: &[RawDocument]) -> Extraction {
        let mut seen = SeenSet::new();
        self.extract_with_seen(documents, &mut seen)
    }

    /// Extract sharing an explicit duplicate set across calls
    ///
    /// The set is the only state carried between documents; callers that
    /// feed documents incrementally pass the same set each time.
    pub fn extract_with_seen(
        &self,
        documents: &[RawDocument],
        seen: &mut SeenSet,
    ) -> Extraction {
        let mut out = Extraction::default();
        for document in documents {
            out.absorb(self.process_document(document, seen));
        }
        out
    }

    /// Run only the acceptance filter chain over already-extracted
    /// sentences, one per line
    pub fn validate_sentences<'a>(
        &self,
        sentences: impl IntoIterator<Item = &'a str>,
        seen: &mut SeenSet,
    ) -> Extraction {
        let mut out = Extraction::default();
        for sentence in sentences {
            let sentence = sentence.trim_end_matches(['\r', '\n']);
            if sentence.is_empty() {
                continue;
            }
            self.apply_verdict(sentence.to_string(), seen, &mut out);
        }
        out
    }

    fn process_document(&self, document: &RawDocument, seen: &mut SeenSet) -> Extraction {
        let mut units = Vec::new();
        for line in document.text.lines() {
            let cleaned = self.expander.expand(&self.normalizer.normalize(line));
            let cleaned = cleaned.trim();
            if cleaned.is_empty() || is_markup_artifact(cleaned) {
                continue;
            }
            units.push(cleaned.to_string());
        }

        let mut out = Extraction::default();
        if units.is_empty() {
            return out;
        }
        let text = units.join(" ");

        let mut tokens = self.segmenter.segment(&text);
        apply_boundary_overrides(&mut tokens);
        let profile = FrequencyProfile::build(&tokens, &self.stopwords);

        for candidate in SentenceCandidate::split_stream(tokens) {
            let Some(kept) = classify(candidate, &profile) else {
                continue;
            };
            self.apply_verdict(kept.text(), seen, &mut out);
        }
        out
    }

    fn apply_verdict(&self, sentence: String, seen: &mut SeenSet, out: &mut Extraction) {
        match self.chain.evaluate(&sentence, seen) {
            FilterVerdict::Accepted => out.accepted.push(sentence),
            FilterVerdict::Rejected(reason) => out.rejected.push(Rejection {
                reason,
                text: sentence,
            }),
        }
    }
}

fn compile_rules(specs: &[RuleSpec]) -> Result<Vec<NormRule>> {
    specs
        .iter()
        .map(|spec| {
            if spec.regex {
                Ok(NormRule::pattern(&spec.pattern, spec.replacement.clone())?)
            } else {
                Ok(NormRule::literal(
                    spec.pattern.clone(),
                    spec.replacement.clone(),
                ))
            }
        })
        .collect()
}

/// Fluent construction for [`SentenceExtractor`]
#[derive(Debug, Clone, Default)]
pub struct SentenceExtractorBuilder {
    config: ExtractorConfig,
}

impl SentenceExtractorBuilder {
    /// Create a builder with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target locale
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.config.locale = locale.into();
        self
    }

    /// Set the exclusive word-count lower bound
    pub fn min_words(mut self, min_words: usize) -> Self {
        self.config.min_words = min_words;
        self
    }

    /// Set the exclusive word-count upper bound
    pub fn max_words(mut self, max_words: usize) -> Self {
        self.config.max_words = max_words;
        self
    }

    /// Override the target alphabet
    pub fn alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.config.alphabet = Some(alphabet.into());
        self
    }

    /// Replace the locale's built-in normalization table
    pub fn rules(mut self, rules: Vec<RuleSpec>) -> Self {
        self.config.rules = Some(rules);
        self
    }

    /// Build the extractor
    pub fn build(self) -> Result<SentenceExtractor> {
        SentenceExtractor::with_config(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_rejects_unknown_locale() {
        let result = SentenceExtractor::builder().locale("tlh").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_rejects_bad_bounds() {
        let result = SentenceExtractor::builder()
            .min_words(10)
            .max_words(5)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_custom_rules_replace_builtin_table() {
        let extractor = SentenceExtractor::builder()
            .rules(vec![RuleSpec {
                pattern: "pomme".to_string(),
                replacement: "poire".to_string(),
                regex: false,
            }])
            .build()
            .unwrap();
        let docs = [RawDocument::new("d", "Jean mange une pomme rouge.")];
        let extraction = extractor.extract(&docs);
        assert_eq!(extraction.accepted, vec!["Jean mange une poire rouge."]);
    }

    #[test]
    fn test_bad_custom_rule_is_construction_error() {
        let result = SentenceExtractor::builder()
            .rules(vec![RuleSpec {
                pattern: "[unclosed".to_string(),
                replacement: String::new(),
                regex: true,
            }])
            .build();
        assert!(result.is_err());
    }
}
