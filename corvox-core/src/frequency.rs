//! Per-document frequency statistics
//!
//! Frequent content words and strongly associated bigram/trigram
//! collocations from one document. The classifier uses them to tell
//! structural text (speaker names, recurring stage-direction formulas)
//! from lexical content: a capitalized token that keeps reappearing is a
//! character name, not the start of a sentence about someone.

use crate::token::{Token, TokenKind};
use std::collections::{HashMap, HashSet};

/// Content words retained
const TOP_WORDS: usize = 15;

/// Minimum occurrences for a content word (strictly more than 2)
const MIN_WORD_COUNT: usize = 3;

/// Collocations retained per n-gram size
const TOP_COLLOCATIONS: usize = 20;

/// Read-only per-document statistics for non-prose detection
#[derive(Debug, Clone, Default)]
pub struct FrequencyProfile {
    expressions: HashSet<String>,
}

impl FrequencyProfile {
    /// Build from a document's token stream; stopwords never enter the
    /// counts
    pub fn build(tokens: &[Token], stopwords: &HashSet<String>) -> Self {
        let words: Vec<&str> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Word)
            .map(|t| t.text.as_str())
            .collect();

        let mut expressions = HashSet::new();
        collect_common_words(&words, stopwords, &mut expressions);
        collect_collocations(&words, 2, &mut expressions);
        collect_collocations(&words, 3, &mut expressions);
        Self { expressions }
    }

    /// Membership query on a word, bigram, or whole-sentence surface
    pub fn contains(&self, text: &str) -> bool {
        self.expressions.contains(text)
    }

    /// Number of stored expressions
    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    /// True when nothing was frequent enough to retain
    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }
}

fn collect_common_words(
    words: &[&str],
    stopwords: &HashSet<String>,
    out: &mut HashSet<String>,
) {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for &word in words {
        if word.chars().count() < 2 || stopwords.contains(&word.to_lowercase()) {
            continue;
        }
        *counts.entry(word).or_insert(0) += 1;
    }

    let mut ranked: Vec<(&str, usize)> = counts
        .into_iter()
        .filter(|&(_, count)| count >= MIN_WORD_COUNT)
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    out.extend(ranked.into_iter().take(TOP_WORDS).map(|(w, _)| w.to_string()));
}

/// Adjacent n-grams over words of length ≥ 2, ranked by Student's t
/// (observed count against the expectation under independence)
fn collect_collocations(words: &[&str], size: usize, out: &mut HashSet<String>) {
    let tokens: Vec<&str> = words
        .iter()
        .copied()
        .filter(|w| w.chars().count() >= 2)
        .collect();
    if tokens.len() < size {
        return;
    }

    let total = tokens.len() as f64;
    let mut unigram: HashMap<&str, usize> = HashMap::new();
    for &word in &tokens {
        *unigram.entry(word).or_insert(0) += 1;
    }

    let mut ngrams: HashMap<Vec<&str>, usize> = HashMap::new();
    for window in tokens.windows(size) {
        *ngrams.entry(window.to_vec()).or_insert(0) += 1;
    }

    let mut scored: Vec<(f64, String)> = ngrams
        .into_iter()
        .map(|(gram, observed)| {
            let observed = observed as f64;
            let expected = gram
                .iter()
                .map(|w| unigram[w] as f64 / total)
                .product::<f64>()
                * total;
            let score = (observed - expected) / observed.sqrt();
            (score, gram.join(" "))
        })
        .collect();
    scored.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.1.cmp(&b.1))
    });
    out.extend(scored.into_iter().take(TOP_COLLOCATIONS).map(|(_, g)| g));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens_from(text: &str) -> Vec<Token> {
        text.split_whitespace()
            .map(|w| Token::new(w, TokenKind::Word))
            .collect()
    }

    #[test]
    fn test_frequent_word_retained() {
        let text = "DUPONT entre DUPONT sort DUPONT revient enfin seul";
        let profile = FrequencyProfile::build(&tokens_from(text), &HashSet::new());
        assert!(profile.contains("DUPONT"));
        assert!(!profile.contains("enfin"));
    }

    #[test]
    fn test_rare_word_not_retained() {
        let text = "DUPONT entre DUPONT sort enfin seul";
        let profile = FrequencyProfile::build(&tokens_from(text), &HashSet::new());
        // two occurrences are not enough
        assert!(!profile.contains("DUPONT"));
    }

    #[test]
    fn test_stopwords_excluded() {
        let stopwords: HashSet<String> = ["le"].iter().map(|s| s.to_string()).collect();
        let text = "Le marquis parle Le marquis sort Le marquis revient";
        let profile = FrequencyProfile::build(&tokens_from(text), &stopwords);
        assert!(profile.contains("marquis"));
        assert!(!profile.contains("Le"));
    }

    #[test]
    fn test_repeated_bigram_retained() {
        let text = "Le marquis hésite un peu Le marquis recule un peu Le marquis sort";
        let profile = FrequencyProfile::build(&tokens_from(text), &HashSet::new());
        assert!(profile.contains("Le marquis"));
    }

    #[test]
    fn test_empty_document() {
        let profile = FrequencyProfile::build(&[], &HashSet::new());
        assert!(profile.is_empty());
        assert_eq!(profile.len(), 0);
    }
}
