//! Acceptance filter chain
//!
//! The last gate before a sentence enters the corpus. Filters run in a
//! fixed order and the first failure decides the rejection reason, so
//! reasons are mutually exclusive by construction.

use crate::error::{CoreError, Result};
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

/// Rejection reasons, one per sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RejectReason {
    /// A digit survived normalization and expansion
    Numbers,
    /// Disallowed symbol present
    Symbols,
    /// Acronym or dotted-abbreviation pattern present
    Abbreviation,
    /// Word count outside the configured bounds (either side shares this
    /// label, as the validation tooling always has)
    TooLong,
    /// A token without a single letter of the target alphabet
    OutOfAlphabet,
    /// Exact sentence already accepted in this run
    Duplicate,
}

impl RejectReason {
    /// Human-readable tag used in the rejection stream
    pub fn tag(&self) -> &'static str {
        match self {
            RejectReason::Numbers => "NUMBERS",
            RejectReason::Symbols => "SYMBOLS",
            RejectReason::Abbreviation => "ABBREVIATION",
            RejectReason::TooLong => "TOO LONG",
            RejectReason::OutOfAlphabet => "OUT OF ALPHABET",
            RejectReason::Duplicate => "DUPLICATE",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Terminal verdict for one sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterVerdict {
    /// Sentence enters the corpus
    Accepted,
    /// Sentence goes to the rejection stream with its reason
    Rejected(RejectReason),
}

/// A rejected sentence, as written to the rejection stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    /// Why the sentence was rejected
    pub reason: RejectReason,
    /// The sentence text
    pub text: String,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.reason.tag(), self.text)
    }
}

/// Exact-match duplicate suppression, scoped to one run
///
/// Passed explicitly through the pipeline driver; never a process-wide
/// singleton. Not persisted across runs.
#[derive(Debug, Clone, Default)]
pub struct SeenSet(HashSet<String>);

impl SeenSet {
    /// Empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the exact string was already accepted
    pub fn contains(&self, sentence: &str) -> bool {
        self.0.contains(sentence)
    }

    /// Record an accepted sentence
    pub fn insert(&mut self, sentence: &str) -> bool {
        self.0.insert(sentence.to_string())
    }

    /// Number of accepted sentences so far
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing has been accepted yet
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

const DISALLOWED_SYMBOLS: [char; 13] = [
    '<', '>', '+', '*', '\\', '#', '@', '^', '[', ']', '(', ')', '/',
];

const SEPARATORS: [char; 9] = [',', '.', '?', '!', '"', ';', '|', '`', '\t'];

const APOSTROPHES: [char; 4] = ['\'', '\u{2018}', '\u{2019}', '\u{02BC}'];

static ABBREVIATION: OnceLock<Regex> = OnceLock::new();

fn abbreviation_pattern() -> &'static Regex {
    ABBREVIATION.get_or_init(|| {
        Regex::new(r"[A-Z]{2,}|[A-Z]\.+[A-Z]").expect("abbreviation pattern is valid")
    })
}

fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c) || APOSTROPHES.contains(&c) || c.is_whitespace()
}

/// Split on separator, apostrophe, and whitespace characters
pub fn tokenize(sentence: &str) -> Vec<&str> {
    sentence
        .split(is_separator)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Ordered acceptance filters plus duplicate suppression
#[derive(Debug, Clone)]
pub struct FilterChain {
    min_words: usize,
    max_words: usize,
    alphabet: HashSet<char>,
}

impl FilterChain {
    /// Build a chain; word-count bounds are exclusive on both sides and
    /// the alphabet is case-folded
    pub fn new(min_words: usize, max_words: usize, alphabet: &str) -> Result<Self> {
        if alphabet.is_empty() {
            return Err(CoreError::EmptyAlphabet);
        }
        if min_words + 1 >= max_words {
            return Err(CoreError::InvalidBounds {
                min: min_words,
                max: max_words,
            });
        }
        let mut folded = HashSet::new();
        for c in alphabet.chars() {
            folded.insert(c);
            folded.extend(c.to_uppercase());
            folded.extend(c.to_lowercase());
        }
        Ok(Self {
            min_words,
            max_words,
            alphabet: folded,
        })
    }

    /// Evaluate one sentence; the first failing filter decides the
    /// reason. Accepted sentences are recorded in `seen`.
    pub fn evaluate(&self, sentence: &str, seen: &mut SeenSet) -> FilterVerdict {
        use FilterVerdict::Rejected;

        if sentence.chars().any(|c| c.is_ascii_digit()) {
            return Rejected(RejectReason::Numbers);
        }
        if sentence.chars().any(|c| DISALLOWED_SYMBOLS.contains(&c)) {
            return Rejected(RejectReason::Symbols);
        }
        if abbreviation_pattern().is_match(sentence) {
            return Rejected(RejectReason::Abbreviation);
        }
        let tokens = tokenize(sentence);
        if tokens.len() <= self.min_words || tokens.len() >= self.max_words {
            return Rejected(RejectReason::TooLong);
        }
        if tokens.iter().any(|token| !self.in_alphabet(token)) {
            return Rejected(RejectReason::OutOfAlphabet);
        }
        if seen.contains(sentence) {
            return Rejected(RejectReason::Duplicate);
        }
        seen.insert(sentence);
        FilterVerdict::Accepted
    }

    fn in_alphabet(&self, token: &str) -> bool {
        token.chars().any(|c| self.alphabet.contains(&c))
    }
}
