//! Token stream model shared by segmentation, the boundary policy, and the
//! non-prose classifier

use smallvec::SmallVec;

/// Coarse token category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Alphanumeric run
    Word,
    /// Punctuation character (ellipses count as one token)
    Punct,
    /// Whitespace run
    Space,
}

/// A single token with its segmentation context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface text as it appeared in the source
    pub text: String,
    /// Coarse category
    pub kind: TokenKind,
    /// Sentence-start mark; guessed by the segmenter, refined by the
    /// boundary policy
    pub sent_start: bool,
}

impl Token {
    /// Create a token with the sentence-start mark cleared
    pub fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            text: text.into(),
            kind,
            sent_start: false,
        }
    }

    /// True when every cased character is uppercase and at least one exists
    pub fn is_upper(&self) -> bool {
        is_all_uppercase(&self.text)
    }

    /// True for a token starting with an uppercase letter without being
    /// written in all caps ("Dupont", not "DUPONT")
    pub fn is_capitalized(&self) -> bool {
        self.text.chars().next().is_some_and(char::is_uppercase) && !self.is_upper()
    }

    /// True when the surface begins with a lowercase letter
    pub fn starts_lowercase(&self) -> bool {
        self.text.chars().next().is_some_and(char::is_lowercase)
    }
}

/// True when `text` contains a cased character and no lowercase one
pub fn is_all_uppercase(text: &str) -> bool {
    let mut has_cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

/// A proposed sentence: the token run between two sentence-start marks
///
/// Candidates may lose leading tokens during non-prose classification and
/// are frozen once acceptance filtering begins.
#[derive(Debug, Clone, Default)]
pub struct SentenceCandidate {
    tokens: SmallVec<[Token; 16]>,
}

impl SentenceCandidate {
    /// Build a candidate from tokens
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
        }
    }

    /// Token accessor
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// True when no token remains
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Reconstructed sentence text (surfaces concatenated, trimmed)
    pub fn text(&self) -> String {
        let joined: String = self.tokens.iter().map(|t| t.text.as_str()).collect();
        joined.trim().to_string()
    }

    /// Number of word tokens
    pub fn word_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Word)
            .count()
    }

    /// Drop leading punctuation and space tokens
    pub fn strip_leading_trivia(&mut self) {
        let keep = self
            .tokens
            .iter()
            .position(|t| t.kind == TokenKind::Word)
            .unwrap_or(self.tokens.len());
        self.tokens.drain(..keep);
    }

    /// Drop the first `n` non-space tokens together with the whitespace
    /// around them (speaker-name removal)
    pub fn strip_significant(&mut self, n: usize) {
        let mut seen = 0;
        let mut cut = self.tokens.len();
        for (i, t) in self.tokens.iter().enumerate() {
            if t.kind != TokenKind::Space {
                if seen == n {
                    cut = i;
                    break;
                }
                seen += 1;
            }
        }
        self.tokens.drain(..cut);
    }

    /// Split a token stream into candidates at sentence-start marks
    pub fn split_stream(tokens: impl IntoIterator<Item = Token>) -> Vec<SentenceCandidate> {
        let mut out = Vec::new();
        let mut current = SentenceCandidate::default();
        for token in tokens {
            if token.sent_start && !current.tokens.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            current.tokens.push(token);
        }
        if !current.tokens.is_empty() {
            out.push(current);
        }
        out
    }
}
