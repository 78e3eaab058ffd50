//! Base segmentation
//!
//! Produces the default token stream the boundary policy refines: a
//! character-class tokenizer plus a naive terminator-based sentence-start
//! guesser. Kept behind a trait so a smarter segmenter can slot in
//! without touching the pipeline.

use corvox_core::{apply_boundary_overrides, SentenceCandidate, Token, TokenKind};

/// Base segmenter contract: tokenize text and guess sentence starts
pub trait Segmenter {
    /// Tokenize `text` into a stream carrying default sentence-start
    /// guesses
    fn segment(&self, text: &str) -> Vec<Token>;
}

/// Character-class tokenizer with terminator-based start guesses
///
/// Words are alphanumeric runs, whitespace collapses into one SPACE
/// token, dot runs of three or more become a single ellipsis token, and
/// every other character is its own PUNCT token.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleSegmenter;

impl RuleSegmenter {
    /// Tokenize, guess, apply the boundary overrides, and split the
    /// stream into sentence candidates
    pub fn candidates(&self, text: &str) -> Vec<SentenceCandidate> {
        let mut tokens = self.segment(text);
        apply_boundary_overrides(&mut tokens);
        SentenceCandidate::split_stream(tokens)
    }
}

impl Segmenter for RuleSegmenter {
    fn segment(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut chars = text.chars().peekable();

        while let Some(&c) = chars.peek() {
            if c.is_whitespace() {
                let mut run = String::new();
                while let Some(&c) = chars.peek() {
                    if !c.is_whitespace() {
                        break;
                    }
                    run.push(c);
                    chars.next();
                }
                tokens.push(Token::new(run, TokenKind::Space));
            } else if c.is_alphanumeric() {
                let mut run = String::new();
                while let Some(&c) = chars.peek() {
                    if !c.is_alphanumeric() {
                        break;
                    }
                    run.push(c);
                    chars.next();
                }
                tokens.push(Token::new(run, TokenKind::Word));
            } else if c == '.' {
                let mut dots = String::new();
                while let Some(&c) = chars.peek() {
                    if c != '.' {
                        break;
                    }
                    dots.push(c);
                    chars.next();
                }
                if dots.len() >= 3 {
                    tokens.push(Token::new("...", TokenKind::Punct));
                } else {
                    for _ in 0..dots.len() {
                        tokens.push(Token::new(".", TokenKind::Punct));
                    }
                }
            } else {
                chars.next();
                tokens.push(Token::new(c.to_string(), TokenKind::Punct));
            }
        }

        // Default guesses: document start and anything after a terminator
        let mut start_next = true;
        for token in tokens.iter_mut() {
            if token.kind == TokenKind::Space {
                continue;
            }
            token.sent_start = start_next;
            start_next = matches!(token.text.as_str(), "." | "!" | "?" | "..." | "…");
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_kinds() {
        let tokens = RuleSegmenter.segment("Jean mange, vite.");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Word,
                TokenKind::Space,
                TokenKind::Word,
                TokenKind::Punct,
                TokenKind::Space,
                TokenKind::Word,
                TokenKind::Punct,
            ]
        );
    }

    #[test]
    fn test_ellipsis_is_one_token() {
        let tokens = RuleSegmenter.segment("Attends... Voilà");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Attends", "...", " ", "Voilà"]);
    }

    #[test]
    fn test_default_guesses_after_terminators() {
        let tokens = RuleSegmenter.segment("Oui. Non");
        assert!(tokens[0].sent_start);
        assert!(!tokens[1].sent_start);
        assert!(tokens[3].sent_start);
    }

    #[test]
    fn test_candidates_respect_overrides() {
        // Lowercase after the abbreviation dot keeps one sentence
        let candidates = RuleSegmenter.candidates("Le Dr. dupont est venu. Il repart demain.");
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].text(), "Le Dr. dupont est venu.");
        assert_eq!(candidates[1].text(), "Il repart demain.");
    }

    #[test]
    fn test_apostrophe_words() {
        let tokens = RuleSegmenter.segment("l'homme");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["l", "'", "homme"]);
    }
}
