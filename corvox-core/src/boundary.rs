//! Sentence-start override policy
//!
//! Refines the base segmenter's default guesses token by token. The rules
//! deliberately trade recall for precision: a suppressed split merges two
//! sentences, a wrong split produces garbage fragments.

use crate::token::{Token, TokenKind};

/// No sentence ever starts right after these
const NO_START_AFTER: [&str; 2] = [";", ","];

/// A sentence always starts right after these, unless an earlier rule
/// already suppressed it
const FORCE_START_AFTER: [&str; 5] = [".", "!", "?", "...", "…"];

/// Apply the override rules in priority order; the first matching rule
/// wins per token. Space tokens are transparent for adjacency.
pub fn apply_boundary_overrides(tokens: &mut [Token]) {
    let significant: Vec<usize> = tokens
        .iter()
        .enumerate()
        .filter(|(_, t)| t.kind != TokenKind::Space)
        .map(|(i, _)| i)
        .collect();

    for pair in significant.windows(2) {
        let (prev, cur) = (pair[0], pair[1]);
        if let Some(start) = decide(&tokens[prev], &tokens[cur]) {
            tokens[cur].sent_start = start;
        }
    }
}

fn decide(prev: &Token, cur: &Token) -> Option<bool> {
    if NO_START_AFTER.contains(&prev.text.as_str()) {
        return Some(false);
    }
    // Protects against false splits after abbreviations and initials
    if cur.starts_lowercase() {
        return Some(false);
    }
    if cur.kind == TokenKind::Punct && cur.text != "-" {
        return Some(false);
    }
    if FORCE_START_AFTER.contains(&prev.text.as_str()) {
        return Some(true);
    }
    None
}
