//! Non-prose detection
//!
//! Dramatic and template-derived source text carries speaker-name
//! prefixes and capitalized stage directions that punctuation alone
//! cannot distinguish from prose. The classifier runs an ordered list of
//! predicate rules over a candidate's tokens, first match wins; the
//! per-document frequency profile tells structural tokens from lexical
//! ones.

use crate::frequency::FrequencyProfile;
use crate::token::{is_all_uppercase, SentenceCandidate, Token, TokenKind};
use regex::Regex;
use std::sync::OnceLock;

/// Candidates with fewer word tokens than this are not real sentences
const MIN_WORDS: usize = 4;

/// Outcome of one classifier rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Not prose; drop the candidate entirely
    Discard,
    /// Speaker-name prefix; drop the first n non-space tokens, keep the rest
    StripLeading(usize),
}

type RuleFn = fn(&[&Token], &str, &FrequencyProfile) -> Option<Decision>;

/// The rule table, evaluated in order; the first rule returning a
/// decision wins. Each entry is independently testable.
pub const RULES: &[(&str, RuleFn)] = &[
    ("too-few-words", too_few_words),
    ("caps-then-punct", caps_then_punct),
    ("common-expression-prefix", common_expression_prefix),
    ("double-caps-prefix", double_caps_prefix),
    ("caps-speaker-prefix", caps_speaker_prefix),
    ("all-caps-sentence", all_caps_sentence),
    ("common-expression-sentence", common_expression_sentence),
];

/// Classify a candidate against its document profile
///
/// None discards the candidate; Some returns it, possibly with a
/// speaker-name prefix stripped.
pub fn classify(
    mut candidate: SentenceCandidate,
    profile: &FrequencyProfile,
) -> Option<SentenceCandidate> {
    candidate.strip_leading_trivia();
    if candidate.is_empty() {
        return None;
    }

    let decision = {
        let significant: Vec<&Token> = candidate
            .tokens()
            .iter()
            .filter(|t| t.kind != TokenKind::Space)
            .collect();
        let text = candidate.text();
        RULES
            .iter()
            .find_map(|(_, rule)| rule(&significant, &text, profile))
    };

    match decision {
        Some(Decision::Discard) => None,
        Some(Decision::StripLeading(n)) => {
            candidate.strip_significant(n);
            (!candidate.is_empty()).then_some(candidate)
        }
        None => Some(candidate),
    }
}

fn too_few_words(significant: &[&Token], _: &str, _: &FrequencyProfile) -> Option<Decision> {
    let words = significant
        .iter()
        .filter(|t| t.kind == TokenKind::Word)
        .count();
    (words < MIN_WORDS).then_some(Decision::Discard)
}

/// "DUPONT, hésitant, …" — a name with an appositive is a stage direction
fn caps_then_punct(significant: &[&Token], _: &str, _: &FrequencyProfile) -> Option<Decision> {
    match (significant.first(), significant.get(1)) {
        (Some(first), Some(second))
            if first.is_upper() && second.kind == TokenKind::Punct =>
        {
            Some(Decision::Discard)
        }
        _ => None,
    }
}

/// A frequent word or bigram opening the candidate, then punctuation:
/// "Le marquis, hésitant" where "Le marquis" recurs in the document
fn common_expression_prefix(
    significant: &[&Token],
    _: &str,
    profile: &FrequencyProfile,
) -> Option<Decision> {
    if let (Some(first), Some(second)) = (significant.first(), significant.get(1)) {
        if profile.contains(&first.text) && second.kind == TokenKind::Punct {
            return Some(Decision::Discard);
        }
    }
    if let (Some(first), Some(second), Some(third)) =
        (significant.first(), significant.get(1), significant.get(2))
    {
        if first.kind == TokenKind::Word && second.kind == TokenKind::Word {
            let bigram = format!("{} {}", first.text, second.text);
            if profile.contains(&bigram) && third.kind == TokenKind::Punct {
                return Some(Decision::Discard);
            }
        }
    }
    None
}

/// Two all-caps tokens open the candidate: "LA COMTESSE, troublée" is a
/// stage direction, "LA COMTESSE Venez ici" is a speaker name before a line
fn double_caps_prefix(significant: &[&Token], _: &str, _: &FrequencyProfile) -> Option<Decision> {
    let (first, second) = match (significant.first(), significant.get(1)) {
        (Some(a), Some(b)) => (a, b),
        _ => return None,
    };
    if !(first.is_upper() && second.is_upper()) {
        return None;
    }
    match significant.get(2) {
        Some(third) if third.kind == TokenKind::Punct => Some(Decision::Discard),
        Some(third) if third.is_capitalized() => Some(Decision::StripLeading(2)),
        _ => None,
    }
}

/// One all-caps token before a capitalized word: speaker name before a line
fn caps_speaker_prefix(significant: &[&Token], _: &str, _: &FrequencyProfile) -> Option<Decision> {
    let (first, second) = match (significant.first(), significant.get(1)) {
        (Some(a), Some(b)) => (a, b),
        _ => return None,
    };
    if first.is_upper() && second.kind != TokenKind::Punct && second.is_capitalized() {
        return Some(Decision::StripLeading(1));
    }
    None
}

/// "IN THE WORKSHOP" — headings and captions come through in full caps
fn all_caps_sentence(_: &[&Token], text: &str, _: &FrequencyProfile) -> Option<Decision> {
    is_all_uppercase(text).then_some(Decision::Discard)
}

fn common_expression_sentence(
    _: &[&Token],
    text: &str,
    profile: &FrequencyProfile,
) -> Option<Decision> {
    profile.contains(text).then_some(Decision::Discard)
}

static URL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn url_pattern() -> &'static Regex {
    URL_PATTERN.get_or_init(|| {
        Regex::new(
            r"(?i)\bhttps?://\S+|\bwww\.\S+|\b[a-z0-9][a-z0-9.-]*\.(?:com|net|org|edu|gov|info|io|fr)(?:/\S*)?\b",
        )
        .expect("url pattern is valid")
    })
}

/// Wiki-template and maintenance leftovers recognizable before segmentation
const ARTIFACT_MARKERS: [&str; 6] = ["Fichier:", "Image:", "File:", "Catégorie:", "|", "!!"];

/// True for lines that are markup leftovers or link spam rather than prose
pub fn is_markup_artifact(text: &str) -> bool {
    if ARTIFACT_MARKERS.iter().any(|marker| text.contains(marker)) {
        return true;
    }
    url_pattern().is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Token;
    use std::collections::HashSet;

    fn candidate_from(text: &str) -> SentenceCandidate {
        // Word/punct/space split good enough for classifier tests
        let mut tokens = Vec::new();
        for part in text.split_inclusive(' ') {
            let word = part.trim_end_matches(' ');
            let trailing_spaces = part.len() - word.len();
            let mut w = word;
            while let Some(stripped) = w.strip_suffix(['.', ',', '!', '?']) {
                w = stripped;
            }
            if !w.is_empty() {
                tokens.push(Token::new(w, TokenKind::Word));
            }
            for c in word[w.len()..].chars() {
                tokens.push(Token::new(c.to_string(), TokenKind::Punct));
            }
            if trailing_spaces > 0 {
                tokens.push(Token::new(" ", TokenKind::Space));
            }
        }
        SentenceCandidate::new(tokens)
    }

    fn empty_profile() -> FrequencyProfile {
        FrequencyProfile::default()
    }

    fn profile_with(words: &[&str]) -> FrequencyProfile {
        let tokens: Vec<Token> = words
            .iter()
            .flat_map(|w| std::iter::repeat(*w).take(3))
            .map(|w| Token::new(w, TokenKind::Word))
            .collect();
        FrequencyProfile::build(&tokens, &HashSet::new())
    }

    #[test]
    fn test_stage_direction_discarded() {
        let candidate = candidate_from("DUPONT, hésitant, entre dans la pièce.");
        assert!(classify(candidate, &empty_profile()).is_none());
    }

    #[test]
    fn test_too_short_discarded() {
        let candidate = candidate_from("Il entre vite.");
        assert!(classify(candidate, &empty_profile()).is_none());
    }

    #[test]
    fn test_speaker_prefix_stripped() {
        let candidate = candidate_from("DUPONT Je ne vous crois pas du tout.");
        let kept = classify(candidate, &empty_profile()).unwrap();
        assert_eq!(kept.text(), "Je ne vous crois pas du tout.");
    }

    #[test]
    fn test_double_speaker_prefix_stripped() {
        let candidate = candidate_from("LA COMTESSE Venez donc par ici maintenant.");
        let kept = classify(candidate, &empty_profile()).unwrap();
        assert_eq!(kept.text(), "Venez donc par ici maintenant.");
    }

    #[test]
    fn test_double_caps_then_punct_discarded() {
        let candidate = candidate_from("LA COMTESSE, troublée, quitte la scène doucement.");
        assert!(classify(candidate, &empty_profile()).is_none());
    }

    #[test]
    fn test_all_caps_sentence_discarded() {
        let candidate = candidate_from("DANS LE GRAND ATELIER DU PEINTRE.");
        assert!(classify(candidate, &empty_profile()).is_none());
    }

    #[test]
    fn test_frequent_prefix_discarded() {
        let profile = profile_with(&["Rideau"]);
        let candidate = candidate_from("Rideau, acte deux commence dès maintenant.");
        assert!(classify(candidate, &profile).is_none());
    }

    #[test]
    fn test_plain_prose_kept_unchanged() {
        let candidate = candidate_from("Jean mange une pomme rouge.");
        let kept = classify(candidate, &empty_profile()).unwrap();
        assert_eq!(kept.text(), "Jean mange une pomme rouge.");
    }

    #[test]
    fn test_leading_trivia_stripped_before_rules() {
        let candidate = candidate_from(", mais il revient toujours ici.");
        let kept = classify(candidate, &empty_profile()).unwrap();
        assert_eq!(kept.text(), "mais il revient toujours ici.");
    }

    #[test]
    fn test_markup_artifacts() {
        assert!(is_markup_artifact("Fichier:carte.png"));
        assert!(is_markup_artifact("valeur !! autre valeur"));
        assert!(is_markup_artifact("voir https://exemple.org/page"));
        assert!(is_markup_artifact("colonne | colonne"));
        assert!(!is_markup_artifact("Une phrase parfaitement normale."));
    }
}
