//! Typographic and abbreviation normalization
//!
//! An ordered list of rewrite rules applied to raw text, followed by a
//! conversion pass over standalone roman-numeral runs. Rule order is part
//! of the contract: later rules see the output of earlier ones.

use crate::error::{CoreError, Result};
use regex::Regex;

/// How a rule matches text
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Literal substring replacement
    Literal(String),
    /// Regular-expression substitution
    Pattern(Regex),
}

/// One (matcher, replacement) rewrite rule
#[derive(Debug, Clone)]
pub struct NormRule {
    matcher: Matcher,
    replacement: String,
}

impl NormRule {
    /// Literal substring rule
    pub fn literal(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            matcher: Matcher::Literal(pattern.into()),
            replacement: replacement.into(),
        }
    }

    /// Regex rule; the replacement may reference capture groups (`$1`, ...)
    pub fn pattern(pattern: &str, replacement: impl Into<String>) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| CoreError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            matcher: Matcher::Pattern(regex),
            replacement: replacement.into(),
        })
    }

    /// Apply this rule to `text`
    pub fn apply(&self, text: &str) -> String {
        match &self.matcher {
            Matcher::Literal(pattern) => text.replace(pattern.as_str(), &self.replacement),
            Matcher::Pattern(regex) => regex
                .replace_all(text, self.replacement.as_str())
                .into_owned(),
        }
    }
}

/// Ordered rewrite pass over raw text
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    rules: Vec<NormRule>,
}

impl Normalizer {
    /// Build from an ordered rule list
    pub fn new(rules: Vec<NormRule>) -> Self {
        Self { rules }
    }

    /// Rule list accessor, for inspection and rule-by-rule tests
    pub fn rules(&self) -> &[NormRule] {
        &self.rules
    }

    /// Apply all rules in order, then convert standalone roman-numeral runs
    /// to decimal form
    pub fn normalize(&self, text: &str) -> String {
        let mut value = text.to_string();
        for rule in &self.rules {
            value = rule.apply(&value);
        }
        convert_roman_runs(&value)
    }
}

/// Parse a roman-numeral run built from X, V, and I
///
/// Returns None for sequences violating standard construction ("IIII",
/// "VV", "IXI"); callers keep the original text in that case.
pub fn roman_to_decimal(run: &str) -> Option<u32> {
    if run.is_empty() {
        return None;
    }
    let tens = run.len() - run.trim_start_matches('X').len();
    if tens > 3 {
        return None;
    }
    let units = match &run[tens..] {
        "" => 0,
        "IX" => 9,
        "IV" => 4,
        rest => {
            let (five, ones_part) = match rest.strip_prefix('V') {
                Some(remainder) => (5, remainder),
                None => (0, rest),
            };
            if !ones_part.chars().all(|c| c == 'I') || ones_part.len() > 3 {
                return None;
            }
            five + ones_part.len() as u32
        }
    };
    if tens == 0 && units == 0 {
        return None;
    }
    Some(tens as u32 * 10 + units)
}

/// Replace boundary-delimited roman runs by their decimal form
///
/// A run followed by a letter is part of a word ("XIVe", "TAXI") and stays
/// untouched. Single-letter runs only convert before a degree sign, so
/// English "I" survives.
fn convert_roman_runs(text: &str) -> String {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut runs: Vec<(usize, usize, bool)> = Vec::new();

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i].1;
        let starts_run = matches!(c, 'X' | 'V' | 'I')
            && (i == 0 || !chars[i - 1].1.is_alphabetic());
        if !starts_run {
            i += 1;
            continue;
        }
        let start = chars[i].0;
        let mut j = i;
        while j < chars.len() && matches!(chars[j].1, 'X' | 'V' | 'I') {
            j += 1;
        }
        let next = chars.get(j).map(|&(_, ch)| ch);
        if next.map_or(true, |ch| !ch.is_alphabetic()) {
            let end = chars.get(j).map_or(text.len(), |&(pos, _)| pos);
            runs.push((start, end, next == Some('°')));
        }
        i = j;
    }

    let mut value = text.to_string();
    for &(start, end, before_degree) in runs.iter().rev() {
        let run = &text[start..end];
        if run.len() == 1 && !before_degree {
            continue;
        }
        if let Some(decimal) = roman_to_decimal(run) {
            value.replace_range(start..end, &decimal.to_string());
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(super) fn fixture_rules() -> Vec<NormRule> {
        vec![
            NormRule::literal("\u{00A0}", " "),
            NormRule::pattern(r"\[\d+\]", "").unwrap(),
            NormRule::pattern(r"\bM\. ", "Monsieur ").unwrap(),
            NormRule::literal("%", "pourcent"),
            NormRule::pattern(r" {2,}", " ").unwrap(),
        ]
    }

    #[test]
    fn test_rules_apply_in_order() {
        let normalizer = Normalizer::new(fixture_rules());
        assert_eq!(
            normalizer.normalize("M.\u{00A0}Dupont arrive"),
            "Monsieur Dupont arrive"
        );
    }

    #[test]
    fn test_reference_markers_removed() {
        let normalizer = Normalizer::new(fixture_rules());
        assert_eq!(
            normalizer.normalize("La commune[12] est ancienne[3]."),
            "La commune est ancienne."
        );
    }

    #[test]
    fn test_percent_sign_expanded() {
        let normalizer = Normalizer::new(fixture_rules());
        assert_eq!(normalizer.normalize("dix %"), "dix pourcent");
    }

    #[test]
    fn test_title_rule_respects_word_boundary() {
        let normalizer = Normalizer::new(fixture_rules());
        // "ADAM. Il" must not be rewritten into "ADAMonsieur Il"
        assert_eq!(normalizer.normalize("ADAM. Il entre"), "ADAM. Il entre");
    }

    #[test]
    fn test_roman_parse() {
        assert_eq!(roman_to_decimal("XIV"), Some(14));
        assert_eq!(roman_to_decimal("XXXIX"), Some(39));
        assert_eq!(roman_to_decimal("IX"), Some(9));
        assert_eq!(roman_to_decimal("VII"), Some(7));
        assert_eq!(roman_to_decimal("IIII"), None);
        assert_eq!(roman_to_decimal("VV"), None);
        assert_eq!(roman_to_decimal("IXI"), None);
        assert_eq!(roman_to_decimal(""), None);
    }

    #[test]
    fn test_roman_run_conversion() {
        let normalizer = Normalizer::new(Vec::new());
        assert_eq!(normalizer.normalize("Louis XIV régna."), "Louis 14 régna.");
        assert_eq!(normalizer.normalize("le XX siècle"), "le 20 siècle");
    }

    #[test]
    fn test_roman_run_inside_word_untouched() {
        let normalizer = Normalizer::new(Vec::new());
        assert_eq!(normalizer.normalize("un TAXI jaune"), "un TAXI jaune");
        assert_eq!(normalizer.normalize("le XIVe siècle"), "le XIVe siècle");
    }

    #[test]
    fn test_single_letter_run_needs_degree_sign() {
        let normalizer = Normalizer::new(Vec::new());
        assert_eq!(normalizer.normalize("I am here"), "I am here");
        assert_eq!(normalizer.normalize("titre V° du code"), "titre 5° du code");
    }

    #[test]
    fn test_malformed_run_left_unmodified() {
        let normalizer = Normalizer::new(Vec::new());
        assert_eq!(normalizer.normalize("tome IIII est rare"), "tome IIII est rare");
    }

    #[test]
    fn test_normalize_is_idempotent_on_fixture() {
        let normalizer = Normalizer::new(fixture_rules());
        let once = normalizer.normalize("M. Dupont  a  10\u{00A0}% [4] de XIV");
        assert_eq!(normalizer.normalize(&once), once);
    }
}

#[cfg(test)]
mod prop_tests {
    use super::tests::fixture_rules;
    use super::*;
    use proptest::prelude::*;

    proptest! {
        // No rule of the built-in shape re-triggers its own pattern, so a
        // second pass must be a no-op on anything the first pass produced.
        #[test]
        fn normalize_is_idempotent(input in "[a-zA-Z0-9àéèêëç \u{00A0}.,%!?';:-]{0,60}") {
            let normalizer = Normalizer::new(fixture_rules());
            let once = normalizer.normalize(&input);
            prop_assert_eq!(normalizer.normalize(&once), once);
        }
    }
}
