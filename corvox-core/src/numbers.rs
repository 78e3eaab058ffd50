//! Digit-sequence expansion into spoken word form
//!
//! Splits text into numeric and non-numeric spans and rewrites each
//! numeric span as cardinal, decimal, or ordinal words. Unconvertible
//! spans keep their original text; non-numeric spans pass through
//! verbatim.

use regex::Regex;
use std::sync::{Arc, OnceLock};

/// Locale-specific number-to-words capability
///
/// Cardinal and ordinal naming rules differ per target language; the
/// expander composes whole-text rewriting on top of this vocabulary.
/// Out-of-range values return None and the caller keeps the digits.
pub trait NumberSpeller: Send + Sync {
    /// Spell an integer in cardinal form
    fn cardinal(&self, n: i64) -> Option<String>;

    /// Spell a positive integer in ordinal form (French 1 → "premier")
    fn ordinal(&self, n: i64) -> Option<String>;

    /// Word spoken for the decimal separator ("virgule", "point")
    fn decimal_separator(&self) -> &str;

    /// Suffixes recognized after a digit run as ordinal markers
    /// ("er", "e", ... / "st", "nd", ...)
    fn ordinal_suffixes(&self) -> &[&str];
}

static NUMERIC_SPAN: OnceLock<Regex> = OnceLock::new();

/// Grouped integers ("1 234 567", non-breaking spaces included), decimals
/// with comma or period, and digit runs with trailing word characters
/// ("25e"), in that priority order.
fn numeric_span() -> &'static Regex {
    NUMERIC_SPAN.get_or_init(|| {
        Regex::new(r"\d+(?:[ \u{00A0}]\d{3})+(?:[.,]\d+)?|\d+[.,]\d+|\d+\p{L}*")
            .expect("numeric span pattern is valid")
    })
}

/// Rewrites the numeric spans of a text into their word form
pub struct NumericExpander {
    speller: Arc<dyn NumberSpeller>,
}

impl NumericExpander {
    /// Create an expander over the given locale vocabulary
    pub fn new(speller: Arc<dyn NumberSpeller>) -> Self {
        Self { speller }
    }

    /// Expand every recognizable numeric span of `text`
    pub fn expand(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for span in numeric_span().find_iter(text) {
            out.push_str(&text[last..span.start()]);
            match self.convert_span(span.as_str()) {
                Some(words) => out.push_str(&words),
                None => out.push_str(span.as_str()),
            }
            last = span.end();
        }
        out.push_str(&text[last..]);
        out
    }

    /// Attempted conversions in order: integer, decimal, ordinal
    fn convert_span(&self, span: &str) -> Option<String> {
        let compact: String = span
            .chars()
            .filter(|c| *c != ' ' && *c != '\u{00A0}')
            .collect();

        if let Ok(n) = compact.parse::<i64>() {
            return self.speller.cardinal(n);
        }
        if compact.contains([',', '.']) {
            if let Some(words) = self.convert_decimal(&compact) {
                return Some(words);
            }
        }
        self.convert_ordinal(span)
    }

    fn convert_decimal(&self, compact: &str) -> Option<String> {
        let normalized = compact.replace(',', ".");
        let (int_part, frac_part) = normalized.split_once('.')?;
        if int_part.is_empty() || frac_part.is_empty() || frac_part.contains('.') {
            return None;
        }
        let integer: i64 = int_part.parse().ok()?;
        if !frac_part.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let mut words = self.speller.cardinal(integer)?;
        words.push(' ');
        words.push_str(self.speller.decimal_separator());
        words.push(' ');
        words.push_str(&self.spell_fraction(frac_part)?);
        Some(words)
    }

    /// Fraction digits: leading zeros spelled one by one, the remainder as
    /// one integer ("05" → "zéro cinq")
    fn spell_fraction(&self, digits: &str) -> Option<String> {
        let mut parts = Vec::new();
        let trimmed = digits.trim_start_matches('0');
        for _ in 0..digits.len() - trimmed.len() {
            parts.push(self.speller.cardinal(0)?);
        }
        if !trimmed.is_empty() {
            parts.push(self.speller.cardinal(trimmed.parse().ok()?)?);
        }
        Some(parts.join(" "))
    }

    fn convert_ordinal(&self, span: &str) -> Option<String> {
        let digits_end = span.find(|c: char| !c.is_ascii_digit())?;
        if digits_end == 0 {
            return None;
        }
        let (digits, suffix) = span.split_at(digits_end);
        if !self.speller.ordinal_suffixes().contains(&suffix) {
            return None;
        }
        self.speller.ordinal(digits.parse().ok()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal vocabulary: spells n as "c<n>" / "o<n>" so the tests stay
    /// independent of any real locale
    struct StubSpeller;

    impl NumberSpeller for StubSpeller {
        fn cardinal(&self, n: i64) -> Option<String> {
            (n < 10_000).then(|| format!("c{n}"))
        }

        fn ordinal(&self, n: i64) -> Option<String> {
            Some(format!("o{n}"))
        }

        fn decimal_separator(&self) -> &str {
            "comma"
        }

        fn ordinal_suffixes(&self) -> &[&str] {
            &["e", "er"]
        }
    }

    fn expander() -> NumericExpander {
        NumericExpander::new(Arc::new(StubSpeller))
    }

    #[test]
    fn test_integer_span() {
        assert_eq!(expander().expand("12 personnes"), "c12 personnes");
    }

    #[test]
    fn test_grouped_integer_span() {
        // Group separators removed before parsing
        assert_eq!(expander().expand("1\u{00A0}234 euros"), "c1234 euros");
        assert_eq!(expander().expand("1 234 567 pas"), "1 234 567 pas");
    }

    #[test]
    fn test_decimal_span() {
        assert_eq!(expander().expand("3,5 km"), "c3 comma c5 km");
        assert_eq!(expander().expand("3.05 m"), "c3 comma c0 c5 m");
    }

    #[test]
    fn test_ordinal_span() {
        assert_eq!(expander().expand("le 25e jour"), "le o25 jour");
        assert_eq!(expander().expand("1er étage"), "o1 étage");
    }

    #[test]
    fn test_unknown_suffix_kept_verbatim() {
        assert_eq!(expander().expand("25km restants"), "25km restants");
    }

    #[test]
    fn test_out_of_range_kept_verbatim() {
        // StubSpeller gives up past 9999; the span must survive unchanged
        assert_eq!(expander().expand("12345 mètres"), "12345 mètres");
    }

    #[test]
    fn test_non_numeric_text_verbatim() {
        assert_eq!(expander().expand("aucun chiffre ici"), "aucun chiffre ici");
    }
}
