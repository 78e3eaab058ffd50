//! Per-locale rule sets
//!
//! Alphabets, stopword lists, built-in normalization tables, and number
//! spellers for the supported target languages. Everything here is data
//! the pipeline consumes; the algorithms live in `corvox-core`.

mod english;
mod french;

pub use english::EnglishSpeller;
pub use french::FrenchSpeller;

use crate::error::{EngineError, Result};
use corvox_core::{NormRule, NumberSpeller};
use std::collections::HashSet;
use std::sync::Arc;

/// Everything locale-specific the pipeline needs
pub struct LocaleRules {
    /// Locale code
    pub code: &'static str,
    /// Accented-letter alphabet, lowercase; the filter chain case-folds it
    pub alphabet: &'static str,
    /// Stopwords excluded from frequency statistics
    pub stopwords: HashSet<String>,
    /// Built-in normalization table, in application order
    pub rules: Vec<NormRule>,
    /// Number-to-words capability
    pub speller: Arc<dyn NumberSpeller>,
}

impl std::fmt::Debug for LocaleRules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleRules")
            .field("code", &self.code)
            .field("rules", &self.rules.len())
            .finish()
    }
}

/// Look up the rule set for a locale code
pub fn for_locale(code: &str) -> Result<LocaleRules> {
    match code {
        "fr" | "french" => french::rules(),
        "en" | "english" => english::rules(),
        _ => Err(EngineError::UnsupportedLocale {
            code: code.to_string(),
        }),
    }
}

/// Superscript and subscript digit characters folded to ASCII digits by
/// every locale's normalization table
pub(crate) const SCRIPT_DIGITS: &[(&str, &str)] = &[
    ("\u{2070}", "0"),
    ("\u{00B9}", "1"),
    ("\u{00B2}", "2"),
    ("\u{00B3}", "3"),
    ("\u{2074}", "4"),
    ("\u{2075}", "5"),
    ("\u{2076}", "6"),
    ("\u{2077}", "7"),
    ("\u{2078}", "8"),
    ("\u{2079}", "9"),
    ("\u{2080}", "0"),
    ("\u{2081}", "1"),
    ("\u{2082}", "2"),
    ("\u{2083}", "3"),
    ("\u{2084}", "4"),
    ("\u{2085}", "5"),
    ("\u{2086}", "6"),
    ("\u{2087}", "7"),
    ("\u{2088}", "8"),
    ("\u{2089}", "9"),
];

/// Shared tail of every locale table: spacing and stray-parenthesis
/// cleanup that must run after the locale-specific rewrites
pub(crate) fn common_cleanup_rules() -> corvox_core::error::Result<Vec<NormRule>> {
    Ok(vec![
        NormRule::literal("(", ""),
        NormRule::literal(")", ""),
        NormRule::pattern(r" \.", ".")?,
        NormRule::pattern(r"\. $", ".")?,
        NormRule::literal(" ,  ", ", "),
        NormRule::literal(" , ", ", "),
        NormRule::pattern(r" {2,}", " ")?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_lookup() {
        assert!(for_locale("fr").is_ok());
        assert!(for_locale("french").is_ok());
        assert!(for_locale("en").is_ok());
        assert!(for_locale("english").is_ok());
        assert!(matches!(
            for_locale("tlh"),
            Err(EngineError::UnsupportedLocale { .. })
        ));
    }

    #[test]
    fn test_locale_tables_are_nonempty() {
        for code in ["fr", "en"] {
            let locale = for_locale(code).unwrap();
            assert!(!locale.rules.is_empty());
            assert!(!locale.stopwords.is_empty());
            assert!(!locale.alphabet.is_empty());
        }
    }
}
