//! French locale rules

use super::{common_cleanup_rules, LocaleRules, SCRIPT_DIGITS};
use crate::error::Result;
use corvox_core::{NormRule, NumberSpeller};
use std::sync::Arc;

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzàâäçéèêëîïôöùûüÿæœ";

const STOPWORDS: &[&str] = &[
    "le", "la", "les", "un", "une", "des", "du", "de", "et", "ou", "mais",
    "donc", "or", "ni", "car", "que", "qui", "quoi", "dont", "où", "je",
    "tu", "il", "elle", "on", "nous", "vous", "ils", "elles", "se", "ce",
    "cette", "ces", "son", "sa", "ses", "leur", "leurs", "au", "aux", "en",
    "dans", "par", "pour", "sur", "avec", "sans", "sous", "est", "sont",
    "être", "avoir", "ne", "pas", "plus", "moins", "très",
];

pub(super) fn rules() -> Result<LocaleRules> {
    Ok(LocaleRules {
        code: "fr",
        alphabet: ALPHABET,
        stopwords: STOPWORDS.iter().map(|s| s.to_string()).collect(),
        rules: normalization_rules()?,
        speller: Arc::new(FrenchSpeller),
    })
}

/// Built-in rewrite table; order is part of the contract
fn normalization_rules() -> Result<Vec<NormRule>> {
    let mut rules = vec![
        NormRule::literal("\u{00A0}", " "),
        NormRule::pattern(r" \([^)]*\)", "")?,
        NormRule::pattern(r"\([^)]*\)", "")?,
        NormRule::pattern(r"\[\d+\]", "")?,
        NormRule::pattern(r"\bM\. ", "Monsieur ")?,
        NormRule::pattern(r"\bMme ", "Madame ")?,
        NormRule::pattern(r"\bMlles ", "Mademoiselles ")?,
        NormRule::pattern(r"\bMlle ", "Mademoiselle ")?,
        NormRule::pattern(r"\barr\. ", "arrondissement ")?,
        NormRule::literal("%", "pourcent"),
    ];
    for &(script, digit) in SCRIPT_DIGITS {
        rules.push(NormRule::literal(script, digit));
    }
    // thousands are space-separated in French; num2words-style spelling
    // wants them joined
    rules.push(NormRule::pattern(r"(\d) +(\d)", "$1$2")?);
    rules.extend(common_cleanup_rules()?);
    Ok(rules)
}

/// French number vocabulary
///
/// Follows traditional orthography ("vingt et un", "quatre-vingt-dix"),
/// matching the num2words forms the original corpus was built with.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrenchSpeller;

const UNITS: [&str; 17] = [
    "zéro", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit",
    "neuf", "dix", "onze", "douze", "treize", "quatorze", "quinze", "seize",
];

const TENS: [&str; 7] = [
    "", "", "vingt", "trente", "quarante", "cinquante", "soixante",
];

impl FrenchSpeller {
    fn below_twenty(n: u64) -> String {
        match n {
            0..=16 => UNITS[n as usize].to_string(),
            _ => format!("dix-{}", UNITS[(n - 10) as usize]),
        }
    }

    fn below_hundred(n: u64) -> String {
        match n {
            0..=19 => Self::below_twenty(n),
            20..=69 => {
                let tens = TENS[(n / 10) as usize];
                match n % 10 {
                    0 => tens.to_string(),
                    1 => format!("{tens} et un"),
                    unit => format!("{tens}-{}", UNITS[unit as usize]),
                }
            }
            70..=79 => match n {
                71 => "soixante et onze".to_string(),
                _ => format!("soixante-{}", Self::below_twenty(n - 60)),
            },
            80 => "quatre-vingts".to_string(),
            _ => format!("quatre-vingt-{}", Self::below_twenty(n - 80)),
        }
    }

    fn below_thousand(n: u64) -> String {
        let hundreds = n / 100;
        let rest = n % 100;
        if hundreds == 0 {
            return Self::below_hundred(rest);
        }
        let head = match (hundreds, rest) {
            (1, _) => "cent".to_string(),
            (h, 0) => format!("{} cents", UNITS[h as usize]),
            (h, _) => format!("{} cent", UNITS[h as usize]),
        };
        if rest == 0 {
            head
        } else {
            format!("{head} {}", Self::below_hundred(rest))
        }
    }

    /// "quatre-vingts" and "deux cents" lose their final s before "mille"
    fn thousands_multiplier(n: u64) -> String {
        let words = Self::below_thousand(n);
        if words.ends_with("vingts") || words.ends_with("cents") {
            words[..words.len() - 1].to_string()
        } else {
            words
        }
    }

    fn cardinal_words(n: u64) -> Option<String> {
        if n < 1_000 {
            return Some(Self::below_thousand(n));
        }
        if n < 1_000_000 {
            let thousands = n / 1_000;
            let rest = n % 1_000;
            let head = if thousands == 1 {
                "mille".to_string()
            } else {
                format!("{} mille", Self::thousands_multiplier(thousands))
            };
            return Some(Self::join(head, rest));
        }
        if n < 1_000_000_000 {
            let millions = n / 1_000_000;
            let rest = n % 1_000_000;
            let head = format!(
                "{} million{}",
                Self::below_thousand(millions),
                if millions > 1 { "s" } else { "" }
            );
            let tail = (rest > 0).then(|| Self::cardinal_words(rest)).flatten();
            return Some(match tail {
                Some(tail) => format!("{head} {tail}"),
                None => head,
            });
        }
        if n < 1_000_000_000_000 {
            let billions = n / 1_000_000_000;
            let rest = n % 1_000_000_000;
            let head = format!(
                "{} milliard{}",
                Self::below_thousand(billions),
                if billions > 1 { "s" } else { "" }
            );
            let tail = (rest > 0).then(|| Self::cardinal_words(rest)).flatten();
            return Some(match tail {
                Some(tail) => format!("{head} {tail}"),
                None => head,
            });
        }
        None
    }

    fn join(head: String, rest: u64) -> String {
        if rest == 0 {
            head
        } else {
            format!("{head} {}", Self::below_thousand(rest))
        }
    }
}

impl NumberSpeller for FrenchSpeller {
    fn cardinal(&self, n: i64) -> Option<String> {
        if n < 0 {
            let magnitude = n.checked_neg()?;
            return Some(format!("moins {}", self.cardinal(magnitude)?));
        }
        Self::cardinal_words(n as u64)
    }

    fn ordinal(&self, n: i64) -> Option<String> {
        if n <= 0 {
            return None;
        }
        if n == 1 {
            return Some("premier".to_string());
        }
        let mut base = Self::cardinal_words(n as u64)?;
        if base.ends_with("vingts") || base.ends_with("cents") {
            base.pop();
        }
        if base.ends_with('e') {
            base.pop();
        } else if base.ends_with("cinq") {
            base.push('u');
        } else if base.ends_with("neuf") {
            base.pop();
            base.push('v');
        }
        base.push_str("ième");
        Some(base)
    }

    fn decimal_separator(&self) -> &str {
        "virgule"
    }

    fn ordinal_suffixes(&self) -> &[&str] {
        &[
            "er", "re", "e", "è", "ère", "ème", "éme", "eme", "ier", "ière",
            "iere", "ieme",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cardinal(n: i64) -> String {
        FrenchSpeller.cardinal(n).unwrap()
    }

    fn ordinal(n: i64) -> String {
        FrenchSpeller.ordinal(n).unwrap()
    }

    #[test]
    fn test_units_and_teens() {
        assert_eq!(cardinal(0), "zéro");
        assert_eq!(cardinal(8), "huit");
        assert_eq!(cardinal(16), "seize");
        assert_eq!(cardinal(17), "dix-sept");
        assert_eq!(cardinal(19), "dix-neuf");
    }

    #[test]
    fn test_tens() {
        assert_eq!(cardinal(20), "vingt");
        assert_eq!(cardinal(21), "vingt et un");
        assert_eq!(cardinal(32), "trente-deux");
        assert_eq!(cardinal(61), "soixante et un");
    }

    #[test]
    fn test_seventies_and_nineties() {
        assert_eq!(cardinal(70), "soixante-dix");
        assert_eq!(cardinal(71), "soixante et onze");
        assert_eq!(cardinal(77), "soixante-dix-sept");
        assert_eq!(cardinal(80), "quatre-vingts");
        assert_eq!(cardinal(81), "quatre-vingt-un");
        assert_eq!(cardinal(90), "quatre-vingt-dix");
        assert_eq!(cardinal(99), "quatre-vingt-dix-neuf");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(cardinal(100), "cent");
        assert_eq!(cardinal(101), "cent un");
        assert_eq!(cardinal(200), "deux cents");
        assert_eq!(cardinal(201), "deux cent un");
        assert_eq!(cardinal(999), "neuf cent quatre-vingt-dix-neuf");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(cardinal(1_000), "mille");
        assert_eq!(cardinal(1_100), "mille cent");
        assert_eq!(cardinal(2_000), "deux mille");
        assert_eq!(cardinal(1_234), "mille deux cent trente-quatre");
        assert_eq!(cardinal(80_000), "quatre-vingt mille");
        assert_eq!(cardinal(200_000), "deux cent mille");
        assert_eq!(
            cardinal(1_990),
            "mille neuf cent quatre-vingt-dix"
        );
    }

    #[test]
    fn test_millions_and_beyond() {
        assert_eq!(cardinal(1_000_000), "un million");
        assert_eq!(cardinal(2_000_000), "deux millions");
        assert_eq!(
            cardinal(2_000_500),
            "deux millions cinq cents"
        );
        assert_eq!(cardinal(1_000_000_000), "un milliard");
        assert!(FrenchSpeller.cardinal(1_000_000_000_000).is_none());
    }

    #[test]
    fn test_negative() {
        assert_eq!(cardinal(-12), "moins douze");
    }

    #[test]
    fn test_ordinals() {
        assert_eq!(ordinal(1), "premier");
        assert_eq!(ordinal(2), "deuxième");
        assert_eq!(ordinal(4), "quatrième");
        assert_eq!(ordinal(5), "cinquième");
        assert_eq!(ordinal(9), "neuvième");
        assert_eq!(ordinal(11), "onzième");
        assert_eq!(ordinal(21), "vingt et unième");
        assert_eq!(ordinal(25), "vingt-cinquième");
        assert_eq!(ordinal(80), "quatre-vingtième");
        assert_eq!(ordinal(100), "centième");
        assert_eq!(ordinal(1000), "millième");
    }

    #[test]
    fn test_ordinal_rejects_non_positive() {
        assert!(FrenchSpeller.ordinal(0).is_none());
        assert!(FrenchSpeller.ordinal(-3).is_none());
    }
}
