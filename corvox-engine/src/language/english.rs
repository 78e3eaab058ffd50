//! English locale rules

use super::{common_cleanup_rules, LocaleRules, SCRIPT_DIGITS};
use crate::error::Result;
use corvox_core::{NormRule, NumberSpeller};
use std::sync::Arc;

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "so", "nor", "for", "yet", "of",
    "in", "on", "at", "to", "by", "with", "without", "from", "into", "over",
    "under", "is", "are", "was", "were", "be", "been", "being", "he", "she",
    "it", "they", "we", "you", "his", "her", "its", "their", "our", "this",
    "that", "these", "those", "not", "no", "as", "if", "than", "then",
];

pub(super) fn rules() -> Result<LocaleRules> {
    Ok(LocaleRules {
        code: "en",
        alphabet: ALPHABET,
        stopwords: STOPWORDS.iter().map(|s| s.to_string()).collect(),
        rules: normalization_rules()?,
        speller: Arc::new(EnglishSpeller),
    })
}

/// Built-in rewrite table; order is part of the contract
fn normalization_rules() -> Result<Vec<NormRule>> {
    let mut rules = vec![
        NormRule::literal("\u{00A0}", " "),
        NormRule::pattern(r" \([^)]*\)", "")?,
        NormRule::pattern(r"\([^)]*\)", "")?,
        NormRule::pattern(r"\[\d+\]", "")?,
        NormRule::pattern(r"\bMr\. ", "Mister ")?,
        NormRule::pattern(r"\bMrs\. ", "Missus ")?,
        NormRule::pattern(r"\bDr\. ", "Doctor ")?,
        NormRule::literal("%", " percent"),
    ];
    for &(script, digit) in SCRIPT_DIGITS {
        rules.push(NormRule::literal(script, digit));
    }
    // comma-grouped thousands join before expansion ("1,234" -> "1234")
    rules.push(NormRule::pattern(r"(\d),(\d{3})\b", "$1$2")?);
    rules.extend(common_cleanup_rules()?);
    Ok(rules)
}

/// English number vocabulary
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishSpeller;

const UNITS: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight",
    "nine", "ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen",
    "sixteen", "seventeen", "eighteen", "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy",
    "eighty", "ninety",
];

/// Irregular ordinal forms; everything else takes -th or -ieth
const IRREGULAR_ORDINALS: [(&str, &str); 6] = [
    ("one", "first"),
    ("two", "second"),
    ("three", "third"),
    ("five", "fifth"),
    ("eight", "eighth"),
    ("nine", "ninth"),
];

impl EnglishSpeller {
    fn below_hundred(n: u64) -> String {
        match n {
            0..=19 => UNITS[n as usize].to_string(),
            _ => {
                let tens = TENS[(n / 10) as usize];
                match n % 10 {
                    0 => tens.to_string(),
                    unit => format!("{tens}-{}", UNITS[unit as usize]),
                }
            }
        }
    }

    fn below_thousand(n: u64) -> String {
        let hundreds = n / 100;
        let rest = n % 100;
        if hundreds == 0 {
            return Self::below_hundred(rest);
        }
        let head = format!("{} hundred", UNITS[hundreds as usize]);
        if rest == 0 {
            head
        } else {
            format!("{head} {}", Self::below_hundred(rest))
        }
    }

    fn cardinal_words(n: u64) -> Option<String> {
        const SCALES: [(u64, &str); 3] = [
            (1_000_000_000, "billion"),
            (1_000_000, "million"),
            (1_000, "thousand"),
        ];
        if n < 1_000 {
            return Some(Self::below_thousand(n));
        }
        for (scale, name) in SCALES {
            if n >= scale {
                if n / scale >= 1_000 {
                    return None;
                }
                let head = format!("{} {name}", Self::below_thousand(n / scale));
                let rest = n % scale;
                return Some(if rest == 0 {
                    head
                } else {
                    format!("{head} {}", Self::cardinal_words(rest)?)
                });
            }
        }
        None
    }

    /// Turn the last word of a cardinal into its ordinal form
    fn ordinalize(cardinal: &str) -> String {
        let (head, last) = match cardinal.rfind([' ', '-']) {
            Some(split) => cardinal.split_at(split + 1),
            None => ("", cardinal),
        };
        for (word, irregular) in IRREGULAR_ORDINALS {
            if last == word {
                return format!("{head}{irregular}");
            }
        }
        if let Some(stem) = last.strip_suffix('y') {
            return format!("{head}{stem}ieth");
        }
        if last == "twelve" {
            return format!("{head}twelfth");
        }
        format!("{head}{last}th")
    }
}

impl NumberSpeller for EnglishSpeller {
    fn cardinal(&self, n: i64) -> Option<String> {
        if n < 0 {
            let magnitude = n.checked_neg()?;
            return Some(format!("minus {}", self.cardinal(magnitude)?));
        }
        Self::cardinal_words(n as u64)
    }

    fn ordinal(&self, n: i64) -> Option<String> {
        if n <= 0 {
            return None;
        }
        Some(Self::ordinalize(&Self::cardinal_words(n as u64)?))
    }

    fn decimal_separator(&self) -> &str {
        "point"
    }

    fn ordinal_suffixes(&self) -> &[&str] {
        &["st", "nd", "rd", "th"]
    }
}
