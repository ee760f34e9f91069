// libkibembe/src/words.rs
//
// English number words to integers.
//
// The parser is arithmetic, not grammatical: tokens are folded left to right
// into a running group (`current`) and a committed sum (`total`). "hundred"
// scales the running group, "thousand" scales it and commits it, every other
// word is added. Nothing checks that the phrase is well formed, so
// "hundred one hundred" is accepted and evaluated by the same rules.

use phf::phf_map;
use tracing::trace;

use crate::error::{TranslateError, TranslateResult};

const HUNDRED: u64 = 100;
const THOUSAND: u64 = 1000;

/// Every English word the parser understands, with its value.
pub static ENGLISH_NUMBERS: phf::Map<&'static str, u64> = phf_map! {
    "zero" => 0, "one" => 1, "two" => 2, "three" => 3, "four" => 4,
    "five" => 5, "six" => 6, "seven" => 7, "eight" => 8, "nine" => 9,
    "ten" => 10, "eleven" => 11, "twelve" => 12, "thirteen" => 13,
    "fourteen" => 14, "fifteen" => 15, "sixteen" => 16, "seventeen" => 17,
    "eighteen" => 18, "nineteen" => 19,
    "twenty" => 20, "thirty" => 30, "forty" => 40, "fifty" => 50,
    "sixty" => 60, "seventy" => 70, "eighty" => 80, "ninety" => 90,
    "hundred" => 100, "thousand" => 1000,
};

/// Convert an English number phrase to an integer.
///
/// Input is lower-cased and hyphens are treated as spaces, so "Twenty-Three"
/// and "twenty three" are the same phrase. The first word missing from
/// [`ENGLISH_NUMBERS`] aborts the parse with [`TranslateError::UnknownWord`].
///
/// A "hundred" with nothing before it multiplies an empty group and yields 0.
///
/// # Examples
/// ```
/// use libkibembe::parse_english_words;
///
/// assert_eq!(parse_english_words("one hundred twenty three").unwrap(), 123);
/// assert_eq!(parse_english_words("two thousand five").unwrap(), 2005);
/// assert!(parse_english_words("banana").is_err());
/// ```
pub fn parse_english_words(text: &str) -> TranslateResult<u64> {
    let normalized = text.to_lowercase().replace('-', " ");
    let mut words = normalized.split_whitespace().peekable();

    // Only separators, e.g. "-": the lone token is the empty word
    if words.peek().is_none() {
        return Err(TranslateError::UnknownWord {
            word: String::new(),
        });
    }

    let mut total = 0u64;
    let mut current = 0u64;

    for word in words {
        let value = ENGLISH_NUMBERS
            .get(word)
            .copied()
            .ok_or_else(|| TranslateError::UnknownWord {
                word: word.to_string(),
            })?;
        trace!(word, value, "number word");

        match value {
            HUNDRED => current = current.saturating_mul(HUNDRED),
            THOUSAND => {
                total = total.saturating_add(current.saturating_mul(THOUSAND));
                current = 0;
            }
            _ => current = current.saturating_add(value),
        }
    }

    Ok(total.saturating_add(current))
}
