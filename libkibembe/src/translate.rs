// libkibembe/src/translate.rs
//
// The single entry point front ends call: raw text in, Kibembe phrase or a
// user-facing error out.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::{TranslateError, TranslateResult};
use crate::kibembe::number_to_kibembe;
use crate::words::parse_english_words;

/// Largest number that can be translated.
pub const MAX_NUMBER: u32 = 9999;

/// ASCII digits only; anything else (letters, signs, non-ASCII digits) is
/// handed to the word parser.
static DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("digit pattern is valid"));

/// Normalize `raw` and resolve it to a number in `0..=MAX_NUMBER`.
///
/// Digit strings are read as base-10 (leading zeros allowed), everything else
/// goes through [`parse_english_words`].
pub fn resolve_number(raw: &str) -> TranslateResult<u32> {
    let input = raw.trim().to_lowercase();
    if input.is_empty() {
        return Err(TranslateError::EmptyInput);
    }

    let value = if DIGITS.is_match(&input) {
        // only overflow can fail here
        input.parse::<u64>().unwrap_or(u64::MAX)
    } else {
        parse_english_words(&input)?
    };

    match u32::try_from(value) {
        Ok(n) if n <= MAX_NUMBER => Ok(n),
        _ => Err(TranslateError::NumberTooLarge { value }),
    }
}

/// Translate digits or English number words into Kibembe.
///
/// # Examples
/// ```
/// use libkibembe::{translate, TranslateError};
///
/// assert_eq!(translate("123").unwrap(), "ikana emo na ikana abele na asatu");
/// assert_eq!(translate(" Twenty-Three ").unwrap(), "ikana abele na asatu");
/// assert_eq!(translate(""), Err(TranslateError::EmptyInput));
/// ```
pub fn translate(raw: &str) -> TranslateResult<String> {
    let n = resolve_number(raw)?;
    let phrase = number_to_kibembe(n);
    debug!(input = raw.trim(), number = n, phrase = %phrase, "translated");
    Ok(phrase)
}
