// libkibembe/src/kibembe.rs
//
// Integers to Kibembe numerals.
//
// Kibembe composes numbers from the ten digit words with three markers:
// "iomi na X" for the teens, "ikana X" for both tens and hundreds, and
// "elufu X" for thousands, joining a group to its remainder with "na".
// Hundreds and thousands hand their remainder back to the same function, so
// the tens/ones phrasing exists in exactly one place.

/// Kibembe words for the digits 0-9, indexed by digit.
pub const KIBEMBE_ONES: [&str; 10] = [
    "sifuri", // 0
    "emo",    // 1
    "abele",  // 2
    "asatu",  // 3
    "enaci",  // 4
    "etanɔ",  // 5
    "ntoba",  // 6
    "mwenji", // 7
    "enane",  // 8
    "enda",   // 9
];

fn ones(digit: u32) -> &'static str {
    KIBEMBE_ONES[digit as usize]
}

/// Render `n` in Kibembe.
///
/// Meant for 0..=9999; callers enforce that bound. Larger values still render
/// (the thousands group recurses) and nothing here panics.
///
/// # Examples
/// ```
/// use libkibembe::number_to_kibembe;
///
/// assert_eq!(number_to_kibembe(7), "mwenji");
/// assert_eq!(number_to_kibembe(23), "ikana abele na asatu");
/// assert_eq!(number_to_kibembe(2005), "elufu abele na etanɔ");
/// ```
pub fn number_to_kibembe(n: u32) -> String {
    match n {
        0..=9 => ones(n).to_string(),
        10..=19 => format!("iomi na {}", ones(n - 10)),
        20..=99 => {
            let tens = format!("ikana {}", ones(n / 10));
            match n % 10 {
                0 => tens,
                unit => format!("{} na {}", tens, ones(unit)),
            }
        }
        100..=999 => {
            let hundreds = format!("ikana {}", ones(n / 100));
            match n % 100 {
                0 => hundreds,
                rest => format!("{} na {}", hundreds, number_to_kibembe(rest)),
            }
        }
        _ => {
            let thousands = format!("elufu {}", number_to_kibembe(n / 1000));
            match n % 1000 {
                0 => thousands,
                rest => format!("{} na {}", thousands, number_to_kibembe(rest)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ones_match_lexicon() {
        for d in 0..10u32 {
            assert_eq!(number_to_kibembe(d), KIBEMBE_ONES[d as usize]);
        }
    }

    #[test]
    fn test_teens() {
        assert_eq!(number_to_kibembe(10), "iomi na sifuri");
        assert_eq!(number_to_kibembe(15), "iomi na etanɔ");
        assert_eq!(number_to_kibembe(19), "iomi na enda");
    }

    #[test]
    fn test_tens() {
        assert_eq!(number_to_kibembe(20), "ikana abele");
        assert_eq!(number_to_kibembe(23), "ikana abele na asatu");
        assert_eq!(number_to_kibembe(99), "ikana enda na enda");
    }

    #[test]
    fn test_hundreds_recurse_into_remainder() {
        assert_eq!(number_to_kibembe(100), "ikana emo");
        assert_eq!(number_to_kibembe(105), "ikana emo na etanɔ");
        assert_eq!(number_to_kibembe(110), "ikana emo na iomi na sifuri");
        assert_eq!(number_to_kibembe(123), "ikana emo na ikana abele na asatu");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(number_to_kibembe(1000), "elufu emo");
        assert_eq!(number_to_kibembe(2005), "elufu abele na etanɔ");
        assert_eq!(
            number_to_kibembe(1234),
            "elufu emo na ikana abele na ikana asatu na enaci"
        );
        assert_eq!(
            number_to_kibembe(9999),
            "elufu enda na ikana enda na ikana enda na enda"
        );
    }

    #[test]
    fn test_tens_and_hundreds_share_marker() {
        // "ikana" marks both places, so 20 and 200 read the same
        assert_eq!(number_to_kibembe(20), number_to_kibembe(200));
    }

    #[test]
    fn test_total_over_range() {
        for n in 0..=9999u32 {
            let text = number_to_kibembe(n);
            assert!(!text.is_empty(), "empty rendering for {}", n);
            assert_eq!(text, number_to_kibembe(n));
        }
    }

    #[test]
    fn test_beyond_range_does_not_panic() {
        assert_eq!(number_to_kibembe(10_000), "elufu iomi na sifuri");
        assert!(!number_to_kibembe(u32::MAX).is_empty());
    }
}
