//! Budget extraction: pulls the first 3-4 digit price out of raw input.

use regex::Regex;
use std::sync::OnceLock;

static BUDGET_RE: OnceLock<Regex> = OnceLock::new();

/// Extract a monetary figure from the raw (not lower-cased) input.
///
/// Matches an optional `$` followed by 3-4 consecutive digits and
/// returns the first occurrence; any later number in the same input is
/// ignored. No range validation is applied — "500" and "9999" are both
/// taken at face value.
pub fn extract(text: &str) -> Option<u32> {
    let re = BUDGET_RE.get_or_init(|| {
        Regex::new(r"\$?(\d{3,4})").expect("budget regex is valid")
    });
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_number() {
        assert_eq!(extract("gaming pc for 1200 please"), Some(1200));
    }

    #[test]
    fn test_dollar_prefix() {
        assert_eq!(extract("around $950"), Some(950));
    }

    #[test]
    fn test_first_number_wins() {
        assert_eq!(extract("between 800 and 1200"), Some(800));
    }

    #[test]
    fn test_three_and_four_digit_bounds() {
        assert_eq!(extract("spend 100"), Some(100));
        assert_eq!(extract("spend 9999"), Some(9999));
    }

    #[test]
    fn test_too_few_digits() {
        assert_eq!(extract("i have 99 dollars"), None);
        assert_eq!(extract("no numbers here"), None);
    }

    #[test]
    fn test_five_digits_takes_first_window() {
        // Greedy scan: the first four digits of a longer run are taken.
        assert_eq!(extract("12345"), Some(1234));
    }
}
