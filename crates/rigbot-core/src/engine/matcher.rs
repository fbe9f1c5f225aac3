//! Fallback pattern matcher.
//!
//! Scans intents in store definition order, patterns in declared
//! order, and matches bidirectionally: a pattern hits if it contains
//! the input or the input contains it (case-insensitive). First hit
//! wins, so earlier intents shadow later ones with overlapping
//! patterns.

use crate::intents::{Intent, IntentStore};

/// Find the first intent whose patterns match the input.
pub fn find_match<'a>(text: &str, store: &'a IntentStore) -> Option<&'a Intent> {
    let input = text.to_lowercase();
    for intent in store.iter() {
        for pattern in &intent.patterns {
            let pat = pattern.to_lowercase();
            if input.contains(&pat) || pat.contains(&input) {
                return Some(intent);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> IntentStore {
        IntentStore::from_json(
            r#"{"intents": [
                {"tag": "greeting", "patterns": ["hello", "hey"], "responses": ["hey"]},
                {"tag": "gpu", "patterns": ["graphics card", "which gpu"], "responses": ["get a 4070"]},
                {"tag": "shadowed", "patterns": ["hello there"], "responses": ["never reached"]}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_pattern_in_input() {
        let s = store();
        assert_eq!(
            find_match("what graphics card should i buy", &s).unwrap().tag,
            "gpu"
        );
    }

    #[test]
    fn test_input_in_pattern() {
        let s = store();
        // "card" is a substring of "graphics card".
        assert_eq!(find_match("card", &s).unwrap().tag, "gpu");
    }

    #[test]
    fn test_case_insensitive() {
        let s = store();
        assert_eq!(find_match("Which GPU", &s).unwrap().tag, "gpu");
    }

    #[test]
    fn test_earlier_intent_shadows_later() {
        let s = store();
        // "hello there" contains "hello", so the greeting intent wins
        // even though a later intent carries the exact phrase.
        assert_eq!(find_match("hello there", &s).unwrap().tag, "greeting");
    }

    #[test]
    fn test_no_match() {
        let s = store();
        assert!(find_match("asdfqwer", &s).is_none());
    }
}
