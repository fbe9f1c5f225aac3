//! Keyword-based use-case detection.
//!
//! Each category is an independent boolean — a single input can be
//! gaming and streaming at once. Which one wins is the tier resolver's
//! job, not ours.

/// Static keyword lists — matched case-insensitively by containment.
const GAMING_KEYWORDS: &[&str] = &["gaming", "game", "play", "fps"];
const WORKSTATION_KEYWORDS: &[&str] = &[
    "workstation",
    "work",
    "editing",
    "rendering",
    "3d",
    "programming",
    "coding",
];
const STREAMING_KEYWORDS: &[&str] = &["streaming", "stream", "twitch", "youtube"];

/// Detected use-case flags for a single input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Categories {
    pub gaming: bool,
    pub workstation: bool,
    pub streaming: bool,
}

/// Classify raw input against the fixed keyword sets.
pub fn classify(text: &str) -> Categories {
    let lower = text.to_lowercase();
    let contains_any = |keywords: &[&str]| keywords.iter().any(|kw| lower.contains(kw));

    Categories {
        gaming: contains_any(GAMING_KEYWORDS),
        workstation: contains_any(WORKSTATION_KEYWORDS),
        streaming: contains_any(STREAMING_KEYWORDS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_category() {
        let c = classify("a pc for gaming");
        assert!(c.gaming && !c.workstation && !c.streaming);

        let c = classify("video editing machine");
        assert!(c.workstation && !c.gaming);

        let c = classify("twitch rig");
        assert!(c.streaming && !c.gaming);
    }

    #[test]
    fn test_case_insensitive() {
        let c = classify("GAMING and YouTube");
        assert!(c.gaming && c.streaming);
    }

    #[test]
    fn test_multiple_categories() {
        let c = classify("stream while i play fps games and do 3d work");
        assert!(c.gaming && c.workstation && c.streaming);
    }

    #[test]
    fn test_none_detected() {
        assert_eq!(classify("just a computer"), Categories::default());
    }

    #[test]
    fn test_substring_containment() {
        // "playstation" contains "play" — keyword hits inside larger
        // words count.
        assert!(classify("playstation").gaming);
    }
}
