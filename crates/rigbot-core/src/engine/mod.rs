//! Response engine: the core processing pipeline.
//!
//! Each input line is handled independently:
//! 1. Extract a budget figure from the raw text
//! 2. If one is found, classify use-case keywords and resolve a tier
//!    tag; a tag present in the store answers immediately
//! 3. Otherwise fall through to the substring pattern matcher
//! 4. If nothing matches, return the fixed fallback message
//!
//! No state survives between inputs.

pub mod budget;
pub mod category;
pub mod matcher;
pub mod selector;
pub mod tier;

use tracing::debug;

use crate::intents::{Intent, IntentStore};
use selector::ResponseSelector;

/// Returned verbatim when neither the tier resolver nor the pattern
/// matcher produces an intent.
pub const DEFAULT_FALLBACK: &str = "I'm not sure I understand. Can you rephrase that? \
Try asking about a specific budget (e.g., 'gaming pc for $1000') or component advice!";

/// The deterministic half of the pipeline: map an input line to an
/// intent, or nothing. Exposed separately so tests can assert on the
/// resolved intent without touching the random selector.
pub fn route<'a>(store: &'a IntentStore, input: &str) -> Option<&'a Intent> {
    if let Some(budget) = budget::extract(input) {
        let cats = category::classify(input);
        let tag = tier::resolve(budget, cats);
        debug!(budget, ?cats, tag, "Tier resolved");
        if let Some(intent) = store.lookup(tag) {
            return Some(intent);
        }
        // Tag missing from the knowledge base: treat as a miss and
        // fall through to pattern matching.
        debug!(tag, "Resolved tag not in store, falling back");
    }
    matcher::find_match(input, store)
}

/// Rule-based response engine over an immutable intent store.
pub struct ResponseEngine {
    store: IntentStore,
    selector: ResponseSelector,
}

impl ResponseEngine {
    pub fn new(store: IntentStore) -> Self {
        Self {
            store,
            selector: ResponseSelector::new(),
        }
    }

    /// Engine with a caller-supplied selector (seeded in tests).
    pub fn with_selector(store: IntentStore, selector: ResponseSelector) -> Self {
        Self { store, selector }
    }

    pub fn store(&self) -> &IntentStore {
        &self.store
    }

    /// Produce a reply for one line of user input. Never fails; a
    /// total miss yields [`DEFAULT_FALLBACK`].
    pub fn respond(&mut self, input: &str) -> String {
        match route(&self.store, input) {
            Some(intent) => {
                debug!(tag = %intent.tag, "Intent matched");
                self.selector.select(intent)
            }
            None => {
                debug!("No intent matched, using fallback");
                DEFAULT_FALLBACK.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intents::default_document;

    fn engine() -> ResponseEngine {
        let store = IntentStore::from_json(&default_document().to_string()).unwrap();
        ResponseEngine::with_selector(store, ResponseSelector::seeded(1))
    }

    fn routed_tag(input: &str) -> String {
        let store = IntentStore::from_json(&default_document().to_string()).unwrap();
        route(&store, input).expect("input should route").tag.clone()
    }

    #[test]
    fn test_gaming_budget_tiers() {
        assert_eq!(routed_tag("gaming pc for 500"), "budget_entry_gaming");
        assert_eq!(routed_tag("gaming pc for 1000"), "budget_mid_gaming");
        assert_eq!(routed_tag("gaming pc for 1500"), "budget_high_gaming");
        assert_eq!(routed_tag("gaming pc for 2500"), "budget_enthusiast_gaming");
    }

    #[test]
    fn test_streaming_inside_band() {
        assert_eq!(routed_tag("streaming pc for 1800"), "streaming_build");
    }

    #[test]
    fn test_streaming_outside_band_reclassifies_as_gaming() {
        assert_eq!(routed_tag("streaming setup for 3000"), "budget_enthusiast_gaming");
    }

    #[test]
    fn test_workstation_high() {
        assert_eq!(routed_tag("workstation build for 3000"), "workstation_high");
    }

    #[test]
    fn test_budget_answer_comes_from_resolved_intent() {
        let mut eng = engine();
        let reply = eng.respond("gaming pc for 1000");
        let responses = &eng.store().lookup("budget_mid_gaming").unwrap().responses;
        assert!(responses.contains(&reply));
    }

    #[test]
    fn test_pattern_path_without_budget() {
        let mut eng = engine();
        let reply = eng.respond("which gpu should i get");
        let responses = &eng.store().lookup("gpu_advice").unwrap().responses;
        assert!(responses.contains(&reply));
    }

    #[test]
    fn test_total_miss_returns_exact_fallback() {
        let mut eng = engine();
        assert_eq!(eng.respond("asdfqwer"), DEFAULT_FALLBACK);
    }

    #[test]
    fn test_missing_tag_falls_through_to_patterns() {
        // A store without the tier tags: budget resolution misses and
        // the pattern matcher should still get a chance.
        let store = IntentStore::from_json(
            r#"{"intents": [{"tag": "greeting", "patterns": ["hello"], "responses": ["hi there"]}]}"#,
        )
        .unwrap();
        let mut eng = ResponseEngine::with_selector(store, ResponseSelector::seeded(2));
        assert_eq!(eng.respond("hello, gaming pc for 1000?"), "hi there");
        assert_eq!(eng.respond("gaming pc for 1000"), DEFAULT_FALLBACK);
    }

    #[test]
    fn test_routing_is_idempotent() {
        let store = IntentStore::from_json(&default_document().to_string()).unwrap();
        let first = route(&store, "streaming pc for 1800").unwrap().tag.clone();
        for _ in 0..5 {
            assert_eq!(route(&store, "streaming pc for 1800").unwrap().tag, first);
        }
    }
}
