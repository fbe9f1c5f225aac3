//! 🖥️ rigbot-core: Core library for the rigbot PC-building assistant.
//!
//! This crate contains the building blocks for a rule-based build
//! advisor with an optional AI chat mode:
//!
//! - [`config`] — Typed configuration loading from JSON
//! - [`intents`] — Knowledge-base loading and the immutable intent store
//! - [`engine`] — Budget extraction, category classification, tier
//!   resolution, pattern matching, and response selection
//! - [`provider`] — LLM provider trait and OpenAI-compatible
//!   implementation (AI chat mode only)
//!
//! # Quick Start
//!
//! ```no_run
//! use rigbot_core::config::Config;
//! use rigbot_core::engine::ResponseEngine;
//! use rigbot_core::intents::IntentStore;
//!
//! let config = Config::load().unwrap();
//! let store = IntentStore::load_from(&config.intents_path()).unwrap();
//! let mut engine = ResponseEngine::new(store);
//!
//! let reply = engine.respond("gaming pc for $1000");
//! println!("{reply}");
//! ```

pub mod config;
pub mod engine;
pub mod intents;
pub mod provider;
