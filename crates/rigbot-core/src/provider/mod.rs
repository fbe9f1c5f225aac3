//! LLM provider trait and failover wrapper.
//!
//! The `openai` module provides an OpenAI-compatible implementation
//! that covers most hosted providers (OpenRouter, OpenAI, DeepSeek,
//! Groq, vLLM, etc.). This whole layer backs the AI chat mode only;
//! the local rule engine never touches the network.

pub mod openai;
pub mod types;

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use types::{ChatMessage, LlmResponse};

/// Trait for chat-completion backends.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send a chat completion request.
    ///
    /// # Arguments
    /// * `messages` - Conversation history
    /// * `model` - Model identifier override (None = use default)
    /// * `max_tokens` - Maximum response tokens
    /// * `temperature` - Sampling temperature
    async fn chat(
        &self,
        messages: &[ChatMessage],
        model: Option<&str>,
        max_tokens: u32,
        temperature: f32,
    ) -> anyhow::Result<LlmResponse>;

    /// Get the default model identifier.
    fn default_model(&self) -> &str;
}

/// Duration to quarantine a provider after a transient error.
const QUARANTINE_DURATION: Duration = Duration::from_secs(60);

/// Wraps multiple providers with failover: a provider that returns a
/// quota-style error is quarantined and the next one is tried.
pub struct FallbackProvider {
    providers: Vec<(String, Box<dyn LlmProvider>)>,
    /// Maps provider name to the time of the last transient error.
    health: Mutex<HashMap<String, Instant>>,
}

impl FallbackProvider {
    pub fn new(providers: Vec<(String, Box<dyn LlmProvider>)>) -> Self {
        Self {
            providers,
            health: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl LlmProvider for FallbackProvider {
    async fn chat(
        &self,
        messages: &[ChatMessage],
        model: Option<&str>,
        max_tokens: u32,
        temperature: f32,
    ) -> anyhow::Result<LlmResponse> {
        let mut last_error = None;
        let now = Instant::now();

        for (i, (name, provider)) in self.providers.iter().enumerate() {
            let is_quarantined = {
                let health = self.health.lock().unwrap();
                health
                    .get(name)
                    .map_or(false, |&last_err| now.duration_since(last_err) < QUARANTINE_DURATION)
            };

            if is_quarantined {
                debug!(provider = %name, "Provider is in quarantine, skipping");
                continue;
            }

            // The model override only makes sense for the primary.
            let effective_model = if i == 0 { model } else { None };

            match provider
                .chat(messages, effective_model, max_tokens, temperature)
                .await
            {
                Ok(res) => return Ok(res),
                Err(e) => {
                    let err_str = e.to_string();
                    if err_str.contains("429")
                        || err_str.contains("quota")
                        || err_str.contains("rate limit")
                    {
                        warn!(
                            provider = %name,
                            error = %err_str,
                            "Provider failed with quota error, entering quarantine"
                        );
                        {
                            let mut health = self.health.lock().unwrap();
                            health.insert(name.clone(), Instant::now());
                        }
                        last_error = Some(e);
                        continue;
                    }
                    return Err(e);
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| anyhow::anyhow!("All providers are exhausted or in quarantine")))
    }

    fn default_model(&self) -> &str {
        self.providers
            .first()
            .map(|(_, p)| p.default_model())
            .unwrap_or("")
    }
}
