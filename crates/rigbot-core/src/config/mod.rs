//! Configuration module for rigbot.
//!
//! Loads typed configuration from `~/.rigbot/config.json`.
//! All fields use `serde` for zero-boilerplate deserialization.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub providers: ProvidersConfig,
    pub chat: ChatConfig,
    pub engine: EngineConfig,
}

impl Config {
    /// Load configuration from the default path (`~/.rigbot/config.json`).
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Get the default config file path.
    pub fn default_path() -> PathBuf {
        Self::config_dir().join("config.json")
    }

    /// Get the default config directory path.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rigbot")
    }

    /// Get the resolved knowledge-base path (`~` expanded).
    pub fn intents_path(&self) -> PathBuf {
        expand_home(&self.engine.intents_path)
    }

    /// Sanity-check values a typo'd config file could break.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        if self.chat.max_tokens == 0 {
            errors.push("chat.maxTokens must be greater than zero".to_string());
        }
        if !(0.0..=2.0).contains(&self.chat.temperature) {
            errors.push("chat.temperature must be between 0.0 and 2.0".to_string());
        }
        if self.engine.intents_path.trim().is_empty() {
            errors.push("engine.intentsPath must not be empty".to_string());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Write the default config template to disk.
    pub fn write_default_template() -> anyhow::Result<PathBuf> {
        let path = Self::default_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let template = serde_json::json!({
            "providers": {
                "openrouter": {
                    "apiKey": "sk-or-v1-YOUR_KEY_HERE"
                }
            },
            "chat": {
                "model": "openai/gpt-3.5-turbo"
            }
        });

        std::fs::write(&path, serde_json::to_string_pretty(&template)?)?;
        Ok(path)
    }
}

fn expand_home(raw: &str) -> PathBuf {
    if raw.starts_with("~/") || raw.starts_with("~\\") {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(&raw[2..])
    } else {
        PathBuf::from(raw)
    }
}

// ── Provider Configuration ──────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProviderEntry {
    pub api_key: String,
    pub api_base: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    pub openrouter: Option<ProviderEntry>,
    pub openai: Option<ProviderEntry>,
    pub deepseek: Option<ProviderEntry>,
    pub groq: Option<ProviderEntry>,
    pub vllm: Option<ProviderEntry>,
}

impl ProvidersConfig {
    /// Find the first configured provider (has a non-empty API key).
    pub fn find_active(&self) -> Option<(&str, &ProviderEntry)> {
        self.find_all_active().into_iter().next()
    }

    /// All configured providers, in priority order.
    pub fn find_all_active(&self) -> Vec<(&str, &ProviderEntry)> {
        let candidates: Vec<(&str, &Option<ProviderEntry>)> = vec![
            ("openrouter", &self.openrouter),
            ("openai", &self.openai),
            ("deepseek", &self.deepseek),
            ("groq", &self.groq),
            ("vllm", &self.vllm),
        ];

        candidates
            .into_iter()
            .filter_map(|(name, entry)| {
                entry
                    .as_ref()
                    .filter(|e| !e.api_key.is_empty())
                    .map(|e| (name, e))
            })
            .collect()
    }
}

// ── Chat Configuration ──────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChatConfig {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            model: "openai/gpt-3.5-turbo".into(),
            max_tokens: 1024,
            temperature: 0.7,
        }
    }
}

// ── Engine Configuration ────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub intents_path: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            intents_path: "~/.rigbot/intents.json".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.chat.model, "openai/gpt-3.5-turbo");
        assert_eq!(config.chat.max_tokens, 1024);
        assert_eq!(config.engine.intents_path, "~/.rigbot/intents.json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_minimal_json() {
        let json = r#"{"providers": {"openrouter": {"apiKey": "test-key"}}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        let entry = config.providers.openrouter.unwrap();
        assert_eq!(entry.api_key, "test-key");
    }

    #[test]
    fn test_find_active_provider() {
        let json = r#"{"providers": {"deepseek": {"apiKey": "sk-xxx"}}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        let (name, entry) = config.providers.find_active().unwrap();
        assert_eq!(name, "deepseek");
        assert_eq!(entry.api_key, "sk-xxx");
    }

    #[test]
    fn test_empty_key_is_not_active() {
        let json = r#"{"providers": {"openai": {"apiKey": ""}}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.providers.find_active().is_none());
    }

    #[test]
    fn test_priority_order() {
        let json = r#"{"providers": {
            "groq": {"apiKey": "g"},
            "openrouter": {"apiKey": "o"}
        }}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        let active = config.providers.find_all_active();
        assert_eq!(active[0].0, "openrouter");
        assert_eq!(active[1].0, "groq");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let json = r#"{"chat": {"maxTokens": 0, "temperature": 5.0}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
