//! 🖥️ rigbot CLI — PC-building advice, locally or via an LLM.
//!
//! Usage:
//!   rigbot local         — Rule-based build advisor (default)
//!   rigbot ai            — Chat with a remote LLM instead
//!   rigbot onboard       — Create default config + knowledge base
//!   rigbot status        — Show current configuration and health

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;

use rigbot_core::config::Config;
use rigbot_core::engine::ResponseEngine;
use rigbot_core::intents::IntentStore;
use rigbot_core::provider::openai::OpenAiProvider;
use rigbot_core::provider::types::ChatMessage;
use rigbot_core::provider::{FallbackProvider, LlmProvider};

#[derive(Parser)]
#[command(
    name = "rigbot",
    version,
    about = "A PC-building advisory assistant",
    long_about = "🖥️ rigbot — a rule-based PC-building advisor written in Rust.\n\nLocal mode answers from a curated knowledge base; AI mode talks to any OpenAI-compatible provider."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Chat with the local rule-based advisor (default)
    Local {
        /// Knowledge-base file (overrides config)
        #[arg(short, long)]
        intents: Option<PathBuf>,
    },

    /// Chat with a remote LLM
    Ai {
        /// Model to use (overrides config)
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Create or reset the default configuration and knowledge base
    Onboard,

    /// Show configuration status and health
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Local { intents }) => cmd_local(intents)?,
        Some(Commands::Ai { model }) => cmd_ai(model.as_deref()).await?,
        Some(Commands::Onboard) => cmd_onboard()?,
        Some(Commands::Status) => cmd_status()?,
        None => cmd_local(None)?,
    }

    Ok(())
}

// ── Shared Setup ────────────────────────────────────────────────────

fn validate_config(config: &Config) -> Result<()> {
    if let Err(errors) = config.validate() {
        eprintln!("\n  \x1b[31m❌ Configuration errors:\x1b[0m");
        for e in &errors {
            eprintln!("     • {}", e);
        }
        eprintln!();
        anyhow::bail!("Fix the above {} error(s) in config.json", errors.len());
    }
    Ok(())
}

/// Read one trimmed line from stdin, returning `None` on EOF.
fn read_line(stdin: &io::Stdin) -> Result<Option<String>> {
    print!("  \x1b[36mYou:\x1b[0m ");
    io::stdout().flush()?;

    let mut input = String::new();
    if stdin.read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

fn is_quit(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "quit" | "exit")
}

// ── Local Command ───────────────────────────────────────────────────

fn cmd_local(intents_override: Option<PathBuf>) -> Result<()> {
    let config = Config::load()?;
    validate_config(&config)?;

    let intents_path = intents_override.unwrap_or_else(|| config.intents_path());

    // A broken knowledge base is the one fatal error: abort before
    // reading any input.
    let store = IntentStore::load_from(&intents_path).map_err(|e| {
        anyhow::anyhow!("{e}\n  Run `rigbot onboard` to create the default knowledge base.")
    })?;
    let mut engine = ResponseEngine::new(store);

    println!();
    println!("  🖥️ rigbot v{} — local advisor", env!("CARGO_PKG_VERSION"));
    println!(
        "  Knowledge base: {} ({} intents)",
        intents_path.display(),
        engine.store().len()
    );
    println!();
    println!("  Type your question, or 'quit' to exit.");
    println!("  ─────────────────────────────────────");
    println!();

    let stdin = io::stdin();
    loop {
        let Some(input) = read_line(&stdin)? else {
            break;
        };

        if input.is_empty() {
            continue;
        }
        if is_quit(&input) {
            println!("  Goodbye! Happy building! 👋");
            break;
        }

        let response = engine.respond(&input);
        println!("  \x1b[32mBot:\x1b[0m {}\n", response);
    }

    Ok(())
}

// ── AI Command ──────────────────────────────────────────────────────

async fn cmd_ai(model_override: Option<&str>) -> Result<()> {
    let config = Config::load()?;
    validate_config(&config)?;

    let model = model_override
        .unwrap_or(&config.chat.model)
        .to_string();

    let active_providers = config.providers.find_all_active();
    if active_providers.is_empty() {
        anyhow::bail!(
            "No LLM provider configured with a real API key. \
             Run `rigbot onboard` first, then edit config.json"
        );
    }

    let client = reqwest::Client::new();
    let mut inner_providers = Vec::new();
    for (name, entry) in &active_providers {
        let p_model = entry.model.as_deref().unwrap_or(&model);
        let p = OpenAiProvider::new(
            name,
            &entry.api_key,
            entry.api_base.as_deref(),
            p_model,
            client.clone(),
        );
        inner_providers.push((name.to_string(), Box::new(p) as Box<dyn LlmProvider>));
    }
    let provider = FallbackProvider::new(inner_providers);

    println!();
    println!("  🖥️ rigbot v{} — AI chat", env!("CARGO_PKG_VERSION"));
    println!(
        "  Providers: {} | Model: {}",
        active_providers
            .iter()
            .map(|(n, _)| *n)
            .collect::<Vec<_>>()
            .join(", "),
        model
    );
    println!();
    println!("  Type your message, or 'quit' to exit.");
    println!("  ─────────────────────────────────────");
    println!();

    // History lives only for this process; nothing is persisted.
    let mut messages: Vec<ChatMessage> = Vec::new();

    let stdin = io::stdin();
    loop {
        let Some(input) = read_line(&stdin)? else {
            break;
        };

        if input.is_empty() {
            continue;
        }
        if is_quit(&input) {
            println!("  Goodbye! 👋");
            break;
        }

        messages.push(ChatMessage::user(&input));

        match provider
            .chat(&messages, None, config.chat.max_tokens, config.chat.temperature)
            .await
        {
            Ok(response) => {
                println!("  \x1b[32mAI:\x1b[0m {}\n", response.content);
                messages.push(ChatMessage::assistant(&response.content));
            }
            Err(e) => {
                // Provider failures never end the session.
                eprintln!("  \x1b[31mError: {}\x1b[0m\n", e);
            }
        }
    }

    Ok(())
}

// ── Onboard Command ─────────────────────────────────────────────────

fn cmd_onboard() -> Result<()> {
    let config_path = Config::write_default_template()?;
    let intents_path = Config::default().intents_path();
    IntentStore::write_default_template(&intents_path)?;

    println!();
    println!("  ✅ Configuration created at:");
    println!("     {}", config_path.display());
    println!("  ✅ Knowledge base created at:");
    println!("     {}", intents_path.display());
    println!();
    println!("  Next steps:");
    println!("  1. Run `rigbot` to chat with the local advisor");
    println!("  2. For AI mode, add your API key to config.json and run `rigbot ai`");
    println!();
    Ok(())
}

// ── Status Command ──────────────────────────────────────────────────

fn cmd_status() -> Result<()> {
    let config_path = Config::default_path();
    let config = Config::load()?;

    println!();
    println!("  🖥️ rigbot status");
    println!("  ─────────────────────────────────────");

    // Config file
    if config_path.exists() {
        println!("  Config:     {}", config_path.display());
    } else {
        println!("  Config:     ❌ Not found (run `rigbot onboard`)");
        return Ok(());
    }

    // Knowledge base
    let intents_path = config.intents_path();
    match IntentStore::load_from(&intents_path) {
        Ok(store) => println!(
            "  Intents:    ✅ {} ({} loaded)",
            intents_path.display(),
            store.len()
        ),
        Err(e) => println!("  Intents:    ❌ {}", e),
    }

    // Provider
    match config.providers.find_active() {
        Some((name, _)) => println!("  Provider:   ✅ {} configured", name),
        None => println!("  Provider:   ❌ No provider configured (AI mode disabled)"),
    }

    // Model
    println!("  Model:      {}", config.chat.model);

    println!();
    Ok(())
}
