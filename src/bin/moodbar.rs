//! Line-oriented chat front end.
//!
//! Reads one request per line from stdin and writes one JSON reply per line
//! to stdout. Requests are `{"message": "...", "ip_address": "..."}` objects,
//! or raw text with `--plain`. All tracing output goes to stderr so stdout
//! stays a clean JSON stream.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use moodbar::conversation_log::SqliteConversationLog;
use moodbar::{ChatConfig, ChatEngine, ChatError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

/// Rule-based emotion chatbot with a cocktail questionnaire.
#[derive(Parser)]
#[command(name = "moodbar", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long, env = "MOODBAR_CONFIG")]
    config: Option<PathBuf>,

    /// Do not write the conversation log.
    #[arg(long)]
    no_log: bool,

    /// Treat each input line as the message text instead of JSON.
    #[arg(long)]
    plain: bool,

    /// Seed for reply selection, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Deserialize)]
struct Request {
    message: String,
    #[serde(default)]
    ip_address: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("moodbar=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    let log = if config.log.enabled && !cli.no_log {
        match open_log(&config) {
            Ok(log) => Some(log),
            Err(e) => {
                tracing::warn!(error = %e, "conversation log unavailable, continuing without it");
                None
            }
        }
    } else {
        None
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let engine = ChatEngine::new(config);
    let mut session = engine.new_session();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "moodbar ready");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let request = match parse_request(&line, cli.plain) {
            Ok(r) => r,
            Err(e) => {
                write_error(&mut stdout, &format!("bad request: {e}"))?;
                continue;
            }
        };

        if let Err(e) = engine.validate(&request.message) {
            write_error(&mut stdout, &e.to_string())?;
            continue;
        }

        let (next, reply) = engine.process(session, &request.message, &mut rng);
        session = next;

        if let Some(log) = &log {
            let mut entry = reply.to_entry(&request.message);
            entry.ip_address = request.ip_address;
            engine.record(log, &entry);
        }

        serde_json::to_writer(&mut stdout, &reply)?;
        writeln!(stdout)?;
        stdout.flush()?;
    }

    tracing::info!("input closed, shutting down");
    Ok(())
}

/// Explicit path, then the default path if it exists, then defaults.
fn load_config(path: Option<&std::path::Path>) -> Result<ChatConfig, ChatError> {
    if let Some(path) = path {
        return ChatConfig::from_file(path);
    }
    let default = ChatConfig::default_config_path();
    if default.exists() {
        ChatConfig::from_file(&default)
    } else {
        Ok(ChatConfig::default())
    }
}

fn open_log(config: &ChatConfig) -> Result<SqliteConversationLog, ChatError> {
    let dir = config.log.resolved_dir();
    let log = SqliteConversationLog::new(&dir)?;
    tracing::info!(dir = %dir.display(), "conversation log open");
    Ok(log)
}

fn parse_request(line: &str, plain: bool) -> Result<Request, serde_json::Error> {
    if plain {
        return Ok(Request {
            message: line.to_string(),
            ip_address: None,
        });
    }
    serde_json::from_str(line)
}

fn write_error(out: &mut impl Write, message: &str) -> std::io::Result<()> {
    serde_json::to_writer(&mut *out, &serde_json::json!({ "error": message }))?;
    writeln!(out)?;
    out.flush()
}
