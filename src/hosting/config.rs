use crate::REPLY_DELAY_MS;
use crate::SEARCH_DEPTH;
use crate::gameroom::Settings;
use clap::Parser;
use clap::builder::TypedValueParser;
use std::time::Duration;

/// Command-line and environment configuration for the hosting server.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Connect-four websocket backend", long_about = None)]
pub struct Config {
    /// Listen address.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8000")]
    pub bind: String,
    /// Actix worker threads.
    #[arg(long, env = "WORKERS", default_value_t = 4)]
    pub workers: usize,
    /// Computer search depth in plies.
    #[arg(
        long,
        env = "SEARCH_DEPTH",
        default_value_t = SEARCH_DEPTH,
        value_parser = clap::value_parser!(u64).range(1..).map(|d| d as usize),
    )]
    pub depth: usize,
    /// Pause before the computer replies.
    #[arg(long = "delay-ms", env = "AI_DELAY_MS", default_value_t = REPLY_DELAY_MS)]
    pub delay_ms: u64,
    /// Fixed seed for the computer's tie-breaking.
    #[arg(long, env = "AI_SEED")]
    pub seed: Option<u64>,
    /// Comma-separated CORS allow-list; any origin when empty.
    #[arg(long, env = "ALLOWED_ORIGINS", value_delimiter = ',')]
    pub origins: Vec<String>,
    /// Terminal log level.
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub verbosity: log::LevelFilter,
}

impl Config {
    pub fn settings(&self) -> Settings {
        Settings {
            depth: self.depth,
            delay: Duration::from_millis(self.delay_ms),
            seed: self.seed,
        }
    }
}
