use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

mod platform;

use platform::config::{AppConfig, LogTarget, Overrides};

#[derive(Debug, Parser)]
#[command(
    name = "spider-chat",
    version,
    about = "Chat with the assistant and drive the crawl spider"
)]
struct Cli {
    /// RON configuration file; missing files fall back to defaults.
    #[arg(long, default_value = "spider_chat.ron")]
    config: PathBuf,
    /// Backend base URL (overrides the file and SPIDER_CHAT_BASE_URL).
    #[arg(long)]
    base_url: Option<String>,
    /// Milliseconds between revealed characters of assistant replies.
    #[arg(long)]
    reveal_interval_ms: Option<u64>,
    /// Where log output goes.
    #[arg(long, value_enum)]
    log: Option<LogTarget>,
    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, load_error) = match AppConfig::load(&cli.config) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    config.apply_overrides(Overrides {
        base_url: cli.base_url,
        env_base_url: std::env::var("SPIDER_CHAT_BASE_URL").ok(),
        reveal_interval_ms: cli.reveal_interval_ms,
        log: cli.log,
        verbose: cli.verbose,
    });

    platform::logging::initialize(&config);
    if let Some(err) = load_error {
        chat_logging::chat_warn!("Using default configuration: {:#}", err);
        eprintln!("Warning: using default configuration: {err:#}");
    }

    platform::run_app(config)
}
