//! Client configuration: RON file, then environment, then command-line flags.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chat_logging::LogDestination;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use spider_chat_transport::BackendSettings;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5001";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum LogTarget {
    File,
    Terminal,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub reveal_interval_ms: u64,
    pub connect_timeout_ms: Option<u64>,
    pub request_timeout_ms: Option<u64>,
    pub log_level: String,
    pub log_destination: LogTarget,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            reveal_interval_ms: 50,
            connect_timeout_ms: None,
            request_timeout_ms: None,
            log_level: "info".to_string(),
            // The terminal is the UI, so logs stay out of it by default.
            log_destination: LogTarget::File,
            log_file: PathBuf::from("spider_chat.log"),
        }
    }
}

/// Values taken from outside the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub env_base_url: Option<String>,
    pub reveal_interval_ms: Option<u64>,
    pub log: Option<LogTarget>,
    pub verbose: bool,
}

impl AppConfig {
    /// Reads the RON file at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("reading {}", path.display()));
            }
        };
        ron::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn apply_overrides(&mut self, overrides: Overrides) {
        if let Some(base_url) = overrides.base_url.or(overrides.env_base_url) {
            self.base_url = base_url;
        }
        if let Some(interval) = overrides.reveal_interval_ms {
            self.reveal_interval_ms = interval;
        }
        if let Some(target) = overrides.log {
            self.log_destination = target;
        }
        if overrides.verbose {
            self.log_level = "debug".to_string();
        }
    }

    /// Unknown level names fall back to `Info`.
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// Zero would spin the tick thread, so it is raised to one millisecond.
    pub fn reveal_interval(&self) -> Duration {
        Duration::from_millis(self.reveal_interval_ms.max(1))
    }

    pub fn backend_settings(&self) -> Result<BackendSettings> {
        let base_url = Url::parse(&self.base_url)
            .with_context(|| format!("invalid base url {:?}", self.base_url))?;
        Ok(BackendSettings {
            base_url,
            connect_timeout: self.connect_timeout_ms.map(Duration::from_millis),
            request_timeout: self.request_timeout_ms.map(Duration::from_millis),
        })
    }
}
