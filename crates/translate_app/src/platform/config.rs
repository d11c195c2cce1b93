use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use translate_core::{SupersededPolicy, DEFAULT_DEBOUNCE, DEFAULT_POLL_INTERVAL};
use translate_engine::{python_for_virtual_env, CommandSettings, DEFAULT_EOS_TOKEN, DEFAULT_MODEL};
use translate_logging::translate_warn;

use super::logging::{LogDestination, LogLevel};

const CONFIG_FILENAME: &str = "translator.ron";

const MAX_DEBOUNCE_MS: u64 = 60_000;
// Below this the window repaints continuously.
const MIN_POLL_INTERVAL_MS: u64 = 10;
const MAX_POLL_INTERVAL_MS: u64 = 5_000;

/// Overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "PLAMO_TRANSLATE_CONFIG";

/// Settings read from `translator.ron`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub debounce_ms: u64,
    pub poll_interval_ms: u64,
    /// Explicit interpreter or wrapper; `None` resolves `python` via `VIRTUAL_ENV`.
    pub program: Option<PathBuf>,
    pub prefix_args: Vec<String>,
    pub model: String,
    pub eos_token: String,
    pub timeout_secs: Option<u64>,
    /// Show only the latest issued attempt instead of the latest completed one.
    pub discard_superseded: bool,
    pub strip_generation_stats: bool,
    pub log_destination: LogDestination,
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
            poll_interval_ms: DEFAULT_POLL_INTERVAL.as_millis() as u64,
            program: None,
            prefix_args: vec![
                "-m".to_string(),
                "mlx_lm".to_string(),
                "generate".to_string(),
            ],
            model: DEFAULT_MODEL.to_string(),
            eos_token: DEFAULT_EOS_TOKEN.to_string(),
            timeout_secs: None,
            discard_superseded: false,
            strip_generation_stats: false,
            log_destination: LogDestination::Both,
            log_level: LogLevel::Info,
        }
    }
}

impl AppConfig {
    /// `debounce_ms`, clamped to at most one minute.
    pub fn debounce(&self) -> Duration {
        clamp_millis("debounce_ms", self.debounce_ms, 0, MAX_DEBOUNCE_MS)
    }

    /// `poll_interval_ms`, clamped to 10 ms..=5 s.
    pub fn poll_interval(&self) -> Duration {
        clamp_millis(
            "poll_interval_ms",
            self.poll_interval_ms,
            MIN_POLL_INTERVAL_MS,
            MAX_POLL_INTERVAL_MS,
        )
    }

    pub fn superseded_policy(&self) -> SupersededPolicy {
        if self.discard_superseded {
            SupersededPolicy::LatestIssued
        } else {
            SupersededPolicy::LastCompleted
        }
    }

    pub fn command_settings(&self) -> CommandSettings {
        let program = self
            .program
            .clone()
            .unwrap_or_else(|| python_for_virtual_env(std::env::var_os("VIRTUAL_ENV").as_deref()));
        CommandSettings {
            program,
            prefix_args: self.prefix_args.clone(),
            model: self.model.clone(),
            eos_token: self.eos_token.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
            strip_generation_stats: self.strip_generation_stats,
        }
    }
}

fn clamp_millis(field: &str, value: u64, min: u64, max: u64) -> Duration {
    let clamped = value.clamp(min, max);
    if clamped != value {
        translate_warn!("{} = {} out of range {}..={}; using {}", field, value, min, max, clamped);
    }
    Duration::from_millis(clamped)
}

/// `$PLAMO_TRANSLATE_CONFIG`, or `./translator.ron`.
pub fn config_path() -> PathBuf {
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(".").join(CONFIG_FILENAME),
    }
}

/// Reads the config file. A missing file is `Ok(None)`.
pub fn read_config(path: &Path) -> anyhow::Result<Option<AppConfig>> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read config {}", path.display()))
        }
    };
    let config: AppConfig = ron::from_str(&content)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    Ok(Some(config))
}
