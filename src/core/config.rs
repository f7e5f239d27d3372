//! # Configuration
//!
//! Centralizes settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! There is exactly one setting: the backend base address. Config lives at
//! `~/.glimpse/config.toml`; the `GLIMPSE_BASE_URL` env var and the
//! `--base-url` flag override it in that order.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";

const ENV_BASE_URL: &str = "GLIMPSE_BASE_URL";

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GlimpseConfig {
    #[serde(default)]
    pub backend: BackendConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BackendConfig {
    pub base_url: Option<String>,
}

/// Concrete values after the override hierarchy is applied.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".glimpse").join("config.toml"))
}

fn load_file() -> Result<GlimpseConfig, ConfigError> {
    let Some(path) = config_path() else {
        return Ok(GlimpseConfig::default());
    };
    if !path.exists() {
        debug!("No config file at {}, using defaults", path.display());
        return Ok(GlimpseConfig::default());
    }
    let raw = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    toml::from_str(&raw).map_err(ConfigError::Parse)
}

/// Applies the override hierarchy to loose inputs. Pure, so precedence is
/// testable without touching the process environment.
fn resolve_from(
    file: GlimpseConfig,
    env_base_url: Option<String>,
    cli_base_url: Option<String>,
) -> ResolvedConfig {
    let base_url = cli_base_url
        .or(env_base_url)
        .or(file.backend.base_url)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    ResolvedConfig { base_url }
}

/// Resolves the effective configuration. A broken config file is reported
/// and skipped rather than aborting startup.
pub fn resolve(cli_base_url: Option<String>) -> ResolvedConfig {
    let file = load_file().unwrap_or_else(|e| {
        warn!("Ignoring config file: {e}");
        GlimpseConfig::default()
    });
    let env_base_url = std::env::var(ENV_BASE_URL).ok().filter(|v| !v.is_empty());
    let resolved = resolve_from(file, env_base_url, cli_base_url);
    debug!("Resolved backend base URL: {}", resolved.base_url);
    resolved
}
