//! Configuration loading for Oculyx.
//! Reads oculyx.toml from the current directory or path in OCULYX_CONFIG env var.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_PATH: &str = "oculyx.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub explain: ExplainConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Http,
    File,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_source_kind")]
    pub kind: SourceKind,
    #[serde(default = "default_source_url")]
    pub url: String,
    #[serde(default = "default_source_path")]
    pub path: PathBuf,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_source_kind()  -> SourceKind { SourceKind::File }
fn default_source_url()   -> String     { "http://localhost:5173/store/all_eye.xlsx".to_string() }
fn default_source_path()  -> PathBuf    { PathBuf::from("store/all_eye.xlsx") }
fn default_timeout_secs() -> u64        { 30 }

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: default_source_kind(),
            url: default_source_url(),
            path: default_source_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainConfig {
    /// Disease code selected for the explainability section.
    #[serde(default = "default_disease")]
    pub disease: String,
}

fn default_disease() -> String { "D".to_string() }

impl Default for ExplainConfig {
    fn default() -> Self {
        Self { disease: default_disease() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, used when RUST_LOG is not set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String { "oculyx=info,info".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_log_filter() }
    }
}

impl Config {
    /// Load configuration from oculyx.toml.
    /// Checks OCULYX_CONFIG env var first, then current directory. Without
    /// either, built-in defaults are used. OCULYX_SOURCE_URL overrides
    /// `source.url` and selects the HTTP source.
    pub fn load() -> anyhow::Result<Self> {
        let mut config = match std::env::var("OCULYX_CONFIG") {
            Ok(path) => {
                if !Path::new(&path).exists() {
                    anyhow::bail!("Config file not found: {}", path);
                }
                Self::from_file(Path::new(&path))?
            }
            Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_PATH))?
            }
            Err(_) => Self::default(),
        };

        if let Ok(url) = std::env::var("OCULYX_SOURCE_URL") {
            config.source.kind = SourceKind::Http;
            config.source.url = url;
        }
        Ok(config)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests;
