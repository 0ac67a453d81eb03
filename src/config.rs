use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, bail};
use serde::Deserialize;

/// Env var naming the configuration file.
pub const CONFIG_ENV: &str = "DOCSERVE_CONFIG";
/// Env var overriding `listen_addr`.
pub const LISTEN_ENV: &str = "LISTEN";

const DEFAULT_CONFIG_PATH: &str = "config.json";

fn default_listen_addr() -> String {
    "127.0.0.1:3000".to_string()
}

/// Server configuration, loaded once before the listener starts.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Absolute path of the document root.
    pub root_directory: String,

    /// Exact request path -> redirect target.
    #[serde(default)]
    pub redirect_map: HashMap<String, String>,

    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Also require the canonicalized path to stay under the root.
    #[serde(default)]
    pub strict_containment: bool,

    /// Upper bound on in-flight connections. `None` means unbounded.
    #[serde(default)]
    pub max_connections: Option<usize>,
}

impl Config {
    /// Loads the file named by `DOCSERVE_CONFIG` (default `config.json`)
    /// and applies the `LISTEN` override.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let cfg = Self::from_file(&path)?;
        Ok(cfg.with_listen_override(std::env::var(LISTEN_ENV).ok()))
    }

    /// Reads a config file. `.yaml`/`.yml` files are parsed as YAML,
    /// anything else as JSON.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );

        let cfg = if is_yaml {
            Self::from_yaml_str(&raw)
        } else {
            Self::from_json_str(&raw)
        };
        cfg.with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_json_str(raw: &str) -> anyhow::Result<Self> {
        let cfg: Config = serde_json::from_str(raw).context("malformed JSON config")?;
        cfg.validate()
    }

    pub fn from_yaml_str(raw: &str) -> anyhow::Result<Self> {
        let cfg: Config = serde_yaml::from_str(raw).context("malformed YAML config")?;
        cfg.validate()
    }

    /// Replaces `listen_addr` when an override is given.
    pub fn with_listen_override(mut self, listen: Option<String>) -> Self {
        if let Some(addr) = listen {
            self.listen_addr = addr;
        }
        self
    }

    fn validate(self) -> anyhow::Result<Self> {
        if !Path::new(&self.root_directory).is_absolute() {
            bail!(
                "root_directory must be an absolute path, got {:?}",
                self.root_directory
            );
        }
        if self.max_connections == Some(0) {
            bail!("max_connections must be greater than zero");
        }
        Ok(self)
    }
}
