//! Config file handling

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::codegen::{CallArgs, RendererKind};
use crate::errors::{ConvertError, Result};

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "CURL2HTTPX_CONFIG_DIR";

const CONFIG_FILE: &str = "config.toml";

/// curl2httpx configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub config_dir: PathBuf,
    /// `[defaults] renderer`
    pub renderer: Option<RendererKind>,
    /// `[defaults] client`
    pub client: Option<String>,
    /// `[call_args]` applied to every conversion
    pub call_args: CallArgs,
}

impl Default for Config {
    fn default() -> Self {
        Self::empty(Self::default_config_dir())
    }
}

impl Config {
    fn empty(config_dir: PathBuf) -> Self {
        Self {
            config_dir,
            renderer: None,
            client: None,
            call_args: CallArgs::new(),
        }
    }

    /// Load configuration from the default config directory
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_config_dir())
    }

    /// Load `config.toml` from `config_dir`; a missing file yields defaults
    pub fn load_from(config_dir: &Path) -> Result<Self> {
        let config_file = config_dir.join(CONFIG_FILE);

        if !config_file.exists() {
            debug!(path = %config_file.display(), "No config file");
            return Ok(Self::empty(config_dir.to_path_buf()));
        }

        let content = std::fs::read_to_string(&config_file)
            .map_err(|e| ConvertError::Config(format!("Failed to read config: {}", e)))?;

        let mut config = Self::parse(&content)?;
        config.config_dir = config_dir.to_path_buf();
        debug!(path = %config_file.display(), call_args = config.call_args.len(), "Loaded config");
        Ok(config)
    }

    /// Parse config file contents
    pub fn parse(content: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(content)
            .map_err(|e| ConvertError::Config(format!("Invalid config TOML: {}", e)))?;

        let defaults = table.get("defaults");

        let renderer = defaults
            .and_then(|d| d.get("renderer"))
            .and_then(|v| v.as_str())
            .map(str::parse::<RendererKind>)
            .transpose()?;

        let client = defaults
            .and_then(|d| d.get("client"))
            .and_then(|v| v.as_str())
            .map(String::from);

        let mut call_args = CallArgs::new();
        if let Some(section) = table.get("call_args") {
            let section = section
                .as_table()
                .ok_or_else(|| ConvertError::Config("[call_args] must be a table".to_string()))?;
            for (name, value) in section {
                let value = serde_json::to_value(value).map_err(|e| {
                    ConvertError::Config(format!("Unsupported value for call argument `{}`: {}", name, e))
                })?;
                call_args.insert(name.clone(), value);
            }
        }

        Ok(Self {
            config_dir: Self::default_config_dir(),
            renderer,
            client,
            call_args,
        })
    }

    /// Get the default config directory
    pub fn default_config_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return PathBuf::from(dir);
        }
        dirs::config_dir()
            .map(|p| p.join("curl2httpx"))
            .unwrap_or_else(|| PathBuf::from(".curl2httpx"))
    }
}
