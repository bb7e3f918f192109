use std::fmt;

use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://dataservice.accuweather.com";

/// Runtime configuration.
///
/// The API key is looked up in three places, first match wins:
/// `$ACCUWEATHER_API_KEY` at runtime, the `api_key` entry of the config
/// file, then the value of `ACCUWEATHER_API_KEY` at build time (the only
/// option on the web, where there is no filesystem or environment).
#[derive(Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: option_env!("ACCUWEATHER_API_KEY").unwrap_or("").to_owned(),
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }
}

// The key must never show up in logs, and `Config` gets logged on startup
// failures. Hand-rolled so the derive cannot leak it.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field(
                "api_key",
                &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" },
            )
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Config {
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn from_toml(raw: &str) -> anyhow::Result<Self> {
        use anyhow::Context;

        toml::from_str(raw).context("invalid configuration file")
    }

    /// Load from `$XDG_CONFIG_HOME/forecast-egui/config.toml` (or the
    /// platform equivalent), then apply the environment override. A missing
    /// file is not an error, it just means the defaults.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> anyhow::Result<Self> {
        use anyhow::Context;

        let mut config = match directories::ProjectDirs::from("", "", "forecast-egui") {
            Some(dirs) => {
                let path = dirs.config_dir().join("config.toml");
                match std::fs::read_to_string(&path) {
                    Ok(raw) => Self::from_toml(&raw)
                        .with_context(|| format!("in {}", path.display()))?,
                    Err(err) if err.kind() == std::io::ErrorKind::NotFound => Self::default(),
                    Err(err) => {
                        return Err(err)
                            .with_context(|| format!("cannot read {}", path.display()))
                    }
                }
            }
            None => Self::default(),
        };

        if let Ok(key) = std::env::var("ACCUWEATHER_API_KEY") {
            if !key.is_empty() {
                config.api_key = key;
            }
        }

        Ok(config)
    }

    /// On the web there is nothing to read; the build-time key is all we get.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> anyhow::Result<Self> {
        Ok(Self::default())
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_owned()
}
