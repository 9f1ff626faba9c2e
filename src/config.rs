use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;

/// Server configuration, loadable from a YAML file.
///
/// Every section and field has a default, so an empty or absent file
/// still yields a working configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the listener binds to.
    pub listen_addr: String,
    /// Pending-connection backlog passed to listen().
    pub backlog: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Directory files and static pages are served from.
    pub root: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Receive buffer capacity; also the file-streaming chunk size.
    pub buffer_size: usize,
    /// Headers beyond this count are dropped during parsing.
    pub max_headers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:4221".to_string(),
            backlog: 5,
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("./public"),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            buffer_size: 1024,
            max_headers: 128,
        }
    }
}

impl Config {
    /// Loads the configuration from the file named by `FILESERVE_CONFIG`,
    /// or returns the defaults when the variable is unset.
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var("FILESERVE_CONFIG") {
            Ok(path) => {
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config file {}", path))?;
                serde_yaml::from_str(&text)
                    .with_context(|| format!("Invalid config file {}", path))
            }
            Err(_) => Ok(Self::default()),
        }
    }
}
