use anyhow::{Context, Result};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, warn};

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct WisdomConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: Backend,
    pub db_path: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SearchConfig {
    /// Requested search size; the repository caps it again at 50.
    pub max_results: usize,
}

/// Which repository implementation serves requests.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Sqlite,
    Memory,
}

impl Backend {
    pub fn as_str(self) -> &'static str {
        match self {
            Backend::Sqlite => "sqlite",
            Backend::Memory => "memory",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" | "sql" => Ok(Backend::Sqlite),
            "memory" | "mem" => Ok(Backend::Memory),
            other => anyhow::bail!("unknown backend {other:?} (expected \"sqlite\" or \"memory\")"),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
            log_level: "info".into(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let db_path = default_data_dir()
            .join("wisdom.db")
            .to_string_lossy()
            .into_owned();
        Self {
            backend: Backend::default(),
            db_path,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_results: 50 }
    }
}

/// Returns `~/.perennial/`, or `./.perennial/` when there is no home directory.
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".perennial")
}

/// Returns the default config file path: `~/.perennial/config.toml`
pub fn default_config_path() -> PathBuf {
    default_data_dir().join("config.toml")
}

impl WisdomConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            WisdomConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply PERENNIAL_DB, PERENNIAL_BACKEND, PERENNIAL_HOST, PERENNIAL_PORT and
    /// PERENNIAL_LOG_LEVEL from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Same as [`apply_env_overrides`](Self::apply_env_overrides) with a custom lookup.
    /// Unparseable values are logged and ignored.
    pub fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("PERENNIAL_DB") {
            self.storage.db_path = val;
        }
        if let Some(val) = lookup("PERENNIAL_BACKEND") {
            match val.parse() {
                Ok(backend) => self.storage.backend = backend,
                Err(e) => warn!("ignoring PERENNIAL_BACKEND: {e}"),
            }
        }
        if let Some(val) = lookup("PERENNIAL_HOST") {
            self.server.host = val;
        }
        if let Some(val) = lookup("PERENNIAL_PORT") {
            match val.trim().parse() {
                Ok(port) => self.server.port = port,
                Err(_) => warn!("ignoring PERENNIAL_PORT: {val:?} is not a valid port"),
            }
        }
        if let Some(val) = lookup("PERENNIAL_LOG_LEVEL") {
            self.server.log_level = val;
        }
    }

    /// Resolve the database path, expanding `~` if needed.
    pub fn resolved_db_path(&self) -> PathBuf {
        expand_tilde(&self.storage.db_path)
    }

    /// `host:port` for the HTTP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn default_config_is_valid() {
        let config = WisdomConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.log_level, "info");
        assert_eq!(config.storage.backend, Backend::Sqlite);
        assert_eq!(config.search.max_results, 50);
        assert!(config.storage.db_path.ends_with("wisdom.db"));
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
[server]
port = 3000

[storage]
backend = "memory"
db_path = "/tmp/test.db"
"#;
        let config: WisdomConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.storage.backend, Backend::Memory);
        assert_eq!(config.storage.db_path, "/tmp/test.db");
        // defaults still apply for unset fields
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.search.max_results, 50);
    }

    #[test]
    fn unknown_backend_in_toml_is_an_error() {
        let result: std::result::Result<WisdomConfig, _> =
            toml::from_str("[storage]\nbackend = \"postgres\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn overrides_apply() {
        let mut config = WisdomConfig::default();
        config.apply_overrides_from(lookup(&[
            ("PERENNIAL_DB", "/tmp/override.db"),
            ("PERENNIAL_BACKEND", "Memory"),
            ("PERENNIAL_HOST", "0.0.0.0"),
            ("PERENNIAL_PORT", "9090"),
            ("PERENNIAL_LOG_LEVEL", "trace"),
        ]));

        assert_eq!(config.storage.db_path, "/tmp/override.db");
        assert_eq!(config.storage.backend, Backend::Memory);
        assert_eq!(config.bind_addr(), "0.0.0.0:9090");
        assert_eq!(config.server.log_level, "trace");
    }

    #[test]
    fn bad_override_values_are_ignored() {
        let mut config = WisdomConfig::default();
        config.apply_overrides_from(lookup(&[
            ("PERENNIAL_PORT", "eighty"),
            ("PERENNIAL_BACKEND", "redis"),
        ]));
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.backend, Backend::Sqlite);
    }

    #[test]
    fn missing_config_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = WisdomConfig::load_from(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.search.max_results, 50);
    }

    #[test]
    fn tilde_expands_to_home() {
        assert_eq!(expand_tilde("/abs/path.db"), PathBuf::from("/abs/path.db"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/x.db"), home.join("x.db"));
        }
    }
}
