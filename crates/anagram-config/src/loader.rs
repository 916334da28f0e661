//! Loading configuration from file, environment and command-line overrides

use crate::config::AppConfig;
use crate::error::{ConfigError, ConfigResult};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable overriding `server.host`
pub const ENV_HOST: &str = "ANAGRAMS_HOST";
/// Environment variable overriding `server.port`
pub const ENV_PORT: &str = "ANAGRAMS_PORT";
/// Environment variable overriding `dictionary.path`
pub const ENV_DICTIONARY: &str = "ANAGRAMS_DICTIONARY";
/// Environment variable overriding `logging.level`
pub const ENV_LOG: &str = "ANAGRAMS_LOG";

/// Values given on the command line; they win over everything else
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// `server.host`
    pub host: Option<String>,
    /// `server.port`
    pub port: Option<u16>,
    /// `dictionary.path`
    pub dictionary: Option<PathBuf>,
    /// `logging.level`
    pub log_level: Option<String>,
}

impl AppConfig {
    /// Load configuration with precedence: defaults < file < env < args.
    ///
    /// An explicit `config_file` must exist. Without one the default location
    /// is used if present, otherwise defaults.
    pub fn load(config_file: Option<&Path>, overrides: ConfigOverrides) -> ConfigResult<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path().filter(|p| p.exists()) {
                Some(path) => Self::from_file(&path)?,
                None => {
                    debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env_with(|name| std::env::var(name).ok());
        config.apply_overrides(overrides);
        Ok(config)
    }

    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Parse TOML held in memory
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// `~/.config/anagrams/config.toml` (platform equivalent)
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("anagrams").join("config.toml"))
    }

    /// Apply environment overrides using `lookup` to read variables.
    ///
    /// Values that fail to parse are ignored with a warning.
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => warn!("Ignoring invalid {ENV_PORT}={port}"),
            }
        }
        if let Some(path) = lookup(ENV_DICTIONARY) {
            self.dictionary.path = Some(PathBuf::from(path));
        }
        if let Some(level) = lookup(ENV_LOG) {
            self.logging.level = level;
        }
    }

    /// Apply command-line overrides
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(host) = overrides.host {
            self.server.host = host;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(path) = overrides.dictionary {
            self.dictionary.path = Some(path);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Render the configuration as TOML
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.socket_addr(), "127.0.0.1:3000");
        assert!(config.server.enable_cors);
        assert_eq!(config.server.max_body_bytes(), 10 * 1024 * 1024);
        assert_eq!(config.dictionary.path, None);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [server]
            port = 8080

            [dictionary]
            path = "/usr/share/dict/words"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(
            config.dictionary.path,
            Some(PathBuf::from("/usr/share/dict/words"))
        );
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_huge_body_limit_saturates() {
        let mut config = AppConfig::default();
        config.server.max_body_size_mb = usize::MAX;
        assert_eq!(config.server.max_body_bytes(), usize::MAX);
    }

    #[test]
    fn test_invalid_toml() {
        let err = AppConfig::from_toml_str("[server]\nport = \"lots\"").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"debug\"").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = AppConfig::load(
            Some(Path::new("/definitely/not/here.toml")),
            ConfigOverrides::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        config.apply_env_with(env(&[
            (ENV_HOST, "0.0.0.0"),
            (ENV_PORT, "9000"),
            (ENV_DICTIONARY, "words.txt"),
            (ENV_LOG, "warn"),
        ]));

        assert_eq!(config.server.socket_addr(), "0.0.0.0:9000");
        assert_eq!(config.dictionary.path, Some(PathBuf::from("words.txt")));
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_invalid_env_port_is_ignored() {
        let mut config = AppConfig::default();
        config.apply_env_with(env(&[(ENV_PORT, "not-a-port")]));
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_args_win_over_env() {
        let mut config = AppConfig::default();
        config.apply_env_with(env(&[(ENV_PORT, "9000")]));
        config.apply_overrides(ConfigOverrides {
            port: Some(4000),
            ..Default::default()
        });
        assert_eq!(config.server.port, 4000);
    }

    #[test]
    fn test_log_level_override_wins_over_env() {
        let mut config = AppConfig::default();
        config.apply_env_with(env(&[(ENV_LOG, "warn")]));
        config.apply_overrides(ConfigOverrides {
            log_level: Some("trace".to_string()),
            ..Default::default()
        });
        assert_eq!(config.logging.level, "trace");
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = AppConfig::default();
        config.dictionary.path = Some(PathBuf::from("words.txt"));

        let rendered = config.to_toml_string().unwrap();
        assert!(rendered.contains("[server]"));
        assert_eq!(AppConfig::from_toml_str(&rendered).unwrap(), config);
    }
}
