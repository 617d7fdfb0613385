use crate::error::{Result, TriviaError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_DATA_FILE: &str = "data.json";

/// Log severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for the question bank, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TriviaConfig {
    /// Address the HTTP server binds to
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Data file, relative to the data directory unless absolute
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Send permissive CORS headers
    #[serde(default = "default_cors_enabled")]
    pub cors_enabled: bool,

    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,

    /// Fixed seed for quiz selection; entropy when unset
    #[serde(default)]
    pub quiz_seed: Option<u64>,
}

fn default_listen_addr() -> String {
    DEFAULT_LISTEN_ADDR.to_string()
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_cors_enabled() -> bool {
    true
}

fn default_log_level() -> LogLevel {
    LogLevel::Info
}

impl Default for TriviaConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            data_file: default_data_file(),
            cors_enabled: default_cors_enabled(),
            log_level: default_log_level(),
            quiz_seed: None,
        }
    }
}

impl TriviaConfig {
    /// Whether `config_dir` already holds a config file
    pub fn exists<P: AsRef<Path>>(config_dir: P) -> bool {
        config_dir.as_ref().join(CONFIG_FILENAME).exists()
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TriviaError::Io)?;
        let config: TriviaConfig =
            serde_json::from_str(&content).map_err(TriviaError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TriviaError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TriviaError::Serialization)?;
        fs::write(config_path, content).map_err(TriviaError::Io)?;
        Ok(())
    }

    /// Resolve the data file against `data_dir`
    pub fn data_path(&self, data_dir: &Path) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            data_dir.join(&self.data_file)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TriviaConfig::default();
        assert_eq!(config.listen_addr, "127.0.0.1:5000");
        assert_eq!(config.data_file, PathBuf::from("data.json"));
        assert!(config.cors_enabled);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.quiz_seed, None);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = TriviaConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, TriviaConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("fresh");

        assert!(!TriviaConfig::exists(&dir));

        let config = TriviaConfig {
            listen_addr: "0.0.0.0:8080".to_string(),
            quiz_seed: Some(7),
            log_level: LogLevel::Debug,
            ..TriviaConfig::default()
        };
        config.save(&dir).unwrap();
        assert!(TriviaConfig::exists(&dir));

        let loaded = TriviaConfig::load(&dir).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"log_level": "warn"}"#,
        )
        .unwrap();

        let config = TriviaConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.listen_addr, DEFAULT_LISTEN_ADDR);
    }

    #[test]
    fn test_data_path_resolution() {
        let dir = Path::new("/srv/trivia");
        let config = TriviaConfig::default();
        assert_eq!(config.data_path(dir), PathBuf::from("/srv/trivia/data.json"));

        let absolute = TriviaConfig {
            data_file: PathBuf::from("/var/lib/trivia.json"),
            ..TriviaConfig::default()
        };
        assert_eq!(absolute.data_path(dir), PathBuf::from("/var/lib/trivia.json"));
    }
}
