//! Store configuration.
//!
//! # Responsibility
//! - Name the database file the store operates on.
//! - Load that setting from an optional TOML file.
//!
//! # Invariants
//! - A missing config file is not an error; callers fall back to defaults.
//! - No environment variables are consulted.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Database file used when nothing else is configured.
pub const DEFAULT_DB_FILE_NAME: &str = "data.db";
/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "studentdesk.toml";

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: toml::de::Error },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid config `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

/// Location of the student database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
}

impl StoreConfig {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from(DEFAULT_DB_FILE_NAME)
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_FILE_NAME)
}

/// Loads a config file, or the default config file when `path` is `None`.
///
/// Returns `Ok(None)` only when the default file does not exist; an explicit
/// `path` that does not exist is an error.
pub fn load_config(path: Option<&Path>) -> ConfigResult<Option<StoreConfig>> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let default_path = default_config_path();
            if !default_path.exists() {
                return Ok(None);
            }
            default_path
        }
    };

    let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    let config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source,
    })?;
    Ok(Some(config))
}

/// Creates the parent directory of the configured database file if needed.
pub fn ensure_db_dir(config: &StoreConfig) -> std::io::Result<()> {
    if let Some(parent) = config.db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_data_db() {
        assert_eq!(StoreConfig::default().db_path, PathBuf::from("data.db"));
    }

    #[test]
    fn load_config_rejects_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Io { ref source, .. } if source.kind() == std::io::ErrorKind::NotFound
        ));
    }

    #[test]
    fn load_config_reads_db_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("studentdesk.toml");
        std::fs::write(&path, "db_path = \"records/students.db\"\n").unwrap();

        let loaded = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(loaded.db_path, PathBuf::from("records/students.db"));
    }

    #[test]
    fn load_config_defaults_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.toml");
        std::fs::write(&path, "").unwrap();

        let loaded = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(loaded, StoreConfig::default());
    }

    #[test]
    fn load_config_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "db_path = [").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn ensure_db_dir_creates_missing_parent() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::new(dir.path().join("nested/deeper/data.db"));

        ensure_db_dir(&config).unwrap();
        assert!(dir.path().join("nested/deeper").is_dir());
    }
}
