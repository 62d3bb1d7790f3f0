use crate::error::{LibrisError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// User configuration, stored as `config.json` in the platform config
/// directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LibrisConfig {
    /// Book file loaded at startup when no files are given on the
    /// command line.
    #[serde(default)]
    pub default_library: Option<PathBuf>,
}

impl LibrisConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(LibrisError::Io)?;
        let config: LibrisConfig =
            serde_json::from_str(&content).map_err(LibrisError::Serialization)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let config = LibrisConfig::load(dir.path()).unwrap();
        assert_eq!(config, LibrisConfig::default());
        assert!(config.default_library.is_none());
    }

    #[test]
    fn loads_default_library_path() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{ "default_library": "books/core.csv" }"#,
        )
        .unwrap();

        let config = LibrisConfig::load(dir.path()).unwrap();
        assert_eq!(
            config.default_library,
            Some(PathBuf::from("books/core.csv"))
        );
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{ "default_library": null, "future_key": true }"#,
        )
        .unwrap();

        let config = LibrisConfig::load(dir.path()).unwrap();
        assert!(config.default_library.is_none());
    }
}
