use std::fs;
use std::path::Path;

use crate::model::Config;

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Read config.toml from the data directory. A missing file yields the
/// default config; a malformed one is an error.
pub fn read_config(data_dir: &Path) -> Result<Config, ConfigError> {
    let path = data_dir.join("config.toml");
    if !path.exists() {
        return Ok(Config::default());
    }
    let text = fs::read_to_string(&path).map_err(|e| ConfigError::Read {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(toml::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = read_config(dir.path()).unwrap();
        assert_eq!(config.storage.file, "weekly.db");
        assert!(config.ui.colors.is_empty());
        assert!(config.ui.show_key_hints);
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            r##"[ui.colors]
highlight = "#FF8800"
"##,
        )
        .unwrap();

        let config = read_config(dir.path()).unwrap();
        assert_eq!(config.storage.file, "weekly.db");
        assert_eq!(config.ui.colors.get("highlight").unwrap(), "#FF8800");
    }

    #[test]
    fn storage_file_override() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            "[storage]\nfile = \"tasks.db\"\n",
        )
        .unwrap();
        let config = read_config(dir.path()).unwrap();
        assert_eq!(config.storage.file, "tasks.db");
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "[ui\n").unwrap();
        assert!(read_config(dir.path()).is_err());
    }
}
