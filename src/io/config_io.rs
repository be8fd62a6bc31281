use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::BoardConfig;

/// File name of the optional config inside the config directory
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Resolve the config directory: explicit override, then
/// `$XDG_CONFIG_HOME/taskboard`, then `$HOME/.config/taskboard`.
pub fn config_dir(override_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir.to_path_buf();
    }
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".config"));
    base.join("taskboard")
}

/// Get the user's home directory
fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

/// Read config.toml from the config directory. A missing file yields defaults.
pub fn read_config(config_dir: &Path) -> Result<BoardConfig, ConfigError> {
    let path = config_dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(BoardConfig::default());
    }
    let text = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError { path, source: e })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_is_default() {
        let tmp = TempDir::new().unwrap();
        let config = read_config(tmp.path()).unwrap();
        assert!(config.ui.show_key_hints);
    }

    #[test]
    fn reads_ui_section() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            "[ui]\nshow_key_hints = false\n\n[ui.light]\nbackground = \"#FAFAFA\"\n",
        )
        .unwrap();
        let config = read_config(tmp.path()).unwrap();
        assert!(!config.ui.show_key_hints);
        assert_eq!(
            config.ui.light.get("background").map(String::as_str),
            Some("#FAFAFA")
        );
    }

    #[test]
    fn malformed_config_reports_path() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "[ui\nbroken").unwrap();
        let err = read_config(tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains(CONFIG_FILE));
    }

    #[test]
    fn explicit_dir_wins() {
        let dir = config_dir(Some(Path::new("/tmp/tb-test")));
        assert_eq!(dir, PathBuf::from("/tmp/tb-test"));
    }
}
