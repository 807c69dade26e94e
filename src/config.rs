use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AppError, Result};

pub const DEFAULT_TITLE: &str = "ChatBot - Exclusivo para Gatos";
pub const DEFAULT_PLACEHOLDER: &str = "Digite aqui (1, 2 ou 3)...";

/// 用户配置 (~/.config/gatobot/config.toml)，所有字段可省略
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub title: String,
    pub placeholder: String,
    pub smooth_scroll: bool,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            smooth_scroll: true,
            log_filter: "info".to_string(),
        }
    }
}

/// 默认配置文件路径
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gatobot").join("config.toml"))
}

/// 从TOML文件加载配置，文件不存在时返回默认值
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|source| AppError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "title = \"Miau\"\nsmooth_scroll = false").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.title, "Miau");
        assert!(!config.smooth_scroll);
        assert_eq!(config.placeholder, DEFAULT_PLACEHOLDER);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_malformed_file_names_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "title = ").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, AppError::ConfigParse { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }
}
