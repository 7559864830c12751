//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level casefile configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CasefileConfig {
    /// Output directory for grade reports.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Output format when `--format` is not given.
    #[serde(default = "default_format")]
    pub default_format: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./casefile-results")
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for CasefileConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            default_format: default_format(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `casefile.toml` in the current directory
/// 2. `~/.config/casefile/config.toml`
///
/// Environment variable override: `CASEFILE_OUTPUT_DIR`.
pub fn load_config_from(path: Option<&Path>) -> Result<CasefileConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("casefile.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => parse_config(&path)?,
        None => CasefileConfig::default(),
    };

    if let Ok(dir) = std::env::var("CASEFILE_OUTPUT_DIR") {
        if !dir.is_empty() {
            config.output_dir = PathBuf::from(dir);
        }
    }

    Ok(config)
}

fn parse_config(path: &Path) -> Result<CasefileConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str::<CasefileConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("casefile"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = CasefileConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("./casefile-results"));
        assert_eq!(config.default_format, "text");
    }

    #[test]
    fn parse_partial_config() {
        let config: CasefileConfig = toml::from_str(r#"default_format = "json""#).unwrap();
        assert_eq!(config.default_format, "json");
        assert_eq!(config.output_dir, PathBuf::from("./casefile-results"));
    }

    #[test]
    fn explicit_path_must_exist() {
        let err = load_config_from(Some(Path::new("/no/such/casefile.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_path_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("casefile.toml");
        std::fs::write(&path, "output_dir = \"reports\"\ndefault_format = \"json\"\n").unwrap();
        let config = parse_config(&path).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("reports"));
        assert_eq!(config.default_format, "json");
    }
}
