//! CLI configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use quizforge_core::EngineConfig;

/// Environment variable that overrides the configured seed.
pub const SEED_ENV_VAR: &str = "QUIZFORGE_SEED";

/// Top-level quizforge configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizforgeConfig {
    /// Output format used when `--format` is not given: "json" or "table".
    #[serde(default = "default_format")]
    pub format: String,
    /// Quiz engine settings.
    #[serde(default)]
    pub engine: EngineConfig,
}

fn default_format() -> String {
    "json".to_string()
}

impl Default for QuizforgeConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            engine: EngineConfig::default(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `quizforge.toml` in the current directory
/// 2. `~/.config/quizforge/config.toml`
///
/// `QUIZFORGE_SEED` overrides the engine seed from any source.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizforgeConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizforge.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizforgeConfig::default(),
    };

    if let Ok(seed) = std::env::var(SEED_ENV_VAR) {
        config.engine.seed = seed
            .trim()
            .parse()
            .with_context(|| format!("{SEED_ENV_VAR} must be an unsigned integer, got {seed:?}"))?;
    }

    Ok(config)
}

/// Parse a TOML config document.
pub fn parse_config(content: &str) -> Result<QuizforgeConfig> {
    let config: QuizforgeConfig = toml::from_str(content)?;
    config.engine.validate()?;
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizforge"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = QuizforgeConfig::default();
        assert_eq!(config.format, "json");
        assert_eq!(config.engine.seed, 42);
        assert_eq!(config.engine.choice_count, 4);
        assert_eq!(config.engine.default_question_count, 5);
    }

    #[test]
    fn parse_partial_config() {
        let config = parse_config(
            r#"
format = "table"

[engine]
seed = 7
"#,
        )
        .unwrap();
        assert_eq!(config.format, "table");
        assert_eq!(config.engine.seed, 7);
        assert_eq!(config.engine.choice_count, 4);
    }

    #[test]
    fn parse_rejects_invalid_engine() {
        let err = parse_config("[engine]\nchoice_count = 1\n").unwrap_err();
        assert!(format!("{err:#}").contains("choice_count"));
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let err = load_config_from(Some(Path::new("/nonexistent/quizforge.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[engine]\nchoice_count = 3\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.engine.choice_count, 3);
    }
}
