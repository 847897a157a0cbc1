//! Application configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use tutorkit_core::score::{CategoryThresholds, ScoreWeights, ScoringConfig, DEFAULT_DIFFICULTY};

/// Top-level tutorkit configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Root directory holding `topics/`, `questions.json`, and
    /// `attempts.json`.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Question bank path; `<data_dir>/questions.json` when unset.
    #[serde(default)]
    pub questions_file: Option<PathBuf>,
    /// Attempt log path; `<data_dir>/attempts.json` when unset.
    #[serde(default)]
    pub attempts_file: Option<PathBuf>,
    /// User attempts are recorded under when none is named.
    #[serde(default = "default_user")]
    pub default_user: String,
    /// Difficulty input fed to the score blend.
    #[serde(default = "default_difficulty")]
    pub default_difficulty: f64,
    /// Category cutoffs.
    #[serde(default)]
    pub thresholds: CategoryThresholds,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}
fn default_user() -> String {
    "demo_user".to_string()
}
fn default_difficulty() -> f64 {
    DEFAULT_DIFFICULTY
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            questions_file: None,
            attempts_file: None,
            default_user: default_user(),
            default_difficulty: default_difficulty(),
            thresholds: CategoryThresholds::default(),
        }
    }
}

impl AppConfig {
    pub fn topics_dir(&self) -> PathBuf {
        self.data_dir.join("topics")
    }

    pub fn questions_file(&self) -> PathBuf {
        self.questions_file
            .clone()
            .unwrap_or_else(|| self.data_dir.join("questions.json"))
    }

    pub fn attempts_file(&self) -> PathBuf {
        self.attempts_file
            .clone()
            .unwrap_or_else(|| self.data_dir.join("attempts.json"))
    }

    /// Scoring knobs from this config. The blend weights are fixed; only
    /// the difficulty input and the cutoffs are tunable.
    pub fn scoring(&self) -> ScoringConfig {
        ScoringConfig {
            difficulty: self.default_difficulty,
            weights: ScoreWeights::default(),
            thresholds: self.thresholds,
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `tutorkit.toml` in the current directory
/// 2. `~/.config/tutorkit/config.toml`
///
/// `TUTORKIT_DATA_DIR` overrides the data directory.
pub fn load_config() -> Result<AppConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<AppConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("tutorkit.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<AppConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => AppConfig::default(),
    };

    if let Ok(dir) = std::env::var("TUTORKIT_DATA_DIR") {
        config.data_dir = PathBuf::from(dir);
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config").join("tutorkit"))
}
