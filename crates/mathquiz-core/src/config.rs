//! Quiz configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::model::DifficultyTier;
use crate::scoring::{BandThresholds, DurationPolicy};

/// Upper bound for either configured duration, one day.
pub const MAX_MINUTES: u64 = 24 * 60;

/// Top-level mathquiz configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Easy questions per session.
    #[serde(default = "default_batch")]
    pub easy_questions: usize,
    /// Hard questions per session.
    #[serde(default = "default_batch")]
    pub hard_questions: usize,
    /// Base test duration in minutes.
    #[serde(default = "default_base_minutes")]
    pub base_minutes: u64,
    /// Extra minutes for students with an accommodation.
    #[serde(default = "default_accommodation_minutes")]
    pub accommodation_minutes: u64,
    /// Directory tutor reports are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Result band thresholds.
    #[serde(default)]
    pub bands: BandThresholds,
}

fn default_batch() -> usize {
    10
}
fn default_base_minutes() -> u64 {
    45
}
fn default_accommodation_minutes() -> u64 {
    15
}
fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            easy_questions: default_batch(),
            hard_questions: default_batch(),
            base_minutes: default_base_minutes(),
            accommodation_minutes: default_accommodation_minutes(),
            output_dir: default_output_dir(),
            bands: BandThresholds::default(),
        }
    }
}

impl QuizConfig {
    /// Questions in one session across both tiers.
    pub fn total_questions(&self) -> usize {
        self.easy_questions + self.hard_questions
    }

    /// Batch size for a tier.
    pub fn batch_size(&self, tier: DifficultyTier) -> usize {
        match tier {
            DifficultyTier::Easy => self.easy_questions,
            DifficultyTier::Hard => self.hard_questions,
        }
    }

    pub fn duration_policy(&self) -> DurationPolicy {
        DurationPolicy::from_minutes(self.base_minutes, self.accommodation_minutes)
    }

    /// Reject configurations the generator or scorer cannot honour.
    pub fn validate(&self) -> Result<(), QuizError> {
        for tier in DifficultyTier::ALL {
            let size = self.batch_size(tier);
            if size == 0 {
                return Err(QuizError::InvalidConfig(format!(
                    "{tier} batch size must be at least 1"
                )));
            }
            if size > tier.combinations() {
                return Err(QuizError::InvalidConfig(format!(
                    "{tier} batch size {size} exceeds the {} distinct {tier} questions",
                    tier.combinations()
                )));
            }
        }
        if self.base_minutes == 0 {
            return Err(QuizError::InvalidConfig(
                "base_minutes must be at least 1".into(),
            ));
        }
        if self.base_minutes > MAX_MINUTES || self.accommodation_minutes > MAX_MINUTES {
            return Err(QuizError::InvalidConfig(format!(
                "test durations are limited to {MAX_MINUTES} minutes"
            )));
        }
        self.bands.validate(self.total_questions())
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `mathquiz.toml` in the current directory
/// 2. `~/.config/mathquiz/config.toml`
///
/// Environment variable override: `MATHQUIZ_OUTPUT_DIR`.
pub fn load_config() -> Result<QuizConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("mathquiz.toml");
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
            tracing::debug!("loading config from {}", path.display());
            parse_config(&path)?
        }
        None => QuizConfig::default(),
    };

    if let Ok(dir) = std::env::var("MATHQUIZ_OUTPUT_DIR") {
        config.output_dir = PathBuf::from(dir);
    }

    config.validate()?;
    if config.total_questions() != 20 && config.bands == BandThresholds::default() {
        tracing::warn!(
            "band thresholds are tuned for 20 questions but the session has {}",
            config.total_questions()
        );
    }

    Ok(config)
}

fn parse_config(path: &Path) -> Result<QuizConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str::<QuizConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("mathquiz"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn default_config() {
        let config = QuizConfig::default();
        assert_eq!(config.total_questions(), 20);
        assert_eq!(config.batch_size(DifficultyTier::Easy), 10);
        assert_eq!(
            config.duration_policy().allotted(true),
            Duration::from_secs(3600)
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_partial_config() {
        let toml_str = r#"
easy_questions = 5
hard_questions = 5
output_dir = "reports"

[bands]
fail_max = 2
pass_max = 5
merit_max = 8
"#;
        let config: QuizConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.total_questions(), 10);
        assert_eq!(config.base_minutes, 45);
        assert_eq!(config.output_dir, PathBuf::from("reports"));
        assert_eq!(config.bands.merit_max, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_configs() {
        let empty_tier = QuizConfig {
            easy_questions: 0,
            ..Default::default()
        };
        assert!(empty_tier.validate().is_err());

        let too_many = QuizConfig {
            easy_questions: 1251,
            ..Default::default()
        };
        assert!(too_many.validate().is_err());

        let unreachable = QuizConfig {
            easy_questions: 5,
            hard_questions: 5,
            ..Default::default()
        };
        assert!(unreachable.validate().is_err());

        let endless = QuizConfig {
            base_minutes: u64::MAX,
            ..Default::default()
        };
        assert!(matches!(endless.validate(), Err(QuizError::InvalidConfig(_))));

        let endless_extra = QuizConfig {
            accommodation_minutes: MAX_MINUTES + 1,
            ..Default::default()
        };
        assert!(endless_extra.validate().is_err());
    }

    #[test]
    fn load_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mathquiz.toml");
        std::fs::write(&path, "base_minutes = 30\naccommodation_minutes = 10\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(
            config.duration_policy().allotted(true),
            Duration::from_secs(40 * 60)
        );
    }

    #[test]
    fn load_missing_explicit_path_fails() {
        let err = load_config_from(Some(Path::new("definitely/not/here.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "hard_questions = 0\n").unwrap();
        assert!(load_config_from(Some(&path)).is_err());
    }
}
