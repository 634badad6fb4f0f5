//! Result bands and allotted test duration.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// Discrete outcome category derived from the correct-answer count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ResultBand {
    Failed,
    Pass,
    Merit,
    Distinction,
}

impl ResultBand {
    /// Map a correct-answer count to its band.
    pub fn from_correct_count(correct: usize, thresholds: &BandThresholds) -> Self {
        if correct <= thresholds.fail_max {
            ResultBand::Failed
        } else if correct <= thresholds.pass_max {
            ResultBand::Pass
        } else if correct <= thresholds.merit_max {
            ResultBand::Merit
        } else {
            ResultBand::Distinction
        }
    }
}

impl fmt::Display for ResultBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultBand::Failed => write!(f, "Failed"),
            ResultBand::Pass => write!(f, "Pass"),
            ResultBand::Merit => write!(f, "Merit"),
            ResultBand::Distinction => write!(f, "Distinction"),
        }
    }
}

/// Inclusive upper bounds of the Failed, Pass, and Merit bands.
///
/// Anything above `merit_max` is a Distinction. The defaults are tuned for
/// a 20-question session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandThresholds {
    #[serde(default = "default_fail_max")]
    pub fail_max: usize,
    #[serde(default = "default_pass_max")]
    pub pass_max: usize,
    #[serde(default = "default_merit_max")]
    pub merit_max: usize,
}

fn default_fail_max() -> usize {
    4
}
fn default_pass_max() -> usize {
    10
}
fn default_merit_max() -> usize {
    15
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            fail_max: default_fail_max(),
            pass_max: default_pass_max(),
            merit_max: default_merit_max(),
        }
    }
}

impl BandThresholds {
    /// Check the thresholds are strictly increasing and leave every band
    /// reachable in a session of `total_questions`.
    pub fn validate(&self, total_questions: usize) -> Result<(), QuizError> {
        if !(self.fail_max < self.pass_max && self.pass_max < self.merit_max) {
            return Err(QuizError::InvalidConfig(format!(
                "band thresholds must be strictly increasing (got {}, {}, {})",
                self.fail_max, self.pass_max, self.merit_max
            )));
        }
        if self.merit_max >= total_questions {
            return Err(QuizError::InvalidConfig(format!(
                "merit threshold {} leaves Distinction unreachable with {} questions",
                self.merit_max, total_questions
            )));
        }
        Ok(())
    }
}

/// Allotted test time: a base duration plus extra time for students with an
/// accommodation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationPolicy {
    pub base: Duration,
    pub accommodation_extra: Duration,
}

impl Default for DurationPolicy {
    fn default() -> Self {
        Self::from_minutes(45, 15)
    }
}

impl DurationPolicy {
    pub fn from_minutes(base_minutes: u64, extra_minutes: u64) -> Self {
        Self {
            base: Duration::from_secs(base_minutes.saturating_mul(60)),
            accommodation_extra: Duration::from_secs(extra_minutes.saturating_mul(60)),
        }
    }

    pub fn allotted(&self, has_accommodation: bool) -> Duration {
        if has_accommodation {
            self.base.saturating_add(self.accommodation_extra)
        } else {
            self.base
        }
    }
}
