//! Test report types with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scoring::ResultBand;
use crate::session::AnswerRecord;

/// A finished test, ready for rendering or persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    pub student_name: String,
    /// Whether the student was given extra time.
    pub accommodation: bool,
    /// One record per question, in presentation order.
    pub records: Vec<AnswerRecord>,
    pub correct_count: usize,
    pub total_questions: usize,
    pub band: ResultBand,
    /// Allotted time including any extra time.
    pub allotted_minutes: u64,
    /// Extra time granted for an accommodation.
    #[serde(default)]
    pub extra_minutes: u64,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// Wall-clock time spent answering, in milliseconds.
    pub elapsed_ms: u64,
}

impl TestReport {
    /// Elapsed time in fractional minutes.
    pub fn elapsed_minutes(&self) -> f64 {
        self.elapsed_ms as f64 / 60_000.0
    }

    /// Share of questions answered correctly, in `[0, 1]`.
    pub fn score_ratio(&self) -> f64 {
        if self.total_questions == 0 {
            0.0
        } else {
            self.correct_count as f64 / self.total_questions as f64
        }
    }

    /// Whether the student finished inside the allotted time.
    pub fn within_allotted_time(&self) -> bool {
        self.elapsed_ms <= self.allotted_minutes.saturating_mul(60_000)
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: TestReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Question;

    fn make_record(number: usize, text: &str, submitted: f64) -> AnswerRecord {
        let question: Question = text.parse().unwrap();
        let correct_answer = question.correct_answer().unwrap();
        AnswerRecord {
            question_number: number,
            question,
            submitted_answer: submitted,
            correct_answer,
            is_correct: crate::grading::is_correct(submitted, correct_answer),
        }
    }

    fn make_report(records: Vec<AnswerRecord>, elapsed_ms: u64) -> TestReport {
        let correct_count = records.iter().filter(|r| r.is_correct).count();
        TestReport {
            id: Uuid::nil(),
            created_at: Utc::now(),
            student_name: "Ada".into(),
            accommodation: false,
            total_questions: records.len(),
            correct_count,
            band: ResultBand::Pass,
            allotted_minutes: 45,
            extra_minutes: 0,
            started_at: Utc::now(),
            finished_at: Utc::now(),
            elapsed_ms,
            records,
        }
    }

    #[test]
    fn derived_figures() {
        let report = make_report(
            vec![
                make_record(1, "7 + 5 = ?", 12.0),
                make_record(2, "10 / 4 = ?", 2.0),
            ],
            90_000,
        );
        assert_eq!(report.correct_count, 1);
        assert!((report.score_ratio() - 0.5).abs() < f64::EPSILON);
        assert!((report.elapsed_minutes() - 1.5).abs() < f64::EPSILON);
        assert!(report.within_allotted_time());

        let slow = make_report(vec![], 46 * 60_000);
        assert!(!slow.within_allotted_time());
        assert_eq!(slow.score_ratio(), 0.0);

        let mut unbounded = make_report(vec![], u64::MAX);
        unbounded.allotted_minutes = u64::MAX;
        assert!(unbounded.within_allotted_time());
    }

    #[test]
    fn json_roundtrip() {
        let report = make_report(vec![make_record(1, "10 / 4 = ?", 2.5)], 1000);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("report.json");

        report.save_json(&path).unwrap();
        let loaded = TestReport::load_json(&path).unwrap();

        assert_eq!(loaded.student_name, "Ada");
        assert_eq!(loaded.records, report.records);
        assert_eq!(loaded.band, ResultBand::Pass);
    }

    #[test]
    fn load_missing_report_fails() {
        let err = TestReport::load_json(Path::new("no_such_report.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read report"));
    }
}
