//! mathquiz-report — Tutor report generation.
//!
//! Renders a finished [`TestReport`] as plain text, JSON, or a
//! self-contained HTML page and writes it next to the other reports for the
//! same student.

pub mod html;
pub mod text;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Result;

use mathquiz_core::report::TestReport;

/// Output formats for a tutor report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
    Html,
}

impl ReportFormat {
    pub const ALL: [ReportFormat; 3] = [ReportFormat::Text, ReportFormat::Json, ReportFormat::Html];

    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
            ReportFormat::Html => "html",
        }
    }

    /// Parse a comma-separated format list; `all` selects every format.
    pub fn parse_list(s: &str) -> Result<Vec<ReportFormat>> {
        if s.trim() == "all" {
            return Ok(Self::ALL.to_vec());
        }
        let mut formats = Vec::new();
        for part in s.split(',') {
            let format: ReportFormat = part.trim().parse().map_err(|e: String| anyhow::anyhow!(e))?;
            if !formats.contains(&format) {
                formats.push(format);
            }
        }
        anyhow::ensure!(!formats.is_empty(), "at least one report format is required");
        Ok(formats)
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Html => write!(f, "html"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "html" => Ok(ReportFormat::Html),
            other => Err(format!("unknown report format: {other}")),
        }
    }
}

/// File stem for a student's reports: `<name>_report`, with characters that
/// are unsafe in file names replaced by `_`.
pub fn report_file_stem(student_name: &str) -> String {
    let cleaned: String = student_name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let name = if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        "student".to_string()
    } else {
        cleaned
    };
    format!("{name}_report")
}

/// Path of the report for `student_name` in `format` under `dir`.
pub fn report_path(dir: &Path, student_name: &str, format: ReportFormat) -> PathBuf {
    dir.join(format!(
        "{}.{}",
        report_file_stem(student_name),
        format.extension()
    ))
}

/// Write `report` in each of `formats` under `dir`, returning the paths
/// written.
pub fn write_reports(
    report: &TestReport,
    dir: &Path,
    formats: &[ReportFormat],
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(formats.len());
    for &format in formats {
        let path = report_path(dir, &report.student_name, format);
        match format {
            ReportFormat::Text => text::write_text_report(report, &path)?,
            ReportFormat::Json => report.save_json(&path)?,
            ReportFormat::Html => html::write_html_report(report, &path)?,
        }
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod test_support {
    use std::time::Duration;

    use chrono::Utc;
    use mathquiz_core::report::TestReport;
    use mathquiz_core::scoring::{BandThresholds, DurationPolicy};
    use mathquiz_core::session::{StudentProfile, TestSession};

    /// Build a finished report for "Ada" answering `answers` in order, with
    /// 90 seconds elapsed.
    pub fn make_report(answers: &[(&str, f64)], accommodation: bool) -> TestReport {
        let questions = answers.iter().map(|(q, _)| q.parse().unwrap()).collect();
        let mut session = TestSession::start(
            StudentProfile {
                name: "Ada".into(),
                accommodation,
            },
            &DurationPolicy::default(),
            questions,
            Utc::now(),
        );
        for (_, answer) in answers {
            session.record_answer(*answer).unwrap();
        }
        session
            .finish(
                Utc::now(),
                Duration::from_millis(90_000),
                &BandThresholds::default(),
            )
            .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::make_report;

    #[test]
    fn file_stem_sanitizes_names() {
        assert_eq!(report_file_stem("Ada"), "Ada_report");
        assert_eq!(report_file_stem("  Ada Lovelace "), "Ada Lovelace_report");
        assert_eq!(report_file_stem("../etc/passwd"), ".._etc_passwd_report");
        assert_eq!(report_file_stem(".."), "student_report");
        assert_eq!(report_file_stem(""), "student_report");
    }

    #[test]
    fn parse_format_lists() {
        assert_eq!(
            ReportFormat::parse_list("text").unwrap(),
            vec![ReportFormat::Text]
        );
        assert_eq!(
            ReportFormat::parse_list("json, html,json").unwrap(),
            vec![ReportFormat::Json, ReportFormat::Html]
        );
        assert_eq!(ReportFormat::parse_list("all").unwrap().len(), 3);
        assert!(ReportFormat::parse_list("pdf").is_err());
    }

    #[test]
    fn writes_every_requested_format() {
        let report = make_report(&[("7 + 5 = ?", 12.0)], false);
        let dir = tempfile::tempdir().unwrap();

        let paths = write_reports(&report, dir.path(), &ReportFormat::ALL).unwrap();
        let names: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec!["Ada_report.txt", "Ada_report.json", "Ada_report.html"]
        );
        assert!(paths.iter().all(|p| p.exists()));

        let loaded = TestReport::load_json(&paths[1]).unwrap();
        assert_eq!(loaded.correct_count, 1);
    }
}
