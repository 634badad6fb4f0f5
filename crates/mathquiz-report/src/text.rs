//! Plain-text tutor report.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};

use mathquiz_core::report::TestReport;

/// Render the tutor report: header, one block per question, then the
/// summary.
pub fn render_text(report: &TestReport) -> String {
    let mut text = String::new();

    let _ = writeln!(text, "--- Math Test Report for {} ---", report.student_name);
    text.push('\n');

    let accommodation = if report.accommodation {
        format!("Yes (extra {} minutes given)", report.extra_minutes)
    } else {
        "No".to_string()
    };
    let _ = writeln!(text, "Learning Difficulty: {accommodation}");
    text.push('\n');

    text.push_str("Questions:\n");
    for record in &report.records {
        let result = if record.is_correct {
            "Correct"
        } else {
            "Incorrect"
        };
        let _ = write!(
            text,
            "\nQuestion {}: {}\nAnswer: {}\nResult: {}\n",
            record.question_number, record.question, record.submitted_answer, result
        );
    }

    let _ = write!(
        text,
        "\nScore: {}/{}\n",
        report.correct_count, report.total_questions
    );
    let _ = writeln!(text, "Test Result: {}", report.band);
    let _ = writeln!(text, "Test Duration: {} minutes", report.allotted_minutes);
    let _ = writeln!(text, "Elapsed Time: {:.2} minutes", report.elapsed_minutes());

    text
}

/// Write the plain-text report to a file, replacing any existing one.
pub fn write_text_report(report: &TestReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, render_text(report))
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::make_report;

    #[test]
    fn text_report_layout() {
        let report = make_report(&[("7 + 5 = ?", 12.0), ("10 / 4 = ?", 2.0)], false);
        let text = render_text(&report);

        assert!(text.starts_with("--- Math Test Report for Ada ---\n\n"));
        assert!(text.contains("Learning Difficulty: No\n"));
        assert!(text.contains("\nQuestion 1: 7 + 5 = ?\nAnswer: 12\nResult: Correct\n"));
        assert!(text.contains("\nQuestion 2: 10 / 4 = ?\nAnswer: 2\nResult: Incorrect\n"));
        assert!(text.contains("Score: 1/2\n"));
        assert!(text.contains("Test Result: Failed\n"));
        assert!(text.contains("Test Duration: 45 minutes\n"));
        assert!(text.contains("Elapsed Time: 1.50 minutes\n"));
    }

    #[test]
    fn accommodation_note() {
        let report = make_report(&[("10 / 4 = ?", 2.5)], true);
        let text = render_text(&report);
        assert!(text.contains("Learning Difficulty: Yes (extra 15 minutes given)\n"));
        assert!(text.contains("Answer: 2.5\n"));
        assert!(text.contains("Test Duration: 60 minutes\n"));
    }

    #[test]
    fn records_keep_their_order() {
        let report = make_report(
            &[("3 + 4 = ?", 7.0), ("1 + 2 = ?", 3.0), ("9 - 9 = ?", 0.0)],
            false,
        );
        let text = render_text(&report);
        let first = text.find("3 + 4 = ?").unwrap();
        let second = text.find("1 + 2 = ?").unwrap();
        let third = text.find("9 - 9 = ?").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn write_to_file_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Ada_report.txt");
        std::fs::write(&path, "stale").unwrap();

        let report = make_report(&[("7 + 5 = ?", 12.0)], false);
        write_text_report(&report, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("--- Math Test Report for Ada ---"));
        assert!(!content.contains("stale"));
    }
}
