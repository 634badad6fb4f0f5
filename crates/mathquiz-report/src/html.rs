//! HTML report generator.
//!
//! Produces a self-contained HTML file with all CSS inlined.

use anyhow::{Context, Result};
use std::path::Path;

use mathquiz_core::report::TestReport;
use mathquiz_core::scoring::ResultBand;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn band_class(band: ResultBand) -> &'static str {
    match band {
        ResultBand::Failed => "fail",
        ResultBand::Pass => "pass",
        ResultBand::Merit => "merit",
        ResultBand::Distinction => "distinction",
    }
}

/// Generate an HTML report from a test report.
pub fn generate_html(report: &TestReport) -> Result<String> {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>Math test report — {}</title>\n",
        html_escape(&report.student_name)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str(&format!(
        "<h1>Math Test Report for {}</h1>\n",
        html_escape(&report.student_name)
    ));
    let accommodation = if report.accommodation {
        format!("Yes (extra {} minutes given)", report.extra_minutes)
    } else {
        "No".to_string()
    };
    html.push_str(&format!(
        "<p class=\"meta\">Learning difficulty: <strong>{}</strong> | {}</p>\n",
        accommodation,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Summary
    html.push_str("<section class=\"dashboard\">\n");
    html.push_str("<h2>Summary</h2>\n");
    html.push_str("<table class=\"summary\">\n");
    html.push_str("<thead><tr><th>Result</th><th>Score</th><th>Test Duration</th><th>Elapsed Time</th></tr></thead>\n");
    html.push_str(&format!(
        "<tbody><tr><td class=\"{}\">{}</td><td>{}/{} ({:.0}%)</td><td>{} minutes</td><td>{:.2} minutes</td></tr></tbody>\n",
        band_class(report.band),
        report.band,
        report.correct_count,
        report.total_questions,
        report.score_ratio() * 100.0,
        report.allotted_minutes,
        report.elapsed_minutes(),
    ));
    html.push_str("</table>\n");
    html.push_str(&generate_score_bar(report.score_ratio()));
    html.push_str("</section>\n");

    // Per-question results
    html.push_str("<section class=\"results\">\n");
    html.push_str("<h2>Questions</h2>\n");
    html.push_str("<table class=\"results-table\">\n");
    html.push_str("<thead><tr><th>#</th><th>Question</th><th>Answer</th><th>Expected</th><th>Result</th></tr></thead>\n");
    html.push_str("<tbody>\n");

    for r in &report.records {
        let (class, text) = if r.is_correct {
            ("pass", "Correct")
        } else {
            ("fail", "Incorrect")
        };
        html.push_str(&format!(
            "<tr class=\"{}\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            class,
            r.question_number,
            html_escape(&r.question.to_string()),
            r.submitted_answer,
            r.correct_answer,
            text
        ));
    }

    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    let json = serde_json::to_string_pretty(report).context("failed to serialize report")?;
    html.push_str(&html_escape(&json));
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>");
    Ok(html)
}

/// Write an HTML report to a file.
pub fn write_html_report(report: &TestReport, path: &Path) -> Result<()> {
    let html = generate_html(report)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, html)
        .with_context(|| format!("failed to write HTML report to {}", path.display()))?;
    Ok(())
}

fn generate_score_bar(ratio: f64) -> String {
    let max_width = 400;
    let bar_height = 24;
    let width = (ratio.clamp(0.0, 1.0) * max_width as f64) as usize;

    let color = if ratio >= 0.8 {
        "#22c55e"
    } else if ratio >= 0.5 {
        "#eab308"
    } else {
        "#ef4444"
    };

    format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n  <rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"var(--border)\" rx=\"4\"/>\n  <rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"4\"/>\n</svg>\n",
        max_width, bar_height, max_width, bar_height, width, bar_height, color
    )
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --pass: #dcfce7; --fail: #fde2e2; --merit: #dbeafe; --distinction: #fef3c7; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --pass: #064e3b; --fail: #7f1d1d; --merit: #1e3a8a; --distinction: #78350f; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); }
.pass { background: var(--pass); }
.fail { background: var(--fail); }
.merit { background: var(--merit); }
.distinction { background: var(--distinction); }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
svg { margin: 1rem 0; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::make_report;

    #[test]
    fn html_report_contains_required_elements() {
        let report = make_report(&[("7 + 5 = ?", 12.0), ("10 / 4 = ?", 2.0)], true);
        let html = generate_html(&report).unwrap();

        assert!(html.contains("<html"));
        assert!(html.contains("</html>"));
        assert!(html.contains("Math Test Report for Ada"));
        assert!(html.contains("7 + 5 = ?"));
        assert!(html.contains("Incorrect"));
        assert!(html.contains("extra 15 minutes given"));
        assert!(html.contains("1/2"));
    }

    #[test]
    fn html_escapes_student_name() {
        let mut report = make_report(&[("1 + 1 = ?", 2.0)], false);
        report.student_name = "<script>alert(1)</script>".into();
        let html = generate_html(&report).unwrap();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn html_report_write_to_file() {
        let report = make_report(&[("1 + 1 = ?", 2.0)], false);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.html");

        write_html_report(&report, &path).unwrap();
        assert!(path.exists());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<html"));
    }

    #[test]
    fn html_write_failure_names_the_path() {
        let report = make_report(&[("1 + 1 = ?", 2.0)], false);
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        std::fs::write(&blocker, "").unwrap();
        let path = blocker.join("report.html");

        let err = write_html_report(&report, &path).unwrap_err();
        assert!(err.to_string().contains("failed to create directory"));
        assert!(err.to_string().contains("not_a_dir"));
    }
}
