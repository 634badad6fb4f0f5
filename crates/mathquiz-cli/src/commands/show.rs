//! The `mathquiz show` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use mathquiz_core::report::TestReport;
use mathquiz_report::text::render_text;

use super::take::print_summary;

pub fn execute(report_path: PathBuf, format: String) -> Result<()> {
    let report = TestReport::load_json(&report_path)?;

    match format.as_str() {
        "text" => print!("{}", render_text(&report)),
        "table" => {
            println!(
                "Report for {} ({})",
                report.student_name,
                report.finished_at.format("%Y-%m-%d %H:%M UTC")
            );
            print_summary(&report);

            let mut table = Table::new();
            table.set_header(vec!["#", "Question", "Answer", "Expected", "Result"]);
            for r in &report.records {
                table.add_row(vec![
                    Cell::new(r.question_number),
                    Cell::new(r.question),
                    Cell::new(r.submitted_answer),
                    Cell::new(r.correct_answer),
                    Cell::new(if r.is_correct { "Correct" } else { "Incorrect" }),
                ]);
            }
            println!("{table}");
        }
        other => anyhow::bail!("unknown format '{other}' (expected table or text)"),
    }

    Ok(())
}
