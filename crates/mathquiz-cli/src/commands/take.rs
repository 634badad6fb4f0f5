//! The `mathquiz take` command.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

use mathquiz_core::config::load_config_from;
use mathquiz_core::context::QuizContext;
use mathquiz_core::engine::{ProgressReporter, QuizEngine};
use mathquiz_core::report::TestReport;
use mathquiz_core::session::{AnswerRecord, StudentProfile};
use mathquiz_report::{write_reports, ReportFormat};

use crate::console::{parse_yes_no, Console};

/// Console progress reporter.
struct ConsoleReporter;

impl ProgressReporter for ConsoleReporter {
    fn on_session_start(&self, student: &StudentProfile, total: usize, allotted: Duration) {
        println!(
            "\nHello {}! You have {} minutes to answer {} questions.",
            student.name,
            allotted.as_secs() / 60,
            total
        );
    }

    fn on_answer(&self, _: &AnswerRecord) {}

    fn on_session_complete(&self, report: &TestReport) {
        println!(
            "\nTest completed in {:.2} minutes.",
            report.elapsed_minutes()
        );
        if !report.within_allotted_time() {
            println!(
                "You went over the {} minutes allotted.",
                report.allotted_minutes
            );
        }
        println!("Your test result: {}", report.band);
    }
}

pub fn execute(
    name: Option<String>,
    accommodation: Option<String>,
    seed: Option<u64>,
    output: Option<PathBuf>,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let formats = ReportFormat::parse_list(&format)?;
    let output_dir = output.unwrap_or_else(|| config.output_dir.clone());

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    console.say("Welcome to the Primary School Mathematics Test!")?;

    let name = match name.as_deref().map(str::trim) {
        Some(n) if !n.is_empty() => n.to_string(),
        _ => console.read_name()?,
    };
    let accommodation = match accommodation {
        Some(answer) => parse_yes_no(&answer),
        None => console.read_yes_no("Do you have a learning difficulty? (yes/no): ")?,
    };

    let context = match seed {
        Some(seed) => QuizContext::seeded(seed, config),
        None => QuizContext::from_entropy(config),
    };
    let engine = QuizEngine::new(context);
    let report = engine.run(
        StudentProfile {
            name,
            accommodation,
        },
        &mut console,
        &ConsoleReporter,
    )?;

    print_summary(&report);

    for path in write_reports(&report, &output_dir, &formats)? {
        tracing::info!(path = %path.display(), "tutor report written");
        println!("Tutor report saved as '{}'.", path.display());
    }
    println!("Thank you for taking the test!");

    Ok(())
}

pub(crate) fn print_summary(report: &TestReport) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec![
        "Student",
        "Score",
        "Result",
        "Test Duration",
        "Elapsed",
    ]);
    table.add_row(vec![
        Cell::new(&report.student_name),
        Cell::new(format!(
            "{}/{} ({:.0}%)",
            report.correct_count,
            report.total_questions,
            report.score_ratio() * 100.0
        )),
        Cell::new(report.band),
        Cell::new(format!("{} min", report.allotted_minutes)),
        Cell::new(format!("{:.2} min", report.elapsed_minutes())),
    ]);

    println!("\n{table}");
}
