//! mathquiz CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod console;

#[derive(Parser)]
#[command(
    name = "mathquiz",
    version,
    about = "Primary-school arithmetic test generator and grader"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take the arithmetic test interactively
    Take {
        /// Student name (prompted for if omitted)
        #[arg(long)]
        name: Option<String>,

        /// Learning difficulty accommodation: yes or no (prompted for if omitted)
        #[arg(long)]
        accommodation: Option<String>,

        /// Seed for a reproducible question set
        #[arg(long)]
        seed: Option<u64>,

        /// Output directory (defaults to the configured one)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Report format: text, json, html, all (comma-separated)
        #[arg(long, default_value = "text")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print a shuffled question set without administering it
    Generate {
        /// Seed for a reproducible question set
        #[arg(long)]
        seed: Option<u64>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Include the correct answers (text format)
        #[arg(long)]
        answers: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Grade a single answer to a question like "7 + 5 = ?"
    Check {
        /// Question in canonical form
        #[arg(long)]
        question: String,

        /// Submitted answer
        #[arg(long, allow_negative_numbers = true)]
        answer: f64,
    },

    /// Summarize a saved JSON report
    Show {
        /// Report JSON file
        #[arg(long)]
        report: PathBuf,

        /// Output format: table, text
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Create a starter config file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("mathquiz=warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Take {
            name,
            accommodation,
            seed,
            output,
            format,
            config,
        } => commands::take::execute(name, accommodation, seed, output, format, config),
        Commands::Generate {
            seed,
            format,
            answers,
            config,
        } => commands::generate::execute(seed, format, answers, config),
        Commands::Check { question, answer } => commands::check::execute(question, answer),
        Commands::Show { report, format } => commands::show::execute(report, format),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
