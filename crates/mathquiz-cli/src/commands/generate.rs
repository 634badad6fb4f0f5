//! The `mathquiz generate` command.

use std::path::PathBuf;

use anyhow::Result;

use mathquiz_core::config::load_config_from;
use mathquiz_core::context::QuizContext;

pub fn execute(
    seed: Option<u64>,
    format: String,
    answers: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let mut context = match seed {
        Some(seed) => QuizContext::seeded(seed, config),
        None => QuizContext::from_entropy(config),
    };
    let questions = context.build_question_set()?;
    tracing::debug!(count = questions.len(), ?seed, "generated question set");

    match format.as_str() {
        "json" if answers => {
            let entries = questions
                .iter()
                .map(|question| {
                    Ok(serde_json::json!({
                        "question": question,
                        "correct_answer": question.correct_answer()?,
                    }))
                })
                .collect::<Result<Vec<_>>>()?;
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&questions)?);
        }
        "text" => {
            for (i, question) in questions.iter().enumerate() {
                if answers {
                    println!(
                        "Question {}: {} {}",
                        i + 1,
                        question,
                        question.correct_answer()?
                    );
                } else {
                    println!("Question {}: {}", i + 1, question);
                }
            }
        }
        other => anyhow::bail!("unknown format '{other}' (expected text or json)"),
    }

    Ok(())
}
