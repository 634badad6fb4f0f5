//! The `mathquiz check` command.

use anyhow::Result;

use mathquiz_core::model::Question;

pub fn execute(question: String, answer: f64) -> Result<()> {
    let question: Question = question.trim().parse()?;
    let expected = question.correct_answer()?;

    if mathquiz_core::grading::is_correct(answer, expected) {
        println!("{question} {answer}: Correct");
    } else {
        println!("{question} {answer}: Incorrect (expected {expected})");
    }

    Ok(())
}
