//! Scripted respondent for testing.

use std::collections::VecDeque;

use anyhow::Result;

use crate::engine::Respondent;
use crate::model::Question;

enum Script {
    Correct,
    Wrong,
    Fixed(VecDeque<f64>),
}

/// A respondent that answers without a human, for driving the engine in
/// tests and benchmarks.
pub struct ScriptedRespondent {
    script: Script,
    asked: usize,
}

impl ScriptedRespondent {
    /// Answers every question correctly.
    pub fn always_correct() -> Self {
        Self::with_script(Script::Correct)
    }

    /// Answers every question off by one.
    pub fn always_wrong() -> Self {
        Self::with_script(Script::Wrong)
    }

    /// Replays `answers` in order and errors once they run out.
    pub fn from_answers(answers: Vec<f64>) -> Self {
        Self::with_script(Script::Fixed(answers.into()))
    }

    fn with_script(script: Script) -> Self {
        Self { script, asked: 0 }
    }

    /// Number of questions answered so far.
    pub fn asked(&self) -> usize {
        self.asked
    }
}

impl Respondent for ScriptedRespondent {
    fn answer(&mut self, number: usize, question: &Question) -> Result<f64> {
        self.asked += 1;
        match &mut self.script {
            Script::Correct => Ok(question.correct_answer()?),
            Script::Wrong => Ok(question.correct_answer()? + 1.0),
            Script::Fixed(answers) => answers
                .pop_front()
                .ok_or_else(|| anyhow::anyhow!("no scripted answer for question {number}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripts() {
        let q: Question = "10 / 4 = ?".parse().unwrap();

        let mut correct = ScriptedRespondent::always_correct();
        assert_eq!(correct.answer(1, &q).unwrap(), 2.5);

        let mut wrong = ScriptedRespondent::always_wrong();
        assert_eq!(wrong.answer(1, &q).unwrap(), 3.5);

        let mut fixed = ScriptedRespondent::from_answers(vec![7.0]);
        assert_eq!(fixed.answer(1, &q).unwrap(), 7.0);
        assert!(fixed.answer(2, &q).is_err());
        assert_eq!(fixed.asked(), 2);
    }
}
