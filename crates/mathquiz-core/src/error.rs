//! Quiz error types.
//!
//! Malformed input and bad configuration are ordinary errors; the remaining
//! variants signal a broken invariant inside the quiz pipeline and are never
//! shown to a student as something they can fix.

use thiserror::Error;

use crate::model::DifficultyTier;

/// Errors raised by question generation, grading, and session bookkeeping.
#[derive(Debug, Error, PartialEq)]
pub enum QuizError {
    /// A question string did not match `<a> <op> <b> = ?`.
    #[error("malformed question '{0}'")]
    MalformedQuestion(String),

    /// Operands must be positive integers.
    #[error("invalid operand {0}: operands must be at least 1")]
    InvalidOperand(u32),

    /// Division by zero was requested directly.
    #[error("division by zero: {lhs} / 0")]
    DivisionByZero { lhs: f64 },

    /// The generator could not find enough unseen questions.
    #[error("could not generate {requested} unique {tier} questions (got {produced})")]
    GenerationExhausted {
        tier: DifficultyTier,
        requested: usize,
        produced: usize,
    },

    /// A report was requested before every question was answered.
    #[error("session incomplete: {answered} of {total} questions answered")]
    IncompleteSession { answered: usize, total: usize },

    /// An answer was recorded after the last question.
    #[error("session already has answers for all {0} questions")]
    SessionComplete(usize),

    /// The configuration is internally inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl QuizError {
    /// Returns `true` if this error indicates a broken internal invariant
    /// rather than bad input.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            QuizError::GenerationExhausted { .. }
                | QuizError::IncompleteSession { .. }
                | QuizError::SessionComplete(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_classification() {
        assert!(QuizError::SessionComplete(20).is_internal());
        assert!(QuizError::GenerationExhausted {
            tier: DifficultyTier::Easy,
            requested: 10,
            produced: 3,
        }
        .is_internal());
        assert!(!QuizError::MalformedQuestion("x".into()).is_internal());
        assert!(!QuizError::DivisionByZero { lhs: 1.0 }.is_internal());
    }

    #[test]
    fn messages() {
        let err = QuizError::GenerationExhausted {
            tier: DifficultyTier::Hard,
            requested: 10,
            produced: 7,
        };
        assert_eq!(
            err.to_string(),
            "could not generate 10 unique hard questions (got 7)"
        );
    }
}
