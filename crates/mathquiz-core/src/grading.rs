//! Answer evaluation.
//!
//! Computes the arithmetically correct answer for a question and compares a
//! submitted answer against it within a fixed tolerance.

use crate::error::QuizError;
use crate::model::{Operator, Question};

/// Absolute tolerance under which two answers are considered equal.
///
/// Absorbs floating-point representation error in division results. Answers
/// are never rounded to the nearest integer.
pub const ANSWER_TOLERANCE: f64 = 0.0001;

impl Operator {
    /// Apply this operator to two operands using real arithmetic.
    ///
    /// Division by zero is a precondition violation and fails with
    /// [`QuizError::DivisionByZero`]. Generated questions never reach it
    /// because operands start at 1.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, QuizError> {
        match self {
            Operator::Add => Ok(lhs + rhs),
            Operator::Sub => Ok(lhs - rhs),
            Operator::Mul => Ok(lhs * rhs),
            Operator::Div if rhs == 0.0 => Err(QuizError::DivisionByZero { lhs }),
            Operator::Div => Ok(lhs / rhs),
        }
    }
}

impl Question {
    /// The correct answer to this question.
    pub fn correct_answer(&self) -> Result<f64, QuizError> {
        self.operator()
            .apply(f64::from(self.operand1()), f64::from(self.operand2()))
    }

    /// Grade a submitted answer against this question.
    pub fn check(&self, submitted: f64) -> Result<bool, QuizError> {
        Ok(is_correct(submitted, self.correct_answer()?))
    }
}

/// Returns `true` iff `|submitted - correct| < ANSWER_TOLERANCE`.
pub fn is_correct(submitted: f64, correct: f64) -> bool {
    (submitted - correct).abs() < ANSWER_TOLERANCE
}

/// Parse a canonical question string and compute its correct answer.
pub fn correct_answer_for(question: &str) -> Result<f64, QuizError> {
    question.parse::<Question>()?.correct_answer()
}
