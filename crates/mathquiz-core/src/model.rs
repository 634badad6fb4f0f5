//! Core data model types for mathquiz.
//!
//! Operators, difficulty tiers, and the two-operand question every quiz is
//! built from.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// The four arithmetic operators a question can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Every operator, in catalog order.
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    /// Symbol used in the canonical question text.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Add),
            "-" | "\u{2212}" => Ok(Operator::Sub),
            "*" | "\u{d7}" => Ok(Operator::Mul),
            "/" | "\u{f7}" => Ok(Operator::Div),
            other => Err(format!("unknown operator: {other}")),
        }
    }
}

static EASY_OPERATORS: [Operator; 2] = [Operator::Add, Operator::Sub];
static HARD_OPERATORS: [Operator; 4] = Operator::ALL;

/// Difficulty tier controlling operand range and allowed operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyTier {
    Easy,
    Hard,
}

impl DifficultyTier {
    /// Tiers in the order their batches are generated.
    pub const ALL: [DifficultyTier; 2] = [DifficultyTier::Easy, DifficultyTier::Hard];

    /// Inclusive operand range for this tier.
    pub fn operand_range(self) -> RangeInclusive<u32> {
        match self {
            DifficultyTier::Easy => 1..=25,
            DifficultyTier::Hard => 1..=50,
        }
    }

    /// Operators usable at this tier.
    pub fn operators(self) -> &'static [Operator] {
        match self {
            DifficultyTier::Easy => &EASY_OPERATORS,
            DifficultyTier::Hard => &HARD_OPERATORS,
        }
    }

    /// Number of distinct questions this tier can produce.
    pub fn combinations(self) -> usize {
        let range = self.operand_range();
        let width = (range.end() - range.start() + 1) as usize;
        width * width * self.operators().len()
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyTier::Easy => write!(f, "easy"),
            DifficultyTier::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for DifficultyTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(DifficultyTier::Easy),
            "hard" => Ok(DifficultyTier::Hard),
            other => Err(format!("unknown difficulty tier: {other}")),
        }
    }
}

/// A single arithmetic question: two positive operands and one operator.
///
/// The [`Display`](fmt::Display) form is the canonical string
/// `"<operand1> <symbol> <operand2> = ?"`, used both for uniqueness checks
/// and for showing the question to the student. [`FromStr`] is its exact
/// inverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "QuestionFields")]
pub struct Question {
    operand1: u32,
    operator: Operator,
    operand2: u32,
}

#[derive(Deserialize)]
struct QuestionFields {
    operand1: u32,
    operator: Operator,
    operand2: u32,
}

impl TryFrom<QuestionFields> for Question {
    type Error = QuizError;

    fn try_from(fields: QuestionFields) -> Result<Self, Self::Error> {
        Question::new(fields.operand1, fields.operator, fields.operand2)
    }
}

impl Question {
    /// Create a question, rejecting zero operands.
    pub fn new(operand1: u32, operator: Operator, operand2: u32) -> Result<Self, QuizError> {
        for operand in [operand1, operand2] {
            if operand == 0 {
                return Err(QuizError::InvalidOperand(operand));
            }
        }
        Ok(Self {
            operand1,
            operator,
            operand2,
        })
    }

    pub fn operand1(&self) -> u32 {
        self.operand1
    }

    pub fn operand2(&self) -> u32 {
        self.operand2
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// The canonical text of this question.
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} = ?", self.operand1, self.operator, self.operand2)
    }
}

impl FromStr for Question {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || QuizError::MalformedQuestion(s.to_string());

        let tokens: Vec<&str> = s.split(' ').collect();
        let [lhs, op, rhs, "=", "?"] = tokens.as_slice() else {
            return Err(malformed());
        };

        let operand1: u32 = lhs.parse().map_err(|_| malformed())?;
        let operator: Operator = op.parse().map_err(|_| malformed())?;
        let operand2: u32 = rhs.parse().map_err(|_| malformed())?;

        Question::new(operand1, operator, operand2)
    }
}
