//! Unique question generation.
//!
//! Questions are drawn uniformly from a tier's operand range and operator
//! set. A candidate whose canonical text was already produced anywhere in the
//! session is rejected and redrawn, so uniqueness holds across tiers, not
//! just within one batch.

use std::collections::HashSet;

use rand::Rng;

use crate::error::QuizError;
use crate::model::{DifficultyTier, Question};

/// Consecutive rejected candidates tolerated for a single question slot.
pub const MAX_ATTEMPTS_PER_QUESTION: usize = 10_000;

/// Generate `count` questions for `tier` whose canonical text is not in
/// `seen`, inserting each accepted question's text into `seen`.
///
/// Fails with [`QuizError::GenerationExhausted`] when the tier cannot supply
/// enough unseen questions, either up front (the request exceeds what is
/// left of the tier's domain) or after [`MAX_ATTEMPTS_PER_QUESTION`]
/// consecutive rejections.
pub fn generate<R: Rng + ?Sized>(
    tier: DifficultyTier,
    count: usize,
    seen: &mut HashSet<String>,
    rng: &mut R,
) -> Result<Vec<Question>, QuizError> {
    let available = tier.combinations() - taken_in_tier(tier, seen);
    if count > available {
        return Err(QuizError::GenerationExhausted {
            tier,
            requested: count,
            produced: 0,
        });
    }

    let operators = tier.operators();
    let mut batch = Vec::with_capacity(count);
    let mut total_attempts = 0usize;

    while batch.len() < count {
        let mut attempts = 0usize;
        let question = loop {
            if attempts == MAX_ATTEMPTS_PER_QUESTION {
                return Err(QuizError::GenerationExhausted {
                    tier,
                    requested: count,
                    produced: batch.len(),
                });
            }
            attempts += 1;

            let operand1 = rng.gen_range(tier.operand_range());
            let operand2 = rng.gen_range(tier.operand_range());
            let operator = operators[rng.gen_range(0..operators.len())];
            let candidate = Question::new(operand1, operator, operand2)?;

            if seen.insert(candidate.canonical()) {
                break candidate;
            }
        };
        total_attempts += attempts;
        batch.push(question);
    }

    tracing::debug!(
        %tier,
        count,
        attempts = total_attempts,
        "generated question batch"
    );
    Ok(batch)
}

/// Whether `question` lies inside `tier`'s domain.
pub fn in_tier(tier: DifficultyTier, question: &Question) -> bool {
    let range = tier.operand_range();
    range.contains(&question.operand1())
        && range.contains(&question.operand2())
        && tier.operators().contains(&question.operator())
}

fn taken_in_tier(tier: DifficultyTier, seen: &HashSet<String>) -> usize {
    seen.iter()
        .filter_map(|text| text.parse::<Question>().ok())
        .filter(|q| in_tier(tier, q))
        .count()
}
