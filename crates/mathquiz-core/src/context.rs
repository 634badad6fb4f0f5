//! Per-session quiz context.
//!
//! Owns the random source, the set of question texts already produced this
//! session, and the configuration. One context builds one question set; it
//! is never shared between threads.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::QuizConfig;
use crate::error::QuizError;
use crate::generator;
use crate::model::{DifficultyTier, Question};
use crate::shuffle::shuffle;

/// Session context threaded through generation and shuffling.
pub struct QuizContext<R: Rng = StdRng> {
    rng: R,
    seen: HashSet<String>,
    config: QuizConfig,
}

impl QuizContext<StdRng> {
    /// Context with a deterministic random source.
    pub fn seeded(seed: u64, config: QuizConfig) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), config)
    }

    /// Context seeded from OS entropy.
    pub fn from_entropy(config: QuizConfig) -> Self {
        Self::with_rng(StdRng::from_entropy(), config)
    }
}

impl<R: Rng> QuizContext<R> {
    pub fn with_rng(rng: R, config: QuizConfig) -> Self {
        Self {
            rng,
            seen: HashSet::new(),
            config,
        }
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    /// Canonical texts produced so far in this session.
    pub fn seen(&self) -> &HashSet<String> {
        &self.seen
    }

    /// Generate one tier's batch, sharing the session-wide seen set.
    pub fn generate_batch(
        &mut self,
        tier: DifficultyTier,
        count: usize,
    ) -> Result<Vec<Question>, QuizError> {
        generator::generate(tier, count, &mut self.seen, &mut self.rng)
    }

    /// Build the full question set: every tier's batch in order, then
    /// shuffled together.
    pub fn build_question_set(&mut self) -> Result<Vec<Question>, QuizError> {
        let mut questions = Vec::with_capacity(self.config.total_questions());
        for tier in DifficultyTier::ALL {
            let count = self.config.batch_size(tier);
            questions.extend(self.generate_batch(tier, count)?);
        }
        shuffle(&mut questions, &mut self.rng);
        tracing::debug!(questions = questions.len(), "built shuffled question set");
        Ok(questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::in_tier;
    use crate::model::Operator;

    #[test]
    fn default_session_has_ten_per_tier() {
        let mut ctx = QuizContext::seeded(11, QuizConfig::default());
        let questions = ctx.build_question_set().unwrap();

        assert_eq!(questions.len(), 20);
        let unique: HashSet<String> = questions.iter().map(|q| q.canonical()).collect();
        assert_eq!(unique.len(), 20);
        assert_eq!(ctx.seen().len(), 20);

        // Hard questions may also fall inside the easy domain, so count the
        // ones that can only be hard.
        let hard_only = questions
            .iter()
            .filter(|q| !in_tier(DifficultyTier::Easy, q))
            .count();
        assert!(hard_only <= 10);
        assert!(questions.iter().all(|q| in_tier(DifficultyTier::Hard, q)));
    }

    #[test]
    fn batches_before_shuffle_are_tier_ordered() {
        let mut ctx = QuizContext::seeded(12, QuizConfig::default());
        let easy = ctx.generate_batch(DifficultyTier::Easy, 10).unwrap();
        let hard = ctx.generate_batch(DifficultyTier::Hard, 10).unwrap();

        assert_eq!(easy.len(), 10);
        assert_eq!(hard.len(), 10);
        assert!(easy.iter().all(|q| in_tier(DifficultyTier::Easy, q)));
        assert!(easy
            .iter()
            .all(|q| matches!(q.operator(), Operator::Add | Operator::Sub)));
        assert!(hard.iter().all(|q| in_tier(DifficultyTier::Hard, q)));
        assert!(easy.iter().all(|e| !hard.contains(e)));
    }

    #[test]
    fn seed_makes_sessions_reproducible() {
        let a = QuizContext::seeded(42, QuizConfig::default())
            .build_question_set()
            .unwrap();
        let b = QuizContext::seeded(42, QuizConfig::default())
            .build_question_set()
            .unwrap();
        let c = QuizContext::seeded(43, QuizConfig::default())
            .build_question_set()
            .unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn configured_batch_sizes() {
        let config = QuizConfig {
            easy_questions: 3,
            hard_questions: 7,
            ..Default::default()
        };
        let questions = QuizContext::seeded(5, config)
            .build_question_set()
            .unwrap();
        assert_eq!(questions.len(), 10);
    }
}
