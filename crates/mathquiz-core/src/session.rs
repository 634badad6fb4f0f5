//! Test session accumulator.
//!
//! A [`TestSession`] is created with its shuffled questions, collects one
//! [`AnswerRecord`] per question in presentation order, and is consumed into
//! a [`TestReport`] once every question has been answered.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::QuizError;
use crate::model::Question;
use crate::report::TestReport;
use crate::scoring::{BandThresholds, DurationPolicy, ResultBand};

/// Who is taking the test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub name: String,
    /// Whether the student qualifies for extended time.
    pub accommodation: bool,
}

/// A graded answer to one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// 1-based position in the presented sequence.
    pub question_number: usize,
    pub question: Question,
    pub submitted_answer: f64,
    pub correct_answer: f64,
    pub is_correct: bool,
}

/// An in-progress test.
#[derive(Debug, Clone)]
pub struct TestSession {
    student: StudentProfile,
    allotted: Duration,
    extra_time: Duration,
    questions: Vec<Question>,
    records: Vec<AnswerRecord>,
    started_at: DateTime<Utc>,
}

impl TestSession {
    /// Open a session. The allotted time comes from `policy` and the
    /// student's accommodation flag.
    pub fn start(
        student: StudentProfile,
        policy: &DurationPolicy,
        questions: Vec<Question>,
        started_at: DateTime<Utc>,
    ) -> Self {
        let allotted = policy.allotted(student.accommodation);
        Self {
            extra_time: allotted.saturating_sub(policy.base),
            student,
            allotted,
            questions,
            records: Vec::new(),
            started_at,
        }
    }

    pub fn student(&self) -> &StudentProfile {
        &self.student
    }

    pub fn allotted(&self) -> Duration {
        self.allotted
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn records(&self) -> &[AnswerRecord] {
        &self.records
    }

    /// The next unanswered question with its 1-based number.
    pub fn next_question(&self) -> Option<(usize, &Question)> {
        let index = self.records.len();
        self.questions.get(index).map(|q| (index + 1, q))
    }

    pub fn is_complete(&self) -> bool {
        self.records.len() == self.questions.len()
    }

    pub fn correct_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_correct).count()
    }

    /// Grade `submitted` against the next unanswered question and record it.
    pub fn record_answer(&mut self, submitted: f64) -> Result<&AnswerRecord, QuizError> {
        let (question_number, question) = match self.next_question() {
            Some((number, question)) => (number, *question),
            None => return Err(QuizError::SessionComplete(self.questions.len())),
        };

        let correct_answer = question.correct_answer()?;
        let record = AnswerRecord {
            question_number,
            question,
            submitted_answer: submitted,
            correct_answer,
            is_correct: crate::grading::is_correct(submitted, correct_answer),
        };
        tracing::debug!(
            question_number,
            question = %question,
            correct = record.is_correct,
            "answer recorded"
        );

        let index = self.records.len();
        self.records.push(record);
        Ok(&self.records[index])
    }

    /// Finalize into a report. Fails if any question is still unanswered.
    pub fn finish(
        self,
        finished_at: DateTime<Utc>,
        elapsed: Duration,
        thresholds: &BandThresholds,
    ) -> Result<TestReport, QuizError> {
        if !self.is_complete() {
            return Err(QuizError::IncompleteSession {
                answered: self.records.len(),
                total: self.questions.len(),
            });
        }

        let correct_count = self.correct_count();
        let band = ResultBand::from_correct_count(correct_count, thresholds);

        Ok(TestReport {
            id: Uuid::new_v4(),
            created_at: finished_at,
            student_name: self.student.name,
            accommodation: self.student.accommodation,
            total_questions: self.questions.len(),
            correct_count,
            band,
            allotted_minutes: self.allotted.as_secs() / 60,
            extra_minutes: self.extra_time.as_secs() / 60,
            started_at: self.started_at,
            finished_at,
            elapsed_ms: elapsed.as_millis() as u64,
            records: self.records,
        })
    }
}
