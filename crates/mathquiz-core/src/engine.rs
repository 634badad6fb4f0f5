//! Quiz session driver.
//!
//! Builds the shuffled question set, walks it through a [`Respondent`] one
//! question at a time, and finalizes the graded session into a report.

use std::time::{Duration, Instant};

use anyhow::Result;
use rand::rngs::StdRng;
use rand::Rng;

use crate::context::QuizContext;
use crate::model::Question;
use crate::report::TestReport;
use crate::session::{AnswerRecord, StudentProfile, TestSession};

/// Supplies the student's answer to each question.
///
/// Implementations own presentation and input validation: `answer` returns
/// only once a real number has been obtained, re-prompting as needed.
pub trait Respondent {
    fn answer(&mut self, number: usize, question: &Question) -> Result<f64>;
}

/// Progress reporting trait.
pub trait ProgressReporter {
    fn on_session_start(&self, student: &StudentProfile, total: usize, allotted: Duration);
    fn on_answer(&self, record: &AnswerRecord);
    fn on_session_complete(&self, report: &TestReport);
}

/// No-op progress reporter.
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn on_session_start(&self, _: &StudentProfile, _: usize, _: Duration) {}
    fn on_answer(&self, _: &AnswerRecord) {}
    fn on_session_complete(&self, _: &TestReport) {}
}

/// Runs a single test session.
pub struct QuizEngine<R: Rng = StdRng> {
    context: QuizContext<R>,
}

impl<R: Rng> QuizEngine<R> {
    pub fn new(context: QuizContext<R>) -> Self {
        Self { context }
    }

    /// Generate the question set and open a session for `student`.
    pub fn prepare(&mut self, student: StudentProfile) -> Result<TestSession> {
        let questions = self.context.build_question_set()?;
        let policy = self.context.config().duration_policy();
        Ok(TestSession::start(
            student,
            &policy,
            questions,
            chrono::Utc::now(),
        ))
    }

    /// Administer a full test and return the finished report.
    ///
    /// Nothing is returned until every question has an answer; a respondent
    /// error aborts the session without a partial report.
    pub fn run(
        mut self,
        student: StudentProfile,
        respondent: &mut dyn Respondent,
        progress: &dyn ProgressReporter,
    ) -> Result<TestReport> {
        let mut session = self.prepare(student)?;
        let total = session.questions().len();
        tracing::info!(
            student = %session.student().name,
            accommodation = session.student().accommodation,
            total,
            "test session started"
        );
        progress.on_session_start(session.student(), total, session.allotted());

        let start = Instant::now();
        while let Some((number, question)) = session.next_question() {
            let question = *question;
            let submitted = respondent.answer(number, &question)?;
            let record = session.record_answer(submitted)?;
            progress.on_answer(record);
        }
        let elapsed = start.elapsed();

        let report = session.finish(chrono::Utc::now(), elapsed, &self.context.config().bands)?;
        tracing::info!(
            student = %report.student_name,
            correct = report.correct_count,
            total = report.total_questions,
            band = %report.band,
            "test session finished"
        );
        progress.on_session_complete(&report);
        Ok(report)
    }
}
