//! mathquiz-core — Question generation, grading, and scoring.
//!
//! This crate defines the question model, the unique question generator,
//! answer evaluation, result bands, and the session/report types the rest of
//! mathquiz builds on.

pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod generator;
pub mod grading;
pub mod mock;
pub mod model;
pub mod report;
pub mod scoring;
pub mod session;
pub mod shuffle;

pub use error::QuizError;
