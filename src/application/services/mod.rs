//! Application services

pub mod quiz;

pub use quiz::{QuizService, SessionSummary, Verdict};
