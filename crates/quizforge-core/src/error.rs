//! Core error types.
//!
//! Parsing and scoring fail soft (empty or partial results); these errors
//! cover the boundaries where failure must stop exam construction.

use thiserror::Error;

/// Errors when constructing a practice session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The exam set has no questions; callers treat this as a parse failure
    /// upstream, so a session never starts over an empty set.
    #[error("exam set contains no questions")]
    EmptyExam,
}

/// Errors from the exam-generation pipeline.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The completion service call failed; no partial state is retained.
    #[error("completion service failed: {0}")]
    Service(#[source] anyhow::Error),

    /// The service responded, but no question could be parsed out of the
    /// response text.
    #[error("the response contained no parseable questions")]
    NoQuestions,
}
