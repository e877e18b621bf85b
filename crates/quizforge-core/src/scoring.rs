//! Score computation.
//!
//! Scores are always derived from the answers and the question list, never
//! cached as mutable state.

use serde::{Deserialize, Serialize};

use crate::model::Question;

/// Percentage at or above which a finished session counts as passed.
pub const PASS_THRESHOLD: u32 = 70;

/// Derived score over a question list and its recorded answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    /// Number of questions in the exam.
    pub total: usize,
    /// Number of answered questions.
    pub answered: usize,
    /// Answered questions matching the answer key.
    pub correct: usize,
    /// Answered questions not matching the answer key.
    pub wrong: usize,
    /// `round(100 * correct / total)`; unanswered questions count against
    /// the percentage through the denominator.
    pub percentage: u32,
}

impl ScoreSummary {
    pub fn passed(&self) -> bool {
        self.percentage >= PASS_THRESHOLD
    }
}

/// Compute the score for `answers`, where `answers[i]` is the recorded
/// selection for question `i`.
pub fn score(questions: &[Question], answers: &[Option<String>]) -> ScoreSummary {
    let mut answered = 0;
    let mut correct = 0;
    for (question, answer) in questions.iter().zip(answers) {
        if let Some(selected) = answer {
            answered += 1;
            if question.is_correct(selected) {
                correct += 1;
            }
        }
    }

    let total = questions.len();
    let percentage = if total == 0 {
        0
    } else {
        (100.0 * correct as f64 / total as f64).round() as u32
    };

    ScoreSummary {
        total,
        answered,
        correct,
        wrong: answered - correct,
        percentage,
    }
}

/// A question the user did not get right, for the results review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewItem {
    /// Position of the question in the exam.
    pub index: usize,
    pub question: Question,
    /// The recorded selection, or `None` if the question went unanswered.
    pub selected: Option<String>,
}

/// Every non-correct question in exam order, unanswered ones included.
pub fn review(questions: &[Question], answers: &[Option<String>]) -> Vec<ReviewItem> {
    questions
        .iter()
        .zip(answers)
        .enumerate()
        .filter(|(_, (question, answer))| match answer {
            Some(selected) => !question.is_correct(selected),
            None => true,
        })
        .map(|(index, (question, answer))| ReviewItem {
            index,
            question: question.clone(),
            selected: answer.clone(),
        })
        .collect()
}
