//! Finished-session reports with JSON persistence and a markdown review.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scoring::ScoreSummary;
use crate::session::PracticeSession;

/// Snapshot of a finished practice session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Name of the exam that was taken.
    pub exam_name: String,
    /// The derived score at finish time.
    pub score: ScoreSummary,
    /// Whether the score reached the pass threshold.
    pub passed: bool,
    /// Wall-clock seconds spent answering.
    pub elapsed_seconds: u64,
    /// Every non-correct question, in exam order.
    pub review: Vec<ReviewEntry>,
}

/// One reviewed question in a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewEntry {
    /// Position of the question in the exam.
    pub index: usize,
    pub prompt: String,
    /// The selected letter, or `None` if unanswered.
    pub selected: Option<String>,
    /// Text of the selected option, when the letter names one.
    pub selected_text: Option<String>,
    /// The answer-key letter.
    pub answer: String,
    /// Text of the correct option, when the key names one.
    pub answer_text: Option<String>,
}

impl SessionReport {
    /// Build a report from a session's current state.
    pub fn from_session(session: &PracticeSession) -> Self {
        let score = session.score();
        let review = session
            .review()
            .into_iter()
            .map(|item| {
                let selected_text = item
                    .selected
                    .as_deref()
                    .and_then(single_letter)
                    .and_then(|letter| item.question.options.get(letter))
                    .map(String::from);
                let answer_text = single_letter(&item.question.answer)
                    .and_then(|letter| item.question.options.get(letter))
                    .map(String::from);
                ReviewEntry {
                    index: item.index,
                    prompt: item.question.prompt,
                    selected: item.selected,
                    selected_text,
                    answer: item.question.answer,
                    answer_text,
                }
            })
            .collect();

        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            exam_name: session.exam().name.clone(),
            score,
            passed: score.passed(),
            elapsed_seconds: session.elapsed_seconds(),
            review,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: SessionReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Format the report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "**{}** — {}% ({}/{} correct, {} answered) in {}\n\n",
            self.exam_name,
            self.score.percentage,
            self.score.correct,
            self.score.total,
            self.score.answered,
            format_elapsed(self.elapsed_seconds),
        ));

        if !self.review.is_empty() {
            md.push_str("### Review\n\n");
            md.push_str("| # | Question | Your answer | Correct answer |\n");
            md.push_str("|---|----------|-------------|----------------|\n");
            for entry in &self.review {
                md.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    entry.index + 1,
                    entry.prompt,
                    format_choice(entry.selected.as_deref(), entry.selected_text.as_deref()),
                    format_choice(Some(&entry.answer), entry.answer_text.as_deref()),
                ));
            }
        }

        md
    }
}

fn single_letter(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => Some(letter),
        _ => None,
    }
}

fn format_choice(letter: Option<&str>, text: Option<&str>) -> String {
    match (letter, text) {
        (Some(letter), Some(text)) => format!("{letter}) {text}"),
        (Some(letter), None) if !letter.is_empty() => letter.to_string(),
        _ => "unanswered".to_string(),
    }
}

/// Render seconds as `m:ss`.
pub fn format_elapsed(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
