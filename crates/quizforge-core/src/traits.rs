//! The completion-service trait and its request/response types.
//!
//! The async trait is implemented by the `quizforge-providers` crate; the
//! core only sees raw text coming back and never talks to the network
//! itself.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::model::Difficulty;

/// Source text beyond this many characters is not sent to the service.
pub const SOURCE_CHAR_LIMIT: usize = 8_000;

/// Trait for completion backends that turn source text into Aiken-format
/// exam text.
#[async_trait]
pub trait ExamGenerator: Send + Sync {
    /// Human-readable backend name (e.g. "openai").
    fn name(&self) -> &str;

    /// Request exam text. One awaited call; retries, cancellation, and
    /// timeouts are not part of this contract.
    async fn generate(&self, request: &GenerateRequest) -> anyhow::Result<GenerateResponse>;
}

/// Request for generated exam text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Model identifier (e.g. "gpt-3.5-turbo").
    pub model: String,
    /// Plain text the questions should be drawn from.
    pub source_text: String,
    /// Exact number of questions to ask for.
    pub question_count: u32,
    pub difficulty: Difficulty,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f64,
}

/// Response from a completion backend.
///
/// `content` is raw text expected, but not guaranteed, to be Aiken blocks;
/// the strict parser downstream tolerates non-conforming output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The raw response text.
    pub content: String,
    /// Model that actually answered.
    pub model: String,
    /// Token usage.
    pub token_usage: TokenUsage,
    /// Latency in milliseconds.
    pub latency_ms: u64,
}

/// Token usage of a generation call.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Build the generation prompt: the Aiken format contract plus the source
/// text, truncated to [`SOURCE_CHAR_LIMIT`] characters.
pub fn build_exam_prompt(request: &GenerateRequest) -> String {
    let source = truncate_chars(&request.source_text, SOURCE_CHAR_LIMIT);
    format!(
        "Generate exactly {count} multiple-choice questions, difficulty: {difficulty}.\n\
         \n\
         REQUIRED FORMAT (pure AIKEN, no numbering and no commentary):\n\
         Question text on a single line ending with a question mark?\n\
         A. Option 1\n\
         B. Option 2\n\
         C. Option 3\n\
         D. Option 4\n\
         ANSWER: X\n\
         \n\
         RULES:\n\
         1. Every block starts with the question on its own line, followed by options A.-D. and the answer line.\n\
         2. Never repeat the question as an option or inside an option.\n\
         3. No explanations, headings, numbering, or markup (Markdown, JSON, etc.).\n\
         4. If the text does not support that many questions, generate only the ones it does and stop.\n\
         5. Keep one blank line between questions.\n\
         \n\
         Respond with the AIKEN block only. If you cannot generate all of them, generate as many as you can.\n\
         \n\
         Text:\n\
         {source}",
        count = request.question_count,
        difficulty = request.difficulty,
    )
}

/// Truncate to at most `max` characters on a char boundary.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((byte_index, _)) => &s[..byte_index],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(source: &str) -> GenerateRequest {
        GenerateRequest {
            model: "gpt-3.5-turbo".into(),
            source_text: source.into(),
            question_count: 5,
            difficulty: Difficulty::Medium,
            max_tokens: 2048,
            temperature: 0.7,
        }
    }

    #[test]
    fn prompt_names_count_and_difficulty() {
        let prompt = build_exam_prompt(&request("some source text"));
        assert!(prompt.contains("exactly 5 multiple-choice questions"));
        assert!(prompt.contains("difficulty: medium"));
        assert!(prompt.contains("ANSWER: X"));
        assert!(prompt.ends_with("some source text"));
    }

    #[test]
    fn prompt_truncates_long_sources() {
        let long = "x".repeat(SOURCE_CHAR_LIMIT + 500);
        let prompt = build_exam_prompt(&request(&long));
        let tail = prompt.split("Text:\n").nth(1).unwrap();
        assert_eq!(tail.chars().count(), SOURCE_CHAR_LIMIT);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let source = "ñ".repeat(10);
        assert_eq!(truncate_chars(&source, 3), "ñññ");
        assert_eq!(truncate_chars("short", 100), "short");
    }
}
