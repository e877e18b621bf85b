//! Mock backend for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use quizforge_core::traits::{ExamGenerator, GenerateRequest, GenerateResponse, TokenUsage};

/// A mock completion backend for testing the generation pipeline without
/// real API calls.
///
/// Returns configurable responses based on source-text substring matching.
pub struct MockGenerator {
    /// Map of source-text substring → response text.
    responses: HashMap<String, String>,
    /// Default response if no substring matches.
    default_response: String,
    /// Number of calls made.
    call_count: AtomicU32,
    /// Last request received.
    last_request: Mutex<Option<GenerateRequest>>,
}

impl MockGenerator {
    /// Create a new mock with the given substring→response mappings.
    pub fn new(responses: HashMap<String, String>) -> Self {
        Self {
            responses,
            default_response: "Placeholder question?\nA. yes\nB. no\nANSWER: A".to_string(),
            call_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Create a mock that always returns the same response.
    pub fn with_fixed_response(response: &str) -> Self {
        Self {
            responses: HashMap::new(),
            default_response: response.to_string(),
            call_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Get the number of calls made to this backend.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Get the last request made to this backend.
    pub fn last_request(&self) -> Option<GenerateRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl ExamGenerator for MockGenerator {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, request: &GenerateRequest) -> anyhow::Result<GenerateResponse> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_request.lock().unwrap() = Some(request.clone());

        let content = self
            .responses
            .iter()
            .find(|(key, _)| request.source_text.contains(key.as_str()))
            .map(|(_, v)| v.clone())
            .unwrap_or_else(|| self.default_response.clone());

        let completion_tokens = (content.len() / 4) as u32; // Rough estimate
        let prompt_tokens = (request.source_text.len() / 4) as u32;

        Ok(GenerateResponse {
            content,
            model: request.model.clone(),
            token_usage: TokenUsage {
                prompt_tokens,
                completion_tokens,
                total_tokens: prompt_tokens + completion_tokens,
            },
            latency_ms: 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizforge_core::model::Difficulty;

    fn request(source: &str) -> GenerateRequest {
        GenerateRequest {
            model: "mock".into(),
            source_text: source.into(),
            question_count: 2,
            difficulty: Difficulty::Medium,
            max_tokens: 512,
            temperature: 0.7,
        }
    }

    #[tokio::test]
    async fn fixed_response() {
        let generator =
            MockGenerator::with_fixed_response("What is rust?\nA. metal decay\nB. a language\nANSWER: B");
        let response = generator.generate(&request("anything")).await.unwrap();
        assert!(response.content.contains("ANSWER: B"));
        assert_eq!(generator.call_count(), 1);
        assert_eq!(
            generator.last_request().unwrap().difficulty,
            Difficulty::Medium
        );
    }

    #[tokio::test]
    async fn source_matching() {
        let mut responses = HashMap::new();
        responses.insert(
            "history".to_string(),
            "When did the war start?\nA. 1936\nB. 1937\nANSWER: A".to_string(),
        );
        responses.insert(
            "geography".to_string(),
            "Capital of Spain?\nA. Barcelona\nB. Madrid\nANSWER: B".to_string(),
        );

        let generator = MockGenerator::new(responses);

        let resp = generator
            .generate(&request("notes on history of Spain"))
            .await
            .unwrap();
        assert!(resp.content.contains("war"));

        let resp = generator
            .generate(&request("notes on geography of Spain"))
            .await
            .unwrap();
        assert!(resp.content.contains("Capital"));
        assert_eq!(generator.call_count(), 2);
    }
}
