//! quizforge-providers — completion-service integrations.
//!
//! Implements the `ExamGenerator` trait for OpenAI-compatible APIs and
//! Ollama, allowing quizforge to turn source text into Aiken-format exams
//! from multiple backends.

pub mod config;
pub mod error;
pub mod mock;
pub mod ollama;
pub mod openai;

pub use config::{create_generator, load_config, ProviderConfig, QuizforgeConfig};
pub use error::ProviderError;
