//! The generation pipeline: prompt a completion backend once and parse the
//! response with the strict profile.

use tracing::info;

use crate::error::GenerateError;
use crate::model::ExamSet;
use crate::parser::{self, ParserConfig};
use crate::traits::{ExamGenerator, GenerateRequest};

/// Ask `generator` for exam text and build an [`ExamSet`] named `name`.
///
/// Fire-and-forget: the service is awaited exactly once, with no retry. A
/// failed call or a response with zero parseable questions aborts with no
/// partial state.
pub async fn generate_exam(
    generator: &dyn ExamGenerator,
    request: &GenerateRequest,
    name: &str,
) -> Result<ExamSet, GenerateError> {
    let response = generator
        .generate(request)
        .await
        .map_err(GenerateError::Service)?;

    let questions = parser::parse(&response.content, &ParserConfig::generated());
    info!(
        backend = generator.name(),
        model = %response.model,
        requested = request.question_count,
        parsed = questions.len(),
        latency_ms = response.latency_ms,
        "generation complete"
    );

    if questions.is_empty() {
        return Err(GenerateError::NoQuestions);
    }

    Ok(ExamSet::new(name, questions))
}
