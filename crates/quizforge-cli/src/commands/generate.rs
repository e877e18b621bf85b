//! The `quizforge generate` command.

use std::path::PathBuf;

use anyhow::Result;

use quizforge_core::generate::generate_exam;
use quizforge_core::model::Difficulty;
use quizforge_core::traits::GenerateRequest;
use quizforge_providers::create_generator;

use crate::extract;

#[allow(clippy::too_many_arguments)]
pub async fn execute(
    source: PathBuf,
    questions: Option<u32>,
    difficulty: String,
    model_str: Option<String>,
    name: Option<String>,
    data_dir: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let difficulty: Difficulty = difficulty
        .parse()
        .map_err(|e: String| anyhow::anyhow!("{e}"))?;

    let (config, store) = super::open_store(data_dir, config_path.as_deref())?;

    let question_count = questions.unwrap_or(config.default_question_count);
    anyhow::ensure!(
        (1..=50).contains(&question_count),
        "--questions must be between 1 and 50"
    );

    // "provider/model" picks both; a bare model uses the default backend.
    let (provider_name, model) = match &model_str {
        Some(m) => match m.split_once('/') {
            Some((provider, model)) => (provider.to_string(), model.to_string()),
            None => (config.default_provider.clone(), m.clone()),
        },
        None => (config.default_provider.clone(), config.default_model.clone()),
    };

    let Some(provider_config) = config.providers.get(&provider_name) else {
        anyhow::bail!(
            "provider '{}' not found in config. Available: {:?}",
            provider_name,
            config.providers.keys().collect::<Vec<_>>()
        );
    };
    let generator = create_generator(provider_config)?;

    let source_text = extract::extract_text(&source)?;
    eprintln!(
        "Generating {question_count} {difficulty} questions from {} with {provider_name}/{model}...",
        source.display()
    );

    let request = GenerateRequest {
        model,
        source_text,
        question_count,
        difficulty,
        max_tokens: config.max_tokens,
        temperature: config.default_temperature,
    };

    let exam_name = name.unwrap_or_else(|| {
        source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Generated exam".to_string())
    });

    let exam = generate_exam(generator.as_ref(), &request, &exam_name).await?;

    store.stage(&exam)?;
    println!(
        "Generated {} questions into '{}' (asked for {question_count})",
        exam.len(),
        exam.name
    );
    println!("Practice with: quizforge practice");

    Ok(())
}
