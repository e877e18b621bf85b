//! The `quizforge validate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use quizforge_core::model::ExamSet;
use quizforge_core::parser::{self, ParserConfig};

pub fn execute(exam_path: PathBuf) -> Result<()> {
    let text = std::fs::read_to_string(&exam_path)
        .with_context(|| format!("failed to read {}", exam_path.display()))?;

    let questions = parser::parse(&text, &ParserConfig::upload());
    anyhow::ensure!(
        !questions.is_empty(),
        "no questions detected in {} — check the Aiken format",
        exam_path.display()
    );

    println!("{} questions detected", questions.len());

    let set = ExamSet::new(exam_path.display().to_string(), questions);
    let warnings = parser::validate_exam(&set);
    for w in &warnings {
        println!("  [question {}] WARNING: {}", w.index + 1, w.message);
    }

    if warnings.is_empty() {
        println!("Exam file valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
