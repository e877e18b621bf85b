//! The `quizforge import` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use quizforge_core::model::ExamSet;
use quizforge_core::parser::{self, ParserConfig};

pub fn execute(
    exam_path: PathBuf,
    name: String,
    limit: Option<usize>,
    data_dir: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let name = name.trim().to_string();
    anyhow::ensure!(!name.is_empty(), "the exam needs a name");

    let text = std::fs::read_to_string(&exam_path)
        .with_context(|| format!("failed to read {}", exam_path.display()))?;

    let questions = parser::parse(&text, &ParserConfig::upload());
    anyhow::ensure!(
        !questions.is_empty(),
        "no valid questions found in {} — check the Aiken format",
        exam_path.display()
    );
    let detected = questions.len();

    let mut exam = ExamSet::new(name, questions);
    if let Some(limit) = limit {
        anyhow::ensure!(limit >= 1, "--limit must be at least 1");
        exam.truncate(limit);
    }

    for w in parser::validate_exam(&exam) {
        eprintln!("  [question {}] WARNING: {}", w.index + 1, w.message);
    }

    let (_, store) = super::open_store(data_dir, config_path.as_deref())?;
    store.add_exam(exam.clone())?;
    store.stage(&exam)?;

    println!(
        "Imported {} of {} detected questions into '{}'",
        exam.len(),
        detected,
        exam.name
    );
    println!("Practice with: quizforge practice");

    Ok(())
}
