//! The `quizforge list` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

pub fn execute(data_dir: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let (_, store) = super::open_store(data_dir, config_path.as_deref())?;

    let exams = store.my_exams()?;
    if exams.is_empty() {
        println!("No saved exams. Import one with: quizforge import");
    } else {
        let mut table = Table::new();
        table.set_header(vec!["#", "Name", "Questions"]);
        for (i, exam) in exams.iter().enumerate() {
            table.add_row(vec![
                Cell::new(i + 1),
                Cell::new(&exam.name),
                Cell::new(exam.len()),
            ]);
        }
        println!("{table}");
    }

    if let Some(staged) = store.staged()? {
        println!("Staged for practice: {}", staged.name);
    }

    Ok(())
}
