//! The `quizforge remove` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(index: usize, data_dir: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    anyhow::ensure!(index >= 1, "--index is 1-based, as shown by `quizforge list`");

    let (_, store) = super::open_store(data_dir, config_path.as_deref())?;
    match store.remove_exam(index - 1)? {
        Some(removed) => {
            println!("Removed '{}' ({} questions)", removed.name, removed.len());
            Ok(())
        }
        None => anyhow::bail!("no exam at position {index}; run `quizforge list`"),
    }
}
