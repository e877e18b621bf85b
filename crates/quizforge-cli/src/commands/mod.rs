//! CLI subcommand implementations.

pub mod generate;
pub mod import;
pub mod init;
pub mod list;
pub mod practice;
pub mod remove;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::Result;

use quizforge_providers::config::{load_config_from, QuizforgeConfig};
use quizforge_store::{ExamStore, FileStore};

/// Load config and open the exam store, honoring a `--data-dir` override.
pub(crate) fn open_store(
    data_dir: Option<PathBuf>,
    config_path: Option<&Path>,
) -> Result<(QuizforgeConfig, ExamStore<FileStore>)> {
    let config = load_config_from(config_path)?;
    let dir = data_dir.unwrap_or_else(|| config.data_dir.clone());
    Ok((config, ExamStore::new(FileStore::new(dir))))
}
