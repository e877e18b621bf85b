//! quizforge CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod extract;

#[derive(Parser)]
#[command(name = "quizforge", version, about = "Aiken-format exam practice tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import an Aiken-format exam file
    Import {
        /// Path to the .txt exam file
        #[arg(long)]
        exam: PathBuf,

        /// Name for the exam (required, shown everywhere)
        #[arg(long)]
        name: String,

        /// Import only the first N questions
        #[arg(long)]
        limit: Option<usize>,

        /// Exam store directory
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Generate an exam from a source document with a completion service
    Generate {
        /// Source document (.pdf, .txt, or .md)
        #[arg(long)]
        source: PathBuf,

        /// Number of questions to generate
        #[arg(long)]
        questions: Option<u32>,

        /// Difficulty: easy, medium, hard
        #[arg(long, default_value = "medium")]
        difficulty: String,

        /// Backend/model override (e.g. "openai/gpt-3.5-turbo")
        #[arg(long)]
        model: Option<String>,

        /// Name for the exam (defaults to the source file name)
        #[arg(long)]
        name: Option<String>,

        /// Exam store directory
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Take the staged exam interactively
    Practice {
        /// Practice a saved exam by its list position instead of the staged one
        #[arg(long)]
        exam_index: Option<usize>,

        /// Practice the built-in demo exam
        #[arg(long)]
        demo: bool,

        /// Shuffle the questions before starting
        #[arg(long)]
        shuffle: bool,

        /// Timer behavior on restart: reset, continue
        #[arg(long, default_value = "reset")]
        timer: String,

        /// Write a JSON session report to this path when finished
        #[arg(long)]
        report: Option<PathBuf>,

        /// Exam store directory
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List saved exams
    List {
        /// Exam store directory
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Delete a saved exam
    Remove {
        /// Position of the exam in `quizforge list` (1-based)
        #[arg(long)]
        index: usize,

        /// Exam store directory
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate an Aiken-format exam file
    Validate {
        /// Path to the exam file
        #[arg(long)]
        exam: PathBuf,
    },

    /// Create starter config and a sample exam file
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizforge=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Import {
            exam,
            name,
            limit,
            data_dir,
            config,
        } => commands::import::execute(exam, name, limit, data_dir, config),
        Commands::Generate {
            source,
            questions,
            difficulty,
            model,
            name,
            data_dir,
            config,
        } => {
            commands::generate::execute(source, questions, difficulty, model, name, data_dir, config)
                .await
        }
        Commands::Practice {
            exam_index,
            demo,
            shuffle,
            timer,
            report,
            data_dir,
            config,
        } => commands::practice::execute(exam_index, demo, shuffle, timer, report, data_dir, config),
        Commands::List { data_dir, config } => commands::list::execute(data_dir, config),
        Commands::Remove {
            index,
            data_dir,
            config,
        } => commands::remove::execute(index, data_dir, config),
        Commands::Validate { exam } => commands::validate::execute(exam),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
