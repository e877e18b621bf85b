//! The `quizforge init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create quizforge.toml
    if std::path::Path::new("quizforge.toml").exists() {
        println!("quizforge.toml already exists, skipping.");
    } else {
        std::fs::write("quizforge.toml", SAMPLE_CONFIG)?;
        println!("Created quizforge.toml");
    }

    // Create a sample Aiken exam
    let sample_path = std::path::Path::new("sample-exam.txt");
    if sample_path.exists() {
        println!("sample-exam.txt already exists, skipping.");
    } else {
        std::fs::write(sample_path, SAMPLE_EXAM)?;
        println!("Created sample-exam.txt");
    }

    println!("\nNext steps:");
    println!("  1. Edit quizforge.toml with your API key (only needed for generate)");
    println!("  2. Run: quizforge validate --exam sample-exam.txt");
    println!("  3. Run: quizforge import --exam sample-exam.txt --name \"Sample\"");
    println!("  4. Run: quizforge practice");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizforge configuration

default_provider = "openai"
default_model = "gpt-3.5-turbo"
default_temperature = 0.7
default_question_count = 20
data_dir = "./quizforge-data"

[providers.openai]
type = "openai"
api_key = "${OPENAI_API_KEY}"

[providers.ollama]
type = "ollama"
base_url = "http://localhost:11434"
"#;

const SAMPLE_EXAM: &str = "\
¿Cuál es la capital de España?
A) Barcelona
B) Madrid
C) Valencia
D) Sevilla
ANSWER: B

¿En qué año se descubrió América?
A) 1491
B) 1492
C) 1493
D) 1494
ANSWER: B
";
