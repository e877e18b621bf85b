//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn quizforge() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("quizforge").unwrap()
}

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

fn write_sample(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("exam.txt");
    std::fs::write(&path, SAMPLE_EXAM).unwrap();
    path
}

#[test]
fn validate_valid_exam() {
    let dir = TempDir::new().unwrap();
    let exam = write_sample(&dir);

    quizforge()
        .arg("validate")
        .arg("--exam")
        .arg(&exam)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 questions detected"))
        .stdout(predicate::str::contains("Exam file valid"));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("warned.txt");
    std::fs::write(&path, "Question without answer?\nA) one\nB) two\n").unwrap();

    quizforge()
        .arg("validate")
        .arg("--exam")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 questions detected"))
        .stdout(predicate::str::contains("WARNING"))
        .stdout(predicate::str::contains("no ANSWER"));
}

#[test]
fn validate_rejects_malformed_input() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.txt");
    std::fs::write(&path, "no questions here at all\n").unwrap();

    quizforge()
        .arg("validate")
        .arg("--exam")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no questions detected"));
}

#[test]
fn validate_nonexistent_file() {
    quizforge()
        .arg("validate")
        .arg("--exam")
        .arg("nonexistent.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn import_then_list_then_remove() {
    let dir = TempDir::new().unwrap();
    let exam = write_sample(&dir);
    let data = dir.path().join("data");

    quizforge()
        .arg("import")
        .arg("--exam")
        .arg(&exam)
        .arg("--name")
        .arg("Geografía")
        .arg("--data-dir")
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Imported 2 of 2 detected questions into 'Geografía'",
        ));

    quizforge()
        .arg("list")
        .arg("--data-dir")
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("Geografía"))
        .stdout(predicate::str::contains("Staged for practice: Geografía"));

    quizforge()
        .arg("remove")
        .arg("--index")
        .arg("1")
        .arg("--data-dir")
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 'Geografía'"));

    quizforge()
        .arg("list")
        .arg("--data-dir")
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved exams"));
}

#[test]
fn import_honors_limit() {
    let dir = TempDir::new().unwrap();
    let exam = write_sample(&dir);
    let data = dir.path().join("data");

    quizforge()
        .arg("import")
        .arg("--exam")
        .arg(&exam)
        .arg("--name")
        .arg("Capped")
        .arg("--limit")
        .arg("1")
        .arg("--data-dir")
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Imported 1 of 2 detected questions into 'Capped'",
        ));
}

#[test]
fn import_rejects_empty_parse() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.txt");
    std::fs::write(&path, "nothing aiken about this\n").unwrap();

    quizforge()
        .arg("import")
        .arg("--exam")
        .arg(&path)
        .arg("--name")
        .arg("Broken")
        .arg("--data-dir")
        .arg(dir.path().join("data"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no valid questions found"));
}

#[test]
fn import_requires_a_name() {
    let dir = TempDir::new().unwrap();
    let exam = write_sample(&dir);

    quizforge()
        .arg("import")
        .arg("--exam")
        .arg(&exam)
        .arg("--name")
        .arg("   ")
        .arg("--data-dir")
        .arg(dir.path().join("data"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("needs a name"));
}

#[test]
fn remove_out_of_range_index() {
    let dir = TempDir::new().unwrap();

    quizforge()
        .arg("remove")
        .arg("--index")
        .arg("3")
        .arg("--data-dir")
        .arg(dir.path().join("data"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no exam at position 3"));
}

#[test]
fn practice_without_staged_exam_fails() {
    let dir = TempDir::new().unwrap();

    quizforge()
        .arg("practice")
        .arg("--data-dir")
        .arg(dir.path().join("data"))
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no staged exam"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    quizforge()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created quizforge.toml"))
        .stdout(predicate::str::contains("Created sample-exam.txt"));

    assert!(dir.path().join("quizforge.toml").exists());
    assert!(dir.path().join("sample-exam.txt").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    quizforge().current_dir(dir.path()).arg("init").assert().success();

    quizforge()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn help_output() {
    quizforge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aiken-format exam practice tool"));
}

#[test]
fn version_output() {
    quizforge()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quizforge"));
}
