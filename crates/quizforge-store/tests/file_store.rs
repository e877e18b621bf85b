//! Integration tests for the file-backed exam store.

use quizforge_core::model::{ExamSet, Question};
use quizforge_core::parser::{parse, ParserConfig};
use quizforge_store::{ExamStore, FileStore, KvStore, MY_EXAMS_KEY};

fn sample_exam() -> ExamSet {
    let text = "¿Cuál es la capital de España?\nA) Barcelona\nB) Madrid\nANSWER: B\n";
    ExamSet::new("Geografía", parse(text, &ParserConfig::upload()))
}

#[test]
fn persists_across_store_instances() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = ExamStore::new(FileStore::new(dir.path()));
        store.add_exam(sample_exam()).unwrap();
        store.stage(&sample_exam()).unwrap();
    }

    let store = ExamStore::new(FileStore::new(dir.path()));
    let exams = store.my_exams().unwrap();
    assert_eq!(exams.len(), 1);
    assert_eq!(exams[0].name, "Geografía");

    let staged = store.staged().unwrap().unwrap();
    assert_eq!(staged.questions.len(), 1);
    assert_eq!(staged.questions[0].answer, "B");
}

#[test]
fn persisted_layout_matches_contract() {
    let dir = tempfile::tempdir().unwrap();
    let store = ExamStore::new(FileStore::new(dir.path()));
    store.add_exam(sample_exam()).unwrap();

    // myExams is a JSON array of {name, questions:[{question, options, answer}]}.
    let raw = FileStore::new(dir.path()).get(MY_EXAMS_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let first = &value.as_array().unwrap()[0];
    assert_eq!(first["name"], "Geografía");
    assert_eq!(
        first["questions"][0]["question"],
        "¿Cuál es la capital de España?"
    );
    assert_eq!(first["questions"][0]["options"]["A"], "Barcelona");
    assert_eq!(first["questions"][0]["answer"], "B");
}

#[test]
fn question_order_survives_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let store = ExamStore::new(FileStore::new(dir.path()));

    let questions: Vec<Question> = (0..10)
        .map(|i| Question {
            prompt: format!("Question number {i}?"),
            options: [('A', "yes".to_string()), ('B', "no".to_string())]
                .into_iter()
                .collect(),
            answer: "A".into(),
        })
        .collect();
    store.stage(&ExamSet::new("Ordered", questions)).unwrap();

    let staged = store.staged().unwrap().unwrap();
    for (i, question) in staged.questions.iter().enumerate() {
        assert_eq!(question.prompt, format!("Question number {i}?"));
    }
}
