//! Typed layer over the two well-known exam keys.

use quizforge_core::model::ExamSet;

use crate::{KvStore, StoreError};

/// Key holding the JSON array of saved exam sets.
pub const MY_EXAMS_KEY: &str = "myExams";

/// Key holding the single exam set staged for a practice session.
pub const STAGED_EXAM_KEY: &str = "importedExam";

/// Exam persistence over any [`KvStore`].
#[derive(Debug)]
pub struct ExamStore<S> {
    store: S,
}

impl<S: KvStore> ExamStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All saved exams. A missing key reads as an empty collection.
    pub fn my_exams(&self) -> Result<Vec<ExamSet>, StoreError> {
        match self.store.get(MY_EXAMS_KEY)? {
            Some(json) => serde_json::from_str(&json).map_err(|e| StoreError::Corrupt {
                key: MY_EXAMS_KEY.to_string(),
                source: e,
            }),
            None => Ok(Vec::new()),
        }
    }

    fn save_my_exams(&self, exams: &[ExamSet]) -> Result<(), StoreError> {
        let json = serde_json::to_string(exams).map_err(|e| StoreError::Encode {
            key: MY_EXAMS_KEY.to_string(),
            source: e,
        })?;
        self.store.set(MY_EXAMS_KEY, &json)
    }

    /// Append an exam to the saved collection.
    pub fn add_exam(&self, exam: ExamSet) -> Result<(), StoreError> {
        let mut exams = self.my_exams()?;
        tracing::debug!(name = %exam.name, questions = exam.len(), "saving exam");
        exams.push(exam);
        self.save_my_exams(&exams)
    }

    /// Delete the saved exam at `index`; returns it, or `None` if the index
    /// is out of range.
    pub fn remove_exam(&self, index: usize) -> Result<Option<ExamSet>, StoreError> {
        let mut exams = self.my_exams()?;
        if index >= exams.len() {
            return Ok(None);
        }
        let removed = exams.remove(index);
        self.save_my_exams(&exams)?;
        Ok(Some(removed))
    }

    /// Stage an exam for the next practice session.
    pub fn stage(&self, exam: &ExamSet) -> Result<(), StoreError> {
        let json = serde_json::to_string(exam).map_err(|e| StoreError::Encode {
            key: STAGED_EXAM_KEY.to_string(),
            source: e,
        })?;
        tracing::debug!(name = %exam.name, questions = exam.len(), "staging exam");
        self.store.set(STAGED_EXAM_KEY, &json)
    }

    /// The staged exam, if one exists.
    pub fn staged(&self) -> Result<Option<ExamSet>, StoreError> {
        match self.store.get(STAGED_EXAM_KEY)? {
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|e| StoreError::Corrupt {
                    key: STAGED_EXAM_KEY.to_string(),
                    source: e,
                }),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use quizforge_core::model::Question;

    fn exam(name: &str) -> ExamSet {
        let question = Question {
            prompt: "Capital of Spain?".into(),
            options: [('A', "Barcelona".to_string()), ('B', "Madrid".to_string())]
                .into_iter()
                .collect(),
            answer: "B".into(),
        };
        ExamSet::new(name, vec![question])
    }

    #[test]
    fn empty_store_has_no_exams() {
        let store = ExamStore::new(MemoryStore::new());
        assert!(store.my_exams().unwrap().is_empty());
        assert!(store.staged().unwrap().is_none());
    }

    #[test]
    fn add_appends_in_order() {
        let store = ExamStore::new(MemoryStore::new());
        store.add_exam(exam("First")).unwrap();
        store.add_exam(exam("Second")).unwrap();
        let exams = store.my_exams().unwrap();
        assert_eq!(exams.len(), 2);
        assert_eq!(exams[0].name, "First");
        assert_eq!(exams[1].name, "Second");
    }

    #[test]
    fn remove_by_index() {
        let store = ExamStore::new(MemoryStore::new());
        store.add_exam(exam("First")).unwrap();
        store.add_exam(exam("Second")).unwrap();
        let removed = store.remove_exam(0).unwrap().unwrap();
        assert_eq!(removed.name, "First");
        let exams = store.my_exams().unwrap();
        assert_eq!(exams.len(), 1);
        assert_eq!(exams[0].name, "Second");
        assert!(store.remove_exam(5).unwrap().is_none());
    }

    #[test]
    fn stage_and_load_roundtrip() {
        let store = ExamStore::new(MemoryStore::new());
        store.stage(&exam("Staged")).unwrap();
        let staged = store.staged().unwrap().unwrap();
        assert_eq!(staged.name, "Staged");
        assert_eq!(staged.questions[0].options.get('B'), Some("Madrid"));
    }

    #[test]
    fn corrupt_value_is_reported() {
        let kv = MemoryStore::new();
        kv.set(MY_EXAMS_KEY, "not json").unwrap();
        let store = ExamStore::new(kv);
        let err = store.my_exams().unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }
}
