//! Core data model types for quizforge.
//!
//! These are the fundamental types the entire quizforge system uses to
//! represent questions, option lists, and exam sets.

use std::fmt;
use std::str::FromStr;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single multiple-choice question.
///
/// Serialized with the field names of the persisted exam layout:
/// `{"question": ..., "options": {"A": ..., ...}, "answer": "B"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The question text.
    #[serde(rename = "question")]
    pub prompt: String,
    /// Lettered options in order of appearance in the source text.
    #[serde(default)]
    pub options: OptionList,
    /// The correct option letter. The parser does not guarantee this is a
    /// key of `options`; scoring treats a never-matching letter as
    /// always-incorrect.
    #[serde(default)]
    pub answer: String,
}

impl Question {
    /// Whether the given selection matches this question's answer key.
    pub fn is_correct(&self, selected: &str) -> bool {
        !self.answer.is_empty() && self.answer == selected
    }
}

/// Options of a question, keyed by uppercase letter.
///
/// Letters are unique; re-inserting a letter overwrites its text in place.
/// Iteration order is insertion order, which the parser makes the order of
/// appearance in the source text. Serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionList(Vec<(char, String)>);

impl OptionList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert an option, overwriting the text of an existing letter without
    /// moving it.
    pub fn insert(&mut self, letter: char, text: impl Into<String>) {
        let text = text.into();
        match self.0.iter_mut().find(|(l, _)| *l == letter) {
            Some(entry) => entry.1 = text,
            None => self.0.push((letter, text)),
        }
    }

    pub fn get(&self, letter: char) -> Option<&str> {
        self.0
            .iter()
            .find(|(l, _)| *l == letter)
            .map(|(_, t)| t.as_str())
    }

    pub fn contains(&self, letter: char) -> bool {
        self.0.iter().any(|(l, _)| *l == letter)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Options in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.0.iter().map(|(l, t)| (*l, t.as_str()))
    }
}

impl FromIterator<(char, String)> for OptionList {
    fn from_iter<I: IntoIterator<Item = (char, String)>>(iter: I) -> Self {
        let mut list = Self::new();
        for (letter, text) in iter {
            list.insert(letter, text);
        }
        list
    }
}

impl Serialize for OptionList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (letter, text) in &self.0 {
            map.serialize_entry(&letter.to_string(), text)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for OptionList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OptionListVisitor;

        impl<'de> Visitor<'de> for OptionListVisitor {
            type Value = OptionList;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of single-letter keys to option text")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut list = OptionList::new();
                while let Some((key, text)) = access.next_entry::<String, String>()? {
                    let mut chars = key.chars();
                    match (chars.next(), chars.next()) {
                        (Some(letter), None) if letter.is_ascii_uppercase() => {
                            list.insert(letter, text);
                        }
                        _ => {
                            return Err(serde::de::Error::custom(format!(
                                "option key must be a single uppercase letter, got '{key}'"
                            )));
                        }
                    }
                }
                Ok(list)
            }
        }

        deserializer.deserialize_map(OptionListVisitor)
    }
}

/// A named, ordered collection of questions.
///
/// Immutable during a practice session; question order is significant, the
/// session indexes by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamSet {
    /// User-supplied label or source file name.
    pub name: String,
    /// The questions, in source order.
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl ExamSet {
    pub fn new(name: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            name: name.into(),
            questions,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Keep only the first `limit` questions. Used by the import cap.
    pub fn truncate(&mut self, limit: usize) {
        self.questions.truncate(limit);
    }
}

/// Requested difficulty for AI-generated exams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" | "normal" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}
