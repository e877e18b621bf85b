//! Aiken-format question parser.
//!
//! Converts raw text (pasted, uploaded, or model-produced) into a sequence of
//! structured questions, and reports lenient-policy validation warnings.

use crate::model::{ExamSet, OptionList, Question};

/// Literal prefix of an answer-key line.
const ANSWER_PREFIX: &str = "ANSWER:";

/// How the remainder of an `ANSWER:` line becomes the answer key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerExtraction {
    /// Take the first uppercase option letter found in the remainder. Used
    /// for free-form model output, where the line may read
    /// `ANSWER: The answer is B`.
    FirstLetter,
    /// Take the trimmed remainder verbatim. Used for user-pasted and
    /// uploaded text.
    RawTrim,
}

/// Parser profile.
///
/// The upload profile accepts option letters A–Z and keeps answer text raw;
/// the generated profile accepts A–D and extracts the first letter from the
/// answer remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Highest accepted option letter (inclusive, from 'A').
    pub max_option_letter: char,
    pub answer_extraction: AnswerExtraction,
}

impl ParserConfig {
    /// Profile for user-pasted or uploaded text.
    pub fn upload() -> Self {
        Self {
            max_option_letter: 'Z',
            answer_extraction: AnswerExtraction::RawTrim,
        }
    }

    /// Strict profile for text returned by the completion service.
    pub fn generated() -> Self {
        Self {
            max_option_letter: 'D',
            answer_extraction: AnswerExtraction::FirstLetter,
        }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::upload()
    }
}

/// In-progress question accumulator.
#[derive(Default)]
struct Draft {
    prompt: Option<String>,
    options: OptionList,
    answer: String,
}

impl Draft {
    /// A draft only becomes a question once a prompt has been set; options
    /// and answer may be incomplete.
    fn finish(self) -> Option<Question> {
        self.prompt.map(|prompt| Question {
            prompt,
            options: self.options,
            answer: self.answer,
        })
    }
}

/// Parse Aiken-format text into questions, in source order.
///
/// Lines are classified as answer-key, option, or prompt; anything else is
/// ignored. Parsing never fails: malformed input degrades to an empty or
/// partial sequence, and callers must treat zero questions as a parse
/// failure.
pub fn parse(raw: &str, config: &ParserConfig) -> Vec<Question> {
    let mut questions = Vec::new();
    let mut current = Draft::default();

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix(ANSWER_PREFIX) {
            // Closes the answer field of the current draft; an answer-like
            // line ending in '?' still lands here, never in the prompt arm.
            current.answer = extract_answer(rest, config);
        } else if let Some((letter, text)) = split_option(line, config) {
            current.options.insert(letter, text);
        } else if line.ends_with('?') {
            if current.prompt.is_some() {
                questions.extend(current.finish());
                current = Draft::default();
            }
            current.prompt = Some(line.to_string());
        }
    }

    questions.extend(current.finish());
    questions
}

fn extract_answer(rest: &str, config: &ParserConfig) -> String {
    let trimmed = rest.trim();
    match config.answer_extraction {
        AnswerExtraction::RawTrim => trimmed.to_string(),
        AnswerExtraction::FirstLetter => trimmed
            .chars()
            .find(|c| ('A'..=config.max_option_letter).contains(c))
            .map(String::from)
            .unwrap_or_default(),
    }
}

/// Match "letter, '.' or ')', optional separator, text" and split it.
fn split_option(line: &str, config: &ParserConfig) -> Option<(char, String)> {
    let mut chars = line.chars();
    let letter = chars.next()?;
    if !letter.is_ascii_uppercase() || letter > config.max_option_letter {
        return None;
    }
    if !matches!(chars.next(), Some('.' | ')')) {
        return None;
    }
    Some((letter, chars.as_str().trim().to_string()))
}

/// A warning from exam validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Zero-based question index.
    pub index: usize,
    /// Warning message.
    pub message: String,
}

/// Report lenient-policy findings the parser tolerates.
///
/// The parser accepts questions with no options, no answer key, or an answer
/// that names no option; such questions score as always-incorrect. These are
/// surfaced as warnings, never errors.
pub fn validate_exam(set: &ExamSet) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for (index, question) in set.questions.iter().enumerate() {
        if question.options.is_empty() {
            warnings.push(ValidationWarning {
                index,
                message: "question has no options".into(),
            });
        }
        if question.answer.is_empty() {
            warnings.push(ValidationWarning {
                index,
                message: "question has no ANSWER line".into(),
            });
            continue;
        }
        let named = question
            .answer
            .chars()
            .next()
            .filter(|_| question.answer.chars().count() == 1)
            .filter(|letter| question.options.contains(*letter));
        if named.is_none() && !question.options.is_empty() {
            warnings.push(ValidationWarning {
                index,
                message: format!("answer '{}' is not one of the options", question.answer),
            });
        }
    }

    warnings
}
