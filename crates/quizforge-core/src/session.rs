//! Practice-session state machine.
//!
//! Owns the lifecycle of taking one exam set: one write-once answer per
//! question, navigation, the finish/restart flow, and derived scoring. All
//! transitions are synchronous reactions to discrete external events; the
//! session performs no I/O and emits [`SessionEvent`]s for the presentation
//! layer to drain.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::SessionError;
use crate::model::{ExamSet, Question};
use crate::scoring::{self, ReviewItem, ScoreSummary};

/// Which transitions are currently legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Answering,
    ConfirmingFinish,
    ShowingResults,
}

/// Side effects the presentation layer subscribes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A wrong selection was just recorded (drives shake/vibration UIs).
    AnswerIncorrect { index: usize, selected: String },
    /// Session finished at or above the pass threshold.
    SessionPassed { percentage: u32 },
    /// Session finished below the pass threshold.
    SessionFailed { percentage: u32 },
}

/// What happens to the elapsed-time counter on restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RestartTimer {
    #[default]
    Reset,
    Continue,
}

/// Result of a [`PracticeSession::select_answer`] call.
///
/// Everything but `Recorded` is a no-op: redundant and out-of-phase writes
/// are ignored, never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Recorded { correct: bool },
    AlreadyAnswered,
    OutOfRange,
    NotAnswering,
}

/// State machine over one loaded exam set.
#[derive(Debug)]
pub struct PracticeSession {
    exam: ExamSet,
    current_index: usize,
    answers: Vec<Option<String>>,
    elapsed_seconds: u64,
    phase: Phase,
    restart_timer: RestartTimer,
    events: Vec<SessionEvent>,
}

impl PracticeSession {
    /// Start a session over `exam` in the answering phase.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyExam`] if the set has no questions.
    pub fn new(exam: ExamSet) -> Result<Self, SessionError> {
        if exam.is_empty() {
            return Err(SessionError::EmptyExam);
        }
        let answers = vec![None; exam.len()];
        Ok(Self {
            exam,
            current_index: 0,
            answers,
            elapsed_seconds: 0,
            phase: Phase::Answering,
            restart_timer: RestartTimer::default(),
            events: Vec::new(),
        })
    }

    /// Set the restart-timer policy.
    #[must_use]
    pub fn with_restart_timer(mut self, policy: RestartTimer) -> Self {
        self.restart_timer = policy;
        self
    }

    pub fn exam(&self) -> &ExamSet {
        &self.exam
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> &Question {
        &self.exam.questions[self.current_index]
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// The recorded selection for a question, if any.
    pub fn answer_for(&self, index: usize) -> Option<&str> {
        self.answers.get(index).and_then(|a| a.as_deref())
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn is_fully_answered(&self) -> bool {
        self.answered_count() == self.exam.len()
    }

    /// Record a write-once answer for the question at `index`.
    ///
    /// The first selection for an index sticks; later selections for the
    /// same index are ignored. The instant every question has an answer the
    /// session auto-advances to the confirming-finish phase, regardless of
    /// the current position.
    pub fn select_answer(&mut self, index: usize, letter: char) -> SelectOutcome {
        if self.phase != Phase::Answering {
            return SelectOutcome::NotAnswering;
        }
        if index >= self.exam.len() {
            return SelectOutcome::OutOfRange;
        }
        if self.answers[index].is_some() {
            return SelectOutcome::AlreadyAnswered;
        }

        let selected = letter.to_string();
        let correct = self.exam.questions[index].is_correct(&selected);
        if !correct {
            self.events.push(SessionEvent::AnswerIncorrect {
                index,
                selected: selected.clone(),
            });
        }
        self.answers[index] = Some(selected);

        if self.is_fully_answered() {
            self.phase = Phase::ConfirmingFinish;
        }

        SelectOutcome::Recorded { correct }
    }

    /// Move to the next question. No-op on the last question or outside the
    /// answering phase.
    pub fn advance(&mut self) {
        if self.phase == Phase::Answering && self.current_index + 1 < self.exam.len() {
            self.current_index += 1;
        }
    }

    /// Move to the previous question. No-op on the first question or
    /// outside the answering phase.
    pub fn retreat(&mut self) {
        if self.phase == Phase::Answering && self.current_index > 0 {
            self.current_index -= 1;
        }
    }

    /// Jump to an arbitrary question (the question-navigator path). No-op
    /// out of range or outside the answering phase.
    pub fn goto(&mut self, index: usize) {
        if self.phase == Phase::Answering && index < self.exam.len() {
            self.current_index = index;
        }
    }

    /// Ask to finish; the caller still has to [`confirm`](Self::confirm).
    pub fn request_finish(&mut self) {
        if self.phase == Phase::Answering {
            self.phase = Phase::ConfirmingFinish;
        }
    }

    /// Confirm the finish request and move to results. Emits
    /// [`SessionEvent::SessionPassed`] or [`SessionEvent::SessionFailed`].
    pub fn confirm(&mut self) {
        if self.phase != Phase::ConfirmingFinish {
            return;
        }
        self.phase = Phase::ShowingResults;
        let summary = self.score();
        let event = if summary.passed() {
            SessionEvent::SessionPassed {
                percentage: summary.percentage,
            }
        } else {
            SessionEvent::SessionFailed {
                percentage: summary.percentage,
            }
        };
        self.events.push(event);
    }

    /// Abandon the finish request and keep answering at the same position.
    pub fn cancel(&mut self) {
        if self.phase == Phase::ConfirmingFinish {
            self.phase = Phase::Answering;
        }
    }

    /// Leave the results and take the same exam again from the top.
    pub fn restart(&mut self) {
        if self.phase != Phase::ShowingResults {
            return;
        }
        self.reset_answers();
        self.phase = Phase::Answering;
    }

    /// Reorder the questions with a uniform random permutation and reset
    /// all answers. Available at any point while answering.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// [`shuffle`](Self::shuffle) with a caller-provided RNG, for
    /// deterministic tests.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.phase != Phase::Answering {
            return;
        }
        self.exam.questions.shuffle(rng);
        self.reset_answers();
    }

    fn reset_answers(&mut self) {
        self.answers = vec![None; self.exam.len()];
        self.current_index = 0;
        if self.restart_timer == RestartTimer::Reset {
            self.elapsed_seconds = 0;
        }
    }

    /// Advance the wall-clock counter by one second. The environment calls
    /// this from its periodic tick; counting stops once results are shown.
    pub fn tick(&mut self) {
        if self.phase != Phase::ShowingResults {
            self.elapsed_seconds += 1;
        }
    }

    /// Take the queued session events, oldest first.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Derived score over the current answers.
    pub fn score(&self) -> ScoreSummary {
        scoring::score(&self.exam.questions, &self.answers)
    }

    /// Non-correct questions for the results review.
    pub fn review(&self) -> Vec<ReviewItem> {
        scoring::review(&self.exam.questions, &self.answers)
    }
}
