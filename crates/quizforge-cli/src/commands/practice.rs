//! The `quizforge practice` command.
//!
//! Interactive terminal loop over a `PracticeSession`: one question at a
//! time, instant feedback, navigation, shuffle, and the confirm-finish /
//! results / restart flow.

use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use quizforge_core::model::{ExamSet, Question};
use quizforge_core::report::{format_elapsed, SessionReport};
use quizforge_core::session::{Phase, PracticeSession, RestartTimer, SelectOutcome, SessionEvent};

pub fn execute(
    exam_index: Option<usize>,
    demo: bool,
    shuffle: bool,
    timer: String,
    report: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let timer_policy = match timer.as_str() {
        "reset" => RestartTimer::Reset,
        "continue" => RestartTimer::Continue,
        other => anyhow::bail!("--timer must be 'reset' or 'continue', got '{other}'"),
    };

    let exam = if demo {
        anyhow::ensure!(
            exam_index.is_none(),
            "--demo and --exam-index are mutually exclusive"
        );
        demo_exam()
    } else {
        let (_, store) = super::open_store(data_dir, config_path.as_deref())?;
        match exam_index {
            Some(index) => {
                anyhow::ensure!(index >= 1, "--exam-index is 1-based, as shown by `quizforge list`");
                let exam = store
                    .my_exams()?
                    .into_iter()
                    .nth(index - 1)
                    .with_context(|| format!("no exam at position {index}; run `quizforge list`"))?;
                store.stage(&exam)?;
                exam
            }
            None => store
                .staged()?
                .context("no staged exam — run `quizforge import` or `quizforge generate` first")?,
        }
    };

    let mut session = PracticeSession::new(exam)?.with_restart_timer(timer_policy);
    if shuffle {
        session.shuffle();
    }

    let stdin = std::io::stdin();
    run_loop(&mut session, &mut stdin.lock(), report.as_deref())
}

/// Delivers one `tick()` per elapsed wall-clock second. The session itself
/// never samples the clock; this is the environment-provided tick source.
struct WallClock {
    start: Instant,
    delivered: u64,
}

impl WallClock {
    fn new() -> Self {
        Self {
            start: Instant::now(),
            delivered: 0,
        }
    }

    fn sync(&mut self, session: &mut PracticeSession) {
        let now = self.start.elapsed().as_secs();
        while self.delivered < now {
            session.tick();
            self.delivered += 1;
        }
    }
}

fn run_loop(
    session: &mut PracticeSession,
    input: &mut impl BufRead,
    report_path: Option<&Path>,
) -> Result<()> {
    let mut clock = WallClock::new();

    println!(
        "\n{} — {} questions",
        session.exam().name,
        session.exam().len()
    );
    println!("Answer with an option letter. n next, p prev, g N jump, s shuffle, f finish, q quit.");

    loop {
        clock.sync(session);
        match session.phase() {
            Phase::Answering => {
                render_question(session);
                let Some(line) = read_line(input)? else {
                    return Ok(());
                };
                if !handle_answering_input(session, &line) {
                    println!("Quiz abandoned.");
                    return Ok(());
                }
            }
            Phase::ConfirmingFinish => {
                println!("\nFinish the quiz? [y/n]");
                let Some(line) = read_line(input)? else {
                    return Ok(());
                };
                match line.trim() {
                    "y" | "yes" => session.confirm(),
                    "n" | "no" => session.cancel(),
                    "q" | "quit" => {
                        println!("Quiz abandoned.");
                        return Ok(());
                    }
                    _ => println!("Please answer y or n."),
                }
            }
            Phase::ShowingResults => {
                render_results(session, report_path)?;
                println!("\nRestart and try again? [y/N]");
                match read_line(input)? {
                    Some(line) if matches!(line.trim(), "y" | "yes") => session.restart(),
                    _ => return Ok(()),
                }
            }
        }
    }
}

/// React to one line of input while answering. Returns `false` on quit.
fn handle_answering_input(session: &mut PracticeSession, line: &str) -> bool {
    let line = line.trim();
    match line {
        "" => {}
        "n" | "next" => {
            if session.current_index() + 1 == session.exam().len() {
                session.request_finish();
            } else {
                session.advance();
            }
        }
        "p" | "prev" => session.retreat(),
        "s" | "shuffle" => {
            session.shuffle();
            println!("Questions shuffled, answers cleared.");
        }
        "f" | "finish" => session.request_finish(),
        "q" | "quit" => return false,
        _ => {
            if let Some(number) = line.strip_prefix("g ").or_else(|| line.strip_prefix("g")) {
                match number.trim().parse::<usize>() {
                    Ok(n) if n >= 1 => session.goto(n - 1),
                    _ => println!("Usage: g N (1-based question number)"),
                }
            } else if line.len() == 1 {
                let letter = line.chars().next().unwrap().to_ascii_uppercase();
                select(session, letter);
            } else {
                println!("Unknown input '{line}'. Answer with a letter, or n/p/g/s/f/q.");
            }
        }
    }
    true
}

fn select(session: &mut PracticeSession, letter: char) {
    let index = session.current_index();
    if !session.current_question().options.contains(letter) {
        println!("No option '{letter}' on this question.");
        return;
    }
    match session.select_answer(index, letter) {
        SelectOutcome::Recorded { correct: true } => println!("✔ Correct"),
        SelectOutcome::Recorded { correct: false } => {
            for event in session.drain_events() {
                if let SessionEvent::AnswerIncorrect { selected, .. } = event {
                    println!("✗ Incorrect ({selected})");
                }
            }
        }
        SelectOutcome::AlreadyAnswered => println!("Already answered — answers are final."),
        SelectOutcome::OutOfRange | SelectOutcome::NotAnswering => {}
    }
}

fn render_question(session: &PracticeSession) {
    let score = session.score();
    let index = session.current_index();
    let question = session.current_question();

    println!(
        "\nQuestion {}/{} · {} answered · ✔ {} ✗ {} · {}",
        index + 1,
        session.exam().len(),
        score.answered,
        score.correct,
        score.wrong,
        format_elapsed(session.elapsed_seconds()),
    );
    println!("{}", question.prompt);

    let selected = session.answer_for(index);
    for (letter, text) in question.options.iter() {
        let marker = answer_marker(question, selected, letter);
        println!("  {marker} {letter}) {text}");
    }
}

/// Marker column for an option line: feedback only appears once the
/// question is answered, mirroring the reveal-on-answer behavior.
fn answer_marker(question: &Question, selected: Option<&str>, letter: char) -> char {
    let Some(selected) = selected else {
        return ' ';
    };
    let is_selected = selected.len() == 1 && selected.starts_with(letter);
    let is_correct = question.is_correct(&letter.to_string());
    match (is_selected, is_correct) {
        (true, true) => '✔',
        (true, false) => '✗',
        (false, true) => '✔',
        (false, false) => ' ',
    }
}

fn render_results(session: &mut PracticeSession, report_path: Option<&Path>) -> Result<()> {
    let report = SessionReport::from_session(session);

    println!("\nResults — {}", report.exam_name);

    let mut table = Table::new();
    table.set_header(vec!["Score", "Correct", "Answered", "Time"]);
    table.add_row(vec![
        Cell::new(format!("{}%", report.score.percentage)),
        Cell::new(format!("{}/{}", report.score.correct, report.score.total)),
        Cell::new(report.score.answered),
        Cell::new(format_elapsed(report.elapsed_seconds)),
    ]);
    println!("{table}");

    for event in session.drain_events() {
        match event {
            SessionEvent::SessionPassed { percentage } => {
                println!("Congratulations! You answered {percentage}% correctly 🎉");
            }
            SessionEvent::SessionFailed { percentage } => {
                println!("You answered {percentage}% correctly. Keep practicing! ✨");
            }
            SessionEvent::AnswerIncorrect { .. } => {}
        }
    }

    if !report.review.is_empty() {
        println!("\nReview:");
        for entry in &report.review {
            println!("  Question {}: {}", entry.index + 1, entry.prompt);
            match (&entry.selected, &entry.selected_text) {
                (Some(letter), Some(text)) => println!("    Your answer:    {letter}) {text}"),
                (Some(letter), None) => println!("    Your answer:    {letter}"),
                (None, _) => println!("    Your answer:    (unanswered)"),
            }
            match &entry.answer_text {
                Some(text) => println!("    Correct answer: {}) {text}", entry.answer),
                None => println!("    Correct answer: {}", entry.answer),
            }
        }
    }

    if let Some(path) = report_path {
        report.save_json(path)?;
        println!("Report saved to {}", path.display());
    }

    Ok(())
}

fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}

/// The built-in demo exam, practice-able without importing anything.
fn demo_exam() -> ExamSet {
    let questions = [
        (
            "¿En qué año comenzó la Guerra Civil Española?",
            [('A', "1935"), ('B', "1936"), ('C', "1937"), ('D', "1938")],
            "B",
        ),
        (
            "¿Quién fue el primer presidente de la Segunda República?",
            [
                ('A', "Manuel Azaña"),
                ('B', "Niceto Alcalá-Zamora"),
                ('C', "Alejandro Lerroux"),
                ('D', "Francisco Largo Caballero"),
            ],
            "B",
        ),
        (
            "¿Cuándo murió Francisco Franco?",
            [('A', "1974"), ('B', "1975"), ('C', "1976"), ('D', "1977")],
            "B",
        ),
        (
            "¿Qué evento marcó el inicio de la Transición Española?",
            [
                ('A', "La muerte de Franco"),
                ('B', "La aprobación de la Constitución"),
                ('C', "Las primeras elecciones democráticas"),
                ('D', "El 23-F"),
            ],
            "A",
        ),
        (
            "¿En qué año se aprobó la Constitución española actual?",
            [('A', "1977"), ('B', "1978"), ('C', "1979"), ('D', "1980")],
            "B",
        ),
    ];

    let questions = questions
        .into_iter()
        .map(|(prompt, options, answer)| Question {
            prompt: prompt.to_string(),
            options: options
                .into_iter()
                .map(|(letter, text)| (letter, text.to_string()))
                .collect(),
            answer: answer.to_string(),
        })
        .collect();

    ExamSet::new("Historia de España - Siglo XX", questions)
}
