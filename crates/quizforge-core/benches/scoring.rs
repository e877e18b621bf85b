use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizforge_core::model::ExamSet;
use quizforge_core::parser::{parse, ParserConfig};
use quizforge_core::session::PracticeSession;

fn bench_session_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_scoring");

    for &n in &[10usize, 100, 1000] {
        let text = generate_aiken_text(n);
        let questions = parse(&text, &ParserConfig::upload());
        let mut session = PracticeSession::new(ExamSet::new("bench", questions)).unwrap();
        for i in 0..n {
            // Alternate right and wrong selections.
            let letter = if i % 2 == 0 { 'B' } else { 'A' };
            session.select_answer(i, letter);
        }

        group.bench_function(format!("score_{n}"), |b| {
            b.iter(|| black_box(&session).score())
        });

        group.bench_function(format!("review_{n}"), |b| {
            b.iter(|| black_box(&session).review())
        });
    }

    group.finish();
}

fn bench_full_session(c: &mut Criterion) {
    let text = generate_aiken_text(100);
    let questions = parse(&text, &ParserConfig::upload());

    c.bench_function("answer_all_100", |b| {
        b.iter(|| {
            let mut session =
                PracticeSession::new(ExamSet::new("bench", black_box(questions.clone()))).unwrap();
            for i in 0..100 {
                session.select_answer(i, 'B');
            }
            session.confirm();
            session.score()
        })
    });
}

fn generate_aiken_text(n: usize) -> String {
    let mut s = String::new();
    for i in 0..n {
        s.push_str(&format!(
            "What is the value of item {i}?\nA. alpha {i}\nB. beta {i}\nANSWER: B\n\n"
        ));
    }
    s
}

criterion_group!(benches, bench_session_scoring, bench_full_session);
criterion_main!(benches);
