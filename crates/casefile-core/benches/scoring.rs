use criterion::{black_box, criterion_group, criterion_main, Criterion};

use casefile_core::engine::evaluate;
use casefile_core::model::{AnswerOption, ConceptKeyword, QuestionConfig, QuestionType, UserAnswer};

fn options(n: usize) -> Vec<AnswerOption> {
    (0..n)
        .map(|i| AnswerOption {
            id: format!("opt-{i}"),
            text: format!("Option {i}"),
            score: Some((i * 7 % 101) as u32),
            correct: i % 3 == 0,
            feedback: None,
        })
        .collect()
}

fn concepts(n: usize) -> Vec<ConceptKeyword> {
    (0..n)
        .map(|i| ConceptKeyword {
            concept: format!("concept-{i}"),
            keywords: vec![format!("keyword{i}"), format!("synonym{i}")],
            weight: 1.0 + i as f64,
            required: i == 0,
        })
        .collect()
}

fn bench_choice(c: &mut Criterion) {
    let mut group = c.benchmark_group("choice");
    let config = QuestionConfig {
        options: options(8),
        correct_answer: Some("opt-3".into()),
        xp_value: 50,
        ..QuestionConfig::default()
    };
    let answer = UserAnswer::from("opt-3");

    group.bench_function("multiple_choice", |b| {
        b.iter(|| evaluate(black_box(&QuestionType::MultipleChoice), black_box(&answer), &config))
    });

    group.bench_function("trade_off", |b| {
        b.iter(|| evaluate(black_box(&QuestionType::TradeOff), black_box(&answer), &config))
    });

    group.finish();
}

fn bench_multi_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("multi_select");

    for n in [4usize, 32, 256] {
        let config = QuestionConfig {
            options: options(n),
            xp_value: 100,
            ..QuestionConfig::default()
        };
        let answer = UserAnswer::Multiple((0..n).step_by(2).map(|i| format!("opt-{i}")).collect());
        group.bench_function(format!("options={n}"), |b| {
            b.iter(|| evaluate(black_box(&QuestionType::MultiSelect), black_box(&answer), &config))
        });
    }

    group.finish();
}

fn bench_text_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_input");
    let answer = UserAnswer::from(
        "We should put a cache in front of the database, mention keyword3 and synonym7, \
         and scale the read path horizontally so that keyword12 stops being a bottleneck.",
    );

    for n in [3usize, 20, 100] {
        let config = QuestionConfig {
            concepts: concepts(n),
            xp_value: 40,
            ..QuestionConfig::default()
        };
        group.bench_function(format!("concepts={n}"), |b| {
            b.iter(|| evaluate(black_box(&QuestionType::TextInput), black_box(&answer), &config))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_choice, bench_multi_select, bench_text_input);
criterion_main!(benches);
