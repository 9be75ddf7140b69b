use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizforge_core::generate_quiz;
use quizforge_core::negation::{FrenchNegation, NegationTransformer};
use quizforge_core::text::segment;

const SENTENCES: [&str; 6] = [
    "La photosynthèse transforme l'énergie lumineuse en énergie chimique.",
    "La chlorophylle est le pigment qui capte la lumière.",
    "Les stomates régulent les échanges gazeux de la feuille.",
    "Le glucose produit sera stocké sous forme d'amidon.",
    "La respiration cellulaire libère l'énergie contenue dans le glucose.",
    "Les racines absorbent l'eau et les sels minéraux du sol.",
];

const KEYWORDS: [&str; 8] = [
    "photosynthèse",
    "chlorophylle",
    "stomates",
    "glucose",
    "amidon",
    "respiration",
    "racines",
    "lumière",
];

fn document(paragraphs: usize) -> String {
    let mut s = String::new();
    for i in 0..paragraphs {
        for sentence in SENTENCES {
            s.push_str(sentence);
            s.push(' ');
        }
        s.push_str(&format!("Ce paragraphe numéro {i} conclut la section.\n\n"));
    }
    s
}

fn bench_segment(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment");

    let small = document(1);
    let large = document(200);

    group.bench_function("7_sentences", |b| b.iter(|| segment(black_box(&small))));
    group.bench_function("1400_sentences", |b| b.iter(|| segment(black_box(&large))));

    group.finish();
}

fn bench_negation(c: &mut Criterion) {
    let mut group = c.benchmark_group("negation");
    let rules = FrenchNegation::new();

    group.bench_function("auxiliary", |b| {
        b.iter(|| rules.inject_negation(black_box(SENTENCES[1])))
    });

    group.bench_function("denial_fallback", |b| {
        b.iter(|| rules.inject_negation(black_box(SENTENCES[5])))
    });

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_quiz");

    let small = document(1);
    let large = document(200);

    group.bench_function("small_5_questions", |b| {
        b.iter(|| generate_quiz(black_box(&small), black_box(&KEYWORDS), black_box(5)))
    });

    group.bench_function("large_20_questions", |b| {
        b.iter(|| generate_quiz(black_box(&large), black_box(&KEYWORDS), black_box(20)))
    });

    group.finish();
}

criterion_group!(benches, bench_segment, bench_negation, bench_generate);
criterion_main!(benches);
