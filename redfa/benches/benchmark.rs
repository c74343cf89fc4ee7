use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lazy_static::lazy_static;
use proptest::prelude::*;
use proptest::strategy::ValueTree;
use proptest::test_runner::TestRunner;
use redfa::dfa::Dfa;
use regex::Regex as LibRegex;

lazy_static! {
    static ref PATTERNS: Box<[&'static str]> = {
        [
            "(a|b)*abb",
            "(c|C)+++*",
            "[a-z]([a-z0-9]|_)*",
            "(0|1)*(00|11)(0|1)*",
            "a(b|c)*d|[x-z]*",
        ]
        .into_iter()
        .collect()
    };
}

pub fn regex_compile(c: &mut Criterion) {
    c.bench_function("redfa regex compile", |b| {
        b.iter(|| {
            let pattern = black_box(PATTERNS[2]);
            redfa::compile(pattern).unwrap()
        })
    });

    c.bench_function("library regex compile", |b| {
        b.iter(|| {
            let pattern = black_box(PATTERNS[2]);
            LibRegex::new(pattern).unwrap()
        })
    });
}

pub fn regex_check(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let string_gen = "[a-z0-9_]+".new_tree(&mut runner).unwrap();
    let dfa = redfa::compile(PATTERNS[2]).unwrap();

    c.bench_function("redfa regex check", |b| {
        b.iter(|| dfa.accepts(black_box(&string_gen.current())))
    });

    let mut runner = TestRunner::default();
    let string_gen = "[a-z0-9_]+".new_tree(&mut runner).unwrap();
    let input_regex = format!("^({})$", PATTERNS[2]);
    let regex = LibRegex::new(&input_regex).unwrap();
    c.bench_function("library regex check", |b| {
        b.iter(|| regex.is_match(black_box(&string_gen.current())))
    });
}

pub fn subset_construction(c: &mut Criterion) {
    let nfas: Vec<_> = PATTERNS
        .iter()
        .map(|pattern| redfa::parser::regex(pattern).unwrap())
        .collect();
    c.bench_function("subset construction", |b| {
        b.iter(|| {
            for nfa in &nfas {
                black_box(nfa.to_dfa());
            }
        })
    });
}

pub fn minimization(c: &mut Criterion) {
    let dfas: Vec<Dfa> = PATTERNS
        .iter()
        .map(|pattern| redfa::parser::regex(pattern).unwrap().to_dfa())
        .collect();
    c.bench_function("minimization", |b| {
        b.iter(|| {
            for dfa in &dfas {
                let mut dfa = dfa.clone();
                dfa.minimize();
                black_box(dfa);
            }
        })
    });
}

criterion_group!(
    benches,
    regex_compile,
    regex_check,
    subset_construction,
    minimization
);
criterion_main!(benches);
