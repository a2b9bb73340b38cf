use crate::common::{configure_criterion, signup_rules, SignupForm};
use criterion::{criterion_group, Criterion};
use std::hint::black_box;

pub fn bench_rules_validate(c: &mut Criterion) {
    let rules = signup_rules();
    let valid = SignupForm::valid(42);
    let invalid = SignupForm::invalid();

    let mut group = c.benchmark_group("rules");

    group.bench_function("validate_passing_form", |b| {
        b.iter(|| black_box(rules.validate(black_box(&valid))))
    });

    group.bench_function("validate_failing_form", |b| {
        b.iter(|| black_box(rules.validate(black_box(&invalid))))
    });

    group.bench_function("lookup_after_failure", |b| {
        let report = rules.validate(&invalid);
        b.iter(|| {
            let errors = report.errors();
            black_box((
                errors.on(black_box("bio_html")),
                errors.has(black_box("email_format")),
                errors.if_has_then(black_box("nickname_length"), "is-invalid"),
            ))
        })
    });

    group.finish();
}

criterion_group! {
    name = rules_benches;
    config = configure_criterion();
    targets = bench_rules_validate,
}
