//! # NV-03 Verification Benchmarks
//!
//! - Sign and verify a single note
//! - Rejection cost for each tamper strategy
//! - Sequential vs parallel evaluation of a simulated corpus

use crate::fixtures::{population, signed_note};
use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use nv_03_event_verification::{verify, EventVerifier};
use nv_04_adversarial_mutation::{mutate, TamperStrategy};
use nv_06_evaluation::{EvaluationMode, Evaluator};
use std::time::Duration;

pub fn sign_and_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("nv-03/single");

    group.bench_function("sign", |b| {
        b.iter(|| black_box(signed_note(0x61, "benchmark note")))
    });

    let signed = signed_note(0x61, "benchmark note");
    group.bench_function("verify_valid", |b| {
        b.iter(|| black_box(verify(&signed.event, &signed.signature_hex)))
    });

    for strategy in TamperStrategy::ALL {
        let m = mutate(signed.event.clone(), signed.signature_hex.clone(), strategy);
        group.bench_with_input(
            BenchmarkId::new("verify_tampered", strategy.name()),
            &m,
            |b, m| b.iter(|| black_box(verify(&m.event, &m.signature_hex))),
        );
    }

    group.finish();
}

pub fn evaluate_corpus(c: &mut Criterion) {
    let mut group = c.benchmark_group("nv-06/evaluate");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(20);

    for size in [100usize, 1000] {
        let corpus = population(7, size, 0.6).corpus();
        group.throughput(Throughput::Elements(size as u64));

        for mode in [EvaluationMode::Sequential, EvaluationMode::Parallel] {
            let evaluator = Evaluator::new(EventVerifier, mode);
            group.bench_with_input(
                BenchmarkId::new(format!("{mode:?}"), size),
                &corpus,
                |b, corpus| b.iter(|| black_box(evaluator.evaluate_corpus(corpus).metrics)),
            );
        }
    }

    group.finish();
}
