//! # NV-01 Codec Benchmarks
//!
//! - Canonical serialization across content sizes
//! - Full id derivation (serialize + SHA-256 + hex)

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use nv_01_event_codec::{canonical_bytes, identifier};
use shared_types::Event;

const PUBKEY: &str = "3bf0c63fcb93463407af97a5e5ee64fa883d107ef9e558472c4eb9aaaefa459d";

pub fn codec_by_content_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("nv-01/codec");

    for size in [16usize, 256, 4096] {
        let event = Event::text_note(PUBKEY, 1_700_000_000, "é".repeat(size / 2));

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::new("canonical_bytes", size),
            &event,
            |b, event| b.iter(|| black_box(canonical_bytes(event))),
        );
        group.bench_with_input(BenchmarkId::new("identifier", size), &event, |b, event| {
            b.iter(|| black_box(identifier(event)))
        });
    }

    group.finish();
}
