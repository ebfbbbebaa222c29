//! # Verification Lab Benchmarks
//!
//! | Subsystem | Operation |
//! |-----------|-----------|
//! | nv-01 Codec | canonical bytes, id derivation |
//! | nv-03 Verification | sign, verify, tampered rejection |
//! | nv-06 Evaluation | sequential vs parallel corpus scoring |

use criterion::{criterion_group, criterion_main};
use nv_tests::benchmarks::{nv_01_codec, nv_03_verification};

criterion_group!(
    benches,
    nv_01_codec::codec_by_content_size,
    nv_03_verification::sign_and_verify,
    nv_03_verification::evaluate_corpus,
);

criterion_main!(benches);
