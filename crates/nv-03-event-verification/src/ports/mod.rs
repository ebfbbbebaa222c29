//! # Ports Layer
//!
//! - **Inbound (Driving)**: API that the evaluator and other callers use

pub mod inbound;
