//! # Ports Layer
//!
//! - **Outbound (Driven)**: text generation the simulator depends on

pub mod outbound;
