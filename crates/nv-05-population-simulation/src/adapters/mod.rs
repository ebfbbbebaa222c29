//! # Adapters Layer

pub mod text;
