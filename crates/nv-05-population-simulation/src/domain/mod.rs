//! # Domain Layer

pub mod actors;
pub mod config;
pub mod content;
pub mod errors;
pub mod population;
