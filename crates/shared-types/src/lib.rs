//! # Shared Types Crate
//!
//! This crate contains the event data model and the corpus vocabulary used by
//! every subsystem of the verification lab.
//!
//! ## Design Principles
//!
//! - **Derived Identity**: `Event` carries no identifier field. The event id is
//!   always recomputed from the fields by the codec (`nv-01-event-codec`).
//! - **Frozen Corpus**: `CorpusEntry` values are produced once by the simulator
//!   and only read afterwards.
//! - **Ground Truth Is Independent**: a `GroundTruthLabel` describes the actor,
//!   not whether verification happened to catch the tampering.

pub mod corpus;
pub mod entities;

pub use corpus::*;
pub use entities::*;
