//! # Archscan Domain Layer
//!
//! Core types shared by every layer of the repository analyzer:
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | Repository snapshot and analysis facets |
//! | [`ports`] | Contracts implemented by providers (repository host, analysis store) |
//! | [`error`] | Domain error type and `Result` alias |
//! | [`constants`] | Analyzer limits shared across layers |
//!
//! This crate performs no I/O. Everything in [`value_objects`] is plain data
//! that serializes to the JSON shape stored by the persistence collaborator.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::*;
