//! tagtrail - Tag sets with a compacted version history
//!
//! Keeps an ordered collection of `@`-prefixed tag labels for one owner and
//! records a new version of it on checkpoint whenever it changed since the
//! last recorded version.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod telemetry;

pub use error::TagtrailError;
