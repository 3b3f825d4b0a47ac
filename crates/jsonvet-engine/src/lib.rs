//! Validator engine wrapper with ordered, human-readable violation reports.
//!
//! Constraint checking is delegated to the `jsonschema` crate. This crate
//! owns everything around that black box: compiling schemas, collecting
//! the engine's error stream into a [`ValidationReport`], decoding
//! instance locations into dotted property paths, and the aggregated
//! `ValidationFailed` error raised on any violation.

pub mod config;
pub mod engine;
pub mod error;
pub mod path;
pub mod report;

// The dialect selector is part of our config surface.
pub use jsonschema::Draft;

pub use config::EngineConfig;
pub use engine::Engine;
pub use error::{EngineError, Result, INVALID_JSON_SCHEMA, SCHEMA_VALIDATION_FAILED};
pub use report::{ValidationReport, Violation};
