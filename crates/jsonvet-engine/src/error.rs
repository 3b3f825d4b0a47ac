use crate::report::ValidationReport;

/// Summary line for instance validation failures.
pub const SCHEMA_VALIDATION_FAILED: &str = "Schema validation failed.";

/// Summary line for meta-schema check failures.
pub const INVALID_JSON_SCHEMA: &str = "Invalid JSON schema.";

/// Errors produced by the validator engine wrapper.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The schema could not be compiled by the engine.
    #[error("failed to compile schema: {0}")]
    CompileFailed(String),

    /// One or more constraint violations, aggregated into a single
    /// multi-line message: the summary line, then one line per violation
    /// in report order.
    #[error("{summary}\n{report}")]
    ValidationFailed {
        summary: &'static str,
        report: ValidationReport,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
