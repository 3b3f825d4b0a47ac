use serde_json::Value;

use jsonvet_defaults::apply_schema_defaults;
use jsonvet_engine::{
    Engine, EngineConfig, EngineError, INVALID_JSON_SCHEMA, SCHEMA_VALIDATION_FAILED,
};

use crate::error::{Result, VetError};
use crate::source::Source;

/// Validates instances and checks schemas through one engine handle.
///
/// Construct once and reuse; the handle is immutable after construction
/// and `Send + Sync`, so a single instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Vetter {
    engine: Engine,
}

impl Vetter {
    /// Create a vetter with the default engine configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a vetter with explicit engine configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            engine: Engine::with_config(config),
        }
    }

    /// Validate `instance` against `schema`, returning the defaulted copy.
    ///
    /// The instance is normalized into an owned tree — the caller's
    /// argument is never mutated — then schema-declared defaults are
    /// filled in for absent fields at every depth, and the defaulted copy
    /// is handed to the engine. Any constraint violation aggregates into
    /// [`EngineError::ValidationFailed`] with one line per violation; the
    /// defaulted-but-invalid copy is never returned.
    pub fn validate(
        &self,
        instance: impl Into<Source>,
        schema: impl Into<Source>,
    ) -> Result<Value> {
        let schema = schema
            .into()
            .into_value()
            .map_err(VetError::SchemaNotJson)?;
        let mut copy = instance
            .into()
            .into_value()
            .map_err(VetError::InstanceNotJson)?;

        apply_schema_defaults(&mut copy, &schema);

        let report = self.engine.validate(&copy, &schema)?;
        if !report.is_empty() {
            return Err(EngineError::ValidationFailed {
                summary: SCHEMA_VALIDATION_FAILED,
                report,
            }
            .into());
        }
        Ok(copy)
    }

    /// Check that `schema` is itself a conformant JSON Schema document.
    ///
    /// Runs the document against the engine's built-in meta-schema and
    /// returns it unmodified on success.
    pub fn check(&self, schema: impl Into<Source>) -> Result<Value> {
        let schema = schema
            .into()
            .into_value()
            .map_err(VetError::SchemaNotJson)?;

        let report = self.engine.check(&schema)?;
        if !report.is_empty() {
            return Err(EngineError::ValidationFailed {
                summary: INVALID_JSON_SCHEMA,
                report,
            }
            .into());
        }
        Ok(schema)
    }
}

/// One-shot [`Vetter::validate`] with the default engine configuration.
pub fn validate(instance: impl Into<Source>, schema: impl Into<Source>) -> Result<Value> {
    Vetter::new().validate(instance, schema)
}

/// One-shot [`Vetter::check`] with the default engine configuration.
pub fn check(schema: impl Into<Source>) -> Result<Value> {
    Vetter::new().check(schema)
}

/// Deliver the outcome of [`validate`] to a completion handler.
///
/// An adapter over the synchronous contract, nothing more: the handler
/// fires exactly once, after the computation, with either the defaulted
/// instance or the error.
pub fn validate_with<F>(instance: impl Into<Source>, schema: impl Into<Source>, done: F)
where
    F: FnOnce(Result<Value>),
{
    done(validate(instance, schema));
}

/// Deliver the outcome of [`check`] to a completion handler.
pub fn check_with<F>(schema: impl Into<Source>, done: F)
where
    F: FnOnce(Result<Value>),
{
    done(check(schema));
}
