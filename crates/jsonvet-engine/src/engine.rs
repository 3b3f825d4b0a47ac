use jsonschema::Validator;
use serde_json::Value;

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::path::dotted_path;
use crate::report::{ValidationReport, Violation};

/// Handle to the underlying JSON Schema engine.
///
/// Stateless and cheap to construct; immutable after construction, so one
/// instance can be shared across threads. Schemas are compiled per call —
/// nothing is cached between calls.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Create an engine with default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with explicit config.
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Get engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run full constraint validation of `instance` against `schema`.
    ///
    /// Violations are collected in the engine's reporting order; an empty
    /// report means the instance conforms. Schema compilation failures
    /// surface as [`EngineError::CompileFailed`].
    pub fn validate(&self, instance: &Value, schema: &Value) -> Result<ValidationReport> {
        let validator = self.compile(schema)?;

        let violations: Vec<Violation> = validator
            .iter_errors(instance)
            .map(|err| Violation {
                path: dotted_path(&err.instance_path().to_string()),
                message: err.to_string(),
                details: None,
            })
            .collect();

        if !violations.is_empty() {
            tracing::debug!(count = violations.len(), "instance failed validation");
        }

        Ok(ValidationReport::new(violations))
    }

    /// Check `schema` against the engine's built-in JSON Schema
    /// meta-schema for the schema's declared dialect.
    pub fn check(&self, schema: &Value) -> Result<ValidationReport> {
        match jsonschema::meta::validate(schema) {
            Ok(()) => Ok(ValidationReport::default()),
            Err(err) => {
                tracing::debug!("schema failed the meta-schema check");
                Ok(ValidationReport::new(vec![Violation {
                    path: dotted_path(&err.instance_path().to_string()),
                    message: err.to_string(),
                    details: None,
                }]))
            }
        }
    }

    fn compile(&self, schema: &Value) -> Result<Validator> {
        let compiled = match self.config.draft {
            Some(draft) => jsonschema::options().with_draft(draft).build(schema),
            None => jsonschema::validator_for(schema),
        };
        compiled.map_err(|err| EngineError::CompileFailed(err.to_string()))
    }
}
