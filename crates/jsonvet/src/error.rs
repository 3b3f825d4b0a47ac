use jsonvet_engine::EngineError;

/// Errors surfaced by [`validate`](crate::validate) and
/// [`check`](crate::check).
#[derive(Debug, thiserror::Error)]
pub enum VetError {
    /// The instance argument was text that does not parse as JSON.
    #[error("instance is not valid JSON: {0}")]
    InstanceNotJson(serde_json::Error),

    /// The schema argument was text that does not parse as JSON.
    #[error("schema is not valid JSON: {0}")]
    SchemaNotJson(serde_json::Error),

    /// The engine rejected the schema or reported constraint violations.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl VetError {
    /// True when this error aggregates constraint violations, as opposed
    /// to malformed input or an engine-internal failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, VetError::Engine(EngineError::ValidationFailed { .. }))
    }
}

pub type Result<T> = std::result::Result<T, VetError>;
