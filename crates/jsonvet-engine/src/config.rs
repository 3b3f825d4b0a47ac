use jsonschema::Draft;

/// Controls how the engine compiles schemas.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EngineConfig {
    /// Pin a specific JSON Schema dialect. `None` detects the dialect
    /// from the schema's `$schema` member.
    pub draft: Option<Draft>,
}
