use serde_json::Value;

/// A schema or instance argument: serialized JSON text or an
/// already-parsed value.
///
/// Normalization happens once at the boundary, before any core logic
/// runs. The parsed form is an owned tree — borrowing conversions clone —
/// which is what makes the no-caller-mutation guarantee hold when
/// defaults are applied later.
#[derive(Debug, Clone)]
pub enum Source {
    /// Serialized JSON text, parsed during normalization.
    Text(String),
    /// An already-parsed JSON value.
    Parsed(Value),
}

impl Source {
    /// Resolve to a parsed value.
    pub fn into_value(self) -> std::result::Result<Value, serde_json::Error> {
        match self {
            Source::Text(text) => serde_json::from_str(&text),
            Source::Parsed(value) => Ok(value),
        }
    }
}

impl From<Value> for Source {
    fn from(value: Value) -> Self {
        Source::Parsed(value)
    }
}

impl From<&Value> for Source {
    fn from(value: &Value) -> Self {
        Source::Parsed(value.clone())
    }
}

impl From<String> for Source {
    fn from(text: String) -> Self {
        Source::Text(text)
    }
}

impl From<&str> for Source {
    fn from(text: &str) -> Self {
        Source::Text(text.to_string())
    }
}
