//! JSON Schema validation with schema-declared default application.
//!
//! jsonvet verifies a JSON instance against a JSON Schema document and
//! returns a normalized copy of the instance with declared defaults filled
//! in for absent fields. Constraint checking is delegated to the
//! `jsonschema` engine; jsonvet owns input normalization, defaulting, and
//! the aggregation of violations into one ordered, readable error.
//!
//! # Crate Structure
//!
//! - [`defaults`] — recursive default-value application
//! - [`engine`] — validator engine wrapper and violation reports
//! - [`Vetter`] — the orchestrator: normalize, default, validate
//!
//! # Example
//!
//! ```
//! use jsonvet::validate;
//! use serde_json::json;
//!
//! let schema = json!({
//!     "type": "object",
//!     "properties": {
//!         "host": { "type": "string" },
//!         "port": { "type": "integer", "default": 8080 }
//!     },
//!     "required": ["host"]
//! });
//!
//! let normalized = validate(json!({ "host": "localhost" }), schema).unwrap();
//! assert_eq!(normalized["port"], 8080);
//! ```

pub mod error;
pub mod source;
pub mod vetter;

/// Re-export default application types.
pub mod defaults {
    pub use jsonvet_defaults::*;
}

/// Re-export engine types.
pub mod engine {
    pub use jsonvet_engine::*;
}

pub use error::{Result, VetError};
pub use source::Source;
pub use vetter::{check, check_with, validate, validate_with, Vetter};
