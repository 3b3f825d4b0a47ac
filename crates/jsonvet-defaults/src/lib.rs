//! Schema-declared default values for JSON instances.
//!
//! Walks a schema's `properties` declarations and an instance tree
//! together, depth-first, inserting declared defaults for fields the
//! instance lacks. This stage never validates and never rejects — it
//! only fills gaps.

pub mod applier;

pub use applier::{apply_defaults, apply_schema_defaults};
