//! Data model types.
//!
//! This module contains the types that make up a value:
//! - Kinds (the closed set of supported data kinds and their type names)
//! - Fixed-length composites (colors, vectors, matrices)
//! - Values (type-erased payload holders)

pub mod kind;
pub mod types;
pub mod value;

pub use kind::{type_names, DataKind};
pub use types::{Color2, Color3, Color4, FixedVector, Matrix33, Matrix44, Vector2, Vector3, Vector4};
pub use value::{from_value_string, to_value_string, type_string, Value, ValueData, ValuePtr};
