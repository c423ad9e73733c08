//! Typed values: a type-erased value container with a canonical text form.
//!
//! This crate stores scalar, vector, matrix and array data behind a single
//! [`Value`] type, converts each kind to and from a stable text encoding, and
//! rebuilds values from a `(text, type name)` pair through a registry.
//!
//! # Overview
//!
//! - **Closed kind set**: every value is one of the kinds in [`DataKind`]
//! - **Canonical text**: each kind has one text form that parses back to the
//!   same payload (floats modulo formatting precision)
//! - **Stable type names**: `integer`, `float`, `color3`, `floatarray`, ...
//!   are persisted in documents and never change meaning
//!
//! # Quick Start
//!
//! ```rust
//! use typed_value::{create_value_from_strings, Color3, Value};
//!
//! // Build a value from typed data
//! let color = Value::create_value(Color3([1.0, 0.5, 0.25]));
//! assert_eq!(color.type_string(), "color3");
//! assert_eq!(color.value_string(), "1, 0.5, 0.25");
//!
//! // Rebuild it from its text form
//! let rebuilt = create_value_from_strings(&color.value_string(), color.type_string()).unwrap();
//! assert_eq!(rebuilt.as_a::<Color3>().unwrap(), Color3([1.0, 0.5, 0.25]));
//!
//! // Unknown type names degrade to a string value
//! let raw = create_value_from_strings("hello", "bogus_type").unwrap();
//! assert_eq!(raw.type_string(), "string");
//!
//! // Text that is invalid for a registered kind yields no value
//! assert!(create_value_from_strings("1, 2", "vector3").is_none());
//! ```
//!
//! # Modules
//!
//! - [`model`]: Kinds, composite types and the [`Value`] container
//! - [`codec`]: Text parsing and formatting, with options
//! - [`registry`]: Type-name registry and the process-wide default
//! - [`util`]: Separator handling for list literals
//! - [`error`]: Error types
//!
//! # Errors
//!
//! Parsing text as the wrong kind is a [`ParseError`]; factories that build
//! values from text report it as `None` instead. Asking a value for a kind it
//! does not hold is a [`ValueError::WrongType`].

pub mod codec;
pub mod error;
pub mod model;
pub mod registry;
pub mod util;

// Re-export commonly used types at crate root
pub use codec::{FloatFormat, FormatOptions, ParseOptions, ScalarParsing, TextCodec};
pub use error::{ParseError, ValueError};
pub use model::{
    from_value_string, to_value_string, type_names, type_string, Color2, Color3, Color4,
    DataKind, FixedVector, Matrix33, Matrix44, Value, ValueData, ValuePtr, Vector2,
    Vector3, Vector4,
};
pub use registry::{create_value_from_strings, default_registry, Creator, ValueRegistry};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
