//! String utilities shared by the text codec.

pub mod split;

pub use split::{split_string, PREFERRED_SEPARATOR, VALID_SEPARATORS};
