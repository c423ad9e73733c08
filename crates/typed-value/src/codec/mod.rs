//! Text encoding and decoding of value payloads.
//!
//! Every payload type implements [`TextCodec`]. Parsing reports a
//! [`ParseError`](crate::ParseError) when a literal is not valid for the
//! requested kind; formatting never fails.

pub mod options;
mod scalar;
pub mod text;

pub use options::{
    FloatFormat, FormatOptions, ParseOptions, ScalarParsing, DEFAULT_FLOAT_PRECISION,
};
pub use text::{ArrayElement, TextCodec, VALUE_STRING_FALSE, VALUE_STRING_TRUE};
