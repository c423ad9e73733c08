//! Canonical text encoding for each data kind.
//!
//! - Booleans: exactly `true` or `false`
//! - Strings: stored verbatim
//! - Fixed vectors: exactly N separated components
//! - Arrays: any number of separated elements (empty text is an empty array)
//! - Numeric scalars: see [`ScalarParsing`](crate::codec::ScalarParsing)

use crate::codec::options::{FormatOptions, ParseOptions};
use crate::codec::scalar::{parse_float, parse_integer, write_float};
use crate::error::ParseError;
use crate::model::kind::type_names;
use crate::model::types::{
    Color2, Color3, Color4, FixedVector, Matrix33, Matrix44, Vector2, Vector3, Vector4,
};
use crate::util::{split_string, PREFERRED_SEPARATOR, VALID_SEPARATORS};

/// Canonical literal for `true`.
pub const VALUE_STRING_TRUE: &str = "true";

/// Canonical literal for `false`.
pub const VALUE_STRING_FALSE: &str = "false";

/// Conversion between a payload type and its canonical text form.
pub trait TextCodec: Sized {
    /// Parses `text` as this type.
    fn parse_text(text: &str, options: &ParseOptions) -> Result<Self, ParseError>;

    /// Appends the canonical text form of `self` to `out`. Never fails.
    fn write_text(&self, out: &mut String, options: &FormatOptions);

    /// Returns the canonical text form of `self`.
    fn to_text(&self, options: &FormatOptions) -> String {
        let mut out = String::new();
        self.write_text(&mut out, options);
        out
    }
}

/// Scalar types that may appear as array elements.
pub trait ArrayElement: TextCodec {}

// =============================================================================
// SCALARS
// =============================================================================

impl TextCodec for bool {
    fn parse_text(text: &str, _options: &ParseOptions) -> Result<Self, ParseError> {
        match text {
            VALUE_STRING_TRUE => Ok(true),
            VALUE_STRING_FALSE => Ok(false),
            _ => Err(ParseError::InvalidBoolean {
                type_name: type_names::BOOLEAN,
                literal: text.to_string(),
            }),
        }
    }

    fn write_text(&self, out: &mut String, _options: &FormatOptions) {
        out.push_str(if *self {
            VALUE_STRING_TRUE
        } else {
            VALUE_STRING_FALSE
        });
    }
}

impl TextCodec for String {
    fn parse_text(text: &str, _options: &ParseOptions) -> Result<Self, ParseError> {
        Ok(text.to_string())
    }

    fn write_text(&self, out: &mut String, _options: &FormatOptions) {
        out.push_str(self);
    }
}

impl TextCodec for i32 {
    fn parse_text(text: &str, options: &ParseOptions) -> Result<Self, ParseError> {
        parse_integer(text, type_names::INTEGER, options)
    }

    fn write_text(&self, out: &mut String, _options: &FormatOptions) {
        out.push_str(&self.to_string());
    }
}

impl TextCodec for i64 {
    fn parse_text(text: &str, options: &ParseOptions) -> Result<Self, ParseError> {
        parse_integer(text, type_names::INTEGER, options)
    }

    fn write_text(&self, out: &mut String, _options: &FormatOptions) {
        out.push_str(&self.to_string());
    }
}

impl TextCodec for f32 {
    fn parse_text(text: &str, options: &ParseOptions) -> Result<Self, ParseError> {
        parse_float(text, type_names::FLOAT, options)
    }

    fn write_text(&self, out: &mut String, options: &FormatOptions) {
        write_float(*self, out, options);
    }
}

impl TextCodec for f64 {
    fn parse_text(text: &str, options: &ParseOptions) -> Result<Self, ParseError> {
        parse_float(text, type_names::FLOAT, options)
    }

    fn write_text(&self, out: &mut String, options: &FormatOptions) {
        write_float(*self, out, options);
    }
}

impl ArrayElement for i32 {}
impl ArrayElement for bool {}
impl ArrayElement for f32 {}
impl ArrayElement for String {}

// =============================================================================
// FIXED VECTORS
// =============================================================================

fn parse_fixed<V: FixedVector>(
    text: &str,
    type_name: &'static str,
    options: &ParseOptions,
) -> Result<V, ParseError> {
    let tokens = split_string(text, VALID_SEPARATORS);
    if tokens.len() != V::LENGTH {
        return Err(ParseError::ComponentCount {
            type_name,
            expected: V::LENGTH,
            found: tokens.len(),
            literal: text.to_string(),
        });
    }

    let mut out = V::default();
    for (slot, token) in out.components_mut().iter_mut().zip(tokens) {
        *slot = f32::parse_text(token, options)?;
    }
    Ok(out)
}

fn write_list<'a, T: TextCodec + 'a>(
    items: impl IntoIterator<Item = &'a T>,
    out: &mut String,
    options: &FormatOptions,
) {
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(PREFERRED_SEPARATOR);
        }
        item.write_text(out, options);
    }
}

macro_rules! fixed_vector_codec {
    ($($ty:ident => $name:expr),* $(,)?) => {
        $(
            impl TextCodec for $ty {
                fn parse_text(text: &str, options: &ParseOptions) -> Result<Self, ParseError> {
                    parse_fixed(text, $name, options)
                }

                fn write_text(&self, out: &mut String, options: &FormatOptions) {
                    write_list(self.components(), out, options);
                }
            }
        )*
    };
}

fixed_vector_codec!(
    Color2 => type_names::COLOR2,
    Color3 => type_names::COLOR3,
    Color4 => type_names::COLOR4,
    Vector2 => type_names::VECTOR2,
    Vector3 => type_names::VECTOR3,
    Vector4 => type_names::VECTOR4,
    Matrix33 => type_names::MATRIX33,
    Matrix44 => type_names::MATRIX44,
);

// =============================================================================
// ARRAYS
// =============================================================================

impl<T: ArrayElement> TextCodec for Vec<T> {
    fn parse_text(text: &str, options: &ParseOptions) -> Result<Self, ParseError> {
        split_string(text, VALID_SEPARATORS)
            .into_iter()
            .map(|token| T::parse_text(token, options))
            .collect()
    }

    fn write_text(&self, out: &mut String, options: &FormatOptions) {
        write_list(self, out, options);
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn parse<T: TextCodec>(text: &str) -> Result<T, ParseError> {
        T::parse_text(text, &ParseOptions::default())
    }

    fn text<T: TextCodec>(value: &T) -> String {
        value.to_text(&FormatOptions::default())
    }

    #[test]
    fn test_bool_strict_tokens() {
        assert_eq!(parse::<bool>("true"), Ok(true));
        assert_eq!(parse::<bool>("false"), Ok(false));
        for bad in ["1", "0", "True", "FALSE", " true", ""] {
            assert!(
                matches!(parse::<bool>(bad), Err(ParseError::InvalidBoolean { .. })),
                "{bad:?} should be rejected"
            );
        }
        assert_eq!(text(&true), "true");
        assert_eq!(text(&false), "false");
    }

    #[test]
    fn test_string_identity() {
        assert_eq!(parse::<String>(" a, b "), Ok(" a, b ".to_string()));
        assert_eq!(parse::<String>(""), Ok(String::new()));
        assert_eq!(text(&"x y".to_string()), "x y");
    }

    #[test]
    fn test_fixed_vector_length_enforced() {
        let err = parse::<Vector3>("1,2").unwrap_err();
        assert_eq!(
            err,
            ParseError::ComponentCount {
                type_name: "vector3",
                expected: 3,
                found: 2,
                literal: "1,2".to_string(),
            }
        );
        assert!(parse::<Vector3>("1,2,3,4").is_err());
        assert_eq!(parse::<Vector3>("1,2,3"), Ok(Vector3([1.0, 2.0, 3.0])));
    }

    #[test]
    fn test_fixed_vector_separators() {
        let expected = Color3([0.5, 0.25, 1.0]);
        assert_eq!(parse::<Color3>("0.5,0.25,1"), Ok(expected));
        assert_eq!(parse::<Color3>("0.5, 0.25, 1"), Ok(expected));
        assert_eq!(parse::<Color3>("0.5 0.25\t1"), Ok(expected));
        assert_eq!(text(&expected), "0.5, 0.25, 1");
    }

    #[test]
    fn test_fixed_vector_bad_component() {
        let err = parse::<Vector2>("1, abc").unwrap_err();
        assert!(matches!(err, ParseError::InvalidNumber { type_name: "float", .. }));
    }

    #[test]
    fn test_matrix_text() {
        let m = Matrix33::IDENTITY;
        let s = text(&m);
        assert_eq!(s, "1, 0, 0, 0, 1, 0, 0, 0, 1");
        assert_eq!(parse::<Matrix33>(&s), Ok(m));
        assert!(parse::<Matrix44>(&s).is_err());
    }

    #[test]
    fn test_array_empty_input() {
        assert_eq!(parse::<Vec<f32>>(""), Ok(Vec::new()));
        assert_eq!(parse::<Vec<String>>(""), Ok(Vec::new()));
        assert_eq!(text(&Vec::<i32>::new()), "");
    }

    #[test]
    fn test_arrays() {
        assert_eq!(parse::<Vec<i32>>("1, 2,3"), Ok(vec![1, 2, 3]));
        assert_eq!(parse::<Vec<bool>>("true false"), Ok(vec![true, false]));
        assert!(parse::<Vec<bool>>("true, 1").is_err());
        assert_eq!(
            parse::<Vec<String>>("red, green blue"),
            Ok(vec!["red".to_string(), "green".to_string(), "blue".to_string()])
        );
        assert_eq!(text(&vec![1.5f32, -2.0]), "1.5, -2");
    }

    #[test]
    fn test_format_options_apply_to_components() {
        let v = Vector2([1.0, 0.25]);
        assert_eq!(v.to_text(&FormatOptions::fixed(2)), "1.00, 0.25");
        assert_eq!(vec![1.0f32, 2.5].to_text(&FormatOptions::fixed(1)), "1.0, 2.5");
    }

    #[test]
    fn test_lenient_scalar_tolerates_trailing_characters() {
        // Stream-style extraction keeps the numeric prefix.
        assert_eq!(parse::<i32>("5abc"), Ok(5));
        assert_eq!(parse::<Vector2>("1px, 2px"), Ok(Vector2([1.0, 2.0])));
        let strict = ParseOptions::strict();
        assert!(i32::parse_text("5abc", &strict).is_err());
        assert!(Vector2::parse_text("1px, 2px", &strict).is_err());
    }

    proptest! {
        #[test]
        fn prop_integer_roundtrip(v in any::<i32>()) {
            prop_assert_eq!(parse::<i32>(&text(&v)), Ok(v));
        }

        #[test]
        fn prop_long_roundtrip(v in any::<i64>()) {
            prop_assert_eq!(parse::<i64>(&text(&v)), Ok(v));
        }

        #[test]
        fn prop_float_roundtrip(v in proptest::num::f32::NORMAL | proptest::num::f32::ZERO) {
            prop_assert_eq!(parse::<f32>(&text(&v)), Ok(v));
        }

        #[test]
        fn prop_double_roundtrip(v in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
            prop_assert_eq!(parse::<f64>(&text(&v)), Ok(v));
        }

        #[test]
        fn prop_color4_roundtrip(c in proptest::array::uniform4(-1.0e6f32..1.0e6f32)) {
            let color = Color4(c);
            prop_assert_eq!(parse::<Color4>(&text(&color)), Ok(color));
        }

        #[test]
        fn prop_string_array_roundtrip(items in proptest::collection::vec("[a-zA-Z0-9_.]{1,12}", 0..8)) {
            prop_assert_eq!(parse::<Vec<String>>(&text(&items)), Ok(items));
        }

        #[test]
        fn prop_separator_insensitive(
            items in proptest::collection::vec(any::<i32>(), 0..10),
            sep in prop::sample::select(vec![",", " ", ", ", "\t", " ,\n"]),
        ) {
            let joined = items.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(sep);
            prop_assert_eq!(parse::<Vec<i32>>(&joined), Ok(items));
        }
    }
}
