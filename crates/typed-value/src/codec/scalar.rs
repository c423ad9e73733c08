//! Numeric scalar parsing and formatting.

use std::fmt::{Display, LowerExp};
use std::str::FromStr;

use crate::codec::options::{
    FloatFormat, FormatOptions, ParseOptions, ScalarParsing, DEFAULT_FLOAT_PRECISION,
};
use crate::error::ParseError;

// =============================================================================
// PARSING
// =============================================================================

/// Spellings of non-finite values accepted as float tokens. These are
/// exactly the texts float formatting emits for infinities and NaN.
const NON_FINITE_LITERALS: [&str; 3] = ["inf", "-inf", "NaN"];

/// Floating-point payload types.
pub(crate) trait FloatScalar: FromStr + Copy {
    fn is_infinite(self) -> bool;
}

impl FloatScalar for f32 {
    fn is_infinite(self) -> bool {
        f32::is_infinite(self)
    }
}

impl FloatScalar for f64 {
    fn is_infinite(self) -> bool {
        f64::is_infinite(self)
    }
}

/// Parses an integer token according to `options`.
///
/// Values outside the range of `T` are rejected.
pub(crate) fn parse_integer<T: FromStr>(
    text: &str,
    type_name: &'static str,
    options: &ParseOptions,
) -> Result<T, ParseError> {
    let digits = numeric_token(text, options, integer_prefix)
        .ok_or_else(|| invalid_number(text, type_name))?;
    digits.parse().map_err(|_| invalid_number(text, type_name))
}

/// Parses a floating-point token according to `options`.
///
/// Decimal literals that overflow `T` are rejected rather than rounded to
/// infinity. Infinity and NaN are only read from their canonical spellings.
pub(crate) fn parse_float<T: FloatScalar>(
    text: &str,
    type_name: &'static str,
    options: &ParseOptions,
) -> Result<T, ParseError> {
    let candidate = match options.scalar {
        ScalarParsing::Strict => text,
        ScalarParsing::Lenient => text.trim_start(),
    };
    if NON_FINITE_LITERALS.contains(&candidate) {
        return candidate.parse().map_err(|_| invalid_number(text, type_name));
    }

    let decimal = numeric_token(text, options, float_prefix)
        .ok_or_else(|| invalid_number(text, type_name))?;
    let value: T = decimal
        .parse()
        .map_err(|_| invalid_number(text, type_name))?;
    if value.is_infinite() {
        return Err(invalid_number(text, type_name));
    }
    Ok(value)
}

/// Selects the part of `text` to hand to the number parser.
///
/// Strict parsing requires the whole text to match `prefix`; lenient parsing
/// skips leading whitespace and keeps the longest matching prefix, the way
/// stream extraction reads a number.
fn numeric_token<'a>(
    text: &'a str,
    options: &ParseOptions,
    prefix: fn(&str) -> &str,
) -> Option<&'a str> {
    let head = match options.scalar {
        ScalarParsing::Strict => {
            let head = prefix(text);
            if head.len() != text.len() {
                return None;
            }
            head
        }
        ScalarParsing::Lenient => prefix(text.trim_start()),
    };
    (!head.is_empty()).then_some(head)
}

fn invalid_number(text: &str, type_name: &'static str) -> ParseError {
    ParseError::InvalidNumber {
        type_name,
        literal: text.to_string(),
    }
}

/// Returns the longest prefix of `s` shaped like `[+-]digits`.
fn integer_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return "";
    }
    &s[..end]
}

/// Returns the longest prefix of `s` shaped like a decimal float literal:
/// `[+-]digits[.digits][(e|E)[+-]digits]` with at least one mantissa digit.
fn float_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let mut mantissa_digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        mantissa_digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return "";
    }

    // Exponent only counts if at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    &s[..end]
}

// =============================================================================
// FORMATTING
// =============================================================================

/// Appends a floating-point value formatted according to `options`.
pub(crate) fn write_float<F>(value: F, out: &mut String, options: &FormatOptions)
where
    F: Copy + Display + LowerExp,
{
    match (options.float_format, options.precision) {
        (FloatFormat::Default, None) => out.push_str(&value.to_string()),
        (FloatFormat::Default, Some(precision)) => {
            out.push_str(&format_general(value, precision))
        }
        (FloatFormat::Fixed, precision) => {
            let precision = precision.unwrap_or(DEFAULT_FLOAT_PRECISION);
            out.push_str(&format!("{:.*}", precision, value));
        }
        (FloatFormat::Scientific, precision) => {
            let precision = precision.unwrap_or(DEFAULT_FLOAT_PRECISION);
            let sci = format!("{:.*e}", precision, value);
            match split_exponent(&sci) {
                Some((mantissa, exp)) => out.push_str(&c_exponent(mantissa, exp)),
                None => out.push_str(&sci),
            }
        }
    }
}

/// Formats like C `%g`: `precision` significant digits, choosing fixed or
/// scientific notation by the decimal exponent, trailing zeros removed.
fn format_general<F>(value: F, precision: usize) -> String
where
    F: Copy + Display + LowerExp,
{
    let precision = precision.max(1);
    let sci = format!("{:.*e}", precision - 1, value);
    // Non-finite values have no exponent part.
    let Some((mantissa, exp)) = split_exponent(&sci) else {
        return sci;
    };

    if exp < -4 || exp >= precision as i32 {
        c_exponent(trim_fraction(mantissa), exp)
    } else {
        let decimals = (precision as i32 - 1 - exp) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn split_exponent(sci: &str) -> Option<(&str, i32)> {
    let (mantissa, exp) = sci.split_once('e')?;
    Some((mantissa, exp.parse().ok()?))
}

/// Renders an exponent the way C does: explicit sign, at least two digits.
fn c_exponent(mantissa: &str, exp: i32) -> String {
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, sign, exp.abs())
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
