//! Options controlling text parsing and formatting.

/// How numeric scalar tokens are parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScalarParsing {
    /// Accept the longest numeric prefix of a token and ignore the rest,
    /// the way stream extraction reads a number. `"12px"` parses as `12`
    /// and `"3.7"` parses as the integer `3`.
    #[default]
    Lenient,
    /// Require the entire token to be a valid number.
    Strict,
}

/// Options for parsing value literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    pub scalar: ScalarParsing,
}

impl ParseOptions {
    /// Creates default (lenient) parse options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates parse options that reject trailing characters after a number.
    pub fn strict() -> Self {
        Self {
            scalar: ScalarParsing::Strict,
        }
    }
}

/// Notation used when formatting floating-point components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FloatFormat {
    /// Without a precision: the shortest text that parses back to the same
    /// value. With a precision: C `%g` style, trailing zeros removed.
    #[default]
    Default,
    /// Fixed-point notation with `precision` fractional digits.
    Fixed,
    /// Scientific notation with `precision` fractional digits.
    Scientific,
}

/// Options for formatting value strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatOptions {
    pub float_format: FloatFormat,
    /// Digits of precision. `None` means shortest round-trip text for
    /// [`FloatFormat::Default`] and [`DEFAULT_FLOAT_PRECISION`] otherwise.
    pub precision: Option<usize>,
}

/// Precision used by fixed and scientific notation when none is given.
pub const DEFAULT_FLOAT_PRECISION: usize = 6;

impl FormatOptions {
    /// Creates default format options (shortest round-trip floats).
    pub fn new() -> Self {
        Self::default()
    }

    /// `%g` style output with the given significant digits.
    pub fn general(precision: usize) -> Self {
        Self {
            float_format: FloatFormat::Default,
            precision: Some(precision),
        }
    }

    /// Fixed-point output with the given fractional digits.
    pub fn fixed(precision: usize) -> Self {
        Self {
            float_format: FloatFormat::Fixed,
            precision: Some(precision),
        }
    }

    /// Scientific output with the given fractional digits.
    pub fn scientific(precision: usize) -> Self {
        Self {
            float_format: FloatFormat::Scientific,
            precision: Some(precision),
        }
    }
}
