//! Type-erased values.
//!
//! A [`Value`] holds exactly one payload of one [`DataKind`]. Values are
//! shared through [`ValuePtr`] and are not mutated after construction.

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::codec::{FormatOptions, ParseOptions, TextCodec};
use crate::error::{ParseError, ValueError};
use crate::model::kind::DataKind;
use crate::model::types::{
    Color2, Color3, Color4, Matrix33, Matrix44, Vector2, Vector3, Vector4,
};

/// Shared handle to an immutable value.
pub type ValuePtr = Arc<Value>;

/// A dynamically typed datum.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i32),
    Boolean(bool),
    Float(f32),
    Color2(Color2),
    Color3(Color3),
    Color4(Color4),
    Vector2(Vector2),
    Vector3(Vector3),
    Vector4(Vector4),
    Matrix33(Matrix33),
    Matrix44(Matrix44),
    String(String),
    IntegerArray(Vec<i32>),
    BooleanArray(Vec<bool>),
    FloatArray(Vec<f32>),
    StringArray(Vec<String>),
    /// Wide integer, reported as `integer`.
    Long(i64),
    /// Wide float, reported as `float`.
    Double(f64),
}

/// Runs `$body` with `$data` bound to the payload of `$value`.
macro_rules! with_payload {
    ($value:expr, $data:ident => $body:expr) => {
        match $value {
            Value::Integer($data) => $body,
            Value::Boolean($data) => $body,
            Value::Float($data) => $body,
            Value::Color2($data) => $body,
            Value::Color3($data) => $body,
            Value::Color4($data) => $body,
            Value::Vector2($data) => $body,
            Value::Vector3($data) => $body,
            Value::Vector4($data) => $body,
            Value::Matrix33($data) => $body,
            Value::Matrix44($data) => $body,
            Value::String($data) => $body,
            Value::IntegerArray($data) => $body,
            Value::BooleanArray($data) => $body,
            Value::FloatArray($data) => $body,
            Value::StringArray($data) => $body,
            Value::Long($data) => $body,
            Value::Double($data) => $body,
        }
    };
}

/// A payload type that a [`Value`] can hold.
pub trait ValueData: TextCodec + Clone + 'static {
    /// Kind of value this payload produces.
    const KIND: DataKind;

    /// Wraps the payload in its value variant.
    fn into_value(self) -> Value;

    /// Borrows the payload if `value` holds exactly this kind.
    fn from_value(value: &Value) -> Option<&Self>;
}

macro_rules! value_data {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl ValueData for $ty {
                const KIND: DataKind = DataKind::$variant;

                fn into_value(self) -> Value {
                    Value::$variant(self)
                }

                fn from_value(value: &Value) -> Option<&Self> {
                    match value {
                        Value::$variant(data) => Some(data),
                        _ => None,
                    }
                }
            }
        )*
    };
}

value_data!(
    i32 => Integer,
    bool => Boolean,
    f32 => Float,
    Color2 => Color2,
    Color3 => Color3,
    Color4 => Color4,
    Vector2 => Vector2,
    Vector3 => Vector3,
    Vector4 => Vector4,
    Matrix33 => Matrix33,
    Matrix44 => Matrix44,
    String => String,
    Vec<i32> => IntegerArray,
    Vec<bool> => BooleanArray,
    Vec<f32> => FloatArray,
    Vec<String> => StringArray,
    i64 => Long,
    f64 => Double,
);

impl Value {
    /// Wraps `data` in a new shared value.
    pub fn create_value<T: ValueData>(data: T) -> ValuePtr {
        Arc::new(data.into_value())
    }

    /// Parses `text` as kind `T` with default options.
    ///
    /// Returns `None` when the text is not valid for `T`; that is an expected
    /// outcome, not an error.
    pub fn create_from_string<T: ValueData>(text: &str) -> Option<ValuePtr> {
        Self::create_from_string_with::<T>(text, &ParseOptions::default())
    }

    /// Parses `text` as kind `T` with the given options.
    pub fn create_from_string_with<T: ValueData>(
        text: &str,
        options: &ParseOptions,
    ) -> Option<ValuePtr> {
        match T::parse_text(text, options) {
            Ok(data) => Some(Self::create_value(data)),
            Err(err) => {
                trace!(type_name = T::KIND.type_name(), error = %err, "rejected value literal");
                None
            }
        }
    }

    /// Reconstructs a value from its text and type name using the default
    /// registry.
    ///
    /// Unknown type names produce a string value holding `value` verbatim.
    /// `None` means the type name is registered but `value` is not valid
    /// text for it.
    pub fn create_value_from_strings(value: &str, type_name: &str) -> Option<ValuePtr> {
        crate::registry::create_value_from_strings(value, type_name)
    }

    /// Returns the concrete kind of this value.
    pub fn kind(&self) -> DataKind {
        match self {
            Value::Integer(_) => DataKind::Integer,
            Value::Boolean(_) => DataKind::Boolean,
            Value::Float(_) => DataKind::Float,
            Value::Color2(_) => DataKind::Color2,
            Value::Color3(_) => DataKind::Color3,
            Value::Color4(_) => DataKind::Color4,
            Value::Vector2(_) => DataKind::Vector2,
            Value::Vector3(_) => DataKind::Vector3,
            Value::Vector4(_) => DataKind::Vector4,
            Value::Matrix33(_) => DataKind::Matrix33,
            Value::Matrix44(_) => DataKind::Matrix44,
            Value::String(_) => DataKind::String,
            Value::IntegerArray(_) => DataKind::IntegerArray,
            Value::BooleanArray(_) => DataKind::BooleanArray,
            Value::FloatArray(_) => DataKind::FloatArray,
            Value::StringArray(_) => DataKind::StringArray,
            Value::Long(_) => DataKind::Long,
            Value::Double(_) => DataKind::Double,
        }
    }

    /// Returns the registered type name of this value's kind.
    pub fn type_string(&self) -> &'static str {
        self.kind().type_name()
    }

    /// Returns the canonical text form of the payload.
    pub fn value_string(&self) -> String {
        self.value_string_with(&FormatOptions::default())
    }

    /// Returns the text form of the payload using `options` for floats.
    pub fn value_string_with(&self, options: &FormatOptions) -> String {
        let mut out = String::new();
        with_payload!(self, data => data.write_text(&mut out, options));
        out
    }

    /// Returns true if this value holds exactly kind `T`.
    ///
    /// Alias kinds are distinct: a `Long` value is not an `i32`, even though
    /// both report the type name `integer`.
    pub fn is_a<T: ValueData>(&self) -> bool {
        T::from_value(self).is_some()
    }

    /// Borrows the payload if this value holds kind `T`.
    pub fn get<T: ValueData>(&self) -> Option<&T> {
        T::from_value(self)
    }

    /// Returns a copy of the payload, or `WrongType` if this value does not
    /// hold kind `T`. Never converts between kinds.
    pub fn as_a<T: ValueData>(&self) -> Result<T, ValueError> {
        T::from_value(self)
            .cloned()
            .ok_or(ValueError::WrongType {
                expected: T::KIND,
                actual: self.kind(),
            })
    }

    /// Returns an independent value of the same kind with an equal payload.
    pub fn copy(&self) -> ValuePtr {
        Arc::new(self.clone())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value_string())
    }
}

/// Returns the registered type name for payload type `T`.
pub fn type_string<T: ValueData>() -> &'static str {
    T::KIND.type_name()
}

/// Formats `data` in its canonical text form.
pub fn to_value_string<T: TextCodec>(data: &T) -> String {
    data.to_text(&FormatOptions::default())
}

/// Parses `text` as `T` with default options.
pub fn from_value_string<T: TextCodec>(text: &str) -> Result<T, ParseError> {
    T::parse_text(text, &ParseOptions::default())
}
