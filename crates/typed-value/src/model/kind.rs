//! The closed set of data kinds a value can hold.

/// Registered type-name literals.
///
/// These strings are persisted in documents and must stay stable.
pub mod type_names {
    pub const INTEGER: &str = "integer";
    pub const BOOLEAN: &str = "boolean";
    pub const FLOAT: &str = "float";
    pub const COLOR2: &str = "color2";
    pub const COLOR3: &str = "color3";
    pub const COLOR4: &str = "color4";
    pub const VECTOR2: &str = "vector2";
    pub const VECTOR3: &str = "vector3";
    pub const VECTOR4: &str = "vector4";
    pub const MATRIX33: &str = "matrix33";
    pub const MATRIX44: &str = "matrix44";
    pub const STRING: &str = "string";
    pub const INTEGER_ARRAY: &str = "integerarray";
    pub const BOOLEAN_ARRAY: &str = "booleanarray";
    pub const FLOAT_ARRAY: &str = "floatarray";
    pub const STRING_ARRAY: &str = "stringarray";
}

/// Tag identifying the concrete kind of a [`Value`](crate::Value).
///
/// `Long` and `Double` are alias kinds: they report the type names of
/// `Integer` and `Float` but hold 64-bit payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataKind {
    Integer,
    Boolean,
    Float,
    Color2,
    Color3,
    Color4,
    Vector2,
    Vector3,
    Vector4,
    Matrix33,
    Matrix44,
    String,
    IntegerArray,
    BooleanArray,
    FloatArray,
    StringArray,
    Long,
    Double,
}

impl DataKind {
    /// Order in which kinds claim their type names in a registry.
    ///
    /// The first kind registered under a name owns it, so every primary kind
    /// comes before the alias that shares its name.
    pub const REGISTRATION_ORDER: [DataKind; 18] = [
        DataKind::Integer,
        DataKind::Boolean,
        DataKind::Float,
        DataKind::Color2,
        DataKind::Color3,
        DataKind::Color4,
        DataKind::Vector2,
        DataKind::Vector3,
        DataKind::Vector4,
        DataKind::Matrix33,
        DataKind::Matrix44,
        DataKind::String,
        DataKind::IntegerArray,
        DataKind::BooleanArray,
        DataKind::FloatArray,
        DataKind::StringArray,
        DataKind::Long,
        DataKind::Double,
    ];

    /// Returns the registered type name for this kind.
    pub fn type_name(self) -> &'static str {
        match self {
            DataKind::Integer | DataKind::Long => type_names::INTEGER,
            DataKind::Boolean => type_names::BOOLEAN,
            DataKind::Float | DataKind::Double => type_names::FLOAT,
            DataKind::Color2 => type_names::COLOR2,
            DataKind::Color3 => type_names::COLOR3,
            DataKind::Color4 => type_names::COLOR4,
            DataKind::Vector2 => type_names::VECTOR2,
            DataKind::Vector3 => type_names::VECTOR3,
            DataKind::Vector4 => type_names::VECTOR4,
            DataKind::Matrix33 => type_names::MATRIX33,
            DataKind::Matrix44 => type_names::MATRIX44,
            DataKind::String => type_names::STRING,
            DataKind::IntegerArray => type_names::INTEGER_ARRAY,
            DataKind::BooleanArray => type_names::BOOLEAN_ARRAY,
            DataKind::FloatArray => type_names::FLOAT_ARRAY,
            DataKind::StringArray => type_names::STRING_ARRAY,
        }
    }

    /// Returns the primary kind this kind aliases, if any.
    pub fn alias_of(self) -> Option<DataKind> {
        match self {
            DataKind::Long => Some(DataKind::Integer),
            DataKind::Double => Some(DataKind::Float),
            _ => None,
        }
    }

    pub fn is_alias(self) -> bool {
        self.alias_of().is_some()
    }
}

impl std::fmt::Display for DataKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}
