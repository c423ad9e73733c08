//! Type-name registry for reconstructing values from text.
//!
//! A registry maps type-name strings to factories that build a value from
//! its text form. The first factory registered under a name owns it; later
//! registrations under the same name are ignored. Builtin kinds register in
//! [`DataKind::REGISTRATION_ORDER`], which places each primary kind ahead of
//! the alias that shares its name.
//!
//! The default registry is built on first use and is read-only afterwards,
//! so lookups from multiple threads need no locking.

use std::collections::hash_map::Entry;

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::codec::ParseOptions;
use crate::model::{
    Color2, Color3, Color4, DataKind, Matrix33, Matrix44, Value, ValuePtr, Vector2, Vector3,
    Vector4,
};

/// Factory building a value from text. Returns `None` if the text is not
/// valid for the factory's kind.
pub type Creator = fn(&str, &ParseOptions) -> Option<ValuePtr>;

/// Mapping from type name to value factory.
#[derive(Debug, Clone, Default)]
pub struct ValueRegistry {
    creators: FxHashMap<String, Creator>,
    /// Options handed to every factory.
    options: ParseOptions,
}

impl ValueRegistry {
    /// Creates an empty registry with default parse options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry populated with every builtin kind.
    pub fn builtin() -> Self {
        Self::with_options(ParseOptions::default())
    }

    /// Creates a registry populated with every builtin kind, parsing with
    /// `options`.
    pub fn with_options(options: ParseOptions) -> Self {
        let mut registry = Self {
            creators: FxHashMap::default(),
            options,
        };
        for kind in DataKind::REGISTRATION_ORDER {
            registry.register_kind(kind);
        }
        debug!(
            type_names = registry.len(),
            kinds = DataKind::REGISTRATION_ORDER.len(),
            "registered builtin value kinds"
        );
        registry
    }

    /// Registers `creator` under `type_name`.
    ///
    /// Returns false and leaves the registry unchanged if the name already
    /// has a factory.
    pub fn register(&mut self, type_name: &str, creator: Creator) -> bool {
        match self.creators.entry(type_name.to_string()) {
            Entry::Occupied(_) => {
                trace!(type_name, "type name already registered, keeping first factory");
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(creator);
                true
            }
        }
    }

    /// Registers the builtin factory for `kind` under its type name.
    pub fn register_kind(&mut self, kind: DataKind) -> bool {
        self.register(kind.type_name(), builtin_creator(kind))
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.creators.contains_key(type_name)
    }

    /// Number of registered type names.
    pub fn len(&self) -> usize {
        self.creators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creators.is_empty()
    }

    /// Iterates registered type names in no particular order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.creators.keys().map(String::as_str)
    }

    /// Reconstructs a value from its text and type name.
    ///
    /// Lookup is exact and case-sensitive. An unknown type name yields a
    /// string value holding `value` verbatim. `None` is returned only when
    /// the name is registered and its factory rejects `value`.
    pub fn create(&self, value: &str, type_name: &str) -> Option<ValuePtr> {
        match self.creators.get(type_name) {
            Some(creator) => creator(value, &self.options),
            None => {
                debug!(type_name, "unknown type name, storing value as string");
                Some(Value::create_value(value.to_string()))
            }
        }
    }
}

/// Returns the text factory for a builtin kind.
pub fn builtin_creator(kind: DataKind) -> Creator {
    match kind {
        DataKind::Integer => Value::create_from_string_with::<i32>,
        DataKind::Boolean => Value::create_from_string_with::<bool>,
        DataKind::Float => Value::create_from_string_with::<f32>,
        DataKind::Color2 => Value::create_from_string_with::<Color2>,
        DataKind::Color3 => Value::create_from_string_with::<Color3>,
        DataKind::Color4 => Value::create_from_string_with::<Color4>,
        DataKind::Vector2 => Value::create_from_string_with::<Vector2>,
        DataKind::Vector3 => Value::create_from_string_with::<Vector3>,
        DataKind::Vector4 => Value::create_from_string_with::<Vector4>,
        DataKind::Matrix33 => Value::create_from_string_with::<Matrix33>,
        DataKind::Matrix44 => Value::create_from_string_with::<Matrix44>,
        DataKind::String => Value::create_from_string_with::<String>,
        DataKind::IntegerArray => Value::create_from_string_with::<Vec<i32>>,
        DataKind::BooleanArray => Value::create_from_string_with::<Vec<bool>>,
        DataKind::FloatArray => Value::create_from_string_with::<Vec<f32>>,
        DataKind::StringArray => Value::create_from_string_with::<Vec<String>>,
        DataKind::Long => Value::create_from_string_with::<i64>,
        DataKind::Double => Value::create_from_string_with::<f64>,
    }
}

lazy_static! {
    static ref DEFAULT_REGISTRY: ValueRegistry = ValueRegistry::builtin();
}

/// Returns the process-wide registry of builtin kinds.
pub fn default_registry() -> &'static ValueRegistry {
    &DEFAULT_REGISTRY
}

/// Reconstructs a value from its text and type name using the default
/// registry. See [`ValueRegistry::create`].
pub fn create_value_from_strings(value: &str, type_name: &str) -> Option<ValuePtr> {
    DEFAULT_REGISTRY.create(value, type_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_dispatch() {
        let v = create_value_from_strings("5", "integer").unwrap();
        assert_eq!(v.type_string(), "integer");
        assert_eq!(v.as_a::<i32>(), Ok(5));

        let v = create_value_from_strings("0.5, 0.5, 1", "color3").unwrap();
        assert_eq!(v.as_a::<Color3>(), Ok(Color3([0.5, 0.5, 1.0])));
    }

    #[test]
    fn test_unknown_type_falls_back_to_string() {
        let v = create_value_from_strings("hello", "bogus_type").unwrap();
        assert_eq!(v.type_string(), "string");
        assert_eq!(v.value_string(), "hello");

        // No case folding.
        let v = create_value_from_strings("5", "Integer").unwrap();
        assert_eq!(v.kind(), DataKind::String);
        assert_eq!(v.value_string(), "5");
    }

    #[test]
    fn test_invalid_literal_yields_none() {
        assert!(create_value_from_strings("1,2", "vector3").is_none());
        assert!(create_value_from_strings("1", "boolean").is_none());
        assert!(create_value_from_strings("abc", "float").is_none());
        assert!(create_value_from_strings("1,2,3", "vector3").is_some());
    }

    #[test]
    fn test_out_of_range_float_yields_none() {
        assert!(create_value_from_strings("1e39", "float").is_none());
        assert!(create_value_from_strings("1e39, 0, 0", "color3").is_none());
        assert!(create_value_from_strings("0.5, 1e39", "floatarray").is_none());
        assert!(create_value_from_strings("99999999999", "integer").is_none());

        let v = create_value_from_strings("inf, 0, 0", "color3").unwrap();
        assert_eq!(v.as_a::<Color3>(), Ok(Color3([f32::INFINITY, 0.0, 0.0])));
        assert!(create_value_from_strings("infinity", "float").is_none());
    }

    #[test]
    fn test_empty_array_literal() {
        let v = create_value_from_strings("", "floatarray").unwrap();
        assert_eq!(v.as_a::<Vec<f32>>(), Ok(Vec::new()));
    }

    #[test]
    fn test_builtin_names() {
        let registry = default_registry();
        assert_eq!(registry.len(), 16);
        let mut names: Vec<&str> = registry.type_names().collect();
        names.sort_unstable();
        assert_eq!(
            names,
            vec![
                "boolean", "booleanarray", "color2", "color3", "color4", "float",
                "floatarray", "integer", "integerarray", "matrix33", "matrix44", "string",
                "stringarray", "vector2", "vector3", "vector4",
            ]
        );
    }

    #[test]
    fn test_alias_precedence() {
        // Builtin order registers the primary kinds first.
        let v = default_registry().create("5", "integer").unwrap();
        assert_eq!(v.kind(), DataKind::Integer);
        let v = default_registry().create("1.5", "float").unwrap();
        assert_eq!(v.kind(), DataKind::Float);

        let mut registry = ValueRegistry::new();
        assert!(registry.register_kind(DataKind::Integer));
        assert!(!registry.register_kind(DataKind::Long));
        assert_eq!(registry.create("5", "integer").unwrap().kind(), DataKind::Integer);

        // First writer wins, whichever kind it is.
        let mut reversed = ValueRegistry::new();
        assert!(reversed.register_kind(DataKind::Long));
        assert!(!reversed.register_kind(DataKind::Integer));
        assert_eq!(reversed.create("5", "integer").unwrap().kind(), DataKind::Long);
    }

    #[test]
    fn test_custom_registration() {
        fn filename(text: &str, _options: &ParseOptions) -> Option<ValuePtr> {
            (!text.is_empty()).then(|| Value::create_value(text.to_string()))
        }

        let mut registry = ValueRegistry::builtin();
        assert!(registry.register("filename", filename));
        assert!(!registry.register("filename", builtin_creator(DataKind::Integer)));
        assert!(!registry.register("integer", filename));
        assert!(registry.contains("filename"));

        assert_eq!(
            registry.create("tex.png", "filename").unwrap().value_string(),
            "tex.png"
        );
        assert!(registry.create("", "filename").is_none());
        assert_eq!(registry.create("7", "integer").unwrap().as_a::<i32>(), Ok(7));
    }

    #[test]
    fn test_registry_options() {
        let strict = ValueRegistry::with_options(ParseOptions::strict());
        assert!(strict.create("5abc", "integer").is_none());
        assert!(strict.create("1, 2px", "vector2").is_none());
        assert_eq!(strict.create("5", "integer").unwrap().as_a::<i32>(), Ok(5));

        let lenient = ValueRegistry::builtin();
        assert_eq!(lenient.create("5abc", "integer").unwrap().as_a::<i32>(), Ok(5));
    }

    #[test]
    fn test_reconstruct_roundtrip() {
        let values = vec![
            Value::create_value(-12i32),
            Value::create_value(false),
            Value::create_value(0.75f32),
            Value::create_value(Color2([0.5, 1.0])),
            Value::create_value(Color4([0.1, 0.2, 0.3, 1.0])),
            Value::create_value(Vector3([1.0, -2.5, 3.0])),
            Value::create_value(Vector4([0.0, 0.0, 0.0, 1.0])),
            Value::create_value(Matrix33::IDENTITY),
            Value::create_value(Matrix44::IDENTITY),
            Value::create_value("plain".to_string()),
            Value::create_value(vec![4i32, 5, -6]),
            Value::create_value(vec![true, true, false]),
            Value::create_value(vec![0.5f32, 1.25]),
            Value::create_value(vec!["x".to_string(), "y".to_string()]),
        ];
        for value in values {
            let rebuilt = create_value_from_strings(&value.value_string(), value.type_string())
                .unwrap_or_else(|| panic!("failed to rebuild {value:?}"));
            assert_eq!(*rebuilt, *value);
        }
    }

    #[test]
    fn test_concurrent_lookups() {
        std::thread::scope(|scope| {
            for i in 0..4 {
                scope.spawn(move || {
                    for j in 0..100 {
                        let text = (i * 100 + j).to_string();
                        let v = create_value_from_strings(&text, "integer").unwrap();
                        assert_eq!(v.as_a::<i32>(), Ok(i * 100 + j));
                    }
                });
            }
        });
    }
}
