//! Fields, methods and type parameters.

use super::{Deprecation, HasModifiers, Keyed, Modifiers, SurfaceEntity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A declared type parameter with its bounds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeParameter {
    pub name: String,
    #[serde(default)]
    pub bounds: BTreeSet<String>,
}

impl TypeParameter {
    pub fn new<I, S>(name: impl Into<String>, bounds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            bounds: bounds.into_iter().map(Into::into).collect(),
        }
    }
}

/// Compile-time constant carried by a static final field.
///
/// Floats compare by bit pattern with every NaN folded into one value, so a
/// NaN constant equals itself and `0.0` differs from `-0.0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ConstantValue {
    Bool(bool),
    Int(i64),
    Float(#[serde(with = "float_repr")] f64),
    Char(char),
    Str(String),
}

fn float_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

impl PartialEq for ConstantValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => float_bits(*a) == float_bits(*b),
            (Self::Char(a), Self::Char(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for ConstantValue {}

/// JSON has no literal for non-finite numbers: they are written as the
/// strings `"NaN"`, `"Infinity"` and `"-Infinity"`.
mod float_repr {
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if value.is_infinite() {
            serializer.serialize_str(if *value > 0.0 { "Infinity" } else { "-Infinity" })
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        deserializer.deserialize_any(FloatVisitor)
    }

    struct FloatVisitor;

    impl Visitor<'_> for FloatVisitor {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number, \"NaN\", \"Infinity\" or \"-Infinity\"")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }

        #[allow(clippy::cast_precision_loss)]
        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        #[allow(clippy::cast_precision_loss)]
        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            match v {
                "NaN" => Ok(f64::NAN),
                "Infinity" => Ok(f64::INFINITY),
                "-Infinity" => Ok(f64::NEG_INFINITY),
                other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
            }
        }
    }
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Char(v) => write!(f, "'{v}'"),
            Self::Str(v) => write!(f, "{v:?}"),
        }
    }
}

/// A field of an API type, identified by its name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(rename = "type")]
    pub declared_type: String,
    /// Only present on static final fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constant_value: Option<ConstantValue>,
    #[serde(default)]
    pub deprecation: Deprecation,
}

impl Field {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: Modifiers::public(),
            declared_type: declared_type.into(),
            constant_value: None,
            deprecation: Deprecation::None,
        }
    }

    /// A public static final field holding `value`.
    pub fn constant(
        name: impl Into<String>,
        declared_type: impl Into<String>,
        value: ConstantValue,
    ) -> Self {
        Self {
            modifiers: Modifiers::public().with_static().with_final(),
            constant_value: Some(value),
            ..Self::new(name, declared_type)
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn with_deprecation(mut self, deprecation: Deprecation) -> Self {
        self.deprecation = deprecation;
        self
    }
}

impl Keyed for Field {
    type Key = String;

    fn key(&self) -> &String {
        &self.name
    }
}

impl HasModifiers for Field {
    fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }
}

impl SurfaceEntity for Field {
    fn display_name(&self) -> String {
        format!("{} {}", self.declared_type, self.name)
    }
}

/// Identity of a method: its name and ordered parameter types.
///
/// Return type and type parameters are deliberately left out so that a
/// changed return type is a modification while a new parameter list is a new
/// overload.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MethodSignature {
    pub name: String,
    #[serde(default)]
    pub parameter_types: Vec<String>,
}

impl MethodSignature {
    pub fn new<I, S>(name: impl Into<String>, parameter_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            parameter_types: parameter_types.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.parameter_types.join(","))
    }
}

/// A method or constructor of an API type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub signature: MethodSignature,
    #[serde(default)]
    pub modifiers: Modifiers,
    pub return_type: String,
    #[serde(default)]
    pub thrown_types: BTreeSet<String>,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
    #[serde(default)]
    pub deprecation: Deprecation,
}

impl Method {
    pub fn new<I, S>(name: impl Into<String>, parameter_types: I, return_type: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            signature: MethodSignature::new(name, parameter_types),
            modifiers: Modifiers::public(),
            return_type: return_type.into(),
            thrown_types: BTreeSet::new(),
            type_parameters: Vec::new(),
            deprecation: Deprecation::None,
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn with_thrown(mut self, error_type: impl Into<String>) -> Self {
        self.thrown_types.insert(error_type.into());
        self
    }

    #[must_use]
    pub fn with_type_parameter(mut self, parameter: TypeParameter) -> Self {
        self.type_parameters.push(parameter);
        self
    }

    #[must_use]
    pub fn with_deprecation(mut self, deprecation: Deprecation) -> Self {
        self.deprecation = deprecation;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.signature.name
    }
}

impl Keyed for Method {
    type Key = MethodSignature;

    fn key(&self) -> &MethodSignature {
        &self.signature
    }
}

impl HasModifiers for Method {
    fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }
}

impl SurfaceEntity for Method {
    fn display_name(&self) -> String {
        self.signature.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_identity_ignores_return_type() {
        let a = Method::new("resize", ["int"], "void");
        let b = Method::new("resize", ["int"], "boolean");
        assert_eq!(a.key(), b.key());

        let overload = Method::new("resize", ["int", "int"], "void");
        assert_ne!(a.key(), overload.key());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Method::new("resize", ["int", "int"], "void").display_name(), "resize(int,int)");
        assert_eq!(Method::new("close", Vec::<String>::new(), "void").display_name(), "close()");
        assert_eq!(Field::new("MAX_SIZE", "int").display_name(), "int MAX_SIZE");
    }

    #[test]
    fn test_constant_field_is_static_final() {
        let field = Field::constant("MAX_SIZE", "int", ConstantValue::Int(10));
        assert!(field.modifiers.is_static);
        assert!(field.modifiers.is_final);
        assert_eq!(field.constant_value, Some(ConstantValue::Int(10)));
    }

    #[test]
    fn test_constant_value_serde() {
        let json = serde_json::to_value(ConstantValue::Str("x".into())).unwrap();
        assert_eq!(json["kind"], "str");
        assert_eq!(json["value"], "x");
        let back: ConstantValue = serde_json::from_value(json).unwrap();
        assert_eq!(back, ConstantValue::Str("x".into()));
    }

    #[test]
    fn test_float_constants_compare_by_bits() {
        assert_eq!(ConstantValue::Float(f64::NAN), ConstantValue::Float(f64::NAN));
        assert_eq!(ConstantValue::Float(f64::NAN), ConstantValue::Float(-f64::NAN));
        assert_ne!(ConstantValue::Float(0.0), ConstantValue::Float(-0.0));
        assert_ne!(ConstantValue::Float(1.0), ConstantValue::Int(1));
    }

    #[test]
    fn test_non_finite_floats_serde() {
        for (value, text) in [
            (f64::NAN, "NaN"),
            (f64::INFINITY, "Infinity"),
            (f64::NEG_INFINITY, "-Infinity"),
        ] {
            let json = serde_json::to_value(ConstantValue::Float(value)).unwrap();
            assert_eq!(json["value"], text);
            let back: ConstantValue = serde_json::from_value(json).unwrap();
            assert_eq!(back, ConstantValue::Float(value));
        }

        let text = serde_json::to_string(&ConstantValue::Float(-0.0)).unwrap();
        let back: ConstantValue = serde_json::from_str(&text).unwrap();
        assert_eq!(back, ConstantValue::Float(-0.0));

        let bad = serde_json::from_str::<ConstantValue>(r#"{"kind": "float", "value": "inf"}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_type_parameter_bounds_are_a_set() {
        let a = TypeParameter::new("T", ["Comparable", "Serializable"]);
        let b = TypeParameter::new("T", ["Serializable", "Comparable"]);
        assert_eq!(a, b);
    }
}
