//! API types (classes, interfaces, enums, annotation types).

use super::keyed_seq;
use super::{
    Deprecation, Field, HasModifiers, Keyed, Method, MethodSignature, Modifiers, SurfaceEntity,
    TypeKind, TypeParameter, Usage,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One type of the published surface, identified by its qualified name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiType {
    pub qualified_name: String,
    pub kind: TypeKind,
    #[serde(default)]
    pub modifiers: Modifiers,
    /// Transitive supertypes, excluding the universal root type
    #[serde(default)]
    pub supertypes: BTreeSet<String>,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
    #[serde(default)]
    pub deprecation: Deprecation,
    #[serde(default)]
    pub usage: Usage,
    /// Member types declared inside this one
    #[serde(default, with = "keyed_seq")]
    pub types: IndexMap<String, ApiType>,
    #[serde(default, with = "keyed_seq")]
    pub fields: IndexMap<String, Field>,
    #[serde(default, with = "keyed_seq")]
    pub methods: IndexMap<MethodSignature, Method>,
}

impl ApiType {
    /// A public type with no members and the default usage category.
    pub fn new(qualified_name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            kind,
            modifiers: Modifiers::public(),
            supertypes: BTreeSet::new(),
            type_parameters: Vec::new(),
            deprecation: Deprecation::None,
            usage: Usage::Default,
            types: IndexMap::new(),
            fields: IndexMap::new(),
            methods: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn with_usage(mut self, usage: Usage) -> Self {
        self.usage = usage;
        self
    }

    #[must_use]
    pub fn with_deprecation(mut self, deprecation: Deprecation) -> Self {
        self.deprecation = deprecation;
        self
    }

    #[must_use]
    pub fn with_supertype(mut self, name: impl Into<String>) -> Self {
        self.supertypes.insert(name.into());
        self
    }

    #[must_use]
    pub fn with_type_parameter(mut self, parameter: TypeParameter) -> Self {
        self.type_parameters.push(parameter);
        self
    }

    /// Add a field, replacing any field with the same name.
    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.insert(field.name.clone(), field);
        self
    }

    /// Add a method, replacing any method with the same signature.
    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.methods.insert(method.signature.clone(), method);
        self
    }

    /// Add a member type, replacing any member type with the same name.
    #[must_use]
    pub fn with_nested(mut self, nested: ApiType) -> Self {
        self.types.insert(nested.qualified_name.clone(), nested);
        self
    }

    /// Look up a method by name and parameter types.
    #[must_use]
    pub fn method(&self, name: &str, parameter_types: &[&str]) -> Option<&Method> {
        self.methods.get(&MethodSignature::new(name, parameter_types.iter().copied()))
    }

    /// This type followed by all of its member types, depth first.
    pub fn walk(&self) -> Box<dyn Iterator<Item = &ApiType> + '_> {
        Box::new(std::iter::once(self).chain(self.types.values().flat_map(ApiType::walk)))
    }
}

impl Keyed for ApiType {
    type Key = String;

    fn key(&self) -> &String {
        &self.qualified_name
    }
}

impl HasModifiers for ApiType {
    fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }
}

impl SurfaceEntity for ApiType {
    fn display_name(&self) -> String {
        self.qualified_name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keys_members() {
        let ty = ApiType::new("com.example.Widget", TypeKind::Interface)
            .with_field(Field::new("name", "java.lang.String"))
            .with_method(Method::new("resize", ["int"], "void"))
            .with_method(Method::new("resize", ["int", "int"], "void"));

        assert_eq!(ty.fields.len(), 1);
        assert_eq!(ty.methods.len(), 2);
        assert!(ty.method("resize", &["int", "int"]).is_some());
        assert!(ty.method("resize", &[]).is_none());
    }

    #[test]
    fn test_walk_visits_nested_types() {
        let ty = ApiType::new("a.Outer", TypeKind::Class).with_nested(
            ApiType::new("a.Outer$Inner", TypeKind::Class)
                .with_nested(ApiType::new("a.Outer$Inner$Deep", TypeKind::Enum)),
        );
        let names: Vec<_> = ty.walk().map(|t| t.qualified_name.as_str()).collect();
        assert_eq!(names, ["a.Outer", "a.Outer$Inner", "a.Outer$Inner$Deep"]);
    }

    #[test]
    fn test_serde_rejects_duplicate_method_signature() {
        let json = r#"{
            "qualified_name": "a.Widget",
            "kind": "interface",
            "methods": [
                {"signature": {"name": "f", "parameter_types": ["int"]}, "return_type": "void"},
                {"signature": {"name": "f", "parameter_types": ["int"]}, "return_type": "int"}
            ]
        }"#;
        let err = serde_json::from_str::<ApiType>(json).unwrap_err();
        assert!(err.to_string().contains("duplicate identity key"), "{err}");
    }

    #[test]
    fn test_serde_defaults() {
        let ty: ApiType =
            serde_json::from_str(r#"{"qualified_name": "a.B", "kind": "class"}"#).unwrap();
        assert_eq!(ty.usage, Usage::Default);
        assert_eq!(ty.modifiers, Modifiers::public());
        assert!(ty.fields.is_empty() && ty.methods.is_empty() && ty.types.is_empty());
    }
}
