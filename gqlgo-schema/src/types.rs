//! Schema type definitions.
//!
//! This module contains the data structures representing a GraphQL
//! introspection document: types, fields, kinds and wrapper chains.
//!
//! Types refer to one another by name only, the way introspection documents
//! do. A field of type `User` holds a `{ kind: OBJECT, name: "User" }`
//! reference, never the full `User` definition, so self-referential schemas
//! are plain data.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Complete introspected schema (`__schema`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// All types, in document order.
    #[serde(default)]
    pub types: Vec<SchemaType>,
    /// Root query type.
    #[serde(default)]
    pub query_type: Option<RootType>,
    /// Root mutation type.
    #[serde(default)]
    pub mutation_type: Option<RootType>,
    /// Root subscription type.
    #[serde(default)]
    pub subscription_type: Option<RootType>,
}

impl Schema {
    /// Creates a schema from a list of types.
    #[must_use]
    pub fn new(types: Vec<SchemaType>) -> Self {
        Self {
            types,
            ..Self::default()
        }
    }
}

/// Reference to a root operation type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootType {
    /// Name of the root type.
    pub name: String,
}

/// Kind of a schema type node (`__TypeKind`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Leaf value.
    Scalar,
    /// Object with fields.
    Object,
    /// Abstract type with fields.
    Interface,
    /// Abstract type without fields.
    Union,
    /// Enumeration.
    Enum,
    /// Input object.
    InputObject,
    /// List wrapper.
    List,
    /// Non-null wrapper.
    NonNull,
    /// A kind this crate does not know about.
    Other(String),
}

impl TypeKind {
    /// Returns the introspection spelling of the kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Scalar => "SCALAR",
            Self::Object => "OBJECT",
            Self::Interface => "INTERFACE",
            Self::Union => "UNION",
            Self::Enum => "ENUM",
            Self::InputObject => "INPUT_OBJECT",
            Self::List => "LIST",
            Self::NonNull => "NON_NULL",
            Self::Other(s) => s,
        }
    }

    /// Parses a kind from its introspection spelling.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "SCALAR" => Self::Scalar,
            "OBJECT" => Self::Object,
            "INTERFACE" => Self::Interface,
            "UNION" => Self::Union,
            "ENUM" => Self::Enum,
            "INPUT_OBJECT" => Self::InputObject,
            "LIST" => Self::List,
            "NON_NULL" => Self::NonNull,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns true for `LIST` and `NON_NULL`.
    #[must_use]
    pub const fn is_wrapper(&self) -> bool {
        matches!(self, Self::List | Self::NonNull)
    }

    /// Returns true for interfaces and unions.
    #[must_use]
    pub const fn is_polymorphic(&self) -> bool {
        matches!(self, Self::Interface | Self::Union)
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TypeKind {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TypeKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

/// One node of the introspected type graph (`__Type`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaType {
    /// Kind of the node.
    pub kind: TypeKind,
    /// Name; unset for wrappers.
    #[serde(default)]
    pub name: Option<String>,
    /// Documentation.
    #[serde(default)]
    pub description: Option<String>,
    /// Fields of objects and interfaces.
    #[serde(default)]
    pub fields: Option<Vec<Field>>,
    /// Interfaces implemented by an object.
    #[serde(default)]
    pub interfaces: Option<Vec<SchemaType>>,
    /// Concrete variants of an interface or union.
    #[serde(default)]
    pub possible_types: Option<Vec<SchemaType>>,
    /// Values of an enum.
    #[serde(default)]
    pub enum_values: Option<Vec<EnumValue>>,
    /// Wrapped type of a list or non-null wrapper.
    #[serde(default)]
    pub of_type: Option<Box<SchemaType>>,
}

impl SchemaType {
    /// Creates a bare type node.
    #[must_use]
    pub fn new(kind: TypeKind, name: Option<String>) -> Self {
        Self {
            kind,
            name,
            description: None,
            fields: None,
            interfaces: None,
            possible_types: None,
            enum_values: None,
            of_type: None,
        }
    }

    /// Creates a named type reference.
    #[must_use]
    pub fn named(kind: TypeKind, name: impl Into<String>) -> Self {
        Self::new(kind, Some(name.into()))
    }

    /// Wraps a type in `NON_NULL`.
    #[must_use]
    pub fn non_null(of: SchemaType) -> Self {
        Self {
            of_type: Some(Box::new(of)),
            ..Self::new(TypeKind::NonNull, None)
        }
    }

    /// Wraps a type in `LIST`.
    #[must_use]
    pub fn list(of: SchemaType) -> Self {
        Self {
            of_type: Some(Box::new(of)),
            ..Self::new(TypeKind::List, None)
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the fields.
    #[must_use]
    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = Some(fields);
        self
    }

    /// Sets the possible types.
    #[must_use]
    pub fn with_possible_types(mut self, possible_types: Vec<SchemaType>) -> Self {
        self.possible_types = Some(possible_types);
        self
    }

    /// Sets the enum values.
    #[must_use]
    pub fn with_enum_values(mut self, enum_values: Vec<EnumValue>) -> Self {
        self.enum_values = Some(enum_values);
        self
    }

    /// Returns the name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the fields, empty when absent.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        self.fields.as_deref().unwrap_or_default()
    }

    /// Returns the possible types, empty when absent.
    #[must_use]
    pub fn possible_types(&self) -> &[SchemaType] {
        self.possible_types.as_deref().unwrap_or_default()
    }

    /// Returns the enum values, empty when absent.
    #[must_use]
    pub fn enum_values(&self) -> &[EnumValue] {
        self.enum_values.as_deref().unwrap_or_default()
    }

    /// Returns the wrapped type.
    #[must_use]
    pub fn of_type(&self) -> Option<&SchemaType> {
        self.of_type.as_deref()
    }

    /// Follows the wrapper chain down to the innermost node.
    ///
    /// Stops early at a wrapper with no `ofType`, which validation rejects.
    #[must_use]
    pub fn innermost(&self) -> &SchemaType {
        let mut ty = self;
        while let (true, Some(of)) = (ty.kind.is_wrapper(), ty.of_type()) {
            ty = of;
        }
        ty
    }
}

/// Field of an object or interface (`__Field`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Field name as it appears on the wire.
    pub name: String,
    /// Documentation.
    #[serde(default)]
    pub description: Option<String>,
    /// Field type.
    #[serde(rename = "type")]
    pub ty: SchemaType,
    /// Whether the field is deprecated.
    #[serde(default)]
    pub is_deprecated: bool,
    /// Deprecation reason.
    #[serde(default)]
    pub deprecation_reason: Option<String>,
}

impl Field {
    /// Creates a new field.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: SchemaType) -> Self {
        Self {
            name: name.into(),
            description: None,
            ty,
            is_deprecated: false,
            deprecation_reason: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the field deprecated.
    #[must_use]
    pub fn deprecated(mut self, reason: Option<&str>) -> Self {
        self.is_deprecated = true;
        self.deprecation_reason = reason.map(str::to_string);
        self
    }
}

/// Value of an enum (`__EnumValue`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    /// Value name.
    pub name: String,
    /// Documentation.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the value is deprecated.
    #[serde(default)]
    pub is_deprecated: bool,
    /// Deprecation reason.
    #[serde(default)]
    pub deprecation_reason: Option<String>,
}

impl EnumValue {
    /// Creates a new enum value.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            is_deprecated: false,
            deprecation_reason: None,
        }
    }
}
