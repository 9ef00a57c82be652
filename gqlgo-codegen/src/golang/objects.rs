//! Object struct generation.
//!
//! Every object becomes a struct with exported, `json`-tagged fields, one
//! `Get<Field>` accessor per field, and an `UnmarshalJSON` method. The
//! accessors are the contract interfaces are built on, so a stored field can
//! later be replaced by a computed one without breaking callers.

use super::Rendered;
use super::comment::{COMMENT, render_doc};
use super::decode::{JSON_IMPORT, decode_statements};
use crate::error::Result;
use crate::resolver::{
    declared_name, field_ident, field_imports, is_polymorphic_field, resolve_field_type,
};
use gqlgo_schema::{Config, Field, SchemaType};

/// Returns the accessor method name for an exposed field identifier.
#[must_use]
pub fn accessor_name(ident: &str) -> String {
    format!("Get{ident}")
}

/// A field with everything the templates need resolved up front.
struct ResolvedField<'f> {
    field: &'f Field,
    ident: String,
    go_type: String,
    polymorphic: bool,
}

/// Generator for object structs.
pub struct ObjectGenerator<'a> {
    config: &'a Config,
}

impl<'a> ObjectGenerator<'a> {
    /// Creates a new object generator.
    #[must_use]
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Generates the struct, its accessors and its JSON decoder.
    ///
    /// # Errors
    /// Returns `CodegenError` if a field type cannot be resolved.
    pub fn generate(&self, ty: &SchemaType) -> Result<Rendered> {
        let name = declared_name(self.config, ty)?;
        let fields = ty
            .fields()
            .iter()
            .map(|field| self.resolve_field(ty, field))
            .collect::<Result<Vec<_>>>()?;

        let mut output = self.generate_struct(ty, &name, &fields);
        for field in &fields {
            output.push('\n');
            output.push_str(&self.generate_accessor(&name, field));
        }
        output.push('\n');
        output.push_str(&self.generate_unmarshal(&name, &fields)?);

        let mut rendered = Rendered::new(output);
        rendered.add_import(JSON_IMPORT);
        for field in ty.fields() {
            rendered.add_imports(field_imports(self.config, ty, field));
        }
        Ok(rendered)
    }

    fn resolve_field<'f>(&self, parent: &SchemaType, field: &'f Field) -> Result<ResolvedField<'f>> {
        Ok(ResolvedField {
            field,
            ident: field_ident(self.config, parent, field),
            go_type: resolve_field_type(self.config, parent, field)?,
            polymorphic: is_polymorphic_field(self.config, parent, field),
        })
    }

    /// Generates the struct declaration.
    fn generate_struct(&self, ty: &SchemaType, name: &str, fields: &[ResolvedField<'_>]) -> String {
        let mut output = render_doc(COMMENT, ty.description.as_deref(), false, None);

        if fields.is_empty() {
            output.push_str(&format!("type {} struct{{}}\n", name));
            return output;
        }

        output.push_str(&format!("type {} struct {{\n", name));
        for (field_no, resolved) in fields.iter().enumerate() {
            if field_no != 0 {
                output.push('\n');
            }
            let field = resolved.field;
            output.push_str(&render_doc(
                "\t// ",
                field.description.as_deref(),
                field.is_deprecated,
                field.deprecation_reason.as_deref(),
            ));
            output.push_str(&format!(
                "\t{} {} `json:\"{}\"`\n",
                resolved.ident, resolved.go_type, field.name
            ));
        }
        output.push_str("}\n");
        output
    }

    /// Generates the accessor of one field.
    fn generate_accessor(&self, name: &str, resolved: &ResolvedField<'_>) -> String {
        let accessor = accessor_name(&resolved.ident);
        let mut output = String::new();

        output.push_str(&format!(
            "// {} returns the value of the {} field.\n",
            accessor, resolved.field.name
        ));
        output.push_str(&format!(
            "func (v {}) {}() {} {{\n",
            name, accessor, resolved.go_type
        ));
        output.push_str(&format!("\treturn v.{}\n", resolved.ident));
        output.push_str("}\n");
        output
    }

    /// Generates `UnmarshalJSON`.
    ///
    /// The payload is decoded into an anonymous shadow struct first; fields
    /// of interface or union type are held there as raw JSON and passed
    /// through their decode functions, everything else is copied across.
    fn generate_unmarshal(&self, name: &str, fields: &[ResolvedField<'_>]) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!(
            "// UnmarshalJSON decodes a {} payload, resolving polymorphic fields by\n\
             // their __typename.\n",
            name
        ));
        output.push_str(&format!(
            "func (v *{}) UnmarshalJSON(data []byte) error {{\n",
            name
        ));

        if fields.is_empty() {
            output.push_str("\tvar shadow struct{}\n");
        } else {
            output.push_str("\tvar shadow struct {\n");
            for resolved in fields {
                let shadow_type = if resolved.polymorphic {
                    "json.RawMessage"
                } else {
                    resolved.go_type.as_str()
                };
                output.push_str(&format!(
                    "\t\t{} {} `json:\"{}\"`\n",
                    resolved.ident, shadow_type, resolved.field.name
                ));
            }
            output.push_str("\t}\n");
        }

        output.push_str("\tif err := json.Unmarshal(data, &shadow); err != nil {\n");
        output.push_str("\t\treturn err\n");
        output.push_str("\t}\n");

        for resolved in fields.iter().filter(|f| !f.polymorphic) {
            output.push_str(&format!(
                "\tv.{} = shadow.{}\n",
                resolved.ident, resolved.ident
            ));
        }

        for resolved in fields.iter().filter(|f| f.polymorphic) {
            output.push_str(&decode_statements(
                self.config,
                &resolved.field.ty,
                true,
                &format!("shadow.{}", resolved.ident),
                &format!("v.{}", resolved.ident),
                1,
                0,
            )?);
        }

        output.push_str("\treturn nil\n");
        output.push_str("}\n");
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gqlgo_schema::{FieldConfig, ScalarConfig, TypeConfig, TypeKind};

    fn scalar(name: &str) -> SchemaType {
        SchemaType::named(TypeKind::Scalar, name)
    }

    fn user() -> SchemaType {
        SchemaType::named(TypeKind::Object, "User")
            .with_description("A user account.")
            .with_fields(vec![
                Field::new("login", SchemaType::non_null(scalar("String")))
                    .with_description("The username."),
                Field::new("company", scalar("String")),
                Field::new("databaseId", scalar("Int")).deprecated(Some("Use `id`.")),
            ])
    }

    #[test]
    fn test_generate_struct() {
        let config = Config::new();
        let rendered = ObjectGenerator::new(&config)
            .generate(&user())
            .expect("Failed to render");

        assert!(rendered.chunk.starts_with(
            "// A user account.\n\
             type User struct {\n\
             \t// The username.\n\
             \tLogin string `json:\"login\"`\n\
             \n\
             \tCompany *string `json:\"company\"`\n\
             \n\
             \t// Deprecated: Use `id`.\n\
             \tDatabaseId *int32 `json:\"databaseId\"`\n\
             }\n"
        ));
        assert_eq!(rendered.imports, vec!["encoding/json"]);
    }

    #[test]
    fn test_generate_accessors() {
        let config = Config::new();
        let chunk = ObjectGenerator::new(&config)
            .generate(&user())
            .expect("Failed to render")
            .chunk;

        assert!(chunk.contains(
            "// GetLogin returns the value of the login field.\n\
             func (v User) GetLogin() string {\n\
             \treturn v.Login\n\
             }\n"
        ));
        assert!(chunk.contains("func (v User) GetCompany() *string {\n"));
        assert!(chunk.contains("func (v User) GetDatabaseId() *int32 {\n"));
    }

    #[test]
    fn test_plain_fields_decode_directly() {
        let config = Config::new();
        let chunk = ObjectGenerator::new(&config)
            .generate(&user())
            .expect("Failed to render")
            .chunk;

        // Encoding uses the struct tags; decoding reads the same tags and
        // copies every field back.
        assert!(chunk.contains("func (v *User) UnmarshalJSON(data []byte) error {\n"));
        assert!(chunk.contains("\t\tLogin string `json:\"login\"`\n"));
        assert!(chunk.contains("\t\tCompany *string `json:\"company\"`\n"));
        assert!(chunk.contains("\t\tDatabaseId *int32 `json:\"databaseId\"`\n"));
        assert!(chunk.contains("\tv.Login = shadow.Login\n"));
        assert!(chunk.contains("\tv.Company = shadow.Company\n"));
        assert!(chunk.contains("\tv.DatabaseId = shadow.DatabaseId\n"));
        assert!(!chunk.contains("json.RawMessage"));
        assert!(chunk.ends_with("\treturn nil\n}\n"));
    }

    #[test]
    fn test_interface_fields_go_through_decoder() {
        let config = Config::new();
        let issue = SchemaType::named(TypeKind::Object, "Issue").with_fields(vec![
            Field::new("title", SchemaType::non_null(scalar("String"))),
            Field::new("author", SchemaType::named(TypeKind::Interface, "Actor")),
        ]);

        let chunk = ObjectGenerator::new(&config)
            .generate(&issue)
            .expect("Failed to render")
            .chunk;

        assert!(chunk.contains("\tAuthor Actor `json:\"author\"`\n"));
        assert!(chunk.contains("\t\tAuthor json.RawMessage `json:\"author\"`\n"));
        assert!(chunk.contains("\tv.Title = shadow.Title\n"));
        assert!(!chunk.contains("v.Author = shadow.Author"));
        assert!(chunk.contains("\t\tvalue0, err := DecodeActor(shadow.Author)\n"));
        assert!(chunk.contains("\t\tv.Author = value0\n"));
    }

    #[test]
    fn test_self_referential_object() {
        let config = Config::new();
        let user = SchemaType::named(TypeKind::Object, "User").with_fields(vec![
            Field::new("manager", SchemaType::named(TypeKind::Object, "User")),
            Field::new(
                "reports",
                SchemaType::non_null(SchemaType::list(SchemaType::non_null(
                    SchemaType::named(TypeKind::Object, "User"),
                ))),
            ),
        ]);

        let chunk = ObjectGenerator::new(&config)
            .generate(&user)
            .expect("Failed to render")
            .chunk;

        assert!(chunk.contains("\tManager *User `json:\"manager\"`\n"));
        assert!(chunk.contains("\tReports []User `json:\"reports\"`\n"));
    }

    #[test]
    fn test_field_overrides_and_imports() {
        let mut issue_config = TypeConfig::default();
        issue_config.fields.insert(
            "createdAt".to_string(),
            FieldConfig {
                name: Some("Created".to_string()),
                import: Some("time".to_string()),
                r#type: Some("time.Time".to_string()),
            },
        );
        let config = Config::new()
            .with_type("Issue", issue_config)
            .with_scalar(
                "Decimal",
                ScalarConfig {
                    name: Some("decimal.Decimal".to_string()),
                    import: Some("github.com/shopspring/decimal".to_string()),
                    ..ScalarConfig::default()
                },
            );
        let issue = SchemaType::named(TypeKind::Object, "Issue").with_fields(vec![
            Field::new("createdAt", scalar("DateTime")),
            Field::new("price", scalar("Decimal")),
            Field::new("cost", scalar("Decimal")),
        ]);

        let rendered = ObjectGenerator::new(&config)
            .generate(&issue)
            .expect("Failed to render");

        assert!(rendered.chunk.contains("\tCreated time.Time `json:\"createdAt\"`\n"));
        assert!(rendered.chunk.contains("func (v Issue) GetCreated() time.Time {\n"));
        assert!(rendered.chunk.contains("\tPrice *decimal.Decimal `json:\"price\"`\n"));
        assert_eq!(
            rendered.imports,
            vec!["encoding/json", "time", "github.com/shopspring/decimal"]
        );
    }

    #[test]
    fn test_object_without_fields() {
        let config = Config::new();
        let ty = SchemaType::named(TypeKind::Object, "Empty");
        let chunk = ObjectGenerator::new(&config)
            .generate(&ty)
            .expect("Failed to render")
            .chunk;

        assert!(chunk.starts_with("type Empty struct{}\n"));
        assert!(chunk.contains("\tvar shadow struct{}\n"));
    }

    #[test]
    fn test_accessor_name() {
        assert_eq!(accessor_name("Login"), "GetLogin");
    }
}
