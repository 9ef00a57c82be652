//! Polymorphic decode emission shared by the object, interface and union
//! renderers.
//!
//! Interface and union payloads are decoded in two steps: a probe struct
//! reads only the `__typename` discriminator, then the full payload is
//! decoded into the concrete struct the discriminator names. Payloads with
//! no discriminator land in an `Untyped<Name>` map.

use super::Rendered;
use crate::error::{CodegenError, Result};
use crate::resolver::{LIST_MARKER, declared_name, resolve_name, type_imports};
use gqlgo_schema::{Config, SchemaType, TypeKind};

/// JSON field carrying the concrete type name of a polymorphic payload.
pub const DISCRIMINATOR_FIELD: &str = "__typename";

/// Name of the error type returned for unknown discriminators.
pub const UNKNOWN_TYPENAME_ERROR: &str = "UnknownTypenameError";

/// Import path of the Go JSON package.
pub const JSON_IMPORT: &str = "encoding/json";

/// Returns the name of the decode function of an interface or union.
#[must_use]
pub fn decode_fn_name(type_name: &str) -> String {
    format!("Decode{type_name}")
}

/// Returns the name of the untyped fallback of an interface or union.
#[must_use]
pub fn untyped_name(type_name: &str) -> String {
    format!("Untyped{type_name}")
}

pub(crate) fn indent(level: usize) -> String {
    "\t".repeat(level)
}

/// Emits Go statements that decode the raw JSON in `raw` into `target`,
/// routing interface and union values through their decode functions.
///
/// List wrappers are decoded element by element and JSON `null` leaves the
/// target at its zero value. The statements `return err` on failure, so they
/// must be placed in a function returning `error`.
///
/// # Errors
/// Returns `CodegenError` for malformed type references.
pub(crate) fn decode_statements(
    config: &Config,
    ty: &SchemaType,
    nullable: bool,
    raw: &str,
    target: &str,
    level: usize,
    depth: usize,
) -> Result<String> {
    if !ty.innermost().kind.is_polymorphic() {
        return Ok(decode_direct(raw, target, level));
    }

    let ind = indent(level);
    let mut output = String::new();

    match &ty.kind {
        TypeKind::NonNull => {
            let of = wrapped(ty)?;
            return decode_statements(config, of, false, raw, target, level, depth);
        }
        TypeKind::List => {
            let of = wrapped(ty)?;
            let list_type = format!("{LIST_MARKER}{}", resolve_name(config, of, true)?);
            let amp = if nullable { "&" } else { "" };

            output.push_str(&format!("{ind}if {} {{\n", not_null(raw)));
            output.push_str(&format!("{ind}\tvar items{depth} []json.RawMessage\n"));
            output.push_str(&format!(
                "{ind}\tif err := json.Unmarshal({raw}, &items{depth}); err != nil {{\n"
            ));
            output.push_str(&format!("{ind}\t\treturn err\n"));
            output.push_str(&format!("{ind}\t}}\n"));
            output.push_str(&format!(
                "{ind}\tlist{depth} := make({list_type}, len(items{depth}))\n"
            ));
            output.push_str(&format!(
                "{ind}\tfor i{depth}, item{depth} := range items{depth} {{\n"
            ));
            output.push_str(&decode_statements(
                config,
                of,
                true,
                &format!("item{depth}"),
                &format!("list{depth}[i{depth}]"),
                level + 2,
                depth + 1,
            )?);
            output.push_str(&format!("{ind}\t}}\n"));
            output.push_str(&format!("{ind}\t{target} = {amp}list{depth}\n"));
            output.push_str(&format!("{ind}}}\n"));
        }
        TypeKind::Interface | TypeKind::Union => {
            let name = ty
                .name()
                .ok_or_else(|| CodegenError::malformed(format!("unnamed {} type", ty.kind)))?;
            // Unions keep their nullability marker; interfaces never have one.
            let amp = if nullable && ty.kind == TypeKind::Union {
                "&"
            } else {
                ""
            };

            output.push_str(&format!("{ind}if {} {{\n", not_null(raw)));
            output.push_str(&format!(
                "{ind}\tvalue{depth}, err := {}({raw})\n",
                decode_fn_name(name)
            ));
            output.push_str(&format!("{ind}\tif err != nil {{\n"));
            output.push_str(&format!("{ind}\t\treturn err\n"));
            output.push_str(&format!("{ind}\t}}\n"));
            output.push_str(&format!("{ind}\t{target} = {amp}value{depth}\n"));
            output.push_str(&format!("{ind}}}\n"));
        }
        _ => return Err(CodegenError::unsupported(ty)),
    }

    Ok(output)
}

/// Emits a direct `json.Unmarshal` of `raw` into `target`.
pub(crate) fn decode_direct(raw: &str, target: &str, level: usize) -> String {
    let ind = indent(level);
    format!(
        "{ind}if err := json.Unmarshal({raw}, &{target}); err != nil {{\n\
         {ind}\treturn err\n\
         {ind}}}\n"
    )
}

/// Renders the untyped fallback declaration and the decode function of an
/// interface or union, with the imports of possible types spelled as
/// external types.
///
/// # Errors
/// Returns `CodegenError` for malformed possible types.
pub(crate) fn render_decoder(config: &Config, ty: &SchemaType, name: &str) -> Result<Rendered> {
    let untyped = untyped_name(name);
    let decode_fn = decode_fn_name(name);
    let mut output = String::new();
    let mut imports = Vec::new();

    output.push_str(&format!(
        "// {untyped} is a {name} payload that carries no {DISCRIMINATOR_FIELD}.\n"
    ));
    output.push_str(&format!("type {untyped} map[string]interface{{}}\n\n"));

    output.push_str(&format!(
        "// {decode_fn} decodes a {name} payload into the type named by its\n\
         // {DISCRIMINATOR_FIELD} field.\n"
    ));
    output.push_str(&format!(
        "func {decode_fn}(data []byte) ({name}, error) {{\n"
    ));
    output.push_str("\tvar probe struct {\n");
    output.push_str(&format!(
        "\t\tTypename string `json:\"{DISCRIMINATOR_FIELD}\"`\n"
    ));
    output.push_str("\t}\n");
    output.push_str("\tif err := json.Unmarshal(data, &probe); err != nil {\n");
    output.push_str("\t\treturn nil, err\n");
    output.push_str("\t}\n");
    output.push_str("\tswitch probe.Typename {\n");
    output.push_str("\tcase \"\":\n");
    output.push_str(&decode_case(&untyped));

    for possible in ty.possible_types() {
        let wire_name = possible.name().ok_or_else(|| {
            CodegenError::malformed(format!("unnamed possible type of {name}"))
        })?;
        let go_type = declared_name(config, possible)?;
        output.push_str(&format!("\tcase \"{wire_name}\":\n"));
        output.push_str(&decode_case(&go_type));
        imports.extend(type_imports(config, possible));
    }

    output.push_str("\t}\n");
    output.push_str(&format!(
        "\treturn nil, &{UNKNOWN_TYPENAME_ERROR}{{Type: \"{name}\", Typename: probe.Typename}}\n"
    ));
    output.push_str("}\n");

    let mut rendered = Rendered::new(output);
    rendered.add_imports(imports);
    Ok(rendered)
}

fn decode_case(go_type: &str) -> String {
    format!(
        "\t\tvar v {go_type}\n\
         \t\tif err := json.Unmarshal(data, &v); err != nil {{\n\
         \t\t\treturn nil, err\n\
         \t\t}}\n\
         \t\treturn v, nil\n"
    )
}

fn not_null(raw: &str) -> String {
    format!("len({raw}) != 0 && string({raw}) != \"null\"")
}

fn wrapped(ty: &SchemaType) -> Result<&SchemaType> {
    ty.of_type()
        .ok_or_else(|| CodegenError::malformed(format!("{} wrapper has no ofType", ty.kind)))
}
