//! Go doc comment rendering.

/// Go comment marker.
pub const COMMENT: &str = "// ";

/// Renders `text` as a comment by prefixing every line with `prefix`.
///
/// Lines are not re-wrapped. Blank lines keep the marker without its
/// trailing space.
#[must_use]
pub fn render_comment(prefix: &str, text: &str) -> String {
    let mut output = String::with_capacity(text.len() + prefix.len() * 2);
    for line in text.split('\n') {
        if line.trim().is_empty() {
            output.push_str(prefix.trim_end());
        } else {
            output.push_str(prefix);
            output.push_str(line.trim_end_matches('\r'));
        }
        output.push('\n');
    }
    output
}

/// Renders the documentation of a declaration: its description, then a
/// `Deprecated:` paragraph when the schema marks it deprecated.
#[must_use]
pub fn render_doc(
    prefix: &str,
    description: Option<&str>,
    deprecated: bool,
    deprecation_reason: Option<&str>,
) -> String {
    let mut output = String::new();
    let description = description.filter(|d| !d.trim().is_empty());

    if let Some(description) = description {
        output.push_str(&render_comment(prefix, description));
    }

    if deprecated {
        if description.is_some() {
            output.push_str(prefix.trim_end());
            output.push('\n');
        }
        let reason = deprecation_reason
            .filter(|r| !r.trim().is_empty())
            .unwrap_or("No longer supported.");
        output.push_str(&render_comment(prefix, &format!("Deprecated: {reason}")));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        assert_eq!(render_comment("// ", "A user."), "// A user.\n");
    }

    #[test]
    fn test_multi_line_is_prefixed_not_rewrapped() {
        let text = "First line that is quite long and stays on one line.\n\nSecond.";
        assert_eq!(
            render_comment("\t// ", text),
            "\t// First line that is quite long and stays on one line.\n\t//\n\t// Second.\n"
        );
    }

    #[test]
    fn test_doc_with_deprecation() {
        let doc = render_doc("// ", Some("The login."), true, Some("Use `name`."));
        assert_eq!(doc, "// The login.\n//\n// Deprecated: Use `name`.\n");
    }

    #[test]
    fn test_doc_deprecated_without_reason() {
        let doc = render_doc("// ", None, true, None);
        assert_eq!(doc, "// Deprecated: No longer supported.\n");
    }

    #[test]
    fn test_doc_empty() {
        assert_eq!(render_doc("// ", None, false, None), "");
        assert_eq!(render_doc("// ", Some("  "), false, None), "");
    }
}
