//! Prop extraction from TypeScript interface declarations.
//!
//! This is a regex scan, not a parser. The interface body is matched up to
//! the first `}`, so nested object types, generics with braces, or
//! multi-line type expressions produce truncated or partial results. A
//! missing or malformed interface yields no props.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::ComponentProp;

// `[/** doc */] name[?]: type` terminated by `;`, `,` or a newline.
static FIELD_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?:/\*\*([^*]+)\*/\s*)?(\w+)(\?)?:\s*([^;,\n]+)").ok()
});

fn interface_pattern(interface_name: &str) -> Option<Regex> {
    let pattern = format!(
        r"interface\s+{}\s*(?:extends[^{{]+)?\s*\{{([^}}]+)\}}",
        regex::escape(interface_name)
    );
    Regex::new(&pattern).ok()
}

/// Locate the body of `interface <name> { ... }` in `source`.
pub fn find_interface_body<'a>(source: &'a str, interface_name: &str) -> Option<&'a str> {
    let re = interface_pattern(interface_name)?;
    re.captures(source)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extract the public props declared by `interface_name` in `source`.
///
/// Fields whose name starts with `_` are treated as internal and skipped.
/// Props come back in source order.
///
/// # Examples
///
/// ```
/// use compdoc::props::extract_props;
///
/// let src = "interface ButtonProps { label: string; disabled?: boolean; }";
/// let props = extract_props(src, "ButtonProps");
/// assert_eq!(props.len(), 2);
/// assert!(props[0].required);
/// assert!(!props[1].required);
/// ```
pub fn extract_props(source: &str, interface_name: &str) -> Vec<ComponentProp> {
    let Some(body) = find_interface_body(source, interface_name) else {
        return Vec::new();
    };
    let Some(field_re) = FIELD_RE.as_ref() else {
        return Vec::new();
    };

    field_re
        .captures_iter(body)
        .filter_map(|caps| {
            let name = caps.get(2)?.as_str();
            if name.starts_with('_') {
                return None;
            }
            let ty = caps.get(4)?.as_str().trim();
            let description = caps.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
            let required = caps.get(3).is_none();

            Some(ComponentProp::new(name, ty, required).with_description(description))
        })
        .collect()
}
