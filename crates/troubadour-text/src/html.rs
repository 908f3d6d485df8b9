//! Small HTML helpers shared by the renderers.

/// Escape a string for use inside a double-quoted attribute value.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap `body` in a `<span>` carrying optional `class` and `id` attributes.
///
/// Returns `body` untouched when there is nothing to attach.
pub fn span(classes: &[&str], id: Option<&str>, body: &str) -> String {
    let mut attrs = String::new();
    if !classes.is_empty() {
        attrs.push_str(&format!(" class=\"{}\"", escape_attr(&classes.join(" "))));
    }
    if let Some(id) = id {
        attrs.push_str(&format!(" id=\"{}\"", escape_attr(id)));
    }
    if attrs.is_empty() {
        body.to_string()
    } else {
        format!("<span{attrs}>{body}</span>")
    }
}
