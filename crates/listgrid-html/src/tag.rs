//! Tag builders.
//!
//! Small string-assembly helpers for the handful of elements the list
//! renderer emits. Attribute values are always escaped; body content is
//! inserted as-is because it is either already-escaped text or nested
//! markup produced by this crate.

use crate::escape::escape;

/// An ordered list of attribute name/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs(Vec<(&'static str, String)>);

impl Attrs {
    /// Create an empty attribute list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an attribute.
    #[must_use]
    pub fn set(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.0.push((name, value.into()));
        self
    }

    /// Append a boolean attribute (`disabled`, `checked`, …) when `on`.
    #[must_use]
    pub fn flag(mut self, name: &'static str, on: bool) -> Self {
        if on {
            self.0.push((name, name.to_string()));
        }
        self
    }

    fn write_to(&self, out: &mut String) {
        for (name, value) in &self.0 {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape(value));
            out.push('"');
        }
    }
}

/// Build a non-void element wrapping `body`.
#[must_use]
pub fn content_tag(name: &str, attrs: &Attrs, body: &str) -> String {
    let mut out = String::with_capacity(body.len() + 32);
    out.push('<');
    out.push_str(name);
    attrs.write_to(&mut out);
    out.push('>');
    out.push_str(body);
    out.push_str("</");
    out.push_str(name);
    out.push('>');
    out
}

/// Build a void element.
#[must_use]
pub fn tag(name: &str, attrs: &Attrs) -> String {
    let mut out = String::with_capacity(32);
    out.push('<');
    out.push_str(name);
    attrs.write_to(&mut out);
    out.push_str(" />");
    out
}

/// Build a checkbox input.
///
/// `id` is optional because disabled display-only checkboxes carry no id.
#[must_use]
pub fn check_box_tag(id: Option<&str>, value: &str, checked: bool, extra: Attrs) -> String {
    let mut attrs = Attrs::new().set("type", "checkbox");
    if let Some(id) = id {
        attrs = attrs.set("id", id).set("name", id);
    }
    attrs = attrs.set("value", value).flag("checked", checked);
    // splice in caller attributes (onclick, disabled)
    for (name, val) in extra.0 {
        attrs.0.push((name, val));
    }
    tag("input", &attrs)
}

/// Wrap JavaScript source in a script tag with a CDATA guard.
#[must_use]
pub fn javascript_tag(source: &str) -> String {
    format!("<script type=\"text/javascript\">\n//<![CDATA[\n{source}\n//]]>\n</script>")
}
