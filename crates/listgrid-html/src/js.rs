//! JavaScript object-literal assembly.
//!
//! The in-place editor initializer passes an options object to the client
//! widget. String values go through `serde_json` so quoting and escaping
//! are always correct; raw values (functions, nested literals) are spliced
//! in unquoted.

use serde_json::json;

/// A value in a JavaScript options literal.
#[derive(Debug, Clone, PartialEq)]
pub enum JsValue {
    /// A string, emitted JSON-quoted.
    Str(String),
    /// Raw JavaScript source, emitted verbatim (function expressions,
    /// nested object literals).
    Raw(String),
    /// A boolean literal.
    Bool(bool),
    /// An integer literal.
    Int(i64),
}

impl JsValue {
    /// Quote a string value.
    pub fn str(value: impl Into<String>) -> Self {
        JsValue::Str(value.into())
    }

    /// Splice raw JavaScript.
    pub fn raw(value: impl Into<String>) -> Self {
        JsValue::Raw(value.into())
    }

    fn write_to(&self, out: &mut String) {
        match self {
            JsValue::Str(s) => out.push_str(&json!(s).to_string()),
            JsValue::Raw(src) => out.push_str(src),
            JsValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            JsValue::Int(i) => out.push_str(&i.to_string()),
        }
    }
}

/// Quote a string as a JavaScript string literal.
#[must_use]
pub fn js_string(value: &str) -> String {
    json!(value).to_string()
}

/// Assemble `{key: value, …}` preserving pair order.
#[must_use]
pub fn js_object(pairs: &[(&str, JsValue)]) -> String {
    let mut out = String::from("{");
    for (i, (key, value)) in pairs.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(key);
        out.push_str(": ");
        value.write_to(&mut out);
    }
    out.push('}');
    out
}
