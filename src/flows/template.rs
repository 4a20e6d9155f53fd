use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static TEMPLATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(\w+(?:\.\w+)*)\}\}").unwrap());

/// Replace {{field}} placeholders with values pulled from the serialized flow
/// input. Dotted paths descend into nested objects. Unresolvable placeholders
/// render as empty strings.
pub fn render(template: &str, input: &Value) -> String {
    TEMPLATE_RE
        .replace_all(template, |caps: &regex::Captures| {
            resolve(&caps[1], input).unwrap_or_default()
        })
        .to_string()
}

fn resolve(path: &str, input: &Value) -> Option<String> {
    let mut current = input;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }

    match current {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        // Lists and objects have no scalar rendering; flows that need them
        // pre-format a string field before rendering.
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
