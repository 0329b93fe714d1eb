//! `(key, value)` filters over JSON values

use panmask::Sanitizer;
use serde_json::Value;
use tracing::debug;

/// Build a filter with the default sanitizer settings
pub fn parameter_filter() -> impl Fn(&str, Value) -> Value + Send + Sync + 'static {
    parameter_filter_with(Sanitizer::default())
}

/// Build a filter around a configured sanitizer
///
/// String values are sanitized; every other value is returned unchanged.
pub fn parameter_filter_with(
    sanitizer: Sanitizer,
) -> impl Fn(&str, Value) -> Value + Send + Sync + 'static {
    move |key: &str, value: Value| match value {
        Value::String(mut text) => {
            if sanitizer.sanitize(&mut text).is_redacted() {
                debug!(key, "Truncated card number in parameter");
            }
            Value::String(text)
        }
        other => other,
    }
}

/// Sanitize every string inside a JSON document, in place
///
/// Walks nested arrays and objects (values only, not keys) and returns the
/// number of strings that were modified.
pub fn redact_json(sanitizer: &Sanitizer, value: &mut Value) -> usize {
    match value {
        Value::String(text) => usize::from(sanitizer.sanitize(text).is_redacted()),
        Value::Array(items) => items.iter_mut().map(|item| redact_json(sanitizer, item)).sum(),
        Value::Object(map) => map.values_mut().map(|item| redact_json(sanitizer, item)).sum(),
        Value::Null | Value::Bool(_) | Value::Number(_) => 0,
    }
}
