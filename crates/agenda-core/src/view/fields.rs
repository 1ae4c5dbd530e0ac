//! Get-or-default accessors over untyped plan JSON.
//!
//! Every reader here returns an owned, trimmed value or nothing; none of
//! them can fail.

use serde_json::{Map, Value};

/// Placeholder for any single missing value.
pub const TBD: &str = "TBD";

/// Keys that carry the human-readable text of a list item given as an object.
const ITEM_TEXT_KEYS: &[&str] = &["task", "activity", "name", "title", "description"];

/// Reads a scalar as text. Blank strings, `null`, arrays and objects are
/// absent.
pub(crate) fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => non_blank(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Trims a string, treating blank as absent.
pub(crate) fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// First present text among `keys`, in order.
pub(crate) fn first_text(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| text(object.get(*key)))
}

/// First value among `keys` that is not `null`.
pub(crate) fn first_value<'a>(object: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .find_map(|key| object.get(*key).filter(|v| !v.is_null()))
}

pub(crate) fn object(value: Option<&Value>) -> Option<&Map<String, Value>> {
    value.and_then(Value::as_object)
}

/// Array elements, or nothing for any other shape.
pub(crate) fn items(value: Option<&Value>) -> &[Value] {
    value
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Reads a list of strings.
///
/// Object items contribute their first text-bearing field; a lone scalar is
/// treated as a one-element list.
pub(crate) fn text_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(values)) => values
            .iter()
            .filter_map(|item| match item {
                Value::Object(map) => first_text(map, ITEM_TEXT_KEYS),
                other => text(Some(other)),
            })
            .collect(),
        other => text(other).into_iter().collect(),
    }
}

/// `"; "`-joins a list, or returns the placeholder for an empty one.
pub fn join_or(values: &[String], placeholder: &str) -> String {
    if values.is_empty() {
        placeholder.to_string()
    } else {
        values.join("; ")
    }
}

/// Capitalizes the first letter of each word and lowercases the rest.
pub(crate) fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Formats a number without a trailing `.0`, keeping at most two decimals.
pub(crate) fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        let fixed = format!("{n:.2}");
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Renders a share of the budget as `"<n>%"`, defaulting to `0%`.
pub(crate) fn percentage_text(value: Option<&Value>) -> String {
    let raw = match value {
        Some(Value::Number(n)) => n.as_f64().map(format_number),
        other => text(other).map(|s| s.trim_end_matches('%').trim_end().to_string()),
    };
    let number = raw.filter(|s| !s.is_empty());
    format!("{}%", number.as_deref().unwrap_or("0"))
}
