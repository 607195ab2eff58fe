use serde_json::Value;

/// A finite number from a JSON number or a numeric string. Historical records store counts both
/// ways.
pub(crate) fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

/// A non-negative whole number that fits a `u32`.
pub(crate) fn count(value: &Value) -> Option<u32> {
    number(value)
        .filter(|n| *n >= 0.0 && n.fract() == 0.0 && *n <= f64::from(u32::MAX))
        .map(|n| n as u32)
}

/// First non-zero count among `keys`, or 0.
pub(crate) fn first_count(doc: &Value, keys: &[&str]) -> u32 {
    keys.iter()
        .filter_map(|key| doc.get(*key))
        .filter_map(count)
        .find(|n| *n > 0)
        .unwrap_or(0)
}

pub(crate) fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_owned())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub(crate) fn first_text(doc: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().filter_map(|key| doc.get(*key)).find_map(text)
}
