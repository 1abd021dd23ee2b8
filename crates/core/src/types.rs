/// Host-assigned document identifier. The host never assigns `0`.
pub type DocumentId = u64;

/// Sentinel identifier meaning "no document".
pub const NO_DOCUMENT: DocumentId = 0;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Coerce a raw request value into a non-negative integer.
///
/// Mirrors the host's lenient integer coercion: leading whitespace and a sign
/// are accepted, parsing stops at the first non-digit, the sign is dropped,
/// and anything unparseable becomes `0`. Overflow saturates.
pub fn absint(raw: &str) -> u64 {
    let trimmed = raw.trim_start();
    let digits = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('+'))
        .unwrap_or(trimmed);

    digits
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .fold(0u64, |acc, c| {
            acc.saturating_mul(10)
                .saturating_add(u64::from(c as u8 - b'0'))
        })
}

/// Coerce a loosely-typed stored value into a document id.
///
/// Stores hand back whatever was written (numbers, numeric strings, booleans).
/// Anything that is not a non-negative integer degrades to [`NO_DOCUMENT`].
pub fn coerce_document_id(value: &serde_json::Value) -> DocumentId {
    match value {
        serde_json::Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_i64().map(i64::unsigned_abs))
            .unwrap_or(NO_DOCUMENT),
        serde_json::Value::String(s) => absint(s),
        _ => NO_DOCUMENT,
    }
}

/// Coerce a loosely-typed stored value into a boolean.
///
/// `true`, non-zero numbers, and non-empty strings other than `"0"` are truthy.
pub fn coerce_bool(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        serde_json::Value::String(s) => !s.is_empty() && s != "0",
        serde_json::Value::Null => false,
        serde_json::Value::Array(items) => !items.is_empty(),
        serde_json::Value::Object(map) => !map.is_empty(),
    }
}
