//! Permissive query-string coercion.
//!
//! Parameters never reject a request: a missing, unparsable or non-finite
//! value is read as `0`. The zero has a meaning downstream (root category,
//! all partners, no geo ranking).
//!
//! A repeated key resolves to its first occurrence.

pub(crate) type QueryParams = Vec<(String, String)>;

fn first<'a>(params: &'a QueryParams, key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}

/// Reads `key` as an integer, `0` when absent or unparsable.
pub(crate) fn int_param(params: &QueryParams, key: &str) -> i32 {
    first(params, key)
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

/// Reads `key` as a finite float, `0.0` otherwise.
pub(crate) fn float_param(params: &QueryParams, key: &str) -> f64 {
    first(params, key)
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or_default()
}

/// Reads `key` verbatim, empty when absent.
pub(crate) fn str_param<'a>(params: &'a QueryParams, key: &str) -> &'a str {
    first(params, key).unwrap_or_default()
}
