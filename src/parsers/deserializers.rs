use serde_json::Value;

/// Coerce a JSON value into epoch seconds.
///
/// Numbers pass through; strings are trimmed and parsed as floats. Everything else,
/// including booleans and non-finite results such as `"nan"`, is treated as absent.
pub fn coerce_timestamp(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|ts| ts.is_finite())
}

/// Numeric view of a classifier confidence: a JSON number, or a numeric string with an
/// optional trailing `%`. Labels such as `"high"` have no numeric view.
pub fn confidence_score(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim_end().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|score| score.is_finite())
}
