//! Lenient numeric deserialization.
//!
//! Terminal hardware sends `amount` inconsistently: sometimes a JSON number,
//! sometimes a quoted string, sometimes nothing at all. Registration must
//! never fail on a malformed amount, so deserialization coerces instead of
//! rejecting.

use serde::{Deserialize, Deserializer};

/// Deserializes an optional number-or-string field into `f64`.
///
/// Missing, null, and non-numeric inputs all become `0.0`.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        String(String),
        Other(serde::de::IgnoredAny),
    }

    let value = Option::<NumberOrString>::deserialize(deserializer)?;
    Ok(match value {
        Some(NumberOrString::Number(n)) => n,
        Some(NumberOrString::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}
