//! Lenient decoding for integer fields in request bodies

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

/// Accepts a JSON integer or a string holding one (`2026` or `"2026"`).
/// Any other string is rejected.
pub fn int_or_numeric_string<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Helper<T> {
        Num(T),
        Str(String),
    }

    match Helper::<T>::deserialize(deserializer)? {
        Helper::Num(value) => Ok(value),
        Helper::Str(s) => s.trim().parse::<T>().map_err(|e| {
            serde::de::Error::custom(format!("invalid integer string \"{s}\": {e}"))
        }),
    }
}
