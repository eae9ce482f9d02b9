//! Wire codec for search keys.
//!
//! On the wire a game's keys are one comma-separated string. Locally they
//! are an ordered list of trimmed, non-empty keys.

use serde::{Deserialize, Deserializer, Serializer};

/// Split a comma-separated key string into trimmed keys, dropping empty segments.
pub fn split_keys(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join keys into their wire form.
pub fn join_keys(keys: &[String]) -> String {
    keys.join(",")
}

/// Serde adapter for `#[serde(with = "keys::wire")]`.
///
/// Reads a comma-separated string, a JSON array of strings, or `null`.
/// Always writes the comma-separated string.
pub mod wire {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawKeys {
        Joined(String),
        List(Vec<String>),
    }

    pub fn serialize<S>(keys: &[String], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&join_keys(keys))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let keys = match Option::<RawKeys>::deserialize(deserializer)? {
            None => Vec::new(),
            Some(RawKeys::Joined(raw)) => split_keys(&raw),
            Some(RawKeys::List(list)) => list
                .iter()
                .map(|k| k.trim())
                .filter(|k| !k.is_empty())
                .map(str::to_string)
                .collect(),
        };
        Ok(keys)
    }
}
