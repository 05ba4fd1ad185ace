//! Contains custom serialization and deserialization functions.

use serde::{Deserialize, Deserializer};
use serde::de::{self, Unexpected};
use steamid_ng::SteamID;

pub fn empty_string_is_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;

    if s.is_empty() {
        Ok(None)
    } else {
        Ok(Some(s))
    }
}

/// Played hours on profile pages are formatted strings. Numbers over 999 contain commas.
pub fn hours_with_commas<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;

    s.replace(',', "")
        .parse::<f64>()
        .map_err(|_| de::Error::invalid_value(Unexpected::Str(&s), &"a number of hours"))
}

/// 64-bit IDs are returned as strings in API responses.
pub fn steamid_from_string<'de, D>(deserializer: D) -> Result<SteamID, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    let sid = s.parse::<u64>()
        .map_err(|_| de::Error::invalid_value(Unexpected::Str(&s), &"a 64-bit SteamID"))?;

    Ok(SteamID::from(sid))
}
