use crate::enums::VisibilityState;
use crate::serialize;
use crate::time::ServerTime;
use serde::Deserialize;
use steamid_ng::SteamID;

/// A user's profile metadata from `GetPlayerSummaries`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerSummary {
    /// The user's 64-bit SteamID.
    #[serde(deserialize_with = "serialize::steamid_from_string")]
    pub steamid: SteamID,
    /// The user's display name.
    #[serde(rename = "personaname")]
    pub persona_name: String,
    /// URL of the user's community profile.
    #[serde(rename = "profileurl")]
    pub profile_url: String,
    /// URL of the user's full-size avatar.
    #[serde(rename = "avatarfull")]
    pub avatar: String,
    /// When the account was created. Only exposed on public profiles.
    #[serde(rename = "timecreated")]
    #[serde(default)]
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub time_created: Option<ServerTime>,
    /// The profile's visibility.
    #[serde(rename = "communityvisibilitystate")]
    pub visibility: VisibilityState,
}

impl PlayerSummary {
    /// Whether the profile is readable by everyone. Most profile data can only be fetched
    /// when this is `true`.
    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }
}
