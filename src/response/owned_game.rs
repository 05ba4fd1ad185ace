use crate::serialize;
use crate::types::AppId;
use serde::Deserialize;

/// A game owned by a user, taken from the games data embedded in their profile's games page.
#[derive(Debug, Clone, Deserialize)]
pub struct OwnedGame {
    pub appid: AppId,
    pub name: String,
    /// Total hours played. 0 when the game has never been played.
    #[serde(rename = "hours_forever")]
    #[serde(default)]
    #[serde(deserialize_with = "serialize::hours_with_commas")]
    pub hours: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_game_with_grouped_hours() {
        let game: OwnedGame = serde_json::from_str(
            r#"{"appid":440,"name":"Team Fortress 2","hours_forever":"1,276.5"}"#
        ).unwrap();

        assert_eq!(game.appid, 440);
        assert_eq!(game.hours, 1276.5);
    }

    #[test]
    fn unplayed_game_has_zero_hours() {
        let game: OwnedGame = serde_json::from_str(
            r#"{"appid":570,"name":"Dota 2"}"#
        ).unwrap();

        assert_eq!(game.hours, 0.0);
    }
}
