use crate::types::AppId;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Games with an item economy exposed through the `IEconItems` interfaces.
#[derive(Debug, Deserialize, Serialize, Display, EnumString, PartialEq, Eq, Clone, Copy)]
pub enum EconGame {
    /// Team Fortress 2.
    #[strum(serialize = "TF2", serialize = "tf2")]
    TeamFortress2,
    /// Dota 2.
    #[strum(serialize = "Dota2", serialize = "dota2")]
    Dota2,
}

impl EconGame {
    /// The app ID for this game.
    pub fn appid(&self) -> AppId {
        match self {
            Self::TeamFortress2 => 440,
            Self::Dota2 => 570,
        }
    }
}
