use crate::types::{DefIndex, ItemId};
use serde::Deserialize;

/// An item in a user's backpack from `GetPlayerItems`.
///
/// See <https://wiki.teamfortress.com/wiki/WebAPI/GetPlayerItems> for more information on
/// these fields.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerItem {
    /// The item's current ID.
    #[serde(rename = "id")]
    pub item_id: ItemId,
    /// The item's original ID, from before any trades or renames.
    pub original_id: ItemId,
    /// The item definition this item is an instance of.
    pub defindex: DefIndex,
    pub level: u32,
    pub quality: u32,
    pub quantity: u32,
    #[serde(default)]
    pub custom_name: Option<String>,
    #[serde(rename = "custom_desc")]
    #[serde(default)]
    pub custom_description: Option<String>,
    #[serde(default)]
    pub style: Option<u32>,
    // Restrictions are flags on the response; absence means the item is unrestricted.
    #[serde(rename = "flag_cannot_trade")]
    #[serde(default)]
    cannot_trade: bool,
    #[serde(rename = "flag_cannot_craft")]
    #[serde(default)]
    cannot_craft: bool,
}

impl PlayerItem {
    pub fn is_tradable(&self) -> bool {
        !self.cannot_trade
    }

    pub fn is_craftable(&self) -> bool {
        !self.cannot_craft
    }
}
