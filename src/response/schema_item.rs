use crate::serialize;
use crate::types::DefIndex;
use serde::Deserialize;

/// An item definition from a game's `GetSchema` response.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaItem {
    /// The item's internal name.
    pub name: String,
    pub defindex: DefIndex,
    #[serde(default)]
    pub item_class: Option<String>,
    #[serde(default)]
    pub item_type_name: Option<String>,
    /// Whether the item's name is a proper noun and should not take an article.
    #[serde(default)]
    pub proper_name: bool,
    #[serde(default)]
    pub item_slot: Option<String>,
    #[serde(default)]
    pub item_quality: Option<u32>,
    // Some definitions carry empty strings for their images.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::empty_string_is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    #[serde(deserialize_with = "serialize::empty_string_is_none")]
    pub image_url_large: Option<String>,
    #[serde(default)]
    pub craft_class: Option<String>,
    #[serde(default)]
    pub capabilities: Option<Capabilities>,
    /// The in-game classes that can use this item, when it is class-restricted.
    #[serde(default)]
    pub used_by_classes: Option<Vec<String>>,
}

/// What can be done with an item.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Capabilities {
    #[serde(default)]
    pub nameable: bool,
    #[serde(default)]
    pub can_gift_wrap: bool,
    #[serde(default)]
    pub can_craft_mark: bool,
    #[serde(default)]
    pub can_be_restored: bool,
    #[serde(default)]
    pub strange_parts: bool,
    #[serde(default)]
    pub can_card_upgrade: bool,
}
