//! Raw response bodies. These exist to be peeled away; the data inside them is re-shaped
//! into the types in [`crate::response`].

use crate::response::{App, AppDetails, PlayerItem, PlayerSummary, SchemaItem};
use std::collections::HashMap;
use serde::Deserialize;
use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};

#[derive(Deserialize)]
pub(crate) struct GetPlayerSummariesResponse {
    pub response: GetPlayerSummariesBody,
}

#[derive(Deserialize)]
pub(crate) struct GetPlayerSummariesBody {
    #[serde(default)]
    pub players: Vec<PlayerSummary>,
}

#[derive(Deserialize)]
pub(crate) struct GetPlayerItemsResponse {
    pub result: GetPlayerItemsBody,
}

#[derive(Deserialize)]
pub(crate) struct GetPlayerItemsBody {
    pub status: u32,
    #[serde(default)]
    pub num_backpack_slots: u32,
    #[serde(default)]
    pub items: Vec<PlayerItem>,
}

#[derive(Deserialize)]
pub(crate) struct GetSchemaResponse {
    pub result: GetSchemaBody,
}

#[derive(Deserialize)]
pub(crate) struct GetSchemaBody {
    #[serde(default)]
    pub items: Vec<SchemaItem>,
}

#[derive(Deserialize)]
pub(crate) struct GetAppListResponse {
    pub applist: GetAppListBody,
}

#[derive(Deserialize)]
pub(crate) struct GetAppListBody {
    #[serde(default)]
    pub apps: Vec<App>,
}

#[derive(Deserialize)]
pub(crate) struct AppDetailsResult {
    pub success: bool,
    pub data: Option<AppDetails>,
}

#[derive(Deserialize)]
pub(crate) struct GiftInventoryResponse {
    #[serde(rename = "rgDescriptions")]
    #[serde(default)]
    #[serde(deserialize_with = "to_description_map")]
    pub descriptions: HashMap<String, GiftDescription>,
}

#[derive(Deserialize)]
pub(crate) struct GiftDescription {
    #[serde(default)]
    pub actions: Vec<GiftAction>,
}

#[derive(Deserialize)]
pub(crate) struct GiftAction {
    pub link: String,
}

// Empty inventories come back with `"rgDescriptions": []` rather than an object.
fn to_description_map<'de, D>(deserializer: D) -> Result<HashMap<String, GiftDescription>, D::Error>
where
    D: Deserializer<'de>,
{
    struct DescriptionsVisitor;

    impl<'de> Visitor<'de> for DescriptionsVisitor {
        type Value = HashMap<String, GiftDescription>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a map of descriptions or an empty sequence")
        }

        fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut map = HashMap::with_capacity(access.size_hint().unwrap_or(0));

            while let Some((key, description)) = access.next_entry::<String, GiftDescription>()? {
                map.insert(key, description);
            }

            Ok(map)
        }

        fn visit_seq<S>(self, mut access: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            if access.next_element::<de::IgnoredAny>()?.is_some() {
                return Err(de::Error::custom("expected descriptions sequence to be empty"));
            }

            Ok(HashMap::new())
        }
    }

    deserializer.deserialize_any(DescriptionsVisitor)
}
