use super::api_response::GetSchemaResponse;
use super::get_api_url;
use crate::enums::EconGame;
use crate::error::Error;
use crate::fetcher::Fetcher;
use crate::response::SchemaItem;
use std::collections::HashMap;
use url::Url;

/// Retrieves the current item definitions for a game's economy.
///
/// Handy for updating info on all of a game's items at once, but the keyed form works just
/// as well for looking up a particular item.
#[derive(Debug, Clone)]
pub struct GameItems {
    fetcher: Fetcher,
    key: String,
}

impl GameItems {
    /// Creates a new client. `key` is your API key from
    /// <https://steamcommunity.com/dev/apikey>. No SteamID is needed; schemas are not tied
    /// to a user.
    pub fn new(key: String) -> Self {
        Self::with_fetcher(Fetcher::new(), key)
    }

    /// Creates a new client using `fetcher` for requests.
    pub fn with_fetcher(fetcher: Fetcher, key: String) -> Self {
        Self {
            fetcher,
            key,
        }
    }

    /// Gets all items in `game`'s schema.
    pub async fn get_schema(&self, game: EconGame) -> Result<Vec<SchemaItem>, Error> {
        let appid = game.appid();
        let url = Url::parse_with_params(
            &get_api_url(&format!("IEconItems_{appid}"), "GetSchema", 1),
            &[("key", self.key.as_str())],
        )?;
        let body = self.fetcher.fetch_json::<GetSchemaResponse>(url.as_str()).await?;

        Ok(body.result.items)
    }

    /// Gets `game`'s schema keyed by item name.
    pub async fn get_schema_map(&self, game: EconGame) -> Result<HashMap<String, SchemaItem>, Error> {
        let items = self.get_schema(game).await?;
        let map = items
            .into_iter()
            .map(|item| (item.name.clone(), item))
            .collect();

        Ok(map)
    }
}
