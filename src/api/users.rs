use super::api_response::{
    GetPlayerItemsResponse,
    GetPlayerSummariesResponse,
    GiftInventoryResponse,
};
use super::helpers;
use super::{get_api_url, get_community_url};
use crate::enums::{BackpackStatus, EconGame};
use crate::error::Error;
use crate::fetcher::Fetcher;
use crate::response::{Backpack, OwnedGame, PlayerSummary};
use crate::types::AppId;
use steamid_ng::SteamID;
use url::Url;

/// Retrieves information about a Steam user.
///
/// Most methods require the user's profile to be public. Methods marked as scraping read
/// community pages, since Steam offers no API calls for their data.
#[derive(Debug, Clone)]
pub struct SteamUsers {
    fetcher: Fetcher,
    key: String,
    steamid: SteamID,
}

impl SteamUsers {
    /// Creates a new client for the user behind `steamid`. `key` is your API key from
    /// <https://steamcommunity.com/dev/apikey>.
    pub fn new(steamid: SteamID, key: String) -> Self {
        Self::with_fetcher(Fetcher::new(), steamid, key)
    }

    /// Creates a new client using `fetcher` for requests. Useful when sharing one fetcher
    /// configuration across clients.
    pub fn with_fetcher(fetcher: Fetcher, steamid: SteamID, key: String) -> Self {
        Self {
            fetcher,
            key,
            steamid,
        }
    }

    /// The user this client reads.
    pub fn steamid(&self) -> SteamID {
        self.steamid
    }

    /// Gets the user's profile metadata.
    pub async fn get_player_summary(&self) -> Result<PlayerSummary, Error> {
        let steamids = u64::from(self.steamid).to_string();
        let url = Url::parse_with_params(
            &get_api_url("ISteamUser", "GetPlayerSummaries", 2),
            &[
                ("key", self.key.as_str()),
                ("steamids", steamids.as_str()),
            ],
        )?;
        let body = self.fetcher.fetch_json::<GetPlayerSummariesResponse>(url.as_str()).await?;

        body.response.players
            .into_iter()
            .next()
            .ok_or(Error::MalformedResponse("Response contains no players"))
    }

    /// Gets the games the user owns along with their played hours, scraped from the profile's
    /// games page. Fails with [`Error::PrivateProfile`] when the page does not expose its
    /// games data.
    pub async fn get_owned_games(&self) -> Result<Vec<OwnedGame>, Error> {
        let sid = u64::from(self.steamid);
        let url = get_community_url(&format!("/profiles/{sid}/games?tab=all"));
        let body = self.fetcher.fetch_text(&url).await?;

        match helpers::parse_games_page(&body) {
            Err(Error::ParseHtml(_)) => Err(Error::PrivateProfile),
            result => result,
        }
    }

    /// Gets the user's backpack for `game`.
    pub async fn get_items(&self, game: EconGame) -> Result<Backpack, Error> {
        let appid = game.appid();
        let steamid = u64::from(self.steamid).to_string();
        let url = Url::parse_with_params(
            &get_api_url(&format!("IEconItems_{appid}"), "GetPlayerItems", 1),
            &[
                ("key", self.key.as_str()),
                ("SteamID", steamid.as_str()),
            ],
        )?;
        let body = self.fetcher.fetch_json::<GetPlayerItemsResponse>(url.as_str()).await?;

        BackpackStatus::check(body.result.status)?;

        let items = body.result.items
            .into_iter()
            .map(|item| (item.defindex, item))
            .collect();

        Ok(Backpack {
            slots: body.result.num_backpack_slots,
            items,
        })
    }

    /// Gets the appids of games the user holds as gifts in their community inventory. An
    /// inventory without gifts produces an empty list.
    pub async fn get_gifts(&self) -> Result<Vec<AppId>, Error> {
        let sid = u64::from(self.steamid);
        let url = get_community_url(&format!("/profiles/{sid}/inventory/json/753/1/"));
        let body = self.fetcher.fetch_json::<GiftInventoryResponse>(&url).await?;
        let appids = body.descriptions
            .values()
            .filter_map(|description| {
                let action = description.actions.first()?;

                helpers::appid_from_store_link(&action.link)
            })
            .collect();

        Ok(appids)
    }

    /// Gets the appids of games on the user's wishlist, scraped from their wishlist page.
    pub async fn get_wishlist(&self) -> Result<Vec<AppId>, Error> {
        let sid = u64::from(self.steamid);
        let url = get_community_url(&format!("/profiles/{sid}/wishlist"));
        let body = self.fetcher.fetch_text(&url).await?;

        Ok(helpers::parse_wishlist_page(&body)?)
    }

    /// Gets the URLs of the groups the user is a member of, scraped from their groups page.
    pub async fn get_groups(&self) -> Result<Vec<String>, Error> {
        let sid = u64::from(self.steamid);
        let url = get_community_url(&format!("/profiles/{sid}/groups/"));
        let body = self.fetcher.fetch_text(&url).await?;

        Ok(helpers::parse_groups_page(&body)?)
    }
}
