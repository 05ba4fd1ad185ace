//! Clients for the Steam Web API, the store API, and community profile pages.
//!
//! Each client holds a [`Fetcher`](crate::Fetcher) for its requests. Clients can share one
//! fetcher by cloning it, keeping the retry configuration in a single place.

mod api_response;
mod game_items;
mod store;
mod users;

pub(crate) mod helpers;

pub use game_items::GameItems;
pub use store::{SteamStore, SteamStoreBuilder};
pub use users::SteamUsers;

pub(crate) const COMMUNITY_HOSTNAME: &str = "https://steamcommunity.com";
pub(crate) const API_HOSTNAME: &str = "https://api.steampowered.com";
pub(crate) const STORE_HOSTNAME: &str = "https://store.steampowered.com";

pub(crate) fn get_api_url(interface: &str, method: &str, version: usize) -> String {
    format!("{API_HOSTNAME}/{interface}/{method}/v{version}")
}

pub(crate) fn get_community_url(pathname: &str) -> String {
    format!("{COMMUNITY_HOSTNAME}{pathname}")
}

pub(crate) fn get_store_url(pathname: &str) -> String {
    format!("{STORE_HOSTNAME}{pathname}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_api_urls() {
        assert_eq!(
            get_api_url("ISteamUser", "GetPlayerSummaries", 2),
            "https://api.steampowered.com/ISteamUser/GetPlayerSummaries/v2",
        );
    }
}
