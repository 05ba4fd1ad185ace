use super::api_response::{AppDetailsResult, GetAppListResponse};
use super::{get_api_url, get_store_url};
use crate::error::Error;
use crate::fetcher::Fetcher;
use crate::response::{App, AppDetails};
use crate::types::AppId;
use std::collections::HashMap;
use url::Url;

/// The number of appids to request per `appdetails` call when none is configured.
const DEFAULT_BATCH_SIZE: usize = 150;

/// Retrieves store information for apps.
///
/// The store endpoints take no API key. Details requests are batched; see
/// [`SteamStoreBuilder::batch_size`].
#[derive(Debug, Clone)]
pub struct SteamStore {
    fetcher: Fetcher,
    batch_size: usize,
}

impl Default for SteamStore {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl SteamStore {
    /// Creates a new client with the default batch size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new [`SteamStoreBuilder`].
    pub fn builder() -> SteamStoreBuilder {
        SteamStoreBuilder::new()
    }

    /// Gets every appid/name pair known to the store.
    pub async fn get_app_list(&self) -> Result<Vec<App>, Error> {
        let url = get_api_url("ISteamApps", "GetAppList", 2);
        let body = self.fetcher.fetch_json::<GetAppListResponse>(&url).await?;

        Ok(body.applist.apps)
    }

    /// Gets store details for `appids`, requested in batches. `country_code` selects the
    /// pricing region, e.g. `"US"`.
    ///
    /// Appids the store has no data for (delisted or region-locked apps) are skipped with a
    /// logged diagnostic; asking for them is not an error.
    pub async fn get_app_details(
        &self,
        appids: &[AppId],
        country_code: &str,
    ) -> Result<Vec<AppDetails>, Error> {
        let mut all_details = Vec::new();

        for chunk in appids.chunks(self.batch_size) {
            let appids = chunk
                .iter()
                .map(|appid| appid.to_string())
                .collect::<Vec<_>>()
                .join(",");
            let url = Url::parse_with_params(
                &get_store_url("/api/appdetails/"),
                &[
                    ("appids", appids.as_str()),
                    ("cc", country_code),
                    ("l", "english"),
                    ("v", "1"),
                ],
            )?;
            let body = self.fetcher
                .fetch_json::<HashMap<String, AppDetailsResult>>(url.as_str())
                .await?;

            for (appid, result) in body {
                match result.data {
                    Some(details) if result.success => all_details.push(details),
                    _ => log::debug!("No store details for {appid}"),
                }
            }
        }

        Ok(all_details)
    }
}

/// Builder for constructing a [`SteamStore`].
#[derive(Debug, Clone)]
pub struct SteamStoreBuilder {
    /// The number of appids to request per `appdetails` call. Defaults to 150.
    pub(crate) batch_size: usize,
    /// The fetcher to use for requests.
    pub(crate) fetcher: Option<Fetcher>,
}

impl Default for SteamStoreBuilder {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            fetcher: None,
        }
    }
}

impl SteamStoreBuilder {
    /// Creates a new [`SteamStoreBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of appids to request per `appdetails` call.
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// The fetcher to use for requests.
    pub fn fetcher(mut self, fetcher: Fetcher) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Builds the [`SteamStore`].
    pub fn build(self) -> SteamStore {
        SteamStore {
            fetcher: self.fetcher.unwrap_or_default(),
            batch_size: self.batch_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_get_app_list_response() {
        let body: GetAppListResponse = serde_json::from_str(
            include_str!("fixtures/get_app_list.json")
        ).unwrap();
        let apps = body.applist.apps;

        assert_eq!(apps.len(), 3);
        assert_eq!(apps[0].appid, 400);
        assert_eq!(apps[0].name, "Portal");
    }

    #[test]
    fn parses_app_details_response() {
        let body: HashMap<String, AppDetailsResult> = serde_json::from_str(
            include_str!("fixtures/app_details.json")
        ).unwrap();
        let result = body.get("440").unwrap();
        let details = result.data.as_ref().unwrap();

        assert!(result.success);
        assert_eq!(details.appid, 440);
        assert_eq!(details.name.as_deref(), Some("Team Fortress 2"));
        assert_eq!(details.app_type, "game");
        assert!(details.platforms.linux);

        let price = details.price_overview.as_ref().unwrap();

        assert_eq!(price.currency, "USD");
        assert_eq!(price.discounted_price(), 4.99);

        // Delisted appids report no data.
        let delisted = body.get("223530").unwrap();

        assert!(!delisted.success);
        assert!(delisted.data.is_none());
    }
}
