use crate::types::{AppId, PackageId};
use serde::Deserialize;

/// Store details for a single app from the `appdetails` endpoint.
///
/// Not every field exists on every appid. Fields the store omits for an app are `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppDetails {
    #[serde(rename = "steam_appid")]
    pub appid: AppId,
    /// What kind of app this is ("game", "dlc", "demo", ...).
    #[serde(rename = "type")]
    pub app_type: String,
    /// Some appids have no name.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub detailed_description: String,
    #[serde(default)]
    pub supported_languages: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    /// Pricing for the region the request was made with. Absent for free or unlisted apps.
    #[serde(default)]
    pub price_overview: Option<PriceOverview>,
    /// The store packages this app can be bought in.
    #[serde(default)]
    pub packages: Option<Vec<PackageId>>,
    #[serde(default)]
    pub platforms: Platforms,
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
}

impl AppDetails {
    /// URL of the app's store page.
    pub fn store_url(&self) -> String {
        format!("https://store.steampowered.com/app/{}", self.appid)
    }

    /// URL of the app's capsule image on the CDN.
    pub fn header_image_url(&self) -> String {
        format!("https://cdn.steampowered.com/v/gfx/apps/{}/capsule_184x69.jpg", self.appid)
    }
}

/// Regional pricing for an app. Amounts are in the currency's smallest unit.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceOverview {
    pub currency: String,
    /// Price before any discount.
    pub initial: u64,
    /// Price after the current discount.
    #[serde(rename = "final")]
    pub current: u64,
    pub discount_percent: u8,
}

impl PriceOverview {
    /// The pre-discount price in whole currency units.
    pub fn initial_price(&self) -> f64 {
        self.initial as f64 / 100.0
    }

    /// The discounted price in whole currency units.
    pub fn discounted_price(&self) -> f64 {
        self.current as f64 / 100.0
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Platforms {
    #[serde(default)]
    pub windows: bool,
    #[serde(default)]
    pub mac: bool,
    #[serde(default)]
    pub linux: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub id: u32,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_prices_to_currency_units() {
        let price = PriceOverview {
            currency: "USD".into(),
            initial: 999,
            current: 499,
            discount_percent: 50,
        };

        assert_eq!(price.initial_price(), 9.99);
        assert_eq!(price.discounted_price(), 4.99);
    }

    #[test]
    fn computes_store_urls() {
        let details: AppDetails = serde_json::from_str(r#"{
            "steam_appid": 440,
            "type": "game",
            "name": "Team Fortress 2",
            "detailed_description": "Nine distinct classes.",
            "platforms": {"windows": true, "mac": true, "linux": true}
        }"#).unwrap();

        assert_eq!(details.store_url(), "https://store.steampowered.com/app/440");
        assert_eq!(
            details.header_image_url(),
            "https://cdn.steampowered.com/v/gfx/apps/440/capsule_184x69.jpg",
        );
    }
}
