use crate::error::{Error, ParseHtmlError};
use crate::response::OwnedGame;
use crate::types::AppId;
use lazy_regex::regex_captures;
use scraper::{Html, Selector};

/// Extracts the games data embedded in a profile's games page. There is no API call for a
/// user's games; public profiles embed them in a script tag.
pub fn parse_games_page(body: &str) -> Result<Vec<OwnedGame>, Error> {
    if let Some((_, games)) = regex_captures!(r#"var rgGames = (\[[\s\S]*?\}\]|\[\s*\]);"#, body) {
        Ok(serde_json::from_str(games)?)
    } else {
        Err(ParseHtmlError::Malformed("Missing games data").into())
    }
}

/// Collects the appids from the wishlist rows of a wishlist page. Row ids carry the appid,
/// e.g. `game_440`.
pub fn parse_wishlist_page(body: &str) -> Result<Vec<AppId>, ParseHtmlError> {
    let document = Html::parse_document(body);
    let row_selector = Selector::parse("div.wishlistRow")
        .map_err(|_error| ParseHtmlError::ParseSelector)?;
    let mut appids = Vec::new();

    for row in document.select(&row_selector) {
        if let Some(id) = row.value().attr("id") {
            if let Some((_, digits)) = regex_captures!(r#"([0-9]+)"#, id) {
                appids.push(digits.parse::<AppId>()?);
            }
        }
    }

    Ok(appids)
}

/// Collects group page URLs from a profile's groups page.
pub fn parse_groups_page(body: &str) -> Result<Vec<String>, ParseHtmlError> {
    let document = Html::parse_document(body);
    let block_selector = Selector::parse("div.groupBlockMedium")
        .map_err(|_error| ParseHtmlError::ParseSelector)?;
    let anchor_selector = Selector::parse("a")
        .map_err(|_error| ParseHtmlError::ParseSelector)?;
    let mut groups = Vec::new();

    for block in document.select(&block_selector) {
        if let Some(anchor) = block.select(&anchor_selector).next() {
            if let Some(href) = anchor.value().attr("href") {
                if !href.is_empty() {
                    groups.push(href.to_string());
                }
            }
        }
    }

    Ok(groups)
}

/// Extracts the appid referenced by a store link on an inventory description.
pub fn appid_from_store_link(link: &str) -> Option<AppId> {
    let (_, digits) = regex_captures!(r#"([0-9]+)"#, link)?;

    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_games_page() {
        let body = include_str!("fixtures/games_page.html");
        let games = parse_games_page(body).unwrap();

        assert_eq!(games.len(), 3);
        assert_eq!(games[0].appid, 440);
        assert_eq!(games[0].name, "Team Fortress 2");
        assert_eq!(games[0].hours, 1276.5);
        assert_eq!(games[2].hours, 0.0);
    }

    #[test]
    fn page_without_games_data_is_malformed() {
        let result = parse_games_page("<html><body>This profile is private.</body></html>");

        assert!(matches!(result, Err(Error::ParseHtml(_))));
    }

    #[test]
    fn parses_empty_games_list() {
        let games = parse_games_page("<script>var rgGames = [];</script>").unwrap();

        assert!(games.is_empty());
    }

    #[test]
    fn parses_wishlist_page() {
        let body = include_str!("fixtures/wishlist.html");
        let appids = parse_wishlist_page(body).unwrap();

        assert_eq!(appids, vec![400, 620, 1091500]);
    }

    #[test]
    fn parses_groups_page() {
        let body = include_str!("fixtures/groups.html");
        let groups = parse_groups_page(body).unwrap();

        assert_eq!(groups, vec![
            "https://steamcommunity.com/groups/SteamUniverse",
            "https://steamcommunity.com/groups/tradingcards",
        ]);
    }

    #[test]
    fn extracts_appid_from_store_link() {
        assert_eq!(appid_from_store_link("https://store.steampowered.com/app/440"), Some(440));
        assert_eq!(appid_from_store_link("no digits here"), None);
    }
}
