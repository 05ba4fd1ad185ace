//! Contains standalone functions exported at the crate root.

use crate::error::Error;
use lazy_regex::regex_captures;
use steamid_ng::SteamID;

/// Extracts a SteamID from an OpenID claimed-id URL, as handed back by Steam's OpenID
/// provider. See <https://steamcommunity.com/dev> for OpenID info.
pub fn steamid_from_openid(claimed_id: &str) -> Result<SteamID, Error> {
    let (_, digits) = regex_captures!(r#"^https?://steamcommunity\.com/openid/id/([0-9]+)$"#, claimed_id)
        .ok_or(Error::Parameter("Not an OpenID claimed-id URL"))?;
    let sid = digits.parse::<u64>()
        .map_err(|_error| Error::Parameter("ID is out of range"))?;

    Ok(SteamID::from(sid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_steamid_from_claimed_id() {
        let steamid = steamid_from_openid("https://steamcommunity.com/openid/id/76561197960287930")
            .unwrap();

        assert_eq!(u64::from(steamid), 76561197960287930);
    }

    #[test]
    fn rejects_other_urls() {
        let result = steamid_from_openid("https://example.com/openid/id/76561197960287930");

        assert!(matches!(result, Err(Error::Parameter(_))));
    }

    #[test]
    fn rejects_out_of_range_ids() {
        let result = steamid_from_openid(
            "https://steamcommunity.com/openid/id/999999999999999999999999999999"
        );

        assert!(matches!(result, Err(Error::Parameter(_))));
    }
}
