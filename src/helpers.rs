use crate::error::Error;
use reqwest::header;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use serde::de::DeserializeOwned;

pub const USER_AGENT_STRING: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/97.0.4692.71 Safari/537.36";

/// Builds the client used for requests. Retries are handled by the crate rather than by
/// middleware so that the retry schedule stays observable and configurable per fetcher.
pub fn get_default_middleware(user_agent_string: &'static str) -> ClientWithMiddleware {
    let mut headers = header::HeaderMap::new();

    headers.insert(header::USER_AGENT, header::HeaderValue::from_static(user_agent_string));

    let client = reqwest::ClientBuilder::new()
        .default_headers(headers)
        .build()
        .unwrap();

    ClientBuilder::new(client).build()
}

/// Checks the response status, reading the full body on success. Any non-success status is
/// reported as [`Error::Http`] so the caller can treat it as a failed attempt.
pub async fn check_response(response: reqwest::Response) -> Result<bytes::Bytes, Error> {
    let status = response.status();

    if status.is_success() {
        Ok(response.bytes().await?)
    } else {
        Err(Error::Http(status))
    }
}

/// Deserializes a response body. Parse failures propagate immediately to the caller.
pub fn parses_response<D>(body: &[u8]) -> Result<D, Error>
where
    D: DeserializeOwned,
{
    Ok(serde_json::from_slice::<D>(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn parses_well_formed_response() {
        let parsed = parses_response::<HashMap<String, i32>>(br#"{"a": 1}"#).unwrap();

        assert_eq!(parsed.get("a"), Some(&1));
    }

    #[test]
    fn truncated_response_is_a_parse_error() {
        let parsed = parses_response::<HashMap<String, i32>>(br#"{"a": 1"#);

        assert!(matches!(parsed, Err(Error::Parse(_))));
    }
}
