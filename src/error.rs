use reqwest_middleware;
use std::fmt;
use std::num::ParseIntError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The URL could not be parsed. Requests with malformed URLs are never retried.
    #[error("Invalid URL: {}", .0)]
    UrlParse(#[from] url::ParseError),
    /// A parameter passed to a method was invalid.
    #[error("Invalid parameter: {}", .0)]
    Parameter(&'static str),
    /// An error was encountered on a request.
    #[error("Request error: {}", .0)]
    Reqwest(#[from] reqwest::Error),
    /// An error was encountered within the request middleware.
    #[error("Request middleware error: {}", .0)]
    ReqwestMiddleware(anyhow::Error),
    /// The response returned a non-success HTTP status code.
    #[error("Error {}", .0)]
    Http(reqwest::StatusCode),
    /// All retry attempts for a request were exhausted.
    #[error("{}", .0)]
    Unreachable(#[from] UnreachableError),
    /// The response body could not be parsed as JSON. Decode failures are permanent for a
    /// given response and are never retried.
    #[error("Error parsing response: {}", .0)]
    Parse(#[from] serde_json::Error),
    /// The response is missing data expected for a successful response.
    #[error("Malformed response: {}", .0)]
    MalformedResponse(&'static str),
    /// The requested profile is private.
    #[error("Private profile")]
    PrivateProfile,
    /// A backpack could not be fetched for the user.
    #[error("Backpack error: {}", .0)]
    Backpack(#[from] BackpackError),
    /// An error was encountered parsing an HTML document.
    #[error("Error parsing HTML document: {}", .0)]
    ParseHtml(#[from] ParseHtmlError),
}

impl From<reqwest_middleware::Error> for Error {
    fn from(error: reqwest_middleware::Error) -> Error {
        match error {
            reqwest_middleware::Error::Reqwest(e) => Error::Reqwest(e),
            reqwest_middleware::Error::Middleware(e) => Error::ReqwestMiddleware(e),
        }
    }
}

/// All attempts for a request were exhausted without a successful response.
#[derive(thiserror::Error, Debug)]
pub struct UnreachableError {
    /// The URL that could not be reached.
    pub url: String,
    /// The total number of attempts made, including the original attempt.
    pub attempts: u32,
}

impl fmt::Display for UnreachableError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} is unreachable after {} attempts",
            self.url, self.attempts,
        )
    }
}

/// Error statuses returned by `GetPlayerItems`.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum BackpackError {
    #[error("Invalid SteamID")]
    InvalidSteamId,
    #[error("Backpack is private")]
    Private,
    #[error("Unexpected status ({})", .0)]
    UnknownStatus(u32),
}

#[derive(thiserror::Error, Debug)]
pub enum ParseHtmlError {
    #[error("{}", .0)]
    Malformed(&'static str),
    #[error("Invalid selector")]
    ParseSelector,
    #[error("{}", .0)]
    ParseInt(#[from] ParseIntError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_unreachable_error() {
        let error = UnreachableError {
            url: "https://api.steampowered.com/ISteamApps/GetAppList/v2".into(),
            attempts: 4,
        };

        assert_eq!(
            error.to_string(),
            "https://api.steampowered.com/ISteamApps/GetAppList/v2 is unreachable after 4 attempts",
        );
    }
}
