//! Fetches and normalizes data from the Steam Web API and public community pages: item
//! schemas, user profiles, owned games, backpacks, gift inventories, wishlists, and group
//! memberships.
//!
//! All requests go through a [`Fetcher`], which retries transient failures on a fixed,
//! configurable schedule before reporting a request as unreachable. Clients share a fetcher
//! by cloning it.
//!
//! ```no_run
//! use steam_webapi_wrapper::{Fetcher, SteamID, SteamUsers};
//!
//! # async fn run() -> Result<(), steam_webapi_wrapper::Error> {
//! let fetcher = Fetcher::builder()
//!     .max_retries(5)
//!     .build();
//! let users = SteamUsers::with_fetcher(
//!     fetcher,
//!     SteamID::from(76561197960287930),
//!     String::from("key"),
//! );
//! let summary = users.get_player_summary().await?;
//!
//! println!("{} created their account on {:?}", summary.persona_name, summary.time_created);
//! # Ok(())
//! # }
//! ```

mod api;
mod error;
mod fetcher;
mod functions;
mod helpers;
mod serialize;

pub mod enums;
pub mod response;
pub mod time;
pub mod types;

pub use api::{GameItems, SteamStore, SteamStoreBuilder, SteamUsers};
pub use error::{BackpackError, Error, ParseHtmlError, UnreachableError};
pub use fetcher::{Fetcher, FetcherBuilder, RetryPolicy};
pub use functions::steamid_from_openid;

pub use steamid_ng::SteamID;
