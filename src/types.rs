//! Types for common values in Steam responses.

/// Uniquely identifies an application on Steam. For example: 440 for Team Fortress 2.
pub type AppId = u32;
/// Identifies an item definition in a game's economy schema.
pub type DefIndex = u32;
/// A unique ID for an item owned by a user.
pub type ItemId = u64;
/// An ID of a purchasable store package.
pub type PackageId = u32;

pub use crate::time::ServerTime;

// Types internally used by the crate.
use reqwest_middleware::ClientWithMiddleware;

pub(crate) type HttpClient = ClientWithMiddleware;
