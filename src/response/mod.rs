mod app;
mod app_details;
mod backpack;
mod owned_game;
mod player_item;
mod player_summary;
mod schema_item;

pub use app::App;
pub use app_details::{AppDetails, Category, Platforms, PriceOverview};
pub use backpack::Backpack;
pub use owned_game::OwnedGame;
pub use player_item::PlayerItem;
pub use player_summary::PlayerSummary;
pub use schema_item::{Capabilities, SchemaItem};
