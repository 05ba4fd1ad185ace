//! Enumerated types.

mod econ_game;
mod visibility_state;
mod backpack_status;

pub use econ_game::EconGame;
pub use visibility_state::VisibilityState;
pub use backpack_status::BackpackStatus;
