use super::PlayerItem;
use crate::types::DefIndex;
use std::collections::HashMap;

/// A user's backpack for a single game.
#[derive(Debug, Clone)]
pub struct Backpack {
    /// The number of backpack slots the user has.
    pub slots: u32,
    /// Items keyed by their definition index.
    pub items: HashMap<DefIndex, PlayerItem>,
}
