use citem_macros::Event;
use std::sync::Arc;

use crate::{entity::player::Player, item::ItemStack};

/// An event that occurs when a player's item breaks.
#[derive(Event, Clone)]
pub struct PlayerItemBreakEvent {
    /// The player whose item broke.
    pub player: Arc<Player>,

    /// The item stack that broke.
    pub item_stack: ItemStack,
}

impl PlayerItemBreakEvent {
    /// Creates a new instance of `PlayerItemBreakEvent`.
    #[must_use]
    pub fn new(player: Arc<Player>, item_stack: ItemStack) -> Self {
        Self { player, item_stack }
    }
}
