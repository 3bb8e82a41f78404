use citem_macros::Event;
use std::sync::Arc;

use crate::{entity::player::Player, item::ItemStack};

/// An event that occurs when a player dies.
#[derive(Event, Clone)]
pub struct PlayerDeathEvent {
    /// The player who died.
    pub player: Arc<Player>,

    /// The message broadcast for the death.
    pub death_message: String,

    /// The stacks that will be dropped where the player died.
    pub drops: Vec<ItemStack>,

    /// Whether the player keeps their inventory instead of dropping it.
    pub keep_inventory: bool,
}

impl PlayerDeathEvent {
    /// Creates a new instance of `PlayerDeathEvent`.
    ///
    /// # Arguments
    /// - `player`: The player who died.
    /// - `death_message`: The message broadcast for the death.
    /// - `drops`: The stacks that will be dropped.
    #[must_use]
    pub fn new(player: Arc<Player>, death_message: String, drops: Vec<ItemStack>) -> Self {
        Self {
            player,
            death_message,
            drops,
            keep_inventory: false,
        }
    }
}
