use citem_macros::{Event, cancellable};
use std::sync::Arc;

use crate::entity::{ItemEntity, player::Player};

/// An event that occurs when a player drops an item.
#[cancellable]
#[derive(Event, Clone)]
pub struct PlayerDropItemEvent {
    /// The player who dropped the item.
    pub player: Arc<Player>,

    /// The item entity that was spawned for the drop.
    pub item: Arc<ItemEntity>,
}

impl PlayerDropItemEvent {
    /// Creates a new instance of `PlayerDropItemEvent`.
    #[must_use]
    pub fn new(player: Arc<Player>, item: Arc<ItemEntity>) -> Self {
        Self {
            player,
            item,
            cancelled: false,
        }
    }
}
