use citem_macros::{Event, cancellable};
use std::sync::Arc;

use crate::entity::{ItemEntity, player::Player};

/// An event that occurs when a player picks up a dropped item.
#[cancellable]
#[derive(Event, Clone)]
pub struct PlayerPickupItemEvent {
    /// The player picking the item up.
    pub player: Arc<Player>,

    /// The item entity being picked up.
    pub item: Arc<ItemEntity>,

    /// How many items stay on the ground because the inventory is full.
    pub remaining: u8,
}

impl PlayerPickupItemEvent {
    #[must_use]
    pub fn new(player: Arc<Player>, item: Arc<ItemEntity>, remaining: u8) -> Self {
        Self {
            player,
            item,
            remaining,
            cancelled: false,
        }
    }
}
