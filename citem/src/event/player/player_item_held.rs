use citem_macros::{Event, cancellable};
use std::sync::Arc;

use crate::entity::player::Player;

/// An event that occurs when a player changes the selected hotbar slot.
///
/// If the event is cancelled, the previous slot stays selected.
#[cancellable]
#[derive(Event, Clone)]
pub struct PlayerItemHeldEvent {
    /// The player changing slots.
    pub player: Arc<Player>,

    /// The slot selected before the change.
    pub previous_slot: usize,

    /// The slot being selected.
    pub new_slot: usize,
}

impl PlayerItemHeldEvent {
    #[must_use]
    pub fn new(player: Arc<Player>, previous_slot: usize, new_slot: usize) -> Self {
        Self {
            player,
            previous_slot,
            new_slot,
            cancelled: false,
        }
    }
}
