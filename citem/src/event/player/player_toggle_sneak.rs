use citem_macros::{Event, cancellable};
use std::sync::Arc;

use crate::entity::player::Player;

/// An event that occurs when a player starts or stops sneaking.
#[cancellable]
#[derive(Event, Clone)]
pub struct PlayerToggleSneakEvent {
    pub player: Arc<Player>,

    /// Whether the player is now sneaking.
    pub is_sneaking: bool,
}

impl PlayerToggleSneakEvent {
    #[must_use]
    pub fn new(player: Arc<Player>, is_sneaking: bool) -> Self {
        Self {
            player,
            is_sneaking,
            cancelled: false,
        }
    }
}
