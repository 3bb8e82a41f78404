use citem_macros::{Event, cancellable};
use std::sync::Arc;

use crate::entity::ItemEntity;

/// An event that occurs when a dropped item despawns after lying around too long.
///
/// If the event is cancelled, the item's age is reset and it stays in the world.
#[cancellable]
#[derive(Event, Clone)]
pub struct ItemDespawnEvent {
    pub entity: Arc<ItemEntity>,
}

impl ItemDespawnEvent {
    #[must_use]
    pub fn new(entity: Arc<ItemEntity>) -> Self {
        Self {
            entity,
            cancelled: false,
        }
    }
}
