use citem_macros::{Event, cancellable};
use std::sync::Arc;

use crate::{entity::ItemEntity, world::BlockPos};

/// An event that occurs when a hopper (or hopper minecart) sucks in a dropped item.
#[cancellable]
#[derive(Event, Clone)]
pub struct InventoryPickupItemEvent {
    /// Position of the collecting container.
    pub container: BlockPos,

    /// The item being collected.
    pub item: Arc<ItemEntity>,
}

impl InventoryPickupItemEvent {
    #[must_use]
    pub fn new(container: BlockPos, item: Arc<ItemEntity>) -> Self {
        Self {
            container,
            item,
            cancelled: false,
        }
    }
}
