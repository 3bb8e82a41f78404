use citem_macros::{Event, cancellable};
use std::sync::Arc;

use crate::entity::ItemEntity;

/// An event that occurs when a dropped item merges into another one nearby.
#[cancellable]
#[derive(Event, Clone)]
pub struct ItemMergeEvent {
    /// The item entity that is merged away.
    pub entity: Arc<ItemEntity>,

    /// The item entity that absorbs it.
    pub target: Arc<ItemEntity>,
}

impl ItemMergeEvent {
    #[must_use]
    pub fn new(entity: Arc<ItemEntity>, target: Arc<ItemEntity>) -> Self {
        Self {
            entity,
            target,
            cancelled: false,
        }
    }
}
