use uuid::Uuid;

use crate::item::ItemStack;

pub mod player;

/// A dropped item stack lying in the world.
#[derive(Clone, Debug)]
pub struct ItemEntity {
    pub entity_id: i32,
    pub entity_uuid: Uuid,
    pub item_stack: ItemStack,
}

impl ItemEntity {
    #[must_use]
    pub fn new(entity_id: i32, item_stack: ItemStack) -> Self {
        Self {
            entity_id,
            entity_uuid: Uuid::new_v4(),
            item_stack,
        }
    }
}
