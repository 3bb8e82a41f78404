use citem_macros::{Event, cancellable};
use std::sync::Arc;

use crate::{entity::player::Player, item::ItemStack};

/// An event that occurs when a player puts an item into one of the two input
/// slots of an anvil.
///
/// If the event is cancelled, the item is not accepted into the slot.
#[cancellable]
#[derive(Event, Clone)]
pub struct AnvilRepairEvent {
    /// The player using the anvil.
    pub player: Arc<Player>,

    /// The left input slot.
    pub first: Option<ItemStack>,

    /// The right input slot.
    pub second: Option<ItemStack>,

    /// Experience levels the operation costs.
    pub repair_cost: u32,
}

impl AnvilRepairEvent {
    #[must_use]
    pub fn new(
        player: Arc<Player>,
        first: Option<ItemStack>,
        second: Option<ItemStack>,
        repair_cost: u32,
    ) -> Self {
        Self {
            player,
            first,
            second,
            repair_cost,
            cancelled: false,
        }
    }
}
