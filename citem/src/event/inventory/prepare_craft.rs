use citem_macros::Event;
use std::sync::Arc;

use crate::{entity::player::Player, item::ItemStack};

/// An event that occurs when the items in a crafting grid change and the
/// server computes what the grid would craft.
///
/// This event cannot be cancelled. To forbid a recipe, clear its result with
/// [`PrepareItemCraftEvent::set_result`].
#[derive(Event, Clone)]
pub struct PrepareItemCraftEvent {
    /// The player looking at the crafting grid.
    pub player: Arc<Player>,

    /// The grid slots, row by row. Empty slots are `None`.
    pub matrix: Vec<Option<ItemStack>>,

    result: Option<ItemStack>,
}

impl PrepareItemCraftEvent {
    /// Creates a new instance of `PrepareItemCraftEvent`.
    ///
    /// # Arguments
    /// - `player`: The player looking at the crafting grid.
    /// - `matrix`: The grid slots, row by row.
    /// - `result`: The item the recipe would produce, if any.
    #[must_use]
    pub fn new(
        player: Arc<Player>,
        matrix: Vec<Option<ItemStack>>,
        result: Option<ItemStack>,
    ) -> Self {
        Self {
            player,
            matrix,
            result,
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<&ItemStack> {
        self.result.as_ref()
    }

    /// Replaces the crafting result. `None` leaves the result slot empty.
    pub fn set_result(&mut self, result: Option<ItemStack>) {
        self.result = result;
    }
}
