use citem_macros::{Event, cancellable};
use std::sync::Arc;

use crate::{entity::player::Player, item::ItemStack, world::BlockPos};

/// An event that occurs when an item is enchanted in an enchanting table.
///
/// If the event is cancelled, the item is left untouched and no levels are spent.
#[cancellable]
#[derive(Event, Clone)]
pub struct EnchantItemEvent {
    /// The player enchanting the item.
    pub enchanter: Arc<Player>,

    /// Position of the enchanting table.
    pub table: BlockPos,

    /// The item being enchanted.
    pub item: ItemStack,

    /// Experience levels the enchantment costs.
    pub exp_level_cost: u32,

    /// Enchantments to add, as registry key and level.
    pub enchants: Vec<(String, u8)>,
}

impl EnchantItemEvent {
    /// Creates a new instance of `EnchantItemEvent`.
    ///
    /// # Arguments
    /// - `enchanter`: The player enchanting the item.
    /// - `table`: Position of the enchanting table.
    /// - `item`: The item being enchanted.
    /// - `exp_level_cost`: Experience levels the enchantment costs.
    /// - `enchants`: Enchantments to add.
    #[must_use]
    pub fn new(
        enchanter: Arc<Player>,
        table: BlockPos,
        item: ItemStack,
        exp_level_cost: u32,
        enchants: Vec<(String, u8)>,
    ) -> Self {
        Self {
            enchanter,
            table,
            item,
            exp_level_cost,
            enchants,
            cancelled: false,
        }
    }
}
