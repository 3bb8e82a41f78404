use citem_macros::{Event, cancellable};

use crate::{item::ItemStack, world::BlockPos};

/// An event that occurs when a furnace consumes an item as fuel.
///
/// If the event is cancelled, the fuel is not consumed and the furnace does not light.
#[cancellable]
#[derive(Event, Clone)]
pub struct FurnaceBurnEvent {
    /// Position of the furnace.
    pub furnace: BlockPos,

    /// The item about to be burnt.
    pub fuel: ItemStack,

    /// How many ticks the fuel will burn for.
    pub burn_time: u32,

    /// Whether the furnace will actually be lit.
    pub burning: bool,
}

impl FurnaceBurnEvent {
    /// Creates a new instance of `FurnaceBurnEvent`.
    ///
    /// # Arguments
    /// - `furnace`: Position of the furnace.
    /// - `fuel`: The item about to be burnt.
    /// - `burn_time`: How many ticks the fuel burns for.
    #[must_use]
    pub fn new(furnace: BlockPos, fuel: ItemStack, burn_time: u32) -> Self {
        Self {
            furnace,
            fuel,
            burn_time,
            burning: true,
            cancelled: false,
        }
    }
}
