use citem_macros::{Event, cancellable};
use std::sync::Arc;

use crate::{entity::player::Player, item::ItemStack, world::BlockPos};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractAction {
    LeftClickBlock,
    RightClickBlock,
    LeftClickAir,
    RightClickAir,
    /// Stepping on a pressure plate or trampling farmland.
    Physical,
}

impl InteractAction {
    #[must_use]
    pub const fn is_right_click(self) -> bool {
        matches!(self, Self::RightClickBlock | Self::RightClickAir)
    }
}

/// An event that occurs when a player interacts with the air or a block.
///
/// If the event is cancelled, the interaction does not happen.
#[cancellable]
#[derive(Event, Clone)]
pub struct PlayerInteractEvent {
    /// The player interacting.
    pub player: Arc<Player>,

    /// What kind of interaction this is.
    pub action: InteractAction,

    /// The item in the player's hand, if any.
    pub item: Option<ItemStack>,

    /// The block that was clicked, if any.
    pub clicked_block: Option<BlockPos>,
}

impl PlayerInteractEvent {
    /// Creates a new instance of `PlayerInteractEvent`.
    ///
    /// # Arguments
    /// - `player`: The player interacting.
    /// - `action`: What kind of interaction this is.
    /// - `item`: The item in the player's hand.
    /// - `clicked_block`: The block that was clicked.
    #[must_use]
    pub fn new(
        player: Arc<Player>,
        action: InteractAction,
        item: Option<ItemStack>,
        clicked_block: Option<BlockPos>,
    ) -> Self {
        Self {
            player,
            action,
            item,
            clicked_block,
            cancelled: false,
        }
    }
}
