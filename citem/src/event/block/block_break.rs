use citem_macros::{Event, cancellable};
use std::sync::Arc;

use crate::{entity::player::Player, world::BlockPos};

/// An event that occurs when a block is broken.
///
/// This event contains information about the player breaking the block, the block itself,
/// the experience gained, and whether the block should drop items.
#[cancellable]
#[derive(Event, Clone)]
pub struct BlockBreakEvent {
    /// The player who is breaking the block, if applicable.
    pub player: Option<Arc<Player>>,

    /// Registry key of the block that is being broken.
    pub block: String,

    /// Where the block is.
    pub position: BlockPos,

    /// The amount of experience gained from breaking the block.
    pub exp: u32,

    /// A boolean indicating whether the block should drop items.
    pub drop: bool,
}

impl BlockBreakEvent {
    /// Creates a new instance of `BlockBreakEvent`.
    ///
    /// # Arguments
    /// - `player`: An optional reference to the player breaking the block.
    /// - `block`: Registry key of the block that is being broken.
    /// - `position`: Position of the block.
    /// - `exp`: The amount of experience gained from breaking the block.
    /// - `drop`: A boolean indicating whether the block should drop items.
    #[must_use]
    pub fn new(
        player: Option<Arc<Player>>,
        block: String,
        position: BlockPos,
        exp: u32,
        drop: bool,
    ) -> Self {
        Self {
            player,
            block,
            position,
            exp,
            drop,
            cancelled: false,
        }
    }
}
