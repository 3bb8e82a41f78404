use citem_macros::{Event, cancellable};
use std::sync::Arc;

use crate::entity::{ItemEntity, player::Player};

/// What hurt an entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DamageCause {
    /// Standing inside a fire block.
    Fire,
    /// Burning after having been set on fire.
    FireTick,
    Lava,
    HotFloor,
    Lightning,
    BlockExplosion,
    EntityExplosion,
    Contact,
    EntityAttack,
    Projectile,
    Fall,
    Void,
    Custom,
}

impl DamageCause {
    /// Whether the damage comes from fire itself, as opposed to lava or other heat sources.
    #[must_use]
    pub const fn is_fire(self) -> bool {
        matches!(self, Self::Fire | Self::FireTick)
    }
}

/// The entity an [`EntityDamageEvent`] is about.
#[derive(Clone)]
pub enum DamagedEntity {
    Item(Arc<ItemEntity>),
    Player(Arc<Player>),
    /// Any other entity, known only by its id.
    Other(i32),
}

/// An event that occurs when an entity takes damage.
///
/// If the event is cancelled, no damage is dealt. For item entities enough
/// damage destroys the item.
#[cancellable]
#[derive(Event, Clone)]
pub struct EntityDamageEvent {
    /// The entity taking damage.
    pub entity: DamagedEntity,

    /// What caused the damage.
    pub cause: DamageCause,

    /// The amount of damage.
    pub damage: f32,
}

impl EntityDamageEvent {
    /// Creates a new instance of `EntityDamageEvent`.
    ///
    /// # Arguments
    /// - `entity`: The entity taking damage.
    /// - `cause`: What caused the damage.
    /// - `damage`: The amount of damage.
    #[must_use]
    pub fn new(entity: DamagedEntity, cause: DamageCause, damage: f32) -> Self {
        Self {
            entity,
            cause,
            damage,
            cancelled: false,
        }
    }
}
