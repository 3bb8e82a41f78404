//! Events about items lying in the world or being worked on.

mod damage;
mod despawn;
mod enchant;
mod merge;

pub use damage::{DamageCause, DamagedEntity, EntityDamageEvent};
pub use despawn::ItemDespawnEvent;
pub use enchant::EnchantItemEvent;
pub use merge::ItemMergeEvent;
