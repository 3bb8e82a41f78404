pub mod player_death;
pub mod player_drop_item;
pub mod player_interact;
pub mod player_item_break;
pub mod player_item_damage;
pub mod player_item_held;
pub mod player_join;
pub mod player_leave;
pub mod player_pickup_item;
pub mod player_toggle_sneak;

use std::sync::Arc;

use crate::entity::player::Player;

pub use player_death::PlayerDeathEvent;
pub use player_drop_item::PlayerDropItemEvent;
pub use player_interact::{InteractAction, PlayerInteractEvent};
pub use player_item_break::PlayerItemBreakEvent;
pub use player_item_damage::PlayerItemDamageEvent;
pub use player_item_held::PlayerItemHeldEvent;
pub use player_join::PlayerJoinEvent;
pub use player_leave::PlayerLeaveEvent;
pub use player_pickup_item::PlayerPickupItemEvent;
pub use player_toggle_sneak::PlayerToggleSneakEvent;

/// A trait representing events related to players.
///
/// This trait provides a method to retrieve the player associated with the event.
pub trait PlayerEvent: Send + Sync {
    /// Retrieves a reference to the player associated with the event.
    ///
    /// # Returns
    /// A reference to the `Arc<Player>` involved in the event.
    fn get_player(&self) -> &Arc<Player>;
}

macro_rules! impl_player_event {
    ($($event:ty),* $(,)?) => {
        $(
            impl PlayerEvent for $event {
                fn get_player(&self) -> &Arc<Player> {
                    &self.player
                }
            }
        )*
    };
}

impl_player_event!(
    PlayerDeathEvent,
    PlayerDropItemEvent,
    PlayerInteractEvent,
    PlayerItemBreakEvent,
    PlayerItemDamageEvent,
    PlayerItemHeldEvent,
    PlayerJoinEvent,
    PlayerLeaveEvent,
    PlayerPickupItemEvent,
    PlayerToggleSneakEvent,
);
