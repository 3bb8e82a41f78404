use crate::event::{
    Cancellable, Event,
    block::BlockBreakEvent,
    inventory::{
        AnvilRepairEvent, FurnaceBurnEvent, InventoryPickupItemEvent, PrepareItemCraftEvent,
    },
    item::{EnchantItemEvent, EntityDamageEvent, ItemDespawnEvent, ItemMergeEvent},
    player::{
        PlayerDeathEvent, PlayerDropItemEvent, PlayerInteractEvent, PlayerItemBreakEvent,
        PlayerItemDamageEvent, PlayerItemHeldEvent, PlayerJoinEvent, PlayerLeaveEvent,
        PlayerPickupItemEvent, PlayerToggleSneakEvent,
    },
};
use crate::item::ItemStack;

/// Hands a hook the custom item stack that triggered it together with the
/// event, so the hook can read the event and cancel or mutate it.
pub struct EventWrapper<'a, E> {
    item: ItemStack,
    event: &'a mut E,
}

impl<'a, E: Event> EventWrapper<'a, E> {
    pub fn new(item: ItemStack, event: &'a mut E) -> Self {
        Self { item, event }
    }

    /// The tagged stack this hook runs for.
    #[must_use]
    pub fn item(&self) -> &ItemStack {
        &self.item
    }

    #[must_use]
    pub fn event(&self) -> &E {
        &*self.event
    }

    pub fn event_mut(&mut self) -> &mut E {
        &mut *self.event
    }
}

impl<E: Cancellable> EventWrapper<'_, E> {
    pub fn cancel(&mut self) {
        self.event.set_cancelled(true);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.event.cancelled()
    }
}

pub type BlockBreakWrapper<'a> = EventWrapper<'a, BlockBreakEvent>;
pub type EnchantItemWrapper<'a> = EventWrapper<'a, EnchantItemEvent>;
pub type ItemMergeWrapper<'a> = EventWrapper<'a, ItemMergeEvent>;
pub type ItemDespawnWrapper<'a> = EventWrapper<'a, ItemDespawnEvent>;
pub type EntityDamageWrapper<'a> = EventWrapper<'a, EntityDamageEvent>;
pub type FurnaceBurnWrapper<'a> = EventWrapper<'a, FurnaceBurnEvent>;
pub type HopperPickupWrapper<'a> = EventWrapper<'a, InventoryPickupItemEvent>;
pub type PrepareItemCraftWrapper<'a> = EventWrapper<'a, PrepareItemCraftEvent>;
pub type AnvilRepairWrapper<'a> = EventWrapper<'a, AnvilRepairEvent>;
pub type PlayerJoinWrapper<'a> = EventWrapper<'a, PlayerJoinEvent>;
pub type PlayerQuitWrapper<'a> = EventWrapper<'a, PlayerLeaveEvent>;
pub type PlayerDeathWrapper<'a> = EventWrapper<'a, PlayerDeathEvent>;
pub type PlayerDropItemWrapper<'a> = EventWrapper<'a, PlayerDropItemEvent>;
pub type PlayerItemBreakWrapper<'a> = EventWrapper<'a, PlayerItemBreakEvent>;
pub type PlayerItemDamageWrapper<'a> = EventWrapper<'a, PlayerItemDamageEvent>;
pub type PlayerItemHeldWrapper<'a> = EventWrapper<'a, PlayerItemHeldEvent>;
pub type PlayerPickupItemWrapper<'a> = EventWrapper<'a, PlayerPickupItemEvent>;
pub type PlayerToggleSneakWrapper<'a> = EventWrapper<'a, PlayerToggleSneakEvent>;
pub type PlayerInteractWrapper<'a> = EventWrapper<'a, PlayerInteractEvent>;
