use async_trait::async_trait;
use citem_config::{ListenerConfig, ListenerPriority};
use rustc_hash::FxHashSet;
use std::sync::Arc;

use crate::bus::{EventBus, EventHandler};
use crate::custom_item::{
    CustomItem, identifier_of, registry::CustomItemRegistry, wrapper::EventWrapper,
};
use crate::event::{
    Event, EventPriority,
    block::BlockBreakEvent,
    inventory::{
        AnvilRepairEvent, FurnaceBurnEvent, InventoryPickupItemEvent, PrepareItemCraftEvent,
    },
    item::{DamagedEntity, EnchantItemEvent, EntityDamageEvent, ItemDespawnEvent, ItemMergeEvent},
    player::{
        PlayerDeathEvent, PlayerDropItemEvent, PlayerEvent, PlayerInteractEvent,
        PlayerItemBreakEvent, PlayerItemDamageEvent, PlayerItemHeldEvent, PlayerJoinEvent,
        PlayerLeaveEvent, PlayerPickupItemEvent, PlayerToggleSneakEvent,
    },
};
use crate::item::ItemStack;

/// A copy of the stack the player of `event` holds in the selected slot.
fn held_stack<E: PlayerEvent>(event: &E) -> Option<ItemStack> {
    event.get_player().held_item()
}

impl From<ListenerPriority> for EventPriority {
    fn from(priority: ListenerPriority) -> Self {
        match priority {
            ListenerPriority::Highest => Self::Highest,
            ListenerPriority::High => Self::High,
            ListenerPriority::Normal => Self::Normal,
            ListenerPriority::Low => Self::Low,
            ListenerPriority::Lowest => Self::Lowest,
        }
    }
}

/// Routes host events to the hooks of the custom items involved in them.
///
/// Every event names one or more acting stacks. A stack carrying the custom
/// item tag is resolved through the registry and the matching hook of its
/// descriptor gets the event wrapped together with that stack.
pub struct CustomItemListener {
    registry: Arc<CustomItemRegistry>,
}

impl CustomItemListener {
    #[must_use]
    pub fn new(registry: Arc<CustomItemRegistry>) -> Self {
        Self { registry }
    }

    /// Subscribes to every event custom items react to, as a blocking handler
    /// so hooks can cancel and mutate.
    pub async fn register(self: Arc<Self>, bus: &EventBus, config: &ListenerConfig) {
        let priority = EventPriority::from(config.priority);

        bus.register::<BlockBreakEvent, _>(self.clone(), priority, true)
            .await;
        bus.register::<EnchantItemEvent, _>(self.clone(), priority, true)
            .await;
        bus.register::<ItemMergeEvent, _>(self.clone(), priority, true)
            .await;
        bus.register::<ItemDespawnEvent, _>(self.clone(), priority, true)
            .await;
        bus.register::<EntityDamageEvent, _>(self.clone(), priority, true)
            .await;
        bus.register::<FurnaceBurnEvent, _>(self.clone(), priority, true)
            .await;
        bus.register::<InventoryPickupItemEvent, _>(self.clone(), priority, true)
            .await;
        bus.register::<PrepareItemCraftEvent, _>(self.clone(), priority, true)
            .await;
        bus.register::<AnvilRepairEvent, _>(self.clone(), priority, true)
            .await;
        bus.register::<PlayerJoinEvent, _>(self.clone(), priority, true)
            .await;
        bus.register::<PlayerLeaveEvent, _>(self.clone(), priority, true)
            .await;
        bus.register::<PlayerDeathEvent, _>(self.clone(), priority, true)
            .await;
        bus.register::<PlayerDropItemEvent, _>(self.clone(), priority, true)
            .await;
        bus.register::<PlayerItemBreakEvent, _>(self.clone(), priority, true)
            .await;
        bus.register::<PlayerItemDamageEvent, _>(self.clone(), priority, true)
            .await;
        bus.register::<PlayerItemHeldEvent, _>(self.clone(), priority, true)
            .await;
        bus.register::<PlayerPickupItemEvent, _>(self.clone(), priority, true)
            .await;
        bus.register::<PlayerToggleSneakEvent, _>(self.clone(), priority, true)
            .await;
        bus.register::<PlayerInteractEvent, _>(self.clone(), priority, true)
            .await;

        log::info!(
            "Custom item listener registered at {priority:?} priority with {} custom items",
            self.registry.len()
        );
    }

    /// Calls `hook` on the descriptor `stack` belongs to. Plain stacks and
    /// stacks tagged with an unregistered identifier are skipped.
    fn dispatch<E, F>(&self, stack: Option<ItemStack>, event: &mut E, hook: F)
    where
        E: Event,
        F: FnOnce(&dyn CustomItem, &mut EventWrapper<'_, E>),
    {
        let Some(stack) = stack else {
            return;
        };
        let Some(identifier) = identifier_of(&stack) else {
            return;
        };
        let Some(item) = self.registry.get(identifier) else {
            log::debug!(
                "Ignoring {} for unregistered custom item {identifier}",
                event.get_name()
            );
            return;
        };

        log::debug!("Dispatching {} to custom item {identifier}", event.get_name());
        hook(item.as_ref(), &mut EventWrapper::new(stack, event));
    }
}

/// Handlers for events with a single acting stack, computed from the event.
macro_rules! single_stack_handlers {
    ($($event:ty => $hook:ident, |$ev:ident| $stack:expr;)*) => {
        $(
            #[async_trait]
            impl EventHandler<$event> for CustomItemListener {
                async fn handle_blocking(&self, $ev: &mut $event) {
                    let stack = $stack;
                    self.dispatch(stack, $ev, |item, wrapper| item.$hook(wrapper));
                }
            }
        )*
    };
}

single_stack_handlers! {
    BlockBreakEvent => on_block_break, |event| {
        event.player.as_ref().and_then(|player| player.held_item())
    };
    PlayerJoinEvent => on_player_join, |event| held_stack(&*event);
    PlayerLeaveEvent => on_player_quit, |event| held_stack(&*event);
    PlayerToggleSneakEvent => on_player_sneak, |event| held_stack(&*event);
    EnchantItemEvent => on_item_enchant, |event| Some(event.item.clone());
    ItemMergeEvent => on_item_merge, |event| Some(event.entity.item_stack.clone());
    ItemDespawnEvent => on_item_despawn, |event| Some(event.entity.item_stack.clone());
    InventoryPickupItemEvent => on_hopper_pickup, |event| Some(event.item.item_stack.clone());
    PlayerDropItemEvent => on_player_item_drop, |event| Some(event.item.item_stack.clone());
    PlayerPickupItemEvent => on_player_item_pickup, |event| Some(event.item.item_stack.clone());
    EntityDamageEvent => on_item_damage, |event| match &event.entity {
        DamagedEntity::Item(entity) => Some(entity.item_stack.clone()),
        DamagedEntity::Player(_) | DamagedEntity::Other(_) => None,
    };
    FurnaceBurnEvent => on_furnace_burn, |event| Some(event.fuel.clone());
    PlayerItemBreakEvent => on_player_item_break, |event| Some(event.item_stack.clone());
    PlayerItemDamageEvent => on_player_item_damage, |event| Some(event.item_stack.clone());
    PlayerInteractEvent => on_player_interact, |event| event.item.clone();
}

#[async_trait]
impl EventHandler<PlayerDeathEvent> for CustomItemListener {
    async fn handle_blocking(&self, event: &mut PlayerDeathEvent) {
        for stack in event.drops.clone() {
            self.dispatch(Some(stack), event, |item, wrapper| {
                item.on_player_death(wrapper);
            });
        }
    }
}

#[async_trait]
impl EventHandler<PlayerItemHeldEvent> for CustomItemListener {
    async fn handle_blocking(&self, event: &mut PlayerItemHeldEvent) {
        let player = event.get_player();
        let previous = player.stack_in_slot(event.previous_slot);
        let new = player.stack_in_slot(event.new_slot);
        for stack in [previous, new] {
            self.dispatch(stack, event, |item, wrapper| item.on_player_item_held(wrapper));
        }
    }
}

#[async_trait]
impl EventHandler<PrepareItemCraftEvent> for CustomItemListener {
    async fn handle_blocking(&self, event: &mut PrepareItemCraftEvent) {
        // Each custom item in the grid reacts once, however many slots it fills.
        let mut seen = FxHashSet::default();
        let ingredients: Vec<ItemStack> = event
            .matrix
            .iter()
            .flatten()
            .filter(|stack| identifier_of(stack).is_some_and(|id| seen.insert(id.to_string())))
            .cloned()
            .collect();

        for stack in ingredients {
            self.dispatch(Some(stack), event, |item, wrapper| item.on_item_craft(wrapper));
        }
    }
}

#[async_trait]
impl EventHandler<AnvilRepairEvent> for CustomItemListener {
    async fn handle_blocking(&self, event: &mut AnvilRepairEvent) {
        let inputs = [event.first.clone(), event.second.clone()];
        for stack in inputs {
            self.dispatch(stack, event, |item, wrapper| item.on_item_repair(wrapper));
        }
    }
}
