//! Custom items shared by the unit tests.

use parking_lot::Mutex;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use super::wrapper::{
    AnvilRepairWrapper, BlockBreakWrapper, EnchantItemWrapper, EntityDamageWrapper,
    FurnaceBurnWrapper, HopperPickupWrapper, ItemDespawnWrapper, ItemMergeWrapper,
    PlayerDeathWrapper, PlayerDropItemWrapper, PlayerInteractWrapper, PlayerItemBreakWrapper,
    PlayerItemDamageWrapper, PlayerItemHeldWrapper, PlayerJoinWrapper, PlayerPickupItemWrapper,
    PlayerQuitWrapper, PlayerToggleSneakWrapper, PrepareItemCraftWrapper,
};
use super::{
    CustomItem, apply_identifier_tag, guard_furnace_burn, guard_hopper_pickup, guard_item_craft,
    guard_item_damage, guard_item_enchant, guard_item_repair, tag_stack,
};
use crate::error::CustomItemError;
use crate::item::{Item, ItemStack};

/// Uses every default.
pub struct Talisman {
    identifier: String,
}

impl Talisman {
    pub fn new() -> Self {
        Self {
            identifier: "talisman".to_string(),
        }
    }
}

impl CustomItem for Talisman {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn get_item(&self) -> Result<ItemStack, CustomItemError> {
        let mut stack = ItemStack::new(1, Item::NETHER_STAR);
        tag_stack(self, &mut stack);
        Ok(stack)
    }
}

#[derive(Clone, Copy)]
pub struct Flags {
    pub enchantable: bool,
    pub burnable: bool,
    pub fuel: bool,
    pub repairable: bool,
    pub recipe_item: bool,
    pub hopper_collectible: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            enchantable: false,
            burnable: true,
            fuel: false,
            repairable: false,
            recipe_item: false,
            hopper_collectible: true,
        }
    }
}

/// Overrides the capability flags only.
pub struct FlagItem {
    identifier: String,
    flags: Flags,
}

impl FlagItem {
    pub fn new(identifier: &str, flags: Flags) -> Self {
        Self {
            identifier: identifier.to_string(),
            flags,
        }
    }
}

impl CustomItem for FlagItem {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn get_item(&self) -> Result<ItemStack, CustomItemError> {
        let mut stack = ItemStack::new(1, Item::PAPER);
        tag_stack(self, &mut stack);
        Ok(stack)
    }

    fn is_enchantable(&self) -> bool {
        self.flags.enchantable
    }

    fn is_burnable(&self) -> bool {
        self.flags.burnable
    }

    fn is_fuel(&self) -> bool {
        self.flags.fuel
    }

    fn is_repairable(&self) -> bool {
        self.flags.repairable
    }

    fn is_recipe_item(&self) -> bool {
        self.flags.recipe_item
    }

    fn is_hopper_collectible(&self) -> bool {
        self.flags.hopper_collectible
    }
}

/// Needs an author, so it can only be created through `create_signed`.
pub struct SignedBook {
    identifier: String,
}

impl SignedBook {
    pub fn new() -> Self {
        Self {
            identifier: "signed_book".to_string(),
        }
    }

    pub fn create_signed(&self, author: &str) -> ItemStack {
        let mut stack = ItemStack::new(1, Item::WRITTEN_BOOK);
        stack.nbt.put_string("author", author.to_string());
        tag_stack(self, &mut stack);
        stack
    }
}

impl CustomItem for SignedBook {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn get_item(&self) -> Result<ItemStack, CustomItemError> {
        Err(CustomItemError::UnsupportedFactory(self.identifier.clone()))
    }

    fn supports_default_factory(&self) -> bool {
        false
    }
}

/// Its factory tags the stack with somebody else's identifier.
pub struct Mislabeled;

impl CustomItem for Mislabeled {
    fn identifier(&self) -> &str {
        "mislabeled"
    }

    fn get_item(&self) -> Result<ItemStack, CustomItemError> {
        let mut stack = ItemStack::new(1, Item::STICK);
        apply_identifier_tag("talisman", &mut stack.nbt);
        Ok(stack)
    }
}

/// Keeps the default guards and adds behavior on top of them.
pub struct Wand {
    enchant_attempts: AtomicUsize,
    casts: AtomicUsize,
}

impl Wand {
    pub fn new() -> Self {
        Self {
            enchant_attempts: AtomicUsize::new(0),
            casts: AtomicUsize::new(0),
        }
    }

    pub fn enchant_attempts(&self) -> usize {
        self.enchant_attempts.load(Ordering::Relaxed)
    }

    pub fn casts(&self) -> usize {
        self.casts.load(Ordering::Relaxed)
    }
}

impl CustomItem for Wand {
    fn identifier(&self) -> &str {
        "wand"
    }

    fn get_item(&self) -> Result<ItemStack, CustomItemError> {
        let mut stack = ItemStack::new(1, Item::BLAZE_ROD);
        tag_stack(self, &mut stack);
        Ok(stack)
    }

    fn on_item_enchant(&self, wrapper: &mut EnchantItemWrapper<'_>) {
        guard_item_enchant(self, wrapper);
        self.enchant_attempts.fetch_add(1, Ordering::Relaxed);
    }

    fn on_player_interact(&self, wrapper: &mut PlayerInteractWrapper<'_>) {
        if wrapper.event().action.is_right_click() {
            wrapper.cancel();
            self.casts.fetch_add(1, Ordering::Relaxed);
        }
    }
}

/// Appends its identifier to a shared log whenever the hotbar slot holding it
/// is selected or left.
pub struct SlotTracker {
    identifier: &'static str,
    log: Arc<Mutex<Vec<&'static str>>>,
}

impl SlotTracker {
    pub fn new(identifier: &'static str, log: Arc<Mutex<Vec<&'static str>>>) -> Self {
        Self { identifier, log }
    }
}

impl CustomItem for SlotTracker {
    fn identifier(&self) -> &str {
        self.identifier
    }

    fn get_item(&self) -> Result<ItemStack, CustomItemError> {
        let mut stack = ItemStack::new(1, Item::IRON_AXE);
        tag_stack(self, &mut stack);
        Ok(stack)
    }

    fn on_player_item_held(&self, _wrapper: &mut PlayerItemHeldWrapper<'_>) {
        self.log.lock().push(self.identifier);
    }
}

/// Records the name of every hook it receives and otherwise behaves like
/// the defaults, with every capability denied.
pub struct Recorder {
    identifier: String,
    calls: Mutex<Vec<&'static str>>,
}

impl Recorder {
    pub fn new(identifier: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().clone()
    }

    fn record(&self, hook: &'static str) {
        self.calls.lock().push(hook);
    }
}

impl CustomItem for Recorder {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn get_item(&self) -> Result<ItemStack, CustomItemError> {
        let mut stack = ItemStack::new(1, Item::DIAMOND_SWORD);
        tag_stack(self, &mut stack);
        Ok(stack)
    }

    fn is_burnable(&self) -> bool {
        false
    }

    fn is_hopper_collectible(&self) -> bool {
        false
    }

    fn on_block_break(&self, _wrapper: &mut BlockBreakWrapper<'_>) {
        self.record("block_break");
    }

    fn on_item_enchant(&self, wrapper: &mut EnchantItemWrapper<'_>) {
        guard_item_enchant(self, wrapper);
        self.record("item_enchant");
    }

    fn on_item_merge(&self, _wrapper: &mut ItemMergeWrapper<'_>) {
        self.record("item_merge");
    }

    fn on_item_despawn(&self, _wrapper: &mut ItemDespawnWrapper<'_>) {
        self.record("item_despawn");
    }

    fn on_player_join(&self, _wrapper: &mut PlayerJoinWrapper<'_>) {
        self.record("player_join");
    }

    fn on_player_quit(&self, _wrapper: &mut PlayerQuitWrapper<'_>) {
        self.record("player_quit");
    }

    fn on_player_death(&self, _wrapper: &mut PlayerDeathWrapper<'_>) {
        self.record("player_death");
    }

    fn on_furnace_burn(&self, wrapper: &mut FurnaceBurnWrapper<'_>) {
        guard_furnace_burn(self, wrapper);
        self.record("furnace_burn");
    }

    fn on_hopper_pickup(&self, wrapper: &mut HopperPickupWrapper<'_>) {
        guard_hopper_pickup(self, wrapper);
        self.record("hopper_pickup");
    }

    fn on_player_item_drop(&self, _wrapper: &mut PlayerDropItemWrapper<'_>) {
        self.record("player_item_drop");
    }

    fn on_player_item_break(&self, _wrapper: &mut PlayerItemBreakWrapper<'_>) {
        self.record("player_item_break");
    }

    fn on_player_item_damage(&self, _wrapper: &mut PlayerItemDamageWrapper<'_>) {
        self.record("player_item_damage");
    }

    fn on_player_item_held(&self, _wrapper: &mut PlayerItemHeldWrapper<'_>) {
        self.record("player_item_held");
    }

    fn on_player_item_pickup(&self, _wrapper: &mut PlayerPickupItemWrapper<'_>) {
        self.record("player_item_pickup");
    }

    fn on_player_sneak(&self, _wrapper: &mut PlayerToggleSneakWrapper<'_>) {
        self.record("player_sneak");
    }

    fn on_player_interact(&self, _wrapper: &mut PlayerInteractWrapper<'_>) {
        self.record("player_interact");
    }

    fn on_item_damage(&self, wrapper: &mut EntityDamageWrapper<'_>) {
        guard_item_damage(self, wrapper);
        self.record("item_damage");
    }

    fn on_item_craft(&self, wrapper: &mut PrepareItemCraftWrapper<'_>) {
        guard_item_craft(self, wrapper);
        self.record("item_craft");
    }

    fn on_item_repair(&self, wrapper: &mut AnvilRepairWrapper<'_>) {
        guard_item_repair(self, wrapper);
        self.record("item_repair");
    }
}
