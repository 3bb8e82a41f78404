use citem_nbt::NbtCompound;

use crate::error::CustomItemError;
use crate::item::ItemStack;

pub mod registry;
pub mod wrapper;

#[cfg(test)]
pub(crate) mod test_items;

use wrapper::{
    AnvilRepairWrapper, BlockBreakWrapper, EnchantItemWrapper, EntityDamageWrapper,
    FurnaceBurnWrapper, HopperPickupWrapper, ItemDespawnWrapper, ItemMergeWrapper,
    PlayerDeathWrapper, PlayerDropItemWrapper, PlayerInteractWrapper, PlayerItemBreakWrapper,
    PlayerItemDamageWrapper, PlayerItemHeldWrapper, PlayerJoinWrapper, PlayerPickupItemWrapper,
    PlayerQuitWrapper, PlayerToggleSneakWrapper, PrepareItemCraftWrapper,
};

/// NBT key under which a stack stores the identifier of its custom item.
pub const CUSTOM_ITEM_NBT: &str = "su-citem";

/// Writes `identifier` under [`CUSTOM_ITEM_NBT`]. Applying it again replaces
/// the previous value, the key never appears twice.
pub fn apply_identifier_tag(identifier: &str, nbt: &mut NbtCompound) {
    nbt.put_string(CUSTOM_ITEM_NBT, identifier.to_string());
}

/// Tags `stack` as an instance of `item`.
pub fn tag_stack<T: CustomItem + ?Sized>(item: &T, stack: &mut ItemStack) {
    apply_identifier_tag(item.identifier(), &mut stack.nbt);
}

/// The custom item identifier stored on `stack`, if it has one.
#[must_use]
pub fn identifier_of(stack: &ItemStack) -> Option<&str> {
    stack.nbt.get_string(CUSTOM_ITEM_NBT)
}

/// A kind of custom item.
///
/// An implementation is created once per kind and registered in a
/// [`registry::CustomItemRegistry`]. Physical items are ordinary
/// [`ItemStack`]s carrying the identifier tag; every event involving such a
/// stack is routed to the matching hook of its descriptor.
///
/// All capability flags and hooks have defaults. The hooks guarded by a flag
/// cancel (or otherwise suppress) their event when the flag forbids the
/// action. Overrides that want to keep that behavior call the matching
/// `guard_*` function before doing their own work.
pub trait CustomItem: Send + Sync {
    /// The identifier given at construction. Must not change afterwards.
    fn identifier(&self) -> &str;

    /// Creates a new stack of this item, tagged with [`tag_stack`].
    ///
    /// Items that need more parameters to be built return
    /// [`CustomItemError::UnsupportedFactory`], provide their own factory
    /// method and override [`CustomItem::supports_default_factory`].
    fn get_item(&self) -> Result<ItemStack, CustomItemError>;

    /// Whether [`CustomItem::get_item`] can produce a stack.
    fn supports_default_factory(&self) -> bool {
        true
    }

    /// Whether the item can be enchanted in an enchanting table.
    fn is_enchantable(&self) -> bool {
        false
    }

    /// Whether the item can be destroyed by fire once dropped.
    fn is_burnable(&self) -> bool {
        true
    }

    /// Whether furnaces may burn the item as fuel.
    fn is_fuel(&self) -> bool {
        false
    }

    /// Whether the item may be put in an anvil input slot.
    fn is_repairable(&self) -> bool {
        false
    }

    /// Whether the item may be used as a crafting ingredient.
    fn is_recipe_item(&self) -> bool {
        false
    }

    /// Whether hoppers may collect the item.
    fn is_hopper_collectible(&self) -> bool {
        true
    }

    /// A block is broken by a player holding this item.
    fn on_block_break(&self, _wrapper: &mut BlockBreakWrapper<'_>) {}

    /// This item is enchanted in an enchanting table.
    fn on_item_enchant(&self, wrapper: &mut EnchantItemWrapper<'_>) {
        guard_item_enchant(self, wrapper);
    }

    /// This item, lying on the ground, merges with another one.
    fn on_item_merge(&self, _wrapper: &mut ItemMergeWrapper<'_>) {}

    /// This item, lying on the ground, despawns.
    fn on_item_despawn(&self, _wrapper: &mut ItemDespawnWrapper<'_>) {}

    /// A player joins holding this item.
    fn on_player_join(&self, _wrapper: &mut PlayerJoinWrapper<'_>) {}

    /// A player quits holding this item.
    fn on_player_quit(&self, _wrapper: &mut PlayerQuitWrapper<'_>) {}

    /// A player dies with this item among their drops.
    fn on_player_death(&self, _wrapper: &mut PlayerDeathWrapper<'_>) {}

    /// A furnace is about to burn this item as fuel.
    fn on_furnace_burn(&self, wrapper: &mut FurnaceBurnWrapper<'_>) {
        guard_furnace_burn(self, wrapper);
    }

    /// A hopper is about to collect this item.
    fn on_hopper_pickup(&self, wrapper: &mut HopperPickupWrapper<'_>) {
        guard_hopper_pickup(self, wrapper);
    }

    /// A player drops this item.
    fn on_player_item_drop(&self, _wrapper: &mut PlayerDropItemWrapper<'_>) {}

    /// This item runs out of durability while a player uses it.
    fn on_player_item_break(&self, _wrapper: &mut PlayerItemBreakWrapper<'_>) {}

    /// This item loses durability while a player uses it.
    fn on_player_item_damage(&self, _wrapper: &mut PlayerItemDamageWrapper<'_>) {}

    /// A player selects or deselects the hotbar slot holding this item.
    fn on_player_item_held(&self, _wrapper: &mut PlayerItemHeldWrapper<'_>) {}

    /// A player picks this item up.
    fn on_player_item_pickup(&self, _wrapper: &mut PlayerPickupItemWrapper<'_>) {}

    /// A player starts or stops sneaking while holding this item.
    fn on_player_sneak(&self, _wrapper: &mut PlayerToggleSneakWrapper<'_>) {}

    /// A player interacts while holding this item.
    fn on_player_interact(&self, _wrapper: &mut PlayerInteractWrapper<'_>) {}

    /// This item, lying on the ground, takes damage (cactus, lava, fire, explosions...).
    fn on_item_damage(&self, wrapper: &mut EntityDamageWrapper<'_>) {
        guard_item_damage(self, wrapper);
    }

    /// This item is part of a crafting grid.
    fn on_item_craft(&self, wrapper: &mut PrepareItemCraftWrapper<'_>) {
        guard_item_craft(self, wrapper);
    }

    /// This item is put in an anvil input slot.
    fn on_item_repair(&self, wrapper: &mut AnvilRepairWrapper<'_>) {
        guard_item_repair(self, wrapper);
    }
}

/// Cancels the enchantment unless `item` is enchantable.
pub fn guard_item_enchant<T: CustomItem + ?Sized>(
    item: &T,
    wrapper: &mut EnchantItemWrapper<'_>,
) {
    if item.is_enchantable() {
        return;
    }
    wrapper.cancel();
}

/// Keeps the furnace from burning `item` unless it is fuel.
pub fn guard_furnace_burn<T: CustomItem + ?Sized>(
    item: &T,
    wrapper: &mut FurnaceBurnWrapper<'_>,
) {
    if item.is_fuel() {
        return;
    }
    wrapper.cancel();
}

/// Keeps hoppers from collecting `item` unless it is hopper collectible.
pub fn guard_hopper_pickup<T: CustomItem + ?Sized>(
    item: &T,
    wrapper: &mut HopperPickupWrapper<'_>,
) {
    if item.is_hopper_collectible() {
        return;
    }
    wrapper.cancel();
}

/// Cancels fire damage to a dropped `item` that is not burnable. Any other
/// damage cause goes through.
pub fn guard_item_damage<T: CustomItem + ?Sized>(
    item: &T,
    wrapper: &mut EntityDamageWrapper<'_>,
) {
    if item.is_burnable() {
        return;
    }
    if !wrapper.event().cause.is_fire() {
        return;
    }
    wrapper.cancel();
}

/// Clears the crafting result unless `item` is a recipe item.
pub fn guard_item_craft<T: CustomItem + ?Sized>(
    item: &T,
    wrapper: &mut PrepareItemCraftWrapper<'_>,
) {
    if item.is_recipe_item() {
        return;
    }
    wrapper.event_mut().set_result(None);
}

/// Keeps `item` out of the anvil unless it is repairable.
pub fn guard_item_repair<T: CustomItem + ?Sized>(
    item: &T,
    wrapper: &mut AnvilRepairWrapper<'_>,
) {
    if item.is_repairable() {
        return;
    }
    wrapper.cancel();
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use super::test_items::{FlagItem, Flags, SignedBook, Talisman, Wand};
    use super::wrapper::EventWrapper;
    use super::{CUSTOM_ITEM_NBT, CustomItem, apply_identifier_tag, identifier_of};
    use crate::entity::{
        ItemEntity,
        player::{GameProfile, Player},
    };
    use crate::error::CustomItemError;
    use crate::event::{
        Cancellable,
        inventory::{
            AnvilRepairEvent, FurnaceBurnEvent, InventoryPickupItemEvent, PrepareItemCraftEvent,
        },
        item::{DamageCause, DamagedEntity, EnchantItemEvent, EntityDamageEvent},
        player::{InteractAction, PlayerInteractEvent},
    };
    use crate::item::{Item, ItemStack};
    use crate::world::BlockPos;
    use citem_nbt::NbtCompound;

    fn player() -> Arc<Player> {
        Arc::new(Player::new(GameProfile::offline("Tester")))
    }

    fn enchant(item: &dyn CustomItem) -> bool {
        let stack = item.get_item().unwrap();
        let mut event = EnchantItemEvent::new(
            player(),
            BlockPos::new(0, 64, 0),
            stack.clone(),
            3,
            vec![("minecraft:sharpness".to_string(), 2)],
        );
        item.on_item_enchant(&mut EventWrapper::new(stack, &mut event));
        event.cancelled()
    }

    fn burn(item: &dyn CustomItem) -> bool {
        let stack = item.get_item().unwrap();
        let mut event = FurnaceBurnEvent::new(BlockPos::new(1, 64, 1), stack.clone(), 1600);
        item.on_furnace_burn(&mut EventWrapper::new(stack, &mut event));
        event.cancelled()
    }

    fn hopper(item: &dyn CustomItem) -> bool {
        let stack = item.get_item().unwrap();
        let entity = Arc::new(ItemEntity::new(7, stack.clone()));
        let mut event = InventoryPickupItemEvent::new(BlockPos::new(0, 63, 0), entity);
        item.on_hopper_pickup(&mut EventWrapper::new(stack, &mut event));
        event.cancelled()
    }

    fn repair(item: &dyn CustomItem) -> bool {
        let stack = item.get_item().unwrap();
        let mut event = AnvilRepairEvent::new(player(), Some(stack.clone()), None, 1);
        item.on_item_repair(&mut EventWrapper::new(stack, &mut event));
        event.cancelled()
    }

    fn damage(item: &dyn CustomItem, cause: DamageCause) -> bool {
        let stack = item.get_item().unwrap();
        let entity = Arc::new(ItemEntity::new(9, stack.clone()));
        let mut event = EntityDamageEvent::new(DamagedEntity::Item(entity), cause, 1.0);
        item.on_item_damage(&mut EventWrapper::new(stack, &mut event));
        event.cancelled()
    }

    fn craft_keeps_result(item: &dyn CustomItem) -> bool {
        let stack = item.get_item().unwrap();
        let mut event = PrepareItemCraftEvent::new(
            player(),
            vec![Some(stack.clone()), None, Some(ItemStack::new(1, Item::STICK))],
            Some(ItemStack::new(1, Item::DIAMOND_PICKAXE)),
        );
        item.on_item_craft(&mut EventWrapper::new(stack, &mut event));
        event.result().is_some()
    }

    #[test]
    fn test_get_item_is_tagged() {
        let talisman = Talisman::new();
        let stack = talisman.get_item().unwrap();
        assert_eq!(identifier_of(&stack), Some(talisman.identifier()));
        assert_eq!(stack.item, Item::NETHER_STAR);
    }

    #[test]
    fn test_identifier_is_kept() {
        let item = FlagItem::new("grappling_hook", Flags::default());
        assert_eq!(item.identifier(), "grappling_hook");
        let _ = item.get_item();
        assert_eq!(item.identifier(), "grappling_hook");
    }

    #[test]
    fn test_default_flags() {
        let talisman = Talisman::new();
        assert!(talisman.supports_default_factory());
        assert!(!talisman.is_enchantable());
        assert!(talisman.is_burnable());
        assert!(!talisman.is_fuel());
        assert!(!talisman.is_repairable());
        assert!(!talisman.is_recipe_item());
        assert!(talisman.is_hopper_collectible());
    }

    #[test]
    fn test_apply_tag_twice_keeps_one_entry() {
        let mut nbt = NbtCompound::new();
        nbt.put_int("CustomModelData", 4);
        apply_identifier_tag("talisman", &mut nbt);
        apply_identifier_tag("talisman", &mut nbt);

        assert_eq!(nbt.len(), 2);
        assert_eq!(nbt.get_string(CUSTOM_ITEM_NBT), Some("talisman"));

        apply_identifier_tag("amulet", &mut nbt);
        assert_eq!(nbt.len(), 2);
        assert_eq!(nbt.get_string(CUSTOM_ITEM_NBT), Some("amulet"));
    }

    #[test]
    fn test_untagged_stack_has_no_identifier() {
        assert_eq!(identifier_of(&ItemStack::new(1, Item::PAPER)), None);
    }

    #[test]
    fn test_enchant_guard() {
        assert!(enchant(&Talisman::new()));
        let enchantable = FlagItem::new(
            "rune_blade",
            Flags {
                enchantable: true,
                ..Flags::default()
            },
        );
        assert!(!enchant(&enchantable));
    }

    #[test]
    fn test_furnace_guard() {
        assert!(burn(&Talisman::new()));
        let fuel = FlagItem::new(
            "eternal_coal",
            Flags {
                fuel: true,
                ..Flags::default()
            },
        );
        assert!(!burn(&fuel));
    }

    #[test]
    fn test_hopper_guard() {
        assert!(!hopper(&Talisman::new()));
        let sticky = FlagItem::new(
            "sticky_orb",
            Flags {
                hopper_collectible: false,
                ..Flags::default()
            },
        );
        assert!(hopper(&sticky));
    }

    #[test]
    fn test_repair_guard() {
        assert!(repair(&Talisman::new()));
        let repairable = FlagItem::new(
            "mithril_pick",
            Flags {
                repairable: true,
                ..Flags::default()
            },
        );
        assert!(!repair(&repairable));
    }

    #[test]
    fn test_damage_guard_only_blocks_fire() {
        let fireproof = FlagItem::new(
            "phoenix_feather",
            Flags {
                burnable: false,
                ..Flags::default()
            },
        );
        assert!(damage(&fireproof, DamageCause::Fire));
        assert!(damage(&fireproof, DamageCause::FireTick));
        assert!(!damage(&fireproof, DamageCause::Lava));
        assert!(!damage(&fireproof, DamageCause::BlockExplosion));
        assert!(!damage(&fireproof, DamageCause::Contact));

        let talisman = Talisman::new();
        assert!(!damage(&talisman, DamageCause::Fire));
        assert!(!damage(&talisman, DamageCause::FireTick));
    }

    #[test]
    fn test_craft_guard() {
        assert!(!craft_keeps_result(&Talisman::new()));
        let ingredient = FlagItem::new(
            "magic_dust",
            Flags {
                recipe_item: true,
                ..Flags::default()
            },
        );
        assert!(craft_keeps_result(&ingredient));
    }

    #[test]
    fn test_unsupported_factory() {
        let book = SignedBook::new();
        assert!(!book.supports_default_factory());
        assert_eq!(
            book.get_item(),
            Err(CustomItemError::UnsupportedFactory("signed_book".to_string()))
        );

        let stack = book.create_signed("Notch");
        assert_eq!(identifier_of(&stack), Some("signed_book"));
        assert_eq!(stack.nbt.get_string("author"), Some("Notch"));
    }

    #[test]
    fn test_override_runs_default_guard_first() {
        let wand = Wand::new();
        let stack = wand.get_item().unwrap();

        let mut event =
            EnchantItemEvent::new(player(), BlockPos::default(), stack.clone(), 1, vec![]);
        wand.on_item_enchant(&mut EventWrapper::new(stack.clone(), &mut event));
        assert!(event.cancelled());
        assert_eq!(wand.enchant_attempts(), 1);

        let mut event = PlayerInteractEvent::new(
            player(),
            InteractAction::RightClickAir,
            Some(stack.clone()),
            None,
        );
        wand.on_player_interact(&mut EventWrapper::new(stack, &mut event));
        assert!(event.cancelled());
        assert_eq!(wand.casts(), 1);
    }
}
