//! Custom items for a Minecraft server plugin.
//!
//! A custom item is an ordinary [`item::ItemStack`] whose NBT carries the
//! identifier of a [`custom_item::CustomItem`] descriptor. The
//! [`listener::CustomItemListener`] resolves that identifier for every event
//! fired on the [`bus::EventBus`] and hands the event to the descriptor's hook.

pub mod bus;
pub mod custom_item;
pub mod entity;
pub mod error;
pub mod event;
pub mod item;
pub mod listener;
pub mod logging;
pub mod world;

pub use bus::{EventBus, EventHandler};
pub use custom_item::{
    CUSTOM_ITEM_NBT, CustomItem, apply_identifier_tag, identifier_of,
    registry::CustomItemRegistry, tag_stack, wrapper::EventWrapper,
};
pub use error::CustomItemError;
pub use listener::CustomItemListener;

#[cfg(test)]
mod test {
    use bytes::Bytes;
    use citem_config::{CustomItemsConfig, LoadConfiguration};
    use citem_nbt::NbtCompound;
    use std::sync::Arc;

    use crate::custom_item::test_items::{SignedBook, Talisman};
    use crate::entity::player::{GameProfile, Player};
    use crate::event::{Cancellable, inventory::AnvilRepairEvent};
    use crate::item::ItemStack;
    use crate::{CustomItem, CustomItemListener, CustomItemRegistry, EventBus, identifier_of};

    #[test]
    fn test_tag_survives_binary_persistence() {
        let book = SignedBook::new();
        let stack = book.create_signed("Notch");

        let bytes: Bytes = stack.write_nbt().write_unnamed().unwrap();
        let mut buf = bytes.clone();
        let compound = NbtCompound::read_unnamed(&mut buf).unwrap();
        let restored = ItemStack::read_nbt(&compound).unwrap();

        assert_eq!(restored, stack);
        assert_eq!(identifier_of(&restored), Some("signed_book"));
        assert_eq!(restored.nbt.get_string("author"), Some("Notch"));
    }

    #[tokio::test]
    async fn test_setup_from_config_file() {
        let exec_dir = tempfile::tempdir().unwrap();
        let config = CustomItemsConfig::load(exec_dir.path()).unwrap();

        let mut registry = CustomItemRegistry::new(config.registry.clone());
        registry.register(Talisman::new()).unwrap();
        let registry = Arc::new(registry);

        let bus = EventBus::new();
        Arc::new(CustomItemListener::new(registry.clone()))
            .register(&bus, &config.listener)
            .await;

        let player = Arc::new(Player::new(GameProfile::offline("Tester")));
        let talisman = registry.create_item("talisman").unwrap();
        let event = bus
            .fire(AnvilRepairEvent::new(player, Some(talisman), None, 3))
            .await;
        assert!(event.cancelled());
        assert_eq!(
            registry.get("talisman").map(|item| item.identifier()),
            Some("talisman")
        );
    }
}
