use parking_lot::Mutex;
use uuid::Uuid;

use crate::item::ItemStack;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameProfile {
    pub id: Uuid,
    pub name: String,
}

impl GameProfile {
    /// Profile of a player that did not authenticate, with the same name based
    /// UUID on every join.
    #[must_use]
    pub fn offline(name: &str) -> Self {
        Self {
            id: Uuid::new_v3(&Uuid::NAMESPACE_OID, format!("OfflinePlayer:{name}").as_bytes()),
            name: name.to_string(),
        }
    }
}

pub struct PlayerInventory {
    items: Vec<Option<ItemStack>>,
    selected_slot: usize,
}

impl PlayerInventory {
    pub const MAIN_SIZE: usize = 36;
    pub const HOTBAR_SIZE: usize = 9;

    #[must_use]
    pub fn new() -> Self {
        Self {
            items: vec![None; Self::MAIN_SIZE],
            selected_slot: 0,
        }
    }

    #[must_use]
    pub fn selected_slot(&self) -> usize {
        self.selected_slot
    }

    /// Selects a hotbar slot. Returns false and keeps the current selection
    /// when `slot` is outside the hotbar.
    pub fn set_selected_slot(&mut self, slot: usize) -> bool {
        if slot >= Self::HOTBAR_SIZE {
            return false;
        }
        self.selected_slot = slot;
        true
    }

    #[must_use]
    pub fn get_stack(&self, slot: usize) -> Option<&ItemStack> {
        self.items.get(slot).and_then(Option::as_ref)
    }

    /// Replaces the stack in `slot`, returning what was there before.
    pub fn set_stack(&mut self, slot: usize, stack: Option<ItemStack>) -> Option<ItemStack> {
        let entry = self.items.get_mut(slot)?;
        std::mem::replace(entry, stack)
    }

    #[must_use]
    pub fn held_item(&self) -> Option<&ItemStack> {
        self.get_stack(self.selected_slot)
    }
}

impl Default for PlayerInventory {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Player {
    pub gameprofile: GameProfile,
    pub inventory: Mutex<PlayerInventory>,
}

impl Player {
    #[must_use]
    pub fn new(gameprofile: GameProfile) -> Self {
        Self {
            gameprofile,
            inventory: Mutex::new(PlayerInventory::new()),
        }
    }

    /// A copy of the stack in the selected hotbar slot.
    #[must_use]
    pub fn held_item(&self) -> Option<ItemStack> {
        self.inventory.lock().held_item().cloned()
    }

    #[must_use]
    pub fn stack_in_slot(&self, slot: usize) -> Option<ItemStack> {
        self.inventory.lock().get_stack(slot).cloned()
    }
}
