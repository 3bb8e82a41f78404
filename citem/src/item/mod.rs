use citem_nbt::NbtCompound;

use crate::error::CustomItemError;

/// A static item type, identified by its registry key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    pub registry_key: &'static str,
    pub max_stack_size: u8,
    /// Durability of the item, `None` for items that cannot be damaged.
    pub max_damage: Option<u16>,
}

impl Item {
    pub const AIR: Item = Item::stackable("air");
    pub const STICK: Item = Item::stackable("stick");
    pub const PAPER: Item = Item::stackable("paper");
    pub const COAL: Item = Item::stackable("coal");
    pub const BLAZE_ROD: Item = Item::stackable("blaze_rod");
    pub const FIRE_CHARGE: Item = Item::stackable("fire_charge");
    pub const NETHER_STAR: Item = Item::stackable("nether_star");
    pub const BOOK: Item = Item::stackable("book");
    pub const WRITTEN_BOOK: Item = Item {
        registry_key: "written_book",
        max_stack_size: 16,
        max_damage: None,
    };
    pub const DIAMOND_SWORD: Item = Item::tool("diamond_sword", 1561);
    pub const DIAMOND_PICKAXE: Item = Item::tool("diamond_pickaxe", 1561);
    pub const IRON_AXE: Item = Item::tool("iron_axe", 250);

    const ALL: [Item; 12] = [
        Item::AIR,
        Item::STICK,
        Item::PAPER,
        Item::COAL,
        Item::BLAZE_ROD,
        Item::FIRE_CHARGE,
        Item::NETHER_STAR,
        Item::BOOK,
        Item::WRITTEN_BOOK,
        Item::DIAMOND_SWORD,
        Item::DIAMOND_PICKAXE,
        Item::IRON_AXE,
    ];

    const fn stackable(registry_key: &'static str) -> Self {
        Self {
            registry_key,
            max_stack_size: 64,
            max_damage: None,
        }
    }

    const fn tool(registry_key: &'static str, max_damage: u16) -> Self {
        Self {
            registry_key,
            max_stack_size: 1,
            max_damage: Some(max_damage),
        }
    }

    /// Looks an item up by its key, with or without the `minecraft:` namespace.
    #[must_use]
    pub fn from_registry_key(key: &str) -> Option<Self> {
        let key = key.strip_prefix("minecraft:").unwrap_or(key);
        Self::ALL
            .into_iter()
            .find(|item| item.registry_key == key)
    }

    #[must_use]
    pub fn namespaced_key(&self) -> String {
        format!("minecraft:{}", self.registry_key)
    }
}

/// A physical item instance: an item type, a count and its NBT metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemStack {
    pub item_count: u8,
    pub item: Item,
    pub nbt: NbtCompound,
}

impl ItemStack {
    #[must_use]
    pub fn new(item_count: u8, item: Item) -> Self {
        Self {
            item_count,
            item,
            nbt: NbtCompound::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.item_count == 0 || self.item == Item::AIR
    }

    /// Whether both stacks could merge into one, ignoring their counts.
    #[must_use]
    pub fn is_stackable_with(&self, other: &Self) -> bool {
        self.item == other.item && self.nbt == other.nbt && self.item.max_stack_size > 1
    }

    /// Saves the stack as `{id, count, tag}`. The `tag` entry is left out
    /// when the stack carries no metadata.
    #[must_use]
    pub fn write_nbt(&self) -> NbtCompound {
        let mut compound = NbtCompound::new();
        compound.put_string("id", self.item.namespaced_key());
        compound.put_int("count", i32::from(self.item_count));
        if !self.nbt.is_empty() {
            compound.put_component("tag", self.nbt.clone());
        }
        compound
    }

    pub fn read_nbt(compound: &NbtCompound) -> Result<Self, CustomItemError> {
        let id = compound
            .get_string("id")
            .ok_or(CustomItemError::MalformedStack("missing id"))?;
        let item = Item::from_registry_key(id)
            .ok_or_else(|| CustomItemError::UnknownItem(id.to_string()))?;
        let count = compound
            .get_int("count")
            .ok_or(CustomItemError::MalformedStack("missing count"))?;
        let item_count = u8::try_from(count)
            .map_err(|_| CustomItemError::MalformedStack("count out of range"))?;

        Ok(Self {
            item_count,
            item,
            nbt: compound.get_compound("tag").cloned().unwrap_or_default(),
        })
    }
}
