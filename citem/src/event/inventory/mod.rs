//! Events fired by containers: furnaces, hoppers, crafting grids and anvils.

mod anvil_repair;
mod furnace_burn;
mod hopper_pickup;
mod prepare_craft;

pub use anvil_repair::AnvilRepairEvent;
pub use furnace_burn::FurnaceBurnEvent;
pub use hopper_pickup::InventoryPickupItemEvent;
pub use prepare_craft::PrepareItemCraftEvent;
