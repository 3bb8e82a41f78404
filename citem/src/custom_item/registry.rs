use citem_config::RegistryConfig;
use rustc_hash::FxHashMap;
use std::sync::Arc;

use super::{CustomItem, identifier_of};
use crate::error::CustomItemError;
use crate::item::ItemStack;

/// Maps every identifier to the one descriptor of that kind.
///
/// Build it once at startup, then share it behind an `Arc`; lookups never
/// lock.
#[derive(Default)]
pub struct CustomItemRegistry {
    items: FxHashMap<String, Arc<dyn CustomItem>>,
    config: RegistryConfig,
}

impl CustomItemRegistry {
    #[must_use]
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            items: FxHashMap::default(),
            config,
        }
    }

    pub fn register<T: CustomItem + 'static>(&mut self, item: T) -> Result<(), CustomItemError> {
        self.register_arc(Arc::new(item))
    }

    /// Registers an already shared descriptor.
    ///
    /// Rejects empty identifiers and, unless `allow_replace` is set, identifiers
    /// that are taken. With `verify_factory`, items supporting the default
    /// factory must return a stack tagged with their own identifier.
    pub fn register_arc(&mut self, item: Arc<dyn CustomItem>) -> Result<(), CustomItemError> {
        let identifier = item.identifier();
        if identifier.is_empty() {
            return Err(CustomItemError::EmptyIdentifier);
        }

        if self.config.verify_factory && item.supports_default_factory() {
            let stack = item.get_item()?;
            let found = identifier_of(&stack);
            if found != Some(identifier) {
                return Err(CustomItemError::TagMismatch {
                    expected: identifier.to_string(),
                    found: found.map(str::to_string),
                });
            }
        }

        if self.items.contains_key(identifier) {
            if !self.config.allow_replace {
                return Err(CustomItemError::DuplicateIdentifier(identifier.to_string()));
            }
            log::warn!("Replacing already registered custom item {identifier}");
        }

        log::info!("Registered custom item {identifier}");
        self.items.insert(identifier.to_string(), item);
        Ok(())
    }

    pub fn unregister(&mut self, identifier: &str) -> Option<Arc<dyn CustomItem>> {
        self.items.remove(identifier)
    }

    #[must_use]
    pub fn get(&self, identifier: &str) -> Option<&Arc<dyn CustomItem>> {
        self.items.get(identifier)
    }

    /// The descriptor a stack was created by, found through its tag.
    #[must_use]
    pub fn resolve(&self, stack: &ItemStack) -> Option<&Arc<dyn CustomItem>> {
        identifier_of(stack).and_then(|identifier| self.get(identifier))
    }

    /// Creates a stack through the default factory of the registered item.
    pub fn create_item(&self, identifier: &str) -> Result<ItemStack, CustomItemError> {
        self.get(identifier)
            .ok_or_else(|| CustomItemError::UnknownIdentifier(identifier.to_string()))?
            .get_item()
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
