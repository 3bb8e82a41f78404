use async_trait::async_trait;
use futures::future::join_all;
use std::{collections::HashMap, marker::PhantomData, sync::Arc};
use tokio::sync::RwLock;

use crate::event::{Event, EventPriority};

/// A trait for handling events dynamically.
///
/// This trait allows for handling events of any type that implements the `Event` trait.
#[async_trait]
pub trait DynEventHandler: Send + Sync {
    /// Asynchronously handles a dynamic event.
    ///
    /// # Arguments
    /// - `event`: A reference to the event to handle.
    async fn handle_dyn(&self, event: &(dyn Event + Send + Sync));

    /// Asynchronously handles a blocking dynamic event.
    ///
    /// # Arguments
    /// - `event`: A mutable reference to the event to handle.
    async fn handle_blocking_dyn(&self, event: &mut (dyn Event + Send + Sync));

    /// Checks if the event handler is blocking.
    fn is_blocking(&self) -> bool;

    /// Retrieves the priority of the event handler.
    fn get_priority(&self) -> EventPriority;
}

/// A trait for handling specific events.
///
/// This trait allows for handling events of a specific type that implements the `Event` trait.
#[async_trait]
pub trait EventHandler<E: Event>: Send + Sync {
    /// Asynchronously handles an event of type `E`.
    ///
    /// # Arguments
    /// - `event`: A reference to the event to handle.
    async fn handle(&self, _event: &E) {}

    /// Asynchronously handles a blocking event of type `E`.
    ///
    /// # Arguments
    /// - `event`: A mutable reference to the event to handle.
    async fn handle_blocking(&self, _event: &mut E) {}
}

/// A struct representing a typed event handler.
///
/// This struct holds a reference to an event handler, its priority, and whether it is blocking.
struct TypedEventHandler<E, H>
where
    E: Event + Send + Sync + 'static,
    H: EventHandler<E> + Send + Sync,
{
    handler: Arc<H>,
    priority: EventPriority,
    blocking: bool,
    _phantom: PhantomData<fn(E)>,
}

#[async_trait]
impl<E, H> DynEventHandler for TypedEventHandler<E, H>
where
    E: Event + Send + Sync + 'static,
    H: EventHandler<E> + Send + Sync,
{
    async fn handle_blocking_dyn(&self, event: &mut (dyn Event + Send + Sync)) {
        if let Some(event) = event.as_any_mut().downcast_mut::<E>() {
            self.handler.handle_blocking(event).await;
        }
    }

    async fn handle_dyn(&self, event: &(dyn Event + Send + Sync)) {
        if let Some(event) = event.as_any().downcast_ref::<E>() {
            self.handler.handle(event).await;
        }
    }

    fn is_blocking(&self) -> bool {
        self.blocking
    }

    fn get_priority(&self) -> EventPriority {
        self.priority
    }
}

/// A type alias for a map of event handlers, where the key is the event name
/// and the value is the list of handlers, lowest priority first.
type HandlerMap = HashMap<&'static str, Vec<Box<dyn DynEventHandler>>>;

/// Routes events fired by the host to every handler registered for them.
#[derive(Default)]
pub struct EventBus {
    handlers: Arc<RwLock<HandlerMap>>,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event handler.
    ///
    /// Blocking handlers receive the event mutably and run one after another;
    /// non-blocking handlers only observe it.
    pub async fn register<E, H>(&self, handler: Arc<H>, priority: EventPriority, blocking: bool)
    where
        E: Event + Send + Sync + 'static,
        H: EventHandler<E> + 'static,
    {
        let mut handlers = self.handlers.write().await;
        let typed_handler = TypedEventHandler {
            handler,
            priority,
            blocking,
            _phantom: PhantomData,
        };

        let entry = handlers.entry(E::get_name_static()).or_default();
        // Lowest priority first, keeping registration order within a priority.
        let index = entry.partition_point(|existing| existing.get_priority() >= priority);
        entry.insert(index, Box::new(typed_handler));
        log::debug!(
            "Registered {} handler for {} at {:?} priority",
            if blocking { "blocking" } else { "async" },
            E::get_name_static(),
            priority
        );
    }

    /// Number of handlers registered for `E`.
    pub async fn handler_count<E: Event>(&self) -> usize {
        self.handlers
            .read()
            .await
            .get(E::get_name_static())
            .map_or(0, Vec::len)
    }

    /// Fire an event to all registered handlers and hand it back with the
    /// changes the blocking handlers made.
    pub async fn fire<E: Event + Send + Sync + 'static>(&self, mut event: E) -> E {
        let handlers = self.handlers.read().await;
        if let Some(handlers) = handlers.get(E::get_name_static()) {
            let (blocking, non_blocking): (Vec<_>, Vec<_>) =
                handlers.iter().partition(|h| h.is_blocking());

            // Process blocking handlers first
            for handler in blocking {
                handler.handle_blocking_dyn(&mut event).await;
            }

            // Process non-blocking handlers
            join_all(non_blocking.into_iter().map(|h| h.handle_dyn(&event))).await;
        }
        event
    }
}
