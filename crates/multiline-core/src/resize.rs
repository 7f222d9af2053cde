// File: crates/multiline-core/src/resize.rs
// Summary: Viewport-resize notifier with explicit, droppable subscriptions.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::error::ChartError;

type Listener = Box<dyn FnMut() -> Result<(), ChartError>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
    /// Ids released while a notification was running.
    released: Vec<u64>,
    notifying: bool,
}

/// Fans a "viewport size changed" signal out to subscribers. Single-threaded:
/// each listener runs to completion before the next one starts, and rapid
/// notifications are not coalesced.
#[derive(Clone, Default)]
pub struct ResizeNotifier {
    registry: Rc<RefCell<Registry>>,
}

/// Keeps a listener registered. Dropping it (or calling [`release`](Self::release))
/// unsubscribes.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl ResizeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: FnMut() -> Result<(), ChartError> + 'static,
    {
        let mut reg = self.registry.borrow_mut();
        let id = reg.next_id;
        reg.next_id += 1;
        reg.listeners.push((id, Box::new(listener)));
        Subscription { id, registry: Rc::downgrade(&self.registry) }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    /// Run every listener once. All listeners run even if one fails; the
    /// first failure is returned.
    pub fn notify(&self) -> Result<(), ChartError> {
        let mut active = {
            let mut reg = self.registry.borrow_mut();
            reg.notifying = true;
            std::mem::take(&mut reg.listeners)
        };

        let mut first_err = None;
        for (id, listener) in active.iter_mut() {
            if self.registry.borrow().released.contains(id) {
                continue;
            }
            if let Err(e) = listener() {
                tracing::warn!(error = %e, "resize listener failed");
                first_err.get_or_insert(e);
            }
        }

        let mut reg = self.registry.borrow_mut();
        reg.notifying = false;
        let released = std::mem::take(&mut reg.released);
        active.retain(|(id, _)| !released.contains(id));
        // keep listeners that subscribed during the notification
        active.append(&mut reg.listeners);
        reg.listeners = active;

        first_err.map_or(Ok(()), Err)
    }
}

impl Subscription {
    pub fn release(self) {}

    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|reg| reg.borrow().listeners.iter().any(|(id, _)| *id == self.id))
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(reg) = self.registry.upgrade() else { return };
        let mut reg = reg.borrow_mut();
        reg.listeners.retain(|(id, _)| *id != self.id);
        if reg.notifying {
            reg.released.push(self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
