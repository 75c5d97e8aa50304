use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

/// A host notification that may require a recompute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridEvent {
    /// The viewport or the grid container changed size.
    Resize,
    /// The scroll container scrolled.
    Scroll,
    /// The item collection now holds this many items.
    ItemCount(usize),
}

/// Events received by a [`Subscription`] since it was last drained.
///
/// Repeated events of one kind collapse into one entry; for item counts the latest wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingEvents {
    pub resize: bool,
    pub scroll: bool,
    pub item_count: Option<usize>,
}

impl PendingEvents {
    pub fn is_empty(&self) -> bool {
        !self.resize && !self.scroll && self.item_count.is_none()
    }

    fn record(&mut self, event: GridEvent) {
        match event {
            GridEvent::Resize => self.resize = true,
            GridEvent::Scroll => self.scroll = true,
            GridEvent::ItemCount(count) => self.item_count = Some(count),
        }
    }
}

#[derive(Debug)]
struct Slot {
    id: u64,
    pending: Rc<Cell<PendingEvents>>,
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    slots: Vec<Slot>,
}

/// Fan-out point for host events (window resize, container scroll, data changes).
///
/// Listeners are explicit [`Subscription`]s: each one is unregistered when dropped, so a
/// torn-down grid never receives events. Single-threaded; cloning shares the same registry.
#[derive(Clone, Debug, Default)]
pub struct EventHub {
    registry: Rc<RefCell<Registry>>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id = registry.next_id.wrapping_add(1);
        let pending = Rc::new(Cell::new(PendingEvents::default()));
        registry.slots.push(Slot {
            id,
            pending: Rc::clone(&pending),
        });
        vdebug!(id, listeners = registry.slots.len(), "EventHub::subscribe");
        Subscription {
            id,
            pending,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Records `event` on every live subscription.
    pub fn emit(&self, event: GridEvent) {
        let registry = self.registry.borrow();
        vtrace!(?event, listeners = registry.slots.len(), "EventHub::emit");
        for slot in &registry.slots {
            let mut pending = slot.pending.get();
            pending.record(event);
            slot.pending.set(pending);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().slots.len()
    }
}

/// A registration on an [`EventHub`]. Unsubscribes on drop.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    pending: Rc<Cell<PendingEvents>>,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// Returns and clears the events received so far.
    pub fn take(&self) -> PendingEvents {
        self.pending.take()
    }

    /// Returns the events received so far without clearing them.
    pub fn peek(&self) -> PendingEvents {
        self.pending.get()
    }

    /// Whether the hub this subscription belongs to is still alive.
    pub fn is_connected(&self) -> bool {
        self.registry.strong_count() > 0
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let mut registry = registry.borrow_mut();
        registry.slots.retain(|slot| slot.id != self.id);
        vdebug!(id = self.id, listeners = registry.slots.len(), "Subscription dropped");
    }
}
