#![forbid(unsafe_code)]

//! Host pointer-event surface with scoped listeners.
//!
//! A [`PointerBus`] stands in for the host document's pointer-down stream.
//! Consumers call [`PointerBus::subscribe`] and hold the returned
//! [`PointerSubscription`] for exactly as long as they want events; dropping
//! it deregisters the listener.
//!
//! # How dispatch works
//!
//! 1. [`PointerBus::dispatch`] snapshots the listener list
//! 2. Each snapshot entry is called unless it was removed earlier in the same
//!    dispatch
//! 3. Listeners added during a dispatch first see the next event
//!
//! Listeners may subscribe, unsubscribe, or drop other subscriptions from
//! inside their handler; no internal borrow is held while a handler runs.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use typepanel_core::event::{Event, PointerEvent};

/// Identifier of a registered listener, unique per bus.
pub type ListenerId = u64;

type Handler = Rc<dyn Fn(&PointerEvent)>;

#[derive(Default)]
struct Registry {
    next_id: ListenerId,
    listeners: Vec<(ListenerId, Handler)>,
}

impl Registry {
    fn is_live(&self, id: ListenerId) -> bool {
        self.listeners.iter().any(|(live, _)| *live == id)
    }

    fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(live, _)| *live != id);
        self.listeners.len() != before
    }
}

/// Cloneable handle to a host's pointer-event stream.
#[derive(Clone, Default)]
pub struct PointerBus {
    registry: Rc<RefCell<Registry>>,
}

impl PointerBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` until the returned subscription is dropped.
    #[must_use = "dropping the subscription immediately deregisters the listener"]
    pub fn subscribe(&self, handler: impl Fn(&PointerEvent) + 'static) -> PointerSubscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Rc::new(handler)));
        tracing::trace!(listener = id, total = registry.listeners.len(), "pointer listener added");
        PointerSubscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Deliver `event` to every listener; returns how many were called.
    pub fn dispatch(&self, event: &PointerEvent) -> usize {
        let snapshot: Vec<(ListenerId, Handler)> = self.registry.borrow().listeners.clone();
        let mut delivered = 0;
        for (id, handler) in snapshot {
            if !self.registry.borrow().is_live(id) {
                continue;
            }
            handler(event);
            delivered += 1;
        }
        tracing::trace!(
            x = event.x,
            y = event.y,
            kind = ?event.kind,
            delivered,
            "pointer event dispatched"
        );
        delivered
    }

    /// Deliver the pointer payload of `event`, if any.
    pub fn dispatch_event(&self, event: &Event) -> usize {
        event
            .as_pointer()
            .map_or(0, |pointer| self.dispatch(pointer))
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

impl std::fmt::Debug for PointerBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// A live listener registration. Deregisters on drop.
#[derive(Debug)]
pub struct PointerSubscription {
    id: ListenerId,
    registry: Weak<RefCell<Registry>>,
}

impl PointerSubscription {
    #[must_use]
    pub const fn id(&self) -> ListenerId {
        self.id
    }

    /// Still registered on a live bus.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.borrow().is_live(self.id))
    }

    /// Deregister now.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let removed = registry.borrow_mut().remove(self.id);
            if removed {
                tracing::trace!(listener = self.id, "pointer listener removed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use typepanel_core::event::PointerEventKind;

    fn counter() -> (Rc<Cell<usize>>, impl Fn(&PointerEvent) + 'static) {
        let count = Rc::new(Cell::new(0));
        let inner = Rc::clone(&count);
        (count, move |_: &PointerEvent| inner.set(inner.get() + 1))
    }

    #[test]
    fn subscribe_and_dispatch() {
        let bus = PointerBus::new();
        let (count, handler) = counter();
        let sub = bus.subscribe(handler);

        assert_eq!(bus.dispatch(&PointerEvent::down(0, 0)), 1);
        assert_eq!(count.get(), 1);
        assert!(sub.is_active());
    }

    #[test]
    fn drop_deregisters() {
        let bus = PointerBus::new();
        let (count, handler) = counter();
        let sub = bus.subscribe(handler);
        drop(sub);

        assert_eq!(bus.listener_count(), 0);
        assert_eq!(bus.dispatch(&PointerEvent::down(0, 0)), 0);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn cancel_is_drop() {
        let bus = PointerBus::new();
        let (_count, handler) = counter();
        bus.subscribe(handler).cancel();
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn ids_are_unique() {
        let bus = PointerBus::new();
        let a = bus.subscribe(|_| {});
        let b = bus.subscribe(|_| {});
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn subscription_outliving_bus_is_inert() {
        let bus = PointerBus::new();
        let sub = bus.subscribe(|_| {});
        drop(bus);
        assert!(!sub.is_active());
        drop(sub);
    }

    #[test]
    fn listener_removed_mid_dispatch_is_skipped() {
        let bus = PointerBus::new();
        let victim: Rc<RefCell<Option<PointerSubscription>>> = Rc::new(RefCell::new(None));

        let slot = Rc::clone(&victim);
        let _killer = bus.subscribe(move |_| {
            slot.borrow_mut().take();
        });
        let (count, handler) = counter();
        *victim.borrow_mut() = Some(bus.subscribe(handler));

        assert_eq!(bus.dispatch(&PointerEvent::down(1, 1)), 1);
        assert_eq!(count.get(), 0);
        assert_eq!(bus.listener_count(), 1);
    }

    #[test]
    fn listener_added_mid_dispatch_sees_next_event() {
        let bus = PointerBus::new();
        let late: Rc<RefCell<Option<PointerSubscription>>> = Rc::new(RefCell::new(None));
        let (count, handler) = counter();
        let handler = Rc::new(handler);

        let bus_for_handler = bus.clone();
        let slot = Rc::clone(&late);
        let _adder = bus.subscribe(move |_| {
            if slot.borrow().is_none() {
                let handler = Rc::clone(&handler);
                *slot.borrow_mut() = Some(bus_for_handler.subscribe(move |e| handler(e)));
            }
        });

        bus.dispatch(&PointerEvent::down(0, 0));
        assert_eq!(count.get(), 0);
        bus.dispatch(&PointerEvent::down(0, 0));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn dispatch_event_ignores_non_pointer() {
        let bus = PointerBus::new();
        let (count, handler) = counter();
        let _sub = bus.subscribe(handler);

        assert_eq!(bus.dispatch_event(&Event::Focus(true)), 0);
        let scroll = PointerEvent::new(PointerEventKind::ScrollDown, 2, 2);
        assert_eq!(bus.dispatch_event(&Event::Pointer(scroll)), 1);
        assert_eq!(count.get(), 1);
    }
}
