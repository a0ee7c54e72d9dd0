#![forbid(unsafe_code)]

//! Outside-press dismissal.
//!
//! The watcher holds a [`PointerSubscription`] only while the panel is open.
//! Arming and disarming are idempotent so the runtime can reconcile after
//! every update without tracking edges itself.

use typepanel_core::event::PointerEvent;
use typepanel_core::geometry::Rect;

use crate::pointer::{PointerBus, PointerSubscription};

/// Rendered extent of the panel: its root rectangle plus descendant regions
/// that live outside it (the trigger button, a dropdown's detached popup).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelBounds {
    root: Rect,
    regions: Vec<Rect>,
}

impl PanelBounds {
    #[must_use]
    pub fn new(root: Rect) -> Self {
        Self {
            root,
            regions: Vec::new(),
        }
    }

    /// Add a descendant region.
    #[must_use]
    pub fn with_region(mut self, region: Rect) -> Self {
        self.push_region(region);
        self
    }

    pub fn push_region(&mut self, region: Rect) {
        if !region.is_empty() {
            self.regions.push(region);
        }
    }

    /// Drop all descendant regions, e.g. when a popup closes.
    pub fn clear_regions(&mut self) {
        self.regions.clear();
    }

    #[must_use]
    pub const fn root(&self) -> Rect {
        self.root
    }

    #[must_use]
    pub fn regions(&self) -> &[Rect] {
        &self.regions
    }

    /// Whether `(x, y)` hits the root or any descendant region.
    #[must_use]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.root.contains(x, y) || self.regions.iter().any(|region| region.contains(x, y))
    }
}

/// Should `event` dismiss a panel with these bounds?
///
/// Only presses count. An unmounted panel (`None`) can't be hit-tested and
/// is treated as containing the press.
#[must_use]
pub fn is_outside(bounds: Option<&PanelBounds>, event: &PointerEvent) -> bool {
    if !event.is_down() {
        return false;
    }
    match bounds {
        Some(bounds) => !bounds.contains(event.x, event.y),
        None => false,
    }
}

/// Scoped pointer observation for the open panel.
#[derive(Debug, Default)]
pub struct DismissWatcher {
    subscription: Option<PointerSubscription>,
}

impl DismissWatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start observing `bus`. Returns `false` if already armed.
    pub fn arm(&mut self, bus: &PointerBus, handler: impl Fn(&PointerEvent) + 'static) -> bool {
        if self.subscription.is_some() {
            return false;
        }
        let subscription = bus.subscribe(handler);
        tracing::debug!(listener = subscription.id(), "dismiss watcher armed");
        self.subscription = Some(subscription);
        true
    }

    /// Stop observing. Returns `false` if not armed.
    pub fn disarm(&mut self) -> bool {
        match self.subscription.take() {
            Some(subscription) => {
                tracing::debug!(listener = subscription.id(), "dismiss watcher disarmed");
                drop(subscription);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.subscription.is_some()
    }
}
