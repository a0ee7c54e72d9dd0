#![forbid(unsafe_code)]

//! Deterministic host simulator for testing.
//!
//! `PanelSimulator` plays the embedding application: it owns the pointer bus,
//! lays the panel out in a viewport, keeps the panel's hit-test bounds in
//! sync with its visibility, and records every style map the panel delivers.
//!
//! # Example
//!
//! ```
//! use typepanel::simulator::PanelSimulator;
//!
//! let mut sim = PanelSimulator::new();
//! sim.toggle();
//! assert!(sim.panel().is_open());
//! sim.click_outside();
//! assert!(!sim.panel().is_open());
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use typepanel_core::event::{Event, PointerEvent};
use typepanel_core::geometry::Size;

use crate::catalog::{Catalog, CategoryKind};
use crate::form::{ButtonRole, FormSchema};
use crate::layout::{PanelGeometry, SidePanelLayout};
use crate::panel::{StylePanel, SubmitEvent};
use crate::pointer::PointerBus;
use crate::style::StyleMap;

/// Default simulated viewport.
pub const DEFAULT_VIEWPORT: Size = Size::new(120, 40);

/// Headless host driving a [`StylePanel`].
pub struct PanelSimulator {
    bus: PointerBus,
    panel: StylePanel,
    layout: SidePanelLayout,
    viewport: Size,
    form: FormSchema,
    deliveries: Rc<RefCell<Vec<StyleMap>>>,
}

impl PanelSimulator {
    /// Standard catalog, default layout, 120x40 viewport.
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(Catalog::standard(), SidePanelLayout::default())
    }

    #[must_use]
    pub fn with_catalog(catalog: Catalog, layout: SidePanelLayout) -> Self {
        let bus = PointerBus::new();
        let deliveries = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&deliveries);
        let panel = StylePanel::new(catalog, &bus, move |styles: &StyleMap| {
            sink.borrow_mut().push(styles.clone());
        });
        let mut sim = Self {
            bus,
            panel,
            layout,
            viewport: DEFAULT_VIEWPORT,
            form: FormSchema::article(),
            deliveries,
        };
        sim.sync_bounds();
        sim
    }

    /// Built from a parsed configuration.
    #[cfg(feature = "config")]
    #[must_use]
    pub fn from_config(config: crate::config::PanelConfig) -> Self {
        Self::with_catalog(config.catalog, config.layout)
    }

    #[must_use]
    pub fn panel(&self) -> &StylePanel {
        &self.panel
    }

    #[must_use]
    pub fn bus(&self) -> &PointerBus {
        &self.bus
    }

    #[must_use]
    pub fn form(&self) -> &FormSchema {
        &self.form
    }

    #[must_use]
    pub const fn viewport(&self) -> Size {
        self.viewport
    }

    /// Current panel and trigger rectangles.
    #[must_use]
    pub fn geometry(&self) -> PanelGeometry {
        self.layout.compute(self.viewport, self.panel.is_open())
    }

    /// Press the arrow trigger: the press lands on the trigger region, then
    /// the trigger's click handler toggles.
    ///
    /// A trigger squeezed to nothing by a tiny viewport takes no press.
    pub fn toggle(&mut self) {
        let trigger = self.geometry().trigger;
        if !trigger.is_empty() {
            self.bus.dispatch(&PointerEvent::down(trigger.x, trigger.y));
        }
        self.panel.toggle();
        self.sync_bounds();
    }

    /// Feed a host event: resizes relayout, pointer events go to the bus.
    pub fn inject_event(&mut self, event: &Event) {
        if let Event::Resize { width, height } = *event {
            self.viewport = Size::new(width, height);
        }
        self.bus.dispatch_event(event);
        self.sync_bounds();
    }

    pub fn pointer_down(&mut self, x: u16, y: u16) {
        self.inject_event(&Event::Pointer(PointerEvent::down(x, y)));
    }

    /// Press the bottom-right-most point outside the panel and trigger.
    ///
    /// Returns `false` if the panel covers the whole viewport.
    pub fn click_outside(&mut self) -> bool {
        let bounds = self.layout.bounds(self.viewport, self.panel.is_open());
        let candidates = [
            (self.viewport.width.saturating_sub(1), self.viewport.height.saturating_sub(1)),
            (0, self.viewport.height.saturating_sub(1)),
        ];
        match candidates
            .into_iter()
            .find(|&(x, y)| !bounds.contains(x, y))
        {
            Some((x, y)) => {
                self.pointer_down(x, y);
                true
            }
            None => false,
        }
    }

    /// Press inside the open panel body.
    ///
    /// Returns `false` if the panel is closed.
    pub fn click_inside(&mut self) -> bool {
        let panel = self.geometry().panel;
        if panel.is_empty() {
            return false;
        }
        self.pointer_down(panel.x + panel.width / 2, panel.y + panel.height / 2);
        true
    }

    /// Pick row `index` of the control bound to `kind`.
    pub fn choose(&mut self, kind: CategoryKind, index: usize) -> bool {
        self.panel.select_index(kind, index)
    }

    /// Pick the option whose value is `value`.
    pub fn choose_value(&mut self, kind: CategoryKind, value: &str) -> bool {
        let catalog = self.panel.catalog();
        let index = (0..catalog.len_of(kind)).find(|&index| {
            catalog
                .selection_at(kind, index)
                .is_some_and(|selection| selection.value() == value)
        });
        index.is_some_and(|index| self.choose(kind, index))
    }

    /// Press a footer button. Returns whether the submit default was
    /// suppressed (always `false` for reset).
    pub fn press(&mut self, role: ButtonRole) -> bool {
        match role {
            ButtonRole::Submit => {
                let mut event = SubmitEvent::new();
                self.panel.submit(&mut event);
                event.default_prevented()
            }
            ButtonRole::Reset => {
                self.panel.reset();
                false
            }
        }
    }

    /// Submit the form.
    pub fn apply(&mut self) -> bool {
        self.press(ButtonRole::Submit)
    }

    pub fn reset(&mut self) {
        self.press(ButtonRole::Reset);
    }

    /// Detach the panel's rendered bounds.
    pub fn unmount(&mut self) {
        self.panel.unmount();
    }

    /// Every style map delivered so far, oldest first.
    #[must_use]
    pub fn deliveries(&self) -> Vec<StyleMap> {
        self.deliveries.borrow().clone()
    }

    #[must_use]
    pub fn last_delivery(&self) -> Option<StyleMap> {
        self.deliveries.borrow().last().cloned()
    }

    fn sync_bounds(&mut self) {
        self.panel
            .mount(self.layout.bounds(self.viewport, self.panel.is_open()));
    }
}

impl Default for PanelSimulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_press_does_not_fight_the_toggle() {
        let mut sim = PanelSimulator::new();
        sim.toggle();
        assert!(sim.panel().is_open());
        sim.toggle();
        assert!(!sim.panel().is_open());
        sim.toggle();
        assert!(sim.panel().is_open());
    }

    #[test]
    fn toggle_closes_again_when_trigger_has_no_room() {
        let mut sim = PanelSimulator::new();
        sim.inject_event(&Event::Resize {
            width: 120,
            height: 1,
        });
        assert!(sim.geometry().trigger.is_empty());

        sim.toggle();
        assert!(sim.panel().is_open());
        sim.toggle();
        assert!(!sim.panel().is_open());
        assert_eq!(sim.bus().listener_count(), 0);
    }

    #[test]
    fn click_inside_keeps_panel_open() {
        let mut sim = PanelSimulator::new();
        sim.toggle();
        assert!(sim.click_inside());
        assert!(sim.panel().is_open());
    }

    #[test]
    fn click_inside_closed_panel_is_refused() {
        let mut sim = PanelSimulator::new();
        assert!(!sim.click_inside());
    }

    #[test]
    fn resize_relayouts_bounds() {
        let mut sim = PanelSimulator::new();
        sim.toggle();
        sim.inject_event(&Event::Resize {
            width: 200,
            height: 50,
        });
        assert_eq!(sim.viewport(), Size::new(200, 50));
        assert_eq!(sim.panel().bounds().unwrap().root().height, 50);
    }

    #[test]
    fn choose_value_finds_catalog_row() {
        let mut sim = PanelSimulator::new();
        assert!(sim.choose_value(CategoryKind::FontColor, "pink"));
        assert!(!sim.choose_value(CategoryKind::FontColor, "chartreuse"));
        assert_eq!(
            sim.panel().selections().value_of(CategoryKind::FontColor),
            "pink"
        );
    }
}
