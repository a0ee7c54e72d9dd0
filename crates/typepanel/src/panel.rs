#![forbid(unsafe_code)]

//! The style panel: state machine plus its runtime.
//!
//! [`PanelModel`] is a pure state machine. `update` consumes a [`PanelMsg`]
//! and returns an [`Effect`]; `wants_pointer_watch` declares whether the
//! outside-press observation should be live.
//!
//! [`StylePanel`] owns a model, the host callback and the dismissal watcher.
//! After every update it
//!
//! 1. reconciles the watcher against `wants_pointer_watch()`
//! 2. releases its borrows
//! 3. runs the effect (invokes the host callback)
//!
//! so a callback that re-enters the panel, or panics, sees consistent state.
//!
//! # State machine
//!
//! ```text
//!            toggle
//!   Closed ─────────▶ Open
//!     ▲                │
//!     └── toggle ──────┤
//!     └── outside ─────┘
//! ```
//!
//! Select / Apply / Reset are self-transitions in either state.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use typepanel_core::event::PointerEvent;

use crate::catalog::{Catalog, Category, CategoryKind, StyleOption};
use crate::dismiss::{DismissWatcher, PanelBounds, is_outside};
use crate::pointer::PointerBus;
use crate::selection::{PanelState, Selection, Selections, Visibility};
use crate::style::{StyleMap, project, project_defaults};

/// Host callback receiving every applied or reset style map.
pub type HostCallback = Rc<dyn Fn(&StyleMap)>;

/// Messages driving [`PanelModel::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelMsg {
    /// Trigger button pressed.
    Toggle,
    /// Press outside the panel while open. Closes; ignored when closed.
    Dismiss,
    /// A control picked an option.
    Select(Selection),
    /// Form submitted.
    Apply,
    /// Reset button pressed.
    Reset,
}

/// Side effect requested by an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Deliver this map to the host callback.
    Notify(StyleMap),
}

/// Pure panel state machine.
#[derive(Debug, Clone)]
pub struct PanelModel {
    catalog: Rc<Catalog>,
    state: PanelState,
}

impl PanelModel {
    /// Closed, every category at its catalog default.
    #[must_use]
    pub fn new(catalog: Rc<Catalog>) -> Self {
        let state = PanelState::new(&catalog);
        Self { catalog, state }
    }

    pub fn update(&mut self, msg: PanelMsg) -> Effect {
        match msg {
            PanelMsg::Toggle => {
                let visibility = self.state.toggle_visibility();
                tracing::debug!(?visibility, "panel toggled");
                Effect::None
            }
            PanelMsg::Dismiss => {
                if self.state.visibility().is_open() {
                    let visibility = self.state.toggle_visibility();
                    tracing::debug!(?visibility, "panel dismissed by outside press");
                }
                Effect::None
            }
            PanelMsg::Select(selection) => {
                tracing::trace!(
                    category = %selection.kind(),
                    value = selection.value(),
                    "pending selection changed"
                );
                self.state.set_selection(selection);
                Effect::None
            }
            PanelMsg::Apply => {
                let styles = project(self.state.selections());
                tracing::debug!(styles = %styles, "applying pending selections");
                Effect::Notify(styles)
            }
            PanelMsg::Reset => {
                self.state.reset_selections(&self.catalog);
                let styles = project_defaults(&self.catalog);
                tracing::debug!(styles = %styles, "resetting to catalog defaults");
                Effect::Notify(styles)
            }
        }
    }

    /// The outside-press observation should be live exactly while open.
    #[must_use]
    pub fn wants_pointer_watch(&self) -> bool {
        self.state.visibility().is_open()
    }

    #[must_use]
    pub fn state(&self) -> &PanelState {
        &self.state
    }

    #[must_use]
    pub fn catalog(&self) -> &Rc<Catalog> {
        &self.catalog
    }
}

/// The form-submission event that triggered an apply.
///
/// Apply always suppresses the event's default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            default_prevented: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    #[must_use]
    pub const fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

struct PanelInner {
    model: RefCell<PanelModel>,
    bounds: RefCell<Option<PanelBounds>>,
    watcher: RefCell<DismissWatcher>,
    bus: PointerBus,
    on_change: HostCallback,
}

/// A mounted style panel bound to a host.
///
/// Not `Clone`: dropping the panel releases its pointer observation.
pub struct StylePanel {
    inner: Rc<PanelInner>,
}

impl StylePanel {
    /// Create a closed panel that observes `bus` while open and reports
    /// style maps to `on_change`.
    pub fn new(
        catalog: impl Into<Rc<Catalog>>,
        bus: &PointerBus,
        on_change: impl Fn(&StyleMap) + 'static,
    ) -> Self {
        Self::with_callback(catalog, bus, Rc::new(on_change))
    }

    /// Like [`StylePanel::new`] with a shared callback.
    pub fn with_callback(
        catalog: impl Into<Rc<Catalog>>,
        bus: &PointerBus,
        on_change: HostCallback,
    ) -> Self {
        let inner = Rc::new(PanelInner {
            model: RefCell::new(PanelModel::new(catalog.into())),
            bounds: RefCell::new(None),
            watcher: RefCell::new(DismissWatcher::new()),
            bus: bus.clone(),
            on_change,
        });
        Self { inner }
    }

    /// Flip visibility (trigger button).
    pub fn toggle(&self) {
        dispatch(&self.inner, PanelMsg::Toggle);
    }

    /// Open if closed.
    pub fn open(&self) {
        if !self.is_open() {
            self.toggle();
        }
    }

    /// Close if open.
    pub fn close(&self) {
        if self.is_open() {
            self.toggle();
        }
    }

    /// Set the pending option of category `C`.
    pub fn select<C: Category>(&self, option: StyleOption<C>) {
        dispatch(&self.inner, PanelMsg::Select(option.into()));
    }

    /// Set the pending option of `kind` to catalog entry `index`.
    ///
    /// For controls that report the chosen row. Returns `false` and leaves
    /// state untouched if `index` is out of range.
    pub fn select_index(&self, kind: CategoryKind, index: usize) -> bool {
        let selection = self.inner.model.borrow().catalog().selection_at(kind, index);
        match selection {
            Some(selection) => {
                dispatch(&self.inner, PanelMsg::Select(selection));
                true
            }
            None => {
                tracing::warn!(category = %kind, index, "ignoring out-of-range option index");
                false
            }
        }
    }

    /// Apply the pending selections (form submit).
    pub fn submit(&self, event: &mut SubmitEvent) {
        event.prevent_default();
        dispatch(&self.inner, PanelMsg::Apply);
    }

    /// Restore catalog defaults and report them.
    pub fn reset(&self) {
        dispatch(&self.inner, PanelMsg::Reset);
    }

    /// Record the rendered bounds used for outside-press checks.
    pub fn mount(&self, bounds: PanelBounds) {
        *self.inner.bounds.borrow_mut() = Some(bounds);
    }

    /// Forget the rendered bounds; outside-press checks become no-ops.
    pub fn unmount(&self) {
        *self.inner.bounds.borrow_mut() = None;
    }

    #[must_use]
    pub fn bounds(&self) -> Option<PanelBounds> {
        self.inner.bounds.borrow().clone()
    }

    #[must_use]
    pub fn selections(&self) -> Selections {
        self.inner.model.borrow().state().selections().clone()
    }

    /// Pending option of category `C`.
    #[must_use]
    pub fn selection<C: Category>(&self) -> StyleOption<C> {
        self.inner
            .model
            .borrow()
            .state()
            .selections()
            .get::<C>()
            .clone()
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.inner.model.borrow().state().visibility()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.visibility().is_open()
    }

    /// Whether the outside-press observation is currently registered.
    #[must_use]
    pub fn is_watching(&self) -> bool {
        self.inner.watcher.borrow().is_armed()
    }

    #[must_use]
    pub fn catalog(&self) -> Rc<Catalog> {
        Rc::clone(self.inner.model.borrow().catalog())
    }
}

impl fmt::Debug for StylePanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StylePanel")
            .field("visibility", &self.visibility())
            .field("watching", &self.is_watching())
            .field("bounds", &self.bounds())
            .finish_non_exhaustive()
    }
}

fn dispatch(inner: &Rc<PanelInner>, msg: PanelMsg) {
    let effect = inner.model.borrow_mut().update(msg);
    reconcile(inner);
    if let Effect::Notify(styles) = effect {
        let span = tracing::debug_span!("typepanel.notify");
        let _guard = span.enter();
        (inner.on_change)(&styles);
    }
}

fn reconcile(inner: &Rc<PanelInner>) {
    let wants = inner.model.borrow().wants_pointer_watch();
    let mut watcher = inner.watcher.borrow_mut();
    if wants {
        let weak: Weak<PanelInner> = Rc::downgrade(inner);
        watcher.arm(&inner.bus, move |event| {
            if let Some(inner) = weak.upgrade() {
                on_pointer(&inner, event);
            }
        });
    } else {
        watcher.disarm();
    }
}

fn on_pointer(inner: &Rc<PanelInner>, event: &PointerEvent) {
    let outside = is_outside(inner.bounds.borrow().as_ref(), event);
    if outside {
        dispatch(inner, PanelMsg::Dismiss);
    }
}
