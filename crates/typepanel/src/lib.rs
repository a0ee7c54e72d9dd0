#![forbid(unsafe_code)]

//! Article style panel: a side panel that collects typography and layout
//! choices and reports them to its host as five style variables.
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use typepanel::catalog::{Catalog, FontSize, StyleOption};
//! use typepanel::panel::{StylePanel, SubmitEvent};
//! use typepanel::pointer::PointerBus;
//! use typepanel::style::StyleVar;
//!
//! let bus = PointerBus::new();
//! let applied = Rc::new(RefCell::new(None));
//! let sink = Rc::clone(&applied);
//! let panel = StylePanel::new(Catalog::standard(), &bus, move |styles| {
//!     *sink.borrow_mut() = Some(styles.clone());
//! });
//!
//! panel.select(StyleOption::<FontSize>::new("24px", "24px"));
//! panel.submit(&mut SubmitEvent::new());
//!
//! let styles = applied.borrow().clone().unwrap();
//! assert_eq!(styles.get(StyleVar::FontSize), "24px");
//! assert_eq!(styles.get(StyleVar::FontFamily), "Open Sans");
//! ```

pub mod catalog;
#[cfg(feature = "config")]
pub mod config;
pub mod dismiss;
pub mod form;
pub mod layout;
pub mod panel;
pub mod pointer;
pub mod selection;
pub mod simulator;
pub mod style;

pub use catalog::{Catalog, CatalogError, Category, CategoryKind, OptionList, StyleOption};
pub use panel::{PanelModel, PanelMsg, StylePanel, SubmitEvent};
pub use pointer::{PointerBus, PointerSubscription};
pub use selection::{Selection, Selections, Visibility};
pub use style::{StyleMap, StyleVar, project};
