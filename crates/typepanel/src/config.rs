#![forbid(unsafe_code)]

//! JSON configuration for the catalog and the side-panel layout.
//!
//! ```json
//! {
//!   "catalog": {
//!     "font_family": {
//!       "options": [{ "label": "Open Sans", "value": "Open Sans" }],
//!       "default": "Open Sans"
//!     },
//!     "font_size": { "options": [...], "default": "18px" },
//!     "font_color": { "options": [...], "default": "black" },
//!     "background_color": { "options": [...], "default": "white" },
//!     "content_width": { "options": [...], "default": "800px" }
//!   },
//!   "layout": { "side": "left", "width": 48 }
//! }
//! ```
//!
//! Both sections are optional; a missing section falls back to
//! [`Catalog::standard`] / [`SidePanelLayout::default`]. `default` names an
//! option value and must match one of the listed options.

use serde::Deserialize;

use crate::catalog::{
    BackgroundColor, Catalog, CatalogError, Category, ContentWidth, FontColor, FontFamily,
    FontSize, OptionList, StyleOption,
};
use crate::layout::{Side, SidePanelLayout};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOption {
    label: String,
    value: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawList {
    options: Vec<RawOption>,
    default: String,
}

impl RawList {
    fn build<C: Category>(self) -> Result<OptionList<C>, CatalogError> {
        let options = self
            .options
            .into_iter()
            .map(|raw| StyleOption::new(raw.label, raw.value))
            .collect();
        OptionList::with_default_value(options, &self.default)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCatalog {
    font_family: RawList,
    font_size: RawList,
    font_color: RawList,
    background_color: RawList,
    content_width: RawList,
}

impl RawCatalog {
    fn build(self) -> Result<Catalog, CatalogError> {
        Ok(Catalog::new(
            self.font_family.build::<FontFamily>()?,
            self.font_size.build::<FontSize>()?,
            self.font_color.build::<FontColor>()?,
            self.background_color.build::<BackgroundColor>()?,
            self.content_width.build::<ContentWidth>()?,
        ))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawLayout {
    side: Option<Side>,
    width: Option<u16>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    catalog: Option<RawCatalog>,
    layout: Option<RawLayout>,
}

/// Everything needed to stand up a panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelConfig {
    pub catalog: Catalog,
    pub layout: SidePanelLayout,
}

impl PanelConfig {
    /// Parse a configuration document.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Parse`] for malformed JSON or unknown fields, and the
    /// list errors of [`OptionList::with_default_value`].
    pub fn from_json_str(text: &str) -> Result<Self, CatalogError> {
        let raw: RawConfig =
            serde_json::from_str(text).map_err(|err| CatalogError::Parse(err.to_string()))?;

        let catalog = match raw.catalog {
            Some(catalog) => catalog.build()?,
            None => Catalog::standard(),
        };
        let mut layout = SidePanelLayout::default();
        if let Some(raw_layout) = raw.layout {
            if let Some(side) = raw_layout.side {
                layout.side = side;
            }
            if let Some(width) = raw_layout.width {
                layout.width = width;
            }
        }
        tracing::debug!(side = ?layout.side, width = layout.width, "panel config loaded");
        Ok(Self { catalog, layout })
    }
}

impl Catalog {
    /// Parse a bare catalog document (the `catalog` section on its own).
    ///
    /// # Errors
    ///
    /// Same as [`PanelConfig::from_json_str`].
    pub fn from_json_str(text: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog =
            serde_json::from_str(text).map_err(|err| CatalogError::Parse(err.to_string()))?;
        raw.build()
    }
}
