#![forbid(unsafe_code)]

//! Style projection: pending selections to the five style variables.
//!
//! [`StyleMap`] has one field per [`StyleVar`], so a projection is complete by
//! construction. There is no partially-populated map.

use core::fmt;

use crate::catalog::Catalog;
use crate::selection::Selections;

/// The closed set of style variables emitted to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleVar {
    FontFamily,
    FontSize,
    FontColor,
    ContainerWidth,
    BgColor,
}

impl StyleVar {
    /// Emission order.
    pub const ALL: [StyleVar; 5] = [
        StyleVar::FontFamily,
        StyleVar::FontSize,
        StyleVar::FontColor,
        StyleVar::ContainerWidth,
        StyleVar::BgColor,
    ];

    /// Variable name without the custom-property prefix.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            StyleVar::FontFamily => "font-family",
            StyleVar::FontSize => "font-size",
            StyleVar::FontColor => "font-color",
            StyleVar::ContainerWidth => "container-width",
            StyleVar::BgColor => "bg-color",
        }
    }

    /// Custom-property name (`--font-family`, ...).
    #[must_use]
    pub const fn css_property(self) -> &'static str {
        match self {
            StyleVar::FontFamily => "--font-family",
            StyleVar::FontSize => "--font-size",
            StyleVar::FontColor => "--font-color",
            StyleVar::ContainerWidth => "--container-width",
            StyleVar::BgColor => "--bg-color",
        }
    }
}

impl fmt::Display for StyleVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Values for all five style variables.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleMap {
    font_family: String,
    font_size: String,
    font_color: String,
    container_width: String,
    bg_color: String,
}

impl StyleMap {
    /// Value of `var`.
    #[must_use]
    pub fn get(&self, var: StyleVar) -> &str {
        match var {
            StyleVar::FontFamily => &self.font_family,
            StyleVar::FontSize => &self.font_size,
            StyleVar::FontColor => &self.font_color,
            StyleVar::ContainerWidth => &self.container_width,
            StyleVar::BgColor => &self.bg_color,
        }
    }

    /// `(var, value)` pairs in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleVar, &str)> + '_ {
        StyleVar::ALL.into_iter().map(move |var| (var, self.get(var)))
    }

    /// Always five.
    #[must_use]
    pub const fn len(&self) -> usize {
        StyleVar::ALL.len()
    }

    /// Never empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Render as inline custom-property declarations:
    /// `--font-family: Open Sans; --font-size: 18px; ...`.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        for (var, value) in self.iter() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(var.css_property());
            out.push_str(": ");
            out.push_str(value);
            out.push(';');
        }
        out
    }
}

impl fmt::Display for StyleMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Project pending selections onto the style variables.
#[must_use]
pub fn project(selections: &Selections) -> StyleMap {
    StyleMap {
        font_family: selections.font_family.value().to_owned(),
        font_size: selections.font_size.value().to_owned(),
        font_color: selections.font_color.value().to_owned(),
        container_width: selections.content_width.value().to_owned(),
        bg_color: selections.background_color.value().to_owned(),
    }
}

/// Project the catalog defaults.
#[must_use]
pub fn project_defaults(catalog: &Catalog) -> StyleMap {
    project(&Selections::defaults(catalog))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BackgroundColor, ContentWidth, StyleOption};

    #[test]
    fn defaults_project_to_article_values() {
        let map = project_defaults(&Catalog::standard());
        let pairs: Vec<_> = map.iter().map(|(var, value)| (var.key(), value)).collect();
        assert_eq!(
            pairs,
            [
                ("font-family", "Open Sans"),
                ("font-size", "18px"),
                ("font-color", "black"),
                ("container-width", "800px"),
                ("bg-color", "white"),
            ]
        );
    }

    #[test]
    fn width_and_background_land_in_their_own_keys() {
        let catalog = Catalog::standard();
        let mut selections = Selections::defaults(&catalog);
        selections.set(StyleOption::<ContentWidth>::new("Wide", "1394px"));
        selections.set(StyleOption::<BackgroundColor>::new("Black", "black"));

        let map = project(&selections);
        assert_eq!(map.get(StyleVar::ContainerWidth), "1394px");
        assert_eq!(map.get(StyleVar::BgColor), "black");
        assert_eq!(map.get(StyleVar::FontColor), "black");
    }

    #[test]
    fn css_rendering() {
        let map = project_defaults(&Catalog::standard());
        assert_eq!(
            map.to_css(),
            "--font-family: Open Sans; --font-size: 18px; --font-color: black; \
             --container-width: 800px; --bg-color: white;"
        );
        assert_eq!(map.to_string(), map.to_css());
    }

    #[test]
    fn keys_are_unique_and_prefixed() {
        let mut keys: Vec<_> = StyleVar::ALL.iter().map(|var| var.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 5);
        for var in StyleVar::ALL {
            assert_eq!(var.css_property(), format!("--{}", var.key()));
        }
    }
}
