#![forbid(unsafe_code)]

//! Pending selections and panel visibility.
//!
//! [`PanelState`] is the only owner of both. Selection changes never touch
//! visibility and visibility changes never touch selections.

use crate::catalog::{
    BackgroundColor, Catalog, Category, CategoryKind, ContentWidth, FontColor, FontFamily,
    FontSize, StyleOption,
};

/// One pending option per category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selections {
    pub(crate) font_family: StyleOption<FontFamily>,
    pub(crate) font_size: StyleOption<FontSize>,
    pub(crate) font_color: StyleOption<FontColor>,
    pub(crate) background_color: StyleOption<BackgroundColor>,
    pub(crate) content_width: StyleOption<ContentWidth>,
}

impl Selections {
    /// Every category at its catalog default.
    #[must_use]
    pub fn defaults(catalog: &Catalog) -> Self {
        Self {
            font_family: catalog.default_of::<FontFamily>().clone(),
            font_size: catalog.default_of::<FontSize>().clone(),
            font_color: catalog.default_of::<FontColor>().clone(),
            background_color: catalog.default_of::<BackgroundColor>().clone(),
            content_width: catalog.default_of::<ContentWidth>().clone(),
        }
    }

    /// Pending option of category `C`.
    #[must_use]
    pub fn get<C: Category>(&self) -> &StyleOption<C> {
        C::slot(self)
    }

    /// Replace the pending option of category `C`, returning the previous one.
    pub fn set<C: Category>(&mut self, option: StyleOption<C>) -> StyleOption<C> {
        std::mem::replace(C::slot_mut(self), option)
    }

    /// Apply an erased selection to its slot.
    pub fn apply(&mut self, selection: Selection) {
        match selection {
            Selection::FontFamily(option) => self.font_family = option,
            Selection::FontSize(option) => self.font_size = option,
            Selection::FontColor(option) => self.font_color = option,
            Selection::BackgroundColor(option) => self.background_color = option,
            Selection::ContentWidth(option) => self.content_width = option,
        }
    }

    /// Pending value of `kind`.
    #[must_use]
    pub fn value_of(&self, kind: CategoryKind) -> &str {
        match kind {
            CategoryKind::FontFamily => self.font_family.value(),
            CategoryKind::FontSize => self.font_size.value(),
            CategoryKind::FontColor => self.font_color.value(),
            CategoryKind::BackgroundColor => self.background_color.value(),
            CategoryKind::ContentWidth => self.content_width.value(),
        }
    }
}

/// A typed option tagged with its category.
///
/// This is what a bound control hands to the panel. Each variant can only
/// hold an option of its own category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    FontFamily(StyleOption<FontFamily>),
    FontSize(StyleOption<FontSize>),
    FontColor(StyleOption<FontColor>),
    BackgroundColor(StyleOption<BackgroundColor>),
    ContentWidth(StyleOption<ContentWidth>),
}

impl Selection {
    #[must_use]
    pub const fn kind(&self) -> CategoryKind {
        match self {
            Selection::FontFamily(_) => CategoryKind::FontFamily,
            Selection::FontSize(_) => CategoryKind::FontSize,
            Selection::FontColor(_) => CategoryKind::FontColor,
            Selection::BackgroundColor(_) => CategoryKind::BackgroundColor,
            Selection::ContentWidth(_) => CategoryKind::ContentWidth,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Selection::FontFamily(option) => option.label(),
            Selection::FontSize(option) => option.label(),
            Selection::FontColor(option) => option.label(),
            Selection::BackgroundColor(option) => option.label(),
            Selection::ContentWidth(option) => option.label(),
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Selection::FontFamily(option) => option.value(),
            Selection::FontSize(option) => option.value(),
            Selection::FontColor(option) => option.value(),
            Selection::BackgroundColor(option) => option.value(),
            Selection::ContentWidth(option) => option.value(),
        }
    }
}

impl<C: Category> From<StyleOption<C>> for Selection {
    fn from(option: StyleOption<C>) -> Self {
        C::wrap(option)
    }
}

/// Open/closed flag of the side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

impl Visibility {
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Visibility::Open)
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Visibility::Closed => Visibility::Open,
            Visibility::Open => Visibility::Closed,
        }
    }
}

/// Pending selections plus visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelState {
    selections: Selections,
    visibility: Visibility,
}

impl PanelState {
    /// Catalog defaults, closed.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            selections: Selections::defaults(catalog),
            visibility: Visibility::Closed,
        }
    }

    #[must_use]
    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Replace one category's pending option. No membership check.
    pub fn set_selection(&mut self, selection: impl Into<Selection>) {
        self.selections.apply(selection.into());
    }

    /// Flip visibility and return the new value.
    pub fn toggle_visibility(&mut self) -> Visibility {
        self.visibility = self.visibility.toggled();
        self.visibility
    }

    /// Every category back to its catalog default.
    pub fn reset_selections(&mut self, catalog: &Catalog) {
        self.selections = Selections::defaults(catalog);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_closed_at_defaults() {
        let catalog = Catalog::standard();
        let state = PanelState::new(&catalog);
        assert_eq!(state.visibility(), Visibility::Closed);
        assert_eq!(state.selections(), &Selections::defaults(&catalog));
    }

    #[test]
    fn set_selection_only_touches_its_category() {
        let catalog = Catalog::standard();
        let mut state = PanelState::new(&catalog);
        let big = catalog.list::<FontSize>().find("38px").unwrap().clone();
        state.set_selection(big.clone());

        assert_eq!(state.selections().get::<FontSize>(), &big);
        assert_eq!(
            state.selections().get::<FontFamily>(),
            catalog.default_of::<FontFamily>()
        );
        assert_eq!(state.selections().value_of(CategoryKind::FontColor), "black");
        assert_eq!(state.visibility(), Visibility::Closed);
    }

    #[test]
    fn set_returns_previous_option() {
        let catalog = Catalog::standard();
        let mut selections = Selections::defaults(&catalog);
        let previous = selections.set(StyleOption::<ContentWidth>::new("Wide", "1394px"));
        assert_eq!(previous.value(), "800px");
        assert_eq!(selections.value_of(CategoryKind::ContentWidth), "1394px");
    }

    #[test]
    fn options_outside_the_catalog_are_accepted() {
        let catalog = Catalog::standard();
        let mut state = PanelState::new(&catalog);
        state.set_selection(StyleOption::<FontColor>::new("Teal", "#008080"));
        assert_eq!(state.selections().value_of(CategoryKind::FontColor), "#008080");
    }

    #[test]
    fn toggle_never_alters_selections() {
        let catalog = Catalog::standard();
        let mut state = PanelState::new(&catalog);
        state.set_selection(StyleOption::<FontFamily>::new("Ubuntu", "Ubuntu"));
        let before = state.selections().clone();

        assert_eq!(state.toggle_visibility(), Visibility::Open);
        assert_eq!(state.toggle_visibility(), Visibility::Closed);
        assert_eq!(state.selections(), &before);
    }

    #[test]
    fn reset_restores_every_default_and_keeps_visibility() {
        let catalog = Catalog::standard();
        let mut state = PanelState::new(&catalog);
        state.toggle_visibility();
        for kind in CategoryKind::ALL {
            let last = catalog.len_of(kind) - 1;
            state.set_selection(catalog.selection_at(kind, last).unwrap());
        }
        assert_ne!(state.selections(), &Selections::defaults(&catalog));

        state.reset_selections(&catalog);
        assert_eq!(state.selections(), &Selections::defaults(&catalog));
        assert!(state.visibility().is_open());
    }

    #[test]
    fn selection_from_typed_option() {
        let selection: Selection = StyleOption::<BackgroundColor>::new("Gray", "gray").into();
        assert_eq!(selection.kind(), CategoryKind::BackgroundColor);
        assert_eq!(selection.label(), "Gray");
        assert_eq!(selection.value(), "gray");
    }
}
