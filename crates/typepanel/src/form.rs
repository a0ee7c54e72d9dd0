#![forbid(unsafe_code)]

//! Form schema: what the panel shows and in which order.
//!
//! Renderers walk [`FormSchema::items`] and draw each entry with their own
//! primitives. Controls report changes through
//! [`StylePanel::select_index`](crate::panel::StylePanel::select_index);
//! buttons map to [`ButtonRole`].

use crate::catalog::CategoryKind;

/// Control primitive used for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    /// Dropdown with a popup list.
    Select,
    /// Inline radio buttons.
    RadioGroup,
}

/// What a form button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonRole {
    /// Restore defaults and notify the host.
    Reset,
    /// Submit the form, applying pending selections.
    Submit,
}

/// A button in the footer row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormButton {
    pub role: ButtonRole,
    pub label: &'static str,
}

/// One entry of the form, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormItem {
    Heading(&'static str),
    Control {
        category: CategoryKind,
        kind: ControlKind,
        title: &'static str,
    },
    Separator,
    Buttons(Vec<FormButton>),
}

/// Ordered form layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSchema {
    items: Vec<FormItem>,
}

impl FormSchema {
    /// The article parameters form.
    #[must_use]
    pub fn article() -> Self {
        let control = |category, kind, title| FormItem::Control {
            category,
            kind,
            title,
        };
        Self {
            items: vec![
                FormItem::Heading("Set parameters"),
                control(CategoryKind::FontFamily, ControlKind::Select, "Font"),
                control(CategoryKind::FontSize, ControlKind::RadioGroup, "Font size"),
                control(CategoryKind::FontColor, ControlKind::Select, "Font color"),
                FormItem::Separator,
                control(
                    CategoryKind::BackgroundColor,
                    ControlKind::Select,
                    "Background color",
                ),
                control(CategoryKind::ContentWidth, ControlKind::Select, "Content width"),
                FormItem::Buttons(vec![
                    FormButton {
                        role: ButtonRole::Reset,
                        label: "Reset",
                    },
                    FormButton {
                        role: ButtonRole::Submit,
                        label: "Apply",
                    },
                ]),
            ],
        }
    }

    #[must_use]
    pub fn items(&self) -> &[FormItem] {
        &self.items
    }

    /// Controls in display order.
    pub fn controls(&self) -> impl Iterator<Item = (CategoryKind, ControlKind, &'static str)> + '_ {
        self.items.iter().filter_map(|item| match item {
            FormItem::Control {
                category,
                kind,
                title,
            } => Some((*category, *kind, *title)),
            _ => None,
        })
    }

    /// Control bound to `category`.
    #[must_use]
    pub fn control_for(&self, category: CategoryKind) -> Option<(ControlKind, &'static str)> {
        self.controls()
            .find(|(candidate, _, _)| *candidate == category)
            .map(|(_, kind, title)| (kind, title))
    }
}

impl Default for FormSchema {
    fn default() -> Self {
        Self::article()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_exactly_one_control() {
        let schema = FormSchema::article();
        for kind in CategoryKind::ALL {
            let count = schema.controls().filter(|(c, _, _)| *c == kind).count();
            assert_eq!(count, 1, "{kind}");
        }
    }

    #[test]
    fn controls_follow_category_order() {
        let order: Vec<_> = FormSchema::article().controls().map(|(c, _, _)| c).collect();
        assert_eq!(order, CategoryKind::ALL);
    }

    #[test]
    fn font_size_is_a_radio_group() {
        let schema = FormSchema::article();
        assert_eq!(
            schema.control_for(CategoryKind::FontSize),
            Some((ControlKind::RadioGroup, "Font size"))
        );
        assert_eq!(
            schema.control_for(CategoryKind::FontFamily).map(|(k, _)| k),
            Some(ControlKind::Select)
        );
    }

    #[test]
    fn separator_splits_text_from_page_controls() {
        let items = FormSchema::article().items().to_vec();
        let separator = items
            .iter()
            .position(|item| *item == FormItem::Separator)
            .unwrap();
        assert!(matches!(
            items[separator - 1],
            FormItem::Control {
                category: CategoryKind::FontColor,
                ..
            }
        ));
        assert!(matches!(
            items[separator + 1],
            FormItem::Control {
                category: CategoryKind::BackgroundColor,
                ..
            }
        ));
    }

    #[test]
    fn footer_has_reset_then_submit() {
        let schema = FormSchema::article();
        let Some(FormItem::Buttons(buttons)) = schema.items().last() else {
            panic!("form must end with the button row");
        };
        let roles: Vec<_> = buttons.iter().map(|b| b.role).collect();
        assert_eq!(roles, [ButtonRole::Reset, ButtonRole::Submit]);
    }
}
