#![forbid(unsafe_code)]

//! Option catalog: the selectable choices for each style category.
//!
//! Every category has its own marker type ([`FontFamily`], [`FontSize`], ...)
//! and options are typed by their category, so a font-size option cannot be
//! stored in the font-family slot:
//!
//! ```compile_fail
//! use typepanel::catalog::{FontFamily, FontSize, StyleOption};
//! use typepanel::selection::Selections;
//! # let catalog = typepanel::catalog::Catalog::standard();
//! let mut selections = Selections::defaults(&catalog);
//! let size: StyleOption<FontSize> = StyleOption::new("24px", "24px");
//! let _: StyleOption<FontFamily> = selections.set(size);
//! ```
//!
//! The catalog itself is immutable once built. The panel never validates
//! that a pending option belongs to its list; a list only rejects an empty
//! option set or a default that is not one of its options.

use core::fmt;
use core::marker::PhantomData;

use crate::selection::{Selection, Selections};
use crate::style::StyleVar;

/// The five independent style dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

impl CategoryKind {
    /// All categories in form order.
    pub const ALL: [CategoryKind; 5] = [
        CategoryKind::FontFamily,
        CategoryKind::FontSize,
        CategoryKind::FontColor,
        CategoryKind::BackgroundColor,
        CategoryKind::ContentWidth,
    ];

    /// Snake-case name, as used in configuration files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CategoryKind::FontFamily => "font_family",
            CategoryKind::FontSize => "font_size",
            CategoryKind::FontColor => "font_color",
            CategoryKind::BackgroundColor => "background_color",
            CategoryKind::ContentWidth => "content_width",
        }
    }

    /// Style variable this category projects onto.
    #[must_use]
    pub const fn style_var(self) -> StyleVar {
        match self {
            CategoryKind::FontFamily => StyleVar::FontFamily,
            CategoryKind::FontSize => StyleVar::FontSize,
            CategoryKind::FontColor => StyleVar::FontColor,
            CategoryKind::BackgroundColor => StyleVar::BgColor,
            CategoryKind::ContentWidth => StyleVar::ContainerWidth,
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A style category marker.
///
/// Sealed: the set of categories is closed. The associated functions route
/// a typed option to its slot in a [`Catalog`] or [`Selections`] record.
pub trait Category:
    sealed::Sealed + Copy + Eq + fmt::Debug + 'static
{
    /// Runtime tag for this category.
    const KIND: CategoryKind;

    /// This category's option list.
    fn list(catalog: &Catalog) -> &OptionList<Self>;

    /// Pending selection slot.
    fn slot(selections: &Selections) -> &StyleOption<Self>;

    /// Mutable pending selection slot.
    fn slot_mut(selections: &mut Selections) -> &mut StyleOption<Self>;

    /// Erase the category into a [`Selection`].
    fn wrap(option: StyleOption<Self>) -> Selection;
}

macro_rules! categories {
    ($($(#[$doc:meta])* $marker:ident => $field:ident;)*) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            pub struct $marker;

            impl sealed::Sealed for $marker {}

            impl Category for $marker {
                const KIND: CategoryKind = CategoryKind::$marker;

                fn list(catalog: &Catalog) -> &OptionList<Self> {
                    &catalog.$field
                }

                fn slot(selections: &Selections) -> &StyleOption<Self> {
                    &selections.$field
                }

                fn slot_mut(selections: &mut Selections) -> &mut StyleOption<Self> {
                    &mut selections.$field
                }

                fn wrap(option: StyleOption<Self>) -> Selection {
                    Selection::$marker(option)
                }
            }
        )*
    };
}

categories! {
    /// Typeface of the article text.
    FontFamily => font_family;
    /// Base text size.
    FontSize => font_size;
    /// Text color.
    FontColor => font_color;
    /// Page background color.
    BackgroundColor => background_color;
    /// Width of the article column.
    ContentWidth => content_width;
}

/// One selectable choice: a display label and the style value it emits.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StyleOption<C> {
    label: String,
    value: String,
    _category: PhantomData<fn() -> C>,
}

impl<C: Category> StyleOption<C> {
    /// Create an option.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            _category: PhantomData,
        }
    }

    /// Display text.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Underlying style value, passed through to the host untouched.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Category this option belongs to.
    #[must_use]
    pub const fn category(&self) -> CategoryKind {
        C::KIND
    }
}

impl<C: Category> fmt::Debug for StyleOption<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleOption")
            .field("category", &C::KIND)
            .field("label", &self.label)
            .field("value", &self.value)
            .finish()
    }
}

/// Errors raised while building a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A category has no options.
    Empty { category: CategoryKind },
    /// The designated default is not one of the category's options.
    DefaultNotListed {
        category: CategoryKind,
        value: String,
    },
    /// Configuration text could not be parsed.
    Parse(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { category } => write!(f, "category `{category}` has no options"),
            Self::DefaultNotListed { category, value } => write!(
                f,
                "default `{value}` is not an option of category `{category}`"
            ),
            Self::Parse(msg) => write!(f, "invalid catalog configuration: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Ordered options of one category plus its designated default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionList<C: Category> {
    options: Vec<StyleOption<C>>,
    default_index: usize,
}

impl<C: Category> OptionList<C> {
    /// Build a list whose default is `default`.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Empty`] for an empty list,
    /// [`CatalogError::DefaultNotListed`] if `default` is not in `options`.
    pub fn new(options: Vec<StyleOption<C>>, default: &StyleOption<C>) -> Result<Self, CatalogError> {
        if options.is_empty() {
            return Err(CatalogError::Empty { category: C::KIND });
        }
        let default_index = options
            .iter()
            .position(|option| option == default)
            .ok_or_else(|| CatalogError::DefaultNotListed {
                category: C::KIND,
                value: default.value().to_owned(),
            })?;
        Ok(Self {
            options,
            default_index,
        })
    }

    /// Build a list whose default is the first option carrying `value`.
    ///
    /// # Errors
    ///
    /// Same as [`OptionList::new`].
    pub fn with_default_value(
        options: Vec<StyleOption<C>>,
        value: &str,
    ) -> Result<Self, CatalogError> {
        if options.is_empty() {
            return Err(CatalogError::Empty { category: C::KIND });
        }
        let default_index = options
            .iter()
            .position(|option| option.value() == value)
            .ok_or_else(|| CatalogError::DefaultNotListed {
                category: C::KIND,
                value: value.to_owned(),
            })?;
        Ok(Self {
            options,
            default_index,
        })
    }

    /// Options in display order.
    #[must_use]
    pub fn options(&self) -> &[StyleOption<C>] {
        &self.options
    }

    /// The designated default option.
    #[must_use]
    pub fn default_option(&self) -> &StyleOption<C> {
        &self.options[self.default_index]
    }

    /// Index of the default option.
    #[must_use]
    pub const fn default_index(&self) -> usize {
        self.default_index
    }

    /// Option at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&StyleOption<C>> {
        self.options.get(index)
    }

    /// First option whose value is `value`.
    #[must_use]
    pub fn find(&self, value: &str) -> Option<&StyleOption<C>> {
        self.options.iter().find(|option| option.value() == value)
    }

    /// Index of `option` in this list.
    #[must_use]
    pub fn position(&self, option: &StyleOption<C>) -> Option<usize> {
        self.options.iter().position(|candidate| candidate == option)
    }

    /// Number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Always false for a constructed list; provided for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// The five option lists the panel draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub(crate) font_family: OptionList<FontFamily>,
    pub(crate) font_size: OptionList<FontSize>,
    pub(crate) font_color: OptionList<FontColor>,
    pub(crate) background_color: OptionList<BackgroundColor>,
    pub(crate) content_width: OptionList<ContentWidth>,
}

impl Catalog {
    /// Assemble a catalog from its five lists.
    #[must_use]
    pub fn new(
        font_family: OptionList<FontFamily>,
        font_size: OptionList<FontSize>,
        font_color: OptionList<FontColor>,
        background_color: OptionList<BackgroundColor>,
        content_width: OptionList<ContentWidth>,
    ) -> Self {
        Self {
            font_family,
            font_size,
            font_color,
            background_color,
            content_width,
        }
    }

    /// The option list of category `C`.
    #[must_use]
    pub fn list<C: Category>(&self) -> &OptionList<C> {
        C::list(self)
    }

    /// The default option of category `C`.
    #[must_use]
    pub fn default_of<C: Category>(&self) -> &StyleOption<C> {
        C::list(self).default_option()
    }

    /// Option `index` of `kind`, erased into a [`Selection`].
    #[must_use]
    pub fn selection_at(&self, kind: CategoryKind, index: usize) -> Option<Selection> {
        fn pick<C: Category>(catalog: &Catalog, index: usize) -> Option<Selection> {
            catalog.list::<C>().get(index).cloned().map(C::wrap)
        }
        match kind {
            CategoryKind::FontFamily => pick::<FontFamily>(self, index),
            CategoryKind::FontSize => pick::<FontSize>(self, index),
            CategoryKind::FontColor => pick::<FontColor>(self, index),
            CategoryKind::BackgroundColor => pick::<BackgroundColor>(self, index),
            CategoryKind::ContentWidth => pick::<ContentWidth>(self, index),
        }
    }

    /// Number of options in `kind`.
    #[must_use]
    pub fn len_of(&self, kind: CategoryKind) -> usize {
        match kind {
            CategoryKind::FontFamily => self.font_family.len(),
            CategoryKind::FontSize => self.font_size.len(),
            CategoryKind::FontColor => self.font_color.len(),
            CategoryKind::BackgroundColor => self.background_color.len(),
            CategoryKind::ContentWidth => self.content_width.len(),
        }
    }

    /// Built-in article catalog.
    ///
    /// Defaults: Open Sans, 18px, black text, white background, 800px column.
    #[must_use]
    pub fn standard() -> Self {
        let families = ["Open Sans", "Ubuntu", "Cormorant Garamond", "Days One", "Merriweather"]
            .into_iter()
            .map(|name| StyleOption::new(name, name))
            .collect();
        let sizes = ["18px", "24px", "38px"]
            .into_iter()
            .map(|size| StyleOption::new(size, size))
            .collect();
        let palette = [
            ("Black", "black"),
            ("White", "white"),
            ("Gray", "gray"),
            ("Pink", "pink"),
            ("Fuchsia", "fuchsia"),
            ("Yellow", "yellow"),
            ("Green", "green"),
            ("Blue", "blue"),
            ("Purple", "purple"),
        ];
        let font_colors = palette
            .iter()
            .map(|(label, value)| StyleOption::new(*label, *value))
            .collect();
        let backgrounds = [
            ("White", "white"),
            ("Black", "black"),
            ("Gray", "gray"),
            ("Pink", "pink"),
            ("Fuchsia", "fuchsia"),
            ("Yellow", "yellow"),
            ("Green", "green"),
            ("Blue", "blue"),
            ("Purple", "purple"),
        ]
        .into_iter()
        .map(|(label, value)| StyleOption::new(label, value))
        .collect();
        let widths = vec![
            StyleOption::new("Narrow", "800px"),
            StyleOption::new("Wide", "1394px"),
        ];

        // Every default below names an option listed right above it.
        Self {
            font_family: builtin(OptionList::with_default_value(families, "Open Sans")),
            font_size: builtin(OptionList::with_default_value(sizes, "18px")),
            font_color: builtin(OptionList::with_default_value(font_colors, "black")),
            background_color: builtin(OptionList::with_default_value(backgrounds, "white")),
            content_width: builtin(OptionList::with_default_value(widths, "800px")),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn builtin<C: Category>(list: Result<OptionList<C>, CatalogError>) -> OptionList<C> {
    match list {
        Ok(list) => list,
        Err(err) => unreachable!("built-in catalog is malformed: {err}"),
    }
}
