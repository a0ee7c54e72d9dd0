#![forbid(unsafe_code)]

//! Side-panel placement inside a host viewport.
//!
//! The panel slides in from one edge. The arrow trigger button sits on the
//! panel's inner edge when open and on the viewport edge when closed. The
//! trigger is reported as a descendant region of the panel so that pressing
//! it is handled by the trigger, never by outside-press dismissal.

use typepanel_core::geometry::{Rect, Size};

use crate::dismiss::PanelBounds;

/// Viewport edge the panel is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "config", derive(serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum Side {
    #[default]
    Left,
    Right,
}

/// Where the panel and its trigger are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelGeometry {
    /// Panel area; empty while closed.
    pub panel: Rect,
    /// Arrow trigger button.
    pub trigger: Rect,
}

/// Placement rules for the side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidePanelLayout {
    pub side: Side,
    /// Preferred panel width in cells.
    pub width: u16,
    /// Arrow trigger size in cells.
    pub trigger: Size,
    /// Rows between the viewport top and the trigger.
    pub trigger_offset: u16,
}

impl Default for SidePanelLayout {
    fn default() -> Self {
        Self {
            side: Side::Left,
            width: 48,
            trigger: Size::new(3, 3),
            trigger_offset: 1,
        }
    }
}

impl SidePanelLayout {
    #[must_use]
    pub fn new(side: Side, width: u16) -> Self {
        Self {
            side,
            width,
            ..Self::default()
        }
    }

    /// Panel and trigger rectangles for `viewport`.
    ///
    /// The panel is clamped so the trigger always stays on screen.
    #[must_use]
    pub fn compute(&self, viewport: Size, open: bool) -> PanelGeometry {
        let trigger_w = self.trigger.width.min(viewport.width);
        let trigger_h = self
            .trigger
            .height
            .min(viewport.height.saturating_sub(self.trigger_offset));
        let panel_w = if open {
            self.width.min(viewport.width.saturating_sub(trigger_w))
        } else {
            0
        };
        let trigger_y = self.trigger_offset.min(viewport.height);

        match self.side {
            Side::Left => PanelGeometry {
                panel: Rect::new(0, 0, panel_w, if open { viewport.height } else { 0 }),
                trigger: Rect::new(panel_w, trigger_y, trigger_w, trigger_h),
            },
            Side::Right => {
                let panel_x = viewport.width.saturating_sub(panel_w);
                PanelGeometry {
                    panel: Rect::new(panel_x, 0, panel_w, if open { viewport.height } else { 0 }),
                    trigger: Rect::new(
                        panel_x.saturating_sub(trigger_w),
                        trigger_y,
                        trigger_w,
                        trigger_h,
                    ),
                }
            }
        }
    }

    /// Hit-test bounds: the panel root plus the trigger.
    #[must_use]
    pub fn bounds(&self, viewport: Size, open: bool) -> PanelBounds {
        let geometry = self.compute(viewport, open);
        PanelBounds::new(geometry.panel).with_region(geometry.trigger)
    }
}
