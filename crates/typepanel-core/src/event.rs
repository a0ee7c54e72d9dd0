#![forbid(unsafe_code)]

//! Canonical input events delivered by a host document.
//!
//! The panel only cares about pointer presses (for outside-click dismissal),
//! but hosts forward whatever their backend produces; unrelated events are
//! carried through so a single dispatch loop can feed every consumer.
//!
//! # Design Notes
//!
//! - Pointer coordinates are 0-indexed cells, origin at top-left
//! - Every button press counts as a "down" event; callers that care about a
//!   specific button match on [`PointerEventKind::Down`]

use bitflags::bitflags;
#[cfg(not(target_arch = "wasm32"))]
use crossterm::event as cte;

/// Canonical input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A pointer (mouse) event.
    Pointer(PointerEvent),

    /// Host viewport was resized.
    Resize {
        /// New viewport width in cells.
        width: u16,
        /// New viewport height in cells.
        height: u16,
    },

    /// Focus gained (`true`) or lost (`false`).
    Focus(bool),
}

impl Event {
    /// Convert a Crossterm event into an [`Event`].
    ///
    /// Keyboard and paste input have no meaning for the panel and map to `None`.
    #[must_use]
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_crossterm(event: cte::Event) -> Option<Self> {
        match event {
            cte::Event::Mouse(mouse) => Some(Event::Pointer(PointerEvent::from_crossterm(mouse))),
            cte::Event::Resize(width, height) => Some(Event::Resize { width, height }),
            cte::Event::FocusGained => Some(Event::Focus(true)),
            cte::Event::FocusLost => Some(Event::Focus(false)),
            _ => None,
        }
    }

    /// The pointer payload, if this is a pointer event.
    #[must_use]
    pub const fn as_pointer(&self) -> Option<&PointerEvent> {
        match self {
            Event::Pointer(pointer) => Some(pointer),
            _ => None,
        }
    }
}

bitflags! {
    /// Modifier keys held during a pointer event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// A pointer event at a cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// What happened.
    pub kind: PointerEventKind,

    /// X coordinate (0-indexed).
    pub x: u16,

    /// Y coordinate (0-indexed).
    pub y: u16,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(kind: PointerEventKind, x: u16, y: u16) -> Self {
        Self {
            kind,
            x,
            y,
            modifiers: Modifiers::NONE,
        }
    }

    /// Left-button press at `(x, y)`.
    #[must_use]
    pub const fn down(x: u16, y: u16) -> Self {
        Self::new(PointerEventKind::Down(PointerButton::Left), x, y)
    }

    /// Left-button release at `(x, y)`.
    #[must_use]
    pub const fn up(x: u16, y: u16) -> Self {
        Self::new(PointerEventKind::Up(PointerButton::Left), x, y)
    }

    /// Attach modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Position as `(x, y)`.
    #[must_use]
    pub const fn position(&self) -> (u16, u16) {
        (self.x, self.y)
    }

    /// True for a press of any button.
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self.kind, PointerEventKind::Down(_))
    }

    /// Convert a Crossterm mouse event.
    #[must_use]
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_crossterm(event: cte::MouseEvent) -> Self {
        let kind = match event.kind {
            cte::MouseEventKind::Down(button) => PointerEventKind::Down(map_button(button)),
            cte::MouseEventKind::Up(button) => PointerEventKind::Up(map_button(button)),
            cte::MouseEventKind::Drag(button) => PointerEventKind::Drag(map_button(button)),
            cte::MouseEventKind::Moved => PointerEventKind::Moved,
            cte::MouseEventKind::ScrollUp => PointerEventKind::ScrollUp,
            cte::MouseEventKind::ScrollDown => PointerEventKind::ScrollDown,
            cte::MouseEventKind::ScrollLeft => PointerEventKind::ScrollLeft,
            cte::MouseEventKind::ScrollRight => PointerEventKind::ScrollRight,
        };

        PointerEvent::new(kind, event.column, event.row)
            .with_modifiers(map_modifiers(event.modifiers))
    }
}

/// The type of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Button pressed.
    Down(PointerButton),
    /// Button released.
    Up(PointerButton),
    /// Pointer moved with a button held.
    Drag(PointerButton),
    /// Pointer moved, no button held.
    Moved,
    /// Wheel scrolled up.
    ScrollUp,
    /// Wheel scrolled down.
    ScrollDown,
    /// Wheel scrolled left.
    ScrollLeft,
    /// Wheel scrolled right.
    ScrollRight,
}

/// Pointer button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary button.
    Left,
    /// Secondary button.
    Right,
    /// Middle button (wheel click).
    Middle,
}

#[cfg(not(target_arch = "wasm32"))]
fn map_button(button: cte::MouseButton) -> PointerButton {
    match button {
        cte::MouseButton::Left => PointerButton::Left,
        cte::MouseButton::Right => PointerButton::Right,
        cte::MouseButton::Middle => PointerButton::Middle,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn map_modifiers(modifiers: cte::KeyModifiers) -> Modifiers {
    let mut mapped = Modifiers::NONE;
    if modifiers.contains(cte::KeyModifiers::SHIFT) {
        mapped |= Modifiers::SHIFT;
    }
    if modifiers.contains(cte::KeyModifiers::ALT) {
        mapped |= Modifiers::ALT;
    }
    if modifiers.contains(cte::KeyModifiers::CONTROL) {
        mapped |= Modifiers::CTRL;
    }
    if modifiers.intersects(
        cte::KeyModifiers::SUPER | cte::KeyModifiers::HYPER | cte::KeyModifiers::META,
    ) {
        mapped |= Modifiers::SUPER;
    }
    mapped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn down_constructor_uses_left_button() {
        let event = PointerEvent::down(3, 4);
        assert_eq!(event.kind, PointerEventKind::Down(PointerButton::Left));
        assert_eq!(event.position(), (3, 4));
        assert_eq!(event.modifiers, Modifiers::NONE);
    }

    #[test]
    fn every_button_press_is_down() {
        for button in [PointerButton::Left, PointerButton::Right, PointerButton::Middle] {
            let event = PointerEvent::new(PointerEventKind::Down(button), 0, 0);
            assert!(event.is_down());
        }
    }

    #[test]
    fn release_move_and_scroll_are_not_down() {
        let kinds = [
            PointerEventKind::Up(PointerButton::Left),
            PointerEventKind::Drag(PointerButton::Left),
            PointerEventKind::Moved,
            PointerEventKind::ScrollUp,
            PointerEventKind::ScrollDown,
        ];
        for kind in kinds {
            assert!(!PointerEvent::new(kind, 1, 1).is_down(), "{kind:?}");
        }
    }

    #[test]
    fn as_pointer_filters_other_events() {
        let pointer = Event::Pointer(PointerEvent::up(1, 2));
        assert_eq!(pointer.as_pointer(), Some(&PointerEvent::up(1, 2)));
        assert_eq!(Event::Focus(true).as_pointer(), None);
        assert_eq!(
            Event::Resize {
                width: 80,
                height: 24
            }
            .as_pointer(),
            None
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod crossterm_mapping {
        use crate::event::*;
        use crossterm::event as ct_event;

        #[test]
        fn maps_mouse_down_with_modifiers() {
            let mouse = ct_event::MouseEvent {
                kind: ct_event::MouseEventKind::Down(ct_event::MouseButton::Right),
                column: 10,
                row: 5,
                modifiers: ct_event::KeyModifiers::SHIFT | ct_event::KeyModifiers::CONTROL,
            };

            let mapped = Event::from_crossterm(ct_event::Event::Mouse(mouse));
            let expected = PointerEvent::new(PointerEventKind::Down(PointerButton::Right), 10, 5)
                .with_modifiers(Modifiers::SHIFT | Modifiers::CTRL);
            assert_eq!(mapped, Some(Event::Pointer(expected)));
        }

        #[test]
        fn maps_meta_to_super() {
            let mouse = ct_event::MouseEvent {
                kind: ct_event::MouseEventKind::Moved,
                column: 0,
                row: 0,
                modifiers: ct_event::KeyModifiers::META,
            };
            assert_eq!(
                PointerEvent::from_crossterm(mouse).modifiers,
                Modifiers::SUPER
            );
        }

        #[test]
        fn maps_resize_and_focus() {
            assert_eq!(
                Event::from_crossterm(ct_event::Event::Resize(120, 40)),
                Some(Event::Resize {
                    width: 120,
                    height: 40
                })
            );
            assert_eq!(
                Event::from_crossterm(ct_event::Event::FocusLost),
                Some(Event::Focus(false))
            );
        }

        #[test]
        fn drops_keyboard_and_paste() {
            let key = ct_event::KeyEvent::new(
                ct_event::KeyCode::Char('q'),
                ct_event::KeyModifiers::NONE,
            );
            assert_eq!(Event::from_crossterm(ct_event::Event::Key(key)), None);
            assert_eq!(
                Event::from_crossterm(ct_event::Event::Paste("x".into())),
                None
            );
        }
    }
}
