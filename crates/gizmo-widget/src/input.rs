//! Input event types delivered by the embedding toolkit

use glam::Vec2;

/// Mouse button identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Left button; the only button that starts translate drags
    Primary,
    /// Right button; reinterprets a translate handle as a scale drag
    Secondary,
    /// Middle button; reinterprets a translate handle as a rotate drag
    Tertiary,
}

/// A press/move/release event at a screen position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Screen-space position
    pub position: Vec2,
    /// Button for press events; `None` for plain motion
    pub button: Option<PointerButton>,
}

impl PointerEvent {
    /// A button press or release at the given position
    pub fn press(button: PointerButton, position: Vec2) -> Self {
        Self {
            position,
            button: Some(button),
        }
    }

    /// Plain pointer motion
    pub fn motion(position: Vec2) -> Self {
        Self {
            position,
            button: None,
        }
    }
}

/// A scroll-wheel event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    /// Screen-space position of the cursor
    pub position: Vec2,
    /// Vertical scroll delta; sign selects rotation direction
    pub delta: f32,
}

/// Cursor feedback the caller should apply to the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorIcon {
    /// Nothing under the cursor
    #[default]
    Default,
    /// A handle is hovered or dragged
    Move,
}
