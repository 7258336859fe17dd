//! Pointer snapshots and device-event tracking

use crate::foundation::math::Point2i;

/// State of the primary pointer button in one snapshot
///
/// A held button is represented by repeated `Pressed` snapshots across
/// consecutive frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryButton {
    /// Primary button is down this frame
    Pressed,
    /// Primary button is up this frame
    Released,
}

/// One frame's pointer input: position plus primary-button state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSnapshot {
    /// Pointer position in screen pixels
    pub position: Point2i,

    /// Primary button state
    pub primary: PrimaryButton,
}

impl PointerSnapshot {
    /// Create a snapshot from raw coordinates and button state
    pub fn new(x: i32, y: i32, primary: PrimaryButton) -> Self {
        Self {
            position: Point2i::new(x, y),
            primary,
        }
    }

    /// Snapshot with the primary button down
    pub fn pressed(x: i32, y: i32) -> Self {
        Self::new(x, y, PrimaryButton::Pressed)
    }

    /// Snapshot with the primary button up
    pub fn released(x: i32, y: i32) -> Self {
        Self::new(x, y, PrimaryButton::Released)
    }

    /// Is the primary button down this frame?
    pub fn is_pressed(&self) -> bool {
        self.primary == PrimaryButton::Pressed
    }

    /// Is the primary button up this frame?
    pub fn is_released(&self) -> bool {
        self.primary == PrimaryButton::Released
    }
}

impl Default for PointerSnapshot {
    fn default() -> Self {
        Self::released(0, 0)
    }
}

/// Accumulates host device events into per-frame snapshots
///
/// Hosts feed position and button events in as they arrive, take one
/// [`PointerSnapshot`] per frame, and call [`end_frame`](Self::end_frame)
/// afterwards so the press/release edge queries stay accurate.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    x: i32,
    y: i32,
    down: bool,
    was_down: bool,
}

impl PointerTracker {
    /// Create a tracker with the pointer at the origin, button up
    pub fn new() -> Self {
        Self {
            x: 0,
            y: 0,
            down: false,
            was_down: false,
        }
    }

    /// Record the latest pointer position
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Record the latest primary-button state
    pub fn set_primary(&mut self, down: bool) {
        self.down = down;
    }

    /// The snapshot for the current frame
    pub fn snapshot(&self) -> PointerSnapshot {
        let primary = if self.down {
            PrimaryButton::Pressed
        } else {
            PrimaryButton::Released
        };
        PointerSnapshot::new(self.x, self.y, primary)
    }

    /// Did the primary button go down since the previous frame?
    pub fn just_pressed(&self) -> bool {
        self.down && !self.was_down
    }

    /// Did the primary button go up since the previous frame?
    pub fn just_released(&self) -> bool {
        !self.down && self.was_down
    }

    /// Close out the frame (call after the snapshot has been consumed)
    pub fn end_frame(&mut self) {
        self.was_down = self.down;
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}
