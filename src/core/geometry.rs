//! Play-field bounds and axis-aligned box helpers.
//!
//! Coordinates follow the drawing surface: origin at the top-left corner,
//! `y` grows downward.

use super::constants::{DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH, WIDE_VIEWPORT_THRESHOLD};

/// The bounded play area. Drives pipe gap placement and the avatar floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub width: u32,
    pub height: u32,
}

impl Field {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Pick a field for a host viewport. Wide viewports (desktop windows) get the
    /// fixed 320x480 field; narrow ones (phones) play at their own size.
    pub fn from_viewport(width: u32, height: u32) -> Self {
        if width >= WIDE_VIEWPORT_THRESHOLD {
            Self::default()
        } else {
            Self::new(width, height)
        }
    }

    pub fn width_f64(&self) -> f64 {
        self.width as f64
    }

    pub fn height_f64(&self) -> f64 {
        self.height as f64
    }

    /// The whole field as a rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width_f64(), self.height_f64())
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(DEFAULT_FIELD_WIDTH, DEFAULT_FIELD_HEIGHT)
    }
}

/// A rectangle given by origin and extent, as handed to a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Edge coordinates of a collision box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    /// Box for a bordered sprite at `(x, y)`.
    ///
    /// The origin moves up and left by `border` and each extent grows by one
    /// `border`, so the box spans `[x - border, x + width]` horizontally and
    /// `[y - border, y + height]` vertically.
    pub fn bordered(x: f64, y: f64, width: f64, height: f64, border: f64) -> Self {
        let left = x - border;
        let top = y - border;
        Self {
            left,
            right: left + width + border,
            top,
            bottom: top + height + border,
        }
    }

    /// Strict horizontal overlap with the span `[left, right]`.
    pub fn overlaps_horizontally(&self, left: f64, right: f64) -> bool {
        self.right > left && self.left < right
    }
}
