//! Page geometry in document units (millimetres).

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// ISO 216 A4, portrait.
    pub const A4: Size = Size {
        width: 210.0,
        height: 297.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Page margins. The bottom edge is never used because the invoice is a
/// single page without overflow handling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Margins {
    pub left: f32,
    pub top: f32,
    pub right: f32,
}

impl Margins {
    pub fn new(left: f32, top: f32, right: f32) -> Self {
        Self { left, top, right }
    }

    /// Width left between the horizontal margins of a page.
    pub fn safe_width(&self, page: Size) -> f32 {
        page.width - self.left - self.right
    }
}
