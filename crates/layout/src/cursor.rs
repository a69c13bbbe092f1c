use tally_types::Point;

/// A layout position threaded explicitly through the rendering stages.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutCursor {
    pub x: f32,
    pub y: f32,
}

impl LayoutCursor {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Moves down by `dy`, keeping the column.
    pub fn down(self, dy: f32) -> Self {
        Self {
            y: self.y + dy,
            ..self
        }
    }

    pub fn right(self, dx: f32) -> Self {
        Self {
            x: self.x + dx,
            ..self
        }
    }

    pub fn with_x(self, x: f32) -> Self {
        Self { x, ..self }
    }

    pub fn point(self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Joins two independently laid out columns: the lower of the two bottoms
/// plus `margin`.
pub fn reconcile(a: f32, b: f32, margin: f32) -> f32 {
    a.max(b) + margin
}
