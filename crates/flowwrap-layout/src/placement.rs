//! Placement output of the layout pass.

use glam::IVec2;

/// Edge-based rectangle in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    /// Create bounds from edges.
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Create bounds from an origin and a size vector.
    pub fn from_vecs(origin: IVec2, size: IVec2) -> Self {
        Self {
            left: origin.x,
            top: origin.y,
            right: origin.x.saturating_add(size.x),
            bottom: origin.y.saturating_add(size.y),
        }
    }

    /// Top-left corner.
    pub fn origin(&self) -> IVec2 {
        IVec2::new(self.left, self.top)
    }

    /// Width and height as a vector.
    pub fn size(&self) -> IVec2 {
        IVec2::new(self.width(), self.height())
    }

    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Check if a point is inside the bounds (right/bottom exclusive).
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}

/// Where a single visible child was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Index of the child in the input sequence
    pub index: usize,
    /// Zero-based line the child landed on
    pub line: usize,
    /// Content box, margins excluded
    pub bounds: Bounds,
}

/// Find the child whose content box contains the point.
pub fn hit_test(placements: &[Placement], x: i32, y: i32) -> Option<usize> {
    placements
        .iter()
        .rev()
        .find(|placement| placement.bounds.contains(x, y))
        .map(|placement| placement.index)
}
