// =============================================================================
// GEOMETRY.RS — Axis-aligned rectangles and direction helpers
//
// Everything in world space is measured in floating-point pixels with the
// origin at the top-left and Y growing downwards.
// =============================================================================

use glam::Vec2;

/// Side length of every entity's bounding box, in pixels.
pub const ENTITY_SIZE: f32 = 16.0;

// =============================================================================
// AABB
// =============================================================================

/// Axis-aligned rectangle in world pixels, stored as top-left + extent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// The 16×16 box of an entity whose top-left corner is `position`.
    pub fn entity_box(position: Vec2) -> Self {
        Self::new(position.x, position.y, ENTITY_SIZE, ENTITY_SIZE)
    }

    #[inline]
    pub fn min_x(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn min_y(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// Strict overlap test: rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min_x() < other.max_x()
            && self.max_x() > other.min_x()
            && self.min_y() < other.max_y()
            && self.max_y() > other.min_y()
    }
}

// =============================================================================
// DIRECTION HELPERS
// =============================================================================

/// Three-way sign: `-1.0`, `0.0` or `1.0`.
///
/// Unlike `f32::signum`, zero maps to zero.
#[inline]
pub fn sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Per-axis unit step from `from` toward `to`. Each component is -1, 0 or 1,
/// independent of distance.
pub fn direction_toward(from: Vec2, to: Vec2) -> Vec2 {
    Vec2::new(sign(to.x - from.x), sign(to.y - from.y))
}
