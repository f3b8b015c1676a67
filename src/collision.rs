// =============================================================================
// COLLISION — static obstacles and per-axis motion resolution
// =============================================================================

use crate::entity::Body;
use crate::geometry::{Aabb, ENTITY_SIZE};

/// The world's solid obstacles. Authored separately from the tile data and
/// never modified after startup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollisionField {
    colliders: Vec<Aabb>,
}

impl CollisionField {
    pub fn new(colliders: Vec<Aabb>) -> Self {
        Self { colliders }
    }

    /// Raw rectangles, in authoring order (for debug overlays).
    pub fn colliders(&self) -> &[Aabb] {
        &self.colliders
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    /// Colliders overlapping `bounds`, in list order.
    pub fn overlapping<'a>(&'a self, bounds: &'a Aabb) -> impl Iterator<Item = &'a Aabb> + 'a {
        self.colliders.iter().filter(move |c| c.overlaps(bounds))
    }

    pub fn is_blocked(&self, bounds: &Aabb) -> bool {
        self.overlapping(bounds).next().is_some()
    }
}

/// Move `body` by its velocity, X first then Y, pushing it out of any
/// collider it lands in.
///
/// On each axis the box is moved, then every overlapping collider clamps the
/// box flush against the edge it came through. Colliders are checked in list
/// order against the box as it was after the move, so when several overlap
/// the last one's clamp wins. Y is resolved from the already-resolved X.
/// Zero velocity on an axis leaves that axis untouched, even if overlapping.
pub fn move_and_collide(body: &mut Body, field: &CollisionField) {
    let v = body.velocity;

    if v.x != 0.0 {
        body.position.x += v.x;
        let moved = body.bounds();
        for c in field.overlapping(&moved) {
            if v.x > 0.0 {
                body.position.x = c.min_x() - ENTITY_SIZE;
            } else {
                body.position.x = c.max_x();
            }
        }
    }

    if v.y != 0.0 {
        body.position.y += v.y;
        let moved = body.bounds();
        for c in field.overlapping(&moved) {
            if v.y > 0.0 {
                body.position.y = c.min_y() - ENTITY_SIZE;
            } else {
                body.position.y = c.max_y();
            }
        }
    }
}
