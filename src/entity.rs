use glam::Vec2;

use crate::geometry::Aabb;

/// Position and per-tick velocity shared by every moving thing in the world.
///
/// `position` is the top-left corner of a fixed 16×16 box, in world pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Body {
    pub fn at(x: f32, y: f32) -> Self {
        Self { position: Vec2::new(x, y), velocity: Vec2::ZERO }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::entity_box(self.position)
    }

    /// Centre of the box; what the camera follows.
    pub fn center(&self) -> Vec2 {
        self.position + Vec2::splat(crate::geometry::ENTITY_SIZE / 2.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub body: Body,
    pub health: u32,
}

impl Player {
    pub fn new(x: f32, y: f32, health: u32) -> Self {
        Self { body: Body::at(x, y), health }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub body: Body,
    /// Chases the player when set, otherwise stands still.
    pub follows_player: bool,
}

impl Enemy {
    pub fn new(x: f32, y: f32, follows_player: bool) -> Self {
        Self { body: Body::at(x, y), follows_player }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Potion {
    pub body: Body,
    pub healing_points: u32,
}

impl Potion {
    pub fn new(x: f32, y: f32, healing_points: u32) -> Self {
        Self { body: Body::at(x, y), healing_points }
    }
}
