use glam::Vec2;

/// 2D camera: a translation added to every world position before drawing.
///
/// The camera only reads the position it follows; it never owns or mutates
/// the followed entity.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Camera {
    /// Screen-space translation. `screen = world + offset`.
    pub offset: Vec2,
}

impl Camera {
    pub fn new() -> Self {
        Self { offset: Vec2::ZERO }
    }

    /// Centre the viewport on `target` (world pixels).
    pub fn follow_target(&mut self, target: Vec2, viewport: Vec2) {
        self.offset = viewport / 2.0 - target;
    }

    /// Keep the viewport inside the world: `offset.x` is clamped into
    /// `[viewport.x - world.x, 0]`, then `offset.y` likewise.
    ///
    /// The lower bound is applied first and the upper bound last, so when the
    /// world is smaller than the viewport on an axis that axis pins to `0`
    /// instead of centring.
    pub fn constrain(&mut self, world: Vec2, viewport: Vec2) {
        self.offset.x = self.offset.x.max(viewport.x - world.x).min(0.0);
        self.offset.y = self.offset.y.max(viewport.y - world.y).min(0.0);
    }

    /// Where a world position lands on screen.
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world + self.offset
    }

    /// Inverse of [`Camera::world_to_screen`].
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen - self.offset
    }
}
