use std::collections::VecDeque;

use glam::Vec2;

/// Directional intent for a single tick, as produced by whatever polls the
/// keyboard (or a script).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveIntent {
    pub const IDLE: Self = Self { up: false, down: false, left: false, right: false };
    pub const RIGHT: Self = Self { up: false, down: false, left: false, right: true };
    pub const LEFT: Self = Self { up: false, down: false, left: true, right: false };
    pub const UP: Self = Self { up: true, down: false, left: false, right: false };
    pub const DOWN: Self = Self { up: false, down: true, left: false, right: false };

    /// Velocity for this intent. Each held direction contributes `speed`
    /// on its axis; opposite directions cancel. Diagonals are not normalised.
    pub fn velocity(self, speed: f32) -> Vec2 {
        let mut v = Vec2::ZERO;
        if self.right {
            v.x += speed;
        }
        if self.left {
            v.x -= speed;
        }
        if self.up {
            v.y -= speed;
        }
        if self.down {
            v.y += speed;
        }
        v
    }

    pub fn is_idle(self) -> bool {
        self == Self::IDLE
    }
}

/// Supplies one [`MoveIntent`] per tick.
pub trait IntentSource {
    fn next_intent(&mut self) -> MoveIntent;
}

/// Replays a fixed sequence of intents, then idles forever.
#[derive(Debug, Default, Clone)]
pub struct ScriptedIntents {
    queue: VecDeque<MoveIntent>,
}

impl ScriptedIntents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `intent` for the next `ticks` ticks.
    pub fn hold(mut self, intent: MoveIntent, ticks: usize) -> Self {
        self.queue.extend(std::iter::repeat_n(intent, ticks));
        self
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl IntentSource for ScriptedIntents {
    fn next_intent(&mut self) -> MoveIntent {
        self.queue.pop_front().unwrap_or(MoveIntent::IDLE)
    }
}
