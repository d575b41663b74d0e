use glam::IVec2;
use rand::Rng;

use crate::map::Aabb;
use crate::{Config, GameRng};

/// Bat component - the player's sprite, positioned by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bat {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Bat {
    pub fn new(pos: IVec2, size: IVec2) -> Self {
        Self { pos, size }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    /// Center the bat horizontally on the cursor
    pub fn follow_cursor(&mut self, cursor_x: i32) {
        self.pos.x = cursor_x - self.size.x / 2;
    }
}

/// Ball component - falls straight down at `speed` pixels per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub pos: IVec2,
    pub size: IVec2,
    pub speed: i32,
}

impl Ball {
    pub fn new(pos: IVec2, size: IVec2, speed: i32) -> Self {
        Self { pos, size, speed }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    /// Pitch a new ball from the top edge at a random column
    pub fn reset(&mut self, config: &Config, rng: &mut GameRng) {
        self.pos = IVec2::new(rng.0.gen_range(0..config.ball_spawn_span()), 0);

        if let Some((lo, hi)) = config.respawn_speed {
            self.speed = rng.0.gen_range(lo..=hi.max(lo));
        }
    }
}
