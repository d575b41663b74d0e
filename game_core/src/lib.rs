pub mod components;
pub mod config;
pub mod game;
pub mod map;
pub mod params;
pub mod phase;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game::*;
pub use map::*;
pub use params::*;
pub use phase::*;
pub use resources::*;

use glam::IVec2;
use hecs::World;

/// Helper to create the bat entity
pub fn create_bat(world: &mut World, pos: IVec2, size: IVec2) -> hecs::Entity {
    world.spawn((Bat::new(pos, size),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: IVec2, size: IVec2, speed: i32) -> hecs::Entity {
    world.spawn((Ball::new(pos, size, speed),))
}
