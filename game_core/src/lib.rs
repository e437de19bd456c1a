pub mod components;
pub mod input;
pub mod params;
pub mod render;
pub mod resources;
pub mod session;
pub mod systems;

pub use components::*;
pub use input::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use session::*;

use hecs::World;
use systems::*;

/// Run one logical frame of the Pong simulation.
///
/// Velocities are in units per frame, so the game speed follows the display
/// refresh rate.
pub fn step(
    world: &mut World,
    config: &Config,
    input: &InputLatch,
    score: &mut Score,
    events: &mut Events,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Move ball
    move_ball(world);

    // 2. Check collisions (walls, then left and right paddle)
    check_collisions(world, config, events);

    // 3. Check scoring (ball exited arena)
    check_scoring(world, config, score, events);

    // 4. Ingest inputs (apply to paddle intents)
    ingest_inputs(world, input);

    // 5. Move paddles based on intents
    move_paddles(world, config);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
