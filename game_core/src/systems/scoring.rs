use crate::{Ball, Config, Events, Score};
use hecs::World;

/// Check if ball left the arena (scoring)
pub fn check_scoring(world: &mut World, config: &Config, score: &mut Score, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Both edges are checked independently
        if ball.pos.x - config.ball_radius < 0.0 {
            score.increment_right();
            events.right_scored = true;
            log::debug!("Right player scored ({}-{})", score.left, score.right);

            ball.reset(config.center(), config.ball_speed);
        }
        if ball.pos.x + config.ball_radius > config.arena_width {
            score.increment_left();
            events.left_scored = true;
            log::debug!("Left player scored ({}-{})", score.left, score.right);

            ball.reset(config.center(), config.ball_speed);
        }
    }
}
