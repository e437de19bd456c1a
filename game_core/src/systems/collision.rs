use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Check ball collisions with walls and paddles.
///
/// Paddle hits only test the ball's leading edge against the paddle face and
/// its centre against the paddle span, so a ball whose centre is outside the
/// span passes through even when it overlaps the paddle corner.
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle data without holding borrows, left before right
    let mut paddles: Vec<Paddle> = world.query::<&Paddle>().iter().map(|(_e, p)| *p).collect();
    paddles.sort_by_key(|p| p.side);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let radius = config.ball_radius;

        // Top/bottom walls: flip only, no position correction
        if ball.pos.y - radius < 0.0 || ball.pos.y + radius > config.arena_height {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }

        for paddle in &paddles {
            let paddle_x = config.paddle_x(paddle.side);
            let crossed = match paddle.side {
                Side::Left => ball.pos.x - radius < paddle_x + config.paddle_width,
                Side::Right => ball.pos.x + radius > paddle_x,
            };
            let within_span =
                ball.pos.y > paddle.y && ball.pos.y < paddle.y + config.paddle_height;

            if crossed && within_span {
                ball.vel.x = -ball.vel.x;
                events.ball_hit_paddle = true;
            }
        }
    }
}
