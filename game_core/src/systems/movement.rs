use crate::{Ball, Config, Paddle, PaddleIntent};
use hecs::World;

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        // Speed does not accumulate across frames
        paddle.speed = intent.speed(config.paddle_speed);
        paddle.y += paddle.speed;

        // Clamp to arena bounds
        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}

/// Move ball based on velocity (units per frame)
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
