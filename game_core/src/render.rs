//! Render pass over an abstract 2D drawing surface

use crate::{format_timer, GameSession, Params, Side};

/// 2D drawing primitives the render pass needs from its host.
///
/// Drawing never fails from the game's point of view; hosts log backend errors.
pub trait Surface {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str);
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: &str);
    /// `y` is the text baseline
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str);
    fn measure_text(&mut self, text: &str, font: &str) -> f32;
}

/// Draw the current session state. Reads only, never mutates.
pub fn render<S: Surface + ?Sized>(session: &GameSession, surface: &mut S) {
    let config = session.config();
    surface.clear_rect(0.0, 0.0, config.arena_width, config.arena_height);

    if session.is_paused() {
        draw_centered_text(
            surface,
            "PAUSED",
            config.arena_width / 2.0,
            config.arena_height / 2.0,
            Params::BANNER_FONT,
        );
        return;
    }

    for side in [Side::Left, Side::Right] {
        if let Some(paddle) = session.paddle(side) {
            surface.fill_rect(
                config.paddle_x(side),
                paddle.y,
                config.paddle_width,
                config.paddle_height,
                Params::FOREGROUND,
            );
        }
    }

    if let Some(ball) = session.ball() {
        surface.fill_circle(ball.pos.x, ball.pos.y, config.ball_radius, Params::FOREGROUND);
    }

    let score = session.score();
    let quarter = config.arena_width / 4.0;
    draw_centered_text(
        surface,
        &score.left.to_string(),
        quarter,
        Params::HUD_TOP,
        Params::HUD_FONT,
    );
    draw_centered_text(
        surface,
        &score.right.to_string(),
        quarter * 3.0,
        Params::HUD_TOP,
        Params::HUD_FONT,
    );

    draw_centered_text(
        surface,
        &format_timer(session.timer().seconds()),
        config.arena_width / 2.0,
        Params::HUD_TOP,
        Params::HUD_FONT,
    );
}

fn draw_centered_text<S: Surface + ?Sized>(
    surface: &mut S,
    text: &str,
    center_x: f32,
    y: f32,
    font: &str,
) {
    let width = surface.measure_text(text, font);
    surface.fill_text(text, center_x - width / 2.0, y, font, Params::FOREGROUND);
}
