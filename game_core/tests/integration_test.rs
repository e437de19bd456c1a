use game_core::*;
use glam::Vec2;

const DT: f64 = 1.0 / 60.0;

/// Surface that only counts what it is asked to draw
#[derive(Default)]
struct CountingSurface {
    clears: usize,
    rects: usize,
    circles: usize,
    texts: Vec<String>,
}

impl Surface for CountingSurface {
    fn clear_rect(&mut self, _x: f32, _y: f32, _width: f32, _height: f32) {
        self.clears += 1;
    }

    fn fill_rect(&mut self, _x: f32, _y: f32, _width: f32, _height: f32, _color: &str) {
        self.rects += 1;
    }

    fn fill_circle(&mut self, _cx: f32, _cy: f32, _radius: f32, _color: &str) {
        self.circles += 1;
    }

    fn fill_text(&mut self, text: &str, _x: f32, _y: f32, _font: &str, _color: &str) {
        self.texts.push(text.to_string());
    }

    fn measure_text(&mut self, text: &str, _font: &str) -> f32 {
        text.len() as f32 * 16.0
    }
}

#[test]
fn test_paddle_bounce_precedes_scoring_at_left_edge() {
    let mut session = GameSession::new();
    assert_eq!(session.paddle(Side::Left).unwrap().y, 250.0);
    session.set_ball(Vec2::new(5.0, 300.0), Vec2::new(-5.0, 5.0));

    session.update(DT);

    // Ball lands on (0, 305): inside the paddle span, so the paddle check
    // flips speedX to +5 first. The boundary check still sees 0 - 10 < 0 and
    // resets the ball, which keeps the flipped (positive) direction.
    let events = session.events();
    assert!(events.ball_hit_paddle, "Paddle check must fire");
    assert!(events.right_scored, "Boundary check is independent");
    assert_eq!(session.score().right, 1);
    assert_eq!(session.score().left, 0);

    let ball = session.ball().unwrap();
    assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
    assert_eq!(ball.vel, Vec2::new(5.0, 5.0), "Sign comes from the bounce");
}

#[test]
fn test_clean_paddle_return_does_not_score() {
    let mut session = GameSession::new();
    session.set_ball(Vec2::new(25.0, 300.0), Vec2::new(-5.0, 5.0));

    session.update(DT); // (20, 305): edge at 10, not yet crossed
    assert_eq!(session.ball().unwrap().vel.x, -5.0);

    session.update(DT); // (15, 310): crossed, bounce
    let ball = session.ball().unwrap();
    assert_eq!(ball.pos, Vec2::new(15.0, 310.0));
    assert_eq!(ball.vel.x, 5.0);
    assert_eq!(session.score(), Score::new());

    session.update(DT);
    assert_eq!(session.ball().unwrap().pos, Vec2::new(20.0, 315.0));
}

#[test]
fn test_missed_ball_scores_for_opponent() {
    let mut session = GameSession::new();
    session.set_paddle_y(Side::Left, 0.0);
    session.set_ball(Vec2::new(25.0, 300.0), Vec2::new(-5.0, 5.0));

    for _ in 0..3 {
        session.update(DT);
        assert_eq!(session.score().right, 0);
    }
    session.update(DT); // (5, 320): left edge past the wall

    assert_eq!(session.score().right, 1);
    let ball = session.ball().unwrap();
    assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
    assert_eq!(ball.vel, Vec2::new(-5.0, 5.0));
}

#[test]
fn test_right_side_point_and_reset() {
    let mut session = GameSession::new();
    session.set_paddle_y(Side::Right, 500.0);
    session.set_ball(Vec2::new(782.0, 100.0), Vec2::new(5.0, -5.0));

    session.update(DT); // (787, 95): 797 > 790 but centre outside paddle span
    assert_eq!(session.ball().unwrap().vel.x, 5.0);

    session.update(DT); // (792, 90): 802 > 800
    assert_eq!(session.score().left, 1);
    assert_eq!(session.ball().unwrap().vel, Vec2::new(5.0, 5.0));
}

#[test]
fn test_wall_bounce_during_play() {
    let mut session = GameSession::new();
    session.set_ball(Vec2::new(400.0, 12.0), Vec2::new(5.0, -5.0));

    session.update(DT);

    let ball = session.ball().unwrap();
    assert_eq!(ball.pos, Vec2::new(405.0, 7.0), "No clamping into the court");
    assert_eq!(ball.vel, Vec2::new(5.0, 5.0));
    assert!(session.events().ball_hit_wall);
}

#[test]
fn test_scores_only_increase_over_long_play() {
    let mut session = GameSession::new();
    let mut last = session.score();
    for frame in 0..5_000 {
        // Left player holds up for a while, right player never moves
        if frame == 0 {
            session.key_down(Key::LeftUp);
        }
        if frame == 2_000 {
            session.key_up(Key::LeftUp);
        }
        session.update(DT);

        let score = session.score();
        assert!(score.left >= last.left && score.right >= last.right);
        assert!(score.left + score.right <= last.left + last.right + 1);
        last = score;

        for side in [Side::Left, Side::Right] {
            let y = session.paddle(side).unwrap().y;
            assert!((0.0..=500.0).contains(&y));
        }
    }
}

#[test]
fn test_frame_renders_gameplay_then_pause_banner() {
    let mut session = GameSession::new();
    let mut surface = CountingSurface::default();

    session.frame(DT, &mut surface);
    assert_eq!(surface.clears, 1);
    assert_eq!(surface.rects, 2);
    assert_eq!(surface.circles, 1);
    assert_eq!(surface.texts, vec!["0", "0", "00:00:00"]);

    session.key_down(Key::Pause);
    let mut surface = CountingSurface::default();
    session.frame(DT, &mut surface);
    assert_eq!(surface.clears, 1);
    assert_eq!(surface.rects, 0);
    assert_eq!(surface.circles, 0);
    assert_eq!(surface.texts, vec!["PAUSED"]);
}

#[test]
fn test_timer_display_after_an_hour_of_play() {
    let mut session = GameSession::new();
    for _ in 0..(3661 * 20) {
        session.update(0.05);
    }
    let mut surface = CountingSurface::default();
    session.key_down(Key::Pause);
    session.key_down(Key::Pause);
    session.frame(0.0, &mut surface);

    let shown = surface.texts.last().cloned().unwrap();
    assert_eq!(shown, "01:01:01", "Timer shows whole elapsed seconds");
}

#[test]
fn test_timer_display_ticks_over_at_sixty_fps() {
    let mut session = GameSession::new();
    let mut surface = CountingSurface::default();
    for _ in 0..3600 {
        session.frame(DT, &mut surface);
    }
    assert_eq!(session.timer().seconds(), 60);

    let mut surface = CountingSurface::default();
    session.key_down(Key::Pause);
    session.key_down(Key::Pause);
    session.frame(0.0, &mut surface);
    assert_eq!(surface.texts.last().map(String::as_str), Some("00:01:00"));
}
