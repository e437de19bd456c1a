//! Game session: owns all state for one local match

use glam::Vec2;
use hecs::World;

use crate::{
    create_ball, create_paddle, render, step, Ball, Config, Events, InputLatch, Key, Paddle,
    Score, Side, Surface, Timer,
};

/// Two local players sharing one keyboard
pub struct GameSession {
    world: World,
    config: Config,
    input: InputLatch,
    score: Score,
    events: Events,
    timer: Timer,
    paused: bool,
}

impl GameSession {
    pub fn new() -> Self {
        Self::with_config(Config::new())
    }

    pub fn with_config(config: Config) -> Self {
        let mut world = World::new();

        // Create paddles
        let paddle_y = config.paddle_start_y();
        create_paddle(&mut world, Side::Left, paddle_y);
        create_paddle(&mut world, Side::Right, paddle_y);

        // Create ball
        let speed = config.ball_speed;
        create_ball(&mut world, config.center(), Vec2::new(speed, speed));

        Self {
            world,
            config,
            input: InputLatch::new(),
            score: Score::new(),
            events: Events::new(),
            timer: Timer::new(),
            paused: false,
        }
    }

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Pause => self.toggle_pause(),
            _ => self.input.press(key),
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.input.release(key);
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        log::info!("Game {}", if self.paused { "paused" } else { "resumed" });
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Advance one frame; `dt` is the real time since the previous frame in
    /// seconds and only drives the clock. Does nothing while paused.
    pub fn update(&mut self, dt: f64) {
        if self.paused {
            return;
        }

        step(
            &mut self.world,
            &self.config,
            &self.input,
            &mut self.score,
            &mut self.events,
        );
        self.timer.tick(dt);
    }

    /// One logical frame: update then draw
    pub fn frame<S: Surface + ?Sized>(&mut self, dt: f64, surface: &mut S) {
        self.update(dt);
        render(self, surface);
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn timer(&self) -> Timer {
        self.timer
    }

    /// Events raised by the most recent unpaused frame
    pub fn events(&self) -> &Events {
        &self.events
    }

    /// Place the ball, e.g. to set up a serve
    pub fn set_ball(&mut self, pos: Vec2, vel: Vec2) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    /// Move a paddle's top edge, clamped to the arena
    pub fn set_paddle_y(&mut self, side: Side, y: f32) {
        let y = self.config.clamp_paddle_y(y);
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            if paddle.side == side {
                paddle.y = y;
            }
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
