use glam::Vec2;

/// Which half of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,     // Top edge (clamped to arena)
    pub speed: f32, // Recomputed from intent every frame
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self {
            side,
            y,
            speed: 0.0,
        }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Put the ball back in the centre after a point.
    ///
    /// Horizontal direction is kept, vertical always restarts downwards.
    pub fn reset(&mut self, center: Vec2, speed: f32) {
        self.pos = center;
        let vx = if self.vel.x > 0.0 { speed } else { -speed };
        self.vel = Vec2::new(vx, speed);
    }
}

/// Held direction keys for a paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub up: bool,
    pub down: bool,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertical speed for this frame; up wins when both are held
    pub fn speed(&self, paddle_speed: f32) -> f32 {
        if self.up {
            -paddle_speed
        } else if self.down {
            paddle_speed
        } else {
            0.0
        }
    }
}
