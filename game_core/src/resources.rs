use crate::params::Params;

/// Elapsed play time, frozen while the game is paused
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    pub elapsed_micros: u64, // Total unpaused play time
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one frame's delta in seconds.
    ///
    /// Deltas above `MAX_FRAME_GAP` (a backgrounded tab delivers no frames)
    /// and negative deltas add nothing; slow frames below the gap count in full.
    pub fn tick(&mut self, dt: f64) {
        if !(0.0..=Params::MAX_FRAME_GAP).contains(&dt) {
            return;
        }
        self.elapsed_micros += (dt * 1_000_000.0).round() as u64;
    }

    /// Whole seconds elapsed
    pub fn seconds(&self) -> u64 {
        self.elapsed_micros / 1_000_000
    }
}

/// Format whole seconds as HH:MM:SS, hours are not wrapped
pub fn format_timer(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // Left player score
    pub right: u32, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }
}
