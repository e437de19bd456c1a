//! Keyboard input latch

use crate::components::{PaddleIntent, Side};

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
    Pause,
}

/// Level-triggered direction flags, set on key down and cleared on key up.
///
/// `Pause` is an edge action owned by the session and is not latched here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputLatch {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.set(key, true);
    }

    pub fn release(&mut self, key: Key) {
        self.set(key, false);
    }

    fn set(&mut self, key: Key, held: bool) {
        match key {
            Key::LeftUp => self.left_up = held,
            Key::LeftDown => self.left_down = held,
            Key::RightUp => self.right_up = held,
            Key::RightDown => self.right_down = held,
            Key::Pause => {}
        }
    }

    /// Held directions for one paddle
    pub fn intent(&self, side: Side) -> PaddleIntent {
        match side {
            Side::Left => PaddleIntent {
                up: self.left_up,
                down: self.left_down,
            },
            Side::Right => PaddleIntent {
                up: self.right_up,
                down: self.right_down,
            },
        }
    }
}
