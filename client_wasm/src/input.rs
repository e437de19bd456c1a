//! Keyboard input handling

use game_core::Key;

/// Map a `KeyboardEvent.key` value to a game key
pub fn key_from_name(key: &str) -> Option<Key> {
    match key {
        "w" | "W" => Some(Key::LeftUp),
        "s" | "S" => Some(Key::LeftDown),
        "ArrowUp" => Some(Key::RightUp),
        "ArrowDown" => Some(Key::RightDown),
        "p" | "P" => Some(Key::Pause),
        _ => None,
    }
}

/// Extract the game key from a keyboard event
#[cfg(target_arch = "wasm32")]
pub fn key_from_event(event: &web_sys::KeyboardEvent) -> Option<Key> {
    key_from_name(&event.key())
}
