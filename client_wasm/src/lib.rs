//! Canvas client for local two-player Pong
//!
//! Draws `game_core` sessions with the Canvas 2D API and drives them from
//! `requestAnimationFrame` and document keyboard events.
//! Note: the browser bindings are only compiled for the wasm32 target

pub mod input;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod logger;

#[cfg(target_arch = "wasm32")]
pub use app::start;
