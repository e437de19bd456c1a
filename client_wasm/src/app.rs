//! Browser wiring: canvas, keyboard listeners and the animation loop

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{GameSession, Key};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, KeyboardEvent, Window};

use crate::canvas::CanvasSurface;
use crate::input::key_from_event;
use crate::logger;

/// Session plus the surface it draws on
struct Client {
    session: GameSession,
    surface: CanvasSurface,
    last_timestamp: Option<f64>,
}

impl Client {
    /// Handle one `requestAnimationFrame` tick; `timestamp` is in milliseconds
    fn on_frame(&mut self, timestamp: f64) {
        let dt = self
            .last_timestamp
            .map(|last| (timestamp - last) / 1000.0)
            .unwrap_or(0.0);
        self.last_timestamp = Some(timestamp);

        self.session.frame(dt, &mut self.surface);

        let events = self.session.events();
        if events.left_scored || events.right_scored {
            let score = self.session.score();
            log::info!("Score {} - {}", score.left, score.right);
        }
    }

    fn on_key(&mut self, key: Key, down: bool) {
        if down {
            self.session.key_down(key);
        } else {
            self.session.key_up(key);
        }
    }
}

type FrameCallback = Closure<dyn FnMut(f64)>;

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No global window"))
}

fn request_animation_frame(callback: &FrameCallback) -> Result<i32, JsValue> {
    let function: &js_sys::Function = callback.as_ref().unchecked_ref();
    window()?.request_animation_frame(function)
}

/// Start a local two-player game on the canvas with the given element id
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    let document = window()?
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("Canvas #{} not found", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("#{} is not a canvas", canvas_id)))?;

    let session = GameSession::new();
    let config = session.config();
    let surface = CanvasSurface::new(
        &canvas,
        config.arena_width as u32,
        config.arena_height as u32,
    )?;
    let client = Rc::new(RefCell::new(Client {
        session,
        surface,
        last_timestamp: None,
    }));

    listen_keys(&document, &client, "keydown", true)?;
    listen_keys(&document, &client, "keyup", false)?;

    // The loop reschedules itself, so the closure has to own a handle to itself
    let frame: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let next = frame.clone();
    *frame.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
        client.borrow_mut().on_frame(timestamp);

        if let Some(callback) = next.borrow().as_ref() {
            if let Err(e) = request_animation_frame(callback) {
                log::error!("Failed to schedule frame: {:?}", e);
            }
        }
    }));

    if let Some(callback) = frame.borrow().as_ref() {
        request_animation_frame(callback)?;
    }

    log::info!("Pong started on #{}", canvas_id);
    Ok(())
}

fn listen_keys(
    document: &web_sys::Document,
    client: &Rc<RefCell<Client>>,
    event_type: &str,
    down: bool,
) -> Result<(), JsValue> {
    let client = client.clone();
    let handler = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        if let Some(key) = key_from_event(&event) {
            // Keep arrow keys from scrolling the page
            event.prevent_default();
            client.borrow_mut().on_key(key, down);
        }
    });

    document.add_event_listener_with_callback(event_type, handler.as_ref().unchecked_ref())?;

    // Listeners live for the lifetime of the page
    handler.forget();
    Ok(())
}
