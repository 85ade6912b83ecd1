//! Browser client for two-player Pong
//!
//! Draws on a 2D canvas, reads the keyboard from the document and drives the
//! game loop from `requestAnimationFrame`.
//! Note: only compiled for the wasm32 target

#![cfg(target_arch = "wasm32")]

mod input;
mod surface;

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{Config, FrameScheduler, GameLoop};
use surface::CanvasSurface;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, HtmlCanvasElement};

pub(crate) type Game = GameLoop<CanvasSurface>;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Schedules the stored frame callback on the next display refresh
struct AnimationFrameScheduler {
    callback: FrameCallback,
}

impl FrameScheduler for AnimationFrameScheduler {
    type Error = JsValue;

    fn request_frame(&mut self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let callback = self.callback.borrow();
        let callback = callback
            .as_ref()
            .ok_or_else(|| JsValue::from_str("Frame callback not installed"))?;
        window.request_animation_frame(callback.as_ref().unchecked_ref::<js_sys::Function>())?;
        Ok(())
    }
}

thread_local! {
    static GAME: RefCell<Option<Rc<RefCell<Game>>>> = const { RefCell::new(None) };
}

/// Start a match on the canvas; the loop runs until `stop` or page unload
#[wasm_bindgen]
pub fn start(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if GAME.with(|g| g.borrow().is_some()) {
        return Err(JsValue::from_str("Game already started on this page"));
    }

    let surface = CanvasSurface::new(canvas)?;
    let game = Game::with_surface(Config::new(), surface)
        .map_err(|e| JsValue::from_str(&format!("Invalid game setup: {e}")))?;
    let game = Rc::new(RefCell::new(game));

    input::install_listeners(&game)?;

    let callback: FrameCallback = Rc::new(RefCell::new(None));
    {
        let game = game.clone();
        let mut scheduler = AnimationFrameScheduler {
            callback: callback.clone(),
        };
        *callback.borrow_mut() = Some(Closure::new(move |_timestamp: f64| {
            if let Err(e) = game.borrow_mut().frame(&mut scheduler) {
                console::error_1(&e);
            }
        }));
    }

    let mut scheduler = AnimationFrameScheduler { callback };
    game.borrow_mut().start(&mut scheduler)?;

    GAME.with(|g| *g.borrow_mut() = Some(game));
    console::log_1(&"Pong started".into());
    Ok(())
}

/// Stop the frame loop; the last drawn frame stays on the canvas
#[wasm_bindgen]
pub fn stop() {
    GAME.with(|g| {
        if let Some(game) = g.borrow().as_ref() {
            game.borrow_mut().stop();
            console::log_1(&"Pong stopped".into());
        }
    });
}
