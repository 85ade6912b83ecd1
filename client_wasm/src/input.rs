//! Keyboard input handling

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use crate::Game;

/// Extract key from keyboard event
pub fn get_key_from_event(event: &KeyboardEvent) -> String {
    event.key()
}

/// Forward document key events to the game's input tracker for the page lifetime
pub fn install_listeners(game: &Rc<RefCell<Game>>) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document"))?;

    let on_down = {
        let game = game.clone();
        Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            game.borrow_mut().key_down(&get_key_from_event(&event));
        })
    };
    document.add_event_listener_with_callback("keydown", on_down.as_ref().unchecked_ref())?;
    on_down.forget();

    let on_up = {
        let game = game.clone();
        Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            game.borrow_mut().key_up(&get_key_from_event(&event));
        })
    };
    document.add_event_listener_with_callback("keyup", on_up.as_ref().unchecked_ref())?;
    on_up.forget();

    Ok(())
}
