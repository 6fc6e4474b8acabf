use crate::frame::Clock;
use crate::input::is_open_key;
use card_core::FrameDriver;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Enter/Space open the card, mirroring a click.
pub fn wire_open_keys(driver: Rc<RefCell<FrameDriver>>, clock: Clock) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.repeat() || !is_open_key(&ev.key()) {
            return;
        }
        if driver.borrow_mut().trigger_open(clock.now()) {
            log::info!("[key] opened card with {:?}", ev.key());
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
