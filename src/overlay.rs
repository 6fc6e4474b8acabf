use crate::constants::MESSAGE_TEXT_ID;
use crate::style::text_opacity_value;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Fade the optional HTML message text along with the paper.
///
/// Only `opacity` and `pointer-events` are touched; any other inline styling
/// on the element is left alone.
#[inline]
pub fn set_message_text_opacity(document: &web::Document, opacity: f32) {
    let Some(el) = document
        .get_element_by_id(MESSAGE_TEXT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    let style = el.style();
    match text_opacity_value(opacity) {
        Some(value) => {
            _ = style.set_property("opacity", &value);
            _ = style.remove_property("pointer-events");
        }
        None => {
            _ = style.set_property("opacity", "0");
            _ = style.set_property("pointer-events", "none");
        }
    }
}
