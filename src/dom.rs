use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Window inner size in CSS pixels, the space pointer events report in.
pub fn viewport_size() -> Option<(f32, f32)> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()? as f32;
    let height = w.inner_height().ok()?.as_f64()? as f32;
    Some((width, height))
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Shared slot an image lands in once decoded; stays `None` if loading fails.
pub type ImageSlot = Rc<RefCell<Option<web::HtmlImageElement>>>;

/// Start decoding `src` in the background and publish it into the returned slot.
pub fn load_image(src: &'static str) -> ImageSlot {
    let slot: ImageSlot = Rc::new(RefCell::new(None));
    let img = match web::HtmlImageElement::new() {
        Ok(img) => img,
        Err(e) => {
            log::error!("[assets] cannot create image for {}: {:?}", src, e);
            return slot;
        }
    };
    img.set_src(src);
    let slot_load = slot.clone();
    spawn_local(async move {
        match JsFuture::from(img.decode()).await {
            Ok(_) => {
                log::info!(
                    "[assets] loaded {} ({}x{})",
                    src,
                    img.natural_width(),
                    img.natural_height()
                );
                *slot_load.borrow_mut() = Some(img);
            }
            Err(e) => log::error!("[assets] failed to load {}: {:?}", src, e),
        }
    });
    slot
}
