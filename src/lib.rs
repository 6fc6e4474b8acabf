#![cfg(target_arch = "wasm32")]
use card_core::{CardParams, FrameDriver};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod projection;
mod render;
mod style;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("card-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);

    // Fresh particle layout every visit
    let params = CardParams {
        seed: rand::random(),
        ..CardParams::default()
    };
    let driver = Rc::new(RefCell::new(FrameDriver::new(params)?));
    if let Some((vw, vh)) = dom::viewport_size() {
        driver.borrow_mut().resize(vw, vh);
    }

    // Scene first: a missing 2d context is fatal before any handler is wired
    let scene = render::CanvasScene::new(canvas.clone(), document)?;
    let clock = frame::Clock::start();

    events::wire_input_handlers(events::InputWiring {
        canvas,
        driver: driver.clone(),
        clock,
    });
    events::wire_open_keys(driver.clone(), clock);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        driver,
        scene,
        clock,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
