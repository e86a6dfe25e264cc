#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, TEXT_ELEMENT_ID};
use crate::core::{
    encode_message, message_from_query, Card, CardConfig, FloatConfig, FloatMotion, OrbitCamera,
    OrbitConfig, Scene,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Encode a message for the `text` query parameter. Exposed to JavaScript so
/// card links can be produced from the browser console.
#[wasm_bindgen(js_name = encodeMessage)]
pub fn encode_message_js(text: &str) -> String {
    encode_message(text)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("card-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn build_scene(text: String) -> Scene {
    let card = Card::new(text, CardConfig::default());
    let orbit = OrbitCamera::new(OrbitConfig::default());
    // random phase, as separate page loads should not bob identically
    let float = FloatMotion::new(FloatConfig::default(), (js_sys::Math::random() * 10_000.0) as f32);
    Scene::new(card, orbit, float)
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)?;
    let text_el: web::HtmlElement = dom::element_by_id(&document, TEXT_ELEMENT_ID)?;

    // Avoid grabbing a 2D context here to allow WebGPU to acquire the canvas

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let message = message_from_query(dom::message_query_param(&window).as_deref());
    log::info!("[card] message of {} chars", message.chars().count());
    overlay::init_text(&text_el, &message);

    let scene = Rc::new(RefCell::new(build_scene(message)));
    let gesture = Rc::new(RefCell::new(input::PointerGesture::default()));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        gesture,
    });

    // The card state machine runs regardless of GPU availability
    let gpu = frame::init_gpu(&canvas).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        canvas,
        text_el,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
