use crate::constants::CLICK_DRAG_THRESHOLD_PX;
use crate::core::Scene;
use crate::input::{self, PointerGesture};
use crate::render;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
    pub gesture: Rc<RefCell<PointerGesture>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_pointercancel(&w);
    wire_wheel(&w);
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !ev.is_primary() {
            return;
        }
        let pos = input::pointer_css_px(&ev, &w.canvas);
        w.gesture.borrow_mut().begin(ev.pointer_id(), pos);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_css_px(&ev, &w.canvas);
        let delta = w.gesture.borrow_mut().move_to(ev.pointer_id(), pos);
        let dragging = w.gesture.borrow().travel > CLICK_DRAG_THRESHOLD_PX;
        if let (Some(d), true) = (delta, dragging) {
            let viewport_h = w.canvas.get_bounding_client_rect().height() as f32;
            w.scene.borrow_mut().orbit.rotate(d.x, d.y, viewport_h);
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_css_px(&ev, &w.canvas);
        let is_click =
            w.gesture
                .borrow_mut()
                .end(ev.pointer_id(), pos, CLICK_DRAG_THRESHOLD_PX);
        _ = w.canvas.release_pointer_capture(ev.pointer_id());
        if is_click {
            handle_click(&w, pos);
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointercancel(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.gesture.borrow_mut().cancel();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointercancel", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        w.scene.borrow_mut().orbit.zoom(ev.delta_y() as f32);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn handle_click(w: &InputWiring, pos_css: Vec2) {
    let rect = w.canvas.get_bounding_client_rect();
    let css_size = Vec2::new(rect.width() as f32, rect.height() as f32);
    let canvas_size = Vec2::new(w.canvas.width() as f32, w.canvas.height() as f32);
    let px = input::css_to_canvas_px(pos_css, css_size, canvas_size);

    let mut scene = w.scene.borrow_mut();
    let Some(ray) = render::screen_to_world_ray(&w.canvas, px, &scene.orbit) else {
        return;
    };
    if scene.click(&ray) {
        log::info!("[click] card toggled (pending {})", scene.card.pending_clicks());
    }
}
