// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

const THRESHOLD: f32 = 4.0;

#[test]
fn short_press_is_a_click() {
    let mut g = PointerGesture::default();
    g.begin(1, Vec2::new(100.0, 100.0));
    g.move_to(1, Vec2::new(101.0, 101.0));
    assert!(g.end(1, Vec2::new(102.0, 100.0), THRESHOLD));
    assert!(!g.active);
}

#[test]
fn long_drag_is_not_a_click() {
    let mut g = PointerGesture::default();
    g.begin(1, Vec2::new(100.0, 100.0));
    let d = g.move_to(1, Vec2::new(110.0, 100.0)).unwrap();
    assert_eq!(d, Vec2::new(10.0, 0.0));
    // returning to the start still counts the travel
    g.move_to(1, Vec2::new(100.0, 100.0));
    assert!(!g.end(1, Vec2::new(100.0, 100.0), THRESHOLD));
}

#[test]
fn other_pointers_are_ignored() {
    let mut g = PointerGesture::default();
    g.begin(1, Vec2::ZERO);
    assert!(g.move_to(2, Vec2::new(50.0, 0.0)).is_none());
    assert!(!g.end(2, Vec2::ZERO, THRESHOLD));
    assert!(g.active);
    assert!(g.end(1, Vec2::ZERO, THRESHOLD));
}

#[test]
fn moves_without_press_do_nothing() {
    let mut g = PointerGesture::default();
    assert!(g.move_to(0, Vec2::new(5.0, 5.0)).is_none());
    assert!(!g.end(0, Vec2::new(5.0, 5.0), THRESHOLD));
}

#[test]
fn cancel_drops_the_press() {
    let mut g = PointerGesture::default();
    g.begin(3, Vec2::ZERO);
    g.cancel();
    assert!(!g.end(3, Vec2::ZERO, THRESHOLD));
}

#[test]
fn css_pixels_scale_to_backing_store() {
    let p = css_to_canvas_px(Vec2::new(50.0, 25.0), Vec2::new(100.0, 50.0), Vec2::new(200.0, 100.0));
    assert_eq!(p, Vec2::new(100.0, 50.0));
    // zero-sized layout passes through
    let q = css_to_canvas_px(Vec2::new(7.0, 9.0), Vec2::ZERO, Vec2::new(200.0, 100.0));
    assert_eq!(q, Vec2::new(7.0, 9.0));
}
