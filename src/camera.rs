use crate::core::{pixel_to_ndc, ray_from_ndc, OrbitCamera, Ray};
use glam::Vec2;
use web_sys as web;

#[inline]
/// Compute a world-space ray from canvas backing-store pixel coordinates.
///
/// - `canvas`: target canvas to derive dimensions/aspect
/// - `px`: pixel coordinates in the canvas' backing store space
/// - `camera`: the orbit camera the frame was rendered with
pub fn screen_to_world_ray(
    canvas: &web::HtmlCanvasElement,
    px: Vec2,
    camera: &OrbitCamera,
) -> Option<Ray> {
    let width = canvas.width() as f32;
    let height = canvas.height() as f32;
    let aspect = width / height.max(1.0);
    let inv = camera.view_proj(aspect).inverse();
    ray_from_ndc(&inv, pixel_to_ndc(px, width, height))
}

/// Current aspect ratio of the canvas backing store.
#[inline]
pub fn canvas_aspect(canvas: &web::HtmlCanvasElement) -> f32 {
    canvas.width().max(1) as f32 / canvas.height().max(1) as f32
}
