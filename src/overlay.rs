use crate::constants::{TEXT_COLOR, TEXT_FONT_FAMILY, TEXT_MIN_FONT_PX};
use crate::core::{TEXT_FONT_SIZE, TEXT_LINE_HEIGHT, TEXT_MAX_WIDTH, TEXT_OFFSET};
use glam::{Mat4, Vec2, Vec3};
use web_sys as web;

/// Screen placement of the card text for one frame, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextLayout {
    pub center: Vec2,
    pub font_px: f32,
    pub max_width_px: f32,
    pub rotation_deg: f32,
    pub opacity: f32,
}

#[inline]
fn project_css(view_proj: &Mat4, world: Vec3, viewport_css: Vec2) -> Option<Vec2> {
    let clip = *view_proj * world.extend(1.0);
    if clip.w <= 1e-6 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    Some(Vec2::new(
        (ndc.x * 0.5 + 0.5) * viewport_css.x,
        (0.5 - ndc.y * 0.5) * viewport_css.y,
    ))
}

/// Project the text anchor of the card and derive its on-screen size from the
/// projected text box width. Returns `None` when the anchor is behind the eye.
pub fn text_layout(
    view_proj: &Mat4,
    card_world: &Mat4,
    viewport_css: Vec2,
    opacity: f32,
) -> Option<TextLayout> {
    let anchor = card_world.transform_point3(TEXT_OFFSET);
    let edge = card_world.transform_point3(TEXT_OFFSET + Vec3::X * TEXT_MAX_WIDTH);
    let a = project_css(view_proj, anchor, viewport_css)?;
    let b = project_css(view_proj, edge, viewport_css)?;
    let span = b - a;
    let max_width_px = span.length();
    Some(TextLayout {
        center: a,
        font_px: max_width_px * TEXT_FONT_SIZE / TEXT_MAX_WIDTH,
        max_width_px,
        rotation_deg: span.y.atan2(span.x).to_degrees(),
        opacity: opacity.clamp(0.0, 1.0),
    })
}

/// One-time styling of the text element. It never takes pointer events, so
/// clicks fall through to the canvas and hit the card plane instead.
pub fn init_text(el: &web::HtmlElement, text: &str) {
    el.set_text_content(Some(text));
    let style = el.style();
    _ = style.set_property("position", "absolute");
    _ = style.set_property("left", "0");
    _ = style.set_property("top", "0");
    _ = style.set_property("pointer-events", "none");
    _ = style.set_property("user-select", "none");
    _ = style.set_property("text-align", "center");
    _ = style.set_property("overflow-wrap", "break-word");
    _ = style.set_property("line-height", &TEXT_LINE_HEIGHT.to_string());
    _ = style.set_property("color", TEXT_COLOR);
    _ = style.set_property("font-family", TEXT_FONT_FAMILY);
    _ = style.set_property("opacity", "0");
    _ = style.set_property("visibility", "hidden");
}

pub fn update_text(el: &web::HtmlElement, layout: Option<TextLayout>) {
    let style = el.style();
    match layout {
        Some(l) if l.opacity > 0.0 && l.font_px >= TEXT_MIN_FONT_PX => {
            _ = style.set_property("visibility", "visible");
            _ = style.set_property("opacity", &format!("{:.3}", l.opacity));
            _ = style.set_property("font-size", &format!("{:.2}px", l.font_px));
            _ = style.set_property("width", &format!("{:.1}px", l.max_width_px));
            _ = style.set_property(
                "transform",
                &format!(
                    "translate({:.1}px, {:.1}px) translate(-50%, -50%) rotate({:.2}deg)",
                    l.center.x, l.center.y, l.rotation_deg
                ),
            );
        }
        _ => {
            _ = style.set_property("visibility", "hidden");
        }
    }
}
