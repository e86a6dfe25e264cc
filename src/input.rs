use glam::Vec2;
use web_sys as web;

/// Press/drag tracking for the primary pointer. A press that travels less than
/// the click threshold before release is a click; anything longer orbits.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerGesture {
    pub active: bool,
    pub pointer_id: i32,
    pub start: Vec2,
    pub last: Vec2,
    pub travel: f32,
}

impl PointerGesture {
    pub fn begin(&mut self, pointer_id: i32, pos_css: Vec2) {
        *self = Self {
            active: true,
            pointer_id,
            start: pos_css,
            last: pos_css,
            travel: 0.0,
        };
    }

    /// Record a move; returns the delta since the previous event while pressed.
    pub fn move_to(&mut self, pointer_id: i32, pos_css: Vec2) -> Option<Vec2> {
        if !self.active || pointer_id != self.pointer_id {
            return None;
        }
        let delta = pos_css - self.last;
        self.last = pos_css;
        self.travel += delta.length();
        Some(delta)
    }

    /// Finish the press; returns true when it qualifies as a click.
    pub fn end(&mut self, pointer_id: i32, pos_css: Vec2, threshold_px: f32) -> bool {
        if !self.active || pointer_id != self.pointer_id {
            return false;
        }
        self.move_to(pointer_id, pos_css);
        self.active = false;
        self.travel <= threshold_px
    }

    pub fn cancel(&mut self) {
        self.active = false;
    }
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_css_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

/// CSS pixel position to backing-store pixels.
#[inline]
pub fn css_to_canvas_px(pos_css: Vec2, css_size: Vec2, canvas_size: Vec2) -> Vec2 {
    if css_size.x > 0.0 && css_size.y > 0.0 {
        pos_css / css_size * canvas_size
    } else {
        pos_css
    }
}
