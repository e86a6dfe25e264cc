//! Idle floating of the bouquet group that carries the card.

use glam::{EulerRot, Mat4, Quat, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatConfig {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
    /// Vertical travel `[min, max]` before `float_intensity` is applied.
    pub floating_range: [f32; 2],
}

impl Default for FloatConfig {
    fn default() -> Self {
        Self {
            speed: 1.0,
            rotation_intensity: 0.5,
            float_intensity: 0.5,
            floating_range: [-0.02, 0.02],
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FloatMotion {
    pub config: FloatConfig,
    /// Phase offset in seconds, so separate groups do not bob in sync.
    pub offset_sec: f32,
}

impl FloatMotion {
    pub fn new(config: FloatConfig, offset_sec: f32) -> Self {
        Self { config, offset_sec }
    }

    /// Group transform at `elapsed_sec` since start.
    pub fn group_transform(&self, elapsed_sec: f32) -> Mat4 {
        let c = &self.config;
        let t = (self.offset_sec + elapsed_sec) * c.speed / 4.0;
        let (s, co) = t.sin_cos();
        let rx = co / 8.0 * c.rotation_intensity;
        let ry = s / 8.0 * c.rotation_intensity;
        let rz = s / 20.0 * c.rotation_intensity;
        let y = map_linear(s / 10.0, -0.1, 0.1, c.floating_range[0], c.floating_range[1]);
        Mat4::from_rotation_translation(
            Quat::from_euler(EulerRot::XYZ, rx, ry, rz),
            Vec3::new(0.0, y * c.float_intensity, 0.0),
        )
    }
}

#[inline]
fn map_linear(x: f32, a1: f32, a2: f32, b1: f32, b2: f32) -> f32 {
    b1 + (x - a1) * (b2 - b1) / (a2 - a1)
}
