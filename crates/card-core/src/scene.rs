//! Per-frame glue between the camera, the floating group and the card.
//!
//! The web frontend owns one [`Scene`] and hands it to both the pointer
//! handlers (clicks, orbit input) and the animation-frame callback. Nothing
//! here touches the DOM or the GPU, so the whole interaction can be driven
//! from tests.

use crate::camera::OrbitCamera;
use crate::card::{Card, CardFrame};
use crate::float::FloatMotion;
use crate::picking::{hit_card, Ray};
use crate::pose::Pose;
use crate::spring::sanitize_dt;
use glam::Mat4;

/// Everything the render binding needs for one frame.
#[derive(Clone, Copy, Debug)]
pub struct SceneFrame {
    pub card: CardFrame,
    /// Card transform in world space (group transform times card pose).
    pub card_world: Mat4,
    pub camera: Pose,
}

#[derive(Debug)]
pub struct Scene {
    pub card: Card,
    pub orbit: OrbitCamera,
    pub float: FloatMotion,
    elapsed_sec: f32,
    card_world: Mat4,
}

impl Scene {
    pub fn new(card: Card, orbit: OrbitCamera, float: FloatMotion) -> Self {
        let card_world = float.group_transform(0.0) * card.current_frame().model_matrix();
        Self {
            card,
            orbit,
            float,
            elapsed_sec: 0.0,
            card_world,
        }
    }

    pub fn elapsed_sec(&self) -> f32 {
        self.elapsed_sec
    }

    /// World transform the card was last drawn with.
    pub fn card_world(&self) -> Mat4 {
        self.card_world
    }

    /// Advance camera damping, the card and the float motion by one frame.
    pub fn tick(&mut self, dt_sec: f32) -> SceneFrame {
        self.orbit.update();
        let camera = self.orbit.pose();
        let card = self.card.frame(dt_sec, &camera);
        self.elapsed_sec += sanitize_dt(dt_sec);
        self.card_world = self.float.group_transform(self.elapsed_sec) * card.model_matrix();
        SceneFrame {
            card,
            card_world: self.card_world,
            camera,
        }
    }

    /// Hit-test a pointer ray against the card plane and queue a click on a
    /// hit. Returns whether the card was hit.
    pub fn click(&mut self, ray: &Ray) -> bool {
        let size = self.card.config().size;
        match hit_card(ray, &self.card_world, size) {
            Some(t) => {
                log::debug!("[scene] card hit at t={:.3}", t);
                self.card.on_card_click();
                true
            }
            None => false,
        }
    }
}
