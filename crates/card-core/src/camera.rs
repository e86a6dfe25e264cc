//! Orbit camera around the bouquet.
//!
//! Spherical coordinates about a fixed target with damped rotation:
//! - drag: orbit (a full viewport height of travel is one full turn)
//! - wheel: dolly toward or away from the target
//!
//! The camera is an input to the card core, never owned by it: the frame step
//! reads [`OrbitCamera::pose`] and passes it to [`crate::Card::frame`].

use crate::pose::Pose;
use glam::{Mat4, Vec3};
use std::f32::consts::{PI, TAU};

const POLAR_EPSILON: f32 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitConfig {
    pub target: Vec3,
    pub initial_eye: Vec3,
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    /// Fraction of the pending rotation applied per update.
    pub damping_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            target: Vec3::new(0.0, 0.2, 0.0),
            initial_eye: Vec3::new(0.0, 0.3, 0.5),
            fov_deg: 75.0,
            near: 0.1,
            far: 1000.0,
            rotate_speed: 1.0,
            zoom_speed: 0.1,
            damping_factor: 0.05,
            min_distance: 0.1,
            max_distance: 10.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct OrbitCamera {
    config: OrbitConfig,
    radius: f32,
    /// Azimuth about +Y, measured from +Z toward +X.
    theta: f32,
    /// Polar angle from +Y.
    phi: f32,
    pending_theta: f32,
    pending_phi: f32,
    pending_scale: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(OrbitConfig::default())
    }
}

impl OrbitCamera {
    pub fn new(config: OrbitConfig) -> Self {
        let offset = config.initial_eye - config.target;
        let radius = offset.length().max(config.min_distance);
        let theta = offset.x.atan2(offset.z);
        let phi = (offset.y / radius).clamp(-1.0, 1.0).acos();
        Self {
            config,
            radius,
            theta,
            phi: phi.clamp(POLAR_EPSILON, PI - POLAR_EPSILON),
            pending_theta: 0.0,
            pending_phi: 0.0,
            pending_scale: 1.0,
        }
    }

    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    pub fn target(&self) -> Vec3 {
        self.config.target
    }

    pub fn distance(&self) -> f32 {
        self.radius
    }

    pub fn eye(&self) -> Vec3 {
        let sin_phi = self.phi.sin();
        self.config.target
            + Vec3::new(
                self.radius * sin_phi * self.theta.sin(),
                self.radius * self.phi.cos(),
                self.radius * sin_phi * self.theta.cos(),
            )
    }

    /// Queue an orbit from a pointer drag of `dx_px`, `dy_px` pixels.
    pub fn rotate(&mut self, dx_px: f32, dy_px: f32, viewport_height_px: f32) {
        let h = viewport_height_px.max(1.0);
        self.pending_theta -= TAU * dx_px / h * self.config.rotate_speed;
        self.pending_phi -= TAU * dy_px / h * self.config.rotate_speed;
    }

    /// Queue a dolly from a wheel event. Negative `delta_y` moves closer.
    pub fn zoom(&mut self, delta_y: f32) {
        let step = 0.95_f32.powf(self.config.zoom_speed);
        if delta_y < 0.0 {
            self.pending_scale *= step;
        } else if delta_y > 0.0 {
            self.pending_scale /= step;
        }
    }

    /// Apply one frame of damped motion. Returns whether the camera moved.
    pub fn update(&mut self) -> bool {
        let d = self.config.damping_factor.clamp(0.0, 1.0);
        let d_theta = self.pending_theta * d;
        let d_phi = self.pending_phi * d;
        self.theta += d_theta;
        self.phi = (self.phi + d_phi).clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        self.pending_theta *= 1.0 - d;
        self.pending_phi *= 1.0 - d;

        let old_radius = self.radius;
        self.radius = (self.radius * self.pending_scale)
            .clamp(self.config.min_distance, self.config.max_distance);
        self.pending_scale = 1.0;

        d_theta.abs() > f32::EPSILON
            || d_phi.abs() > f32::EPSILON
            || (self.radius - old_radius).abs() > f32::EPSILON
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.config.target, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(
            self.config.fov_deg.to_radians(),
            aspect.max(1e-3),
            self.config.near,
            self.config.far,
        )
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// World transform of the camera (inverse of the view matrix).
    pub fn pose(&self) -> Pose {
        Pose::from_matrix(&self.view_matrix().inverse())
    }
}
