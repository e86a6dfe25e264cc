//! Target-pose resolution.
//!
//! Produces the pose the card animates toward. Closed is a constant; open is a
//! point a short distance in front of the camera, facing it, pushed out of the
//! bouquet's bounding sphere when it would otherwise land inside.

use crate::constants::{DEGENERATE_EPSILON, OPEN_OFFSET, SPHERE_CENTER, SPHERE_RADIUS};
use crate::pose::Pose;
use crate::state::CardToggleState;
use glam::{Mat4, Vec3};

/// Spherical exclusion volume in the bouquet's local frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingSphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Default for BoundingSphere {
    fn default() -> Self {
        Self {
            center: SPHERE_CENTER,
            radius: SPHERE_RADIUS,
        }
    }
}

impl BoundingSphere {
    #[inline]
    pub fn contains(&self, point: Vec3) -> bool {
        (point - self.center).length() < self.radius
    }

    /// Push `point` to the sphere surface if it lies inside.
    ///
    /// `fallback_dir` is used when `point` coincides with the center and no
    /// outward direction can be derived from it.
    pub fn clamp_outside(&self, point: Vec3, fallback_dir: Vec3) -> Vec3 {
        let offset = point - self.center;
        let distance = offset.length();
        if distance >= self.radius {
            return point;
        }
        let dir = if distance > DEGENERATE_EPSILON {
            offset / distance
        } else {
            log::debug!("[resolver] degenerate clamp direction, using camera forward");
            fallback_dir.try_normalize().unwrap_or(Vec3::NEG_Z)
        };
        self.center + dir * self.radius
    }
}

/// Geometry the resolver works with. `Default` gives the stock card layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolverParams {
    pub closed: Pose,
    pub open_offset: Vec3,
    pub sphere: BoundingSphere,
}

impl Default for ResolverParams {
    fn default() -> Self {
        Self {
            closed: Pose::closed(),
            open_offset: OPEN_OFFSET,
            sphere: BoundingSphere::default(),
        }
    }
}

/// Resolve the target pose for `state` given the camera's world pose.
pub fn resolve_target(state: CardToggleState, camera: &Pose, params: &ResolverParams) -> Pose {
    match state {
        CardToggleState::Closed => params.closed,
        CardToggleState::Open => resolve_open(camera, params),
    }
}

/// Open target: camera transform composed with the local offset, then clamped.
pub fn resolve_open(camera: &Pose, params: &ResolverParams) -> Pose {
    let world = camera.to_matrix() * Mat4::from_translation(params.open_offset);
    let mut pose = Pose::from_matrix(&world);
    pose.position = params.sphere.clamp_outside(pose.position, camera.forward());
    pose
}
