//! Position + orientation snapshot used throughout the card pipeline.

use crate::constants::{CLOSED_PITCH, CLOSED_POSITION, CLOSED_ROLL, CLOSED_YAW};
use glam::{Mat4, Quat, Vec3};

/// A rigid transform: world (or group-local) position and a unit quaternion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub orientation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        orientation: Quat::IDENTITY,
    };

    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Resting pose of the card, tucked into the bouquet.
    ///
    /// The tilt is applied X, then Y, then Z (intrinsic), matching an `XYZ`
    /// Euler order.
    pub fn closed() -> Self {
        let orientation = Quat::from_rotation_x(CLOSED_PITCH)
            * Quat::from_rotation_y(CLOSED_YAW)
            * Quat::from_rotation_z(CLOSED_ROLL);
        Self::new(CLOSED_POSITION, orientation)
    }

    /// Split a rigid matrix into a pose. Scale is discarded.
    pub fn from_matrix(m: &Mat4) -> Self {
        let (_scale, orientation, position) = m.to_scale_rotation_translation();
        Self::new(position, orientation.normalize())
    }

    #[inline]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position)
    }

    /// Direction the pose looks along (local −Z).
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Components in animator channel order:
    /// `[px, py, pz, qx, qy, qz, qw]`.
    pub fn components(&self) -> [f32; 7] {
        let p = self.position;
        let q = self.orientation;
        [p.x, p.y, p.z, q.x, q.y, q.z, q.w]
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.orientation.is_finite()
    }
}
