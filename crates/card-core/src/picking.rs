use glam::{Mat4, Vec2, Vec3, Vec4};

/// World-space ray with a unit direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

/// Unproject a point in normalized device coordinates (x right, y up, both
/// in `[-1, 1]`) into a world-space ray through the near and far planes.
pub fn ray_from_ndc(inv_view_proj: &Mat4, ndc: Vec2) -> Option<Ray> {
    let p_near = *inv_view_proj * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
    let p_far = *inv_view_proj * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
    if p_near.w.abs() < 1e-12 || p_far.w.abs() < 1e-12 {
        return None;
    }
    let near = p_near.truncate() / p_near.w;
    let far = p_far.truncate() / p_far.w;
    let dir = (far - near).try_normalize()?;
    Some(Ray { origin: near, dir })
}

/// Canvas pixel coordinates to NDC.
#[inline]
pub fn pixel_to_ndc(px: Vec2, width: f32, height: f32) -> Vec2 {
    let w = width.max(1.0);
    let h = height.max(1.0);
    Vec2::new(2.0 * px.x / w - 1.0, 1.0 - 2.0 * px.y / h)
}

/// Intersect `ray` with the card rectangle (local plane z = 0, centered,
/// double sided). Returns the world-space hit distance.
///
/// Only the card plane takes part; the text drawn on top is not pickable.
pub fn hit_card(ray: &Ray, card_world: &Mat4, size: Vec2) -> Option<f32> {
    let inv = card_world.inverse();
    let o = inv.transform_point3(ray.origin);
    let d = inv.transform_vector3(ray.dir);
    if d.z.abs() < 1e-9 {
        return None;
    }
    let t = -o.z / d.z;
    if t < 0.0 {
        return None;
    }
    let p = o + d * t;
    let half = size * 0.5;
    if p.x.abs() > half.x || p.y.abs() > half.y {
        return None;
    }
    // rigid transform: local t equals world t
    Some(t)
}
