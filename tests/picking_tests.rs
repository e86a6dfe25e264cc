use card_core::*;
use glam::{Mat4, Quat, Vec2, Vec3};
use std::f32::consts::FRAC_PI_2;

fn card_size() -> Vec2 {
    Vec2::from(CARD_SIZE)
}

fn ray(origin: Vec3, dir: Vec3) -> Ray {
    Ray {
        origin,
        dir: dir.normalize(),
    }
}

#[test]
fn ray_through_center_hits() {
    let world = Mat4::from_translation(Vec3::new(0.0, 0.0, -1.0));
    let t = hit_card(&ray(Vec3::ZERO, Vec3::NEG_Z), &world, card_size()).unwrap();
    assert!((t - 1.0).abs() < 1e-6);
}

#[test]
fn ray_beside_card_misses() {
    let world = Mat4::from_translation(Vec3::new(0.0, 0.0, -1.0));
    let size = card_size();
    // half width is 0.075, half height 0.1
    assert!(hit_card(&ray(Vec3::new(0.1, 0.0, 0.0), Vec3::NEG_Z), &world, size).is_none());
    assert!(hit_card(&ray(Vec3::new(0.0, 0.12, 0.0), Vec3::NEG_Z), &world, size).is_none());
    assert!(hit_card(&ray(Vec3::new(0.07, 0.09, 0.0), Vec3::NEG_Z), &world, size).is_some());
}

#[test]
fn card_behind_origin_is_not_hit() {
    let world = Mat4::from_translation(Vec3::new(0.0, 0.0, -1.0));
    assert!(hit_card(&ray(Vec3::ZERO, Vec3::Z), &world, card_size()).is_none());
}

#[test]
fn ray_parallel_to_card_misses() {
    let world = Mat4::from_translation(Vec3::new(0.0, 0.0, -1.0));
    assert!(hit_card(&ray(Vec3::new(-1.0, 0.0, -1.0), Vec3::X), &world, card_size()).is_none());
}

#[test]
fn rotated_card_is_hit_from_the_side() {
    // quarter turn about Y puts the card face toward +X
    let world = Mat4::from_rotation_translation(Quat::from_rotation_y(FRAC_PI_2), Vec3::ZERO);
    let t = hit_card(&ray(Vec3::new(1.0, 0.0, 0.0), Vec3::NEG_X), &world, card_size()).unwrap();
    assert!((t - 1.0).abs() < 1e-5);
    assert!(hit_card(&ray(Vec3::new(1.0, 0.5, 0.0), Vec3::NEG_X), &world, card_size()).is_none());
}

#[test]
fn pixel_corners_map_to_ndc_corners() {
    assert_eq!(pixel_to_ndc(Vec2::new(0.0, 0.0), 800.0, 600.0), Vec2::new(-1.0, 1.0));
    assert_eq!(pixel_to_ndc(Vec2::new(800.0, 600.0), 800.0, 600.0), Vec2::new(1.0, -1.0));
    assert_eq!(pixel_to_ndc(Vec2::new(400.0, 300.0), 800.0, 600.0), Vec2::ZERO);
}

#[test]
fn center_ray_follows_camera_forward() {
    let cam = OrbitCamera::default();
    let inv = cam.view_proj(4.0 / 3.0).inverse();
    let r = ray_from_ndc(&inv, Vec2::ZERO).unwrap();
    let forward = (cam.target() - cam.eye()).normalize();
    assert!(r.dir.abs_diff_eq(forward, 1e-4));
    // origin lies on the near plane in front of the eye
    assert!(((r.origin - cam.eye()).length() - cam.config().near).abs() < 1e-3);
}

#[test]
fn camera_ray_hits_resting_card() {
    let cam = OrbitCamera::default();
    let aspect = 1.0;
    let view_proj = cam.view_proj(aspect);
    let card_world = Pose::closed().to_matrix();

    let center = view_proj.project_point3(card_world.transform_point3(Vec3::ZERO));
    let r = ray_from_ndc(&view_proj.inverse(), Vec2::new(center.x, center.y)).unwrap();
    assert!(hit_card(&r, &card_world, card_size()).is_some());
}
