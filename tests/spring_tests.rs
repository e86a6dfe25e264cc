// Host-side tests for the spring channel animator.

use card_core::*;
use glam::{Quat, Vec3};

const DT: f32 = 1.0 / 60.0;

fn closed_set() -> SpringChannelSet {
    SpringChannelSet::new(SpringConfig::default(), &Pose::closed(), 0.0)
}

#[test]
fn new_set_rests_on_initial_pose() {
    let set = closed_set();
    assert!(set.is_settled());
    let values = set.current_values();
    let closed = Pose::closed().components();
    for i in 0..7 {
        assert_eq!(values[i], closed[i]);
    }
    assert_eq!(values[Channel::Opacity.index()], 0.0);
    assert!(set.velocities().iter().all(|v| *v == 0.0));
}

#[test]
fn retarget_only_moves_the_target() {
    let mut set = closed_set();
    set.retarget(Channel::PosX, 1.0);
    for _ in 0..10 {
        set.step(DT);
    }
    let before = *set.channel(Channel::PosX);
    assert!(before.velocity != 0.0);

    set.retarget(Channel::PosX, -2.0);
    let after = *set.channel(Channel::PosX);
    assert_eq!(after.value, before.value);
    assert_eq!(after.velocity, before.velocity);
    assert_eq!(after.target, -2.0);
}

#[test]
fn channel_settles_on_constant_target() {
    let mut set = closed_set();
    set.retarget(Channel::PosX, 1.0);
    set.retarget_opacity(1.0);
    for _ in 0..600 {
        set.step(DT);
    }
    assert!(set.is_settled());
    assert!((set.channel(Channel::PosX).value - 1.0).abs() < 1e-4);
    assert!((set.current_opacity() - 1.0).abs() < 1e-4);
    assert!(set.velocities().iter().all(|v| v.abs() < 1e-3));
}

#[test]
fn underdamped_overshoot_stays_bounded() {
    let mut set = closed_set();
    set.retarget(Channel::PosX, 1.0);
    let mut max_value = f32::MIN;
    for _ in 0..300 {
        set.step(DT);
        max_value = max_value.max(set.channel(Channel::PosX).value);
    }
    // tension 120 / friction 14 overshoots by roughly 7%
    assert!(max_value > 1.0, "expected overshoot, max {}", max_value);
    assert!(max_value < 1.2, "overshoot too large: {}", max_value);
}

#[test]
fn sanitize_dt_replaces_bad_frame_times() {
    assert_eq!(sanitize_dt(f32::NAN), MIN_FRAME_DT_SEC);
    assert_eq!(sanitize_dt(f32::INFINITY), MIN_FRAME_DT_SEC);
    assert_eq!(sanitize_dt(f32::NEG_INFINITY), MIN_FRAME_DT_SEC);
    assert_eq!(sanitize_dt(0.0), MIN_FRAME_DT_SEC);
    assert_eq!(sanitize_dt(-0.5), MIN_FRAME_DT_SEC);
    assert_eq!(sanitize_dt(10.0), MAX_FRAME_DT_SEC);
    assert_eq!(sanitize_dt(0.016), 0.016);
}

#[test]
fn non_finite_dt_never_produces_nan() {
    let mut set = closed_set();
    set.retarget_pose(&Pose::new(Vec3::new(0.3, 0.1, 0.4), Quat::from_rotation_y(1.0)));
    set.retarget_opacity(1.0);

    let mut reference = set.clone();
    set.step(f32::NAN);
    reference.step(MIN_FRAME_DT_SEC);
    assert_eq!(set.current_values(), reference.current_values());

    for dt in [f32::INFINITY, f32::NEG_INFINITY, -1.0, 0.0, 1e9] {
        set.step(dt);
        assert!(set.current_values().iter().all(|v| v.is_finite()));
        assert!(set.velocities().iter().all(|v| v.is_finite()));
    }
}

#[test]
fn motion_is_independent_of_frame_rate() {
    let mut coarse = closed_set();
    let mut fine = closed_set();
    coarse.retarget(Channel::PosY, 1.0);
    fine.retarget(Channel::PosY, 1.0);

    for _ in 0..30 {
        coarse.step(1.0 / 30.0);
    }
    for _ in 0..120 {
        fine.step(1.0 / 120.0);
    }
    let a = coarse.channel(Channel::PosY).value;
    let b = fine.channel(Channel::PosY).value;
    assert!((a - b).abs() < 1e-2, "coarse {} vs fine {}", a, b);
}

#[test]
fn rendered_orientation_is_unit_during_large_rotation() {
    let mut set = closed_set();
    let far = Quat::from_rotation_y(2.8) * Quat::from_rotation_x(1.2);
    set.retarget_pose(&Pose::new(Vec3::ZERO, far));

    let mut raw_deviation = 0.0_f32;
    for _ in 0..120 {
        set.step(DT);
        raw_deviation = raw_deviation.max((set.current_rotation_raw().length() - 1.0).abs());
        let q = set.current_orientation();
        assert!((q.length() - 1.0).abs() < 1e-4);
    }
    // the raw quadruple does leave the unit sphere mid-flight
    assert!(raw_deviation > 1e-3);
}

#[test]
fn degenerate_quadruple_falls_back_to_target() {
    let zero = Pose::new(Vec3::ZERO, Quat::from_xyzw(0.0, 0.0, 0.0, 0.0));
    let mut set = SpringChannelSet::new(SpringConfig::default(), &zero, 0.0);
    set.retarget_pose(&Pose::IDENTITY);
    assert_eq!(set.current_orientation(), Quat::IDENTITY);
}

#[test]
fn non_finite_target_is_ignored() {
    let mut set = closed_set();
    let before = set.targets();
    set.retarget(Channel::PosZ, f32::NAN);
    set.retarget_opacity(f32::INFINITY);
    assert_eq!(set.targets(), before);
}
