//! Spring-driven scalar channels.
//!
//! Every animated quantity of the card (three position components, four
//! quaternion components and the text opacity) is an independent damped
//! harmonic oscillator sharing one tension/friction pair. Retargeting only
//! moves the rest point, so a flip mid-flight continues from the current value
//! and velocity without a jump.
//!
//! Integration runs in fixed 1 ms sub-steps (semi-implicit Euler), which keeps
//! the motion identical across frame rates.

use crate::constants::{
    MAX_FRAME_DT_SEC, MIN_FRAME_DT_SEC, SPRING_FRICTION, SPRING_MASS, SPRING_PRECISION,
    SPRING_REST_VELOCITY, SPRING_SUBSTEP_SEC, SPRING_TENSION,
};
use crate::pose::Pose;
use glam::{Quat, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub tension: f32,
    pub friction: f32,
    pub mass: f32,
    pub precision: f32,
    pub rest_velocity: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            tension: SPRING_TENSION,
            friction: SPRING_FRICTION,
            mass: SPRING_MASS,
            precision: SPRING_PRECISION,
            rest_velocity: SPRING_REST_VELOCITY,
        }
    }
}

/// The eight animated channels, in storage order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    PosX,
    PosY,
    PosZ,
    RotX,
    RotY,
    RotZ,
    RotW,
    Opacity,
}

impl Channel {
    pub const COUNT: usize = 8;

    /// Pose channels in [`Pose::components`] order.
    pub const POSE: [Channel; 7] = [
        Channel::PosX,
        Channel::PosY,
        Channel::PosZ,
        Channel::RotX,
        Channel::RotY,
        Channel::RotZ,
        Channel::RotW,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// One scalar spring: current value, velocity (units/sec) and rest point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpringChannel {
    pub value: f32,
    pub velocity: f32,
    pub target: f32,
}

impl SpringChannel {
    pub fn at_rest(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
        }
    }

    #[inline]
    pub fn is_settled(&self, cfg: &SpringConfig) -> bool {
        self.velocity.abs() <= cfg.rest_velocity && (self.target - self.value).abs() <= cfg.precision
    }

    /// Advance `steps` sub-steps of length `h` seconds.
    fn advance(&mut self, cfg: &SpringConfig, h: f32, steps: u32) {
        for _ in 0..steps {
            if self.is_settled(cfg) {
                break;
            }
            let spring_force = -cfg.tension * (self.value - self.target);
            let damping_force = -cfg.friction * self.velocity;
            let accel = (spring_force + damping_force) / cfg.mass;
            self.velocity += accel * h;
            self.value += self.velocity * h;
        }
        if self.is_settled(cfg) {
            self.value = self.target;
            self.velocity = 0.0;
        }
        if !(self.value.is_finite() && self.velocity.is_finite()) {
            log::warn!("[spring] non-finite channel state, snapping to target");
            self.value = self.target;
            self.velocity = 0.0;
        }
    }
}

/// Replace unusable frame times with a safe positive step and cap long gaps.
#[inline]
pub fn sanitize_dt(dt_sec: f32) -> f32 {
    if dt_sec.is_finite() && dt_sec > 0.0 {
        dt_sec.clamp(MIN_FRAME_DT_SEC, MAX_FRAME_DT_SEC)
    } else {
        MIN_FRAME_DT_SEC
    }
}

/// Position, orientation and opacity springs of a single card.
#[derive(Clone, Debug)]
pub struct SpringChannelSet {
    config: SpringConfig,
    channels: [SpringChannel; Channel::COUNT],
}

impl SpringChannelSet {
    /// All channels start at rest on `pose` and `opacity`.
    pub fn new(config: SpringConfig, pose: &Pose, opacity: f32) -> Self {
        let mut channels = [SpringChannel::default(); Channel::COUNT];
        for (ch, v) in Channel::POSE.iter().zip(pose.components()) {
            channels[ch.index()] = SpringChannel::at_rest(v);
        }
        channels[Channel::Opacity.index()] = SpringChannel::at_rest(opacity);
        Self { config, channels }
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    pub fn channel(&self, ch: Channel) -> &SpringChannel {
        &self.channels[ch.index()]
    }

    /// Move the rest point of one channel. Value and velocity are untouched.
    pub fn retarget(&mut self, ch: Channel, target: f32) {
        if !target.is_finite() {
            log::warn!("[spring] ignoring non-finite target for {:?}", ch);
            return;
        }
        self.channels[ch.index()].target = target;
    }

    pub fn retarget_pose(&mut self, pose: &Pose) {
        for (ch, v) in Channel::POSE.iter().zip(pose.components()) {
            self.retarget(*ch, v);
        }
    }

    pub fn retarget_opacity(&mut self, opacity: f32) {
        self.retarget(Channel::Opacity, opacity);
    }

    /// Integrate all channels in lockstep over `dt_sec` seconds.
    pub fn step(&mut self, dt_sec: f32) {
        let dt = sanitize_dt(dt_sec);
        let steps = (dt / SPRING_SUBSTEP_SEC).ceil().max(1.0) as u32;
        let h = dt / steps as f32;
        for ch in &mut self.channels {
            ch.advance(&self.config, h, steps);
        }
    }

    pub fn current_values(&self) -> [f32; Channel::COUNT] {
        self.channels.map(|c| c.value)
    }

    pub fn velocities(&self) -> [f32; Channel::COUNT] {
        self.channels.map(|c| c.velocity)
    }

    pub fn targets(&self) -> [f32; Channel::COUNT] {
        self.channels.map(|c| c.target)
    }

    pub fn is_settled(&self) -> bool {
        self.channels.iter().all(|c| c.is_settled(&self.config))
    }

    pub fn current_position(&self) -> Vec3 {
        let v = self.current_values();
        Vec3::new(v[0], v[1], v[2])
    }

    /// Raw quaternion quadruple as currently animated. Not guaranteed to be
    /// unit length mid-transition.
    pub fn current_rotation_raw(&self) -> Quat {
        let v = self.current_values();
        Quat::from_xyzw(v[3], v[4], v[5], v[6])
    }

    /// Orientation safe to hand to a renderer: the raw quadruple renormalized,
    /// or the target orientation when the quadruple collapses toward zero.
    pub fn current_orientation(&self) -> Quat {
        let raw = self.current_rotation_raw();
        if raw.length_squared() > 1e-8 {
            raw.normalize()
        } else {
            let t = self.targets();
            let target = Quat::from_xyzw(t[3], t[4], t[5], t[6]);
            if target.length_squared() > 1e-8 {
                target.normalize()
            } else {
                Quat::IDENTITY
            }
        }
    }

    pub fn current_opacity(&self) -> f32 {
        self.channel(Channel::Opacity).value
    }

    pub fn current_pose(&self) -> Pose {
        Pose::new(self.current_position(), self.current_orientation())
    }
}
