//! Card controller: toggle state, pending clicks and the animator, stepped
//! once per rendered frame with the camera passed in explicitly.

use crate::constants::CARD_SIZE;
use crate::pose::Pose;
use crate::resolver::{resolve_target, ResolverParams};
use crate::spring::{SpringChannelSet, SpringConfig};
use crate::state::CardToggleState;
use glam::{Mat4, Quat, Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardConfig {
    pub spring: SpringConfig,
    pub resolver: ResolverParams,
    /// Card plane width and height.
    pub size: Vec2,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            spring: SpringConfig::default(),
            resolver: ResolverParams::default(),
            size: Vec2::from_array(CARD_SIZE),
        }
    }
}

/// What the render binding applies to the card for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardFrame {
    pub position: Vec3,
    /// Unit quaternion.
    pub orientation: Quat,
    /// Text opacity in `[0, 1]`.
    pub text_opacity: f32,
    pub state: CardToggleState,
}

impl CardFrame {
    /// Card transform relative to its parent group.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position)
    }
}

#[derive(Debug)]
pub struct Card {
    text: String,
    config: CardConfig,
    state: CardToggleState,
    pending_clicks: u32,
    target: Pose,
    springs: SpringChannelSet,
}

impl Card {
    pub fn new(text: impl Into<String>, config: CardConfig) -> Self {
        let state = CardToggleState::Closed;
        let target = config.resolver.closed;
        let springs = SpringChannelSet::new(config.spring, &target, state.text_opacity());
        Self {
            text: text.into(),
            config,
            state,
            pending_clicks: 0,
            target,
            springs,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    pub fn state(&self) -> CardToggleState {
        self.state
    }

    pub fn target(&self) -> &Pose {
        &self.target
    }

    pub fn springs(&self) -> &SpringChannelSet {
        &self.springs
    }

    pub fn pending_clicks(&self) -> u32 {
        self.pending_clicks
    }

    /// Register a click on the card plane. Applied on the next frame step.
    pub fn on_card_click(&mut self) {
        self.pending_clicks = self.pending_clicks.saturating_add(1);
    }

    /// Apply queued clicks, one flip each. Returns whether the state changed.
    pub fn process_clicks(&mut self) -> bool {
        if self.pending_clicks == 0 {
            return false;
        }
        let before = self.state;
        for _ in 0..self.pending_clicks {
            self.state = self.state.toggled();
        }
        log::debug!(
            "[card] {} click(s): {} -> {}",
            self.pending_clicks,
            before,
            self.state
        );
        self.pending_clicks = 0;
        self.springs.retarget_opacity(self.state.text_opacity());
        before != self.state
    }

    /// Resolve the target for the current state and retarget the pose
    /// springs when it moved. Returns whether a retarget happened.
    pub fn update_target(&mut self, camera: &Pose) -> bool {
        let target = resolve_target(self.state, camera, &self.config.resolver);
        if !target.is_finite() {
            log::warn!("[card] resolved non-finite target, keeping previous");
            return false;
        }
        if target == self.target {
            return false;
        }
        self.target = target;
        self.springs.retarget_pose(&target);
        true
    }

    /// One render tick: clicks, target resolution, spring integration.
    pub fn frame(&mut self, dt_sec: f32, camera: &Pose) -> CardFrame {
        self.process_clicks();
        self.update_target(camera);
        self.springs.step(dt_sec);
        self.current_frame()
    }

    /// Current animated values without advancing time.
    pub fn current_frame(&self) -> CardFrame {
        CardFrame {
            position: self.springs.current_position(),
            orientation: self.springs.current_orientation(),
            text_opacity: self.springs.current_opacity().clamp(0.0, 1.0),
            state: self.state,
        }
    }
}
