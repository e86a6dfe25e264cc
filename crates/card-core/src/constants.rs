use glam::Vec3;

// Card pose and animation tuning shared by the core and the web frontend.

// Closed pose (bouquet-local frame)
pub const CLOSED_POSITION: Vec3 = Vec3::new(0.0, 0.35, 0.0);
pub const CLOSED_PITCH: f32 = -0.2; // radians, about X
pub const CLOSED_YAW: f32 = 0.5; // radians, about Y
pub const CLOSED_ROLL: f32 = 0.0; // radians, about Z

// Open pose: offset along the camera's local axes
pub const OPEN_OFFSET: Vec3 = Vec3::new(0.0, 0.0, -0.25);

// Avoidance volume around the bouquet
pub const SPHERE_CENTER: Vec3 = Vec3::new(0.0, 0.2, 0.0);
pub const SPHERE_RADIUS: f32 = 0.2;

// Card plane size (width, height)
pub const CARD_SIZE: [f32; 2] = [0.15, 0.2];
// Text anchor on the card face (card-local)
pub const TEXT_OFFSET: Vec3 = Vec3::new(0.0, 0.05, 0.001);
pub const TEXT_FONT_SIZE: f32 = 0.01;
pub const TEXT_MAX_WIDTH: f32 = 0.13;
pub const TEXT_LINE_HEIGHT: f32 = 1.2;

// Spring dynamics
pub const SPRING_TENSION: f32 = 120.0;
pub const SPRING_FRICTION: f32 = 14.0;
pub const SPRING_MASS: f32 = 1.0;
pub const SPRING_SUBSTEP_SEC: f32 = 0.001; // fixed integration step
pub const SPRING_PRECISION: f32 = 1e-5; // displacement considered at rest
pub const SPRING_REST_VELOCITY: f32 = 1e-4; // velocity considered at rest

// Frame time sanitization
pub const MIN_FRAME_DT_SEC: f32 = 0.001;
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Below this length a direction is treated as degenerate
pub const DEGENERATE_EPSILON: f32 = 1e-6;

pub const DEFAULT_MESSAGE: &str = "Милые девушки, поздравляю с 8-м марта!";
