pub use card_core::*;

// Shaders bundled as string constants
pub static SKY_WGSL: &str = include_str!("../../shaders/sky.wgsl");
pub static CARD_WGSL: &str = include_str!("../../shaders/card.wgsl");
