// Front-end tuning constants: page contract, colours and interaction limits.
//
// Card geometry and animation constants live in `card_core::constants`.
// Page contract
pub const CANVAS_ID: &str = "card-canvas";
pub const TEXT_ELEMENT_ID: &str = "card-text";
pub const MESSAGE_QUERY_PARAM: &str = "text";

// Sky gradient (linear RGB of #f3f5f7 and #d6e6f0)
pub const SKY_TOP_COLOR: [f32; 3] = [0.896, 0.913, 0.930];
pub const SKY_BOTTOM_COLOR: [f32; 3] = [0.672, 0.791, 0.871];

// Card face
pub const CARD_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const TEXT_COLOR: &str = "darkred";
pub const TEXT_FONT_FAMILY: &str = "cursive";

// Interaction
// Pointer travel (CSS px) above which a press counts as an orbit drag, not a click
pub const CLICK_DRAG_THRESHOLD_PX: f32 = 4.0;

// Smallest font size worth drawing for the overlay (CSS px)
pub const TEXT_MIN_FONT_PX: f32 = 1.0;
