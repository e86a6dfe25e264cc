pub mod camera;
pub mod card;
pub mod constants;
pub mod float;
pub mod message;
pub mod picking;
pub mod pose;
pub mod resolver;
pub mod scene;
pub mod spring;
pub mod state;

pub use camera::*;
pub use card::*;
pub use constants::*;
pub use float::*;
pub use message::*;
pub use picking::*;
pub use pose::*;
pub use resolver::*;
pub use scene::*;
pub use spring::*;
pub use state::*;
