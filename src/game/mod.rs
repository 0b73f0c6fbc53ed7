pub mod body;
pub mod bot;
pub mod constants;
pub mod error;
pub mod food;
pub mod math;
pub mod player;
pub mod types;
pub mod world;

pub use body::{BodyState, BodyTuning, TrajectoryBody};
pub use bot::BotBody;
pub use error::WorldError;
pub use food::Food;
pub use player::PlayerBody;
pub use types::{Point, WorldSnapshot};
pub use world::{World, WorldConfig, WorldEvent};
