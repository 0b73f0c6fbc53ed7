use super::types::Point;

pub const HISTORY_CAPACITY: usize = 500;
pub const BASE_SAMPLE_INTERVAL: f32 = 0.1;
pub const DEFAULT_MOVE_SPEED: f32 = 5.0;
pub const DEFAULT_SEGMENT_SPACING: f32 = 0.5;
pub const BOOST_MULTIPLIER: f32 = 2.0;
pub const BOOST_DRAIN_INTERVAL: f32 = 1.0;
pub const MIN_LEVEL: u32 = 1;
pub const COLLISION_RADIUS: f32 = 1.0;
pub const BOT_SEEK_SPEED: f32 = 4.0;
pub const MAX_SEGMENTS: usize = 100;
pub const BASE_SEGMENTS: usize = 3;
pub const LEVELS_PER_SEGMENT: f32 = 2.5;
pub const FORWARD: Point = Point {
  x: 0.0,
  y: 0.0,
  z: 1.0,
};
