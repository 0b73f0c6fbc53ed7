use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::food::Food;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
  pub x: f32,
  pub y: f32,
  pub z: f32,
}

impl Point {
  pub const fn new(x: f32, y: f32, z: f32) -> Self {
    Self { x, y, z }
  }

  pub fn is_finite(&self) -> bool {
    self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct BodySnapshot {
  pub position: Point,
  pub level: u32,
  pub boosting: bool,
  pub segments: Vec<Point>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BotSnapshot {
  pub id: Uuid,
  #[serde(flatten)]
  pub body: BodySnapshot,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorldSnapshot {
  pub player: Option<BodySnapshot>,
  pub bots: Vec<BotSnapshot>,
  pub food: Vec<Food>,
}
