use serde::Serialize;

use super::types::Point;

/// Static pellet that adds `value` levels to whoever eats it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Food {
  position: Point,
  value: u32,
}

impl Food {
  pub fn new(position: Point, value: u32) -> Self {
    Self { position, value }
  }

  pub fn position(&self) -> Point {
    self.position
  }

  pub fn value(&self) -> u32 {
    self.value
  }
}
