use super::types::Point;

pub fn length(point: Point) -> f32 {
  (point.x * point.x + point.y * point.y + point.z * point.z).sqrt()
}

pub fn normalize(point: Point) -> Point {
  let len = length(point);
  if !len.is_finite() || len == 0.0 {
    return Point { x: 0.0, y: 0.0, z: 0.0 };
  }
  Point {
    x: point.x / len,
    y: point.y / len,
    z: point.z / len,
  }
}

/// Euclidean distance. Squares are summed in `f64` and rounded back once.
pub fn distance(a: Point, b: Point) -> f32 {
  let dx = (a.x - b.x) as f64;
  let dy = (a.y - b.y) as f64;
  let dz = (a.z - b.z) as f64;
  (dx * dx + dy * dy + dz * dz).sqrt() as f32
}

/// Moves `point` toward `target` by `alpha` per axis. `alpha` is not clamped,
/// so values above 1.0 overshoot the target.
pub fn lerp(point: &mut Point, target: Point, alpha: f32) {
  point.x += (target.x - point.x) * alpha;
  point.y += (target.y - point.y) * alpha;
  point.z += (target.z - point.z) * alpha;
}

pub fn within(a: Point, b: Point, radius: f32) -> bool {
  distance(a, b) < radius
}

pub fn parse_direction(value: Point) -> Option<Point> {
  if !value.is_finite() {
    return None;
  }
  let normalized = normalize(value);
  if length(normalized) == 0.0 {
    return None;
  }
  Some(normalized)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn distance_is_symmetric_and_zero_for_equal_points() {
    let a = Point::new(1.0, 2.0, 3.0);
    let b = Point::new(4.0, 6.0, 3.0);
    assert_eq!(distance(a, b), 5.0);
    assert_eq!(distance(b, a), 5.0);
    assert_eq!(distance(a, a), 0.0);
  }

  #[test]
  fn lerp_moves_fraction_of_the_offset() {
    let mut point = Point::new(0.0, 0.0, 0.0);
    lerp(&mut point, Point::new(10.0, -4.0, 2.0), 0.25);
    assert_eq!(point, Point::new(2.5, -1.0, 0.5));
  }

  #[test]
  fn lerp_overshoots_when_alpha_exceeds_one() {
    let mut point = Point::new(0.0, 0.0, 0.0);
    lerp(&mut point, Point::new(1.0, 0.0, 0.0), 3.0);
    assert_eq!(point.x, 3.0);
  }

  #[test]
  fn copies_are_independent() {
    let original = Point::new(1.0, 1.0, 1.0);
    let mut copy = original;
    lerp(&mut copy, Point::new(2.0, 2.0, 2.0), 1.0);
    assert_eq!(original, Point::new(1.0, 1.0, 1.0));
    assert_eq!(copy, Point::new(2.0, 2.0, 2.0));
  }

  #[test]
  fn parse_direction_rejects_zero_and_non_finite() {
    assert!(parse_direction(Point::new(0.0, 0.0, 0.0)).is_none());
    assert!(parse_direction(Point::new(f32::NAN, 0.0, 1.0)).is_none());
    let parsed = parse_direction(Point::new(3.0, 0.0, 4.0)).expect("valid direction");
    assert!((length(parsed) - 1.0).abs() < 1e-6);
  }
}
