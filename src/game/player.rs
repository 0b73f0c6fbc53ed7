use super::body::{BodyState, BodyTuning, TrajectoryBody};
use super::constants::{BOOST_DRAIN_INTERVAL, FORWARD};
use super::error::WorldError;
use super::math::parse_direction;
use super::types::Point;

/// The human-controlled snake.
///
/// Travels straight along +Z. Steering input is stored through
/// [`PlayerBody::set_direction`] for the input layer but does not bend the
/// trajectory yet.
#[derive(Clone, Debug)]
pub struct PlayerBody {
    body: BodyState,
    boost_drain_timer: f32,
    direction: Point,
}

impl PlayerBody {
    pub fn new(start: Point, level: u32) -> Self {
        Self::from_body(BodyState::new(start, level))
    }

    pub fn with_tuning(start: Point, level: u32, tuning: BodyTuning) -> Result<Self, WorldError> {
        Ok(Self::from_body(BodyState::with_tuning(start, level, tuning)?))
    }

    fn from_body(body: BodyState) -> Self {
        Self {
            body,
            boost_drain_timer: 0.0,
            direction: FORWARD,
        }
    }

    pub fn set_direction(&mut self, x: f32, y: f32, z: f32) {
        if let Some(direction) = parse_direction(Point { x, y, z }) {
            self.direction = direction;
        }
    }

    pub fn direction(&self) -> Point {
        self.direction
    }

    pub fn boost_drain_timer(&self) -> f32 {
        self.boost_drain_timer
    }
}

impl TrajectoryBody for PlayerBody {
    fn body(&self) -> &BodyState {
        &self.body
    }

    fn body_mut(&mut self) -> &mut BodyState {
        &mut self.body
    }

    fn advance(&mut self, speed: f32, dt: f32) {
        self.body.position_mut().z += speed * dt;

        if !self.body.is_boosting() {
            return;
        }
        // Overflow past the interval is dropped, not carried.
        self.boost_drain_timer += dt;
        if self.boost_drain_timer >= BOOST_DRAIN_INTERVAL {
            self.body.drain_level();
            self.boost_drain_timer = 0.0;
        }
    }
}
