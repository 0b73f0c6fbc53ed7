use super::constants::{
    BASE_SAMPLE_INTERVAL, BASE_SEGMENTS, BOOST_MULTIPLIER, DEFAULT_MOVE_SPEED,
    DEFAULT_SEGMENT_SPACING, HISTORY_CAPACITY, LEVELS_PER_SEGMENT, MAX_SEGMENTS, MIN_LEVEL,
};
use super::error::WorldError;
use super::types::{BodySnapshot, Point};
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyTuning {
    pub move_speed: f32,
    pub segment_spacing: f32,
    pub history_capacity: usize,
}

impl Default for BodyTuning {
    fn default() -> Self {
        Self {
            move_speed: DEFAULT_MOVE_SPEED,
            segment_spacing: DEFAULT_SEGMENT_SPACING,
            history_capacity: HISTORY_CAPACITY,
        }
    }
}

impl BodyTuning {
    pub fn validate(&self) -> Result<(), WorldError> {
        if !self.move_speed.is_finite() || self.move_speed <= 0.0 {
            return Err(WorldError::InvalidConfig("move_speed must be finite and positive"));
        }
        if !self.segment_spacing.is_finite() || self.segment_spacing <= 0.0 {
            return Err(WorldError::InvalidConfig(
                "segment_spacing must be finite and positive",
            ));
        }
        if self.history_capacity == 0 {
            return Err(WorldError::InvalidConfig("history_capacity must be at least 1"));
        }
        Ok(())
    }
}

/// Position, level and trail shared by every moving body.
///
/// The trail is a newest-first buffer of head positions, pre-filled with the
/// start position so it always holds exactly `history_capacity` samples.
#[derive(Clone, Debug)]
pub struct BodyState {
    position: Point,
    level: u32,
    move_speed: f32,
    segment_spacing: f32,
    boosting: bool,
    history: VecDeque<Point>,
    capacity: usize,
}

impl BodyState {
    pub fn new(start: Point, level: u32) -> Self {
        Self::build(start, level, BodyTuning::default())
    }

    pub fn with_tuning(start: Point, level: u32, tuning: BodyTuning) -> Result<Self, WorldError> {
        tuning.validate()?;
        Ok(Self::build(start, level, tuning))
    }

    fn build(start: Point, level: u32, tuning: BodyTuning) -> Self {
        let mut history = VecDeque::with_capacity(tuning.history_capacity);
        for _ in 0..tuning.history_capacity {
            history.push_back(start);
        }
        Self {
            position: start,
            level: level.max(MIN_LEVEL),
            move_speed: tuning.move_speed,
            segment_spacing: tuning.segment_spacing,
            boosting: false,
            history,
            capacity: tuning.history_capacity,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub(crate) fn position_mut(&mut self) -> &mut Point {
        &mut self.position
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn set_level(&mut self, level: u32) {
        self.level = level.max(MIN_LEVEL);
    }

    pub fn add_level(&mut self, amount: u32) {
        self.level = self.level.saturating_add(amount);
    }

    /// Drops one level, never below the floor.
    pub fn drain_level(&mut self) {
        if self.level > MIN_LEVEL {
            self.level -= 1;
        }
    }

    pub fn is_boosting(&self) -> bool {
        self.boosting
    }

    pub fn set_boosting(&mut self, boosting: bool) {
        self.boosting = boosting;
    }

    /// Boost doubles speed only while there is a level to spend.
    pub fn current_speed(&self) -> f32 {
        if self.boosting && self.level > MIN_LEVEL {
            self.move_speed * BOOST_MULTIPLIER
        } else {
            self.move_speed
        }
    }

    pub fn history(&self) -> &VecDeque<Point> {
        &self.history
    }

    pub fn history_capacity(&self) -> usize {
        self.capacity
    }

    fn record_position(&mut self) {
        if self.history.len() >= self.capacity {
            self.history.pop_back();
        }
        self.history.push_front(self.position);
    }

    /// Samples the trail `segment_index * spacing / BASE_SAMPLE_INTERVAL`
    /// frames back. Indices past the buffer clamp to the oldest sample.
    pub fn segment_position(&self, segment_index: usize) -> Point {
        let stride = self.segment_spacing / BASE_SAMPLE_INTERVAL;
        let history_index = (segment_index as f32 * stride).floor() as usize;
        self.history
            .get(history_index)
            .or_else(|| self.history.back())
            .copied()
            .unwrap_or(self.position)
    }

    pub fn segment_count(&self) -> usize {
        let grown = (self.level as f32 / LEVELS_PER_SEGMENT).floor() as usize;
        (grown + BASE_SEGMENTS).min(MAX_SEGMENTS)
    }

    pub fn segment_positions(&self) -> Vec<Point> {
        (1..=self.segment_count())
            .map(|index| self.segment_position(index))
            .collect()
    }

    pub fn snapshot(&self) -> BodySnapshot {
        BodySnapshot {
            position: self.position,
            level: self.level,
            boosting: self.boosting,
            segments: self.segment_positions(),
        }
    }
}

/// A body that advances once per frame along its own movement rule.
///
/// Implementors supply [`TrajectoryBody::advance`]; the frame routine in
/// [`TrajectoryBody::update`] picks the speed, calls it, then records the new
/// head position in the trail.
pub trait TrajectoryBody {
    fn body(&self) -> &BodyState;

    fn body_mut(&mut self) -> &mut BodyState;

    fn advance(&mut self, speed: f32, dt: f32);

    fn update(&mut self, dt: f32) {
        let speed = self.body().current_speed();
        self.advance(speed, dt);
        self.body_mut().record_position();
    }

    fn position(&self) -> Point {
        self.body().position()
    }

    fn level(&self) -> u32 {
        self.body().level()
    }

    fn is_boosting(&self) -> bool {
        self.body().is_boosting()
    }

    fn set_boosting(&mut self, boosting: bool) {
        self.body_mut().set_boosting(boosting);
    }

    fn segment_position(&self, segment_index: usize) -> Point {
        self.body().segment_position(segment_index)
    }
}
