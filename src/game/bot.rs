use super::body::{BodyState, BodyTuning, TrajectoryBody};
use super::error::WorldError;
use super::food::Food;
use super::math::{distance, lerp};
use super::types::{BotSnapshot, Point};
use uuid::Uuid;

/// Computer-controlled snake that drifts toward the nearest food.
///
/// All displacement happens in [`BotBody::think`]; the per-frame
/// [`TrajectoryBody::advance`] hook is a no-op, so a bot that never thinks
/// stays where it is.
#[derive(Clone, Debug)]
pub struct BotBody {
    id: Uuid,
    body: BodyState,
}

impl BotBody {
    pub fn new(start: Point, level: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            body: BodyState::new(start, level),
        }
    }

    pub fn with_tuning(start: Point, level: u32, tuning: BodyTuning) -> Result<Self, WorldError> {
        Ok(Self {
            id: Uuid::new_v4(),
            body: BodyState::with_tuning(start, level, tuning)?,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Nearest food by Euclidean distance; ties go to the earliest entry.
    pub fn nearest_food<'a>(&self, food: &'a [Food]) -> Option<(&'a Food, f32)> {
        let head = self.body.position();
        let mut nearest: Option<(&'a Food, f32)> = None;
        for item in food {
            let dist = distance(head, item.position());
            match nearest {
                Some((_, best)) if dist >= best => {}
                _ => nearest = Some((item, dist)),
            }
        }
        nearest
    }

    /// Pulls the bot toward the nearest food by `seek_speed * dt / distance`
    /// of the remaining offset. The fraction is unclamped and can exceed 1.0
    /// close to the target. A bot on top of its food, or close enough that the
    /// fraction is not finite, counts as arrived and stays put.
    pub fn think(&mut self, food: &[Food], seek_speed: f32, dt: f32) {
        let Some((target, dist)) = self.nearest_food(food) else { return };
        if dist <= 0.0 {
            return;
        }
        let alpha = (seek_speed * dt) / dist;
        if !alpha.is_finite() {
            return;
        }
        lerp(self.body.position_mut(), target.position(), alpha);
    }

    pub fn snapshot(&self) -> BotSnapshot {
        BotSnapshot {
            id: self.id,
            body: self.body.snapshot(),
        }
    }
}

impl TrajectoryBody for BotBody {
    fn body(&self) -> &BodyState {
        &self.body
    }

    fn body_mut(&mut self) -> &mut BodyState {
        &mut self.body
    }

    fn advance(&mut self, _speed: f32, _dt: f32) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food_at(x: f32, y: f32, z: f32) -> Food {
        Food::new(Point::new(x, y, z), 1)
    }

    #[test]
    fn nearest_food_prefers_first_on_ties() {
        let bot = BotBody::new(Point::new(0.0, 0.0, 0.0), 1);
        let food = vec![
            food_at(5.0, 0.0, 0.0),
            food_at(0.0, 2.0, 0.0),
            food_at(-2.0, 0.0, 0.0),
        ];
        let (nearest, dist) = bot.nearest_food(&food).expect("food present");
        assert_eq!(nearest.position(), Point::new(0.0, 2.0, 0.0));
        assert_eq!(dist, 2.0);
    }

    #[test]
    fn think_moves_fraction_inverse_to_distance() {
        let mut bot = BotBody::new(Point::new(10.0, 0.0, 0.0), 1);
        let food = vec![food_at(20.0, 0.0, 0.0)];
        bot.think(&food, 4.0, 0.1);
        // 0.4 / 10 of a 10 unit gap
        assert!((bot.position().x - 10.4).abs() < 1e-5);
    }

    #[test]
    fn seek_strictly_approaches_food() {
        let mut bot = BotBody::new(Point::new(3.0, -4.0, 7.0), 1);
        let food = vec![food_at(0.0, 0.0, 0.0)];
        let before = distance(bot.position(), food[0].position());
        bot.think(&food, 4.0, 0.05);
        bot.update(0.05);
        let after = distance(bot.position(), food[0].position());
        assert!(after < before);
    }

    #[test]
    fn seek_overshoots_near_target_but_stays_finite() {
        let mut bot = BotBody::new(Point::new(0.0, 0.0, 0.0), 1);
        let food = vec![food_at(0.01, 0.0, 0.0)];
        bot.think(&food, 4.0, 0.1);
        let position = bot.position();
        assert!(position.is_finite());
        assert!(position.x > 0.01);
    }

    #[test]
    fn subnormal_distance_counts_as_arrived() {
        let mut bot = BotBody::new(Point::new(0.0, 0.0, 0.0), 1);
        let food = vec![food_at(1e-40, 0.0, 0.0)];
        for _ in 0..3 {
            bot.think(&food, 4.0, 0.1);
            assert!(bot.position().is_finite());
        }
        assert_eq!(bot.position(), Point::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn think_on_top_of_food_does_not_move() {
        let mut bot = BotBody::new(Point::new(1.0, 1.0, 1.0), 1);
        let food = vec![food_at(1.0, 1.0, 1.0)];
        bot.think(&food, 4.0, 0.1);
        assert_eq!(bot.position(), Point::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn think_without_food_does_not_move() {
        let mut bot = BotBody::new(Point::new(1.0, 0.0, 0.0), 1);
        bot.think(&[], 4.0, 0.1);
        assert_eq!(bot.position(), Point::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn update_alone_leaves_bot_stationary() {
        let mut bot = BotBody::new(Point::new(2.0, 0.0, 0.0), 4);
        bot.set_boosting(true);
        for _ in 0..5 {
            bot.update(0.1);
        }
        assert_eq!(bot.position(), Point::new(2.0, 0.0, 0.0));
        assert_eq!(bot.level(), 4);
        assert_eq!(bot.body().history().len(), bot.body().history_capacity());
    }

    #[test]
    fn bots_get_distinct_ids() {
        let a = BotBody::new(Point::default(), 1);
        let b = BotBody::new(Point::default(), 1);
        assert_ne!(a.id(), b.id());
    }
}
