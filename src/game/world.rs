use super::body::TrajectoryBody;
use super::bot::BotBody;
use super::constants::{BOT_SEEK_SPEED, COLLISION_RADIUS};
use super::error::WorldError;
use super::food::Food;
use super::math::within;
use super::player::PlayerBody;
use super::types::WorldSnapshot;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldConfig {
  pub collision_radius: f32,
  /// Seek speed handed to every bot's AI, independent of the bot's own move speed.
  pub bot_seek_speed: f32,
}

impl Default for WorldConfig {
  fn default() -> Self {
    Self {
      collision_radius: COLLISION_RADIUS,
      bot_seek_speed: BOT_SEEK_SPEED,
    }
  }
}

impl WorldConfig {
  pub fn validate(&self) -> Result<(), WorldError> {
    if !self.collision_radius.is_finite() || self.collision_radius <= 0.0 {
      return Err(WorldError::InvalidConfig("collision_radius must be finite and positive"));
    }
    if !self.bot_seek_speed.is_finite() || self.bot_seek_speed <= 0.0 {
      return Err(WorldError::InvalidConfig("bot_seek_speed must be finite and positive"));
    }
    Ok(())
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum WorldEvent {
  #[serde(rename_all = "camelCase")]
  FoodConsumed { value: u32, player_level: u32 },
  #[serde(rename_all = "camelCase")]
  BotConsumed {
    bot_id: Uuid,
    bot_level: u32,
    player_level: u32,
  },
  #[serde(rename_all = "camelCase")]
  PlayerDestroyed { bot_id: Uuid, bot_level: u32 },
}

/// Owns the player, the bots and the food, and steps them frame by frame.
#[derive(Debug, Default)]
pub struct World {
  config: WorldConfig,
  player: Option<PlayerBody>,
  bots: Vec<BotBody>,
  food: Vec<Food>,
}

impl World {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_config(config: WorldConfig) -> Result<Self, WorldError> {
    config.validate()?;
    Ok(Self {
      config,
      ..Self::default()
    })
  }

  pub fn config(&self) -> &WorldConfig {
    &self.config
  }

  pub fn set_player(&mut self, player: PlayerBody) {
    self.player = Some(player);
  }

  pub fn add_bot(&mut self, bot: BotBody) {
    self.bots.push(bot);
  }

  pub fn spawn_food(&mut self, food: Food) {
    self.food.push(food);
  }

  pub fn player(&self) -> Option<&PlayerBody> {
    self.player.as_ref()
  }

  pub fn player_mut(&mut self) -> Option<&mut PlayerBody> {
    self.player.as_mut()
  }

  pub fn bots(&self) -> &[BotBody] {
    &self.bots
  }

  pub fn bots_mut(&mut self) -> &mut [BotBody] {
    &mut self.bots
  }

  pub fn food(&self) -> &[Food] {
    &self.food
  }

  /// Advances one frame: player, then each bot (think, then move), then the
  /// collision pass. Fails without touching any state when no player is set.
  pub fn update(&mut self, dt: f32) -> Result<Vec<WorldEvent>, WorldError> {
    if !dt.is_finite() || dt <= 0.0 {
      return Err(WorldError::InvalidDelta(dt));
    }
    let player = self.player.as_mut().ok_or(WorldError::MissingPlayer)?;
    player.update(dt);

    for bot in &mut self.bots {
      bot.think(&self.food, self.config.bot_seek_speed, dt);
      bot.update(dt);
    }

    Ok(self.resolve_collisions())
  }

  fn resolve_collisions(&mut self) -> Vec<WorldEvent> {
    let radius = self.config.collision_radius;
    let Some(player) = self.player.as_mut() else { return Vec::new() };
    let mut events = Vec::new();

    self.food.retain(|item| {
      if !within(player.position(), item.position(), radius) {
        return true;
      }
      player.body_mut().add_level(item.value());
      tracing::debug!(value = item.value(), player_level = player.level(), "food consumed");
      events.push(WorldEvent::FoodConsumed {
        value: item.value(),
        player_level: player.level(),
      });
      false
    });

    // Bots resolve in insertion order against the running player level, so an
    // earlier kill this frame can enable the next one.
    self.bots.retain(|bot| {
      if !within(player.position(), bot.position(), radius) {
        return true;
      }
      let bot_id = bot.id();
      let bot_level = bot.level();
      if player.level() >= bot_level {
        player.body_mut().add_level(bot_level);
        tracing::info!(%bot_id, bot_level, player_level = player.level(), "bot consumed");
        events.push(WorldEvent::BotConsumed {
          bot_id,
          bot_level,
          player_level: player.level(),
        });
        false
      } else {
        tracing::info!(%bot_id, bot_level, player_level = player.level(), "player destroyed");
        events.push(WorldEvent::PlayerDestroyed { bot_id, bot_level });
        true
      }
    });

    events
  }

  pub fn snapshot(&self) -> WorldSnapshot {
    WorldSnapshot {
      player: self.player.as_ref().map(|player| player.body().snapshot()),
      bots: self.bots.iter().map(BotBody::snapshot).collect(),
      food: self.food.clone(),
    }
  }
}
