use crate::game::{
    BotBody, Food, PlayerBody, Point, TrajectoryBody, World, WorldConfig, WorldEvent,
    WorldSnapshot,
};
use rand::Rng;
use serde::Serialize;
use std::env;
use std::time::Duration;

const DEFAULT_TICK_MS: u64 = 100;
const DEFAULT_FRAMES: u32 = 100;
const SPAWN_EXTENT: f32 = 50.0;
const MAX_RANDOM_BOT_LEVEL: u32 = 30;
const MAX_RANDOM_FOOD_VALUE: u32 = 3;

#[derive(Debug, Clone)]
pub struct DemoSettings {
    pub tick_ms: u64,
    pub frames: u32,
    pub extra_bots: usize,
    pub extra_food: usize,
    pub world: WorldConfig,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            frames: DEFAULT_FRAMES,
            extra_bots: 0,
            extra_food: 0,
            world: WorldConfig::default(),
        }
    }
}

impl DemoSettings {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            tick_ms: env_or("SNAKE_TICK_MS", defaults.tick_ms).max(1),
            frames: env_or("SNAKE_FRAMES", defaults.frames),
            extra_bots: env_or("SNAKE_BOT_COUNT", defaults.extra_bots),
            extra_food: env_or("SNAKE_FOOD_COUNT", defaults.extra_food),
            world: WorldConfig {
                collision_radius: env_or("SNAKE_COLLISION_RADIUS", defaults.world.collision_radius),
                bot_seek_speed: env_or("SNAKE_BOT_SEEK_SPEED", defaults.world.bot_seek_speed),
            },
        }
    }

    pub fn delta_seconds(&self) -> f32 {
        self.tick_ms as f32 / 1000.0
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

#[derive(Debug, Clone, Serialize)]
pub struct DemoSummary {
    pub frames: u32,
    pub kills: usize,
    pub deaths: usize,
    pub snapshot: WorldSnapshot,
}

/// The demo arena: a level 10 player at the origin, one weaker bot
/// ahead of it and a single pellet, plus any random extras requested.
pub fn build_demo_world(settings: &DemoSettings) -> anyhow::Result<World> {
    let mut world = World::with_config(settings.world)?;
    world.set_player(PlayerBody::new(Point::new(0.0, 0.0, 0.0), 10));
    world.add_bot(BotBody::new(Point::new(5.0, 0.0, 10.0), 5));
    world.spawn_food(Food::new(Point::new(2.0, 0.0, 5.0), 2));

    let mut rng = rand::thread_rng();
    for _ in 0..settings.extra_bots {
        let level = rng.gen_range(5..=MAX_RANDOM_BOT_LEVEL);
        world.add_bot(BotBody::new(random_point(&mut rng), level));
    }
    for _ in 0..settings.extra_food {
        let value = rng.gen_range(1..=MAX_RANDOM_FOOD_VALUE);
        world.spawn_food(Food::new(random_point(&mut rng), value));
    }
    Ok(world)
}

fn random_point(rng: &mut impl Rng) -> Point {
    Point {
        x: rng.gen_range(-SPAWN_EXTENT..SPAWN_EXTENT),
        y: 0.0,
        z: rng.gen_range(-SPAWN_EXTENT..SPAWN_EXTENT),
    }
}

/// Steps `world` on a fixed-timestep interval. Boost is switched on for the
/// player halfway through the run.
pub async fn run_world(mut world: World, settings: &DemoSettings) -> anyhow::Result<DemoSummary> {
    let dt = settings.delta_seconds();
    let boost_frame = settings.frames / 2;
    let mut interval = tokio::time::interval(Duration::from_millis(settings.tick_ms.max(1)));
    let mut kills = 0;
    let mut deaths = 0;

    tracing::info!(frames = settings.frames, dt, bots = world.bots().len(), "arena started");
    for frame in 0..settings.frames {
        interval.tick().await;
        if frame == boost_frame {
            if let Some(player) = world.player_mut() {
                player.set_boosting(true);
                tracing::info!(frame, level = player.level(), "boost enabled");
            }
        }

        for event in world.update(dt)? {
            match event {
                WorldEvent::BotConsumed { .. } => kills += 1,
                WorldEvent::PlayerDestroyed { .. } => deaths += 1,
                WorldEvent::FoodConsumed { .. } => {}
            }
        }
    }

    let snapshot = world.snapshot();
    tracing::info!(kills, deaths, "arena finished");
    Ok(DemoSummary {
        frames: settings.frames,
        kills,
        deaths,
        snapshot,
    })
}

pub async fn run_demo(settings: DemoSettings) -> anyhow::Result<DemoSummary> {
    let world = build_demo_world(&settings)?;
    run_world(world, &settings).await
}
