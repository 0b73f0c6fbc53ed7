use snake_arena::runtime::{run_demo, DemoSettings};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let settings = DemoSettings::from_env();
  tracing::info!(
    tick_ms = settings.tick_ms,
    frames = settings.frames,
    extra_bots = settings.extra_bots,
    extra_food = settings.extra_food,
    "starting arena"
  );

  let summary = run_demo(settings).await?;
  println!("{}", serde_json::to_string_pretty(&summary)?);

  Ok(())
}
