// Headless driver: loads the world from ./assets and walks the player through
// a short scripted route, logging what a renderer would receive.
use std::process::ExitCode;

use tilewalk::assets::FsImageLoader;
use tilewalk::config::{GameConfig, SpawnRoster};
use tilewalk::input::{IntentSource, MoveIntent, ScriptedIntents};
use tilewalk::world::World;
use tracing_subscriber::EnvFilter;

/// Directives from `RUST_LOG` when present and well-formed, `info` otherwise.
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .with_writer(std::io::stderr)
        .init();

    let config = GameConfig::default();
    let mut loader = FsImageLoader;

    let mut world = match World::load(&config, SpawnRoster::default(), &mut loader) {
        Ok(world) => world,
        Err(err) => {
            match err.path() {
                Some(path) => tracing::error!(path = %path.display(), "{err}"),
                None => tracing::error!("{err}"),
            }
            return ExitCode::FAILURE;
        }
    };

    let mut input = ScriptedIntents::new()
        .hold(MoveIntent::RIGHT, 90)
        .hold(MoveIntent::DOWN, 40)
        .hold(MoveIntent::LEFT, 60)
        .hold(MoveIntent::UP, 40);

    while input.remaining() > 0 {
        world.tick(input.next_intent());

        if world.ticks() % 30 == 0 {
            let draws = world.draw_list();
            tracing::info!(
                tick = world.ticks(),
                player = ?world.player.body.position,
                health = world.player.health,
                camera = ?world.camera_offset(),
                draws = draws.len(),
                "frame"
            );
        }
    }

    ExitCode::SUCCESS
}
