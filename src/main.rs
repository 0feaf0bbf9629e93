use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use pacman_ghosts::constants::{LOOP_TIME, MAX_DIFFICULTY};
use pacman_ghosts::formatter::{self, CustomFormatter};
use pacman_ghosts::game::{Game, GameEvent};
use pacman_ghosts::map::builder::Map;
use pacman_ghosts::map::direction::Direction;

/// Runs the ghost engine headless against a map and logs what happens.
#[derive(Parser, Debug)]
#[command(name = "ghost-sim", version, about)]
struct Args {
    /// Map to load: a JSON map document or an ASCII board.
    #[arg(short, long)]
    map: PathBuf,

    /// Number of 60 Hz ticks to simulate.
    #[arg(short, long, default_value_t = 3600)]
    ticks: u64,

    /// Override the map's difficulty rating (0-200).
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=MAX_DIFFICULTY as i64))]
    difficulty: Option<u8>,

    /// Seed for ghost and player randomness.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Pace the simulation in real time instead of running flat out.
    #[arg(long)]
    realtime: bool,
}

fn setup_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().event_format(CustomFormatter))
        .with(ErrorLayer::default())
        .try_init()
        .context("could not install tracing subscriber")
}

/// Picks a new random direction for the player whenever it stops, never
/// reversing unless that is the only way out.
fn wander(game: &Game, rng: &mut SmallRng, dt: f32) -> Option<Direction> {
    let player = game.player();
    let step = player.step_distance(dt);
    if player.current_direction() != Direction::Idle && player.can_move(game.map(), player.current_direction(), step) {
        return None;
    }
    let reverse = player.current_direction().opposite();
    let options: Vec<Direction> = Direction::DIRECTIONS
        .into_iter()
        .filter(|dir| player.can_move(game.map(), *dir, step))
        .collect();
    let forward: Vec<Direction> = options.iter().copied().filter(|dir| *dir != reverse).collect();
    let pool = if forward.is_empty() { &options } else { &forward };
    if pool.is_empty() {
        return None;
    }
    Some(pool[rng.random_range(0..pool.len())])
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging()?;

    let mut map = Map::load(&args.map).with_context(|| format!("failed to load map {}", args.map.display()))?;
    if let Some(difficulty) = args.difficulty {
        map = map.with_difficulty(difficulty);
    }
    info!(
        name = %map.metadata.name,
        width = map.width(),
        height = map.height(),
        difficulty = map.difficulty(),
        "Map loaded"
    );

    let mut game = Game::new(map).context("map is missing spawn points")?;
    let mut rng = match args.seed {
        Some(seed) => {
            game.seed_ghosts(seed);
            SmallRng::seed_from_u64(seed)
        }
        None => SmallRng::from_os_rng(),
    };

    let dt = LOOP_TIME.as_secs_f32();
    let started = Instant::now();
    info!(ticks = args.ticks, realtime = args.realtime, "Starting simulation");

    for _ in 0..args.ticks {
        let tick_start = Instant::now();
        formatter::increment_tick();

        if let Some(direction) = wander(&game, &mut rng, dt) {
            game.steer_player(direction);
        }
        for event in game.tick(dt) {
            match event {
                GameEvent::PelletEaten { .. } => {}
                other => debug!(?other, "Game event"),
            }
        }
        if game.is_game_over() {
            break;
        }

        if args.realtime {
            let elapsed = tick_start.elapsed();
            if elapsed < LOOP_TIME {
                spin_sleep::sleep(LOOP_TIME - elapsed);
            } else {
                warn!(behind = ?(elapsed - LOOP_TIME), "Simulation behind schedule");
            }
        }
    }

    for ghost in game.ghosts() {
        let status = ghost.get_astar_status();
        info!(
            ghost = ghost.personality.as_ref(),
            state = status.state.as_ref(),
            mode = status.mode.as_ref(),
            replans = status.replans,
            interval_ms = status.recompute_interval_ms,
            "Ghost summary"
        );
    }
    info!(
        ticks = formatter::get_tick_count(),
        score = game.score(),
        lives = game.lives(),
        level = game.level(),
        elapsed = ?started.elapsed(),
        "Simulation finished"
    );
    Ok(())
}
