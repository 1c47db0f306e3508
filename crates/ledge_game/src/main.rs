//! Ledge -- headless driver for the platformer simulation.
//!
//! Loads the level from a JSON Lines world file, then plays an input replay
//! through `GameSession` one fixed step at a time and logs where the player
//! ends up. Without a replay the player idles, which is enough to watch it
//! fall onto the level. Replays may also drive the in-game editor. Lines it
//! completes are appended to the world file only when that file was named on
//! the command line; the bundled level is never written.
//!
//! Usage: `ledge_game [world.jsonl] [replay.json]`. Log verbosity follows
//! `RUST_LOG` (`debug` shows landings, `trace` every frame).

mod editor;
mod kinematics;
mod platform;
mod replay;
mod resolver;
mod session;
mod world;

use std::path::{Path, PathBuf};

use kinematics::{load_tuning_from_path, KinematicsConfig};
use ledge_core::input::InputState;
use replay::{load_replay_from_path, ReplaySequence};
use resolver::Contact;
use session::GameSession;
use world::load_world_or_empty;

const WORLD_PATH: &str = "assets/world/level1_platforms.jsonl";
const TUNING_PATH: &str = "assets/tuning/player.json";
const IDLE_FRAMES: u32 = 300;
const REPORT_INTERVAL: usize = 60;

fn usage() -> String {
    "Usage: cargo run -p ledge_game -- [world.jsonl] [replay.json]\nExample: cargo run -p ledge_game -- assets/world/level1_platforms.jsonl assets/replays/walk_and_jump.json".to_string()
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 3 {
        return Err(usage());
    }

    log::info!("Ledge starting...");

    let (world_path, persist_path) = world_paths(args.get(1).map(String::as_str));
    let replay = match args.get(2) {
        Some(path) => load_replay_from_path(Path::new(path))?,
        None => ReplaySequence::idle(IDLE_FRAMES),
    };

    let tuning_path = Path::new(TUNING_PATH);
    let config = if tuning_path.exists() {
        load_tuning_from_path(tuning_path)?
    } else {
        log::info!("No tuning file at '{}'; using defaults.", tuning_path.display());
        KinematicsConfig::default()
    };
    if replay.fixed_dt * config.blend_rate >= 1.0 {
        log::warn!(
            "fixed_dt {} * blend_rate {} >= 1; horizontal velocity will oscillate",
            replay.fixed_dt,
            config.blend_rate
        );
    }

    let platforms = load_world_or_empty(&world_path)?;
    if persist_path.is_none() {
        log::info!("Authored platforms stay in memory; pass a world path to save them.");
    }
    let mut session = GameSession::new(config, platforms, persist_path);
    if let Some([width, height]) = replay.viewport {
        session.resize(width, height);
    }
    let mut input = InputState::new();

    let frames = replay.expanded_frames();
    let mut authored = 0usize;
    for (index, frame) in frames.iter().enumerate() {
        replay::feed(&mut input, frame);
        let report = session.frame(&input, replay.fixed_dt);
        input.end_frame();

        if report.created_platform.is_some() {
            authored += 1;
        }
        if index % REPORT_INTERVAL == 0 {
            let contact = match report.contact {
                Contact::Airborne => "airborne",
                Contact::PassingThrough { .. } => "passing through",
                Contact::Landed { .. } => "landed",
            };
            log::info!(
                "Frame {:>5}: position ({:.2}, {:.2}) velocity ({:.2}, {:.2}) {}",
                index,
                report.position.x,
                report.position.y,
                report.velocity.x,
                report.velocity.y,
                contact
            );
        }
    }

    let player = session.player();
    let on_screen = session.camera().world_to_screen(player.position());
    log::info!(
        "Finished {} frame(s): position ({:.2}, {:.2}) grounded={} platforms={} (+{} authored) screen=({:.1}, {:.1}) zoom={:.2} debug={}",
        frames.len(),
        player.position().x,
        player.position().y,
        player.grounded,
        session.platforms().len(),
        authored,
        on_screen.x,
        on_screen.y,
        session.camera().zoom,
        session.editor().is_debug()
    );
    if let Some(start) = session.editor().pending_start() {
        log::warn!("Replay ended with an unfinished line starting at {:?}", start);
    }
    Ok(())
}

/// World file to load, and where authored platforms are appended. Only an
/// explicitly named world is written back.
fn world_paths(arg: Option<&str>) -> (PathBuf, Option<PathBuf>) {
    match arg {
        Some(path) => (PathBuf::from(path), Some(PathBuf::from(path))),
        None => (PathBuf::from(WORLD_PATH), None),
    }
}
