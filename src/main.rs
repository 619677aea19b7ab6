//! Meteor Storm entry point
//!
//! Drives the full update/render cycle at 60 Hz with a scripted pilot and
//! headless backends: events go to the log-backed audio sink, draw calls to
//! a recording canvas. A windowed backend plugs into the same traits.

use std::path::Path;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_pcg::Pcg32;

use meteor_storm::Settings;
use meteor_storm::assets::AssetCatalog;
use meteor_storm::audio::{AudioSink, LogAudio, sound_for};
use meteor_storm::consts::*;
use meteor_storm::platform::{InputSource, ScriptedInput};
use meteor_storm::renderer::{RecordingCanvas, draw_frame};
use meteor_storm::sim::{FrameInput, GameEvent, World, update};

/// Demo session length: ten seconds of play
const DEMO_FRAMES: u32 = 10 * TARGET_FPS;

fn main() {
    env_logger::init();
    log::info!("Meteor Storm starting");

    let settings_path = Path::new(Settings::FILE_NAME);
    let settings = Settings::load_from(settings_path);
    if !settings_path.exists() {
        settings.save_to(settings_path);
    }
    let mut audio = LogAudio::from_settings(&settings);

    // Asset metadata is a startup precondition: without usable extents the
    // collision radii are undefined, so bail before the first frame
    let catalog = AssetCatalog::reference();
    if let Err(reason) = catalog.validate() {
        log::error!("asset catalog rejected: {reason}");
        std::process::exit(1);
    }

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xC0FFEE);
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut world = World::new(SCREEN_WIDTH, SCREEN_HEIGHT, &mut rng);
    log::info!(
        "world ready: {}x{}, {} meteors, seed {seed}",
        world.screen_width,
        world.screen_height,
        world.meteors.len()
    );

    let mut input = ScriptedInput::new(demo_script());
    let mut canvas = RecordingCanvas::default();

    let frame_budget = Duration::from_secs(1) / TARGET_FPS;
    let mut shattered = 0u32;
    let mut resets = 0u32;

    for frame in 0..DEMO_FRAMES {
        let frame_start = Instant::now();

        let snapshot = input.sample();
        update(&mut world, &snapshot, &mut rng, &catalog);

        for &event in &world.events {
            match event {
                GameEvent::MeteorShattered => shattered += 1,
                GameEvent::PlayerHit => {
                    resets += 1;
                    log::info!("player down on frame {frame}, field reset");
                }
                GameEvent::ShotFired => {}
            }
            audio.play(sound_for(event));
        }

        canvas.clear();
        draw_frame(&world, &catalog, &mut canvas);

        if let Some(rest) = frame_budget.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(rest);
        }
    }

    log::info!(
        "demo over: {DEMO_FRAMES} frames, {shattered} meteors shattered, {resets} resets, {} meteors left",
        world.meteors.len()
    );
}

/// A short flight plan: throttle up, then sweep while firing
fn demo_script() -> Vec<FrameInput> {
    let mut frames = Vec::new();
    for _ in 0..30 {
        frames.push(FrameInput { up: true, ..Default::default() });
    }
    for i in 0..240 {
        let mut frame = FrameInput::default();
        if i % 3 == 0 {
            frame.right = true;
        }
        if i % 20 == 0 {
            frame.fire = true;
        }
        frames.push(frame);
    }
    frames
}
