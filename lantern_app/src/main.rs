//! Headless reference host for the drift core
//!
//! Drives the scene through a fixed-step frame loop with a scripted set of
//! user interactions, standing in for the real render/input/audio
//! collaborators. Shows the intended call order: queue actions, update,
//! then drain events and audio intents.

use drift_core::prelude::*;

/// Frames per second of the simulated display driver
const FRAME_RATE: f32 = 60.0;

/// Total simulated session length in frames
const SESSION_FRAMES: u32 = 900;

fn load_config() -> SceneConfig {
    let Some(path) = std::env::args().nth(1) else {
        return SceneConfig::default();
    };

    match SceneConfig::load_from_file(&path) {
        Ok(config) => {
            log::info!("loaded scene config from {path}");
            config
        }
        Err(err) => {
            log::warn!("failed to load {path} ({err}); using defaults");
            SceneConfig::default()
        }
    }
}

/// Queue this frame's scripted interaction, if any
fn scripted_action(engine: &mut SceneEngine, frame: u32) {
    match frame {
        30 => engine.set_sound_enabled(true),
        60 | 120 | 180 | 240 => engine.click(PointerClick::on_surface()),
        300 => engine.cycle_camera_mode(),
        360 => engine.set_orbit_pose(Vec3::new(9.0, 6.0, 9.0), Vec3::new(0.0, 1.2, 0.0)),
        420 => engine.cycle_camera_mode(),
        480 => engine.set_auto_follow(false),
        600 => engine.clear_lanterns(),
        660 => engine.click(PointerClick::on_surface()),
        _ => {}
    }
}

fn main() {
    drift_core::foundation::logging::init();

    let config = load_config();
    let mut engine = SceneEngine::with_seed(config, 0xD21F7);
    let delta = 1.0 / FRAME_RATE;

    log::info!("starting {SESSION_FRAMES}-frame headless session");

    for frame in 0..SESSION_FRAMES {
        scripted_action(&mut engine, frame);
        engine.update(delta);

        for event in engine.drain_events() {
            log::debug!("event: {event:?}");
        }
        for intent in engine.drain_audio_intents() {
            log::debug!("audio intent: {intent:?}");
            // A real host would hand these to its audio backend; pretend the
            // ambient loop always starts.
            if intent == AudioIntent::PlayAmbient {
                engine.ambient_started();
            }
        }

        if frame % FRAME_RATE as u32 == 0 {
            let camera = engine.camera().position();
            log::info!(
                "t={:6.2}s lanterns={:2}/{} fps={:5.1} mode={:?} camera=({:.2}, {:.2}, {:.2})",
                engine.time(),
                engine.lantern_count(),
                engine.capacity(),
                engine.fps(),
                engine.camera_mode(),
                camera.x,
                camera.y,
                camera.z,
            );
        }
    }

    log::info!(
        "session complete: {} lanterns live, cap {}",
        engine.lantern_count(),
        engine.capacity()
    );
}
