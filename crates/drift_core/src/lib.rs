//! # Drift Core
//!
//! The procedural animation and entity-lifecycle core of an ambient lantern
//! scene: a body of water on which glowing lanterns are spawned by user
//! interaction and drift skyward.
//!
//! The crate owns every time-driven update rule — water heightfield, lantern
//! and particle and cloud animators, the bounded lantern collection, the
//! camera state machine, and the performance-adaptive capacity monitor. It
//! owns nothing else: geometry, materials, lighting, post-processing, audio
//! playback, and UI chrome are external collaborators that consume the
//! transforms and intents produced here.
//!
//! ## Quick Start
//!
//! ```rust
//! use drift_core::prelude::*;
//!
//! let mut engine = SceneEngine::new(SceneConfig::default());
//!
//! // Host loop: queue interactions, then advance one frame at a time.
//! engine.click(PointerClick::on_surface());
//! engine.update(1.0 / 60.0);
//!
//! for instance in engine.lantern_instances() {
//!     // Hand transform/glow/color to the renderer.
//!     let _ = instance.transform.position;
//! }
//! ```
//!
//! All animators are pure functions of `(elapsed time, immutable per-instance
//! parameters)`; the engine applies them in a fixed writers-then-readers
//! order each frame, so a fixed seed and a fixed delta sequence reproduce the
//! session bit for bit.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;

pub mod audio;
pub mod camera;
pub mod collection;
pub mod config;
pub mod entities;
pub mod events;
pub mod oscillator;
pub mod perf;
pub mod water;

mod engine;

pub use engine::SceneEngine;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        audio::{AudioDirector, AudioIntent},
        camera::{CameraMode, CameraRig},
        collection::{LanternCollection, PointerClick, SpawnOutcome},
        config::{Config, ConfigError, SceneConfig},
        entities::lantern::{Lantern, LanternInstance, MotionParams},
        events::{RejectReason, SceneEvent},
        foundation::{
            math::{Transform, Vec3},
            time::FrameClock,
        },
        perf::CapacityMonitor,
        water::WaterSurface,
        SceneEngine,
    };
}
