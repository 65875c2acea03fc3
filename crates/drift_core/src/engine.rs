//! Scene engine: per-frame coordination of every subsystem
//!
//! The host calls `update(delta)` once per display frame. User actions are
//! queued and applied atomically at the start of the next frame, then the
//! frame runs in a fixed order: writers first (collection bookkeeping, water,
//! lantern, particle and cloud animators), readers after (camera, capacity
//! monitor). No subsystem ever reads another's in-progress update.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::audio::{AudioDirector, AudioIntent};
use crate::camera::{CameraMode, CameraRig};
use crate::collection::{LanternCollection, PointerClick, SpawnOutcome};
use crate::config::SceneConfig;
use crate::entities::cloud::{CloudBillboard, CloudLayer};
use crate::entities::lantern::{Lantern, LanternInstance};
use crate::entities::particle::ParticleField;
use crate::events::{EventQueue, SceneEvent};
use crate::foundation::math::Vec3;
use crate::foundation::time::FrameClock;
use crate::perf::CapacityMonitor;
use crate::water::WaterSurface;

/// A queued user action, applied at the start of the next frame
#[derive(Debug, Clone, Copy)]
enum Command {
    Click(PointerClick),
    Clear,
    SetSpawnEnabled(bool),
    SetSoundEnabled(bool),
    SetAutoFollow(bool),
    CycleCameraMode,
    SetOrbitPose { position: Vec3, target: Vec3 },
}

/// The animation and entity-lifecycle core of the scene
pub struct SceneEngine {
    config: SceneConfig,
    clock: FrameClock,
    rng: StdRng,

    water: WaterSurface,
    collection: LanternCollection,
    particles: ParticleField,
    clouds: CloudLayer,

    camera: CameraRig,
    monitor: CapacityMonitor,
    audio: AudioDirector,

    events: EventQueue,
    pending: Vec<Command>,
    lantern_instances: Vec<LanternInstance>,
    cloud_billboards: Vec<CloudBillboard>,
}

impl SceneEngine {
    /// Create an engine seeded from entropy
    pub fn new(config: SceneConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an engine with a fixed seed; a seeded engine fed identical
    /// deltas and commands reproduces a session exactly
    pub fn with_seed(config: SceneConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SceneConfig, mut rng: StdRng) -> Self {
        log::info!(
            "initializing scene: {}x{} water grid, cap {}",
            config.water.subdivisions,
            config.water.subdivisions,
            config.capacity.initial
        );

        let water = WaterSurface::new(config.water.size, config.water.subdivisions);
        let particles = ParticleField::new(config.particles.clone(), &mut rng);
        let clouds = CloudLayer::new(&mut rng);
        let camera = CameraRig::new(config.camera.clone());
        let monitor = CapacityMonitor::new(config.capacity.clone());
        let audio = AudioDirector::new(&config.audio);

        Self {
            config,
            clock: FrameClock::new(),
            rng,
            water,
            collection: LanternCollection::new(),
            particles,
            clouds,
            camera,
            monitor,
            audio,
            events: EventQueue::new(),
            pending: Vec::new(),
            lantern_instances: Vec::new(),
            cloud_billboards: Vec::new(),
        }
    }

    // --- toggle surface (queued; takes effect on the next update) ---

    /// Forward a pointer click from the input collaborator
    pub fn click(&mut self, click: PointerClick) {
        self.pending.push(Command::Click(click));
    }

    /// Clear the whole lantern collection
    pub fn clear_lanterns(&mut self) {
        self.pending.push(Command::Clear);
    }

    /// Pause or resume lantern spawning
    pub fn set_spawning_enabled(&mut self, on: bool) {
        self.pending.push(Command::SetSpawnEnabled(on));
    }

    /// Enable or disable ambient sound
    pub fn set_sound_enabled(&mut self, on: bool) {
        self.pending.push(Command::SetSoundEnabled(on));
    }

    /// Enable or disable auto-follow (no effect while in orbit mode)
    pub fn set_auto_follow(&mut self, on: bool) {
        self.pending.push(Command::SetAutoFollow(on));
    }

    /// Switch between the procedural camera modes and orbit
    pub fn cycle_camera_mode(&mut self) {
        self.pending.push(Command::CycleCameraMode);
    }

    /// Forward the orbit interaction's pose (ignored outside orbit mode)
    pub fn set_orbit_pose(&mut self, position: Vec3, target: Vec3) {
        self.pending.push(Command::SetOrbitPose { position, target });
    }

    // --- audio collaborator callbacks (asynchronous results, not actions) ---

    /// The host's audio backend confirmed the ambient loop started
    pub fn ambient_started(&mut self) {
        self.audio.ambient_started();
    }

    /// The host's audio backend rejected the ambient start (autoplay policy)
    pub fn ambient_rejected(&mut self) {
        self.audio.ambient_rejected();
    }

    // --- frame driver ---

    /// Advance the whole scene by one frame
    pub fn update(&mut self, delta: f32) {
        self.clock.advance(delta);
        let now = self.clock.total_time();

        self.apply_pending(now);

        // Writers.
        self.water.update(now);
        self.lantern_instances = self.collection.iter().map(|l| l.animate(now)).collect();
        for index in self.collection.poll_settled(now) {
            self.events.send(SceneEvent::LanternSettled { index });
        }
        self.particles.step(self.clock.delta_time());
        self.cloud_billboards = self.clouds.billboards(now);

        // Readers.
        let newest = self.collection.newest().map(Lantern::anchor);
        self.camera.update(now, newest);
        self.monitor.sample(now);
    }

    fn apply_pending(&mut self, now: f32) {
        for command in std::mem::take(&mut self.pending) {
            match command {
                Command::Click(click) => {
                    // Any surface click is a qualifying interaction for a
                    // blocked ambient start.
                    if click.on_surface {
                        self.audio.user_interacted();
                    }
                    let outcome = self.collection.spawn(
                        click,
                        &self.config.spawn,
                        self.monitor.max_lanterns(),
                        now,
                        &mut self.rng,
                    );
                    match outcome {
                        SpawnOutcome::Spawned { index } => {
                            self.events.send(SceneEvent::LanternSpawned { index });
                            self.audio.request_chime();
                        }
                        SpawnOutcome::Rejected(reason) => {
                            self.events.send(SceneEvent::SpawnRejected { reason });
                        }
                    }
                }
                Command::Clear => {
                    self.collection.clear();
                    self.events.send(SceneEvent::CollectionCleared);
                }
                Command::SetSpawnEnabled(on) => self.collection.set_spawn_enabled(on),
                Command::SetSoundEnabled(on) => {
                    self.audio.set_enabled(on);
                    if on {
                        self.audio.user_interacted();
                    }
                }
                Command::SetAutoFollow(on) => self.camera.set_auto_follow(on),
                Command::CycleCameraMode => self.camera.cycle_mode(),
                Command::SetOrbitPose { position, target } => {
                    self.camera.set_orbit_pose(position, target);
                }
            }
        }
    }

    // --- per-frame outputs for the render collaborator ---

    /// Total elapsed scene time in seconds
    pub fn time(&self) -> f32 {
        self.clock.total_time()
    }

    /// The animated water surface (heights and normals)
    pub fn water(&self) -> &WaterSurface {
        &self.water
    }

    /// Authoritative transforms for every live lantern, creation order
    pub fn lantern_instances(&self) -> &[LanternInstance] {
        &self.lantern_instances
    }

    /// Number of live lanterns
    pub fn lantern_count(&self) -> usize {
        self.collection.len()
    }

    /// Current lantern budget from the capacity monitor
    pub fn capacity(&self) -> usize {
        self.monitor.max_lanterns()
    }

    /// Latest FPS estimate
    pub fn fps(&self) -> f32 {
        self.monitor.fps()
    }

    /// The ambient particle field
    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    /// Cloud billboards for this frame
    pub fn cloud_billboards(&self) -> &[CloudBillboard] {
        &self.cloud_billboards
    }

    /// The camera rig (position, look target, mode)
    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    /// Current camera mode
    pub fn camera_mode(&self) -> CameraMode {
        self.camera.mode()
    }

    /// Whether spawning is currently enabled
    pub fn spawning_enabled(&self) -> bool {
        self.collection.spawn_enabled()
    }

    /// Whether ambient sound is currently wanted
    pub fn sound_enabled(&self) -> bool {
        self.audio.enabled()
    }

    /// Drain the scene events produced by past frames
    pub fn drain_events(&mut self) -> Vec<SceneEvent> {
        self.events.drain().collect()
    }

    /// Drain the pending audio intents for the host's audio backend
    pub fn drain_audio_intents(&mut self) -> Vec<AudioIntent> {
        self.audio.drain().collect()
    }
}
