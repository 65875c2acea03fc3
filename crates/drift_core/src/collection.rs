//! Lantern lifecycle and collection management
//!
//! A bounded, creation-ordered collection. Order is semantically meaningful:
//! the newest lantern is always the last element and is what the camera's
//! follow mode tracks. Anchors never move after spawn; lanterns leave only
//! through an explicit full clear.

use rand::Rng;

use crate::config::SpawnConfig;
use crate::entities::lantern::Lantern;
use crate::events::RejectReason;
use crate::foundation::math::Vec3;

/// A pointer interaction forwarded by the input collaborator
///
/// The host asserts where the event originated; the core never inspects
/// widget identity. The click carries no coordinates because spawn anchors
/// are drawn around the scene center, not under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerClick {
    /// Whether the click landed on the interactive render surface
    pub on_surface: bool,
}

impl PointerClick {
    /// A click on the interactive surface
    pub fn on_surface() -> Self {
        Self { on_surface: true }
    }

    /// A click absorbed by overlay controls
    pub fn on_overlay() -> Self {
        Self { on_surface: false }
    }
}

/// Outcome of a spawn request
///
/// Rejection is a soft outcome, not an error: capacity and pausing are
/// expected states of a healthy session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOutcome {
    /// A lantern was appended at this index
    Spawned {
        /// Index in creation order
        index: usize,
    },
    /// The request was rejected
    Rejected(RejectReason),
}

impl SpawnOutcome {
    /// Whether the request produced a lantern
    pub fn is_spawned(&self) -> bool {
        matches!(self, Self::Spawned { .. })
    }
}

/// Bounded, creation-ordered collection of live lanterns
#[derive(Debug, Default)]
pub struct LanternCollection {
    lanterns: Vec<Lantern>,
    spawn_enabled: bool,
}

impl LanternCollection {
    /// Create an empty collection with spawning enabled
    pub fn new() -> Self {
        Self {
            lanterns: Vec::new(),
            spawn_enabled: true,
        }
    }

    /// Attempt to spawn a lantern for a pointer click
    ///
    /// Rejected when the click missed the interactive surface, spawning is
    /// paused, or the collection is at `cap`. On success the anchor is a
    /// uniform draw around the scene center clamped into the safe rectangle,
    /// so lanterns never spawn off-screen.
    pub fn spawn<R: Rng + ?Sized>(
        &mut self,
        click: PointerClick,
        config: &SpawnConfig,
        cap: usize,
        now: f32,
        rng: &mut R,
    ) -> SpawnOutcome {
        if !click.on_surface {
            return SpawnOutcome::Rejected(RejectReason::OffSurface);
        }
        if !self.spawn_enabled {
            return SpawnOutcome::Rejected(RejectReason::Paused);
        }
        if self.lanterns.len() >= cap {
            log::debug!("spawn rejected: collection full at {}/{cap}", self.lanterns.len());
            return SpawnOutcome::Rejected(RejectReason::AtCapacity);
        }

        let extent = config.clamp_extent;
        let x = ((rng.gen::<f32>() - 0.5) * 2.0 * config.scatter_extent).clamp(-extent, extent);
        let z = ((rng.gen::<f32>() - 0.5) * 2.0 * config.scatter_extent).clamp(-extent, extent);
        let anchor = Vec3::new(x, config.spawn_height, z);

        self.lanterns.push(Lantern::new(anchor, now, rng));
        let index = self.lanterns.len() - 1;
        log::debug!("lantern {index} spawned at ({x:.2}, {z:.2})");
        SpawnOutcome::Spawned { index }
    }

    /// Remove every lantern unconditionally; no undo
    pub fn clear(&mut self) {
        log::info!("clearing {} lanterns", self.lanterns.len());
        self.lanterns.clear();
    }

    /// Pause or resume spawning
    pub fn set_spawn_enabled(&mut self, enabled: bool) {
        self.spawn_enabled = enabled;
    }

    /// Whether spawning is currently enabled
    pub fn spawn_enabled(&self) -> bool {
        self.spawn_enabled
    }

    /// Number of live lanterns
    pub fn len(&self) -> usize {
        self.lanterns.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.lanterns.is_empty()
    }

    /// The most recently spawned lantern
    pub fn newest(&self) -> Option<&Lantern> {
        self.lanterns.last()
    }

    /// Iterate lanterns in creation order
    pub fn iter(&self) -> impl Iterator<Item = &Lantern> {
        self.lanterns.iter()
    }

    /// Collect indices of lanterns entering steady state this frame
    ///
    /// Each index is reported exactly once over a lantern's lifetime.
    pub fn poll_settled(&mut self, now: f32) -> Vec<usize> {
        self.lanterns
            .iter_mut()
            .enumerate()
            .filter_map(|(i, lantern)| lantern.take_settled_signal(now).then_some(i))
            .collect()
    }
}
