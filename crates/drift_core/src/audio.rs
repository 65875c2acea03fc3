//! Audio collaborator interface
//!
//! The core never touches playback, buffering, or devices. It tracks the
//! user's desired ambient-sound state, emits fire-and-forget intents for the
//! host's audio backend to act on, and absorbs autoplay rejections: a
//! blocked ambient start is "not yet playing", retried on the next
//! qualifying user interaction rather than surfaced as an error.

use crate::config::AudioConfig;

/// Fire-and-forget request to the host's audio backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioIntent {
    /// Start (or resume) the ambient loop
    PlayAmbient,
    /// Stop the ambient loop
    StopAmbient,
    /// Play the one-shot spawn chime
    PlayChime,
}

/// Desired-versus-actual ambient audio state and pending intents
#[derive(Debug)]
pub struct AudioDirector {
    enabled: bool,
    playing: bool,
    volume: f32,
    pending: Vec<AudioIntent>,
}

impl AudioDirector {
    /// Create a director with sound disabled
    pub fn new(config: &AudioConfig) -> Self {
        Self {
            enabled: false,
            playing: false,
            volume: config.volume.clamp(0.0, 1.0),
            pending: Vec::new(),
        }
    }

    /// Set the user's desired ambient-sound state; idempotent
    pub fn set_enabled(&mut self, on: bool) {
        if self.enabled == on {
            return;
        }
        self.enabled = on;
        if on {
            self.pending.push(AudioIntent::PlayAmbient);
        } else {
            self.pending.push(AudioIntent::StopAmbient);
            self.playing = false;
        }
    }

    /// Whether the user wants ambient sound
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the host has confirmed the ambient loop is playing
    pub fn playing(&self) -> bool {
        self.playing
    }

    /// Request the spawn chime; dropped silently while sound is disabled
    pub fn request_chime(&mut self) {
        if self.enabled {
            self.pending.push(AudioIntent::PlayChime);
        }
    }

    /// Host callback: the ambient loop started successfully
    pub fn ambient_started(&mut self) {
        self.playing = true;
    }

    /// Host callback: the ambient start was rejected (autoplay policy)
    ///
    /// Not an error; the loop stays wanted and will be retried on the next
    /// user interaction.
    pub fn ambient_rejected(&mut self) {
        log::info!("ambient audio start rejected; will retry on next interaction");
        self.playing = false;
    }

    /// Note a qualifying user interaction, retrying a blocked ambient start
    pub fn user_interacted(&mut self) {
        if self.enabled && !self.playing && !self.pending.contains(&AudioIntent::PlayAmbient) {
            self.pending.push(AudioIntent::PlayAmbient);
        }
    }

    /// Set the ambient volume, clamped to [0, 1]
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    /// Current ambient volume
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Drain all pending intents in request order
    pub fn drain(&mut self) -> std::vec::Drain<'_, AudioIntent> {
        self.pending.drain(..)
    }
}
