//! Configuration system
//!
//! Every reference constant of the scene lives here as a serde-derived
//! default, so a host can tune the session from a TOML or RON file without
//! touching code. Loading is strictly a session-start concern; nothing on
//! the per-frame path reads a file.

pub use serde::{Deserialize, Serialize};

/// Configuration trait: load/save by file extension
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        if !path.ends_with(".toml") && !path.ends_with(".ron") {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        }

        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Top-level scene configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SceneConfig {
    /// Water surface grid
    pub water: WaterConfig,

    /// Lantern spawn policy
    pub spawn: SpawnConfig,

    /// Ambient particle field
    pub particles: ParticleConfig,

    /// Camera rig behavior
    pub camera: CameraConfig,

    /// Performance-adaptive capacity monitor
    pub capacity: CapacityConfig,

    /// Audio collaborator settings
    pub audio: AudioConfig,
}

impl Config for SceneConfig {}

/// Water surface grid configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterConfig {
    /// Side length of the square plane in world units
    pub size: f32,

    /// Grid cells per side
    pub subdivisions: usize,
}

impl Default for WaterConfig {
    fn default() -> Self {
        Self {
            size: 100.0,
            subdivisions: 128,
        }
    }
}

/// Lantern spawn policy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Extent of the uniform scatter around the scene center, per horizontal axis
    pub scatter_extent: f32,

    /// Half-width of the safe rectangle spawn anchors are clamped into
    pub clamp_extent: f32,

    /// Height above the water at which lanterns are anchored
    pub spawn_height: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            scatter_extent: 25.0,
            clamp_extent: 12.0,
            spawn_height: 0.5,
        }
    }
}

/// Ambient particle field configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Number of particles in the fixed pool
    pub count: usize,

    /// Half-width of the wrap box on X
    pub x_extent: f32,

    /// Lower wrap bound on Y
    pub y_min: f32,

    /// Upper wrap bound on Y
    pub y_max: f32,

    /// Half-width of the wrap box on Z
    pub z_extent: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 100,
            x_extent: 20.0,
            y_min: 3.0,
            y_max: 18.0,
            z_extent: 15.0,
        }
    }
}

/// Camera rig configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Per-frame low-pass factor toward the desired follow position
    pub smoothing: f32,

    /// Lateral offset from the followed lantern on X
    pub side_offset: f32,

    /// Backward offset from the followed lantern on Z
    pub back_offset: f32,

    /// Base camera height
    pub base_height: f32,

    /// Amplitude of the vertical breathing sinusoid
    pub breathe_amount: f32,

    /// Frequency of the vertical breathing sinusoid
    pub breathe_speed: f32,

    /// Forward advance per frame in free drift
    pub drift_rate: f32,

    /// Orbit interaction bounds
    pub orbit: OrbitConfig,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            smoothing: 0.02,
            side_offset: -5.0,
            back_offset: 8.0,
            base_height: 4.0,
            breathe_amount: 0.3,
            breathe_speed: 0.3,
            drift_rate: 0.01,
            orbit: OrbitConfig::default(),
        }
    }
}

/// Bounds applied to the host-driven orbit interaction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    /// Minimum camera distance from the orbit target
    pub min_distance: f32,

    /// Maximum camera distance from the orbit target
    pub max_distance: f32,

    /// Minimum polar angle from the vertical axis in radians
    pub min_polar: f32,

    /// Maximum polar angle from the vertical axis in radians
    pub max_polar: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            min_distance: 4.0,
            max_distance: 25.0,
            min_polar: std::f32::consts::PI / 8.0,
            max_polar: std::f32::consts::PI / 2.2,
        }
    }
}

/// Capacity monitor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CapacityConfig {
    /// Lantern cap at session start
    pub initial: usize,

    /// Cap is never reduced below this
    pub floor: usize,

    /// Cap is never raised above this
    pub ceiling: usize,

    /// FPS below which the cap sheds load
    pub low_fps: f32,

    /// FPS above which the cap is restored
    pub high_fps: f32,

    /// Cap decrease per slow window
    pub shed_step: usize,

    /// Cap increase per fast window (smaller: restore slower than shedding)
    pub restore_step: usize,
}

impl Default for CapacityConfig {
    fn default() -> Self {
        Self {
            initial: 30,
            floor: 10,
            ceiling: 60,
            low_fps: 30.0,
            high_fps: 55.0,
            shed_step: 5,
            restore_step: 2,
        }
    }
}

/// Audio collaborator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Ambient loop volume in [0, 1]
    pub volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self { volume: 0.3 }
    }
}
