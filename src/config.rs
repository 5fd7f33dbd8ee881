//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`FLY_SECTION__KEY`)
//!
//! Every field has a default, so an empty or missing config directory yields
//! the reference corridor.

use figment::{Figment, providers::{Format, Toml, Env}};
use flythrough_core::{CurveError, FrameRemap, PathCurve, Vec3};
use serde::{Serialize, Deserialize};
use std::path::Path;

use crate::scene::{CameraPath, CorridorLayout};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Corridor shape and curve parameters
    #[serde(default)]
    pub corridor: CorridorConfig,
    /// Camera fly-through timing
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Material colors
    #[serde(default)]
    pub materials: MaterialsConfig,
    /// Light placement
    #[serde(default)]
    pub lighting: LightingConfig,
    /// Floor size
    #[serde(default)]
    pub floor: FloorConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`FLY_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // FLY_CORRIDOR__AMPLITUDE=4 -> corridor.amplitude = 4
        figment = figment.merge(Env::prefixed("FLY_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Corridor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorridorConfig {
    /// Number of block pairs
    pub length: u32,
    /// Index at which the corridor starts to bend
    pub curve_start: f32,
    /// Peak lateral offset
    pub amplitude: f32,
    /// Index-units over which the bend ramps in (must be > 0)
    pub smoothing: f32,
    /// Oscillation frequency in radians per index
    pub frequency: f32,
    /// Distance between consecutive block pairs along Y
    pub spacing: f32,
    /// Lateral distance from the centerline to each wall
    pub half_width: f32,
    /// Block center height
    pub block_height: f32,
    /// Vertical stretch of the accent blocks
    pub accent_scale_z: f32,
}

impl Default for CorridorConfig {
    fn default() -> Self {
        Self {
            length: 60,
            curve_start: 15.0,
            amplitude: 6.0,
            smoothing: 15.0,
            frequency: PathCurve::DEFAULT_FREQUENCY,
            spacing: 2.0,
            half_width: 3.0,
            block_height: 1.0,
            accent_scale_z: 1.5,
        }
    }
}

impl CorridorConfig {
    /// Build the validated path curve
    pub fn to_path_curve(&self) -> Result<PathCurve, CurveError> {
        Ok(PathCurve::new(self.curve_start, self.amplitude, self.smoothing)?
            .with_frequency(self.frequency))
    }

    pub fn to_layout(&self) -> CorridorLayout {
        CorridorLayout {
            length: self.length,
            spacing: self.spacing,
            half_width: self.half_width,
            block_height: self.block_height,
            accent_scale_z: self.accent_scale_z,
        }
    }
}

/// Camera animation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Frames per second
    pub fps: u32,
    /// Fly-through length in seconds
    pub duration_secs: u32,
    /// Camera height above the floor
    pub camera_height: f32,
    /// Camera pitch in degrees (90 looks straight down the corridor)
    pub camera_pitch_degrees: f32,
    /// Field of view in degrees
    pub fov_degrees: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            fps: 1000,
            duration_secs: 1,
            camera_height: 1.8,
            camera_pitch_degrees: 85.0,
            fov_degrees: 50.0,
        }
    }
}

impl AnimationConfig {
    /// Total frames in the fly-through
    pub fn total_frames(&self) -> u32 {
        self.fps.saturating_mul(self.duration_secs)
    }

    /// Camera path over a corridor with the given layout
    pub fn to_camera_path(&self, layout: &CorridorLayout) -> Result<CameraPath, CurveError> {
        Ok(CameraPath {
            remap: FrameRemap::new(self.total_frames(), layout.length)?,
            spacing: layout.spacing,
            height: self.camera_height,
        })
    }
}

/// Material colors
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialsConfig {
    /// Name of the wall material
    pub base_name: String,
    /// Wall color [r, g, b]
    pub base: [f32; 3],
    /// Name of the accent material
    pub accent_name: String,
    /// Accent color [r, g, b]
    pub accent: [f32; 3],
}

impl Default for MaterialsConfig {
    fn default() -> Self {
        Self {
            base_name: "DarkGray".to_string(),
            base: [0.1, 0.1, 0.1],
            accent_name: "Neon".to_string(),
            accent: [0.0, 0.8, 1.0],
        }
    }
}

/// Lighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    /// Main light position [x, y, z]
    pub main_position: [f32; 3],
    /// Main light power in watts
    pub main_energy: f32,
    /// Height of the light at the far end of the corridor
    pub end_height: f32,
    /// End light power in watts
    pub end_energy: f32,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            main_position: [0.0, 10.0, 15.0],
            main_energy: 10000.0,
            end_height: 10.0,
            end_energy: 5000.0,
        }
    }
}

impl LightingConfig {
    pub fn main_position(&self) -> Vec3 {
        Vec3::from_array(self.main_position)
    }
}

/// Floor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FloorConfig {
    /// X scale of the floor plane
    pub width: f32,
    /// Extra Y scale beyond the corridor's half length
    pub margin: f32,
}

impl Default for FloorConfig {
    fn default() -> Self {
        Self {
            width: 20.0,
            margin: 10.0,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
