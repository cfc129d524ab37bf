use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};
use crate::layout::{AlignmentMode, SceneRequest, Viewport, DEFAULT_MARGIN};
use crate::render::Color;
use crate::shapes::{ReferenceBody, Shape};

/// Returns the path to the settings file: `~/.config/shapescope/settings.json`
pub fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("shapescope");
    path.push("settings.json");
    path
}

/// Reference body as stored on disk (validated when turned into a `ReferenceBody`)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReferenceSettings {
    pub radius: f64,
    pub name: String,
    #[serde(default)]
    pub has_rings: bool,
}

/// Persisted application settings.
///
/// Serialized as JSON to the platform config directory.
/// Fields use `#[serde(default)]` so that adding new settings
/// won't break existing config files.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    // Viewport
    pub viewport_width: f64,
    pub viewport_height: f64,

    // Scale
    pub scale_multiplier: f64,
    pub use_log_scale: bool,

    // Placement
    pub alignment: AlignmentMode,
    pub margin: f64,
    pub reference: Option<ReferenceSettings>,
    pub orbit_phase: Option<f64>,
    /// Radians per second, see `SceneRequest::advanced`
    pub orbit_speed: f64,
    pub random_seed: Option<u64>,

    // Appearance
    pub fill: Option<Color>,
    pub opacity: u8,
    pub overlays: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        let viewport = Viewport::default();
        Self {
            viewport_width: viewport.width,
            viewport_height: viewport.height,

            scale_multiplier: 1.0,
            use_log_scale: false,

            alignment: AlignmentMode::Center,
            margin: DEFAULT_MARGIN,
            reference: None,
            orbit_phase: None,
            orbit_speed: 1.0,
            random_seed: None,

            fill: None,
            opacity: 100,
            overlays: true,
        }
    }
}

impl AppSettings {
    /// Load settings from disk, falling back to defaults on any error.
    ///
    /// A missing file is expected on first run. An unreadable or invalid
    /// file is reported at warn level before the defaults are used.
    pub fn load() -> Self {
        let path = settings_path();
        match Self::load_if_present(&path) {
            Ok(Some(settings)) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Ok(None) => {
                log::info!("No settings file at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Failed to load settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            GeometryError::Settings(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::parse(path, &contents)
    }

    /// Like `load_from`, but a missing file gives `Ok(None)`
    pub fn load_if_present(path: &Path) -> Result<Option<Self>> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(path, &contents).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(GeometryError::Settings(format!(
                "cannot read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn parse(path: &Path, contents: &str) -> Result<Self> {
        serde_json::from_str(contents).map_err(|e| {
            GeometryError::Settings(format!("cannot parse {}: {}", path.display(), e))
        })
    }

    /// Save settings to disk as pretty JSON.
    pub fn save(&self) {
        if let Err(e) = self.save_to(&settings_path()) {
            log::warn!("Failed to save settings: {}", e);
        }
    }

    /// Save settings to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                GeometryError::Settings(format!("cannot create {}: {}", parent.display(), e))
            })?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| GeometryError::Settings(e.to_string()))?;
        std::fs::write(path, json).map_err(|e| {
            GeometryError::Settings(format!("cannot write {}: {}", path.display(), e))
        })
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.viewport_width, self.viewport_height)
    }

    /// The configured reference body, validated
    pub fn reference_body(&self) -> Result<Option<ReferenceBody>> {
        self.reference
            .as_ref()
            .map(|r| ReferenceBody::new(r.radius, r.name.clone(), r.has_rings))
            .transpose()
    }

    /// Build a calculation request for `shape` from these settings
    pub fn scene_request(&self, shape: Shape) -> Result<SceneRequest> {
        let mut request = SceneRequest::new(shape, self.viewport());
        request.reference = self.reference_body()?;
        request.alignment = self.alignment;
        request.use_log = self.use_log_scale;
        request.multiplier = self.scale_multiplier;
        request.margin = self.margin;
        request.phase = self.orbit_phase;
        request.orbit_speed = self.orbit_speed;
        request.seed = self.random_seed;
        request.fill = self.fill;
        request.opacity = self.opacity;
        request.overlays = self.overlays;
        Ok(request)
    }
}
