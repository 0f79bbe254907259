use serde::Deserialize;
use crate::error::DemoError;
use crate::math::Vec3;

/// Scene parameters. Every field falls back to the stock demo value, so an
/// empty document is a valid config.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// RGBA clear color
    pub clear_color: [f32; 4],
    /// Color of the flat-shaded rectangle
    pub flat_color: [f32; 3],
    /// Color of the noise-displaced rectangle
    pub noise_color: [f32; 3],
    /// Vertical field of view
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Distance from the camera to the origin
    pub orbit_radius: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            clear_color: [0.9, 0.9, 0.9, 1.0],
            flat_color: [1.0, 0.3, 0.3],
            noise_color: [0.3, 0.3, 1.0],
            fov_degrees: 60.0,
            near: 0.01,
            far: 100.0,
            orbit_radius: 2.0,
        }
    }
}

impl SceneConfig {
    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, DemoError> {
        // serde_yaml rejects an empty document outright
        let config: SceneConfig = if yaml.trim().is_empty() {
            SceneConfig::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DemoError> {
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(DemoError::InvalidConfig(format!(
                "fov_degrees must be in (0, 180), got {}",
                self.fov_degrees
            )));
        }
        if !(self.near > 0.0 && self.near < self.far) {
            return Err(DemoError::InvalidConfig(format!(
                "clip planes must satisfy 0 < near < far, got near={} far={}",
                self.near, self.far
            )));
        }
        if !(self.orbit_radius > 0.0) {
            return Err(DemoError::InvalidConfig(format!(
                "orbit_radius must be positive, got {}",
                self.orbit_radius
            )));
        }
        Ok(())
    }

    pub fn fov_radians(&self) -> f32 {
        self.fov_degrees.to_radians()
    }

    pub fn flat_color(&self) -> Vec3 {
        Vec3::from_array(self.flat_color)
    }

    pub fn noise_color(&self) -> Vec3 {
        Vec3::from_array(self.noise_color)
    }
}
