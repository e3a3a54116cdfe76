use std::path::Path;

use serde::{Deserialize, Serialize};
use vantage_math::{Scalar, Vec3};

use crate::{camera::Camera, fly::FlyCamera, projection::Projection};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read camera config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse camera config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid camera config: {0}")]
    Invalid(String),
}

/// Camera settings as read from YAML. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f64; 3],
    pub target: [f64; 3],
    pub up: [f64; 3],
    /// Vertical field of view in degrees.
    pub fov_y: f64,
    pub viewport: [f64; 2],
    pub near: f64,
    pub far: f64,
    pub look_sensitivity: f64,
    /// Speed magnitude used for keyboard movement.
    pub move_speed: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 5.0],
            target: [0.0, 0.0, -1.0],
            up: [0.0, 1.0, 0.0],
            fov_y: 90.0,
            viewport: [1280.0, 720.0],
            near: 0.1,
            far: 1000.0,
            look_sensitivity: 1.0,
            move_speed: 4.0,
        }
    }
}

impl CameraConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded camera config");
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));
        if !(self.near > 0.0) {
            return invalid(format!("near must be positive, got {}", self.near));
        }
        if !(self.far > self.near) {
            return invalid(format!("far ({}) must exceed near ({})", self.far, self.near));
        }
        if !(self.fov_y > 0.0 && self.fov_y < 180.0) {
            return invalid(format!("fov_y must lie in (0, 180), got {}", self.fov_y));
        }
        if !(self.viewport[0] > 0.0 && self.viewport[1] > 0.0) {
            return invalid(format!("viewport must be positive, got {:?}", self.viewport));
        }
        if self.position == self.target {
            return invalid("position and target coincide".to_string());
        }
        Ok(())
    }

    pub fn projection<S: Scalar>(&self) -> Projection<S> {
        Projection {
            fov_y: S::lit(self.fov_y),
            viewport: [S::lit(self.viewport[0]), S::lit(self.viewport[1])],
            near: S::lit(self.near),
            far: S::lit(self.far),
        }
    }

    pub fn camera<S: Scalar>(&self) -> Result<Camera<S>, ConfigError> {
        self.validate()?;
        let v = |a: [f64; 3]| Vec3::new(S::lit(a[0]), S::lit(a[1]), S::lit(a[2]));
        Ok(Camera::new(v(self.position), v(self.target), v(self.up)).with_projection(self.projection()))
    }

    pub fn fly_camera<S: Scalar>(&self) -> Result<FlyCamera<S>, ConfigError> {
        let mut fly = FlyCamera::from_camera(self.camera()?);
        fly.sensitivity = S::lit(self.look_sensitivity);
        Ok(fly)
    }
}
