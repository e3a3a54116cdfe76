use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use vantage_camera::CameraConfig;
use vantage_input::InputScript;
use vantage_render::LoopConfig;

/// Top-level YAML file accepted by `--config`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub camera: CameraConfig,
    #[serde(rename = "loop")]
    pub frame_loop: LoopConfig,
}

impl AppConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&text)
            .with_context(|| format!("parsing {}", path.display()))?;
        config.camera.validate()?;
        config.frame_loop.validate()?;
        Ok(config)
    }

    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}

pub fn load_script(path: &Path) -> anyhow::Result<InputScript<f32>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let script = serde_yaml::from_str::<InputScript<f32>>(&text)
        .with_context(|| format!("parsing input script {}", path.display()))?;
    tracing::debug!(events = script.len(), "loaded input script");
    Ok(script)
}
