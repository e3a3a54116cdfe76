use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoopConfigError {
    #[error("step must be positive, got {0}")]
    Step(f64),
    #[error("max frame time must be at least one step, got {0}")]
    MaxFrameTime(f64),
}

/// Timing parameters for the fixed-step loop, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoopConfig {
    pub step: f64,
    /// Longer frames are clamped to this so a stall cannot queue an
    /// unbounded number of updates.
    pub max_frame_time: f64,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            step: 1.0 / 60.0,
            max_frame_time: 0.33,
        }
    }
}

impl LoopConfig {
    pub fn validate(&self) -> Result<(), LoopConfigError> {
        if !(self.step > 0.0) {
            return Err(LoopConfigError::Step(self.step));
        }
        if !(self.max_frame_time >= self.step) {
            return Err(LoopConfigError::MaxFrameTime(self.max_frame_time));
        }
        Ok(())
    }
}

/// Updates and frames counted over one simulated second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LoopStats {
    pub ups: u32,
    pub fps: u32,
}

/// Outcome of one [`FixedTimestep::frame`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStep {
    pub ticks: u32,
    /// Fraction of a step left in the accumulator, in `[0, 1)`.
    pub alpha: f64,
    /// Set on the frame that closes a simulated second.
    pub stats: Option<LoopStats>,
}

/// Accumulator-driven fixed-step scheduler.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    config: LoopConfig,
    accumulator: f64,
    elapsed: f64,
    ticks: u32,
    frames: u32,
    last_stats: LoopStats,
}

impl FixedTimestep {
    pub fn new(config: LoopConfig) -> Self {
        Self {
            config,
            accumulator: 0.0,
            elapsed: 0.0,
            ticks: 0,
            frames: 0,
            last_stats: LoopStats::default(),
        }
    }

    pub fn config(&self) -> &LoopConfig {
        &self.config
    }

    pub fn step(&self) -> f64 {
        self.config.step
    }

    pub fn last_stats(&self) -> LoopStats {
        self.last_stats
    }

    /// Feeds one frame's wall time and runs `tick(step)` for every whole
    /// step that fits in the accumulator.
    pub fn frame(&mut self, frame_time: f64, mut tick: impl FnMut(f64)) -> FrameStep {
        let step = self.config.step;
        let frame_time = frame_time.clamp(0.0, self.config.max_frame_time);
        self.accumulator += frame_time;

        let mut ran = 0;
        while self.accumulator >= step {
            tick(step);
            ran += 1;
            self.elapsed += step;
            self.accumulator -= step;
        }
        self.ticks += ran;
        self.frames += 1;

        let mut stats = None;
        if self.elapsed > 1.0 {
            let s = LoopStats {
                ups: self.ticks,
                fps: self.frames,
            };
            tracing::info!(ups = s.ups, fps = s.fps, "loop stats");
            self.last_stats = s;
            stats = Some(s);
            self.ticks = 0;
            self.frames = 0;
            self.elapsed -= 1.0;
        }

        FrameStep {
            ticks: ran,
            alpha: self.accumulator / step,
            stats,
        }
    }
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(LoopConfig::default())
    }
}
