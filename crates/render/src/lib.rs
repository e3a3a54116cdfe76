//! Frame loop and renderer interface.
//!
//! # Invariants
//! - Simulation advances only in whole fixed steps; leftover time carries
//!   into the next frame and is exposed as an interpolation factor.
//! - Renderers read a [`FrameContext`] and never mutate it.
//!
//! No GPU backend lives here. [`UniformRenderer`] produces the exact bytes a
//! backend would upload, and [`DebugTextRenderer`] a readable dump.

mod context;
mod renderer;
mod timestep;

pub use context::FrameContext;
pub use renderer::{DebugTextRenderer, Renderer, UniformFrame, UniformRenderer};
pub use timestep::{FixedTimestep, FrameStep, LoopConfig, LoopConfigError, LoopStats};

pub fn crate_info() -> &'static str {
    "vantage-render v0.1.0"
}
