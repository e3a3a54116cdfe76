//! Camera: perspective projection, look-at view derivation and free-look state.
//!
//! # Invariants
//! - Cameras hold no derived matrices; projection and view are recomputed
//!   from the current state every time they are asked for.
//! - Matrices are row-major; [`CameraBlock`] decides the upload order.
//! - A camera positioned on its own target is not detected and produces a
//!   degenerate view.

mod camera;
mod config;
mod fly;
mod projection;
mod uniform;

pub use camera::{Basis, Camera};
pub use config::{CameraConfig, ConfigError};
pub use fly::{FlyCamera, VERTICAL_MAX, VERTICAL_MIN};
pub use projection::Projection;
pub use uniform::{CameraBlock, MatrixOrder};

pub fn crate_info() -> &'static str {
    "vantage-camera v0.1.0"
}
