//! Input mapping: raw key and mouse events become [`Action`]s, and actions
//! are the only thing that mutates a [`vantage_camera::FlyCamera`].
//!
//! # Invariants
//! - Movement keys set velocities; position changes only when the camera
//!   is advanced by the frame loop.
//! - Opposite keys held together cancel on that axis.

pub mod action;
pub mod keys;
pub mod script;

pub use action::{Action, apply};
pub use keys::{Key, MovementKeys};
pub use script::{InputScript, ScriptedAction};

pub fn crate_info() -> &'static str {
    "vantage-input v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("input"));
    }
}
