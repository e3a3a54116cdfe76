use serde::{Deserialize, Serialize};
use vantage_camera::FlyCamera;
use vantage_math::Scalar;

/// A high-level request produced by input handling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action<S> {
    /// Mouse movement in pixels since the last event.
    Look { dx: S, dy: S },
    /// Sets the camera velocity along right, world up and backward.
    Move { x: S, y: S, z: S },
    /// Zeroes all velocities.
    Stop,
    /// The viewport changed size.
    Resize { width: S, height: S },
    /// Unbound input.
    Noop,
}

/// Applies `action` to `camera`, scaling look deltas by its sensitivity.
pub fn apply<S: Scalar>(action: Action<S>, camera: &mut FlyCamera<S>) {
    tracing::trace!(?action, "apply");
    match action {
        Action::Look { dx, dy } => {
            let multiplier = camera.sensitivity;
            camera.update_camera_state(dx, dy, multiplier);
        }
        Action::Move { x, y, z } => camera.set_speed(x, y, z),
        Action::Stop => camera.set_speed(S::zero(), S::zero(), S::zero()),
        Action::Resize { width, height } => camera.set_viewport(width, height),
        Action::Noop => {}
    }
}

#[cfg(test)]
mod tests {
    use vantage_math::Vec3;

    use super::*;

    #[test]
    fn move_then_stop() {
        let mut cam = FlyCamera::<f32>::default();
        apply(Action::Move { x: 4.0, y: 0.0, z: -4.0 }, &mut cam);
        assert_eq!(cam.speed, Vec3::new(4.0, 0.0, -4.0));
        apply(Action::Stop, &mut cam);
        assert_eq!(cam.speed, Vec3::zero());
    }

    #[test]
    fn look_uses_sensitivity() {
        let mut slow = FlyCamera::<f64>::default();
        slow.sensitivity = 0.5;
        let mut fast = FlyCamera::<f64>::default();
        apply(Action::Look { dx: 64.0, dy: 0.0 }, &mut slow);
        apply(Action::Look { dx: 32.0, dy: 0.0 }, &mut fast);
        assert!((slow.horizontal_angle - fast.horizontal_angle).abs() < 1e-12);
    }

    #[test]
    fn resize_updates_viewport() {
        let mut cam = FlyCamera::<f32>::default();
        apply(Action::Resize { width: 640.0, height: 480.0 }, &mut cam);
        assert_eq!(cam.camera.projection.viewport, [640.0, 480.0]);
    }

    #[test]
    fn noop_changes_nothing() {
        let mut cam = FlyCamera::<f32>::default();
        let before = cam;
        apply(Action::Noop, &mut cam);
        assert_eq!(cam, before);
    }

    #[test]
    fn actions_parse_from_yaml() {
        let action: Action<f32> = serde_yaml::from_str("action: look\ndx: 3.0\ndy: -1.0").unwrap();
        assert_eq!(action, Action::Look { dx: 3.0, dy: -1.0 });
        let action: Action<f32> = serde_yaml::from_str("action: stop").unwrap();
        assert_eq!(action, Action::Stop);
    }
}
