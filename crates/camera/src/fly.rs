use vantage_math::{Mat4, Scalar, Vec3, to_radians};

use crate::camera::Camera;

/// Lowest vertical look angle in radians (about -75 degrees).
pub const VERTICAL_MIN: f64 = -1.309;
/// Highest vertical look angle in radians (about 85 degrees).
pub const VERTICAL_MAX: f64 = 1.483;

/// Free-look camera driven by mouse deltas and per-axis velocities.
///
/// The wrapped [`Camera`] target is kept at `pos + direction`, so the view
/// always looks one unit along the current direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyCamera<S> {
    pub camera: Camera<S>,
    pub direction: Vec3<S>,
    pub horizontal_angle: S,
    pub vertical_angle: S,
    /// Velocity along the right axis, world up and the backward axis.
    pub speed: Vec3<S>,
    /// Multiplier applied to mouse deltas.
    pub sensitivity: S,
}

impl<S: Scalar> Default for FlyCamera<S> {
    fn default() -> Self {
        let mut fly = Self {
            camera: Camera::default(),
            direction: Vec3::new(S::zero(), S::zero(), -S::one()),
            horizontal_angle: S::PI(),
            vertical_angle: S::zero(),
            speed: Vec3::zero(),
            sensitivity: S::one(),
        };
        fly.sync_target();
        fly
    }
}

impl<S: Scalar> FlyCamera<S> {
    /// Wraps `camera`, recovering look angles from its target direction.
    ///
    /// A target steeper than the vertical limits is pulled back inside them.
    pub fn from_camera(camera: Camera<S>) -> Self {
        let direction = (camera.target - camera.pos).normalized();
        let vertical_angle = direction.y.max(-S::one()).min(S::one()).asin();
        let horizontal_angle = (S::zero() - direction.x).atan2(direction.z);
        let mut fly = Self {
            camera,
            direction,
            horizontal_angle,
            vertical_angle: clamp_vertical(vertical_angle),
            ..Self::default()
        };
        if fly.vertical_angle != vertical_angle {
            fly.direction = fly.angles_direction();
        }
        fly.sync_target();
        fly
    }

    pub fn pos(&self) -> Vec3<S> {
        self.camera.pos
    }

    /// Turns the camera by a mouse delta measured in pixels.
    ///
    /// Deltas are normalised by the viewport, so a full-width drag turns
    /// 180 degrees at multiplier 1. The vertical angle is clamped after
    /// every call, which makes one large update differ from several small
    /// ones once the clamp engages.
    pub fn update_camera_state(&mut self, dx: S, dy: S, multiplier: S) {
        let [width, height] = self.camera.projection.viewport;
        let half_turn = S::lit(180.0);
        let fx = dx / width;
        let fy = dy / height;

        self.horizontal_angle = self.horizontal_angle + to_radians(half_turn * multiplier * fx);
        self.vertical_angle = self.vertical_angle + to_radians(half_turn * multiplier * fy);

        if self.horizontal_angle.abs() >= S::PI() + S::PI() {
            let wrapped = self.horizontal_angle % S::PI();
            tracing::trace!(from = %self.horizontal_angle, to = %wrapped, "horizontal angle wrapped");
            self.horizontal_angle = wrapped;
        }
        self.vertical_angle = clamp_vertical(self.vertical_angle);
        self.direction = self.angles_direction();
        self.sync_target();
    }

    /// Integrates position over `dt` seconds using the current speeds.
    pub fn advance(&mut self, dt: S) {
        let basis = self.camera.basis();
        let pos = &mut self.camera.pos;
        pos.increment(basis.right, self.speed.x * dt);
        pos.increment(Vec3::unit_y(), self.speed.y * dt);
        pos.increment(basis.forward, self.speed.z * dt);
        self.sync_target();
    }

    /// Moves along the look direction by `k` units of direction length.
    pub fn move_along_target(&mut self, k: S) {
        self.camera.pos.increment(self.direction, k);
        self.sync_target();
    }

    /// Moves sideways; positive `k` goes right.
    pub fn strafe(&mut self, k: S) {
        let side = Vec3::cross(self.direction, self.camera.up).normalized();
        self.camera.pos.increment(side, k);
        self.sync_target();
    }

    pub fn set_speed(&mut self, x: S, y: S, z: S) {
        self.speed.set(x, y, z);
    }

    pub fn set_viewport(&mut self, width: S, height: S) {
        self.camera.projection.set_viewport(width, height);
    }

    pub fn view(&self) -> Mat4<S> {
        self.camera.look_at()
    }

    pub fn projection(&self) -> Mat4<S> {
        self.camera.perspective()
    }

    pub fn view_projection(&self) -> Mat4<S> {
        self.camera.view_projection()
    }

    fn angles_direction(&self) -> Vec3<S> {
        let (sin_h, cos_h) = self.horizontal_angle.sin_cos();
        let (sin_v, cos_v) = self.vertical_angle.sin_cos();
        Vec3::new(cos_v * -sin_h, sin_v, cos_v * cos_h)
    }

    fn sync_target(&mut self) {
        self.camera.target = self.camera.pos + self.direction;
    }
}

fn clamp_vertical<S: Scalar>(angle: S) -> S {
    angle.max(S::lit(VERTICAL_MIN)).min(S::lit(VERTICAL_MAX))
}
