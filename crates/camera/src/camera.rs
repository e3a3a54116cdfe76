use serde::{Deserialize, Serialize};
use vantage_math::{Mat4, Scalar, Vec3};

use crate::projection::Projection;

/// Orthonormal axes derived from a camera's position, target and up vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis<S> {
    pub right: Vec3<S>,
    pub up: Vec3<S>,
    /// Points from the target back toward the camera.
    pub forward: Vec3<S>,
}

/// A positioned camera looking at a point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera<S> {
    pub pos: Vec3<S>,
    pub target: Vec3<S>,
    pub up: Vec3<S>,
    pub projection: Projection<S>,
}

impl<S: Scalar> Default for Camera<S> {
    fn default() -> Self {
        Self {
            pos: Vec3::new(S::zero(), S::zero(), S::lit(5.0)),
            target: Vec3::new(S::zero(), S::zero(), -S::one()),
            up: Vec3::unit_y(),
            projection: Projection::default(),
        }
    }
}

impl<S: Scalar> Camera<S> {
    pub fn new(pos: Vec3<S>, target: Vec3<S>, up: Vec3<S>) -> Self {
        Self {
            pos,
            target,
            up,
            projection: Projection::default(),
        }
    }

    pub fn with_projection(mut self, projection: Projection<S>) -> Self {
        self.projection = projection;
        self
    }

    pub fn set_pos(&mut self, x: S, y: S, z: S) {
        self.pos.set(x, y, z);
    }

    pub fn perspective(&self) -> Mat4<S> {
        self.projection.perspective()
    }

    pub fn basis(&self) -> Basis<S> {
        let offset = self.pos - self.target;
        if offset.length_squared() == S::zero() {
            tracing::trace!(pos = %self.pos, "camera sits on its target, basis is degenerate");
        }
        let forward = offset.normalized();
        let right = Vec3::cross(self.up, forward).normalized();
        let up = Vec3::cross(forward, right);
        Basis { right, up, forward }
    }

    /// World-to-view transform.
    ///
    /// Rows 0 and 1 hold the right and up axes; row 2 holds the negated
    /// forward axis while the z translation uses the positive one.
    pub fn look_at(&self) -> Mat4<S> {
        let Basis { right, up, forward } = self.basis();
        let translation = Vec3::new(
            -Vec3::dot(right, self.pos),
            -Vec3::dot(up, self.pos),
            Vec3::dot(forward, self.pos),
        );

        let mut view = Mat4::identity();
        view.set_row_vec3(0, right);
        view.set_row_vec3(1, up);
        view.set_row_vec3(2, -forward);
        view.set_col_vec3(3, translation);
        view
    }

    pub fn view_projection(&self) -> Mat4<S> {
        self.perspective() * self.look_at()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Camera<f32> {
        Camera::new(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::unit_y(),
        )
    }

    #[test]
    fn default_sits_back_on_z() {
        let cam = Camera::<f32>::default();
        assert_eq!(cam.pos, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(cam.target, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(cam.up, Vec3::unit_y());
        assert_eq!(cam.look_at(), fixture().look_at());
    }

    #[test]
    fn look_at_regression_fixture() {
        let expected = Mat4::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, -1.0, 5.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert_eq!(fixture().look_at(), expected);
    }

    #[test]
    fn basis_is_orthonormal() {
        let cam = Camera::<f64>::new(
            Vec3::new(3.0, 2.0, -4.0),
            Vec3::new(-1.0, 0.5, 2.0),
            Vec3::unit_y(),
        );
        let b = cam.basis();
        for axis in [b.right, b.up, b.forward] {
            assert!((axis.length() - 1.0).abs() < 1e-12);
        }
        assert!(Vec3::dot(b.right, b.up).abs() < 1e-12);
        assert!(Vec3::dot(b.right, b.forward).abs() < 1e-12);
        assert!(Vec3::dot(b.up, b.forward).abs() < 1e-12);
    }

    #[test]
    fn look_at_side_axes_match_glam() {
        let eye = glam::Vec3::new(3.0, 2.0, -4.0);
        let center = glam::Vec3::new(-1.0, 0.5, 2.0);
        let cam = Camera::<f32>::new(
            Vec3::new(eye.x, eye.y, eye.z),
            Vec3::new(center.x, center.y, center.z),
            Vec3::unit_y(),
        );
        let ours = cam.look_at();
        let theirs = glam::Mat4::look_at_rh(eye, center, glam::Vec3::Y);

        // Rows 0, 1 and 3 agree; row 2 is mirrored through the origin.
        for row in [0, 1, 3] {
            for col in 0..4 {
                let t = theirs.row(row)[col];
                assert!((ours.m[row][col] - t).abs() < 1e-5, "[{row}][{col}]");
            }
        }
        for col in 0..4 {
            let t = theirs.row(2)[col];
            assert!((ours.m[2][col] + t).abs() < 1e-5, "[2][{col}]");
        }
    }

    #[test]
    fn eye_maps_to_view_origin_in_plane() {
        let cam = fixture();
        let view = cam.look_at();
        let eye = view * vantage_math::Vec4::point(cam.pos);
        assert!(eye.x.abs() < 1e-6);
        assert!(eye.y.abs() < 1e-6);
    }

    #[test]
    fn camera_on_target_does_not_panic() {
        let cam = Camera::<f32>::new(Vec3::zero(), Vec3::zero(), Vec3::unit_y());
        let b = cam.basis();
        assert_eq!(b.forward, Vec3::zero());
        let _ = cam.look_at();
    }

    #[test]
    fn view_projection_is_product() {
        let cam = fixture();
        assert_eq!(cam.view_projection(), cam.perspective() * cam.look_at());
    }

    #[test]
    fn set_pos_only_moves_position() {
        let mut cam = fixture();
        cam.set_pos(1.0, 2.0, 3.0);
        assert_eq!(cam.pos, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(cam.target, Vec3::new(0.0, 0.0, -1.0));
    }
}
