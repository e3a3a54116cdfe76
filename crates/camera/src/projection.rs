use serde::{Deserialize, Serialize};
use vantage_math::{Mat4, Scalar, to_radians};

/// Lens parameters shared by every camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection<S> {
    /// Vertical field of view in degrees.
    pub fov_y: S,
    /// Viewport width and height in pixels.
    pub viewport: [S; 2],
    pub near: S,
    pub far: S,
}

impl<S: Scalar> Default for Projection<S> {
    fn default() -> Self {
        Self {
            fov_y: S::lit(90.0),
            viewport: [S::lit(1280.0), S::lit(720.0)],
            near: S::lit(0.1),
            far: S::lit(1000.0),
        }
    }
}

impl<S: Scalar> Projection<S> {
    pub fn aspect(&self) -> S {
        self.viewport[0] / self.viewport[1]
    }

    pub fn set_viewport(&mut self, width: S, height: S) {
        self.viewport = [width, height];
    }

    /// Symmetric OpenGL-style frustum in row-major storage.
    ///
    /// The `w` row is row 3 (`M[3][2] = -1`); depth maps to `[-1, 1]`.
    pub fn perspective(&self) -> Mat4<S> {
        let two = S::lit(2.0);
        let t = (to_radians(self.fov_y) / two).tan();
        let depth = self.far - self.near;

        let mut frustum = Mat4::zero();
        frustum.m[0][0] = S::one() / (self.aspect() * t);
        frustum.m[1][1] = S::one() / t;
        frustum.m[2][2] = -(self.far + self.near) / depth;
        frustum.m[2][3] = -two * self.far * self.near / depth;
        frustum.m[3][2] = -S::one();
        frustum
    }
}
