use std::mem::size_of;

use vantage_math::{Mat4, Scalar, Vec3};

use crate::camera::Camera;

/// Element order used when flattening matrices into the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatrixOrder {
    #[default]
    RowMajor,
    ColumnMajor,
}

/// Camera uniform block: projection, view and eye position.
///
/// Layout in scalars: projection `[0, 16)`, view `[16, 32)`, position
/// `[32, 35)`. No padding is inserted, so the byte size depends on the
/// scalar width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBlock<S> {
    pub projection: Mat4<S>,
    pub view: Mat4<S>,
    pub position: Vec3<S>,
}

impl<S: Scalar> CameraBlock<S> {
    pub const SCALARS: usize = 35;

    pub fn from_camera(camera: &Camera<S>) -> Self {
        Self {
            projection: camera.perspective(),
            view: camera.look_at(),
            position: camera.pos,
        }
    }

    pub const fn projection_offset() -> usize {
        0
    }

    pub const fn view_offset() -> usize {
        16 * size_of::<S>()
    }

    pub const fn position_offset() -> usize {
        32 * size_of::<S>()
    }

    pub const fn size() -> usize {
        Self::SCALARS * size_of::<S>()
    }

    pub fn scalars(&self, order: MatrixOrder) -> [S; 35] {
        let flatten = |m: &Mat4<S>| match order {
            MatrixOrder::RowMajor => m.data(),
            MatrixOrder::ColumnMajor => m.data_col_major(),
        };
        let mut out = [S::zero(); 35];
        out[..16].copy_from_slice(&flatten(&self.projection));
        out[16..32].copy_from_slice(&flatten(&self.view));
        out[32..].copy_from_slice(&self.position.to_array());
        out
    }

    pub fn to_bytes(&self, order: MatrixOrder) -> Vec<u8> {
        let scalars = self.scalars(order);
        bytemuck::cast_slice(&scalars[..]).to_vec()
    }
}
