use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vantage_math::{Mat4, Scalar, Vec3};

/// Unique identifier for a scene object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Position, per-axis rotation in degrees, and scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform<S> {
    pub position: Vec3<S>,
    pub rotation: Vec3<S>,
    pub scale: Vec3<S>,
}

impl<S: Scalar> Default for Transform<S> {
    fn default() -> Self {
        Self {
            position: Vec3::zero(),
            rotation: Vec3::zero(),
            scale: Vec3::new(S::one(), S::one(), S::one()),
        }
    }
}

impl<S: Scalar> Transform<S> {
    pub fn at(position: Vec3<S>) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Scale, then rotate about X, Y and Z in turn, then translate.
    pub fn model_matrix(&self) -> Mat4<S> {
        let one = S::one();
        let mut model = Mat4::identity();
        model.scale_by(self.scale);
        model.rotate_axes(Vec3::new(one, one, one), self.rotation);
        model.translate(self.position);
        model
    }
}
