//! World maths: generic vectors and row-major matrices for the renderer.
//!
//! Every type is a plain `Copy` value parameterized over a [`Scalar`]
//! (`f32` or `f64`). Operations return fresh values, so a product can never
//! overwrite one of its own inputs halfway through.
//!
//! # Conventions
//! - Matrices are stored `m[row][col]` and default to the identity.
//! - Column vectors: `M * v`, and transform builders (`rotate`, `translate`,
//!   `scale_by`) left-multiply, `self = T * self`.
//! - Angles passed to rotation builders are in degrees.
//! - Degenerate input never panics: zero vectors do not normalize,
//!   singular matrices report [`MathError::Singular`].

mod error;
mod mat3;
mod mat4;
mod rotation;
mod scalar;
mod vec3;
mod vec4;

pub use error::MathError;
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use scalar::{Scalar, sign, to_degrees, to_radians};
pub use vec3::Vec3;
pub use vec4::Vec4;

pub fn crate_info() -> &'static str {
    "vantage-math v0.1.0"
}
