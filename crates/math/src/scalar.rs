use core::fmt::{Debug, Display};

use num_traits::{Float, FloatConst};

/// Floating-point scalar the maths types are generic over.
///
/// Implemented for `f32` and `f64`. The `Pod` bound lets matrices be
/// flattened straight into uniform-buffer bytes.
pub trait Scalar:
    Float + FloatConst + Default + Debug + Display + bytemuck::Pod + Send + Sync + 'static
{
    /// Converts an `f64` literal into this scalar.
    fn lit(value: f64) -> Self;
}

impl Scalar for f32 {
    #[inline]
    fn lit(value: f64) -> Self {
        value as f32
    }
}

impl Scalar for f64 {
    #[inline]
    fn lit(value: f64) -> Self {
        value
    }
}

/// Degrees to radians.
#[inline]
pub fn to_radians<S: Scalar>(degrees: S) -> S {
    degrees * S::PI() / S::lit(180.0)
}

/// Radians to degrees.
#[inline]
pub fn to_degrees<S: Scalar>(radians: S) -> S {
    radians * S::lit(180.0) / S::PI()
}

/// Sign of a value: 1 when positive, -1 when negative, 0 otherwise.
pub fn sign<S: Scalar>(value: S) -> i32 {
    (S::zero() < value) as i32 - (value < S::zero()) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radians_round_trip() {
        let deg = 37.5_f64;
        assert!((to_degrees(to_radians(deg)) - deg).abs() < 1e-12);
        assert!((to_radians(180.0_f32) - core::f32::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn sign_of_values() {
        assert_eq!(sign(3.0_f32), 1);
        assert_eq!(sign(-0.5_f64), -1);
        assert_eq!(sign(0.0_f32), 0);
        assert_eq!(sign(-0.0_f64), 0);
    }

    #[test]
    fn lit_converts_width() {
        assert_eq!(<f32 as Scalar>::lit(0.25), 0.25_f32);
        assert_eq!(<f64 as Scalar>::lit(1.5), 1.5_f64);
    }
}
