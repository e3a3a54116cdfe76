use crate::{Scalar, Vec3, to_radians};

/// Rodrigues rotation block about `axis` by `angle` degrees.
///
/// The axis is normalized first; a zero axis stays zero, which leaves only
/// the `cos` diagonal. An angle of exactly 90 is nudged to 90.02 before
/// conversion.
// TODO: replace the 90 degree nudge with a quaternion-backed rotation.
pub(crate) fn rodrigues<S: Scalar>(axis: Vec3<S>, angle: S) -> [[S; 3]; 3] {
    let angle = if angle == S::lit(90.0) {
        tracing::trace!("nudging exact 90 degree rotation to 90.02");
        angle + S::lit(0.02)
    } else {
        angle
    };

    let rads = to_radians(angle);
    let c = rads.cos();
    let s = rads.sin();

    let n = axis.normalized();
    // Axis pre-scaled by (1 - cos).
    let t = n * (S::one() - c);

    [
        [c + t.x * n.x, n.x * t.y - n.z * s, n.x * t.z + n.y * s],
        [n.y * t.x + n.z * s, c + t.y * n.y, n.y * t.z - n.x * s],
        [n.z * t.x - n.y * s, n.z * t.y + n.x * s, c + t.z * n.z],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_angle_is_identity() {
        let r = rodrigues(Vec3::new(0.3_f64, 0.4, 0.5), 0.0);
        for (i, row) in r.iter().enumerate() {
            for (j, v) in row.iter().enumerate() {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((v - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn axis_is_normalized() {
        let a = rodrigues(Vec3::new(0.0_f64, 0.0, 1.0), 30.0);
        let b = rodrigues(Vec3::new(0.0_f64, 0.0, 7.0), 30.0);
        assert_eq!(a, b);
    }

    #[test]
    fn exact_ninety_is_nudged() {
        let ninety = rodrigues(Vec3::new(0.0_f64, 0.0, 1.0), 90.0);
        let nudged = rodrigues(Vec3::new(0.0_f64, 0.0, 1.0), 90.02);
        assert_eq!(ninety, nudged);
        // cos(90.02 deg) is slightly negative rather than ~0.
        assert!(ninety[0][0] < 0.0);
    }
}
