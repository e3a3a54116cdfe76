use core::fmt;
use core::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::rotation::rodrigues;
use crate::{Mat3, MathError, Scalar, Vec3, Vec4};

/// Row-major 4x4 matrix, `m[row][col]`. Defaults to the identity.
///
/// Translation lives in the last column; use [`Mat4::data_col_major`] when
/// the consumer expects column-major uploads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mat4<S> {
    pub m: [[S; 4]; 4],
}

impl<S: Scalar> Default for Mat4<S> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<S: Scalar> Mat4<S> {
    pub fn identity() -> Self {
        let mut out = Self::zero();
        out.set_identity();
        out
    }

    pub fn zero() -> Self {
        Self {
            m: [[S::zero(); 4]; 4],
        }
    }

    pub const fn from_rows(m: [[S; 4]; 4]) -> Self {
        Self { m }
    }

    /// Builds a matrix from 16 row-major values.
    pub fn from_row_major_slice(values: &[S]) -> Result<Self, MathError> {
        if values.len() != 16 {
            return Err(MathError::InvalidLength {
                expected: 16,
                actual: values.len(),
            });
        }
        let mut out = Self::zero();
        for (i, v) in values.iter().enumerate() {
            out.m[i / 4][i % 4] = *v;
        }
        Ok(out)
    }

    /// Rotation about `axis` by `angle` degrees in the upper-left block.
    pub fn from_rotation(axis: Vec3<S>, angle: S) -> Self {
        let mut out = Self::identity();
        for (row, r) in out.m.iter_mut().zip(rodrigues(axis, angle)) {
            row[..3].copy_from_slice(&r);
        }
        out
    }

    pub fn from_translation(t: Vec3<S>) -> Self {
        let mut out = Self::identity();
        out.set_col_vec3(3, t);
        out
    }

    pub fn from_scale(s: Vec3<S>) -> Self {
        let mut out = Self::identity();
        out.m[0][0] = s.x;
        out.m[1][1] = s.y;
        out.m[2][2] = s.z;
        out
    }

    pub fn set_identity(&mut self) {
        for (i, row) in self.m.iter_mut().enumerate() {
            for (j, v) in row.iter_mut().enumerate() {
                *v = if i == j { S::one() } else { S::zero() };
            }
        }
    }

    pub fn set_zero(&mut self) {
        self.m = [[S::zero(); 4]; 4];
    }

    pub fn set_row(&mut self, index: usize, row: [S; 4]) {
        self.m[index] = row;
    }

    pub fn set_row_vec4(&mut self, index: usize, v: Vec4<S>) {
        self.set_row(index, v.to_array());
    }

    /// Writes the first three entries of a row; the fourth is left as is.
    pub fn set_row_vec3(&mut self, index: usize, v: Vec3<S>) {
        self.m[index][..3].copy_from_slice(&v.to_array());
    }

    pub fn set_col(&mut self, index: usize, col: [S; 4]) {
        for (row, v) in self.m.iter_mut().zip(col) {
            row[index] = v;
        }
    }

    pub fn set_col_vec4(&mut self, index: usize, v: Vec4<S>) {
        self.set_col(index, v.to_array());
    }

    /// Writes the first three entries of a column; the fourth is left as is.
    pub fn set_col_vec3(&mut self, index: usize, v: Vec3<S>) {
        for (row, v) in self.m.iter_mut().zip(v.to_array()) {
            row[index] = v;
        }
    }

    pub fn row(&self, index: usize) -> Vec4<S> {
        Vec4::from(self.m[index])
    }

    pub fn row3(&self, index: usize) -> Vec3<S> {
        self.row(index).xyz()
    }

    pub fn col(&self, index: usize) -> Vec4<S> {
        Vec4::new(
            self.m[0][index],
            self.m[1][index],
            self.m[2][index],
            self.m[3][index],
        )
    }

    pub fn col3(&self, index: usize) -> Vec3<S> {
        self.col(index).xyz()
    }

    /// The 3x3 matrix left after deleting `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> Mat3<S> {
        let mut out = Mat3::zero();
        for (r_out, r) in (0..4).filter(|r| *r != row).enumerate() {
            for (c_out, c) in (0..4).filter(|c| *c != col).enumerate() {
                out.m[r_out][c_out] = self.m[r][c];
            }
        }
        out
    }

    /// Laplace expansion along row 0 over the four 3x3 minors.
    pub fn determinant(&self) -> S {
        let r = &self.m[0];
        let d0 = self.minor(0, 0).determinant();
        let d1 = self.minor(0, 1).determinant();
        let d2 = self.minor(0, 2).determinant();
        let d3 = self.minor(0, 3).determinant();
        r[0] * d0 - r[1] * d1 + r[2] * d2 - r[3] * d3
    }

    /// Transposes in place.
    pub fn transpose(&mut self) {
        for i in 0..4 {
            for j in (i + 1)..4 {
                let tmp = self.m[i][j];
                self.m[i][j] = self.m[j][i];
                self.m[j][i] = tmp;
            }
        }
    }

    pub fn transposed(mut self) -> Self {
        self.transpose();
        self
    }

    /// Flattens row by row: `out[i] = m[i / 4][i % 4]`.
    pub fn data(&self) -> [S; 16] {
        let mut out = [S::zero(); 16];
        for (i, v) in out.iter_mut().enumerate() {
            *v = self.m[i / 4][i % 4];
        }
        out
    }

    /// Flattens column by column: `out[i] = m[i % 4][i / 4]`.
    pub fn data_col_major(&self) -> [S; 16] {
        let mut out = [S::zero(); 16];
        for (i, v) in out.iter_mut().enumerate() {
            *v = self.m[i % 4][i / 4];
        }
        out
    }

    /// Adjugate over determinant.
    ///
    /// All 16 cofactors use the expanded 3x3 minor formula; the determinant
    /// is then row 0 of `self` against column 0 of the cofactors. Fails with
    /// [`MathError::Singular`] when that determinant is exactly zero.
    pub fn inverse(&self) -> Result<Self, MathError> {
        let a = &self.m;
        let mut inv = [[S::zero(); 4]; 4];

        inv[0][0] = a[1][1] * a[2][2] * a[3][3]
            - a[1][1] * a[2][3] * a[3][2]
            - a[2][1] * a[1][2] * a[3][3]
            + a[2][1] * a[1][3] * a[3][2]
            + a[3][1] * a[1][2] * a[2][3]
            - a[3][1] * a[1][3] * a[2][2];

        inv[1][0] = -a[1][0] * a[2][2] * a[3][3]
            + a[1][0] * a[2][3] * a[3][2]
            + a[2][0] * a[1][2] * a[3][3]
            - a[2][0] * a[1][3] * a[3][2]
            - a[3][0] * a[1][2] * a[2][3]
            + a[3][0] * a[1][3] * a[2][2];

        inv[2][0] = a[1][0] * a[2][1] * a[3][3]
            - a[1][0] * a[2][3] * a[3][1]
            - a[2][0] * a[1][1] * a[3][3]
            + a[2][0] * a[1][3] * a[3][1]
            + a[3][0] * a[1][1] * a[2][3]
            - a[3][0] * a[1][3] * a[2][1];

        inv[3][0] = -a[1][0] * a[2][1] * a[3][2]
            + a[1][0] * a[2][2] * a[3][1]
            + a[2][0] * a[1][1] * a[3][2]
            - a[2][0] * a[1][2] * a[3][1]
            - a[3][0] * a[1][1] * a[2][2]
            + a[3][0] * a[1][2] * a[2][1];

        inv[0][1] = -a[0][1] * a[2][2] * a[3][3]
            + a[0][1] * a[2][3] * a[3][2]
            + a[2][1] * a[0][2] * a[3][3]
            - a[2][1] * a[0][3] * a[3][2]
            - a[3][1] * a[0][2] * a[2][3]
            + a[3][1] * a[0][3] * a[2][2];

        inv[1][1] = a[0][0] * a[2][2] * a[3][3]
            - a[0][0] * a[2][3] * a[3][2]
            - a[2][0] * a[0][2] * a[3][3]
            + a[2][0] * a[0][3] * a[3][2]
            + a[3][0] * a[0][2] * a[2][3]
            - a[3][0] * a[0][3] * a[2][2];

        inv[2][1] = -a[0][0] * a[2][1] * a[3][3]
            + a[0][0] * a[2][3] * a[3][1]
            + a[2][0] * a[0][1] * a[3][3]
            - a[2][0] * a[0][3] * a[3][1]
            - a[3][0] * a[0][1] * a[2][3]
            + a[3][0] * a[0][3] * a[2][1];

        inv[3][1] = a[0][0] * a[2][1] * a[3][2]
            - a[0][0] * a[2][2] * a[3][1]
            - a[2][0] * a[0][1] * a[3][2]
            + a[2][0] * a[0][2] * a[3][1]
            + a[3][0] * a[0][1] * a[2][2]
            - a[3][0] * a[0][2] * a[2][1];

        inv[0][2] = a[0][1] * a[1][2] * a[3][3]
            - a[0][1] * a[1][3] * a[3][2]
            - a[1][1] * a[0][2] * a[3][3]
            + a[1][1] * a[0][3] * a[3][2]
            + a[3][1] * a[0][2] * a[1][3]
            - a[3][1] * a[0][3] * a[1][2];

        inv[1][2] = -a[0][0] * a[1][2] * a[3][3]
            + a[0][0] * a[1][3] * a[3][2]
            + a[1][0] * a[0][2] * a[3][3]
            - a[1][0] * a[0][3] * a[3][2]
            - a[3][0] * a[0][2] * a[1][3]
            + a[3][0] * a[0][3] * a[1][2];

        inv[2][2] = a[0][0] * a[1][1] * a[3][3]
            - a[0][0] * a[1][3] * a[3][1]
            - a[1][0] * a[0][1] * a[3][3]
            + a[1][0] * a[0][3] * a[3][1]
            + a[3][0] * a[0][1] * a[1][3]
            - a[3][0] * a[0][3] * a[1][1];

        inv[3][2] = -a[0][0] * a[1][1] * a[3][2]
            + a[0][0] * a[1][2] * a[3][1]
            + a[1][0] * a[0][1] * a[3][2]
            - a[1][0] * a[0][2] * a[3][1]
            - a[3][0] * a[0][1] * a[1][2]
            + a[3][0] * a[0][2] * a[1][1];

        inv[0][3] = -a[0][1] * a[1][2] * a[2][3]
            + a[0][1] * a[1][3] * a[2][2]
            + a[1][1] * a[0][2] * a[2][3]
            - a[1][1] * a[0][3] * a[2][2]
            - a[2][1] * a[0][2] * a[1][3]
            + a[2][1] * a[0][3] * a[1][2];

        inv[1][3] = a[0][0] * a[1][2] * a[2][3]
            - a[0][0] * a[1][3] * a[2][2]
            - a[1][0] * a[0][2] * a[2][3]
            + a[1][0] * a[0][3] * a[2][2]
            + a[2][0] * a[0][2] * a[1][3]
            - a[2][0] * a[0][3] * a[1][2];

        inv[2][3] = -a[0][0] * a[1][1] * a[2][3]
            + a[0][0] * a[1][3] * a[2][1]
            + a[1][0] * a[0][1] * a[2][3]
            - a[1][0] * a[0][3] * a[2][1]
            - a[2][0] * a[0][1] * a[1][3]
            + a[2][0] * a[0][3] * a[1][1];

        inv[3][3] = a[0][0] * a[1][1] * a[2][2]
            - a[0][0] * a[1][2] * a[2][1]
            - a[1][0] * a[0][1] * a[2][2]
            + a[1][0] * a[0][2] * a[2][1]
            + a[2][0] * a[0][1] * a[1][2]
            - a[2][0] * a[0][2] * a[1][1];

        let det = a[0][0] * inv[0][0]
            + a[0][1] * inv[1][0]
            + a[0][2] * inv[2][0]
            + a[0][3] * inv[3][0];
        if det == S::zero() {
            tracing::trace!("4x4 inverse requested for singular matrix");
            return Err(MathError::Singular);
        }

        Ok(Self::from_rows(inv) * (S::one() / det))
    }

    /// Rotates by `angle` degrees about `axis`: `self = R * self`.
    pub fn rotate(&mut self, axis: Vec3<S>, angle: S) {
        *self = Self::from_rotation(axis, angle) * *self;
    }

    /// Three successive single-axis rotations, X then Y then Z.
    ///
    /// Each component of `axis` weights its own axis and the matching
    /// component of `angles` is the angle in degrees.
    pub fn rotate_axes(&mut self, axis: Vec3<S>, angles: Vec3<S>) {
        let zero = S::zero();
        self.rotate(Vec3::new(axis.x, zero, zero), angles.x);
        self.rotate(Vec3::new(zero, axis.y, zero), angles.y);
        self.rotate(Vec3::new(zero, zero, axis.z), angles.z);
    }

    /// `self = T * self`.
    pub fn translate(&mut self, t: Vec3<S>) {
        *self = Self::from_translation(t) * *self;
    }

    /// `self = S * self` with a diagonal scale.
    pub fn scale_by(&mut self, s: Vec3<S>) {
        *self = Self::from_scale(s) * *self;
    }
}

impl<S: Scalar> Add for Mat4<S> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        for (row, r) in self.m.iter_mut().zip(rhs.m) {
            for (v, b) in row.iter_mut().zip(r) {
                *v = *v + b;
            }
        }
        self
    }
}

impl<S: Scalar> Sub for Mat4<S> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        for (row, r) in self.m.iter_mut().zip(rhs.m) {
            for (v, b) in row.iter_mut().zip(r) {
                *v = *v - b;
            }
        }
        self
    }
}

impl<S: Scalar> Mul<S> for Mat4<S> {
    type Output = Self;

    fn mul(mut self, k: S) -> Self {
        for v in self.m.iter_mut().flatten() {
            *v = *v * k;
        }
        self
    }
}

impl<S: Scalar> Mul for Mat4<S> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (&self.m, &rhs.m);
        let mut out = Self::zero();
        for i in 0..4 {
            for j in 0..4 {
                out.m[i][j] = a[i][0] * b[0][j]
                    + a[i][1] * b[1][j]
                    + a[i][2] * b[2][j]
                    + a[i][3] * b[3][j];
            }
        }
        out
    }
}

impl<S: Scalar> Mul<Vec4<S>> for Mat4<S> {
    type Output = Vec4<S>;

    fn mul(self, v: Vec4<S>) -> Vec4<S> {
        Vec4::new(
            Vec4::dot(self.row(0), v),
            Vec4::dot(self.row(1), v),
            Vec4::dot(self.row(2), v),
            Vec4::dot(self.row(3), v),
        )
    }
}

impl<S: fmt::Display> fmt::Display for Mat4<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.m {
            writeln!(f, "[{}, {}, {}, {}]", row[0], row[1], row[2], row[3])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    type M = Mat4<f32>;

    fn approx_eq(a: &M, b: &M, eps: f32) -> bool {
        a.m.iter()
            .flatten()
            .zip(b.m.iter().flatten())
            .all(|(x, y)| (x - y).abs() <= eps)
    }

    fn sample() -> M {
        M::from_rows([
            [4.0, 7.0, 2.0, 3.0],
            [0.0, 5.0, 0.0, 1.0],
            [1.0, 0.0, 6.0, 2.0],
            [2.0, 1.0, 0.0, 3.0],
        ])
    }

    fn to_glam(m: &M) -> glam::Mat4 {
        // glam is column-major.
        glam::Mat4::from_cols_array(&m.data_col_major())
    }

    #[test]
    fn default_is_identity() {
        let m = M::default();
        assert_eq!(m, M::identity());
        assert_eq!(m.determinant(), 1.0);
        assert_eq!(M::zero().determinant(), 0.0);
    }

    #[test]
    fn minor_drops_row_and_column() {
        let m = sample();
        let minor = m.minor(1, 2);
        assert_eq!(
            minor,
            Mat3::from_rows([[4.0, 7.0, 3.0], [1.0, 0.0, 2.0], [2.0, 1.0, 3.0]])
        );
    }

    #[test]
    fn determinant_matches_glam() {
        let m = sample();
        let expected = to_glam(&m).determinant();
        assert!((m.determinant() - expected).abs() < 1e-3);
    }

    #[test]
    fn double_transpose_is_exact() {
        let m = sample();
        let mut t = m;
        t.transpose();
        assert_eq!(t.row(0), m.col(0));
        t.transpose();
        assert_eq!(t, m);
    }

    #[test]
    fn data_orders() {
        let m = sample();
        let row = m.data();
        let col = m.data_col_major();
        assert_eq!(&row[..4], &[4.0, 7.0, 2.0, 3.0]);
        assert_eq!(&col[..4], &[4.0, 0.0, 1.0, 2.0]);
        for i in 0..16 {
            assert_eq!(row[i], m.m[i / 4][i % 4]);
            assert_eq!(col[i], m.m[i % 4][i / 4]);
        }
    }

    #[test]
    fn vec3_row_and_col_leave_fourth_entry() {
        let mut m = M::zero();
        m.m[0][3] = 9.0;
        m.m[3][1] = 8.0;
        m.set_row_vec3(0, Vec3::new(1.0, 2.0, 3.0));
        m.set_col_vec3(1, Vec3::new(5.0, 6.0, 7.0));
        assert_eq!(m.row(0), Vec4::new(1.0, 5.0, 3.0, 9.0));
        assert_eq!(m.col(1), Vec4::new(5.0, 6.0, 7.0, 8.0));
    }

    #[test]
    fn col_from_array_writes_all_rows() {
        let mut m = M::zero();
        m.set_col(2, [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.col(2), Vec4::new(1.0, 2.0, 3.0, 4.0));
        m.set_row_vec4(3, Vec4::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(m.m[3][2], 0.0);
    }

    #[test]
    fn inverse_times_self_is_identity() {
        let m = sample();
        let inv = m.inverse().unwrap();
        assert!(approx_eq(&(inv * m), &M::identity(), 1e-4));
        assert!(approx_eq(&(m * inv), &M::identity(), 1e-4));
    }

    #[test]
    fn inverse_matches_glam() {
        let mut m = M::identity();
        m.scale_by(Vec3::new(2.0, 3.0, 0.5));
        m.rotate(Vec3::new(1.0, 1.0, 0.0), 33.0);
        m.translate(Vec3::new(-4.0, 1.5, 10.0));

        let ours = m.inverse().unwrap();
        let theirs = to_glam(&m).inverse();
        let ours_cols = ours.data_col_major();
        for (a, b) in ours_cols.iter().zip(theirs.to_cols_array()) {
            assert!((a - b).abs() < 1e-4, "{a} vs {b}");
        }
    }

    #[test]
    fn inverse_of_dense_matrix() {
        // Every entry non-zero, including the ones below the diagonal.
        let m = M::from_rows([
            [2.0, -1.0, 3.0, 0.5],
            [1.5, 4.0, -2.0, 1.0],
            [0.5, 2.0, 5.0, -3.0],
            [-1.0, 0.25, 1.0, 2.0],
        ]);
        let inv = m.inverse().unwrap();
        assert!(approx_eq(&(inv * m), &M::identity(), 1e-5));
        assert!(approx_eq(&(m * inv), &M::identity(), 1e-5));

        let theirs = to_glam(&m).inverse();
        for (a, b) in inv.data_col_major().iter().zip(theirs.to_cols_array()) {
            assert!((a - b).abs() < 1e-5, "{a} vs {b}");
        }
    }

    #[test]
    fn inverse_of_singular_fails() {
        assert_eq!(M::zero().inverse(), Err(MathError::Singular));
        let mut repeated = sample();
        repeated.m[2] = repeated.m[0];
        assert_eq!(repeated.inverse(), Err(MathError::Singular));
    }

    #[test]
    fn inverse_in_double_precision() {
        let m = Mat4::<f64>::from_rows([
            [1.0, 2.0, 0.0, 0.0],
            [0.0, 1.0, 3.0, 0.0],
            [0.0, 0.0, 1.0, 4.0],
            [5.0, 0.0, 0.0, 1.0],
        ]);
        let product = m.inverse().unwrap() * m;
        for (i, row) in product.m.iter().enumerate() {
            for (j, v) in row.iter().enumerate() {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((v - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn rotate_x_axis_about_z() {
        let mut r = M::identity();
        r.rotate(Vec3::new(0.0, 0.0, 1.0), 90.0);
        let v = r * Vec4::direction(Vec3::new(1.0, 0.0, 0.0));
        assert!(v.x.abs() < 1e-3);
        assert!((v.y - 1.0).abs() < 1e-3);
        assert_eq!(v.w, 0.0);
    }

    #[test]
    fn translate_moves_points_not_directions() {
        let mut t = M::identity();
        t.translate(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(t.col3(3), Vec3::new(1.0, 2.0, 3.0));

        let p = t * Vec4::point(Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(p, Vec4::new(2.0, 3.0, 4.0, 1.0));
        let d = t * Vec4::direction(Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(d, Vec4::new(1.0, 1.0, 1.0, 0.0));
    }

    #[test]
    fn builders_left_multiply() {
        // scale, then translate: translation is not scaled.
        let mut m = M::identity();
        m.scale_by(Vec3::new(2.0, 2.0, 2.0));
        m.translate(Vec3::new(1.0, 0.0, 0.0));
        let p = m * Vec4::point(Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(p, Vec4::new(3.0, 2.0, 2.0, 1.0));
    }

    #[test]
    fn rotation_matches_glam_axis_angle() {
        let axis = Vec3::new(0.2, -0.7, 0.4);
        let ours = M::from_rotation(axis, 50.0);
        let g_axis = glam::Vec3::new(axis.x, axis.y, axis.z).normalize();
        let theirs = glam::Mat4::from_axis_angle(g_axis, 50.0_f32.to_radians());
        for (a, b) in ours.data_col_major().iter().zip(theirs.to_cols_array()) {
            assert!((a - b).abs() < 1e-5, "{a} vs {b}");
        }
    }

    fn dense_f64() -> impl Strategy<Value = Mat4<f64>> {
        prop::array::uniform4(prop::array::uniform4(-10.0_f64..10.0)).prop_map(Mat4::from_rows)
    }

    proptest! {
        #[test]
        fn inverse_times_self_is_identity_for_any_invertible(m in dense_f64()) {
            prop_assume!(m.determinant().abs() > 0.1);
            let inv = m.inverse().unwrap();
            let product = inv * m;
            for (i, row) in product.m.iter().enumerate() {
                for (j, v) in row.iter().enumerate() {
                    let expected = if i == j { 1.0 } else { 0.0 };
                    prop_assert!((v - expected).abs() < 1e-6, "[{i}][{j}] = {v}");
                }
            }
        }

        #[test]
        fn double_transpose_is_identity_map(m in dense_f64()) {
            prop_assert_eq!(m.transposed().transposed(), m);
        }
    }
}
