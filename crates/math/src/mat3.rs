use core::fmt;
use core::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::rotation::rodrigues;
use crate::{MathError, Scalar, Vec3};

/// Row-major 3x3 matrix, `m[row][col]`. Defaults to the identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mat3<S> {
    pub m: [[S; 3]; 3],
}

impl<S: Scalar> Default for Mat3<S> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<S: Scalar> Mat3<S> {
    pub fn identity() -> Self {
        let mut out = Self::zero();
        out.set_identity();
        out
    }

    pub fn zero() -> Self {
        Self {
            m: [[S::zero(); 3]; 3],
        }
    }

    pub const fn from_rows(m: [[S; 3]; 3]) -> Self {
        Self { m }
    }

    /// Rodrigues rotation about `axis` by `angle` degrees.
    pub fn from_rotation(axis: Vec3<S>, angle: S) -> Self {
        Self::from_rows(rodrigues(axis, angle))
    }

    pub fn set_identity(&mut self) {
        for (i, row) in self.m.iter_mut().enumerate() {
            for (j, v) in row.iter_mut().enumerate() {
                *v = if i == j { S::one() } else { S::zero() };
            }
        }
    }

    pub fn set_zero(&mut self) {
        self.m = [[S::zero(); 3]; 3];
    }

    pub fn set_row(&mut self, index: usize, row: [S; 3]) {
        self.m[index] = row;
    }

    pub fn set_row_vec(&mut self, index: usize, v: Vec3<S>) {
        self.set_row(index, v.to_array());
    }

    pub fn set_col(&mut self, index: usize, col: [S; 3]) {
        for (row, v) in self.m.iter_mut().zip(col) {
            row[index] = v;
        }
    }

    pub fn set_col_vec(&mut self, index: usize, v: Vec3<S>) {
        self.set_col(index, v.to_array());
    }

    pub fn row(&self, index: usize) -> Vec3<S> {
        Vec3::from(self.m[index])
    }

    pub fn col(&self, index: usize) -> Vec3<S> {
        Vec3::new(self.m[0][index], self.m[1][index], self.m[2][index])
    }

    /// Cofactor expansion along the first row.
    pub fn determinant(&self) -> S {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[2][1] * m[1][2])
            - m[0][1] * (m[1][0] * m[2][2] - m[2][0] * m[1][2])
            + m[0][2] * (m[1][0] * m[2][1] - m[2][0] * m[1][1])
    }

    /// Transposes in place.
    pub fn transpose(&mut self) {
        for i in 0..3 {
            for j in (i + 1)..3 {
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

    /// Adjugate over determinant.
    ///
    /// The adjugate's rows are the cross products of the column triples
    /// `c1×c2`, `c2×c0`, `c0×c1`. Fails with [`MathError::Singular`] when
    /// the determinant is exactly zero.
    pub fn inverse(&self) -> Result<Self, MathError> {
        let det = self.determinant();
        if det == S::zero() {
            tracing::trace!("3x3 inverse requested for singular matrix");
            return Err(MathError::Singular);
        }

        let c0 = self.col(0);
        let c1 = self.col(1);
        let c2 = self.col(2);

        let adjugate = Self::from_rows([
            Vec3::cross(c1, c2).to_array(),
            Vec3::cross(c2, c0).to_array(),
            Vec3::cross(c0, c1).to_array(),
        ]);

        Ok(adjugate * (S::one() / det))
    }

    /// Rotates by `angle` degrees about `axis`: `self = R * self`.
    pub fn rotate(&mut self, axis: Vec3<S>, angle: S) {
        *self = Self::from_rotation(axis, angle) * *self;
    }

    /// Three successive single-axis rotations, X then Y then Z.
    ///
    /// Each component of `axis` selects the weight of its own axis and the
    /// matching component of `angles` is the angle in degrees.
    pub fn rotate_axes(&mut self, axis: Vec3<S>, angles: Vec3<S>) {
        let zero = S::zero();
        self.rotate(Vec3::new(axis.x, zero, zero), angles.x);
        self.rotate(Vec3::new(zero, axis.y, zero), angles.y);
        self.rotate(Vec3::new(zero, zero, axis.z), angles.z);
    }
}

impl<S: Scalar> Add for Mat3<S> {
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

impl<S: Scalar> Sub for Mat3<S> {
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

impl<S: Scalar> Mul<S> for Mat3<S> {
    type Output = Self;

    fn mul(mut self, k: S) -> Self {
        for v in self.m.iter_mut().flatten() {
            *v = *v * k;
        }
        self
    }
}

impl<S: Scalar> Mul for Mat3<S> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (&self.m, &rhs.m);
        let mut out = Self::zero();
        for i in 0..3 {
            for j in 0..3 {
                out.m[i][j] = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
            }
        }
        out
    }
}

impl<S: Scalar> Mul<Vec3<S>> for Mat3<S> {
    type Output = Vec3<S>;

    fn mul(self, v: Vec3<S>) -> Vec3<S> {
        Vec3::new(
            Vec3::dot(self.row(0), v),
            Vec3::dot(self.row(1), v),
            Vec3::dot(self.row(2), v),
        )
    }
}

impl<S: fmt::Display> fmt::Display for Mat3<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.m {
            writeln!(f, "[{}, {}, {}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}
