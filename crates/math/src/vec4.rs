use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::{Scalar, Vec3};

/// Four-component vector in homogeneous coordinates.
///
/// `w` defaults to 1 so a default-constructed value is the origin point,
/// not a direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec4<S> {
    pub x: S,
    pub y: S,
    pub z: S,
    pub w: S,
}

impl<S: Scalar> Default for Vec4<S> {
    fn default() -> Self {
        Self::new(S::zero(), S::zero(), S::zero(), S::one())
    }
}

impl<S: Scalar> Vec4<S> {
    pub const fn new(x: S, y: S, z: S, w: S) -> Self {
        Self { x, y, z, w }
    }

    /// Point (`w = 1`) at the given position.
    pub fn point(v: Vec3<S>) -> Self {
        Self::new(v.x, v.y, v.z, S::one())
    }

    /// Direction (`w = 0`), unaffected by translation.
    pub fn direction(v: Vec3<S>) -> Self {
        Self::new(v.x, v.y, v.z, S::zero())
    }

    pub fn set(&mut self, x: S, y: S, z: S, w: S) {
        self.x = x;
        self.y = y;
        self.z = z;
        self.w = w;
    }

    /// Adds `a * k` to each component: `self += a * k`.
    pub fn increment(&mut self, a: Self, k: S) {
        self.x = self.x + a.x * k;
        self.y = self.y + a.y * k;
        self.z = self.z + a.z * k;
        self.w = self.w + a.w * k;
    }

    pub fn dot(a: Self, b: Self) -> S {
        a.x * b.x + a.y * b.y + a.z * b.z + a.w * b.w
    }

    /// Divides all four components by the length; no-op on the zero vector.
    pub fn normalize(&mut self) {
        let len_sq = self.length_squared();
        if len_sq == S::zero() {
            return;
        }
        let len = len_sq.sqrt();
        self.x = self.x / len;
        self.y = self.y / len;
        self.z = self.z / len;
        self.w = self.w / len;
    }

    pub fn negate(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
        self.w = -self.w;
    }

    pub fn length_squared(&self) -> S {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Exact component-wise equality, no tolerance.
    pub fn compare(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z && self.w == other.w
    }

    /// Drops `w`.
    pub fn xyz(self) -> Vec3<S> {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn to_array(self) -> [S; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl<S: Scalar> From<[S; 4]> for Vec4<S> {
    fn from(a: [S; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

impl<S: Scalar> Add for Vec4<S> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

impl<S: Scalar> Sub for Vec4<S> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}

impl<S: Scalar> Mul<S> for Vec4<S> {
    type Output = Self;

    fn mul(self, k: S) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k, self.w * k)
    }
}

impl<S: Scalar> Neg for Vec4<S> {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.negate();
        self
    }
}

impl<S: fmt::Display> fmt::Display for Vec4<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.*}, {:.*}, {:.*}, {:.*})", p, self.x, p, self.y, p, self.z, p, self.w),
            None => write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w),
        }
    }
}
