use core::fmt;
use core::ops::{Add, AddAssign, Index, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::Scalar;

/// Three-component vector. Defaults to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3<S> {
    pub x: S,
    pub y: S,
    pub z: S,
}

impl<S: Scalar> Vec3<S> {
    pub const fn new(x: S, y: S, z: S) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::new(S::zero(), S::zero(), S::zero())
    }

    /// Unit vector along +Y, the default camera up.
    pub fn unit_y() -> Self {
        Self::new(S::zero(), S::one(), S::zero())
    }

    pub fn set(&mut self, x: S, y: S, z: S) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Adds `a * k` to each component: `self += a * k`.
    pub fn increment(&mut self, a: Self, k: S) {
        self.x = self.x + a.x * k;
        self.y = self.y + a.y * k;
        self.z = self.z + a.z * k;
    }

    pub fn dot(a: Self, b: Self) -> S {
        a.x * b.x + a.y * b.y + a.z * b.z
    }

    /// Right-handed cross product `a × b`.
    pub fn cross(a: Self, b: Self) -> Self {
        Self::new(
            a.y * b.z - a.z * b.y,
            a.z * b.x - a.x * b.z,
            a.x * b.y - a.y * b.x,
        )
    }

    /// Divides each component by the length.
    ///
    /// Leaves the vector untouched when its squared length is exactly zero.
    pub fn normalize(&mut self) {
        let len_sq = self.length_squared();
        if len_sq == S::zero() {
            return;
        }
        let len = len_sq.sqrt();
        self.x = self.x / len;
        self.y = self.y / len;
        self.z = self.z / len;
    }

    /// Normalized copy, see [`Vec3::normalize`].
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    pub fn negate(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
    }

    pub fn length_squared(&self) -> S {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn length(&self) -> S {
        self.length_squared().sqrt()
    }

    /// Exact component-wise equality, no tolerance.
    pub fn compare(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }

    pub fn to_array(self) -> [S; 3] {
        [self.x, self.y, self.z]
    }
}

impl<S: Scalar> From<[S; 3]> for Vec3<S> {
    fn from(a: [S; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

impl<S: Scalar> Add for Vec3<S> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<S: Scalar> Sub for Vec3<S> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<S: Scalar> Mul<S> for Vec3<S> {
    type Output = Self;

    fn mul(self, k: S) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k)
    }
}

impl<S: Scalar> Neg for Vec3<S> {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.negate();
        self
    }
}

impl<S: Scalar> AddAssign for Vec3<S> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<S: Scalar> SubAssign for Vec3<S> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<S> Index<usize> for Vec3<S> {
    type Output = S;

    fn index(&self, i: usize) -> &S {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of range: {i}"),
        }
    }
}

impl<S: fmt::Display> fmt::Display for Vec3<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.*}, {:.*}, {:.*})", p, self.x, p, self.y, p, self.z),
            None => write!(f, "({}, {}, {})", self.x, self.y, self.z),
        }
    }
}
