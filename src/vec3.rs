//! 3-component vector used for angular velocity and euler vectors.

use crate::float::Real;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// 3D vector of `f32` components.
///
/// In this crate a `Vec3` is almost always a tangent-space quantity: an
/// angular velocity in radians per second, or an euler vector (rotation
/// axis scaled by the rotation angle).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };
    /// All components one.
    pub const ONE: Vec3 = Vec3 { x: 1.0, y: 1.0, z: 1.0 };
    /// Unit X axis.
    pub const X_AXIS: Vec3 = Vec3 { x: 1.0, y: 0.0, z: 0.0 };
    /// Unit Y axis.
    pub const Y_AXIS: Vec3 = Vec3 { x: 0.0, y: 1.0, z: 0.0 };
    /// Unit Z axis.
    pub const Z_AXIS: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 1.0 };

    /// Create a new 3D vector.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vec3 { x, y, z }
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product.
    pub fn cross(self, other: Self) -> Self {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Squared magnitude (avoids sqrt).
    pub fn magnitude_sq(self) -> f32 {
        self.dot(self)
    }

    /// Magnitude (length).
    pub fn magnitude(self) -> f32 {
        self.magnitude_sq().sqrt()
    }

    /// Normalize to unit length. Returns the zero vector if the magnitude
    /// is near zero.
    pub fn normalize(self) -> Self {
        let mag = self.magnitude();
        if mag.is_near_zero(1e-10) {
            Vec3::ZERO
        } else {
            self / mag
        }
    }

    /// Normalize to unit length, falling back to `default` when the
    /// magnitude is below `epsilon`.
    pub fn normalize_or(self, epsilon: f32, default: Vec3) -> Self {
        let mag = self.magnitude();
        if mag >= epsilon {
            self / mag
        } else {
            default
        }
    }

    /// Linear interpolation between self and other.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec3 { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3 { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Vec3 { x: -self.x, y: -self.y, z: -self.z }
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, s: f32) -> Self {
        Vec3 { x: self.x * s, y: self.y * s, z: self.z * s }
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;
    fn div(self, s: f32) -> Self {
        Vec3 { x: self.x / s, y: self.y / s, z: self.z / s }
    }
}
