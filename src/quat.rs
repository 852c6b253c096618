//! Unit quaternions: construction, algebra, exp/log maps, and the
//! euler-vector bridge.
//!
//! Convention: `q = (x, y, z, w)` where `(x, y, z)` is the imaginary
//! (vector) part and `w` the scalar part. A unit quaternion represents a
//! rotation; `q` and `-q` represent the same rotation (double cover).
//!
//! Relative rotations use the body-frame convention throughout:
//! `difference(a, b) = a.conjugate() * b`, applied back by multiplying on
//! the right. `integrate` follows the same convention so that spring
//! displacement and velocity terms compose consistently.

use crate::float::Real;
use crate::vec3::Vec3;
use core::f32::consts::TAU;
use core::ops::{Add, Mul, Neg};

/// Angles below this are treated as the identity rotation when building a
/// quaternion from an euler vector internally.
const ANGLE_EPS: f32 = 1e-9;

/// Quaternion of `f32` components.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quat {
    /// The identity rotation.
    pub const IDENTITY: Quat = Quat { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    /// Create a quaternion from raw components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Quat { x, y, z, w }
    }

    /// Rotation of `angle` radians about `axis`. The axis must be unit
    /// length; use [`Quat::from_axis_angle_safe`] when it might not be.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let (s, c) = (angle * 0.5).sin_cos();
        Quat { x: axis.x * s, y: axis.y * s, z: axis.z * s, w: c }
    }

    /// Rotation about an axis that is normalized first. Returns the
    /// identity when the axis magnitude is below `epsilon`.
    pub fn from_axis_angle_safe(axis: Vec3, epsilon: f32, angle: f32) -> Self {
        let mag = axis.magnitude();
        if mag < epsilon {
            Quat::IDENTITY
        } else {
            Quat::from_axis_angle(axis / mag, angle)
        }
    }

    /// Build a rotation from an euler vector: axis = direction of `v`,
    /// angle = `|v|` in radians. Returns the identity when `|v| < epsilon`
    /// (the axis is undefined for a vanishing rotation).
    pub fn from_euler_vector(v: Vec3, epsilon: f32) -> Self {
        let angle = v.magnitude();
        if angle < epsilon {
            Quat::IDENTITY
        } else {
            Quat::from_axis_angle(v / angle, angle)
        }
    }

    /// Uniformly distributed random unit quaternion via Shoemake's subgroup
    /// algorithm, drawing three uniform [0, 1) floats from `uniform`.
    pub fn random<F: FnMut() -> f32>(uniform: &mut F) -> Self {
        let u = uniform();
        let v = uniform();
        let w = uniform();

        let sq_u = u.sqrt();
        let sq_mu = (1.0 - u).sqrt();
        let (sin_v, cos_v) = (TAU * v).sin_cos();
        let (sin_w, cos_w) = (TAU * w).sin_cos();

        Quat {
            x: sq_mu * sin_v,
            y: sq_mu * cos_v,
            z: sq_u * sin_w,
            w: sq_u * cos_w,
        }
    }

    /// The imaginary (vector) part.
    pub fn imaginary(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Four-component dot product.
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Squared magnitude.
    pub fn magnitude_sq(self) -> f32 {
        self.dot(self)
    }

    /// Magnitude.
    pub fn magnitude(self) -> f32 {
        self.magnitude_sq().sqrt()
    }

    /// Normalize to unit length. Returns the identity if the magnitude is
    /// near zero — callers that care must check for degenerate input.
    pub fn normalize(self) -> Self {
        let mag = self.magnitude();
        if mag.is_near_zero(1e-10) {
            Quat::IDENTITY
        } else {
            self * (1.0 / mag)
        }
    }

    /// Conjugate: negated imaginary part. The inverse rotation for unit
    /// quaternions.
    pub fn conjugate(self) -> Self {
        Quat { x: -self.x, y: -self.y, z: -self.z, w: self.w }
    }

    /// Multiplicative inverse, valid for non-unit quaternions.
    pub fn inverse(self) -> Self {
        let mag_sq = self.magnitude_sq();
        self.conjugate() * (1.0 / mag_sq)
    }

    /// The minimal rotation taking `self` onto `other`, expressed in the
    /// body frame: `self * difference = ±other`. The hemisphere of `other`
    /// is corrected first so the result takes the short way around.
    pub fn difference(self, other: Self) -> Self {
        let other = if self.dot(other) < 0.0 { -other } else { other };
        self.conjugate() * other
    }

    /// Quaternion exponential: `e^w * (cos|v| + v̂ sin|v|)` where `v` is
    /// the imaginary part. Maps a pure quaternion holding half-angle·axis
    /// to the corresponding unit rotation.
    pub fn exp(self) -> Self {
        let v = self.imaginary();
        let angle = v.magnitude();
        let scale = self.w.exp();
        if angle.is_near_zero(ANGLE_EPS) {
            // sin(x)/x -> 1
            Quat { x: v.x * scale, y: v.y * scale, z: v.z * scale, w: scale }
        } else {
            let (s, c) = angle.sin_cos();
            let axis = v * (s / angle);
            Quat { x: axis.x * scale, y: axis.y * scale, z: axis.z * scale, w: c * scale }
        }
    }

    /// Quaternion logarithm, inverse of [`Quat::exp`]. For a unit
    /// quaternion the result is pure: half-angle·axis. At ±identity the
    /// axis is undefined and the imaginary part is zero by convention.
    pub fn log(self) -> Self {
        let mag = self.magnitude();
        let v = self.imaginary();
        let v_mag = v.magnitude();
        if v_mag.is_near_zero(ANGLE_EPS) {
            Quat { x: 0.0, y: 0.0, z: 0.0, w: mag.ln() }
        } else {
            let theta = (self.w / mag).clamp(-1.0, 1.0).acos();
            let axis = v * (theta / v_mag);
            Quat { x: axis.x, y: axis.y, z: axis.z, w: mag.ln() }
        }
    }

    /// Fractional power: `pow(q, t)` rotates `t` times as far about the
    /// same axis. `pow(q, 0) = identity`, `pow(q, 1) = q`.
    pub fn pow(self, t: f32) -> Self {
        (self.log() * t).exp()
    }

    /// Euler vector of the rotation: axis scaled by angle, with the angle
    /// recovered as `2·atan2(|v|, w)` in [0, 2π). The zero vector for the
    /// identity rotation.
    pub fn to_euler_vector(self) -> Vec3 {
        let v = self.imaginary();
        let v_mag = v.magnitude();
        if v_mag.is_near_zero(ANGLE_EPS) {
            Vec3::ZERO
        } else {
            let angle = 2.0 * v_mag.atan2(self.w);
            v * (angle / v_mag)
        }
    }

    /// Decompose into (axis, angle). The axis is the zero vector and the
    /// angle zero for the identity rotation.
    pub fn to_axis_angle(self) -> (Vec3, f32) {
        let v = self.imaginary();
        let v_mag = v.magnitude();
        if v_mag.is_near_zero(ANGLE_EPS) {
            (Vec3::ZERO, 0.0)
        } else {
            (v / v_mag, 2.0 * v_mag.atan2(self.w))
        }
    }

    /// Advance the rotation by a body-frame angular velocity `rate`
    /// (radians per second, tangent space) applied for `dt` seconds.
    pub fn integrate(self, rate: Vec3, dt: f32) -> Self {
        self * Quat::from_euler_vector(rate * dt, ANGLE_EPS)
    }

    /// Rotate a vector by this quaternion (assumed unit).
    pub fn rotate(self, v: Vec3) -> Vec3 {
        let im = self.imaginary();
        let t = im.cross(v) * 2.0;
        v + t * self.w + im.cross(t)
    }

    /// Angular distance to another rotation in [0, π], respecting the
    /// double cover (q and -q are the same rotation, distance zero).
    pub fn angle_to(self, other: Self) -> f32 {
        let d = self.dot(other).abs().clamp(0.0, 1.0);
        2.0 * d.acos()
    }

    /// Componentwise approximate equality. Does not identify q with -q;
    /// use [`Quat::angle_to`] to compare rotations.
    pub fn approx_eq(self, other: Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
            && (self.w - other.w).abs() < epsilon
    }
}

impl Mul for Quat {
    type Output = Self;

    /// Hamilton product: `a * b` applies `b` then `a` (or `b` after `a` in
    /// the body frame). Non-commutative.
    fn mul(self, rhs: Self) -> Self {
        Quat {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}

impl Mul<f32> for Quat {
    type Output = Self;
    fn mul(self, s: f32) -> Self {
        Quat { x: self.x * s, y: self.y * s, z: self.z * s, w: self.w * s }
    }
}

impl Add for Quat {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Quat {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            w: self.w + rhs.w,
        }
    }
}

impl Neg for Quat {
    type Output = Self;
    fn neg(self) -> Self {
        Quat { x: -self.x, y: -self.y, z: -self.z, w: -self.w }
    }
}
