//! `no_std` floating-point shims backed by `libm`.

/// Extension trait providing the transcendental operations the rotation
/// math needs. `core` has none of these, so they route through `libm`.
///
/// Only `f32` implements this: rotation state is single precision by
/// design. Time is the lone `f64` quantity and only ever needs plain
/// arithmetic.
pub trait Real: Copy + PartialOrd {
    /// Square root.
    fn sqrt(self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// Sine.
    fn sin(self) -> Self;
    /// Cosine.
    fn cos(self) -> Self;
    /// Sine and cosine in one call.
    fn sin_cos(self) -> (Self, Self);
    /// Natural exponential (e^self).
    fn exp(self) -> Self;
    /// Natural logarithm.
    fn ln(self) -> Self;
    /// Arccosine.
    fn acos(self) -> Self;
    /// Arctangent of self/x, with correct quadrant.
    fn atan2(self, x: Self) -> Self;
    /// Minimum of two values.
    fn min(self, other: Self) -> Self;
    /// Maximum of two values.
    fn max(self, other: Self) -> Self;

    /// Clamp self to [min, max].
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    /// Check if approximately zero within epsilon.
    fn is_near_zero(self, epsilon: Self) -> bool {
        self.abs() < epsilon
    }
}

impl Real for f32 {
    fn sqrt(self) -> Self { libm::sqrtf(self) }
    fn abs(self) -> Self { libm::fabsf(self) }
    fn sin(self) -> Self { libm::sinf(self) }
    fn cos(self) -> Self { libm::cosf(self) }
    fn sin_cos(self) -> (Self, Self) { libm::sincosf(self) }
    fn exp(self) -> Self { libm::expf(self) }
    fn ln(self) -> Self { libm::logf(self) }
    fn acos(self) -> Self { libm::acosf(self) }
    fn atan2(self, x: Self) -> Self { libm::atan2f(self, x) }
    fn min(self, other: Self) -> Self { if self < other { self } else { other } }
    fn max(self, other: Self) -> Self { if self > other { self } else { other } }
}
