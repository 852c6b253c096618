//! Error type for spring construction.

use core::fmt;

/// Errors reported by [`QuaternionSpring::try_new`](crate::QuaternionSpring::try_new).
///
/// The math paths themselves are total functions with documented fallback
/// policies; only parameter validation can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpringError {
    /// Damping ratio must be finite and >= 0.
    InvalidDamping,
    /// Speed (natural frequency scale) must be finite and > 0.
    InvalidSpeed,
    /// Initial orientation must have finite, non-zero magnitude.
    NonFiniteOrientation,
}

impl fmt::Display for SpringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpringError::InvalidDamping => write!(f, "damping ratio must be finite and >= 0"),
            SpringError::InvalidSpeed => write!(f, "speed must be finite and positive"),
            SpringError::NonFiniteOrientation => {
                write!(f, "initial orientation must have finite, non-zero magnitude")
            }
        }
    }
}
