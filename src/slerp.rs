//! Spherical linear interpolation along the shortest great-circle arc.
//!
//! [`slerp`] is the stateless entry point. When many samples are needed
//! between the same two endpoints (animation curves, intermediate frames),
//! build a [`Slerp`] once and query it at varying fractions — the arccos
//! and endpoint sign fix are paid a single time.

use crate::float::Real;
use crate::quat::Quat;

use alloc::vec::Vec;

/// Above this dot product the endpoints are near-parallel and the sine in
/// the closed form is numerically unstable; fall back to normalized lerp.
const DOT_THRESHOLD: f32 = 0.9995;

/// Precomputed interpolation state between two fixed endpoints.
///
/// The short-path sign convention is applied once at construction: if the
/// endpoints lie in opposite hemispheres, the stored `q1` is negated so
/// every query takes the geodesic of minimal angular distance. The state
/// is a snapshot — rebuild it if either endpoint changes.
#[derive(Copy, Clone, Debug)]
pub struct Slerp {
    q0: Quat,
    q1: Quat,
    dot: f32,
    theta_0: f32,
    sin_theta_0: f32,
}

impl Slerp {
    /// Snapshot the interpolation state for the arc from `q0` to `q1`.
    pub fn new(q0: Quat, q1: Quat) -> Self {
        let mut dot = q0.dot(q1);
        let mut q1 = q1;
        if dot < 0.0 {
            q1 = -q1;
            dot = -dot;
        }
        let theta_0 = dot.clamp(-1.0, 1.0).acos();
        Slerp { q0, q1, dot, theta_0, sin_theta_0: theta_0.sin() }
    }

    /// The point at fraction `alpha` along the arc. `alpha` outside [0, 1]
    /// extrapolates, which the spring relies on when it overshoots.
    pub fn at(&self, alpha: f32) -> Quat {
        if self.dot > DOT_THRESHOLD {
            // Near-parallel endpoints: lerp then renormalize.
            return (self.q0 * (1.0 - alpha) + self.q1 * alpha).normalize();
        }
        let s0 = ((1.0 - alpha) * self.theta_0).sin() / self.sin_theta_0;
        let s1 = (alpha * self.theta_0).sin() / self.sin_theta_0;
        self.q0 * s0 + self.q1 * s1
    }
}

/// Interpolate at fraction `alpha` along the shortest arc from `q0` to
/// `q1`. Equivalent to `Slerp::new(q0, q1).at(alpha)`.
pub fn slerp(q0: Quat, q1: Quat, alpha: f32) -> Quat {
    Slerp::new(q0, q1).at(alpha)
}

/// [`slerp`] with `q0` fixed to the identity — skips the full dot product
/// and one of the endpoint scalings.
pub fn slerp_identity(q1: Quat, alpha: f32) -> Quat {
    let mut dot = q1.w;
    let mut q1 = q1;
    if dot < 0.0 {
        q1 = -q1;
        dot = -dot;
    }
    if dot > DOT_THRESHOLD {
        return (Quat::IDENTITY * (1.0 - alpha) + q1 * alpha).normalize();
    }
    let theta_0 = dot.clamp(-1.0, 1.0).acos();
    let sin_theta_0 = theta_0.sin();
    let s0 = ((1.0 - alpha) * theta_0).sin() / sin_theta_0;
    let s1 = (alpha * theta_0).sin() / sin_theta_0;
    Quat::new(q1.x * s1, q1.y * s1, q1.z * s1, s0 + q1.w * s1)
}

/// Number of quaternions [`intermediates`] will produce for `count` interior
/// points.
pub fn intermediates_count(count: usize, include_endpoints: bool) -> usize {
    if include_endpoints {
        count + 2
    } else {
        count
    }
}

/// `count` evenly spaced rotations strictly between `q0` and `q1`,
/// optionally bracketed by the endpoints themselves. All samples share one
/// precomputed [`Slerp`] state.
pub fn intermediates(q0: Quat, q1: Quat, count: usize, include_endpoints: bool) -> Vec<Quat> {
    let state = Slerp::new(q0, q1);
    let mut out = Vec::with_capacity(intermediates_count(count, include_endpoints));
    let step = 1.0 / (count as f32 + 1.0);

    if include_endpoints {
        out.push(q0);
    }
    for i in 1..=count {
        out.push(state.at(i as f32 * step));
    }
    if include_endpoints {
        out.push(state.at(1.0));
    }
    out
}
