//! Analytic spring-damper for unit quaternions.
//!
//! [`QuaternionSpring`] animates an orientation toward a moving target with
//! tunable overshoot, using the exact closed-form response of a damped
//! harmonic oscillator instead of per-frame numeric integration. The
//! trajectory is therefore stable at any frame rate, including huge time
//! steps after a pause, and never diverges for damping >= 0.
//!
//! The oscillator lives in the quaternion's tangent space: displacement is
//! the euler vector of the minimal rotation from position to target, and
//! velocity is an angular velocity vector in the same space. Position
//! updates reproject onto the unit hypersphere through slerp.

use crate::clock::Clock;
use crate::error::SpringError;
use crate::float::Real;
use crate::quat::Quat;
use crate::slerp::slerp;
use crate::vec3::Vec3;

/// Homogeneous response coefficients of the damped oscillator
/// `x'' + 2ζx' + x = 0` at scaled elapsed time `dt = ω₀·Δt`.
///
/// `sin_theta` and `cos_theta` generalize the damped sine/cosine basis
/// across all three regimes; `ang_freq` is the (scaled) oscillation
/// frequency, fixed at 1 for the critical case.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Response {
    pub sin_theta: f32,
    pub cos_theta: f32,
    pub ang_freq: f32,
}

impl Response {
    /// Solve the regime selected by `damping²` versus 1.
    ///
    /// Negative `dt` evaluates the response backward in time, which is
    /// well defined for the analytic solution.
    pub fn solve(damping: f32, dt: f32) -> Self {
        let damping_sq = damping * damping;

        if damping_sq < 1.0 {
            // Underdamped: decaying oscillation.
            let ang_freq = (1.0 - damping_sq).sqrt();
            let exponential = (-damping * dt).exp() / ang_freq;
            let (sin, cos) = (ang_freq * dt).sin_cos();
            Response {
                sin_theta: exponential * sin,
                cos_theta: exponential * cos,
                ang_freq,
            }
        } else if damping_sq > 1.0 {
            // Overdamped: sum of two decaying exponentials.
            let ang_freq = (damping_sq - 1.0).sqrt();
            let k = 1.0 / (2.0 * ang_freq);
            let u = ((-damping + ang_freq) * dt).exp() * k;
            let v = ((-damping - ang_freq) * dt).exp() * k;
            Response {
                sin_theta: u - v,
                cos_theta: u + v,
                ang_freq,
            }
        } else {
            // Critically damped: repeated root, polynomial-times-exponential.
            let exponential = (-damping * dt).exp();
            Response {
                sin_theta: exponential * dt,
                cos_theta: exponential,
                ang_freq: 1.0,
            }
        }
    }

    /// Fraction of the settling toward the target achieved by this
    /// response — the oscillator's unit step response.
    pub fn pull(&self, damping: f32) -> f32 {
        1.0 - (self.ang_freq * self.cos_theta + damping * self.sin_theta)
    }

    /// Decay factor applied to the existing velocity.
    pub fn decay(&self, damping: f32) -> f32 {
        self.ang_freq * self.cos_theta - damping * self.sin_theta
    }
}

/// A critically-tunable analytic spring-damper for orientations.
///
/// The published `position` and `velocity` are stale snapshots: the true
/// state at the current wall-clock time only exists after a call to
/// [`evaluate`](QuaternionSpring::evaluate). Every mutator first re-runs
/// the solver up to "now" under the parameters in effect *before* the
/// change, so adjusting damping or speed mid-flight freezes the trajectory
/// instead of discarding accumulated motion.
///
/// Rotation state is single precision; only time is `f64`. The injected
/// [`Clock`] is trusted to be monotonic under normal operation.
pub struct QuaternionSpring<C: Clock> {
    position: Quat,
    target: Quat,
    initial: Quat,
    velocity: Vec3,
    damping: f32,
    speed: f32,
    clock: C,
    time: f64,
}

impl<C: Clock> QuaternionSpring<C> {
    /// Create a spring at rest at `initial` (used as position, target, and
    /// the rollback value for [`reset`](QuaternionSpring::reset)).
    ///
    /// Preconditions: `damping >= 0`, `speed > 0`, `initial` unit length.
    /// Violations are undefined behavior of the solver, not runtime
    /// errors; use [`try_new`](QuaternionSpring::try_new) to validate.
    pub fn new(initial: Quat, damping: f32, speed: f32, mut clock: C) -> Self {
        debug_assert!(damping >= 0.0, "damping ratio must be >= 0");
        debug_assert!(speed > 0.0, "speed must be > 0");
        let time = clock.now();
        QuaternionSpring {
            position: initial,
            target: initial,
            initial,
            velocity: Vec3::ZERO,
            damping,
            speed,
            clock,
            time,
        }
    }

    /// Validated constructor.
    pub fn try_new(
        initial: Quat,
        damping: f32,
        speed: f32,
        clock: C,
    ) -> Result<Self, SpringError> {
        if !(damping >= 0.0) || !damping.is_finite() {
            return Err(SpringError::InvalidDamping);
        }
        if !(speed > 0.0) || !speed.is_finite() {
            return Err(SpringError::InvalidSpeed);
        }
        let mag = initial.magnitude();
        if !mag.is_finite() || mag.is_near_zero(1e-6) {
            return Err(SpringError::NonFiniteOrientation);
        }
        Ok(Self::new(initial, damping, speed, clock))
    }

    /// Last published position. Stale until the next
    /// [`evaluate`](QuaternionSpring::evaluate).
    pub fn position(&self) -> Quat {
        self.position
    }

    /// Last published angular velocity (tangent space, radians per
    /// second). Stale until the next [`evaluate`](QuaternionSpring::evaluate).
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Current target orientation.
    pub fn target(&self) -> Quat {
        self.target
    }

    /// Current damping ratio.
    pub fn damping(&self) -> f32 {
        self.damping
    }

    /// Current speed (natural frequency scale).
    pub fn speed(&self) -> f32 {
        self.speed
    }

    fn response_at(&self, now: f64) -> Response {
        let dt = self.speed * (now - self.time) as f32;
        Response::solve(self.damping, dt)
    }

    fn position_from(&self, r: &Response) -> Quat {
        let pull = r.pull(self.damping);
        let vel_dt = r.sin_theta / self.speed;
        slerp(self.position, self.target, pull).integrate(self.velocity, vel_dt)
    }

    fn velocity_from(&self, r: &Response) -> Vec3 {
        let push_rate = self.speed * r.sin_theta;
        let displacement = self.position.difference(self.target).to_euler_vector();
        displacement * push_rate + self.velocity * r.decay(self.damping)
    }

    /// Recompute position and velocity at the clock's current time,
    /// publish both, and advance the internal timestamp.
    pub fn evaluate(&mut self) -> (Quat, Vec3) {
        let now = self.clock.now();
        let r = self.response_at(now);
        let position = self.position_from(&r);
        let velocity = self.velocity_from(&r);
        self.position = position;
        self.velocity = velocity;
        self.time = now;
        (position, velocity)
    }

    /// Teleport the orientation. Velocity is caught up to "now" first so
    /// residual momentum survives the jump.
    pub fn set_position(&mut self, position: Quat) {
        let now = self.clock.now();
        let r = self.response_at(now);
        self.velocity = self.velocity_from(&r);
        self.position = position;
        self.time = now;
    }

    /// Retarget the spring. The in-flight trajectory up to "now" is frozen
    /// under the old target before the new one takes effect.
    pub fn set_target(&mut self, target: Quat) {
        let now = self.clock.now();
        let r = self.response_at(now);
        self.position = self.position_from(&r);
        self.velocity = self.velocity_from(&r);
        self.target = target;
        self.time = now;
    }

    /// Replace the angular velocity. Position is caught up to "now" first.
    pub fn set_velocity(&mut self, velocity: Vec3) {
        let now = self.clock.now();
        let r = self.response_at(now);
        self.position = self.position_from(&r);
        self.velocity = velocity;
        self.time = now;
    }

    /// Change the damping ratio without disturbing accumulated motion.
    pub fn set_damping(&mut self, damping: f32) {
        debug_assert!(damping >= 0.0, "damping ratio must be >= 0");
        let now = self.clock.now();
        let r = self.response_at(now);
        self.position = self.position_from(&r);
        self.velocity = self.velocity_from(&r);
        self.damping = damping;
        self.time = now;
    }

    /// Change the speed without disturbing accumulated motion.
    pub fn set_speed(&mut self, speed: f32) {
        debug_assert!(speed > 0.0, "speed must be > 0");
        let now = self.clock.now();
        let r = self.response_at(now);
        self.position = self.position_from(&r);
        self.velocity = self.velocity_from(&r);
        self.speed = speed;
        self.time = now;
    }

    /// Swap the clock source. The trajectory is caught up under the old
    /// clock, then the timestamp re-anchors to the new clock's own "now"
    /// since the time base may have shifted.
    pub fn set_clock(&mut self, mut clock: C) {
        let now = self.clock.now();
        let r = self.response_at(now);
        self.position = self.position_from(&r);
        self.velocity = self.velocity_from(&r);
        self.time = clock.now();
        self.clock = clock;
    }

    /// Hard snap: position, target, and the rollback value all become
    /// `target` (or the previously recorded initial orientation when
    /// `None`), and velocity zeroes. Bypasses the solver — this is a
    /// deliberate discontinuity.
    pub fn reset(&mut self, target: Option<Quat>) {
        let target = target.unwrap_or(self.initial);
        self.initial = target;
        self.position = target;
        self.target = target;
        self.velocity = Vec3::ZERO;
    }

    /// Instantaneous velocity kick, accounted for at the next evaluation.
    /// Does not consult the clock.
    pub fn impulse(&mut self, delta: Vec3) {
        self.velocity = self.velocity + delta;
    }

    /// Evaluate as if `delta` more seconds had elapsed, publishing that
    /// future state, but keep the timestamp at the real "now". The clock
    /// is not committed forward — the preview is re-derived (and drifts
    /// back) on the next evaluation.
    pub fn time_skip(&mut self, delta: f64) {
        let now = self.clock.now();
        let dt = self.speed * (now + delta - self.time) as f32;
        let r = Response::solve(self.damping, dt);
        self.position = self.position_from(&r);
        self.velocity = self.velocity_from(&r);
        self.time = now;
    }
}
