//! Clock injection for the spring's time base.

use core::cell::Cell;

/// Source of monotonic time in seconds.
///
/// The spring calls `now` at least once per mutating operation and trusts
/// the values to be non-decreasing. A clock that steps backward is not an
/// error — the closed-form solver evaluates backward — but callers should
/// not rely on that.
pub trait Clock {
    /// Current time in seconds.
    fn now(&mut self) -> f64;
}

/// A clock driven explicitly by the caller.
///
/// Uses interior mutability so the owner can keep advancing it while a
/// spring holds it by reference:
///
/// ```
/// use swivel::{ManualClock, Quat, QuaternionSpring};
///
/// let clock = ManualClock::new(0.0);
/// let mut spring = QuaternionSpring::new(Quat::IDENTITY, 1.0, 5.0, &clock);
/// clock.advance(1.0 / 60.0);
/// let (position, _velocity) = spring.evaluate();
/// # let _ = position;
/// ```
#[derive(Debug, Default)]
pub struct ManualClock {
    time: Cell<f64>,
}

impl ManualClock {
    /// Create a clock reading `time` seconds.
    pub fn new(time: f64) -> Self {
        ManualClock { time: Cell::new(time) }
    }

    /// Set the absolute time.
    pub fn set(&self, time: f64) {
        self.time.set(time);
    }

    /// Advance the time by `delta` seconds.
    pub fn advance(&self, delta: f64) {
        self.time.set(self.time.get() + delta);
    }

    /// Read the time without going through the `Clock` trait.
    pub fn time(&self) -> f64 {
        self.time.get()
    }
}

impl Clock for ManualClock {
    fn now(&mut self) -> f64 {
        self.time.get()
    }
}

impl Clock for &ManualClock {
    fn now(&mut self) -> f64 {
        self.time.get()
    }
}
