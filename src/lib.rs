//! Closed-form rotational interpolation and quaternion springs for games.
//!
//! `swivel` animates orientations toward moving targets with
//! physically-plausible overshoot and damping, solved analytically rather
//! than stepped with a numeric integrator. Designed for game use: camera
//! smoothing, turret tracking, procedural look-at, UI juice in 3D.
//!
//! # Features
//!
//! - **Quaternion spring**: Closed-form damped oscillator on the rotation
//!   manifold (critically/under/over-damped), exact at any frame rate
//! - **Slerp**: Shortest-arc interpolation with a reusable precomputed
//!   state for repeated sampling between fixed endpoints
//! - **Exp/log maps & euler vectors**: Move freely between quaternion
//!   space and the linear tangent space driving velocity feedback
//! - **Injected clock**: No built-in time source; drive springs from your
//!   own frame clock via the [`Clock`] trait
//! - **`no_std` compatible**: `libm`-backed math, works in embedded and
//!   WASM environments
//!
//! # Example
//!
//! ```
//! use swivel::{ManualClock, Quat, QuaternionSpring, Vec3};
//! use core::f32::consts::FRAC_PI_2;
//!
//! let clock = ManualClock::new(0.0);
//! let mut spring = QuaternionSpring::new(Quat::IDENTITY, 1.0, 5.0, &clock);
//!
//! spring.set_target(Quat::from_axis_angle(Vec3::Z_AXIS, FRAC_PI_2));
//! clock.advance(1.0);
//! let (position, _velocity) = spring.evaluate();
//! assert!(position.angle_to(spring.target()) < 0.1);
//! ```

#![no_std]

extern crate alloc;

pub mod clock;
pub mod error;
pub mod float;
pub mod quat;
pub mod slerp;
pub mod spring;
pub mod vec3;

// Re-export primary API
pub use clock::{Clock, ManualClock};
pub use error::SpringError;
pub use float::Real;
pub use quat::Quat;
pub use slerp::{intermediates, intermediates_count, slerp, slerp_identity, Slerp};
pub use spring::{QuaternionSpring, Response};
pub use vec3::Vec3;
