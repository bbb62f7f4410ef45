//! Glide Core
//!
//! Foundational types shared by the gesture recognizers and motion resolvers:
//!
//! - **Geometry**: timed points, vectors, distance/midpoint/projection helpers
//! - **Pointer input**: a minimal `PointerLikeEvent` shape with defaulted id and time
//! - **Clock**: monotonic milliseconds for events without a timestamp
//! - **Errors**: the configuration-boundary error type
//!
//! # Example
//!
//! ```rust
//! use glide_core::{distance, PointerLikeEvent};
//!
//! let a = PointerLikeEvent::new(0.0, 0.0).with_time_stamp(0.0).to_point();
//! let b = PointerLikeEvent::new(3.0, 4.0).with_time_stamp(16.0).to_point();
//! assert_eq!(distance(&a, &b), 5.0);
//! ```

pub mod clock;
pub mod error;
pub mod geometry;
pub mod pointer;

pub use error::{ConfigError, Result};
pub use geometry::{
    clamp, distance, midpoint, project, Axis, AxisConstraint, GesturePoint, GestureVector,
};
pub use pointer::{PointerLikeEvent, DEFAULT_POINTER_ID};
