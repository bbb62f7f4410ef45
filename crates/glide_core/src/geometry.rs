//! Geometry primitives for gesture tracking
//!
//! Points carry a timestamp so that velocity can be derived from any two
//! samples. Vectors are untimed displacements or velocities.

use serde::{Deserialize, Serialize};

/// A sampled pointer position
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GesturePoint {
    pub x: f64,
    pub y: f64,
    /// Monotonic milliseconds
    pub time: f64,
}

impl GesturePoint {
    pub const fn new(x: f64, y: f64, time: f64) -> Self {
        Self { x, y, time }
    }
}

/// A displacement (units) or velocity (units/ms)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GestureVector {
    pub x: f64,
    pub y: f64,
}

impl GestureVector {
    pub const ZERO: GestureVector = GestureVector { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Displacement from `from` to `to`
    pub fn between(from: &GesturePoint, to: &GesturePoint) -> Self {
        Self::new(to.x - from.x, to.y - from.y)
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Divide both components, flooring the divisor at 1 to avoid a
    /// division by zero on coincident timestamps.
    pub fn per_ms(&self, elapsed_ms: f64) -> Self {
        let dt = elapsed_ms.max(1.0);
        Self::new(self.x / dt, self.y / dt)
    }
}

/// A single screen axis
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

/// Axis restriction applied to a gesture
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisConstraint {
    X,
    Y,
    /// Free movement on both axes
    #[default]
    Both,
}

impl AxisConstraint {
    /// The single axis this constraint pins to, if any
    pub fn axis(self) -> Option<Axis> {
        match self {
            AxisConstraint::X => Some(Axis::X),
            AxisConstraint::Y => Some(Axis::Y),
            AxisConstraint::Both => None,
        }
    }
}

impl From<Axis> for AxisConstraint {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::X => AxisConstraint::X,
            Axis::Y => AxisConstraint::Y,
        }
    }
}

/// Euclidean distance between two samples (time is ignored)
pub fn distance(a: &GesturePoint, b: &GesturePoint) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Midpoint of two samples, stamped with the later of the two times
pub fn midpoint(a: &GesturePoint, b: &GesturePoint) -> GesturePoint {
    GesturePoint::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0, a.time.max(b.time))
}

/// Zero out the component orthogonal to `axis`
pub fn project(vector: GestureVector, axis: Option<Axis>) -> GestureVector {
    match axis {
        Some(Axis::X) => GestureVector::new(vector.x, 0.0),
        Some(Axis::Y) => GestureVector::new(0.0, vector.y),
        None => vector,
    }
}

/// Clamp `value` into `[min, max]`. NaN resolves to `min`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return min;
    }
    value.max(min).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_and_midpoint() {
        let a = GesturePoint::new(0.0, 0.0, 10.0);
        let b = GesturePoint::new(3.0, 4.0, 25.0);

        assert_eq!(distance(&a, &b), 5.0);

        let mid = midpoint(&a, &b);
        assert_eq!(mid.x, 1.5);
        assert_eq!(mid.y, 2.0);
        assert_eq!(mid.time, 25.0);
    }

    #[test]
    fn test_project() {
        let v = GestureVector::new(3.0, -2.0);
        assert_eq!(project(v, Some(Axis::X)), GestureVector::new(3.0, 0.0));
        assert_eq!(project(v, Some(Axis::Y)), GestureVector::new(0.0, -2.0));
        assert_eq!(project(v, None), v);
    }

    #[test]
    fn test_per_ms_floors_elapsed_time() {
        let v = GestureVector::new(10.0, 4.0);
        assert_eq!(v.per_ms(0.0), v);
        assert_eq!(v.per_ms(-5.0), v);
        assert_eq!(v.per_ms(2.0), GestureVector::new(5.0, 2.0));
    }

    #[test]
    fn test_clamp_handles_nan() {
        assert_eq!(clamp(f64::NAN, 1.0, 2.0), 1.0);
        assert_eq!(clamp(5.0, 1.0, 2.0), 2.0);
        assert_eq!(clamp(-5.0, 1.0, 2.0), 1.0);
        assert_eq!(clamp(f64::INFINITY, 0.0, 3.0), 3.0);
    }
}
