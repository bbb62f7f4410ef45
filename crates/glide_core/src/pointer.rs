//! Pointer input shape
//!
//! Recognizers accept anything that can be described as a position with an
//! optional pointer id and timestamp. Single-pointer callers can omit both.

use serde::{Deserialize, Serialize};

use crate::clock;
use crate::geometry::GesturePoint;

/// Pointer id assumed when an event does not carry one
pub const DEFAULT_POINTER_ID: i32 = 0;

/// The only input type the recognizers consume
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerLikeEvent {
    pub client_x: f64,
    pub client_y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pointer_id: Option<i32>,
    /// Monotonic milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_stamp: Option<f64>,
}

impl PointerLikeEvent {
    /// Create an event without pointer id or timestamp
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self {
            client_x,
            client_y,
            pointer_id: None,
            time_stamp: None,
        }
    }

    /// Set the pointer id
    pub fn with_pointer_id(mut self, pointer_id: i32) -> Self {
        self.pointer_id = Some(pointer_id);
        self
    }

    /// Set the event timestamp (milliseconds)
    pub fn with_time_stamp(mut self, time_stamp: f64) -> Self {
        self.time_stamp = Some(time_stamp);
        self
    }

    pub fn pointer_id(&self) -> i32 {
        self.pointer_id.unwrap_or(DEFAULT_POINTER_ID)
    }

    /// Event time, falling back to the process clock
    pub fn time(&self) -> f64 {
        match self.time_stamp {
            Some(t) if t.is_finite() => t,
            _ => clock::now_ms(),
        }
    }

    /// Sample this event as a timed point
    pub fn to_point(&self) -> GesturePoint {
        GesturePoint::new(self.client_x, self.client_y, self.time())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let event = PointerLikeEvent::new(4.0, 8.0);
        assert_eq!(event.pointer_id(), DEFAULT_POINTER_ID);
        assert!(event.time() >= 0.0);
    }

    #[test]
    fn test_explicit_fields() {
        let event = PointerLikeEvent::new(4.0, 8.0)
            .with_pointer_id(7)
            .with_time_stamp(120.0);
        let point = event.to_point();

        assert_eq!(event.pointer_id(), 7);
        assert_eq!(point, GesturePoint::new(4.0, 8.0, 120.0));
    }

    #[test]
    fn test_deserialize_partial_event() {
        let event: PointerLikeEvent = toml::from_str("clientX = 1.5\nclientY = 2.0").unwrap();
        assert_eq!(event.pointer_id, None);
        assert_eq!(event.time_stamp, None);
        assert_eq!(event.client_x, 1.5);
    }
}
