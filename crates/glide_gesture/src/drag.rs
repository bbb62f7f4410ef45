//! Drag gesture recognizer
//!
//! Tracks a single pointer from press to release, reporting cumulative
//! displacement and instantaneous velocity. Movement below the activation
//! threshold is tracked but not reported, so jitter on press never reaches
//! the caller.
//!
//! # Axis lock
//!
//! With `axis: Both` and `lock_axis: true`, the first move whose cumulative
//! displacement on one axis exceeds the other by more than
//! [`AXIS_LOCK_EPSILON`] pins the gesture to that axis until release.
//!
//! # Example
//!
//! ```rust
//! use glide_core::PointerLikeEvent;
//! use glide_gesture::{DragOptions, DragRecognizer, DragSignal};
//!
//! let mut drag = DragRecognizer::new(DragOptions::default());
//! drag.on_pointer_down(&PointerLikeEvent::new(0.0, 0.0).with_time_stamp(0.0));
//! let signals = drag.on_pointer_move(&PointerLikeEvent::new(10.0, 1.0).with_time_stamp(16.0));
//!
//! assert!(matches!(signals.first(), Some(DragSignal::Move(_))));
//! assert_eq!(drag.get_state().delta.x, 10.0);
//! ```

use glide_core::{
    clamp, distance, project, Axis, AxisConstraint, GesturePoint, GestureVector, PointerLikeEvent,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::signal::{
    impl_gesture_signal, GesturePayload, Handlers, PointerPhase, SignalKind, Signals,
};

/// Default activation distance in pixels
pub const DEFAULT_DRAG_THRESHOLD: f64 = 2.0;

/// Upper bound accepted for the activation distance
pub const MAX_DRAG_THRESHOLD: f64 = 1000.0;

/// Margin one axis must win by before the gesture locks to it
pub const AXIS_LOCK_EPSILON: f64 = 1.0;

/// Configuration for a drag recognizer
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DragOptions {
    /// Axis the gesture is restricted to
    pub axis: AxisConstraint,
    /// Whether a free (`Both`) drag locks to its dominant axis
    pub lock_axis: bool,
    /// Start-to-current distance (px) that must be exceeded before moves are reported
    pub threshold: f64,
}

impl Default for DragOptions {
    fn default() -> Self {
        Self {
            axis: AxisConstraint::Both,
            lock_axis: true,
            threshold: DEFAULT_DRAG_THRESHOLD,
        }
    }
}

impl DragOptions {
    /// Horizontal-only drag
    pub fn horizontal() -> Self {
        Self {
            axis: AxisConstraint::X,
            ..Default::default()
        }
    }

    /// Vertical-only drag
    pub fn vertical() -> Self {
        Self {
            axis: AxisConstraint::Y,
            ..Default::default()
        }
    }

    pub fn with_axis(mut self, axis: AxisConstraint) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_lock_axis(mut self, lock_axis: bool) -> Self {
        self.lock_axis = lock_axis;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Copy with numeric fields clamped into safe ranges
    pub fn clamped(self) -> Self {
        let threshold = clamp(self.threshold, 0.0, MAX_DRAG_THRESHOLD);
        if threshold != self.threshold {
            debug!(
                requested = self.threshold,
                clamped = threshold,
                "drag threshold clamped"
            );
        }
        Self { threshold, ..self }
    }
}

/// State owned by one drag recognizer
///
/// When `active` is false, `start` and `current` are `None`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragGestureState {
    pub active: bool,
    pub pointer_id: Option<i32>,
    pub start: Option<GesturePoint>,
    pub current: Option<GesturePoint>,
    /// Start-to-current displacement, projected onto the effective axis
    pub delta: GestureVector,
    /// Velocity against the previous sample (px/ms), projected like `delta`
    pub velocity: GestureVector,
    pub threshold_crossed: bool,
    pub axis_lock: Option<Axis>,
}

impl DragGestureState {
    fn tracks(&self, pointer_id: i32) -> bool {
        self.active && self.pointer_id == Some(pointer_id)
    }
}

pub type DragPayload = GesturePayload<DragGestureState>;

/// Signals emitted by the drag recognizer
#[derive(Clone, Debug, PartialEq)]
pub enum DragSignal {
    Start(DragPayload),
    Move(DragPayload),
    End(DragPayload),
    Cancel(DragPayload),
}

impl_gesture_signal!(DragSignal, DragPayload, { Start, Move, End, Cancel });

/// Pick an axis once one side of the displacement clearly dominates
pub fn resolve_axis_lock(delta: GestureVector) -> Option<Axis> {
    let (abs_x, abs_y) = (delta.x.abs(), delta.y.abs());
    if abs_x > abs_y + AXIS_LOCK_EPSILON {
        Some(Axis::X)
    } else if abs_y > abs_x + AXIS_LOCK_EPSILON {
        Some(Axis::Y)
    } else {
        None
    }
}

/// Apply one pointer event to a drag state
///
/// Events from pointers other than the tracked one leave the state
/// unchanged and emit nothing.
pub fn reduce(
    state: &DragGestureState,
    options: &DragOptions,
    phase: PointerPhase,
    event: &PointerLikeEvent,
) -> (DragGestureState, Signals<DragSignal>) {
    let pointer_id = event.pointer_id();
    let mut signals = Signals::new();

    match phase {
        PointerPhase::Down => {
            // A repeat press from the tracked id restarts (its release was lost)
            if state.active && !state.tracks(pointer_id) {
                trace!(pointer_id, "drag ignoring press from untracked pointer");
                return (state.clone(), signals);
            }

            let point = event.to_point();
            let next = DragGestureState {
                active: true,
                pointer_id: Some(pointer_id),
                start: Some(point),
                current: Some(point),
                ..Default::default()
            };
            debug!(pointer_id, x = point.x, y = point.y, "drag start");
            signals.push(DragSignal::Start(DragPayload::new(next.clone(), *event)));
            (next, signals)
        }
        PointerPhase::Move => {
            let (Some(start), Some(current)) = (state.start, state.current) else {
                return (state.clone(), signals);
            };
            if !state.tracks(pointer_id) {
                return (state.clone(), signals);
            }

            let next_point = event.to_point();
            let raw_delta = GestureVector::between(&start, &next_point);
            let raw_velocity = GestureVector::between(&current, &next_point)
                .per_ms(next_point.time - current.time);

            let mut axis_lock = state.axis_lock;
            if options.axis == AxisConstraint::Both && options.lock_axis && axis_lock.is_none() {
                axis_lock = resolve_axis_lock(raw_delta);
                if let Some(axis) = axis_lock {
                    debug!(pointer_id, ?axis, "drag axis locked");
                }
            }

            let axis = options.axis.axis().or(axis_lock);
            let threshold = clamp(options.threshold, 0.0, MAX_DRAG_THRESHOLD);
            let threshold_crossed =
                state.threshold_crossed || distance(&start, &next_point) > threshold;

            let next = DragGestureState {
                current: Some(next_point),
                delta: project(raw_delta, axis),
                velocity: project(raw_velocity, axis),
                threshold_crossed,
                axis_lock,
                ..state.clone()
            };

            if threshold_crossed {
                trace!(
                    pointer_id,
                    dx = next.delta.x,
                    dy = next.delta.y,
                    "drag move"
                );
                signals.push(DragSignal::Move(DragPayload::new(next.clone(), *event)));
            }
            (next, signals)
        }
        PointerPhase::Up | PointerPhase::Cancel => {
            if !state.tracks(pointer_id) {
                return (state.clone(), signals);
            }

            let payload = DragPayload::new(state.clone(), *event);
            if phase == PointerPhase::Up {
                debug!(pointer_id, "drag end");
                signals.push(DragSignal::End(payload));
            } else {
                debug!(pointer_id, "drag cancel");
                signals.push(DragSignal::Cancel(payload));
            }
            (DragGestureState::default(), signals)
        }
    }
}

/// Stateful drag recognizer wrapping [`reduce`]
#[derive(Debug, Default)]
pub struct DragRecognizer {
    options: DragOptions,
    state: DragGestureState,
    handlers: Handlers<DragPayload>,
}

impl DragRecognizer {
    pub fn new(options: DragOptions) -> Self {
        Self {
            options: options.clamped(),
            state: DragGestureState::default(),
            handlers: Handlers::new(),
        }
    }

    /// Register a handler for the press that begins tracking
    pub fn on_start<F: Fn(&DragPayload) + 'static>(mut self, handler: F) -> Self {
        self.handlers.set(SignalKind::Start, handler);
        self
    }

    /// Register a handler for moves past the activation threshold
    pub fn on_move<F: Fn(&DragPayload) + 'static>(mut self, handler: F) -> Self {
        self.handlers.set(SignalKind::Move, handler);
        self
    }

    /// Register a handler for release
    pub fn on_end<F: Fn(&DragPayload) + 'static>(mut self, handler: F) -> Self {
        self.handlers.set(SignalKind::End, handler);
        self
    }

    /// Register a handler for cancellation
    pub fn on_cancel<F: Fn(&DragPayload) + 'static>(mut self, handler: F) -> Self {
        self.handlers.set(SignalKind::Cancel, handler);
        self
    }

    pub fn options(&self) -> &DragOptions {
        &self.options
    }

    pub fn on_pointer_down(&mut self, event: &PointerLikeEvent) -> Signals<DragSignal> {
        self.apply(PointerPhase::Down, event)
    }

    pub fn on_pointer_move(&mut self, event: &PointerLikeEvent) -> Signals<DragSignal> {
        self.apply(PointerPhase::Move, event)
    }

    pub fn on_pointer_up(&mut self, event: &PointerLikeEvent) -> Signals<DragSignal> {
        self.apply(PointerPhase::Up, event)
    }

    pub fn on_pointer_cancel(&mut self, event: &PointerLikeEvent) -> Signals<DragSignal> {
        self.apply(PointerPhase::Cancel, event)
    }

    /// Drop any in-progress gesture without emitting signals
    pub fn reset(&mut self) {
        self.state = DragGestureState::default();
    }

    /// Copy of the current state
    pub fn get_state(&self) -> DragGestureState {
        self.state.clone()
    }

    pub fn apply(&mut self, phase: PointerPhase, event: &PointerLikeEvent) -> Signals<DragSignal> {
        let (next, signals) = reduce(&self.state, &self.options, phase, event);
        self.state = next;
        self.handlers.dispatch(&signals);
        signals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn ev(x: f64, y: f64, t: f64) -> PointerLikeEvent {
        PointerLikeEvent::new(x, y).with_time_stamp(t)
    }

    #[test]
    fn test_delta_zero_after_down() {
        let mut drag = DragRecognizer::new(DragOptions::default());
        let signals = drag.on_pointer_down(&ev(40.0, 60.0, 0.0));

        let state = drag.get_state();
        assert!(state.active);
        assert_eq!(state.delta, GestureVector::ZERO);
        assert_eq!(state.start, state.current);
        assert!(matches!(signals.as_slice(), [DragSignal::Start(_)]));
    }

    #[test]
    fn test_sub_threshold_jitter_is_silent() {
        let moves = Rc::new(RefCell::new(0));
        let counter = moves.clone();
        let mut drag = DragRecognizer::new(DragOptions::default())
            .on_move(move |_| *counter.borrow_mut() += 1);

        drag.on_pointer_down(&ev(0.0, 0.0, 0.0));
        assert!(drag.on_pointer_move(&ev(1.0, 1.0, 8.0)).is_empty());
        assert!(!drag.get_state().threshold_crossed);
        assert_eq!(*moves.borrow(), 0);

        drag.on_pointer_move(&ev(3.0, 0.0, 16.0));
        assert!(drag.get_state().threshold_crossed);
        assert_eq!(*moves.borrow(), 1);

        // Moving back inside the threshold still reports
        drag.on_pointer_move(&ev(0.5, 0.0, 24.0));
        assert_eq!(*moves.borrow(), 2);
    }

    #[test]
    fn test_velocity_uses_previous_sample() {
        let mut drag = DragRecognizer::new(DragOptions::default().with_lock_axis(false));
        drag.on_pointer_down(&ev(0.0, 0.0, 0.0));
        drag.on_pointer_move(&ev(10.0, 0.0, 10.0));
        drag.on_pointer_move(&ev(30.0, 0.0, 20.0));

        let state = drag.get_state();
        assert_eq!(state.delta.x, 30.0);
        assert_eq!(state.velocity.x, 2.0);
    }

    #[test]
    fn test_coincident_timestamps_do_not_divide_by_zero() {
        let mut drag = DragRecognizer::new(DragOptions::default());
        drag.on_pointer_down(&ev(0.0, 0.0, 5.0));
        drag.on_pointer_move(&ev(12.0, 0.0, 5.0));

        let state = drag.get_state();
        assert!(state.velocity.x.is_finite());
        assert_eq!(state.velocity.x, 12.0);
    }

    #[test]
    fn test_axis_lock_requires_margin() {
        let mut drag = DragRecognizer::new(DragOptions::default());
        drag.on_pointer_down(&ev(0.0, 0.0, 0.0));

        // |dx| = |dy| + 1 is not enough
        drag.on_pointer_move(&ev(4.0, 3.0, 10.0));
        assert_eq!(drag.get_state().axis_lock, None);

        drag.on_pointer_move(&ev(8.0, 3.0, 20.0));
        let state = drag.get_state();
        assert_eq!(state.axis_lock, Some(Axis::X));
        assert_eq!(state.delta, GestureVector::new(8.0, 0.0));
    }

    #[test]
    fn test_axis_lock_never_changes_mid_gesture() {
        let mut drag = DragRecognizer::new(DragOptions::default());
        drag.on_pointer_down(&ev(0.0, 0.0, 0.0));
        drag.on_pointer_move(&ev(0.0, 10.0, 10.0));
        assert_eq!(drag.get_state().axis_lock, Some(Axis::Y));

        drag.on_pointer_move(&ev(200.0, 12.0, 20.0));
        let state = drag.get_state();
        assert_eq!(state.axis_lock, Some(Axis::Y));
        assert_eq!(state.delta, GestureVector::new(0.0, 12.0));
    }

    #[test]
    fn test_configured_axis_skips_lock() {
        let mut drag = DragRecognizer::new(DragOptions::horizontal());
        drag.on_pointer_down(&ev(0.0, 0.0, 0.0));
        drag.on_pointer_move(&ev(3.0, 40.0, 10.0));

        let state = drag.get_state();
        assert_eq!(state.axis_lock, None);
        assert_eq!(state.delta, GestureVector::new(3.0, 0.0));
        assert_eq!(state.velocity.y, 0.0);
    }

    #[test]
    fn test_foreign_pointer_is_ignored() {
        let mut drag = DragRecognizer::new(DragOptions::default());
        drag.on_pointer_down(&ev(0.0, 0.0, 0.0).with_pointer_id(1));

        assert!(drag
            .on_pointer_down(&ev(50.0, 50.0, 1.0).with_pointer_id(2))
            .is_empty());
        assert!(drag
            .on_pointer_move(&ev(90.0, 90.0, 2.0).with_pointer_id(2))
            .is_empty());
        assert!(drag
            .on_pointer_up(&ev(90.0, 90.0, 3.0).with_pointer_id(2))
            .is_empty());

        let state = drag.get_state();
        assert!(state.active);
        assert_eq!(state.pointer_id, Some(1));
        assert_eq!(state.current.unwrap().x, 0.0);
    }

    #[test]
    fn test_repeated_press_from_tracked_pointer_restarts() {
        let mut drag = DragRecognizer::new(DragOptions::default());
        drag.on_pointer_down(&ev(0.0, 0.0, 0.0));
        drag.on_pointer_move(&ev(20.0, 0.0, 10.0));

        let signals = drag.on_pointer_down(&ev(100.0, 100.0, 20.0));
        assert!(matches!(signals.as_slice(), [DragSignal::Start(_)]));

        let state = drag.get_state();
        assert_eq!(state.start.unwrap().x, 100.0);
        assert_eq!(state.delta, GestureVector::ZERO);
        assert_eq!(state.axis_lock, None);
    }

    #[test]
    fn test_release_reports_final_state_then_resets() {
        let ended = Rc::new(RefCell::new(None));
        let slot = ended.clone();
        let mut drag = DragRecognizer::new(DragOptions::default())
            .on_end(move |p| *slot.borrow_mut() = Some(p.state.clone()));

        drag.on_pointer_down(&ev(0.0, 0.0, 0.0));
        drag.on_pointer_move(&ev(25.0, 2.0, 16.0));
        drag.on_pointer_up(&ev(25.0, 2.0, 32.0));

        let final_state = ended.borrow().clone().unwrap();
        assert!(final_state.active);
        assert_eq!(final_state.delta.x, 25.0);

        let state = drag.get_state();
        assert_eq!(state, DragGestureState::default());
        assert!(state.start.is_none() && state.current.is_none());
    }

    #[test]
    fn test_cancel_emits_cancel_and_resets() {
        let mut drag = DragRecognizer::new(DragOptions::default());
        drag.on_pointer_down(&ev(0.0, 0.0, 0.0));
        let signals = drag.on_pointer_cancel(&ev(0.0, 0.0, 5.0));

        assert!(matches!(signals.as_slice(), [DragSignal::Cancel(_)]));
        assert!(!drag.get_state().active);
    }

    #[test]
    fn test_move_without_press_is_noop() {
        let mut drag = DragRecognizer::new(DragOptions::default());
        assert!(drag.on_pointer_move(&ev(10.0, 10.0, 0.0)).is_empty());
        assert!(drag.on_pointer_up(&ev(10.0, 10.0, 0.0)).is_empty());
        assert_eq!(drag.get_state(), DragGestureState::default());
    }

    #[test]
    fn test_threshold_is_clamped() {
        let drag = DragRecognizer::new(DragOptions::default().with_threshold(-5.0));
        assert_eq!(drag.options().threshold, 0.0);

        let drag = DragRecognizer::new(DragOptions::default().with_threshold(f64::NAN));
        assert_eq!(drag.options().threshold, 0.0);
    }

    #[test]
    fn test_get_state_is_a_copy() {
        let mut drag = DragRecognizer::new(DragOptions::default());
        drag.on_pointer_down(&ev(0.0, 0.0, 0.0));

        let mut copy = drag.get_state();
        copy.active = false;
        copy.start = None;

        assert!(drag.get_state().active);
    }
}
