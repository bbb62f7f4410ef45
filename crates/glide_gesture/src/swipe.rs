//! Swipe gesture recognizer
//!
//! Records where a pointer went down and where it was released, then
//! classifies the stroke once on release. Nothing is classified during
//! motion.

use glide_core::{clamp, Axis, AxisConstraint, GesturePoint, PointerLikeEvent};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::signal::{
    impl_gesture_signal, GestureSignal, Handlers, PointerPhase, SignalKind, Signals,
};

/// Default minimum travel along the dominant axis (px)
pub const DEFAULT_SWIPE_DISTANCE: f64 = 36.0;

/// Default minimum speed along the dominant axis (px/ms)
pub const DEFAULT_SWIPE_VELOCITY: f64 = 0.3;

/// Configuration for a swipe recognizer
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SwipeOptions {
    /// Restricts accepted swipes to one axis
    pub axis: AxisConstraint,
    pub distance_threshold: f64,
    pub velocity_threshold: f64,
}

impl Default for SwipeOptions {
    fn default() -> Self {
        Self {
            axis: AxisConstraint::Both,
            distance_threshold: DEFAULT_SWIPE_DISTANCE,
            velocity_threshold: DEFAULT_SWIPE_VELOCITY,
        }
    }
}

impl SwipeOptions {
    pub fn with_axis(mut self, axis: AxisConstraint) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_distance_threshold(mut self, px: f64) -> Self {
        self.distance_threshold = px;
        self
    }

    pub fn with_velocity_threshold(mut self, px_per_ms: f64) -> Self {
        self.velocity_threshold = px_per_ms;
        self
    }

    /// Copy with thresholds clamped to be non-negative and finite
    pub fn clamped(self) -> Self {
        let distance_threshold = clamp(self.distance_threshold, 0.0, f64::MAX);
        let velocity_threshold = clamp(self.velocity_threshold, 0.0, f64::MAX);
        if distance_threshold != self.distance_threshold
            || velocity_threshold != self.velocity_threshold
        {
            debug!(distance_threshold, velocity_threshold, "swipe thresholds clamped");
        }
        Self {
            distance_threshold,
            velocity_threshold,
            ..self
        }
    }
}

/// Direction of an accepted swipe
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

impl SwipeDirection {
    pub fn axis(self) -> Axis {
        match self {
            SwipeDirection::Left | SwipeDirection::Right => Axis::X,
            SwipeDirection::Up | SwipeDirection::Down => Axis::Y,
        }
    }
}

/// Verdict for an accepted swipe
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipeResult {
    pub direction: SwipeDirection,
    /// Travel along the dominant axis (px)
    pub distance: f64,
    /// Average speed along the dominant axis (px/ms)
    pub velocity: f64,
    pub duration_ms: f64,
}

/// State owned by one swipe recognizer
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipeGestureState {
    pub active: bool,
    pub pointer_id: Option<i32>,
    pub start: Option<GesturePoint>,
    pub current: Option<GesturePoint>,
}

impl SwipeGestureState {
    fn tracks(&self, pointer_id: i32) -> bool {
        self.active && self.pointer_id == Some(pointer_id)
    }
}

/// Payload for swipe signals; `swipe` is only set on an accepted release
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwipePayload {
    pub state: SwipeGestureState,
    pub event: PointerLikeEvent,
    pub swipe: Option<SwipeResult>,
}

/// Signals emitted by the swipe recognizer
#[derive(Clone, Debug, PartialEq)]
pub enum SwipeSignal {
    Start(SwipePayload),
    /// Emitted before `End` when the release is accepted as a swipe
    Swipe(SwipePayload),
    /// Emitted on every release, accepted or not
    End(SwipePayload),
    Cancel(SwipePayload),
}

impl_gesture_signal!(SwipeSignal, SwipePayload, { Start, Swipe, End, Cancel });

/// Classify a stroke from `start` to `end`
///
/// The stroke is horizontal when `|dx| >= |dy|`. It is rejected when its
/// dominant axis disagrees with the configured constraint, or when it
/// meets neither the distance nor the velocity threshold.
pub fn classify_swipe(
    start: &GesturePoint,
    end: &GesturePoint,
    options: &SwipeOptions,
) -> Option<SwipeResult> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let duration_ms = (end.time - start.time).max(1.0);

    let horizontal = dx.abs() >= dy.abs();
    match (options.axis, horizontal) {
        (AxisConstraint::X, false) | (AxisConstraint::Y, true) => return None,
        _ => {}
    }

    let (distance, direction) = if horizontal {
        let dir = if dx < 0.0 {
            SwipeDirection::Left
        } else {
            SwipeDirection::Right
        };
        (dx.abs(), dir)
    } else {
        let dir = if dy < 0.0 {
            SwipeDirection::Up
        } else {
            SwipeDirection::Down
        };
        (dy.abs(), dir)
    };
    let velocity = distance / duration_ms;

    let options = options.clamped();
    if distance >= options.distance_threshold || velocity >= options.velocity_threshold {
        Some(SwipeResult {
            direction,
            distance,
            velocity,
            duration_ms,
        })
    } else {
        None
    }
}

/// Apply one pointer event to a swipe state
pub fn reduce(
    state: &SwipeGestureState,
    options: &SwipeOptions,
    phase: PointerPhase,
    event: &PointerLikeEvent,
) -> (SwipeGestureState, Signals<SwipeSignal>) {
    let pointer_id = event.pointer_id();
    let mut signals = Signals::new();

    match phase {
        PointerPhase::Down => {
            if state.active && !state.tracks(pointer_id) {
                return (state.clone(), signals);
            }
            let point = event.to_point();
            let next = SwipeGestureState {
                active: true,
                pointer_id: Some(pointer_id),
                start: Some(point),
                current: Some(point),
            };
            signals.push(SwipeSignal::Start(SwipePayload {
                state: next.clone(),
                event: *event,
                swipe: None,
            }));
            (next, signals)
        }
        PointerPhase::Move => {
            if !state.tracks(pointer_id) {
                return (state.clone(), signals);
            }
            let next = SwipeGestureState {
                current: Some(event.to_point()),
                ..state.clone()
            };
            (next, signals)
        }
        PointerPhase::Up => {
            let Some(start) = state.start.filter(|_| state.tracks(pointer_id)) else {
                return (state.clone(), signals);
            };
            let end = event.to_point();
            let swipe = classify_swipe(&start, &end, options);
            match swipe {
                Some(result) => debug!(
                    pointer_id,
                    direction = ?result.direction,
                    distance = result.distance,
                    velocity = result.velocity,
                    "swipe accepted"
                ),
                None => debug!(pointer_id, "swipe rejected"),
            }

            let payload = SwipePayload {
                state: SwipeGestureState {
                    current: Some(end),
                    ..state.clone()
                },
                event: *event,
                swipe,
            };
            if swipe.is_some() {
                signals.push(SwipeSignal::Swipe(payload.clone()));
            }
            signals.push(SwipeSignal::End(payload));
            (SwipeGestureState::default(), signals)
        }
        PointerPhase::Cancel => {
            if !state.tracks(pointer_id) {
                return (state.clone(), signals);
            }
            debug!(pointer_id, "swipe cancel");
            signals.push(SwipeSignal::Cancel(SwipePayload {
                state: state.clone(),
                event: *event,
                swipe: None,
            }));
            (SwipeGestureState::default(), signals)
        }
    }
}

/// Stateful swipe recognizer wrapping [`reduce`]
#[derive(Debug, Default)]
pub struct SwipeRecognizer {
    options: SwipeOptions,
    state: SwipeGestureState,
    handlers: Handlers<SwipePayload>,
}

impl SwipeRecognizer {
    pub fn new(options: SwipeOptions) -> Self {
        Self {
            options: options.clamped(),
            state: SwipeGestureState::default(),
            handlers: Handlers::new(),
        }
    }

    pub fn on_start<F: Fn(&SwipePayload) + 'static>(mut self, handler: F) -> Self {
        self.handlers.set(SignalKind::Start, handler);
        self
    }

    /// Register a handler for accepted swipes only
    pub fn on_swipe<F: Fn(&SwipePayload) + 'static>(mut self, handler: F) -> Self {
        self.handlers.set(SignalKind::Swipe, handler);
        self
    }

    /// Register a handler for every release
    pub fn on_end<F: Fn(&SwipePayload) + 'static>(mut self, handler: F) -> Self {
        self.handlers.set(SignalKind::End, handler);
        self
    }

    pub fn on_cancel<F: Fn(&SwipePayload) + 'static>(mut self, handler: F) -> Self {
        self.handlers.set(SignalKind::Cancel, handler);
        self
    }

    pub fn options(&self) -> &SwipeOptions {
        &self.options
    }

    pub fn on_pointer_down(&mut self, event: &PointerLikeEvent) -> Signals<SwipeSignal> {
        self.apply(PointerPhase::Down, event)
    }

    pub fn on_pointer_move(&mut self, event: &PointerLikeEvent) -> Signals<SwipeSignal> {
        self.apply(PointerPhase::Move, event)
    }

    pub fn on_pointer_up(&mut self, event: &PointerLikeEvent) -> Signals<SwipeSignal> {
        self.apply(PointerPhase::Up, event)
    }

    pub fn on_pointer_cancel(&mut self, event: &PointerLikeEvent) -> Signals<SwipeSignal> {
        self.apply(PointerPhase::Cancel, event)
    }

    pub fn reset(&mut self) {
        self.state = SwipeGestureState::default();
    }

    pub fn get_state(&self) -> SwipeGestureState {
        self.state.clone()
    }

    pub fn apply(&mut self, phase: PointerPhase, event: &PointerLikeEvent) -> Signals<SwipeSignal> {
        let (next, signals) = reduce(&self.state, &self.options, phase, event);
        self.state = next;
        self.handlers.dispatch(&signals);
        signals
    }
}

/// The accepted swipe carried by a batch of signals, if any
pub fn accepted_swipe(signals: &[SwipeSignal]) -> Option<SwipeResult> {
    signals
        .iter()
        .find(|s| s.kind() == SignalKind::Swipe)
        .and_then(|s| s.payload().swipe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn p(x: f64, y: f64, t: f64) -> GesturePoint {
        GesturePoint::new(x, y, t)
    }

    fn ev(x: f64, y: f64, t: f64) -> PointerLikeEvent {
        PointerLikeEvent::new(x, y).with_time_stamp(t)
    }

    #[test]
    fn test_classify_directions() {
        let opts = SwipeOptions::default();
        let origin = p(100.0, 100.0, 0.0);

        let cases = [
            (p(40.0, 100.0, 500.0), SwipeDirection::Left),
            (p(160.0, 100.0, 500.0), SwipeDirection::Right),
            (p(100.0, 40.0, 500.0), SwipeDirection::Up),
            (p(100.0, 160.0, 500.0), SwipeDirection::Down),
        ];
        for (end, expected) in cases {
            let result = classify_swipe(&origin, &end, &opts).unwrap();
            assert_eq!(result.direction, expected);
            assert_eq!(result.distance, 60.0);
        }
    }

    #[test]
    fn test_equal_axes_classify_horizontal() {
        let result = classify_swipe(&p(0.0, 0.0, 0.0), &p(50.0, 50.0, 100.0), &Default::default())
            .unwrap();
        assert_eq!(result.direction, SwipeDirection::Right);
    }

    #[test]
    fn test_swap_symmetry() {
        let opts = SwipeOptions::default();
        let a = p(10.0, 0.0, 0.0);
        let b = p(70.0, 12.0, 120.0);

        let forward = classify_swipe(&a, &b, &opts).unwrap();
        let backward = classify_swipe(&p(b.x, b.y, a.time), &p(a.x, a.y, b.time), &opts).unwrap();

        assert_eq!(forward.direction, SwipeDirection::Right);
        assert_eq!(backward.direction, SwipeDirection::Left);
        assert_eq!(forward.distance, backward.distance);
        assert_eq!(forward.velocity, backward.velocity);

        let a = p(5.0, 10.0, 0.0);
        let b = p(14.0, 90.0, 200.0);

        let down = classify_swipe(&a, &b, &opts).unwrap();
        let up = classify_swipe(&p(b.x, b.y, a.time), &p(a.x, a.y, b.time), &opts).unwrap();

        assert_eq!(down.direction, SwipeDirection::Down);
        assert_eq!(up.direction, SwipeDirection::Up);
        assert_eq!(down.distance, up.distance);
        assert_eq!(down.velocity, up.velocity);
    }

    #[test]
    fn test_fast_short_flick_is_accepted() {
        // 20px in 10ms: below the distance threshold, above the velocity one
        let result =
            classify_swipe(&p(0.0, 0.0, 0.0), &p(20.0, 0.0, 10.0), &Default::default()).unwrap();
        assert_eq!(result.velocity, 2.0);
        assert_eq!(result.duration_ms, 10.0);
    }

    #[test]
    fn test_slow_short_drag_is_rejected() {
        // 20px in 1000ms
        assert!(
            classify_swipe(&p(0.0, 0.0, 0.0), &p(20.0, 0.0, 1000.0), &Default::default())
                .is_none()
        );
    }

    #[test]
    fn test_axis_constraint_rejects_off_axis() {
        let opts = SwipeOptions::default().with_axis(AxisConstraint::X);
        assert!(classify_swipe(&p(0.0, 0.0, 0.0), &p(0.0, 200.0, 100.0), &opts).is_none());

        let opts = SwipeOptions::default().with_axis(AxisConstraint::Y);
        assert!(classify_swipe(&p(0.0, 0.0, 0.0), &p(200.0, 0.0, 100.0), &opts).is_none());
    }

    #[test]
    fn test_zero_duration_is_floored() {
        let result =
            classify_swipe(&p(0.0, 0.0, 50.0), &p(40.0, 0.0, 50.0), &Default::default()).unwrap();
        assert_eq!(result.duration_ms, 1.0);
        assert_eq!(result.velocity, 40.0);
    }

    #[test]
    fn test_release_fires_swipe_then_end() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let (a, b) = (order.clone(), order.clone());
        let mut swipe = SwipeRecognizer::new(SwipeOptions::default())
            .on_swipe(move |_| a.borrow_mut().push("swipe"))
            .on_end(move |p| {
                assert!(p.swipe.is_some());
                b.borrow_mut().push("end")
            });

        swipe.on_pointer_down(&ev(0.0, 0.0, 0.0));
        swipe.on_pointer_move(&ev(30.0, 0.0, 50.0));
        let signals = swipe.on_pointer_up(&ev(80.0, 0.0, 100.0));

        assert_eq!(*order.borrow(), vec!["swipe", "end"]);
        assert_eq!(
            accepted_swipe(&signals).map(|s| s.direction),
            Some(SwipeDirection::Right)
        );
        assert!(!swipe.get_state().active);
    }

    #[test]
    fn test_rejected_release_fires_end_with_null_swipe() {
        let mut swipe = SwipeRecognizer::new(SwipeOptions::default());
        swipe.on_pointer_down(&ev(0.0, 0.0, 0.0));
        let signals = swipe.on_pointer_up(&ev(5.0, 0.0, 1000.0));

        match signals.as_slice() {
            [SwipeSignal::End(payload)] => assert!(payload.swipe.is_none()),
            other => panic!("unexpected signals: {:?}", other),
        }
    }

    #[test]
    fn test_cancel_never_swipes() {
        let swiped = Rc::new(RefCell::new(false));
        let flag = swiped.clone();
        let mut swipe =
            SwipeRecognizer::new(SwipeOptions::default()).on_swipe(move |_| *flag.borrow_mut() = true);

        swipe.on_pointer_down(&ev(0.0, 0.0, 0.0));
        swipe.on_pointer_move(&ev(300.0, 0.0, 10.0));
        let signals = swipe.on_pointer_cancel(&ev(300.0, 0.0, 20.0));

        assert!(!*swiped.borrow());
        assert!(matches!(signals.as_slice(), [SwipeSignal::Cancel(p)] if p.swipe.is_none()));
        assert!(!swipe.get_state().active);
    }

    #[test]
    fn test_untracked_pointer_release_is_ignored() {
        let mut swipe = SwipeRecognizer::new(SwipeOptions::default());
        swipe.on_pointer_down(&ev(0.0, 0.0, 0.0).with_pointer_id(3));

        assert!(swipe
            .on_pointer_up(&ev(200.0, 0.0, 10.0).with_pointer_id(4))
            .is_empty());
        assert!(swipe.get_state().active);
    }
}
