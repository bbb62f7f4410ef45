//! Pinch gesture recognizer
//!
//! Tracks every pressed pointer in a bounded arena. A pinch starts when the
//! arena first holds two pointers; those two become the gesture's
//! participants and alone drive distance, scale, and center. Extra pointers
//! are tracked but do not disturb the math.
//!
//! When a participant lifts while two or more pointers remain, the two
//! earliest remaining pointers take over and `start_distance` is rebased so
//! the scale stays continuous. The gesture ends once fewer than two pointers
//! remain pressed; a cancel then emits `Cancel` followed by `End`.

use glide_core::{clamp, distance, midpoint, GesturePoint, PointerLikeEvent};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::arena::{PointerArena, PointerSlot};
use crate::signal::{
    impl_gesture_signal, GesturePayload, Handlers, PointerPhase, SignalKind, Signals,
};

pub const DEFAULT_MIN_SCALE: f64 = 0.5;
pub const DEFAULT_MAX_SCALE: f64 = 4.0;

/// Bounds accepted for either scale limit
pub const SCALE_LIMIT_RANGE: (f64, f64) = (0.01, 100.0);

/// Configuration for a pinch recognizer
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PinchOptions {
    pub min_scale: f64,
    pub max_scale: f64,
}

impl Default for PinchOptions {
    fn default() -> Self {
        Self {
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
        }
    }
}

impl PinchOptions {
    pub fn new(min_scale: f64, max_scale: f64) -> Self {
        Self {
            min_scale,
            max_scale,
        }
    }

    /// Copy with limits clamped into range and `max_scale >= min_scale`
    pub fn clamped(self) -> Self {
        let (lo, hi) = SCALE_LIMIT_RANGE;
        let min_scale = clamp(self.min_scale, lo, hi);
        let max_scale = clamp(self.max_scale, lo, hi).max(min_scale);
        if min_scale != self.min_scale || max_scale != self.max_scale {
            debug!(min_scale, max_scale, "pinch scale limits clamped");
        }
        Self {
            min_scale,
            max_scale,
        }
    }

    fn clamp_scale(&self, scale: f64) -> f64 {
        let limits = self.clamped();
        clamp(scale, limits.min_scale, limits.max_scale)
    }
}

/// State owned by one pinch recognizer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinchGestureState {
    pub active: bool,
    /// Distance between participants at start, floored at 1
    pub start_distance: f64,
    pub current_distance: f64,
    /// `current_distance / start_distance`, clamped to the scale limits
    pub scale: f64,
    pub center: Option<GesturePoint>,
    /// Every pressed pointer, in press order
    pub pointers: PointerArena,
    /// Pointer ids driving the active gesture
    pub participants: Option<(i32, i32)>,
}

impl Default for PinchGestureState {
    fn default() -> Self {
        Self {
            active: false,
            start_distance: 0.0,
            current_distance: 0.0,
            scale: 1.0,
            center: None,
            pointers: PointerArena::new(),
            participants: None,
        }
    }
}

impl PinchGestureState {
    fn is_participant(&self, pointer_id: i32) -> bool {
        matches!(self.participants, Some((a, b)) if a == pointer_id || b == pointer_id)
    }

    fn participant_points(&self) -> Option<(GesturePoint, GesturePoint)> {
        let (a, b) = self.participants?;
        Some((*self.pointers.get(a)?, *self.pointers.get(b)?))
    }

    /// Clear gesture fields, keeping the pressed pointers
    fn end_gesture(&mut self) {
        self.active = false;
        self.start_distance = 0.0;
        self.current_distance = 0.0;
        self.scale = 1.0;
        self.center = None;
        self.participants = None;
    }
}

pub type PinchPayload = GesturePayload<PinchGestureState>;

/// Signals emitted by the pinch recognizer
#[derive(Clone, Debug, PartialEq)]
pub enum PinchSignal {
    Start(PinchPayload),
    Move(PinchPayload),
    End(PinchPayload),
    Cancel(PinchPayload),
}

impl_gesture_signal!(PinchSignal, PinchPayload, { Start, Move, End, Cancel });

fn begin(state: &mut PinchGestureState, options: &PinchOptions, a: PointerSlot, b: PointerSlot) {
    let start_distance = distance(&a.point, &b.point).max(1.0);
    state.active = true;
    state.participants = Some((a.pointer_id, b.pointer_id));
    state.start_distance = start_distance;
    state.current_distance = start_distance;
    state.scale = options.clamp_scale(1.0);
    state.center = Some(midpoint(&a.point, &b.point));
}

/// Swap in a new participant pair, rebasing `start_distance` so the
/// reported scale carries on from where the old pair left it
fn hand_off(
    state: &mut PinchGestureState,
    options: &PinchOptions,
    a: PointerSlot,
    b: PointerSlot,
) {
    let current_distance = distance(&a.point, &b.point);
    state.participants = Some((a.pointer_id, b.pointer_id));
    state.start_distance = (current_distance / state.scale).max(1.0);
    state.current_distance = current_distance;
    state.scale = options.clamp_scale(current_distance / state.start_distance);
    state.center = Some(midpoint(&a.point, &b.point));
}

/// Apply one pointer event to a pinch state
pub fn reduce(
    state: &PinchGestureState,
    options: &PinchOptions,
    phase: PointerPhase,
    event: &PointerLikeEvent,
) -> (PinchGestureState, Signals<PinchSignal>) {
    let pointer_id = event.pointer_id();
    let mut signals = Signals::new();
    let mut next = state.clone();

    match phase {
        PointerPhase::Down => {
            if !next.pointers.insert(pointer_id, event.to_point()) {
                warn!(pointer_id, "pinch pointer arena full, ignoring pointer");
                return (next, signals);
            }
            if !next.active && next.pointers.len() >= 2 {
                if let Some((a, b)) = next.pointers.first_two() {
                    begin(&mut next, options, a, b);
                    debug!(
                        first = a.pointer_id,
                        second = b.pointer_id,
                        start_distance = next.start_distance,
                        "pinch start"
                    );
                    signals.push(PinchSignal::Start(PinchPayload::new(next.clone(), *event)));
                }
            }
        }
        PointerPhase::Move => {
            if !next.pointers.update(pointer_id, event.to_point()) {
                return (state.clone(), signals);
            }
            if !next.active || !next.is_participant(pointer_id) {
                return (next, signals);
            }
            if let Some((a, b)) = next.participant_points() {
                next.current_distance = distance(&a, &b);
                next.scale = options.clamp_scale(next.current_distance / next.start_distance);
                next.center = Some(midpoint(&a, &b));
                trace!(scale = next.scale, "pinch move");
                signals.push(PinchSignal::Move(PinchPayload::new(next.clone(), *event)));
            }
        }
        PointerPhase::Up | PointerPhase::Cancel => {
            if next.pointers.remove(pointer_id).is_none() {
                return (state.clone(), signals);
            }
            if !next.active {
                return (next, signals);
            }
            if next.pointers.len() < 2 {
                let payload = PinchPayload::new(
                    PinchGestureState {
                        active: false,
                        ..next.clone()
                    },
                    *event,
                );
                if phase == PointerPhase::Cancel {
                    debug!(pointer_id, "pinch cancel");
                    signals.push(PinchSignal::Cancel(payload.clone()));
                }
                debug!(pointer_id, scale = payload.state.scale, "pinch end");
                signals.push(PinchSignal::End(payload));
                next.end_gesture();
            } else if next.is_participant(pointer_id) {
                if let Some((a, b)) = next.pointers.first_two() {
                    hand_off(&mut next, options, a, b);
                    debug!(
                        first = a.pointer_id,
                        second = b.pointer_id,
                        scale = next.scale,
                        "pinch participants replaced"
                    );
                }
            }
        }
    }

    (next, signals)
}

/// Stateful pinch recognizer wrapping [`reduce`]
#[derive(Debug, Default)]
pub struct PinchRecognizer {
    options: PinchOptions,
    state: PinchGestureState,
    handlers: Handlers<PinchPayload>,
}

impl PinchRecognizer {
    pub fn new(options: PinchOptions) -> Self {
        Self {
            options: options.clamped(),
            state: PinchGestureState::default(),
            handlers: Handlers::new(),
        }
    }

    pub fn on_start<F: Fn(&PinchPayload) + 'static>(mut self, handler: F) -> Self {
        self.handlers.set(SignalKind::Start, handler);
        self
    }

    pub fn on_move<F: Fn(&PinchPayload) + 'static>(mut self, handler: F) -> Self {
        self.handlers.set(SignalKind::Move, handler);
        self
    }

    pub fn on_end<F: Fn(&PinchPayload) + 'static>(mut self, handler: F) -> Self {
        self.handlers.set(SignalKind::End, handler);
        self
    }

    pub fn on_cancel<F: Fn(&PinchPayload) + 'static>(mut self, handler: F) -> Self {
        self.handlers.set(SignalKind::Cancel, handler);
        self
    }

    pub fn options(&self) -> &PinchOptions {
        &self.options
    }

    pub fn on_pointer_down(&mut self, event: &PointerLikeEvent) -> Signals<PinchSignal> {
        self.apply(PointerPhase::Down, event)
    }

    pub fn on_pointer_move(&mut self, event: &PointerLikeEvent) -> Signals<PinchSignal> {
        self.apply(PointerPhase::Move, event)
    }

    pub fn on_pointer_up(&mut self, event: &PointerLikeEvent) -> Signals<PinchSignal> {
        self.apply(PointerPhase::Up, event)
    }

    pub fn on_pointer_cancel(&mut self, event: &PointerLikeEvent) -> Signals<PinchSignal> {
        self.apply(PointerPhase::Cancel, event)
    }

    /// Forget all pointers and any active gesture
    pub fn reset(&mut self) {
        self.state = PinchGestureState::default();
    }

    pub fn get_state(&self) -> PinchGestureState {
        self.state.clone()
    }

    pub fn apply(&mut self, phase: PointerPhase, event: &PointerLikeEvent) -> Signals<PinchSignal> {
        let (next, signals) = reduce(&self.state, &self.options, phase, event);
        self.state = next;
        self.handlers.dispatch(&signals);
        signals
    }
}
