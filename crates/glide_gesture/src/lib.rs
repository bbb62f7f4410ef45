//! Glide Gesture Recognizers
//!
//! Deterministic state machines that turn raw pointer events into drag,
//! swipe, and pinch signals.
//!
//! # Features
//!
//! - **Drag**: single-pointer displacement and velocity with one-shot axis lock
//! - **Swipe**: release-time direction/velocity verdict
//! - **Pinch**: two-pointer scale and center over a bounded pointer arena
//! - **Pure reducers**: every recognizer is a `(state, event) -> (state', signals)`
//!   function behind a small stateful wrapper, so a recorded event sequence
//!   always replays to the same output
//!
//! Callers forward events verbatim; the recognizers only need the
//! [`PointerLikeEvent`](glide_core::PointerLikeEvent) shape, so synthetic
//! events work as well as platform ones.
//!
//! # Example
//!
//! ```rust
//! use glide_core::PointerLikeEvent;
//! use glide_gesture::{SwipeDirection, SwipeOptions, SwipeRecognizer, accepted_swipe};
//!
//! let mut swipe = SwipeRecognizer::new(SwipeOptions::default());
//! swipe.on_pointer_down(&PointerLikeEvent::new(200.0, 0.0).with_time_stamp(0.0));
//! let signals = swipe.on_pointer_up(&PointerLikeEvent::new(100.0, 10.0).with_time_stamp(120.0));
//!
//! assert_eq!(accepted_swipe(&signals).map(|s| s.direction), Some(SwipeDirection::Left));
//! ```

pub mod arena;
pub mod config;
pub mod drag;
pub mod pinch;
pub mod signal;
pub mod swipe;

pub use arena::{PointerArena, PointerSlot, MAX_TRACKED_POINTERS};
pub use config::GestureConfig;
pub use drag::{DragGestureState, DragOptions, DragPayload, DragRecognizer, DragSignal};
pub use pinch::{PinchGestureState, PinchOptions, PinchPayload, PinchRecognizer, PinchSignal};
pub use signal::{
    GestureCallback, GesturePayload, GestureSignal, Handlers, PointerPhase, SignalKind, Signals,
};
pub use swipe::{
    accepted_swipe, classify_swipe, SwipeDirection, SwipeGestureState, SwipeOptions,
    SwipePayload, SwipeRecognizer, SwipeResult, SwipeSignal,
};
