//! Signal emission and handler dispatch
//!
//! Recognizers are reducers: each pointer event yields a new state plus the
//! signals that transition produced. A recognizer wrapper hands those
//! signals back to the caller and, if handlers are registered, invokes them
//! with the same payload.
//!
//! ```text
//! PointerLikeEvent
//!     ↓ on_pointer_down/move/up/cancel
//! reduce(state, options, phase, event)
//!     ↓ (state', Signals)
//! Handlers::dispatch  →  registered callbacks
//!     ↓
//! returned to caller
//! ```

use std::fmt;
use std::rc::Rc;

use glide_core::PointerLikeEvent;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Which entry point a pointer event arrived through
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// Signals produced by a single transition. A release can emit two
/// (e.g. `Swipe` followed by `End`), so two fit inline.
pub type Signals<S> = SmallVec<[S; 2]>;

/// Kind of a gesture signal, used to route it to a handler
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignalKind {
    Start,
    Move,
    Swipe,
    End,
    Cancel,
}

/// Snapshot of a recognizer's state paired with the triggering event
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GesturePayload<S> {
    pub state: S,
    pub event: PointerLikeEvent,
}

impl<S> GesturePayload<S> {
    pub fn new(state: S, event: PointerLikeEvent) -> Self {
        Self { state, event }
    }
}

/// A typed signal emitted by a recognizer
pub trait GestureSignal {
    type Payload;

    fn kind(&self) -> SignalKind;

    fn payload(&self) -> &Self::Payload;
}

/// Callback invoked with a signal payload. Uses Rc since gesture input is
/// delivered on a single thread.
pub type GestureCallback<P> = Rc<dyn Fn(&P)>;

/// Optional callbacks, one per signal kind
pub struct Handlers<P> {
    on_start: Option<GestureCallback<P>>,
    on_move: Option<GestureCallback<P>>,
    on_swipe: Option<GestureCallback<P>>,
    on_end: Option<GestureCallback<P>>,
    on_cancel: Option<GestureCallback<P>>,
}

impl<P> Default for Handlers<P> {
    fn default() -> Self {
        Self {
            on_start: None,
            on_move: None,
            on_swipe: None,
            on_end: None,
            on_cancel: None,
        }
    }
}

impl<P> Clone for Handlers<P> {
    fn clone(&self) -> Self {
        Self {
            on_start: self.on_start.clone(),
            on_move: self.on_move.clone(),
            on_swipe: self.on_swipe.clone(),
            on_end: self.on_end.clone(),
            on_cancel: self.on_cancel.clone(),
        }
    }
}

impl<P> fmt::Debug for Handlers<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlers")
            .field("on_start", &self.on_start.is_some())
            .field("on_move", &self.on_move.is_some())
            .field("on_swipe", &self.on_swipe.is_some())
            .field("on_end", &self.on_end.is_some())
            .field("on_cancel", &self.on_cancel.is_some())
            .finish()
    }
}

impl<P> Handlers<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for the given signal kind, replacing any previous one
    pub fn set<F>(&mut self, kind: SignalKind, handler: F)
    where
        F: Fn(&P) + 'static,
    {
        let handler: GestureCallback<P> = Rc::new(handler);
        match kind {
            SignalKind::Start => self.on_start = Some(handler),
            SignalKind::Move => self.on_move = Some(handler),
            SignalKind::Swipe => self.on_swipe = Some(handler),
            SignalKind::End => self.on_end = Some(handler),
            SignalKind::Cancel => self.on_cancel = Some(handler),
        }
    }

    fn get(&self, kind: SignalKind) -> Option<&GestureCallback<P>> {
        match kind {
            SignalKind::Start => self.on_start.as_ref(),
            SignalKind::Move => self.on_move.as_ref(),
            SignalKind::Swipe => self.on_swipe.as_ref(),
            SignalKind::End => self.on_end.as_ref(),
            SignalKind::Cancel => self.on_cancel.as_ref(),
        }
    }

    /// Invoke the handler registered for each signal, in emission order
    pub fn dispatch<S>(&self, signals: &[S])
    where
        S: GestureSignal<Payload = P>,
    {
        for signal in signals {
            if let Some(handler) = self.get(signal.kind()) {
                handler(signal.payload());
            }
        }
    }
}

/// Implements `GestureSignal` for a signal enum whose variants all wrap the
/// same payload type.
macro_rules! impl_gesture_signal {
    ($signal:ty, $payload:ty, { $($variant:ident),+ $(,)? }) => {
        impl $crate::signal::GestureSignal for $signal {
            type Payload = $payload;

            fn kind(&self) -> $crate::signal::SignalKind {
                match self {
                    $(Self::$variant(_) => $crate::signal::SignalKind::$variant,)+
                }
            }

            fn payload(&self) -> &$payload {
                match self {
                    $(Self::$variant(payload) => payload,)+
                }
            }
        }
    };
}

pub(crate) use impl_gesture_signal;

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug)]
    enum TestSignal {
        Start(u32),
        End(u32),
    }

    impl_gesture_signal!(TestSignal, u32, { Start, End });

    #[test]
    fn test_dispatch_routes_by_kind() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut handlers = Handlers::<u32>::new();

        let log = seen.clone();
        handlers.set(SignalKind::End, move |v| log.borrow_mut().push(*v));

        handlers.dispatch(&[TestSignal::Start(1), TestSignal::End(2)]);

        assert_eq!(*seen.borrow(), vec![2]);
    }

    #[test]
    fn test_handlers_debug_lists_registered() {
        let mut handlers = Handlers::<u32>::new();
        handlers.set(SignalKind::Move, |_| {});
        let debug = format!("{:?}", handlers);
        assert!(debug.contains("on_move: true"));
        assert!(debug.contains("on_start: false"));
    }
}
