//! Glide Motion
//!
//! Pure resolvers that turn declarative motion intents into numbers and
//! style descriptors:
//!
//! - **Springs**: presets or custom tension/friction/mass, resolved to a
//!   damping ratio, a measured settling duration, and a CSS easing
//! - **Stagger**: per-index delays under forward, reverse, center-out, and
//!   edges-in traversal
//! - **View transitions**: named presets resolved to initial/enter/exit
//!   inline styles with reduced-motion and duration scaling
//! - **Adapter**: the same outputs in an external animation library's
//!   transition schema
//!
//! Nothing here keeps state between calls; identical arguments always
//! resolve to equal output.
//!
//! ```rust
//! use glide_motion::{create_stagger_sequence, StaggerDirection, StaggerOptions};
//!
//! let seq = create_stagger_sequence(
//!     &StaggerOptions::new(5)
//!         .with_direction(StaggerDirection::CenterOut)
//!         .with_step_ms(10.0),
//! );
//! assert_eq!(seq.delays, vec![20.0, 10.0, 0.0, 10.0, 20.0]);
//! ```

pub mod adapter;
pub mod config;
pub mod css;
pub mod easing;
pub mod spring;
pub mod stagger;
pub mod view_transition;

pub use adapter::{
    resolve_bezier_easing, spring_transition, stagger_transition, tween_transition,
    view_transition_transitions, AdapterSpring, MotionTransition, TransitionType,
    ViewTransitionTransitions,
};
pub use config::MotionConfig;
pub use easing::CubicBezier;
pub use spring::{
    resolve_spring_physics, settling_duration_ms, ResolvedSpring, Spring, SpringInput,
    SpringParams, SpringPreset,
};
pub use stagger::{
    create_stagger_sequence, resolve_stagger_delay, stagger_rank, StaggerDirection,
    StaggerOptions, StaggerSequence, StaggerStyle,
};
pub use view_transition::{
    resolve_child_transition, resolve_view_transition, view_transition_preset,
    ResolvedViewTransition, StyleDescriptor, TransitionFrame, TransitionStep,
    ViewTransitionOptions, ViewTransitionPreset, ViewTransitionPresetName,
};
