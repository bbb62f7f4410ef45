//! Animation-library adapter
//!
//! Projects resolved springs, stagger options, and view transitions into the
//! transition schema of an external animation library: springs as
//! stiffness/damping/mass, tweens as duration plus a bezier `ease` array,
//! and child orchestration as `staggerChildren`/`delayChildren`. All times
//! are in seconds.
//!
//! The library's spring model is numerically different from the engine's
//! tension/friction model, so presets map through their own table here
//! instead of reusing [`SpringPreset::params`].

use serde::{Deserialize, Serialize};

use crate::easing::CubicBezier;
use crate::spring::{SpringInput, SpringPreset};
use crate::stagger::{StaggerDirection, StaggerOptions};
use crate::view_transition::ResolvedViewTransition;

/// Spring constants in the library's stiffness/damping/mass model
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdapterSpring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl AdapterSpring {
    pub fn for_preset(preset: SpringPreset) -> Self {
        let (stiffness, damping) = match preset {
            SpringPreset::Gentle => (120.0, 20.0),
            SpringPreset::Smooth => (200.0, 28.0),
            SpringPreset::Snappy => (420.0, 34.0),
            SpringPreset::Bouncy => (260.0, 14.0),
        };
        Self {
            stiffness,
            damping,
            mass: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionType {
    Spring,
    Tween,
}

/// A transition object in the library's vocabulary. Absent fields are
/// omitted from the serialized form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionTransition {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransitionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stiffness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damping: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mass: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub velocity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_delta: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ease: Option<[f64; 4]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stagger_children: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_children: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stagger_direction: Option<i8>,
}

impl MotionTransition {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn with_delay_ms(mut self, delay_ms: f64) -> Self {
        self.delay = Some(ms_to_s(delay_ms));
        self
    }
}

/// Enter and exit transitions for one view transition
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewTransitionTransitions {
    pub enter: MotionTransition,
    pub exit: MotionTransition,
}

fn ms_to_s(ms: f64) -> f64 {
    ms / 1000.0
}

/// Token or `cubic-bezier(...)` literal to control points; `None` lets the
/// library's default easing apply
pub fn resolve_bezier_easing(easing: &str) -> Option<[f64; 4]> {
    CubicBezier::resolve(easing).map(CubicBezier::to_array)
}

pub fn spring_transition(input: impl Into<SpringInput>) -> MotionTransition {
    match input.into() {
        SpringInput::Preset(preset) => {
            let spring = AdapterSpring::for_preset(preset);
            MotionTransition {
                kind: Some(TransitionType::Spring),
                stiffness: Some(spring.stiffness),
                damping: Some(spring.damping),
                mass: Some(spring.mass),
                ..Default::default()
            }
        }
        SpringInput::Custom(params) => {
            let params = params.clamped();
            MotionTransition {
                kind: Some(TransitionType::Spring),
                stiffness: Some(params.tension),
                damping: Some(params.friction),
                mass: Some(params.mass),
                velocity: Some(params.velocity),
                rest_delta: Some(params.precision),
                ..Default::default()
            }
        }
    }
}

/// Duration-based transition. Negative or non-finite durations become 0.
pub fn tween_transition(duration_ms: f64, easing: &str) -> MotionTransition {
    let duration_ms = if duration_ms.is_finite() {
        duration_ms.max(0.0)
    } else {
        0.0
    };
    MotionTransition {
        kind: Some(TransitionType::Tween),
        duration: Some(ms_to_s(duration_ms)),
        ease: resolve_bezier_easing(easing),
        ..Default::default()
    }
}

/// Parent-level orchestration for staggered children
pub fn stagger_transition(options: &StaggerOptions) -> MotionTransition {
    let options = options.clamped();
    let (step_ms, initial_ms) = if options.reduced_motion {
        (0.0, 0.0)
    } else {
        (options.step_ms, options.initial_delay_ms)
    };
    let direction = match options.direction {
        StaggerDirection::Reverse => -1,
        _ => 1,
    };
    MotionTransition {
        stagger_children: Some(ms_to_s(step_ms)),
        delay_children: Some(ms_to_s(initial_ms)),
        stagger_direction: Some(direction),
        ..Default::default()
    }
}

pub fn view_transition_transitions(resolved: &ResolvedViewTransition) -> ViewTransitionTransitions {
    let mut enter = MotionTransition {
        kind: Some(TransitionType::Tween),
        duration: Some(ms_to_s(resolved.enter_duration_ms)),
        ease: Some(resolved.enter_easing.to_array()),
        ..Default::default()
    };
    if resolved.enter_delay_ms > 0.0 {
        enter = enter.with_delay_ms(resolved.enter_delay_ms);
    }
    let exit = MotionTransition {
        kind: Some(TransitionType::Tween),
        duration: Some(ms_to_s(resolved.exit_duration_ms)),
        ease: Some(resolved.exit_easing.to_array()),
        ..Default::default()
    };
    ViewTransitionTransitions { enter, exit }
}
