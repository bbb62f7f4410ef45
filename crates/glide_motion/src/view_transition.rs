//! View transition presets
//!
//! A preset describes an element's initial frame plus the enter and exit
//! steps that animate it in and out. Resolution turns a preset into inline
//! style descriptors (`opacity`, `transform`, `filter`, `transition`,
//! `transitionDelay`) after applying reduced motion and duration scaling.

use std::fmt;
use std::str::FromStr;

use glide_core::{clamp, ConfigError};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::css::{format_ms, format_number, format_px};
use crate::easing::CubicBezier;

/// Shortest duration a resolved transition may have (ms)
pub const MIN_DURATION_MS: f64 = 1.0;
pub const MAX_DURATION_SCALE: f64 = 10.0;
pub const DEFAULT_CHILD_STAGGER_MS: f64 = 40.0;
pub const DEFAULT_MAX_CHILD_DELAY_MS: f64 = 400.0;

const NONE: &str = "none";

/// Closed set of preset names
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewTransitionPresetName {
    #[default]
    PageFade,
    PageSlide,
    GlassLift,
    ModalPop,
}

impl ViewTransitionPresetName {
    pub const ALL: [ViewTransitionPresetName; 4] = [
        ViewTransitionPresetName::PageFade,
        ViewTransitionPresetName::PageSlide,
        ViewTransitionPresetName::GlassLift,
        ViewTransitionPresetName::ModalPop,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ViewTransitionPresetName::PageFade => "pageFade",
            ViewTransitionPresetName::PageSlide => "pageSlide",
            ViewTransitionPresetName::GlassLift => "glassLift",
            ViewTransitionPresetName::ModalPop => "modalPop",
        }
    }
}

impl fmt::Display for ViewTransitionPresetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ViewTransitionPresetName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewTransitionPresetName::ALL
            .into_iter()
            .find(|name| name.name() == s)
            .ok_or_else(|| ConfigError::unknown_preset("view transition", s))
    }
}

/// Visual state of an element at one end of a transition
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionFrame {
    pub opacity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub translate_z: f64,
    pub scale: f64,
    /// Gaussian blur radius (px)
    pub blur: f64,
}

impl TransitionFrame {
    /// Fully visible, untransformed
    pub const IDENTITY: TransitionFrame = TransitionFrame {
        opacity: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
        translate_z: 0.0,
        scale: 1.0,
        blur: 0.0,
    };

    /// Invisible but otherwise untransformed
    pub const HIDDEN: TransitionFrame = TransitionFrame {
        opacity: 0.0,
        ..TransitionFrame::IDENTITY
    };

    pub const fn translated(self, x: f64, y: f64) -> Self {
        Self {
            translate_x: x,
            translate_y: y,
            ..self
        }
    }

    pub const fn scaled(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    pub const fn blurred(self, blur: f64) -> Self {
        Self { blur, ..self }
    }

    pub fn transform(&self) -> String {
        format!(
            "translate3d({}, {}, {}) scale3d({}, {}, 1)",
            format_px(self.translate_x),
            format_px(self.translate_y),
            format_px(self.translate_z),
            format_number(self.scale),
            format_number(self.scale)
        )
    }

    pub fn filter(&self) -> String {
        format!("blur({})", format_px(self.blur))
    }
}

impl Default for TransitionFrame {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// One animated leg of a preset
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionStep {
    /// Frame the element animates to
    pub frame: TransitionFrame,
    pub duration_ms: f64,
    pub easing: CubicBezier,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewTransitionPreset {
    pub name: ViewTransitionPresetName,
    pub initial: TransitionFrame,
    pub enter: TransitionStep,
    pub exit: TransitionStep,
}

static PAGE_FADE: ViewTransitionPreset = ViewTransitionPreset {
    name: ViewTransitionPresetName::PageFade,
    initial: TransitionFrame::HIDDEN,
    enter: TransitionStep {
        frame: TransitionFrame::IDENTITY,
        duration_ms: 240.0,
        easing: CubicBezier::STANDARD,
    },
    exit: TransitionStep {
        frame: TransitionFrame::HIDDEN,
        duration_ms: 180.0,
        easing: CubicBezier::ACCELERATE,
    },
};

static PAGE_SLIDE: ViewTransitionPreset = ViewTransitionPreset {
    name: ViewTransitionPresetName::PageSlide,
    initial: TransitionFrame::HIDDEN.translated(24.0, 0.0),
    enter: TransitionStep {
        frame: TransitionFrame::IDENTITY,
        duration_ms: 320.0,
        easing: CubicBezier::EMPHASIZED,
    },
    exit: TransitionStep {
        frame: TransitionFrame::HIDDEN.translated(-24.0, 0.0),
        duration_ms: 220.0,
        easing: CubicBezier::ACCELERATE,
    },
};

static GLASS_LIFT: ViewTransitionPreset = ViewTransitionPreset {
    name: ViewTransitionPresetName::GlassLift,
    initial: TransitionFrame::HIDDEN
        .translated(0.0, 12.0)
        .scaled(0.98)
        .blurred(8.0),
    enter: TransitionStep {
        frame: TransitionFrame::IDENTITY,
        duration_ms: 360.0,
        easing: CubicBezier::GLASS,
    },
    exit: TransitionStep {
        frame: TransitionFrame::HIDDEN
            .translated(0.0, -8.0)
            .scaled(0.98)
            .blurred(6.0),
        duration_ms: 240.0,
        easing: CubicBezier::ACCELERATE,
    },
};

static MODAL_POP: ViewTransitionPreset = ViewTransitionPreset {
    name: ViewTransitionPresetName::ModalPop,
    initial: TransitionFrame::HIDDEN.translated(0.0, 8.0).scaled(0.94),
    enter: TransitionStep {
        frame: TransitionFrame::IDENTITY,
        duration_ms: 280.0,
        easing: CubicBezier::EMPHASIZED,
    },
    exit: TransitionStep {
        frame: TransitionFrame::HIDDEN.scaled(0.96),
        duration_ms: 200.0,
        easing: CubicBezier::ACCELERATE,
    },
};

/// Look up a preset definition
pub fn view_transition_preset(name: ViewTransitionPresetName) -> &'static ViewTransitionPreset {
    match name {
        ViewTransitionPresetName::PageFade => &PAGE_FADE,
        ViewTransitionPresetName::PageSlide => &PAGE_SLIDE,
        ViewTransitionPresetName::GlassLift => &GLASS_LIFT,
        ViewTransitionPresetName::ModalPop => &MODAL_POP,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewTransitionOptions {
    /// Drop every animated property except opacity and make it instant
    pub reduced_motion: bool,
    /// Multiplier on preset durations, clamped to `[0, 10]`
    pub duration_scale: f64,
    /// Per-index delay added by [`resolve_child_transition`]
    pub child_stagger_ms: f64,
    pub max_child_delay_ms: f64,
}

impl Default for ViewTransitionOptions {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            duration_scale: 1.0,
            child_stagger_ms: DEFAULT_CHILD_STAGGER_MS,
            max_child_delay_ms: DEFAULT_MAX_CHILD_DELAY_MS,
        }
    }
}

impl ViewTransitionOptions {
    pub fn reduced() -> Self {
        Self {
            reduced_motion: true,
            ..Self::default()
        }
    }

    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    pub fn with_duration_scale(mut self, duration_scale: f64) -> Self {
        self.duration_scale = duration_scale;
        self
    }

    pub fn with_child_stagger_ms(mut self, child_stagger_ms: f64) -> Self {
        self.child_stagger_ms = child_stagger_ms;
        self
    }

    pub fn with_max_child_delay_ms(mut self, max_child_delay_ms: f64) -> Self {
        self.max_child_delay_ms = max_child_delay_ms;
        self
    }

    pub fn clamped(self) -> Self {
        let finite_or = |value: f64, fallback: f64| {
            if value.is_finite() {
                value
            } else {
                fallback
            }
        };
        let clamped = Self {
            reduced_motion: self.reduced_motion,
            duration_scale: clamp(finite_or(self.duration_scale, 1.0), 0.0, MAX_DURATION_SCALE),
            child_stagger_ms: finite_or(self.child_stagger_ms, 0.0).max(0.0),
            max_child_delay_ms: finite_or(self.max_child_delay_ms, 0.0).max(0.0),
        };
        if clamped != self {
            debug!(requested = ?self, clamped = ?clamped, "view transition options clamped");
        }
        clamped
    }
}

/// Inline style for one phase of a transition
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDescriptor {
    pub opacity: f64,
    pub transform: String,
    pub filter: String,
    pub transition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition_delay: Option<String>,
}

impl StyleDescriptor {
    fn still(frame: &TransitionFrame) -> Self {
        Self {
            opacity: frame.opacity,
            transform: frame.transform(),
            filter: frame.filter(),
            transition: NONE.to_string(),
            transition_delay: None,
        }
    }

    fn animated(step: &TransitionStep, duration_ms: f64) -> Self {
        let timing = format!("{} {}", format_ms(duration_ms), step.easing.to_css());
        Self {
            opacity: step.frame.opacity,
            transform: step.frame.transform(),
            filter: step.frame.filter(),
            transition: format!("opacity {timing}, transform {timing}, filter {timing}"),
            transition_delay: None,
        }
    }

    fn reduced(frame: &TransitionFrame) -> Self {
        Self {
            opacity: frame.opacity,
            transform: NONE.to_string(),
            filter: NONE.to_string(),
            transition: NONE.to_string(),
            transition_delay: None,
        }
    }
}

/// Styles and timings for a preset after options are applied
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedViewTransition {
    pub preset: ViewTransitionPresetName,
    pub initial: StyleDescriptor,
    pub enter: StyleDescriptor,
    pub exit: StyleDescriptor,
    pub enter_duration_ms: f64,
    pub exit_duration_ms: f64,
    /// Delay applied to `enter`, non-zero only for staggered children
    pub enter_delay_ms: f64,
    /// Easing of the enter step
    pub enter_easing: CubicBezier,
    pub exit_easing: CubicBezier,
}

fn scaled_duration(base_ms: f64, scale: f64) -> f64 {
    (base_ms * scale).round().max(MIN_DURATION_MS)
}

/// Resolve a preset into initial/enter/exit styles
pub fn resolve_view_transition(
    name: ViewTransitionPresetName,
    options: &ViewTransitionOptions,
) -> ResolvedViewTransition {
    let options = options.clamped();
    let preset = view_transition_preset(name);

    if options.reduced_motion {
        debug!(preset = %name, "view transition reduced");
        return ResolvedViewTransition {
            preset: name,
            initial: StyleDescriptor::reduced(&preset.initial),
            enter: StyleDescriptor::reduced(&preset.enter.frame),
            exit: StyleDescriptor::reduced(&preset.exit.frame),
            enter_duration_ms: MIN_DURATION_MS,
            exit_duration_ms: MIN_DURATION_MS,
            enter_delay_ms: 0.0,
            enter_easing: preset.enter.easing,
            exit_easing: preset.exit.easing,
        };
    }

    let enter_duration_ms = scaled_duration(preset.enter.duration_ms, options.duration_scale);
    let exit_duration_ms = scaled_duration(preset.exit.duration_ms, options.duration_scale);

    ResolvedViewTransition {
        preset: name,
        initial: StyleDescriptor::still(&preset.initial),
        enter: StyleDescriptor::animated(&preset.enter, enter_duration_ms),
        exit: StyleDescriptor::animated(&preset.exit, exit_duration_ms),
        enter_duration_ms,
        exit_duration_ms,
        enter_delay_ms: 0.0,
        enter_easing: preset.enter.easing,
        exit_easing: preset.exit.easing,
    }
}

/// Like [`resolve_view_transition`], with a per-index enter delay of
/// `index * child_stagger_ms` capped at `max_child_delay_ms`. Reduced motion
/// skips the delay.
pub fn resolve_child_transition(
    name: ViewTransitionPresetName,
    index: usize,
    options: &ViewTransitionOptions,
) -> ResolvedViewTransition {
    let options = options.clamped();
    let mut resolved = resolve_view_transition(name, &options);
    if options.reduced_motion {
        return resolved;
    }

    let delay = (index as f64 * options.child_stagger_ms).min(options.max_child_delay_ms);
    resolved.enter_delay_ms = delay;
    resolved.enter.transition_delay = Some(format_ms(delay));
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_fade_durations() {
        let resolved =
            resolve_view_transition(ViewTransitionPresetName::PageFade, &Default::default());
        assert_eq!(resolved.enter_duration_ms, 240.0);
        assert_eq!(resolved.exit_duration_ms, 180.0);
        assert_eq!(resolved.initial.opacity, 0.0);
        assert_eq!(resolved.enter.opacity, 1.0);
        assert_eq!(resolved.initial.transition, "none");
        assert!(resolved
            .enter
            .transition
            .starts_with("opacity 240ms cubic-bezier(0.4, 0, 0.2, 1)"));
    }

    #[test]
    fn test_reduced_motion_is_instant() {
        for name in ViewTransitionPresetName::ALL {
            let resolved = resolve_view_transition(name, &ViewTransitionOptions::reduced());
            assert_eq!(resolved.enter_duration_ms, 1.0);
            assert_eq!(resolved.exit_duration_ms, 1.0);
            for style in [&resolved.initial, &resolved.enter, &resolved.exit] {
                assert_eq!(style.transition, "none");
                assert_eq!(style.transform, "none");
                assert_eq!(style.filter, "none");
            }
            // Terminal opacity is kept
            assert_eq!(resolved.enter.opacity, 1.0);
            assert_eq!(resolved.exit.opacity, 0.0);
        }
    }

    #[test]
    fn test_duration_scale() {
        let half = ViewTransitionOptions::default().with_duration_scale(0.5);
        let resolved = resolve_view_transition(ViewTransitionPresetName::PageSlide, &half);
        assert_eq!(resolved.enter_duration_ms, 160.0);
        assert_eq!(resolved.exit_duration_ms, 110.0);

        let zero = ViewTransitionOptions::default().with_duration_scale(0.0);
        let resolved = resolve_view_transition(ViewTransitionPresetName::PageSlide, &zero);
        assert_eq!(resolved.enter_duration_ms, 1.0);
        assert_eq!(resolved.exit_duration_ms, 1.0);

        let huge = ViewTransitionOptions::default().with_duration_scale(1e9);
        let resolved = resolve_view_transition(ViewTransitionPresetName::PageFade, &huge);
        assert_eq!(resolved.enter_duration_ms, 2400.0);
    }

    #[test]
    fn test_frame_strings() {
        let preset = view_transition_preset(ViewTransitionPresetName::GlassLift);
        assert_eq!(
            preset.initial.transform(),
            "translate3d(0px, 12px, 0px) scale3d(0.98, 0.98, 1)"
        );
        assert_eq!(preset.initial.filter(), "blur(8px)");
        assert_eq!(TransitionFrame::IDENTITY.filter(), "blur(0px)");
    }

    #[test]
    fn test_child_stagger() {
        let options = ViewTransitionOptions::default();
        let first = resolve_child_transition(ViewTransitionPresetName::ModalPop, 0, &options);
        let third = resolve_child_transition(ViewTransitionPresetName::ModalPop, 2, &options);
        let far = resolve_child_transition(ViewTransitionPresetName::ModalPop, 50, &options);

        assert_eq!(first.enter.transition_delay.as_deref(), Some("0ms"));
        assert_eq!(third.enter.transition_delay.as_deref(), Some("80ms"));
        assert_eq!(far.enter_delay_ms, 400.0);
        assert_eq!(third.exit.transition_delay, None);

        let reduced = resolve_child_transition(
            ViewTransitionPresetName::ModalPop,
            2,
            &ViewTransitionOptions::reduced(),
        );
        assert_eq!(reduced.enter.transition_delay, None);
        assert_eq!(reduced.enter_delay_ms, 0.0);
    }

    #[test]
    fn test_child_delay_cap() {
        let options = ViewTransitionOptions::default()
            .with_child_stagger_ms(30.0)
            .with_max_child_delay_ms(100.0);
        let third = resolve_child_transition(ViewTransitionPresetName::ModalPop, 3, &options);
        let sixth = resolve_child_transition(ViewTransitionPresetName::ModalPop, 5, &options);

        assert_eq!(third.enter_delay_ms, 90.0);
        assert_eq!(sixth.enter_delay_ms, 100.0);
        assert_eq!(sixth.enter.transition_delay.as_deref(), Some("100ms"));

        let non_finite_cap = resolve_child_transition(
            ViewTransitionPresetName::ModalPop,
            5,
            &options.with_max_child_delay_ms(f64::NAN),
        );
        assert_eq!(non_finite_cap.enter_delay_ms, 0.0);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let options = ViewTransitionOptions::default().with_duration_scale(1.3);
        for name in ViewTransitionPresetName::ALL {
            assert_eq!(
                resolve_view_transition(name, &options),
                resolve_view_transition(name, &options)
            );
        }
    }

    #[test]
    fn test_descriptor_json_uses_css_names() {
        let resolved = resolve_child_transition(
            ViewTransitionPresetName::PageFade,
            1,
            &ViewTransitionOptions::default(),
        );
        let json = serde_json::to_value(&resolved.enter).unwrap();
        assert_eq!(json["transitionDelay"], "40ms");
        assert!(json.get("opacity").is_some());

        let json = serde_json::to_value(&resolved.exit).unwrap();
        assert!(json.get("transitionDelay").is_none());
    }

    #[test]
    fn test_preset_names() {
        assert_eq!(
            "glassLift".parse::<ViewTransitionPresetName>().unwrap(),
            ViewTransitionPresetName::GlassLift
        );
        assert!("slideUp".parse::<ViewTransitionPresetName>().is_err());
    }
}
