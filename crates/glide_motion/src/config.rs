//! Motion configuration loading
//!
//! ```toml
//! reducedMotion = false
//! durationScale = 1.25
//! spring = "bouncy"
//!
//! [stagger]
//! direction = "center-out"
//! stepMs = 30.0
//! ```
//!
//! The top-level `reducedMotion` flag wins over the per-section ones.

use glide_core::ConfigError;
use serde::{Deserialize, Serialize};

use crate::spring::{resolve_spring_physics, ResolvedSpring, SpringInput};
use crate::stagger::StaggerOptions;
use crate::view_transition::ViewTransitionOptions;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MotionConfig {
    pub reduced_motion: bool,
    pub duration_scale: f64,
    pub stagger: StaggerOptions,
    pub spring: SpringInput,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            duration_scale: 1.0,
            stagger: StaggerOptions::default(),
            spring: SpringInput::default(),
        }
    }
}

impl MotionConfig {
    /// Parse a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Stagger options for a collection of `count` items
    pub fn stagger_options(&self, count: usize) -> StaggerOptions {
        StaggerOptions {
            count,
            reduced_motion: self.reduced_motion || self.stagger.reduced_motion,
            ..self.stagger
        }
        .clamped()
    }

    pub fn view_transition_options(&self) -> ViewTransitionOptions {
        ViewTransitionOptions::default()
            .with_reduced_motion(self.reduced_motion)
            .with_duration_scale(self.duration_scale)
            .clamped()
    }

    pub fn resolve_spring(&self) -> ResolvedSpring {
        resolve_spring_physics(self.spring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spring::{SpringParams, SpringPreset};
    use crate::stagger::StaggerDirection;

    #[test]
    fn test_empty_document_is_default() {
        let config = MotionConfig::from_toml_str("").unwrap();
        assert_eq!(config, MotionConfig::default());
    }

    #[test]
    fn test_full_document() {
        let config = MotionConfig::from_toml_str(
            r#"
            reducedMotion = true
            durationScale = 20.0
            spring = "bouncy"

            [stagger]
            direction = "edges-in"
            stepMs = 30.0
            "#,
        )
        .unwrap();

        assert_eq!(config.spring, SpringInput::Preset(SpringPreset::Bouncy));
        assert_eq!(config.stagger.direction, StaggerDirection::EdgesIn);

        let stagger = config.stagger_options(4);
        assert_eq!(stagger.count, 4);
        assert_eq!(stagger.step_ms, 30.0);
        assert!(stagger.reduced_motion);

        let view = config.view_transition_options();
        assert!(view.reduced_motion);
        assert_eq!(view.duration_scale, 10.0);
    }

    #[test]
    fn test_custom_spring_table() {
        let config = MotionConfig::from_toml_str(
            r#"
            [spring]
            tension = 10000.0
            friction = 20.0
            "#,
        )
        .unwrap();

        let SpringInput::Custom(params) = config.spring else {
            panic!("expected custom spring");
        };
        assert_eq!(params, SpringParams::new(10000.0, 20.0, 1.0));
        assert_eq!(config.resolve_spring().params.tension, 800.0);
    }

    #[test]
    fn test_unknown_direction_is_an_error() {
        let err = MotionConfig::from_toml_str("[stagger]\ndirection = \"spiral\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }
}
