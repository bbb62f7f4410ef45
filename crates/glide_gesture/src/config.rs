//! Gesture configuration loading
//!
//! All recognizer options can be supplied from a TOML document. Missing
//! tables or fields fall back to their defaults; out-of-range values are
//! clamped when a recognizer is built from the config.
//!
//! ```toml
//! [drag]
//! axis = "x"
//! threshold = 4.0
//!
//! [swipe]
//! distanceThreshold = 48.0
//!
//! [pinch]
//! minScale = 1.0
//! maxScale = 3.0
//! ```

use glide_core::ConfigError;
use serde::{Deserialize, Serialize};

use crate::drag::{DragOptions, DragRecognizer};
use crate::pinch::{PinchOptions, PinchRecognizer};
use crate::swipe::{SwipeOptions, SwipeRecognizer};

/// Options for every recognizer in one place
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    pub drag: DragOptions,
    pub swipe: SwipeOptions,
    pub pinch: PinchOptions,
}

impl GestureConfig {
    /// Parse a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Copy with every option clamped into its safe range
    pub fn clamped(self) -> Self {
        Self {
            drag: self.drag.clamped(),
            swipe: self.swipe.clamped(),
            pinch: self.pinch.clamped(),
        }
    }

    pub fn drag_recognizer(&self) -> DragRecognizer {
        DragRecognizer::new(self.drag)
    }

    pub fn swipe_recognizer(&self) -> SwipeRecognizer {
        SwipeRecognizer::new(self.swipe)
    }

    pub fn pinch_recognizer(&self) -> PinchRecognizer {
        PinchRecognizer::new(self.pinch)
    }
}
