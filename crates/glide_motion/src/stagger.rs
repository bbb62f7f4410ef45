//! Staggered delays for collections
//!
//! Each index gets a rank under the chosen traversal and a delay of
//! `initial + rank * step`, clamped into `[0, max_delay]`. Indices with the
//! same rank (the two middles of an even-length center-out list, say) share
//! a delay; [`StaggerSequence::order`] breaks those ties by index so the
//! traversal order is total.

use std::fmt;
use std::str::FromStr;

use glide_core::{clamp, ConfigError};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::css::format_ms;

pub const DEFAULT_STEP_MS: f64 = 40.0;
pub const DEFAULT_MAX_DELAY_MS: f64 = 1000.0;
/// Largest collection a sequence is computed for
pub const MAX_STAGGER_COUNT: usize = 10_000;

/// Traversal order for staggered children
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StaggerDirection {
    /// First to last
    #[default]
    Forward,
    /// Last to first
    Reverse,
    /// Middle first, edges last
    CenterOut,
    /// Edges first, middle last
    EdgesIn,
}

impl StaggerDirection {
    pub const ALL: [StaggerDirection; 4] = [
        StaggerDirection::Forward,
        StaggerDirection::Reverse,
        StaggerDirection::CenterOut,
        StaggerDirection::EdgesIn,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StaggerDirection::Forward => "forward",
            StaggerDirection::Reverse => "reverse",
            StaggerDirection::CenterOut => "center-out",
            StaggerDirection::EdgesIn => "edges-in",
        }
    }
}

impl fmt::Display for StaggerDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StaggerDirection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StaggerDirection::ALL
            .into_iter()
            .find(|direction| direction.name() == s)
            .ok_or_else(|| ConfigError::unknown_preset("stagger direction", s))
    }
}

/// Options for a staggered collection
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StaggerOptions {
    pub count: usize,
    pub direction: StaggerDirection,
    pub step_ms: f64,
    pub max_delay_ms: f64,
    pub initial_delay_ms: f64,
    /// Every delay becomes 0
    pub reduced_motion: bool,
}

impl Default for StaggerOptions {
    fn default() -> Self {
        Self {
            count: 0,
            direction: StaggerDirection::Forward,
            step_ms: DEFAULT_STEP_MS,
            max_delay_ms: DEFAULT_MAX_DELAY_MS,
            initial_delay_ms: 0.0,
            reduced_motion: false,
        }
    }
}

impl StaggerOptions {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    pub fn with_direction(mut self, direction: StaggerDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_step_ms(mut self, step_ms: f64) -> Self {
        self.step_ms = step_ms;
        self
    }

    pub fn with_max_delay_ms(mut self, max_delay_ms: f64) -> Self {
        self.max_delay_ms = max_delay_ms;
        self
    }

    pub fn with_initial_delay_ms(mut self, initial_delay_ms: f64) -> Self {
        self.initial_delay_ms = initial_delay_ms;
        self
    }

    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    /// Copy with negative or non-finite timings zeroed and `count` capped
    pub fn clamped(self) -> Self {
        let clamped = Self {
            count: self.count.min(MAX_STAGGER_COUNT),
            step_ms: non_negative(self.step_ms),
            max_delay_ms: non_negative(self.max_delay_ms),
            initial_delay_ms: non_negative(self.initial_delay_ms),
            ..self
        };
        if clamped != self {
            debug!(requested = ?self, clamped = ?clamped, "stagger options clamped");
        }
        clamped
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// Position of `index` in the traversal. Out-of-range indices are clamped
/// to the last element.
pub fn stagger_rank(index: usize, count: usize, direction: StaggerDirection) -> usize {
    let count = count.max(1);
    let index = index.min(count - 1);
    let last = count - 1;
    // |2i - last| / 2 without doubling the index
    let center_out = index.abs_diff(last - index) / 2;

    match direction {
        StaggerDirection::Forward => index,
        StaggerDirection::Reverse => last - index,
        StaggerDirection::CenterOut => center_out,
        StaggerDirection::EdgesIn => last / 2 - center_out,
    }
}

/// Delay for a single index in milliseconds
pub fn resolve_stagger_delay(index: usize, options: &StaggerOptions) -> f64 {
    let options = options.clamped();
    if options.reduced_motion {
        return 0.0;
    }
    let rank = stagger_rank(index, options.count, options.direction);
    delay_for_rank(rank, &options)
}

fn delay_for_rank(rank: usize, options: &StaggerOptions) -> f64 {
    clamp(
        options.initial_delay_ms + rank as f64 * options.step_ms,
        0.0,
        options.max_delay_ms,
    )
}

/// `{ transitionDelay: "<ms>ms" }`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaggerStyle {
    pub transition_delay: String,
}

/// Precomputed delays for a whole collection
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StaggerSequence {
    /// Delay per index (ms)
    pub delays: Vec<f64>,
    /// Indices in start order, ties broken by ascending index
    pub order: Vec<usize>,
}

impl StaggerSequence {
    pub fn len(&self) -> usize {
        self.delays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delays.is_empty()
    }

    /// Delay for `index`, clamped into range. An empty sequence yields 0.
    pub fn delay(&self, index: usize) -> f64 {
        match self.delays.len() {
            0 => 0.0,
            len => self.delays[index.min(len - 1)],
        }
    }

    pub fn get_style(&self, index: usize) -> StaggerStyle {
        StaggerStyle {
            transition_delay: format_ms(self.delay(index)),
        }
    }
}

/// Compute delays for every index at once
pub fn create_stagger_sequence(options: &StaggerOptions) -> StaggerSequence {
    let options = options.clamped();
    let count = options.count;

    let ranks: Vec<usize> = (0..count)
        .map(|index| stagger_rank(index, count, options.direction))
        .collect();

    let delays = if options.reduced_motion {
        vec![0.0; count]
    } else {
        ranks
            .iter()
            .map(|&rank| delay_for_rank(rank, &options))
            .collect()
    };

    let mut order: Vec<usize> = (0..count).collect();
    order.sort_by_key(|&index| (ranks[index], index));

    StaggerSequence { delays, order }
}
