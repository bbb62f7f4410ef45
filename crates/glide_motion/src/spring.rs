//! Spring physics resolution
//!
//! Turns a named preset or a custom tension/friction/mass record into a
//! damping ratio, a settling duration, and a cubic-bezier that approximates
//! the spring for callers that only have CSS timing available.
//!
//! The settling duration is measured, not estimated: an RK4-integrated
//! [`Spring`] is driven from 0 to 1 at 1 ms steps until it rests within the
//! configured precision band.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use glide_core::{clamp, ConfigError};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::easing::CubicBezier;

/// Integration step used when measuring settling time (seconds)
const SETTLE_STEP_S: f64 = 0.001;
/// Longest settling duration ever reported (ms)
pub const MAX_SETTLING_MS: f64 = 10_000.0;
/// Upper bound on the overshoot encoded into the easing curve
const MAX_OVERSHOOT: f64 = 0.9;

pub const TENSION_RANGE: (f64, f64) = (20.0, 800.0);
pub const FRICTION_RANGE: (f64, f64) = (1.0, 200.0);
pub const MASS_RANGE: (f64, f64) = (0.1, 20.0);
pub const VELOCITY_RANGE: (f64, f64) = (-100.0, 100.0);
pub const PRECISION_RANGE: (f64, f64) = (0.0001, 0.1);

/// Named spring configurations
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpringPreset {
    /// Slow with a little overshoot (page-level motion)
    Gentle,
    /// Near-critically damped, the default
    Smooth,
    /// Fast and firm (buttons, toggles)
    Snappy,
    /// Visible overshoot for playful UI
    Bouncy,
}

impl SpringPreset {
    pub const ALL: [SpringPreset; 4] = [
        SpringPreset::Gentle,
        SpringPreset::Smooth,
        SpringPreset::Snappy,
        SpringPreset::Bouncy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SpringPreset::Gentle => "gentle",
            SpringPreset::Smooth => "smooth",
            SpringPreset::Snappy => "snappy",
            SpringPreset::Bouncy => "bouncy",
        }
    }

    pub fn params(self) -> SpringParams {
        let (tension, friction) = match self {
            SpringPreset::Gentle => (120.0, 14.0),
            SpringPreset::Smooth => (170.0, 26.0),
            SpringPreset::Snappy => (300.0, 30.0),
            SpringPreset::Bouncy => (180.0, 12.0),
        };
        SpringParams::new(tension, friction, 1.0)
    }
}

impl fmt::Display for SpringPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpringPreset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpringPreset::ALL
            .into_iter()
            .find(|preset| preset.name() == s)
            .ok_or_else(|| ConfigError::unknown_preset("spring", s))
    }
}

/// Spring parameters in the engine's tension/friction/mass model
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringParams {
    pub tension: f64,
    pub friction: f64,
    pub mass: f64,
    /// Initial velocity toward the target (units/s)
    pub velocity: f64,
    /// Rest band for both displacement and velocity
    pub precision: f64,
}

impl SpringParams {
    pub fn new(tension: f64, friction: f64, mass: f64) -> Self {
        Self {
            tension,
            friction,
            mass,
            velocity: 0.0,
            precision: 0.01,
        }
    }

    pub fn with_velocity(mut self, velocity: f64) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_precision(mut self, precision: f64) -> Self {
        self.precision = precision;
        self
    }

    /// Copy with every field clamped into its safe range
    pub fn clamped(self) -> Self {
        let clamped = Self {
            tension: clamp(self.tension, TENSION_RANGE.0, TENSION_RANGE.1),
            friction: clamp(self.friction, FRICTION_RANGE.0, FRICTION_RANGE.1),
            mass: clamp(self.mass, MASS_RANGE.0, MASS_RANGE.1),
            velocity: clamp(self.velocity, VELOCITY_RANGE.0, VELOCITY_RANGE.1),
            precision: clamp(self.precision, PRECISION_RANGE.0, PRECISION_RANGE.1),
        };
        if clamped != self {
            debug!(requested = ?self, clamped = ?clamped, "spring params clamped");
        }
        clamped
    }

    /// Friction at which the spring stops oscillating
    pub fn critical_damping(&self) -> f64 {
        2.0 * (self.tension * self.mass).sqrt()
    }

    /// Check if the spring will oscillate around its target
    pub fn is_underdamped(&self) -> bool {
        self.friction < self.critical_damping()
    }

    pub fn damping_ratio(&self) -> f64 {
        self.friction / self.critical_damping()
    }

    /// Undamped natural frequency (rad/s)
    pub fn angular_frequency(&self) -> f64 {
        (self.tension / self.mass).sqrt()
    }
}

impl Default for SpringParams {
    fn default() -> Self {
        SpringPreset::Smooth.params()
    }
}

/// Either a preset name or explicit parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpringInput {
    Preset(SpringPreset),
    Custom(SpringParams),
}

impl SpringInput {
    /// Parameters after preset lookup and clamping
    pub fn params(self) -> SpringParams {
        match self {
            SpringInput::Preset(preset) => preset.params(),
            SpringInput::Custom(params) => params.clamped(),
        }
    }
}

impl Default for SpringInput {
    fn default() -> Self {
        SpringInput::Preset(SpringPreset::Smooth)
    }
}

impl From<SpringPreset> for SpringInput {
    fn from(preset: SpringPreset) -> Self {
        SpringInput::Preset(preset)
    }
}

impl From<SpringParams> for SpringInput {
    fn from(params: SpringParams) -> Self {
        SpringInput::Custom(params)
    }
}

/// A spring-based animator
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    params: SpringParams,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(params: SpringParams, initial: f64) -> Self {
        Self {
            params,
            value: initial,
            velocity: params.velocity,
            target: initial,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Within `precision` of the target with velocity under `precision`
    pub fn is_settled(&self) -> bool {
        let precision = self.params.precision;
        (self.value - self.target).abs() < precision && self.velocity.abs() < precision
    }

    /// Step the spring simulation using RK4 integration
    pub fn step(&mut self, dt: f64) {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let k1_v = self.acceleration(self.value, self.velocity);
        let k1_x = self.velocity;

        let k2_v = self.acceleration(
            self.value + k1_x * dt * 0.5,
            self.velocity + k1_v * dt * 0.5,
        );
        let k2_x = self.velocity + k1_v * dt * 0.5;

        let k3_v = self.acceleration(
            self.value + k2_x * dt * 0.5,
            self.velocity + k2_v * dt * 0.5,
        );
        let k3_x = self.velocity + k2_v * dt * 0.5;

        let k4_v = self.acceleration(self.value + k3_x * dt, self.velocity + k3_v * dt);
        let k4_x = self.velocity + k3_v * dt;

        self.velocity += (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v) * dt / 6.0;
        self.value += (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x) * dt / 6.0;
    }

    fn acceleration(&self, x: f64, v: f64) -> f64 {
        let spring_force = -self.params.tension * (x - self.target);
        let damping_force = -self.params.friction * v;
        (spring_force + damping_force) / self.params.mass
    }
}

/// Output of [`resolve_spring_physics`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSpring {
    /// Clamped parameters actually used
    pub params: SpringParams,
    pub damping_ratio: f64,
    pub angular_frequency: f64,
    pub settling_duration_ms: f64,
    /// Cubic-bezier approximation of the response curve
    pub easing: CubicBezier,
}

impl ResolvedSpring {
    pub fn css_easing(&self) -> String {
        self.easing.to_css()
    }
}

/// Resolve a preset or custom spring into damping, settling time and easing
pub fn resolve_spring_physics(input: impl Into<SpringInput>) -> ResolvedSpring {
    let params = input.into().params();
    let resolved = ResolvedSpring {
        params,
        damping_ratio: params.damping_ratio(),
        angular_frequency: params.angular_frequency(),
        settling_duration_ms: settling_duration_ms(params),
        easing: spring_easing(&params),
    };
    debug!(
        damping_ratio = resolved.damping_ratio,
        settling_ms = resolved.settling_duration_ms,
        "spring resolved"
    );
    resolved
}

/// Milliseconds for a unit step response to come to rest, capped at
/// [`MAX_SETTLING_MS`]
pub fn settling_duration_ms(params: SpringParams) -> f64 {
    let mut spring = Spring::new(params, 0.0);
    spring.set_target(1.0);

    let max_steps = MAX_SETTLING_MS as u32;
    for step in 0..max_steps {
        if spring.is_settled() {
            return f64::from(step);
        }
        spring.step(SETTLE_STEP_S);
    }
    MAX_SETTLING_MS
}

fn spring_easing(params: &SpringParams) -> CubicBezier {
    if !params.is_underdamped() {
        return CubicBezier::GLASS;
    }
    let zeta = params.damping_ratio();
    let overshoot = (-zeta * PI / (1.0 - zeta * zeta).sqrt()).exp().min(MAX_OVERSHOOT);
    let overshoot = (overshoot * 1000.0).round() / 1000.0;
    CubicBezier::new(0.34, 1.0 + overshoot, 0.64, 1.0)
}
