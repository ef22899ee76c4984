use crate::{ConfigError, Easing};

/// Fixed-duration transition following an easing curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingSpec {
    pub duration_millis: u64,
    pub easing: Easing,
    /// Time to hold the start value before progress begins.
    pub delay_millis: u64,
}

impl TimingSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

impl Default for TimingSpec {
    fn default() -> Self {
        Self::tween(500, Easing::EaseInOut)
    }
}

/// Damped harmonic oscillator parameters.
///
/// The spring stops once the absolute speed is at most
/// `rest_speed_threshold` and the distance to the target is at most
/// `rest_displacement_threshold`, then snaps exactly onto the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Units per second at the start of the transition. Zero lets a spring
    /// that preempts another spring inherit its velocity.
    pub initial_velocity: f32,
    pub rest_speed_threshold: f32,
    pub rest_displacement_threshold: f32,
    /// Finish as soon as the value crosses the target instead of bouncing.
    pub overshoot_clamping: bool,
}

impl SpringSpec {
    pub const DEFAULT_TENSION: f32 = 40.0;
    pub const DEFAULT_FRICTION: f32 = 7.0;
    pub const DEFAULT_REST_THRESHOLD: f32 = 0.001;

    pub fn from_stiffness_damping(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            initial_velocity: 0.0,
            rest_speed_threshold: Self::DEFAULT_REST_THRESHOLD,
            rest_displacement_threshold: Self::DEFAULT_REST_THRESHOLD,
            overshoot_clamping: false,
        }
    }

    /// Build from Origami-style tension and friction.
    pub fn from_tension_friction(tension: f32, friction: f32) -> Self {
        Self::from_stiffness_damping(
            tension_to_stiffness(tension),
            friction_to_damping(friction),
            1.0,
        )
    }

    /// Build from a damping ratio: 1.0 is critically damped, below 1.0 bounces.
    pub fn from_damping_ratio(damping_ratio: f32, stiffness: f32) -> Self {
        let mass = 1.0;
        let damping = 2.0 * damping_ratio * (stiffness * mass).sqrt();
        Self::from_stiffness_damping(stiffness, damping, mass)
    }

    /// Replace stiffness with the one the given tension maps to.
    pub fn with_tension(mut self, tension: f32) -> Self {
        self.stiffness = tension_to_stiffness(tension);
        self
    }

    pub fn with_friction(mut self, friction: f32) -> Self {
        self.damping = friction_to_damping(friction);
        self
    }

    pub fn with_rest_thresholds(mut self, speed: f32, displacement: f32) -> Self {
        self.rest_speed_threshold = speed;
        self.rest_displacement_threshold = displacement;
        self
    }

    pub fn with_initial_velocity(mut self, velocity: f32) -> Self {
        self.initial_velocity = velocity;
        self
    }

    pub fn with_overshoot_clamping(mut self, clamp: bool) -> Self {
        self.overshoot_clamping = clamp;
        self
    }

    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("stiffness", self.stiffness),
            ("damping", self.damping),
            ("mass", self.mass),
            ("initial_velocity", self.initial_velocity),
            ("rest_speed_threshold", self.rest_speed_threshold),
            ("rest_displacement_threshold", self.rest_displacement_threshold),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteValue { field, value });
            }
        }
        if self.stiffness <= 0.0 {
            return Err(ConfigError::InvalidSpring {
                reason: "stiffness must be positive",
            });
        }
        if self.mass <= 0.0 {
            return Err(ConfigError::InvalidSpring {
                reason: "mass must be positive",
            });
        }
        // Without damping the spring never comes to rest.
        if self.damping <= 0.0 {
            return Err(ConfigError::InvalidSpring {
                reason: "damping must be positive",
            });
        }
        if self.rest_speed_threshold < 0.0 || self.rest_displacement_threshold < 0.0 {
            return Err(ConfigError::InvalidSpring {
                reason: "rest thresholds must not be negative",
            });
        }
        Ok(())
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::from_tension_friction(Self::DEFAULT_TENSION, Self::DEFAULT_FRICTION)
    }
}

fn tension_to_stiffness(tension: f32) -> f32 {
    (tension - 30.0) * 3.62 + 194.0
}

fn friction_to_damping(friction: f32) -> f32 {
    (friction - 8.0) * 3.0 + 25.0
}

/// How a tracked value moves toward its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionProfile {
    Timing(TimingSpec),
    Spring(SpringSpec),
}

impl MotionProfile {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            MotionProfile::Timing(_) => Ok(()),
            MotionProfile::Spring(spec) => spec.validate(),
        }
    }
}

impl Default for MotionProfile {
    fn default() -> Self {
        MotionProfile::Timing(TimingSpec::default())
    }
}

impl From<TimingSpec> for MotionProfile {
    fn from(spec: TimingSpec) -> Self {
        MotionProfile::Timing(spec)
    }
}

impl From<SpringSpec> for MotionProfile {
    fn from(spec: SpringSpec) -> Self {
        MotionProfile::Spring(spec)
    }
}
