//! Per-frame evaluation of timed and spring motion.

use panimate_core::NANOS_PER_MILLI;

use crate::{Lerp, MotionProfile, SpringSpec, TimingSpec};

const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Step {
    pub value: f32,
    pub finished: bool,
}

impl Step {
    fn running(value: f32) -> Self {
        Self {
            value,
            finished: false,
        }
    }

    fn finished(value: f32) -> Self {
        Self {
            value,
            finished: true,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) enum Driver {
    Timing(TimingDriver),
    Spring(SpringDriver),
}

impl Driver {
    /// `start_nanos` anchors elapsed time; `None` anchors on the first frame.
    /// `carried_velocity` is the speed of the animation this one replaces.
    pub fn new(
        profile: MotionProfile,
        from: f32,
        to: f32,
        start_nanos: Option<u64>,
        carried_velocity: f32,
    ) -> Self {
        match profile {
            MotionProfile::Timing(spec) => Driver::Timing(TimingDriver {
                spec,
                from,
                to,
                start_nanos,
            }),
            MotionProfile::Spring(spec) => {
                let initial_velocity = if spec.initial_velocity == 0.0 {
                    carried_velocity
                } else {
                    spec.initial_velocity
                };
                Driver::Spring(SpringDriver {
                    spec,
                    from,
                    to,
                    initial_velocity,
                    last_velocity: initial_velocity,
                    start_nanos,
                })
            }
        }
    }

    pub fn step(&mut self, frame_nanos: u64) -> Step {
        match self {
            Driver::Timing(driver) => driver.step(frame_nanos),
            Driver::Spring(driver) => driver.step(frame_nanos),
        }
    }

    /// Current speed in units per second. Timed motion reports zero; only
    /// springs hand their momentum to a successor.
    pub fn velocity(&self) -> f32 {
        match self {
            Driver::Timing(_) => 0.0,
            Driver::Spring(driver) => driver.last_velocity,
        }
    }

    pub fn target(&self) -> f32 {
        match self {
            Driver::Timing(driver) => driver.to,
            Driver::Spring(driver) => driver.to,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct TimingDriver {
    spec: TimingSpec,
    from: f32,
    to: f32,
    start_nanos: Option<u64>,
}

impl TimingDriver {
    fn step(&mut self, frame_nanos: u64) -> Step {
        let start = *self.start_nanos.get_or_insert(frame_nanos);
        let elapsed = frame_nanos.saturating_sub(start);
        let delay = self.spec.delay_millis.saturating_mul(NANOS_PER_MILLI);
        if elapsed < delay {
            return Step::running(self.from);
        }

        let duration = self.spec.duration_millis.saturating_mul(NANOS_PER_MILLI);
        if duration == 0 {
            return Step::finished(self.to);
        }
        let linear = ((elapsed - delay) as f64 / duration as f64).min(1.0) as f32;
        if linear >= 1.0 {
            return Step::finished(self.to);
        }
        let progress = self.spec.easing.transform(linear);
        Step::running(self.from.lerp(&self.to, progress))
    }
}

#[derive(Debug, Clone)]
pub(crate) struct SpringDriver {
    spec: SpringSpec,
    from: f32,
    to: f32,
    initial_velocity: f32,
    last_velocity: f32,
    start_nanos: Option<u64>,
}

impl SpringDriver {
    fn step(&mut self, frame_nanos: u64) -> Step {
        if self.spec.validate().is_err() {
            log::warn!("invalid spring {:?}; snapping to {}", self.spec, self.to);
            self.last_velocity = 0.0;
            return Step::finished(self.to);
        }

        let start = *self.start_nanos.get_or_insert(frame_nanos);
        let elapsed = frame_nanos.saturating_sub(start);
        if elapsed == 0 {
            return Step::running(self.from);
        }

        let t = elapsed as f64 / NANOS_PER_SECOND;
        let (position, velocity) = self.evaluate(t);
        self.last_velocity = velocity as f32;
        let position = position as f32;

        let overshooting = self.spec.overshoot_clamping
            && if self.from < self.to {
                position > self.to
            } else {
                position < self.to
            };
        let resting_speed = (velocity as f32).abs() <= self.spec.rest_speed_threshold;
        let resting_place = (self.to - position).abs() <= self.spec.rest_displacement_threshold;

        if overshooting || (resting_speed && resting_place) {
            self.last_velocity = 0.0;
            Step::finished(self.to)
        } else {
            Step::running(position)
        }
    }

    /// Closed-form damped oscillator: position and velocity `t` seconds after
    /// the start.
    fn evaluate(&self, t: f64) -> (f64, f64) {
        let k = self.spec.stiffness as f64;
        let c = self.spec.damping as f64;
        let m = self.spec.mass as f64;
        let to = self.to as f64;
        let x0 = to - self.from as f64;
        let v0 = -(self.initial_velocity as f64);

        let zeta = c / (2.0 * (k * m).sqrt());
        let omega0 = (k / m).sqrt();

        if zeta < 1.0 {
            let omega1 = omega0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega0 * t).exp();
            let (sin, cos) = (omega1 * t).sin_cos();
            let a = (v0 + zeta * omega0 * x0) / omega1;
            let position = to - envelope * (a * sin + x0 * cos);
            let velocity = zeta * omega0 * envelope * (a * sin + x0 * cos)
                - envelope * (cos * (v0 + zeta * omega0 * x0) - omega1 * x0 * sin);
            (position, velocity)
        } else {
            let envelope = (-omega0 * t).exp();
            let position = to - envelope * (x0 + (v0 + omega0 * x0) * t);
            let velocity = envelope * (v0 * (t * omega0 - 1.0) + t * x0 * omega0 * omega0);
            (position, velocity)
        }
    }
}

#[cfg(test)]
#[path = "tests/driver_tests.rs"]
mod tests;
