//! Piecewise-linear mapping from a tracked value to visual properties.

use std::rc::Rc;
use std::str::FromStr;

use crate::{AnimatedValue, ConfigError, Easing, Lerp};

/// Behaviour for inputs outside the breakpoint domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extrapolate {
    /// Continue along the slope of the boundary segment.
    #[default]
    Extend,
    /// Saturate at the boundary output.
    Clamp,
    /// Return the input itself. Outputs without a scalar form clamp instead.
    Identity,
}

/// Ordered `(input, output)` breakpoints with strictly increasing inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationTable<T> {
    inputs: Vec<f32>,
    outputs: Vec<T>,
}

impl<T: Lerp> InterpolationTable<T> {
    pub fn new(inputs: Vec<f32>, outputs: Vec<T>) -> Result<Self, ConfigError> {
        if inputs.len() != outputs.len() {
            return Err(ConfigError::RangeLengthMismatch {
                inputs: inputs.len(),
                outputs: outputs.len(),
            });
        }
        if inputs.len() < 2 {
            return Err(ConfigError::TooFewBreakpoints {
                count: inputs.len(),
            });
        }
        if let Some(&value) = inputs.iter().find(|value| !value.is_finite()) {
            return Err(ConfigError::NonFiniteValue {
                field: "input range",
                value,
            });
        }
        if let Some(pair) = inputs.windows(2).find(|pair| pair[1] <= pair[0]) {
            return Err(ConfigError::NonMonotonicInput {
                previous: pair[0],
                next: pair[1],
            });
        }
        Ok(Self { inputs, outputs })
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn breakpoints(&self) -> impl Iterator<Item = (f32, &T)> {
        self.inputs.iter().copied().zip(self.outputs.iter())
    }

    /// Index of the segment `input` falls into; the edge segments also cover
    /// everything beyond the domain.
    fn segment(&self, input: f32) -> usize {
        let last = self.inputs.len() - 1;
        (1..last)
            .find(|&i| self.inputs[i] >= input)
            .map_or(last - 1, |i| i - 1)
    }
}

/// Builder for an [`Interpolator`].
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationConfig<T> {
    pub input_range: Vec<f32>,
    pub output_range: Vec<T>,
    pub extrapolate_left: Extrapolate,
    pub extrapolate_right: Extrapolate,
    /// Applied to the in-segment fraction; extrapolated fractions stay linear.
    pub easing: Easing,
}

impl<T> InterpolationConfig<T> {
    pub fn new(input_range: impl Into<Vec<f32>>, output_range: impl Into<Vec<T>>) -> Self {
        Self {
            input_range: input_range.into(),
            output_range: output_range.into(),
            extrapolate_left: Extrapolate::Extend,
            extrapolate_right: Extrapolate::Extend,
            easing: Easing::Linear,
        }
    }

    /// Saturate on both sides of the domain.
    pub fn clamp(self) -> Self {
        self.extrapolate(Extrapolate::Clamp)
    }

    pub fn extrapolate(mut self, extrapolate: Extrapolate) -> Self {
        self.extrapolate_left = extrapolate;
        self.extrapolate_right = extrapolate;
        self
    }

    pub fn extrapolate_left(mut self, extrapolate: Extrapolate) -> Self {
        self.extrapolate_left = extrapolate;
        self
    }

    pub fn extrapolate_right(mut self, extrapolate: Extrapolate) -> Self {
        self.extrapolate_right = extrapolate;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

impl<T> InterpolationConfig<T>
where
    T: FromStr,
    ConfigError: From<T::Err>,
{
    /// Build a config whose outputs are written in their string form, e.g.
    /// `["-15deg", "15deg"]` or `["rgb(255, 99, 71)", "#47a6ff"]`.
    pub fn parsed<S: AsRef<str>>(
        input_range: impl Into<Vec<f32>>,
        output_range: &[S],
    ) -> Result<Self, ConfigError> {
        let outputs = output_range
            .iter()
            .map(|output| output.as_ref().parse::<T>())
            .collect::<Result<Vec<T>, _>>()?;
        Ok(Self::new(input_range, outputs))
    }
}

/// Maps a scalar input through an [`InterpolationTable`].
///
/// Evaluation never fails: out-of-domain inputs clamp or extrapolate
/// according to the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolator<T> {
    table: InterpolationTable<T>,
    extrapolate_left: Extrapolate,
    extrapolate_right: Extrapolate,
    easing: Easing,
}

impl<T: Lerp> Interpolator<T> {
    pub fn new(config: InterpolationConfig<T>) -> Result<Self, ConfigError> {
        let table = InterpolationTable::new(config.input_range, config.output_range)?;
        Ok(Self {
            table,
            extrapolate_left: config.extrapolate_left,
            extrapolate_right: config.extrapolate_right,
            easing: config.easing,
        })
    }

    pub fn table(&self) -> &InterpolationTable<T> {
        &self.table
    }

    pub fn evaluate(&self, input: f32) -> T {
        let index = self.table.segment(input);
        let (in_min, in_max) = (self.table.inputs[index], self.table.inputs[index + 1]);
        let (out_min, out_max) = (&self.table.outputs[index], &self.table.outputs[index + 1]);

        let mut x = input;
        if x.is_nan() {
            return out_min.clone();
        }
        if x < in_min {
            match self.extrapolate_left {
                Extrapolate::Extend => {}
                Extrapolate::Clamp => x = in_min,
                Extrapolate::Identity => match T::from_input(x) {
                    Some(output) => return output,
                    None => x = in_min,
                },
            }
        }
        if x > in_max {
            match self.extrapolate_right {
                Extrapolate::Extend => {}
                Extrapolate::Clamp => x = in_max,
                Extrapolate::Identity => match T::from_input(x) {
                    Some(output) => return output,
                    None => x = in_max,
                },
            }
        }

        let mut fraction = (x - in_min) / (in_max - in_min);
        if (0.0..=1.0).contains(&fraction) {
            fraction = self.easing.transform(fraction);
        }
        // Breakpoints are reproduced exactly rather than through the blend.
        if fraction == 0.0 {
            out_min.clone()
        } else if fraction == 1.0 {
            out_max.clone()
        } else {
            out_min.lerp(out_max, fraction)
        }
    }
}

/// Read-only view of an [`AnimatedValue`] through an [`Interpolator`].
///
/// Any number of views may observe the same value; reading one re-evaluates
/// against the value's current position and has no side effects.
#[derive(Clone)]
pub struct Interpolated<T> {
    source: AnimatedValue,
    interpolator: Rc<Interpolator<T>>,
}

impl<T: Lerp> Interpolated<T> {
    pub(crate) fn new(source: AnimatedValue, interpolator: Interpolator<T>) -> Self {
        Self {
            source,
            interpolator: Rc::new(interpolator),
        }
    }

    pub fn get(&self) -> T {
        self.interpolator.evaluate(self.source.get())
    }

    pub fn source(&self) -> &AnimatedValue {
        &self.source
    }

    pub fn interpolator(&self) -> &Interpolator<T> {
        &self.interpolator
    }
}

#[cfg(test)]
#[path = "tests/interpolate_tests.rs"]
mod tests;
