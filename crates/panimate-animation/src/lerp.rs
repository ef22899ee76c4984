use panimate_graphics::{Angle, Offset, Rgb};

/// Trait for types that can be linearly interpolated.
///
/// `fraction` is 0 at `self` and 1 at `target`; values outside `[0, 1]`
/// extrapolate along the same line.
pub trait Lerp: Clone {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;

    /// The output an interpolator passes through unchanged when extrapolating
    /// with [`Extrapolate::Identity`](crate::Extrapolate::Identity). Only
    /// scalar outputs have one.
    fn from_input(input: f32) -> Option<Self> {
        let _ = input;
        None
    }
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }

    fn from_input(input: f32) -> Option<Self> {
        Some(input)
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }

    fn from_input(input: f32) -> Option<Self> {
        Some(input as f64)
    }
}

impl Lerp for Angle {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Angle::degrees(self.as_degrees().lerp(&target.as_degrees(), fraction))
    }
}

/// Channels blend independently and are rounded back into `[0, 255]`.
impl Lerp for Rgb {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        let channel = |from: u8, to: u8| (from as f32).lerp(&(to as f32), fraction);
        Rgb::from_channels(
            channel(self.r, target.r),
            channel(self.g, target.g),
            channel(self.b, target.b),
        )
    }
}

impl Lerp for Offset {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Offset::new(
            self.x.lerp(&target.x, fraction),
            self.y.lerp(&target.y, fraction),
        )
    }
}
