//! Geometric primitives: Offset, ScreenSize

use std::ops::{Add, AddAssign, Neg, Sub};

/// Two-component displacement in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub fn distance(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, rhs: Offset) -> Offset {
        Offset::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Offset {
    fn add_assign(&mut self, rhs: Offset) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Offset {
    type Output = Offset;

    fn sub(self, rhs: Offset) -> Offset {
        Offset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Offset {
    type Output = Offset;

    fn neg(self) -> Offset {
        Offset::new(-self.x, -self.y)
    }
}

/// Visible area of the device in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenSize {
    pub width: f32,
    pub height: f32,
}

impl ScreenSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Offset from the screen center to a corner, pulled inwards by `inset`.
    pub fn corner(&self, right: bool, bottom: bool, inset: f32) -> Offset {
        let half_w = self.width / 2.0 - inset;
        let half_h = self.height / 2.0 - inset;
        Offset::new(
            if right { half_w } else { -half_w },
            if bottom { half_h } else { -half_h },
        )
    }
}

impl Default for ScreenSize {
    fn default() -> Self {
        Self::new(390.0, 844.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_arithmetic() {
        let a = Offset::new(3.0, 4.0);
        assert_eq!(a.distance(), 5.0);
        assert_eq!(a + Offset::new(1.0, -1.0), Offset::new(4.0, 3.0));
        assert_eq!(a - a, Offset::ZERO);
        assert_eq!(-a, Offset::new(-3.0, -4.0));
    }

    #[test]
    fn corners_are_inset_from_screen_edges() {
        let size = ScreenSize::new(400.0, 800.0);
        assert_eq!(size.corner(false, false, 50.0), Offset::new(-150.0, -350.0));
        assert_eq!(size.corner(true, true, 50.0), Offset::new(150.0, 350.0));
    }
}
