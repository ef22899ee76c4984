//! Rotation angles and their style-sheet string form

use std::fmt;
use std::str::FromStr;

/// Rotation stored in degrees.
///
/// Displays as a signed value with a `deg` suffix (`"-15deg"`, `"5deg"`,
/// `"7.5deg"`), the form transform styles expect.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Angle {
    degrees: f32,
}

impl Angle {
    pub const ZERO: Angle = Angle { degrees: 0.0 };

    pub const fn degrees(degrees: f32) -> Self {
        Self { degrees }
    }

    pub fn radians(radians: f32) -> Self {
        Self {
            degrees: radians.to_degrees(),
        }
    }

    pub fn as_degrees(&self) -> f32 {
        self.degrees
    }

    pub fn as_radians(&self) -> f32 {
        self.degrees.to_radians()
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Three decimals; -0.0 would print as "-0deg"
        let rounded = (f64::from(self.degrees) * 1000.0).round() / 1000.0;
        let degrees = if rounded == 0.0 { 0.0 } else { rounded };
        write!(f, "{degrees}deg")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAngleError {
    input: String,
}

impl fmt::Display for ParseAngleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid angle {:?}; expected a number with a deg or rad suffix",
            self.input
        )
    }
}

impl std::error::Error for ParseAngleError {}

impl FromStr for Angle {
    type Err = ParseAngleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseAngleError {
            input: s.to_string(),
        };
        let trimmed = s.trim();
        let (number, is_radians) = if let Some(number) = trimmed.strip_suffix("deg") {
            (number, false)
        } else if let Some(number) = trimmed.strip_suffix("rad") {
            (number, true)
        } else {
            return Err(err());
        };
        let value: f32 = number.trim().parse().map_err(|_| err())?;
        if !value.is_finite() {
            return Err(err());
        }
        Ok(if is_radians {
            Angle::radians(value)
        } else {
            Angle::degrees(value)
        })
    }
}
