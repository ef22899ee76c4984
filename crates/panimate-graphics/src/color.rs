//! 8-bit RGB colors and their style-sheet string forms

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Round a floating channel to the nearest integer inside `[0, 255]`.
    pub fn channel(value: f32) -> u8 {
        if value.is_nan() {
            return 0;
        }
        value.round().clamp(0.0, 255.0) as u8
    }

    pub fn from_channels(r: f32, g: f32, b: f32) -> Self {
        Self::new(Self::channel(r), Self::channel(g), Self::channel(b))
    }

    pub fn to_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    pub const TOMATO: Rgb = Rgb::new(255, 99, 71);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError {
    input: String,
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid color {:?}; expected rgb(r, g, b), #rgb or #rrggbb",
            self.input
        )
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError {
            input: s.to_string(),
        };
        let trimmed = s.trim();

        if let Some(hex) = trimmed.strip_prefix('#') {
            // from_str_radix would accept a leading '+'
            if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(err());
            }
            let digit = |pair: &str| u8::from_str_radix(pair, 16).map_err(|_| err());
            return match hex.len() {
                3 => {
                    let expand = |i: usize| digit(&hex[i..=i]).map(|d| d * 17);
                    Ok(Rgb::new(expand(0)?, expand(1)?, expand(2)?))
                }
                6 => Ok(Rgb::new(
                    digit(&hex[0..2])?,
                    digit(&hex[2..4])?,
                    digit(&hex[4..6])?,
                )),
                _ => Err(err()),
            };
        }

        let body = trimmed
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(err)?;
        let mut channels = body.split(',').map(|part| part.trim().parse::<u8>());
        let mut next = || channels.next().ok_or_else(err)?.map_err(|_| err());
        let color = Rgb::new(next()?, next()?, next()?);
        if channels.next().is_some() {
            return Err(err());
        }
        Ok(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_functional_and_hex_forms() {
        assert_eq!("rgb(255, 99, 71)".parse(), Ok(Rgb::TOMATO));
        assert_eq!("rgb(71,166,255)".parse(), Ok(Rgb::new(71, 166, 255)));
        assert_eq!("#ff6347".parse(), Ok(Rgb::TOMATO));
        assert_eq!("#fff".parse(), Ok(Rgb::WHITE));
    }

    #[test]
    fn rejects_malformed_colors() {
        for input in [
            "rgb(256, 0, 0)",
            "rgb(1, 2)",
            "rgb(1, 2, 3, 4)",
            "#12345",
            "#+f+f+f",
            "#0x1234",
            "tomato",
        ] {
            assert!(input.parse::<Rgb>().is_err(), "{input} should not parse");
        }
    }

    #[test]
    fn channel_rounds_and_saturates() {
        assert_eq!(Rgb::channel(162.5), 163);
        assert_eq!(Rgb::channel(-4.0), 0);
        assert_eq!(Rgb::channel(300.0), 255);
        assert_eq!(Rgb::channel(f32::NAN), 0);
    }

    #[test]
    fn displays_functional_form() {
        assert_eq!(Rgb::new(71, 166, 255).to_string(), "rgb(71, 166, 255)");
    }
}
