//! Pure math/data for panimate
//!
//! Value types consumed by the rendering layer: 2D offsets, angles and RGB
//! colors. Parsing mirrors the string forms style sheets use (`"15deg"`,
//! `"rgb(255, 99, 71)"`, `"#ff6347"`).

mod angle;
mod color;
mod geometry;

pub use angle::*;
pub use color::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::angle::Angle;
    pub use crate::color::Rgb;
    pub use crate::geometry::{Offset, ScreenSize};
}
