//! Testing utilities for panimate
//!
//! [`FrameDriver`] owns a [`FrameClock`] and advances it in fixed steps the
//! way a display link would; [`CompletionProbe`] records when continuations
//! run.

mod driver;
mod probe;

pub use driver::FrameDriver;
pub use probe::CompletionProbe;

pub mod prelude {
    pub use crate::driver::FrameDriver;
    pub use crate::probe::CompletionProbe;
}
