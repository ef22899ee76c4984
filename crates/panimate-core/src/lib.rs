//! Core runtime for panimate
//!
//! Provides the frame clock that drives animations and the listener registry
//! used to observe tracked values. Everything here is single-threaded: state is
//! shared through `Rc<RefCell<_>>` handles and callbacks are delivered in a
//! strictly ordered sequence.

mod frame_clock;
mod listeners;

pub use frame_clock::{FrameCallbackId, FrameCallbackRegistration, FrameClock};
pub use listeners::{ListenerId, ListenerRegistry, ListenerSnapshot};

/// Nanoseconds per millisecond, the unit frame times are reported in.
pub const NANOS_PER_MILLI: u64 = 1_000_000;
