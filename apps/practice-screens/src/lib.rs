//! Headless models of the gesture animation practice screens.
//!
//! Each screen owns its tracked values and interpolated views the way a UI
//! component would, exposes [`PanHandlers`] for pointer input and reports
//! what it would draw through [`PracticeScreen::describe`].

pub mod frame_loop;
pub mod screens;

use panimate_gestures::PanHandlers;

pub use frame_loop::FrameLoop;
pub use screens::{CardSwipeScreen, CornerCycleScreen, DragBoxScreen, IconDropScreen};

pub trait PracticeScreen {
    fn name(&self) -> &'static str;

    /// Pointer input entry points for the screen's draggable element.
    fn pan_handlers(&self) -> PanHandlers;

    /// One-line summary of the animated properties as currently observed.
    fn describe(&self) -> String;
}
