use std::rc::Rc;

use panimate_animation::{AnimatedValueXY, ConfigError, Interpolated};
use panimate_core::FrameClock;
use panimate_gestures::{GestureAxisTracker, PanHandlers, PanResponder, TrackerConfig};
use panimate_graphics::{Offset, Rgb};

use super::{background, border_radius};
use crate::PracticeScreen;

/// A box that stays wherever it is dropped; every drag resumes from there.
pub struct DragBoxScreen {
    position: AnimatedValueXY,
    border_radius: Interpolated<f32>,
    background: Interpolated<Rgb>,
    tracker: Rc<GestureAxisTracker>,
    responder: PanResponder,
}

impl DragBoxScreen {
    pub fn new(clock: &FrameClock) -> Result<Self, ConfigError> {
        let position = AnimatedValueXY::new(clock, Offset::ZERO);
        let tracker = Rc::new(GestureAxisTracker::new(&position, TrackerConfig::default()));

        let responder = {
            let grant = Rc::clone(&tracker);
            let moved = Rc::clone(&tracker);
            let release = Rc::clone(&tracker);
            PanResponder::builder()
                .on_grant(move || grant.begin())
                .on_move(move |state| moved.move_to(state.dx, state.dy))
                .on_release(move |state| {
                    let resting = release.release(state.dx, state.dy);
                    log::debug!("box dropped at {:?}", resting);
                })
                .build()
        };

        Ok(Self {
            border_radius: border_radius(position.y())?,
            background: background(position.y())?,
            position,
            tracker,
            responder,
        })
    }

    pub fn position(&self) -> Offset {
        self.tracker.offset()
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.is_active()
    }

    pub fn border_radius(&self) -> f32 {
        self.border_radius.get()
    }

    pub fn background(&self) -> Rgb {
        self.background.get()
    }
}

impl PracticeScreen for DragBoxScreen {
    fn name(&self) -> &'static str {
        "drag-box"
    }

    fn pan_handlers(&self) -> PanHandlers {
        self.responder.pan_handlers()
    }

    fn describe(&self) -> String {
        let position = self.position.get();
        format!(
            "box at ({:.0}, {:.0}) radius {:.1} color {}",
            position.x,
            position.y,
            self.border_radius(),
            self.background()
        )
    }
}
