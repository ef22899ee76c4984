use std::cell::RefCell;
use std::rc::Rc;

use panimate_animation::{
    AnimatedValueXY, ConfigError, InterpolationConfig, Interpolated, Interpolator, TimingSpec,
    Transition, TransitionHandle,
};
use panimate_core::FrameClock;
use panimate_gestures::{
    GestureOutcome, PanHandlers, PanResponder, ReleaseThresholds, ThresholdDecider,
    DRAG_THRESHOLD,
};
use panimate_graphics::{Angle, Offset, Rgb, ScreenSize};

use super::{background, border_radius};
use crate::PracticeScreen;

/// Distance the box keeps from the screen edges.
const CORNER_INSET: f32 = 50.0;

/// A box that, once tapped, travels the four screen corners forever while
/// morphing with its height.
pub struct CornerCycleScreen {
    position: AnimatedValueXY,
    border_radius: Interpolated<f32>,
    rotate_y: Interpolated<Angle>,
    background: Interpolated<Rgb>,
    cycle: Transition,
    running: Rc<RefCell<Option<TransitionHandle>>>,
    responder: PanResponder,
}

impl CornerCycleScreen {
    pub fn new(clock: &FrameClock, size: ScreenSize) -> Result<Self, ConfigError> {
        let top_left = size.corner(false, false, CORNER_INSET);
        let position = AnimatedValueXY::new(clock, top_left);

        let leg = |corner: Offset| Transition::timing_xy(&position, corner, TimingSpec::default());
        let cycle = Transition::looped(
            Transition::sequence([
                leg(size.corner(false, true, CORNER_INSET)),
                leg(size.corner(true, true, CORNER_INSET)),
                leg(size.corner(true, false, CORNER_INSET)),
                leg(top_left),
            ]),
            None,
        );

        let rotate_y = position.y().interpolate(Interpolator::new(
            InterpolationConfig::<Angle>::parsed([-300.0, 300.0], &["-350deg", "360deg"])?,
        )?);

        let running = Rc::new(RefCell::new(None));
        let decider = ThresholdDecider::new(ReleaseThresholds::tap(DRAG_THRESHOLD))?;
        let responder = {
            let cycle = cycle.clone();
            let running = Rc::clone(&running);
            PanResponder::builder()
                .on_release(move |state| {
                    if decider.decide(state.offset()) == GestureOutcome::CornerAdvance {
                        start_cycle(&cycle, &running);
                    }
                })
                .build()
        };

        Ok(Self {
            border_radius: border_radius(position.y())?,
            background: background(position.y())?,
            rotate_y,
            position,
            cycle,
            running,
            responder,
        })
    }

    /// Same as tapping the box. A running cycle restarts from the first leg.
    pub fn press(&self) {
        start_cycle(&self.cycle, &self.running);
    }

    pub fn is_cycling(&self) -> bool {
        self.running
            .borrow()
            .as_ref()
            .is_some_and(TransitionHandle::is_active)
    }

    pub fn position(&self) -> &AnimatedValueXY {
        &self.position
    }

    pub fn border_radius(&self) -> f32 {
        self.border_radius.get()
    }

    pub fn rotate_y(&self) -> Angle {
        self.rotate_y.get()
    }

    pub fn background(&self) -> Rgb {
        self.background.get()
    }
}

fn start_cycle(cycle: &Transition, running: &RefCell<Option<TransitionHandle>>) {
    let handle = cycle.start_detached();
    let previous = running.replace(Some(handle));
    if let Some(previous) = previous {
        previous.cancel();
    }
    log::debug!("corner cycle started");
}

impl PracticeScreen for CornerCycleScreen {
    fn name(&self) -> &'static str {
        "corner-cycle"
    }

    fn pan_handlers(&self) -> PanHandlers {
        self.responder.pan_handlers()
    }

    fn describe(&self) -> String {
        let position = self.position.get();
        format!(
            "box at ({:.0}, {:.0}) radius {:.1} rotateY {} color {}",
            position.x,
            position.y,
            self.border_radius(),
            self.rotate_y(),
            self.background()
        )
    }
}
