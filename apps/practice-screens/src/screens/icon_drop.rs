use std::cell::Cell;
use std::rc::Rc;

use panimate_animation::{
    AnimatedValue, AnimatedValueXY, ConfigError, InterpolationConfig, Interpolated,
    Interpolator, SpringSpec, TimingSpec, Transition,
};
use panimate_core::FrameClock;
use panimate_gestures::constants::DROP_DISTANCE;
use panimate_gestures::{
    GestureOutcome, PanHandlers, ReleaseThresholds, SwipeController, TrackerConfig,
};
use panimate_graphics::Offset;

use crate::PracticeScreen;

const PRESSED_SCALE: f32 = 0.9;
const DROP_MILLIS: u64 = 100;

/// An icon card between two word labels. Dragging it far enough up or down
/// drops it and brings in the next icon; the label it approaches grows.
pub struct IconDropScreen {
    position: AnimatedValueXY,
    scale: AnimatedValue,
    opacity: AnimatedValue,
    top_label_scale: Interpolated<f32>,
    bottom_label_scale: Interpolated<f32>,
    index: Rc<Cell<usize>>,
    controller: SwipeController,
}

impl IconDropScreen {
    pub fn new(clock: &FrameClock) -> Result<Self, ConfigError> {
        let position = AnimatedValueXY::new(clock, Offset::ZERO);
        let scale = AnimatedValue::new(clock, 1.0);
        let opacity = AnimatedValue::new(clock, 1.0);
        let index = Rc::new(Cell::new(0));

        let top_label_scale = position.y().interpolate(Interpolator::new(
            InterpolationConfig::<f32>::new([-300.0, -70.0], [2.0, 1.0]).clamp(),
        )?);
        let bottom_label_scale = position.y().interpolate(Interpolator::new(
            InterpolationConfig::<f32>::new([70.0, 300.0], [1.0, 2.0]).clamp(),
        )?);

        let press_in = Transition::spring(&scale, PRESSED_SCALE, SpringSpec::default());
        let drop_icon = Transition::sequence([
            Transition::parallel([
                Transition::timing(&opacity, 0.0, TimingSpec::linear(DROP_MILLIS)),
                Transition::timing(&scale, 0.0, TimingSpec::linear(DROP_MILLIS)),
            ]),
            Transition::timing_xy(&position, Offset::ZERO, TimingSpec::linear(DROP_MILLIS)),
        ]);
        let go_home = Transition::parallel([
            Transition::spring(&scale, 1.0, SpringSpec::default()),
            Transition::spring_xy(&position, Offset::ZERO, SpringSpec::default()),
        ]);
        let next_icon = Transition::parallel([
            Transition::spring(&scale, 1.0, SpringSpec::default()),
            Transition::spring(&opacity, 1.0, SpringSpec::default()),
        ]);

        let controller =
            SwipeController::builder(&position, ReleaseThresholds::vertical(DROP_DISTANCE))
                .tracker_config(TrackerConfig::default().with_accumulate(false))
                .on_grant(move || {
                    press_in.start_detached();
                })
                .on_release(move |outcome, _| {
                    if outcome.is_swipe() {
                        Some(drop_icon.clone())
                    } else {
                        Some(go_home.clone())
                    }
                })
                .on_settled({
                    let index = Rc::clone(&index);
                    move |outcome| {
                        if outcome.is_swipe() {
                            next_icon.start_detached();
                            index.set(index.get() + 1);
                            log::info!("icon dropped {:?}, now showing #{}", outcome, index.get());
                        }
                    }
                })
                .build()?;

        Ok(Self {
            position,
            scale,
            opacity,
            top_label_scale,
            bottom_label_scale,
            index,
            controller,
        })
    }

    pub fn position(&self) -> &AnimatedValueXY {
        &self.position
    }

    pub fn scale(&self) -> f32 {
        self.scale.get()
    }

    pub fn opacity(&self) -> f32 {
        self.opacity.get()
    }

    /// Scales of the labels above and below the icon.
    pub fn label_scales(&self) -> (f32, f32) {
        (self.top_label_scale.get(), self.bottom_label_scale.get())
    }

    pub fn icon_index(&self) -> usize {
        self.index.get()
    }

    pub fn last_outcome(&self) -> Option<GestureOutcome> {
        self.controller.last_outcome()
    }
}

impl PracticeScreen for IconDropScreen {
    fn name(&self) -> &'static str {
        "icon-drop"
    }

    fn pan_handlers(&self) -> PanHandlers {
        self.controller.pan_handlers()
    }

    fn describe(&self) -> String {
        let position = self.position.get();
        let (top, bottom) = self.label_scales();
        format!(
            "icon #{} at ({:.0}, {:.0}) scale {:.2} opacity {:.2} labels {:.2}/{:.2}",
            self.icon_index(),
            position.x,
            position.y,
            self.scale(),
            self.opacity(),
            top,
            bottom
        )
    }
}
