use std::cell::Cell;
use std::rc::Rc;

use panimate_animation::{
    AnimatedValue, AnimatedValueXY, ConfigError, InterpolationConfig, Interpolated,
    Interpolator, SpringSpec, Transition,
};
use panimate_core::FrameClock;
use panimate_gestures::constants::DISMISS_DISTANCE;
use panimate_gestures::{
    GestureOutcome, PanHandlers, ReleaseThresholds, SwipeController, TrackerConfig,
};
use panimate_graphics::{Angle, Offset};

use crate::PracticeScreen;

const PRESSED_SCALE: f32 = 0.95;
/// Where a dismissed card flies to, off screen.
const OFF_SCREEN: f32 = 500.0;

/// Soft spring for dismissals. Coarse rest thresholds end it as soon as the
/// card is out of sight.
fn dismiss_spring() -> SpringSpec {
    SpringSpec::default()
        .with_tension(5.0)
        .with_rest_thresholds(100.0, 100.0)
}

/// A deck of cards swiped left or right; the card underneath grows into place
/// as the top one leaves.
pub struct CardSwipeScreen {
    position: AnimatedValueXY,
    scale: AnimatedValue,
    rotation: Interpolated<Angle>,
    next_card_scale: Interpolated<f32>,
    index: Rc<Cell<usize>>,
    controller: SwipeController,
}

impl CardSwipeScreen {
    pub fn new(clock: &FrameClock) -> Result<Self, ConfigError> {
        let position = AnimatedValueXY::new(clock, Offset::ZERO);
        let scale = AnimatedValue::new(clock, 1.0);
        let index = Rc::new(Cell::new(0));

        let rotation = position.x().interpolate(Interpolator::new(
            InterpolationConfig::<Angle>::parsed([-250.0, 250.0], &["-15deg", "15deg"])?.clamp(),
        )?);
        let next_card_scale = position.x().interpolate(Interpolator::new(
            InterpolationConfig::<f32>::new([-300.0, 0.0, 300.0], [1.0, 0.7, 1.0]).clamp(),
        )?);

        let press_in = Transition::spring(&scale, PRESSED_SCALE, SpringSpec::default());
        let go_left = Transition::spring(position.x(), -OFF_SCREEN, dismiss_spring());
        let go_right = Transition::spring(position.x(), OFF_SCREEN, dismiss_spring());
        let go_center = Transition::parallel([
            Transition::spring(&scale, 1.0, SpringSpec::default()),
            Transition::spring(position.x(), 0.0, SpringSpec::default()),
        ]);

        let controller =
            SwipeController::builder(&position, ReleaseThresholds::horizontal(DISMISS_DISTANCE))
                .tracker_config(TrackerConfig::horizontal().with_accumulate(false))
                .on_grant(move || {
                    press_in.start_detached();
                })
                .on_release(move |outcome, _| match outcome {
                    GestureOutcome::Left => Some(go_left.clone()),
                    GestureOutcome::Right => Some(go_right.clone()),
                    _ => Some(go_center.clone()),
                })
                .on_settled({
                    let position = position.clone();
                    let scale = scale.clone();
                    let index = Rc::clone(&index);
                    move |outcome| {
                        if matches!(outcome, GestureOutcome::Left | GestureOutcome::Right) {
                            position.set_value(Offset::ZERO);
                            scale.set_value(1.0);
                            index.set(index.get() + 1);
                            log::info!(
                                "card dismissed {:?}, now showing #{}",
                                outcome,
                                index.get()
                            );
                        }
                    }
                })
                .build()?;

        Ok(Self {
            position,
            scale,
            rotation,
            next_card_scale,
            index,
            controller,
        })
    }

    /// The close button: dismiss to the left without dragging.
    pub fn press_close(&self) {
        self.controller.trigger(GestureOutcome::Left);
    }

    /// The check button: dismiss to the right.
    pub fn press_check(&self) {
        self.controller.trigger(GestureOutcome::Right);
    }

    pub fn offset_x(&self) -> f32 {
        self.position.x().get()
    }

    pub fn scale(&self) -> f32 {
        self.scale.get()
    }

    pub fn rotation(&self) -> Angle {
        self.rotation.get()
    }

    pub fn next_card_scale(&self) -> f32 {
        self.next_card_scale.get()
    }

    pub fn card_index(&self) -> usize {
        self.index.get()
    }

    pub fn is_settling(&self) -> bool {
        self.controller.is_settling()
    }
}

impl PracticeScreen for CardSwipeScreen {
    fn name(&self) -> &'static str {
        "card-swipe"
    }

    fn pan_handlers(&self) -> PanHandlers {
        self.controller.pan_handlers()
    }

    fn describe(&self) -> String {
        format!(
            "card #{} x {:.0} scale {:.2} rotation {} next card scale {:.2}",
            self.card_index(),
            self.offset_x(),
            self.scale(),
            self.rotation(),
            self.next_card_scale()
        )
    }
}
