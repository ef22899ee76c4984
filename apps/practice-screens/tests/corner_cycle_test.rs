use panimate_graphics::{Offset, Rgb, ScreenSize};
use panimate_testing::FrameDriver;
use practice_screens::{CornerCycleScreen, PracticeScreen};

/// Corners land exactly on the ends of the morph range.
fn screen(frames: &FrameDriver) -> CornerCycleScreen {
    CornerCycleScreen::new(frames.clock(), ScreenSize::new(390.0, 700.0)).unwrap()
}

fn tap(screen: &CornerCycleScreen, dx: f32, dy: f32) {
    let pan = screen.pan_handlers();
    pan.start();
    pan.move_to(dx, dy);
    pan.release(dx, dy);
}

#[test]
fn starts_in_top_left_corner() {
    let frames = FrameDriver::new();
    let screen = screen(&frames);

    assert_eq!(screen.position().get(), Offset::new(-145.0, -300.0));
    assert_eq!(screen.border_radius(), 100.0);
    assert_eq!(screen.background(), Rgb::TOMATO);
    assert_eq!(screen.rotate_y().to_string(), "-350deg");
    assert!(!screen.is_cycling());
}

#[test]
fn tap_cycles_through_corners() {
    let mut frames = FrameDriver::new().with_interval_millis(10);
    let screen = screen(&frames);

    tap(&screen, 1.0, -2.0);
    assert!(screen.is_cycling());

    frames.frame();
    frames.advance_by_millis(500);
    assert_eq!(screen.position().get(), Offset::new(-145.0, 300.0));
    assert_eq!(screen.border_radius(), 0.0);
    assert_eq!(screen.background(), Rgb::new(71, 166, 255));
    assert_eq!(screen.rotate_y().to_string(), "360deg");

    frames.advance_by_millis(500);
    assert_eq!(screen.position().get(), Offset::new(145.0, 300.0));

    frames.advance_by_millis(1_000);
    assert_eq!(screen.position().get(), Offset::new(-145.0, -300.0));
    assert!(screen.is_cycling());

    frames.advance_by_millis(250);
    assert!(screen.position().get().y > -300.0);
}

#[test]
fn drag_beyond_slop_does_not_start_cycle() {
    let frames = FrameDriver::new();
    let screen = screen(&frames);

    tap(&screen, 40.0, 0.0);
    assert!(!screen.is_cycling());
}

#[test]
fn pressing_again_restarts_cycle() {
    let mut frames = FrameDriver::new().with_interval_millis(10);
    let screen = screen(&frames);

    screen.press();
    frames.frame();
    frames.advance_by_millis(600);
    screen.press();
    assert!(screen.is_cycling());

    // The restarted cycle anchors on the frame after the press.
    frames.advance_by_millis(500);
    assert!(screen.position().get().x > -145.0);
    frames.advance_by_millis(10);
    assert_eq!(screen.position().get(), Offset::new(-145.0, 300.0));
}
