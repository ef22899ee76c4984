use panimate_graphics::{Offset, Rgb};
use panimate_testing::FrameDriver;
use practice_screens::{DragBoxScreen, PracticeScreen};

fn drag(screen: &DragBoxScreen, dx: f32, dy: f32) {
    let pan = screen.pan_handlers();
    pan.start();
    pan.move_to(dx / 2.0, dy / 2.0);
    assert!(screen.is_dragging());
    pan.release(dx, dy);
}

#[test]
fn drags_accumulate() {
    let frames = FrameDriver::new();
    let screen = DragBoxScreen::new(frames.clock()).unwrap();

    drag(&screen, 60.0, 150.0);
    drag(&screen, -30.0, 100.0);

    assert!(!screen.is_dragging());
    assert_eq!(screen.position(), Offset::new(30.0, 250.0));
    assert!((screen.border_radius() - 25.0 / 3.0).abs() < 1e-3);
    assert_eq!(screen.background(), Rgb::new(86, 160, 240));
}

#[test]
fn moves_without_a_pan_are_ignored() {
    let frames = FrameDriver::new();
    let screen = DragBoxScreen::new(frames.clock()).unwrap();
    let pan = screen.pan_handlers();

    pan.move_to(100.0, 100.0);
    pan.release(100.0, 100.0);

    assert_eq!(screen.position(), Offset::ZERO);
    assert_eq!(screen.border_radius(), 50.0);
}
