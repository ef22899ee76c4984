use std::time::Duration;

use anyhow::{bail, Context};
use panimate_core::FrameClock;
use panimate_graphics::{Offset, ScreenSize};
use practice_screens::{
    CardSwipeScreen, CornerCycleScreen, DragBoxScreen, FrameLoop, IconDropScreen, PracticeScreen,
};

const SCREENS: [&str; 4] = ["corner-cycle", "icon-drop", "card-swipe", "drag-box"];

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let requested: Vec<String> = std::env::args().skip(1).collect();
    let selected: Vec<&str> = if requested.is_empty() {
        SCREENS.to_vec()
    } else {
        requested.iter().map(String::as_str).collect()
    };

    println!("=== panimate practice screens ===");
    println!("Scripted gestures run against each screen in real time.");
    println!("Set RUST_LOG=debug to see transitions start, finish and get preempted.");
    println!();

    for name in selected {
        let clock = FrameClock::new();
        let frames = FrameLoop::new(&clock);
        match name {
            "corner-cycle" => corner_cycle(&clock, &frames)?,
            "icon-drop" => icon_drop(&clock, &frames)?,
            "card-swipe" => card_swipe(&clock, &frames)?,
            "drag-box" => drag_box(&clock, &frames)?,
            other => bail!("unknown screen {other:?}; expected one of {SCREENS:?}"),
        }
    }
    Ok(())
}

/// Drag from the origin to `to` over `steps` frames, then release there.
fn drag(frames: &FrameLoop, screen: &dyn PracticeScreen, to: Offset, steps: u32) {
    let pan = screen.pan_handlers();
    pan.start();
    for step in 1..=steps {
        let fraction = step as f32 / steps as f32;
        pan.move_to(to.x * fraction, to.y * fraction);
        frames.run_for(Duration::from_millis(16), |_| {});
    }
    log::info!("[{}] release at ({}, {})", screen.name(), to.x, to.y);
    pan.release(to.x, to.y);
}

/// Run frames for `duration`, logging the screen every `every` frames.
fn watch(frames: &FrameLoop, screen: &dyn PracticeScreen, duration: Duration, every: u64) {
    frames.run_for(duration, |frame| {
        if frame % every == 0 {
            log::info!("[{}] {}", screen.name(), screen.describe());
        }
    });
    log::info!("[{}] {}", screen.name(), screen.describe());
}

fn corner_cycle(clock: &FrameClock, frames: &FrameLoop) -> anyhow::Result<()> {
    let screen = CornerCycleScreen::new(clock, ScreenSize::default())
        .context("building corner cycle screen")?;
    log::info!("[{}] {}", screen.name(), screen.describe());

    drag(frames, &screen, Offset::new(2.0, 3.0), 2);
    watch(frames, &screen, Duration::from_millis(2_200), 15);
    Ok(())
}

fn icon_drop(clock: &FrameClock, frames: &FrameLoop) -> anyhow::Result<()> {
    let screen = IconDropScreen::new(clock).context("building icon drop screen")?;

    drag(frames, &screen, Offset::new(20.0, -120.0), 10);
    watch(frames, &screen, Duration::from_millis(800), 10);

    drag(frames, &screen, Offset::new(-10.0, 280.0), 12);
    watch(frames, &screen, Duration::from_millis(1_200), 10);
    Ok(())
}

fn card_swipe(clock: &FrameClock, frames: &FrameLoop) -> anyhow::Result<()> {
    let screen = CardSwipeScreen::new(clock).context("building card swipe screen")?;

    drag(frames, &screen, Offset::new(-200.0, 0.0), 10);
    watch(frames, &screen, Duration::from_millis(800), 10);

    drag(frames, &screen, Offset::new(260.0, 0.0), 10);
    watch(frames, &screen, Duration::from_millis(1_200), 10);

    screen.press_close();
    watch(frames, &screen, Duration::from_millis(1_200), 10);
    Ok(())
}

fn drag_box(clock: &FrameClock, frames: &FrameLoop) -> anyhow::Result<()> {
    let screen = DragBoxScreen::new(clock).context("building drag box screen")?;

    drag(frames, &screen, Offset::new(60.0, 150.0), 8);
    drag(frames, &screen, Offset::new(-30.0, 100.0), 8);
    log::info!("[{}] {}", screen.name(), screen.describe());
    if !frames.run_until_idle(Duration::from_millis(500)) {
        log::warn!("[{}] frames still pending after drag", screen.name());
    }
    Ok(())
}
