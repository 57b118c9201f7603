//! Drives a knob with synthetic layout and drag events and logs its value.
//!
//! Run with `LOG_LEVEL=trace cargo run --example headless` to see every
//! hill-climb step.

use pathknob::math::{size, vector};
use pathknob::{KnobConfig, KnobEvent, PathKnob, SampleMode};

fn main() {
    // Set up logging stuff
    let env = env_logger::Env::default().filter_or("LOG_LEVEL", "info");
    env_logger::init_from_env(env);

    let config = KnobConfig::new()
        .range(0, 100)
        .sample_mode(SampleMode::Dashed { dash: 1.0 });

    let mut knob = match PathKnob::try_new(config) {
        Ok(knob) => knob,
        Err(e) => {
            log::error!("invalid knob configuration: {}", e);
            return;
        }
    };
    knob.set_observer(|value: i32| log::info!("value changed: {}", value));

    knob.handle_event(KnobEvent::Resized(size(150.0, 150.0)));
    log::info!(
        "laid out with {} path points, handle at {:?}",
        knob.path_points().len(),
        knob.handle_center()
    );

    // Drag down and to the right, around the bottom of the track.
    knob.handle_event(KnobEvent::DragBegan);
    for _ in 0..20 {
        knob.handle_event(KnobEvent::DragChanged(vector(2.0, 5.0)));
    }
    for _ in 0..20 {
        knob.handle_event(KnobEvent::DragChanged(vector(4.0, -1.0)));
    }
    knob.handle_event(KnobEvent::DragEnded(vector(0.0, 0.0)));

    // The track shrinks while the handle stays where it was drawn.
    knob.handle_event(KnobEvent::Resized(size(150.0, 100.0)));

    if let Some(path) = knob.track_path() {
        log::info!(
            "track runs from {:?} to {:?}",
            path.first_point(),
            path.last_point()
        );
    }
    log::info!("final value: {}", knob.value());
}
