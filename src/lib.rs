mod config;
mod event;
mod handle;
mod knob;
mod observer;

pub mod error;

pub use config::KnobConfig;
pub use error::KnobError;
pub use event::KnobEvent;
pub use handle::HandleTracker;
pub use knob::PathKnob;
pub use observer::ValueObserver;

pub use pathknob_core::*;

pub use pathknob_path as path;
pub use pathknob_path::{ArcGeometry, PathPoints, SampleMode};
