use pathknob_core::math::{Size, Vector};

/// An input event consumed by [`PathKnob::handle_event`].
///
/// Drag deltas are the translation since the previous event of the same
/// gesture, not since the gesture began.
///
/// [`PathKnob::handle_event`]: crate::PathKnob::handle_event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KnobEvent {
    DragBegan,
    DragChanged(Vector),
    DragEnded(Vector),
    /// Handled exactly like [`KnobEvent::DragEnded`]. Movement that already
    /// happened is kept.
    DragCancelled(Vector),
    /// The control was laid out with a new size.
    Resized(Size),
}
