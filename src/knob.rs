use pathknob_core::math::{self, vector, Point, Rect, Size, Vector};
use pathknob_core::ValueRange;
use pathknob_path::{ArcGeometry, Path, PathPoints};

use crate::config::KnobConfig;
use crate::error::KnobError;
use crate::event::KnobEvent;
use crate::handle::HandleTracker;
use crate::observer::ValueObserver;

/// A circular knob whose handle is dragged along a fixed arc.
///
/// The knob holds geometry and index data only. A host feeds it layout and
/// drag events and draws [`PathKnob::track_path`] and
/// [`PathKnob::handle_rect`] however it likes. Until the first
/// [`PathKnob::resized`] call there is no track and the value is the
/// minimum.
pub struct PathKnob {
    config: KnobConfig,
    range: ValueRange,

    arc: Option<ArcGeometry>,
    points: PathPoints,
    tracker: HandleTracker,
    handle_center: Option<Point>,

    observer: Option<Box<dyn ValueObserver>>,
    needs_redraw: bool,
}

impl PathKnob {
    /// Creates a knob without validating `config`.
    ///
    /// A range with `minimum_value >= maximum_value` produces a constant or
    /// inverted value instead of an error.
    pub fn new(config: KnobConfig) -> Self {
        Self {
            range: config.value_range(),
            config,
            arc: None,
            points: PathPoints::default(),
            tracker: HandleTracker::new(),
            handle_center: None,
            observer: None,
            needs_redraw: true,
        }
    }

    /// Creates a knob, returning an error if `config` is invalid.
    pub fn try_new(config: KnobConfig) -> Result<Self, KnobError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Sets the observer notified whenever the value changes.
    pub fn with_observer(mut self, observer: impl ValueObserver + 'static) -> Self {
        self.set_observer(observer);
        self
    }

    pub fn set_observer(&mut self, observer: impl ValueObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Removes the observer, if any.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    pub fn config(&self) -> &KnobConfig {
        &self.config
    }

    pub fn range(&self) -> ValueRange {
        self.range
    }

    /// Changes the value range. The handle stays where it is and the
    /// observer is not notified.
    pub fn set_range(&mut self, range: ValueRange) {
        self.config.minimum_value = range.minimum();
        self.config.maximum_value = range.maximum();
        self.range = range;
    }

    /// The current value of the knob.
    pub fn value(&self) -> i32 {
        self.tracker.value(&self.points, self.range)
    }

    pub fn current_index(&self) -> usize {
        self.tracker.current_index()
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    /// The arc of the track, once the knob has been laid out.
    pub fn arc(&self) -> Option<&ArcGeometry> {
        self.arc.as_ref()
    }

    /// The positions the handle can occupy.
    pub fn path_points(&self) -> &PathPoints {
        &self.points
    }

    /// The center of the handle, once the knob has been laid out.
    pub fn handle_center(&self) -> Option<Point> {
        self.handle_center
    }

    /// The square the handle occupies, centered on [`PathKnob::handle_center`].
    pub fn handle_rect(&self) -> Option<Rect> {
        self.handle_center
            .map(|center| math::square_around(center, self.config.handle_size))
    }

    /// The track as a path the host can stroke.
    pub fn track_path(&self) -> Option<Path> {
        self.arc.as_ref().map(Path::arc)
    }

    /// Returns `true` if the track or handle moved since the last call to
    /// [`PathKnob::mark_drawn`].
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    pub fn mark_drawn(&mut self) {
        self.needs_redraw = false;
    }

    pub fn handle_event(&mut self, event: KnobEvent) {
        match event {
            KnobEvent::DragBegan => self.drag_began(),
            KnobEvent::DragChanged(delta) => self.drag_changed(delta.x, delta.y),
            KnobEvent::DragEnded(delta) => self.drag_ended(delta.x, delta.y),
            KnobEvent::DragCancelled(delta) => self.drag_cancelled(delta.x, delta.y),
            KnobEvent::Resized(size) => self.resized(size.width, size.height),
        }
    }

    /// Rebuilds the track for a new size and puts the handle back on the
    /// path point nearest to where it was drawn.
    ///
    /// The observer is notified exactly once.
    pub fn resized(&mut self, width: f32, height: f32) {
        let bounds = Size::new(width, height);
        let arc = ArcGeometry::knob_track(bounds, self.config.padding);
        let points =
            PathPoints::sample_with(&arc, self.config.min_spacing, self.config.sample_mode);

        log::debug!(
            "knob resized to {:?}, {} path points (was {})",
            bounds,
            points.len(),
            self.points.len()
        );

        self.arc = Some(arc);
        self.points = points;

        self.tracker.clamp_to(self.points.len());
        if let Some(previous) = self.handle_center {
            self.tracker.move_towards(&self.points, previous);
        }

        self.update_handle_center();
        self.notify();
    }

    /// Starts a drag from where the handle is currently drawn.
    pub fn drag_began(&mut self) {
        match self.handle_center {
            Some(center) => self.tracker.begin_drag(center),
            None => log::debug!("ignoring drag on a knob that has not been laid out"),
        }
    }

    /// Moves the drag by the translation since the previous drag event.
    pub fn drag_changed(&mut self, dx: f32, dy: f32) {
        if self.tracker.drag_by(&self.points, vector(dx, dy)) {
            self.handle_moved();
        }
    }

    /// Applies the last translation of a drag and ends it.
    pub fn drag_ended(&mut self, dx: f32, dy: f32) {
        self.finish_drag(vector(dx, dy));
    }

    /// Same as [`PathKnob::drag_ended`].
    pub fn drag_cancelled(&mut self, dx: f32, dy: f32) {
        self.finish_drag(vector(dx, dy));
    }

    /// Snaps the handle towards `target` as if it had been dragged there.
    pub fn move_handle_towards(&mut self, target: Point) {
        if self.tracker.move_towards(&self.points, target) {
            self.handle_moved();
        }
    }

    fn finish_drag(&mut self, delta: Vector) {
        if self.tracker.end_drag(&self.points, delta) {
            self.handle_moved();
        }
    }

    fn handle_moved(&mut self) {
        self.notify();
        self.update_handle_center();
    }

    fn update_handle_center(&mut self) {
        self.handle_center = self.points.get(self.tracker.current_index());
        self.needs_redraw = true;
    }

    fn notify(&mut self) {
        let value = self.value();
        if let Some(observer) = self.observer.as_mut() {
            observer.value_changed(value);
        }
    }
}

impl Default for PathKnob {
    fn default() -> Self {
        Self::new(KnobConfig::default())
    }
}

impl std::fmt::Debug for PathKnob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathKnob")
            .field("config", &self.config)
            .field("arc", &self.arc)
            .field("num_points", &self.points.len())
            .field("tracker", &self.tracker)
            .field("handle_center", &self.handle_center)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}
