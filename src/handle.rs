use pathknob_core::math::{self, Point, Vector};
use pathknob_core::ValueRange;
use pathknob_path::PathPoints;

/// Tracks which path point the handle sits on and the drag that moves it.
///
/// The tracker owns no geometry. Every operation borrows the current
/// [`PathPoints`], so the sequence can be replaced between calls as long as
/// [`HandleTracker::clamp_to`] is called afterwards.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct HandleTracker {
    current_index: usize,
    drag_anchor: Option<Point>,
}

impl HandleTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tracker with the handle resting on `index`.
    pub fn with_index(index: usize) -> Self {
        Self {
            current_index: index,
            drag_anchor: None,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Where the drag currently wants the handle to be, if a drag is active.
    pub fn drag_anchor(&self) -> Option<Point> {
        self.drag_anchor
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Starts a drag from the handle's currently rendered center.
    pub fn begin_drag(&mut self, handle_center: Point) {
        self.drag_anchor = Some(handle_center);
    }

    /// Moves the drag anchor by `delta` and snaps the handle towards it.
    ///
    /// Returns `true` if the handle index changed. Does nothing while idle.
    pub fn drag_by(&mut self, points: &PathPoints, delta: Vector) -> bool {
        let Some(anchor) = self.drag_anchor.as_mut() else {
            log::debug!("ignoring drag delta {:?} without an active drag", delta);
            return false;
        };

        *anchor += delta;
        let target = *anchor;

        self.move_towards(points, target)
    }

    /// Applies the final `delta` of a drag, then ends it.
    ///
    /// Returns `true` if the handle index changed.
    pub fn end_drag(&mut self, points: &PathPoints, delta: Vector) -> bool {
        let changed = self.drag_by(points, delta);
        self.drag_anchor = None;
        changed
    }

    /// Keeps the index valid for a sequence of `len` points.
    pub fn clamp_to(&mut self, len: usize) {
        self.current_index = self.current_index.min(len.saturating_sub(1));
    }

    /// Moves the handle to the path point nearest `target`, searching outwards
    /// from the current index.
    ///
    /// The search compares the current point with both of its cyclic
    /// neighbours. If neither is closer, nothing changes. Otherwise it keeps
    /// stepping in the direction of the closer neighbour for as long as the
    /// distance strictly decreases, and settles on the last improvement.
    ///
    /// Returns `true` if the handle index changed.
    pub fn move_towards(&mut self, points: &PathPoints, target: Point) -> bool {
        let len = points.len();
        if len == 0 {
            self.current_index = 0;
            return false;
        }
        if !math::is_finite_point(target) {
            log::debug!("ignoring non-finite handle target {:?}", target);
            return false;
        }

        self.clamp_to(len);
        let index = self.current_index;

        let distance = |offset: isize| -> f32 {
            points
                .distance_at(index, offset, target)
                .unwrap_or(f32::INFINITY)
        };

        let earlier = distance(-1);
        let current = distance(0);
        let later = distance(1);

        if current <= earlier && current <= later {
            return false;
        }

        let (direction, mut best): (isize, f32) = if earlier < later {
            (-1, earlier)
        } else {
            (1, later)
        };

        let max_offset = (len - 1) as isize;
        let mut offset = direction;
        while offset.abs() < max_offset {
            let next_offset = offset + direction;
            let next_distance = distance(next_offset);
            if next_distance >= best {
                break;
            }
            best = next_distance;
            offset = next_offset;
        }

        let new_index = points.wrap(index as isize + offset);

        log::trace!(
            "handle moved from {} to {} ({} steps), distance to target {}",
            index,
            new_index,
            offset,
            best
        );

        self.current_index = new_index;
        new_index != index
    }

    /// The value of the handle's position within `range`.
    pub fn value(&self, points: &PathPoints, range: ValueRange) -> i32 {
        range.value_at(self.current_index, points.len())
    }
}
