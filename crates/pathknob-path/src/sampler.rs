//! Discretizes an arc into the ordered positions a knob handle can occupy.
//!
//! Candidates are generated along the arc roughly one `step` of arc length
//! apart, starting at the start angle and finishing exactly on the end angle.
//! Each candidate is kept only if it lies at least `min_spacing` away from
//! the last kept point. Finally, if the last point wraps around onto the
//! first one (which happens for full circles), it is dropped so that the
//! cyclic neighbours of every point are distinct.

use pathknob_core::math::Point;

use crate::arc::ArcGeometry;
use crate::path::Path;

/// The default minimum distance between two consecutive path points.
pub const DEFAULT_MIN_SPACING: f32 = 0.1;
/// The default arc length between two candidate points.
pub const DEFAULT_STEP: f32 = 1.0;

/// How far a dashed sample may stray from the circle.
const WALK_TOLERANCE: f32 = 0.01;
/// Upper bound on the number of candidates generated for one arc.
const MAX_CANDIDATES: usize = 1 << 20;

/// How candidate points are generated along an arc.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SampleMode {
    /// Evaluate the circle directly at uniform angular steps, one every
    /// `step` units of arc length.
    Analytic { step: f32 },
    /// Build the arc as a lyon path and walk it with an on/off dash pattern
    /// of `dash` units each, collecting the point at every dash boundary.
    Dashed { dash: f32 },
}

impl Default for SampleMode {
    fn default() -> Self {
        Self::Analytic { step: DEFAULT_STEP }
    }
}

impl SampleMode {
    /// The arc length between two candidates.
    pub fn step(&self) -> f32 {
        match self {
            Self::Analytic { step } => *step,
            Self::Dashed { dash } => *dash,
        }
    }

    fn sanitized(self) -> Self {
        let step = self.step();
        if step > 0.0 && step.is_finite() {
            return self;
        }

        log::warn!(
            "invalid sample step {}, using {} instead",
            step,
            DEFAULT_STEP
        );

        match self {
            Self::Analytic { .. } => Self::Analytic { step: DEFAULT_STEP },
            Self::Dashed { .. } => Self::Dashed { dash: DEFAULT_STEP },
        }
    }
}

/// An ordered sequence of points along a path.
///
/// Index `0` is the start of the path. Indices are treated cyclically by
/// [`PathPoints::wrap`], so the neighbour before index `0` is the last point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathPoints {
    points: Vec<Point>,
}

impl PathPoints {
    /// Uses the given points as they are, without any spacing filter.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Samples `arc` with [`SampleMode::default`].
    pub fn sample(arc: &ArcGeometry, min_spacing: f32) -> Self {
        Self::sample_with(arc, min_spacing, SampleMode::default())
    }

    /// Samples `arc` with the given mode.
    ///
    /// A degenerate arc yields a single point at its center.
    pub fn sample_with(arc: &ArcGeometry, min_spacing: f32, mode: SampleMode) -> Self {
        if arc.is_degenerate() {
            log::debug!("sampling degenerate arc {:?} as a single point", arc);
            return Self {
                points: vec![arc.center],
            };
        }

        let mode = mode.sanitized();

        let candidates = match mode {
            SampleMode::Analytic { step } => analytic_candidates(arc, step),
            SampleMode::Dashed { dash } => dashed_candidates(arc, dash),
        };
        let num_candidates = candidates.len();

        let mut points = filter_spacing(candidates, min_spacing);
        dedup_wrap_around(&mut points, min_spacing);

        log::trace!(
            "sampled {} points out of {} candidates along an arc of length {}",
            points.len(),
            num_candidates,
            arc.length()
        );

        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Wraps any index, including negative ones, into `[0, len)`.
    ///
    /// Returns `0` for an empty sequence.
    #[inline]
    pub fn wrap(&self, index: isize) -> usize {
        wrap_index(index, self.points.len())
    }

    /// The point `offset` positions away from `index`, wrapping around.
    pub fn at_offset(&self, index: usize, offset: isize) -> Option<Point> {
        if self.points.is_empty() {
            return None;
        }
        let base = self.wrap(index as isize);
        Some(self.points[self.wrap(base as isize + offset)])
    }

    /// The distance from `target` to the point `offset` positions away from
    /// `index`, or `None` for an empty sequence.
    pub fn distance_at(&self, index: usize, offset: isize, target: Point) -> Option<f32> {
        self.at_offset(index, offset).map(|p| p.distance_to(target))
    }
}

impl From<Vec<Point>> for PathPoints {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

/// Wraps `index` into `[0, len)`, returning `0` when `len` is zero.
#[inline]
pub fn wrap_index(index: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    index.rem_euclid(len as isize) as usize
}

/// Widens `step` so that an arc of `length` yields at most
/// `MAX_CANDIDATES` candidates, spread over the whole arc.
fn capped_step(length: f32, step: f32) -> f32 {
    let min_step = length / MAX_CANDIDATES as f32;
    if step < min_step {
        log::debug!(
            "widening sample step from {} to {} for an arc of length {}",
            step,
            min_step,
            length
        );
        return min_step;
    }
    step
}

fn analytic_candidates(arc: &ArcGeometry, step: f32) -> Vec<Point> {
    let length = arc.length();
    let step = capped_step(length, step);
    let num_steps = ((length / step).floor() as usize).min(MAX_CANDIDATES);

    let mut candidates = Vec::with_capacity(num_steps + 2);
    for i in 0..=num_steps {
        let t = (i as f32 * step / length).min(1.0);
        candidates.push(arc.point_at(t));
    }
    candidates.push(arc.end_point());

    candidates
}

fn dashed_candidates(arc: &ArcGeometry, dash: f32) -> Vec<Point> {
    use lyon::algorithms::walk::{walk_along_path, RepeatedPattern, WalkerEvent};

    let dash = capped_step(arc.length(), dash);
    let path = Path::flattened_arc(arc, WALK_TOLERANCE);
    let intervals = [dash, dash];

    let mut candidates = vec![arc.start_point()];

    walk_along_path(
        path.raw.iter(),
        0.0,
        WALK_TOLERANCE,
        &mut RepeatedPattern {
            callback: |event: WalkerEvent<'_>| {
                candidates.push(Point::new(event.position.x, event.position.y));
                true
            },
            index: 0,
            intervals: &intervals,
        },
    );

    candidates.push(arc.end_point());

    candidates
}

/// Keeps each candidate only if it is at least `min_spacing` away from the
/// previously kept one. The first candidate is always kept.
fn filter_spacing(candidates: Vec<Point>, min_spacing: f32) -> Vec<Point> {
    let mut accepted: Vec<Point> = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        if let Some(prior) = accepted.last() {
            if prior.distance_to(candidate) < min_spacing {
                continue;
            }
        }
        accepted.push(candidate);
    }

    accepted
}

/// Drops the last point if it coincides with the first one.
fn dedup_wrap_around(points: &mut Vec<Point>, min_spacing: f32) {
    if points.len() < 2 {
        return;
    }

    let first = points[0];
    if let Some(last) = points.last() {
        if last.distance_to(first) < min_spacing {
            points.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pathknob_core::math::{degrees, point, size};

    fn knob_arc() -> ArcGeometry {
        ArcGeometry::knob_track(size(150.0, 150.0), 10.0)
    }

    #[test]
    fn first_and_last_points_follow_the_arc() {
        let arc = knob_arc();
        let points = PathPoints::sample(&arc, DEFAULT_MIN_SPACING);

        let first = points.first().unwrap();
        let last = points.last().unwrap();
        assert_relative_eq!(first.x, arc.start_point().x, epsilon = 1e-4);
        assert_relative_eq!(first.y, arc.start_point().y, epsilon = 1e-4);
        assert_relative_eq!(last.x, arc.end_point().x, epsilon = 1e-4);
        assert_relative_eq!(last.y, arc.end_point().y, epsilon = 1e-4);
    }

    #[test]
    fn count_is_proportional_to_length() {
        let arc = knob_arc();
        let points = PathPoints::sample(&arc, DEFAULT_MIN_SPACING);
        let expected = arc.length().floor() as usize + 1;
        assert!(points.len() >= expected);
        assert!(points.len() <= expected + 1);

        let bigger = ArcGeometry::knob_track(size(300.0, 300.0), 10.0);
        assert!(PathPoints::sample(&bigger, DEFAULT_MIN_SPACING).len() > points.len());
    }

    #[test]
    fn minimum_spacing_is_enforced() {
        let arc = knob_arc();
        for min_spacing in [0.1, 0.5, 2.5, 7.0] {
            let points = PathPoints::sample(&arc, min_spacing);
            for pair in points.as_slice().windows(2) {
                assert!(pair[0].distance_to(pair[1]) >= min_spacing);
            }
        }
    }

    #[test]
    fn points_lie_on_the_circle() {
        let arc = knob_arc();
        for mode in [SampleMode::Analytic { step: 1.0 }, SampleMode::Dashed { dash: 1.0 }] {
            let points = PathPoints::sample_with(&arc, DEFAULT_MIN_SPACING, mode);
            for p in points.iter() {
                assert_relative_eq!(p.distance_to(arc.center), arc.radius, epsilon = 0.05);
            }
        }
    }

    #[test]
    fn points_advance_along_the_sweep() {
        let arc = knob_arc();
        let points = PathPoints::sample(&arc, DEFAULT_MIN_SPACING);
        // Counter-clockwise in y-down space: the angle keeps decreasing.
        let mut previous = f32::INFINITY;
        let mut unwrapped = 0.0;
        let mut last_raw: Option<f32> = None;
        for p in points.iter() {
            let raw = (p.y - arc.center.y).atan2(p.x - arc.center.x);
            if let Some(last) = last_raw {
                let mut d = raw - last;
                if d > std::f32::consts::PI {
                    d -= std::f32::consts::TAU;
                } else if d < -std::f32::consts::PI {
                    d += std::f32::consts::TAU;
                }
                unwrapped += d;
            }
            last_raw = Some(raw);
            assert!(unwrapped < previous);
            previous = unwrapped;
        }
        assert_relative_eq!(unwrapped, degrees(-300.0).radians, epsilon = 1e-3);
    }

    #[test]
    fn large_arcs_are_covered_end_to_end() {
        let arc = ArcGeometry::knob_track(size(600_000.0, 600_000.0), 10.0);
        let points = PathPoints::sample(&arc, DEFAULT_MIN_SPACING);
        assert!(points.len() <= MAX_CANDIDATES + 2);
        assert!(points.len() > MAX_CANDIDATES / 2);

        let step = arc.length() / MAX_CANDIDATES as f32;
        let widest = points
            .as_slice()
            .windows(2)
            .map(|pair| pair[0].distance_to(pair[1]))
            .fold(0.0f32, f32::max);
        assert!(widest < step * 2.0, "gap of {} with step {}", widest, step);

        let last = points.last().unwrap();
        assert_relative_eq!(last.x, arc.end_point().x, epsilon = 1.0);
        assert_relative_eq!(last.y, arc.end_point().y, epsilon = 1.0);
    }

    #[test]
    fn dashed_matches_analytic_density() {
        let arc = knob_arc();
        let analytic = PathPoints::sample_with(&arc, DEFAULT_MIN_SPACING, SampleMode::default());
        let dashed =
            PathPoints::sample_with(&arc, DEFAULT_MIN_SPACING, SampleMode::Dashed { dash: 1.0 });

        let diff = analytic.len().abs_diff(dashed.len());
        assert!(diff <= 3, "analytic {} vs dashed {}", analytic.len(), dashed.len());
    }

    #[test]
    fn sampling_is_deterministic() {
        let arc = knob_arc();
        for mode in [SampleMode::Analytic { step: 1.0 }, SampleMode::Dashed { dash: 1.0 }] {
            let a = PathPoints::sample_with(&arc, 0.3, mode);
            let b = PathPoints::sample_with(&arc, 0.3, mode);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn degenerate_arc_gives_one_point() {
        let arc = ArcGeometry::knob_track(size(100.0, 16.0), 10.0);
        let points = PathPoints::sample(&arc, DEFAULT_MIN_SPACING);
        assert_eq!(points.len(), 1);
        assert_eq!(points.first(), Some(arc.center));
    }

    #[test]
    fn tiny_arc_keeps_at_least_its_start() {
        let arc = ArcGeometry {
            center: point(0.0, 0.0),
            radius: 0.01,
            start_angle: degrees(0.0),
            end_angle: degrees(90.0),
            drawn_counter_clockwise: false,
        };
        let points = PathPoints::sample(&arc, DEFAULT_MIN_SPACING);
        assert_eq!(points.len(), 1);
        assert_eq!(points.first(), Some(arc.start_point()));
    }

    #[test]
    fn full_circle_drops_the_wrapped_end() {
        let arc = ArcGeometry {
            center: point(0.0, 0.0),
            radius: 20.0,
            start_angle: degrees(0.0),
            end_angle: degrees(0.0),
            drawn_counter_clockwise: false,
        };
        let points = PathPoints::sample(&arc, DEFAULT_MIN_SPACING);
        let first = points.first().unwrap();
        let last = points.last().unwrap();
        assert!(first.distance_to(last) >= DEFAULT_MIN_SPACING);
    }

    #[test]
    fn invalid_step_falls_back_to_default() {
        let arc = knob_arc();
        let default = PathPoints::sample(&arc, DEFAULT_MIN_SPACING);
        let zero =
            PathPoints::sample_with(&arc, DEFAULT_MIN_SPACING, SampleMode::Analytic { step: 0.0 });
        let nan = PathPoints::sample_with(
            &arc,
            DEFAULT_MIN_SPACING,
            SampleMode::Analytic { step: f32::NAN },
        );
        assert_eq!(default, zero);
        assert_eq!(default, nan);
    }

    #[test]
    fn wrap_handles_negative_and_large_indices() {
        for len in 1..20usize {
            let n = len as isize;
            for i in -2 * n..=2 * n {
                let w = wrap_index(i, len);
                assert!(w < len);
                assert_eq!(w, wrap_index(i + n, len));
            }
        }
        assert_eq!(wrap_index(-1, 5), 4);
        assert_eq!(wrap_index(5, 5), 0);
        assert_eq!(wrap_index(-3, 0), 0);
    }

    #[test]
    fn offsets_wrap_around_the_ends() {
        let points = PathPoints::new(vec![point(0.0, 0.0), point(1.0, 0.0), point(2.0, 0.0)]);
        assert_eq!(points.at_offset(0, -1), Some(point(2.0, 0.0)));
        assert_eq!(points.at_offset(2, 1), Some(point(0.0, 0.0)));
        assert_eq!(points.distance_at(1, 1, point(2.0, 3.0)), Some(3.0));
        assert_eq!(PathPoints::default().at_offset(0, 1), None);
    }
}
