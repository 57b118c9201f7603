//! The arc a knob handle travels along.
use std::f32::consts::{PI, TAU};

use pathknob_core::math::{self, Angle, Point, Size};

/// A circular arc in a y-down coordinate system.
///
/// Angles are measured from the positive x-axis. Since y points down, an
/// increasing angle rotates clockwise on screen, and an arc with
/// `drawn_counter_clockwise` set travels from `start_angle` towards
/// `end_angle` with a decreasing angle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcGeometry {
    /// The center of the arc.
    pub center: Point,
    /// The radius of the arc.
    pub radius: f32,
    /// The angle at which the arc begins.
    pub start_angle: Angle,
    /// The angle at which the arc ends.
    pub end_angle: Angle,
    /// Whether the arc is traced with a decreasing angle.
    pub drawn_counter_clockwise: bool,
}

impl ArcGeometry {
    /// The angle of the first position of a knob, `-120` degrees.
    pub const KNOB_START_ANGLE: Angle = Angle {
        radians: -PI / 1.5,
    };
    /// The angle of the last position of a knob, `-60` degrees.
    pub const KNOB_END_ANGLE: Angle = Angle { radians: -PI / 3.0 };
    /// The default inset between the bounds of a knob and its track.
    pub const DEFAULT_PADDING: f32 = 10.0;

    /// Builds the track of a knob occupying `bounds`.
    ///
    /// The arc is centered in the bounds with a radius of half the height
    /// minus `padding`. It runs counter-clockwise from
    /// [`ArcGeometry::KNOB_START_ANGLE`] to [`ArcGeometry::KNOB_END_ANGLE`],
    /// sweeping 300 degrees through the bottom of the circle and leaving the
    /// gap at the top.
    ///
    /// A padding of half the height or more gives a degenerate arc.
    pub fn knob_track(bounds: Size, padding: f32) -> Self {
        let radius = bounds.height * 0.5 - padding;

        if radius <= 0.0 {
            log::warn!(
                "knob padding {} leaves no room for a track in bounds {:?}",
                padding,
                bounds
            );
        }

        Self {
            center: math::center_of(bounds),
            radius,
            start_angle: Self::KNOB_START_ANGLE,
            end_angle: Self::KNOB_END_ANGLE,
            drawn_counter_clockwise: true,
        }
    }

    /// The signed angle travelled from `start_angle` to `end_angle`.
    ///
    /// Negative for counter-clockwise arcs, in `[-2*PI, 0)`, and positive for
    /// clockwise arcs, in `(0, 2*PI]`. Equal start and end angles describe a
    /// full circle.
    pub fn sweep(&self) -> Angle {
        let mut da = self.end_angle - self.start_angle;

        if da.radians.abs() >= TAU {
            da.radians = if self.drawn_counter_clockwise { -TAU } else { TAU };
            return da;
        }

        if self.drawn_counter_clockwise {
            while da.radians >= 0.0 {
                da.radians -= TAU;
            }
        } else {
            while da.radians <= 0.0 {
                da.radians += TAU;
            }
        }

        da
    }

    /// The length of the arc, or `0.0` for a degenerate arc.
    pub fn length(&self) -> f32 {
        if self.is_degenerate() {
            return 0.0;
        }
        self.sweep().radians.abs() * self.radius
    }

    /// Returns `true` if the arc collapses to a single point or cannot be
    /// evaluated.
    pub fn is_degenerate(&self) -> bool {
        self.radius <= 0.0
            || !self.radius.is_finite()
            || !math::is_finite_point(self.center)
            || !self.start_angle.radians.is_finite()
            || !self.end_angle.radians.is_finite()
    }

    /// The point on the circle at the given angle.
    #[inline]
    pub fn point_at_angle(&self, angle: Angle) -> Point {
        let (sin, cos) = angle.radians.sin_cos();
        Point::new(
            self.center.x + self.radius * cos,
            self.center.y + self.radius * sin,
        )
    }

    /// Evaluates the arc at parameter `t` (0 = start, 1 = end).
    #[inline]
    pub fn point_at(&self, t: f32) -> Point {
        self.point_at_angle(Angle::radians(
            self.start_angle.radians + self.sweep().radians * t,
        ))
    }

    pub fn start_point(&self) -> Point {
        self.point_at_angle(self.start_angle)
    }

    pub fn end_point(&self) -> Point {
        self.point_at_angle(self.start_angle + self.sweep())
    }
}
