// The following code was copied and modified from
// https://github.com/iced-rs/iced/blob/31d1d5fecbef50fa319cabd5d4194f1e4aaefa21/graphics/src/geometry/path/builder.rs
// Iced license (MIT): https://github.com/iced-rs/iced/blob/31d1d5fecbef50fa319cabd5d4194f1e4aaefa21/LICENSE

use super::Path;

use pathknob_core::math::Point;

use lyon::geom;
use lyon::math;
use lyon::path::builder::{self, SvgPathBuilder};

use crate::arc::ArcGeometry;

/// A [`Path`] builder.
///
/// Once a [`Path`] is built, it can no longer be mutated.
pub struct PathBuilder {
    pub raw: builder::WithSvg<lyon::path::path::BuilderImpl>,
}

impl PathBuilder {
    /// Creates a new [`PathBuilder`].
    pub fn new() -> Self {
        Self {
            raw: lyon::path::Path::builder().with_svg(),
        }
    }

    /// Moves the starting point of a new sub-path to the given `Point`.
    pub fn move_to(mut self, point: Point) -> Self {
        self.raw.move_to(math::Point::new(point.x, point.y));
        self
    }

    /// Connects the last point in the [`Path`] to the given `Point` with a
    /// straight line.
    pub fn line_to(mut self, point: Point) -> Self {
        self.raw.line_to(math::Point::new(point.x, point.y));
        self
    }

    /// Starts a new sub-path tracing the given arc in its own direction.
    ///
    /// A degenerate arc is added as a lone point at its center.
    pub fn arc(mut self, arc: &ArcGeometry) -> Self {
        if arc.is_degenerate() {
            return self.move_to(arc.center);
        }

        let arc = lyon_arc(arc);

        let _ = self.raw.move_to(arc.sample(0.0));

        arc.for_each_quadratic_bezier(&mut |curve| {
            let _ = self.raw.quadratic_bezier_to(curve.ctrl, curve.to);
        });

        self
    }

    /// Starts a new sub-path approximating the given arc with straight line
    /// segments. Every point of the result lies within `tolerance` of the
    /// circle.
    ///
    /// A degenerate arc is added as a lone point at its center.
    pub fn flattened_arc(mut self, arc: &ArcGeometry, tolerance: f32) -> Self {
        if arc.is_degenerate() {
            return self.move_to(arc.center);
        }

        let lyon_arc = lyon_arc(arc);

        self = self.move_to(arc.start_point());
        for p in lyon_arc.flattened(tolerance) {
            self = self.line_to(Point::new(p.x, p.y));
        }

        self
    }

    /// Builds the [`Path`] of this [`PathBuilder`].
    pub fn build(self) -> Path {
        Path {
            raw: self.raw.build(),
        }
    }
}

fn lyon_arc(arc: &ArcGeometry) -> geom::Arc<f32> {
    geom::Arc {
        center: math::Point::new(arc.center.x, arc.center.y),
        radii: math::Vector::new(arc.radius, arc.radius),
        x_rotation: math::Angle::radians(0.0),
        start_angle: math::Angle::radians(arc.start_angle.radians),
        sweep_angle: math::Angle::radians(arc.sweep().radians),
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}
