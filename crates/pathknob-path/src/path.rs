// The following code was copied and modified from
// https://github.com/iced-rs/iced/blob/31d1d5fecbef50fa319cabd5d4194f1e4aaefa21/graphics/src/geometry/path.rs
// Iced license (MIT): https://github.com/iced-rs/iced/blob/31d1d5fecbef50fa319cabd5d4194f1e4aaefa21/LICENSE

mod builder;

pub use builder::PathBuilder;

pub use lyon::path as lyon_path;

use pathknob_core::math::Point;

use crate::arc::ArcGeometry;

/// An immutable set of points that may or may not be connected.
///
/// This is what a host hands to its drawing layer to stroke the knob track.
#[derive(Debug, Clone)]
pub struct Path {
    pub raw: lyon::path::Path,
}

impl Path {
    /// Creates a new [`Path`] tracing the given arc from its start angle to
    /// its end angle.
    pub fn arc(arc: &ArcGeometry) -> Self {
        PathBuilder::new().arc(arc).build()
    }

    /// Creates a new [`Path`] of straight segments following the given arc
    /// to within `tolerance`.
    pub fn flattened_arc(arc: &ArcGeometry, tolerance: f32) -> Self {
        PathBuilder::new().flattened_arc(arc, tolerance).build()
    }

    /// The first point of the path, if any.
    pub fn first_point(&self) -> Option<Point> {
        self.raw.first_endpoint().map(|(p, _)| Point::new(p.x, p.y))
    }

    /// The last point of the path, if any.
    pub fn last_point(&self) -> Option<Point> {
        self.raw.last_endpoint().map(|(p, _)| Point::new(p.x, p.y))
    }
}
