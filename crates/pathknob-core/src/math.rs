pub use euclid;

/// A point in units of logical points.
///
/// Alias for ```euclid::default::Point2D<f32>```.
pub type Point = euclid::default::Point2D<f32>;

/// A vector in units of logical points.
///
/// Alias for ```euclid::default::Vector2D<f32>```.
pub type Vector = euclid::default::Vector2D<f32>;

/// A size in units of logical points.
///
/// Alias for ```euclid::default::Size2D<f32>```.
pub type Size = euclid::default::Size2D<f32>;

/// A rectangle in units of logical points.
///
/// Alias for ```euclid::default::Rect<f32>```
pub type Rect = euclid::default::Rect<f32>;

/// An angle in radians (f32).
///
/// Alias for ```euclid::Angle<f32>```
pub type Angle = euclid::Angle<f32>;

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub const fn vector(x: f32, y: f32) -> Vector {
    Vector::new(x, y)
}

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub const fn point(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

/// Shorthand for `Size::new(x, y)`.
#[inline]
pub const fn size(w: f32, h: f32) -> Size {
    Size::new(w, h)
}

/// Shorthand for `Angle { radians: value }`.
#[inline]
pub const fn radians(radians: f32) -> Angle {
    Angle { radians }
}

/// Shorthand for `Angle { radians: value * PI / 180.0 }`.
#[inline]
pub fn degrees(degrees: f32) -> Angle {
    Angle {
        radians: degrees * (std::f32::consts::PI / 180.0),
    }
}

/// Shorthand for `Rect::new(Point::new(x, y), Size::new(width, height))`.
#[inline]
pub const fn rect(x: f32, y: f32, width: f32, height: f32) -> Rect {
    Rect::new(Point::new(x, y), Size::new(width, height))
}

/// The center of a rectangle with its origin at `(0, 0)` and the given size.
#[inline]
pub fn center_of(bounds: Size) -> Point {
    Point::new(bounds.width * 0.5, bounds.height * 0.5)
}

/// A square rectangle of side `extent` centered on `center`.
#[inline]
pub fn square_around(center: Point, extent: f32) -> Rect {
    let half = extent * 0.5;
    Rect::new(
        Point::new(center.x - half, center.y - half),
        Size::new(extent, extent),
    )
}

/// Returns `true` if both coordinates of the point are finite.
#[inline]
pub fn is_finite_point(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
