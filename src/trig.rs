use core::fmt;
use core::f32::consts::{FRAC_PI_2, TAU};
use core::f64::consts::{FRAC_PI_2 as FRAC_PI_2_F64, PI as PI_F64};

#[allow(unused_imports)]
use vek::num_traits::real::Real;

pub type Float = f32;
pub type Point = vek::vec::repr_c::vec2::Vec2<Float>;
pub const ORIGIN: Point = Point::new(0.0, 0.0);

use InvalidInput::*;

/// Input for which the requested quantity is mathematically undefined.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    /// Both points are the same (or not finite): there is no direction.
    ZeroLengthVector,
    /// A radius used as a divisor is zero, negative or NaN.
    NonPositiveRadius,
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZeroLengthVector => f.write_str("points are identical, no direction between them"),
            NonPositiveRadius => f.write_str("radius must be strictly positive"),
        }
    }
}

impl core::error::Error for InvalidInput {}

pub type TrigResult<T> = Result<T, InvalidInput>;

/// Turns a compass angle (0 along north) into a cartesian one (0 along the X axis).
pub fn compass_to_cartesian(radians: Float) -> Float {
    radians - FRAC_PI_2
}

/// Turns a cartesian angle (0 along the X axis) into a compass one (0 along north).
pub fn cartesian_to_compass(radians: Float) -> Float {
    radians + FRAC_PI_2
}

/// Bearing from `from` to `to`, in compass degrees within `[0, 360)`.
///
/// Screen coordinates are assumed: Y grows downwards, so a point straight
/// above `from` is at 0° and a point to its right is at 90°.
pub fn angle_relative_to_north(from: Point, to: Point) -> TrigResult<Float> {
    let v = to - from;

    // any other magnitude, infinite included, has a direction
    if v.x.is_nan() || v.y.is_nan() || v == ORIGIN {
        return Err(ZeroLengthVector);
    }

    let cartesian = v.y.atan2(v.x);

    let mut compass = cartesian_to_compass(cartesian);
    if compass < 0.0 {
        compass += TAU;
    }

    let mut degrees = compass.to_degrees();
    if degrees >= 360.0 {
        degrees -= 360.0;
    }

    Ok(degrees)
}

/// Point at `radius` from the origin along the compass bearing
/// `angle_from_north` (degrees), snapped to whole pixels.
///
/// Computed in `f64` and rounded before narrowing, so half-pixel
/// coordinates such as `sin(30°)` snap the way doubles do.
pub fn point_on_radius(radius: Float, angle_from_north: Float) -> Point {
    let radians = (PI_F64 * angle_from_north as f64) / 180.0;
    let cartesian = radians - FRAC_PI_2_F64;
    let (sin, cos) = cartesian.sin_cos();
    let radius = radius as f64;
    Point::new((radius * cos).round() as Float, (radius * sin).round() as Float)
}

/// Angular span, in the unit of `max_angle`, covered by `arc_length` on a
/// circle of `radius`. A full circumference maps to `max_angle`; longer arcs
/// are not clamped.
pub fn degrees_for_arc_length(arc_length: Float, radius: Float, max_angle: Float) -> TrigResult<Float> {
    if !(radius > 0.0) {
        return Err(NonPositiveRadius);
    }

    let circumference = TAU * radius;
    Ok(max_angle * (arc_length / circumference))
}

/*
 * A stroked arc covers a band centered on `radius`:
 *
 *     outer edge = radius + line_width / 2
 *     inner edge = radius - line_width / 2
 */

/// Distance from the center to the outside edge of a stroked arc.
pub fn outer_radius(radius: Float, line_width: Float) -> Float {
    radius + 0.5 * line_width
}

/// Distance from the center to the inside edge of a stroked arc.
///
/// Negative when `line_width > 2 * radius`; callers deal with that.
pub fn inner_radius(radius: Float, line_width: Float) -> Float {
    radius - 0.5 * line_width
}
