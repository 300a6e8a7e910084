use crate::trig::compass_to_cartesian;
use crate::trig::Float;
use crate::trig::Point;
use crate::surface::ArcStroke;
use crate::surface::Color;
use crate::surface::Direction;
use crate::surface::LineCap;
use crate::surface::Rect;
use crate::surface::SavedState;
use crate::surface::Surface;

/// A stroked arc; angles are compass degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcSpec {
    pub center: Point,
    pub radius: Float,
    pub line_width: Float,
    pub start_angle: Float,
    pub end_angle: Float,
    pub line_cap: LineCap,
}

impl ArcSpec {
    /// Arc starting at north and ending at `max_angle`.
    pub fn ring(center: Point, radius: Float, line_width: Float, max_angle: Float, line_cap: LineCap) -> Self {
        Self {
            center,
            radius,
            line_width,
            start_angle: 0.0,
            end_angle: max_angle,
            line_cap,
        }
    }

    fn stroke(&self, direction: Direction) -> ArcStroke {
        ArcStroke {
            center: self.center,
            radius: self.radius,
            start_angle: compass_to_cartesian(self.start_angle.to_radians()),
            end_angle: compass_to_cartesian(self.end_angle.to_radians()),
            direction,
            line_width: self.line_width,
            line_cap: self.line_cap,
        }
    }
}

/// A stroked arc painted with a two-color gradient.
///
/// `colors` is `[end color, start color]`; any other length draws nothing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientSpec<'a> {
    pub colors: &'a [Color],
    pub arc: ArcSpec,
}

/// Fills the disc of `radius` around `center` and returns its bounding box.
pub fn draw_filled_circle<S: Surface + ?Sized>(surface: &mut S, center: Point, radius: Float) -> Rect {
    let frame = Rect::new(center.x - radius, center.y - radius, 2.0 * radius, 2.0 * radius);
    surface.fill_ellipse(frame);
    frame
}

/// Strokes `arc` counter-clockwise, in the flipped-context sense of
/// [`Surface::stroke_arc`]. Equal start and end angles sweep nothing and are
/// harmless.
pub fn draw_unfilled_arc<S: Surface + ?Sized>(surface: &mut S, arc: &ArcSpec) {
    let stroke = arc.stroke(Direction::CounterClockwise);
    log::trace!("stroking arc {:?}", stroke);
    surface.stroke_arc(&stroke);
}

/// Strokes a ring from north to `max_angle`; below 360° this is a partial ring.
pub fn draw_unfilled_circle<S: Surface + ?Sized>(
    surface: &mut S,
    center: Point,
    radius: Float,
    line_width: Float,
    max_angle: Float,
    line_cap: LineCap,
) {
    draw_unfilled_arc(surface, &ArcSpec::ring(center, radius, line_width, max_angle, line_cap));
}

/// Strokes `spec.arc` with a linear gradient running diagonally across the
/// circle's bounding box, from its bottom left to its top right corner.
///
/// Does nothing unless exactly two colors are given.
pub fn draw_unfilled_gradient_arc<S: Surface + ?Sized>(surface: &mut S, spec: &GradientSpec) {
    let [end_color, start_color] = match spec.colors {
        [a, b] => [*a, *b],
        other => {
            log::debug!("skipping gradient arc: {} colors given, two are required", other.len());
            return;
        }
    };

    let arc = &spec.arc;
    let outline = arc.stroke(Direction::Clockwise);
    let (c, r) = (arc.center, arc.radius);
    let start = Point::new(c.x - r, c.y + r);
    let end = Point::new(c.x + r, c.y - r);

    let mut surface = SavedState::new(surface);
    log::trace!("clipping to arc outline {:?}", outline);
    surface.clip_to_path(&outline);
    surface.draw_linear_gradient([start_color, end_color], start, end);
}

/// Gradient ring from north to `max_angle`.
pub fn draw_unfilled_gradient_circle<S: Surface + ?Sized>(
    surface: &mut S,
    center: Point,
    radius: Float,
    line_width: Float,
    max_angle: Float,
    colors: &[Color],
    line_cap: LineCap,
) {
    let spec = GradientSpec {
        colors,
        arc: ArcSpec::ring(center, radius, line_width, max_angle, line_cap),
    };
    draw_unfilled_gradient_arc(surface, &spec);
}
