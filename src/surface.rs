use crate::trig::Float;
use crate::trig::Point;

use core::ops::{Deref, DerefMut};

pub type Color = rgb::RGBA8;

/// Style of the open ends of a stroked arc.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LineCap {
    /// The stroke stops exactly at the end angle.
    #[default]
    Butt,
    /// A half disc of diameter `line_width` closes each end.
    Round,
    /// The stroke continues for `line_width / 2` past each end.
    Square,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

/// Axis-aligned rectangle, `origin` being its top left corner.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Point,
}

impl Rect {
    pub fn new(x: Float, y: Float, w: Float, h: Float) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Point::new(w, h),
        }
    }

    pub fn center(&self) -> Point {
        self.origin + self.size * 0.5
    }
}

/// A circular arc together with the way it is stroked.
///
/// `start_angle` and `end_angle` are cartesian radians.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcStroke {
    pub center: Point,
    pub radius: Float,
    pub start_angle: Float,
    pub end_angle: Float,
    pub direction: Direction,
    pub line_width: Float,
    pub line_cap: LineCap,
}

/// Something the drawing functions can draw on.
///
/// Coordinates are in a Y-down space. Any 2D graphics API offering these six
/// operations can host the crate.
pub trait Surface {
    /// Fills the ellipse inscribed in `rect` with the current fill color.
    fn fill_ellipse(&mut self, rect: Rect);

    /// Strokes `arc` with the current stroke color.
    ///
    /// `arc.direction` is read in the Y-up convention of a flipped graphics
    /// context, so `CounterClockwise` sweeps towards increasing angles.
    fn stroke_arc(&mut self, arc: &ArcStroke);

    /// Intersects the current clip with the outline a stroke of `path` would
    /// cover.
    ///
    /// `path.direction` is read in the Y-down convention of the view, so
    /// `Clockwise` sweeps towards increasing angles.
    fn clip_to_path(&mut self, path: &ArcStroke);

    /// Paints the clipped area with a gradient going from `colors[0]` at
    /// `start` to `colors[1]` at `end`.
    fn draw_linear_gradient(&mut self, colors: [Color; 2], start: Point, end: Point);

    /// Pushes the graphics state (colors, clip).
    fn save_state(&mut self);

    /// Pops the graphics state pushed by the last `save_state`.
    fn restore_state(&mut self);
}

/// Saved graphics state of a surface, restored when dropped.
pub struct SavedState<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: Surface + ?Sized> SavedState<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        surface.save_state();
        Self { surface }
    }
}

impl<S: Surface + ?Sized> Deref for SavedState<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for SavedState<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for SavedState<'_, S> {
    fn drop(&mut self) {
        self.surface.restore_state();
    }
}
