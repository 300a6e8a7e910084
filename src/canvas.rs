use crate::trig::inner_radius;
use crate::trig::outer_radius;
use crate::trig::Float;
use crate::trig::Point;
use crate::trig::ORIGIN;
use crate::surface::ArcStroke;
use crate::surface::Color;
use crate::surface::Direction;
use crate::surface::LineCap;
use crate::surface::Rect;
use crate::surface::Surface;

use wizdraw::push_cubic_bezier_segments;
use wizdraw::fill;

use vek::bezier::CubicBezier2;
use vek::vec::Vec2;

#[allow(unused_imports)]
use vek::num_traits::real::Real;

use core::f32::consts::{FRAC_PI_2, PI, TAU};
use alloc::{vec, vec::Vec};

const TRANSPARENT: Color = Color::new(0, 0, 0, 0);
const BLACK: Color = Color::new(0, 0, 0, 255);

#[derive(Debug, Clone, PartialEq)]
struct State {
    fill_color: Color,
    stroke_color: Color,
    /// per-pixel coverage, `None` when nothing is clipped
    clip: Option<Vec<u8>>,
}

/// Software implementation of [`Surface`] over a row-major RGBA8 buffer.
///
/// `SSAA` is the supersampling factor per axis and `SSAA_SQ` its square.
pub struct Canvas<const SSAA: usize, const SSAA_SQ: usize> {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
    mask: Vec<u8>,
    alpha_blend: bool,
    state: State,
    saved: Vec<State>,
}

pub type DefaultCanvas = Canvas<4, 16>;

impl<const SSAA: usize, const SSAA_SQ: usize> Canvas<SSAA, SSAA_SQ> {
    /// A transparent canvas drawing in opaque black.
    pub fn new(width: usize, height: usize) -> Self {
        let length = width * height;
        Self {
            width,
            height,
            pixels: vec![TRANSPARENT; length],
            mask: vec![0; length],
            alpha_blend: true,
            state: State {
                fill_color: BLACK,
                stroke_color: BLACK,
                clip: None,
            },
            saved: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        match x < self.width && y < self.height {
            true => Some(self.pixels[y * self.width + x]),
            false => None,
        }
    }

    /// Overwrites every pixel, ignoring the clip.
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.state.fill_color = color;
    }

    pub fn set_stroke_color(&mut self, color: Color) {
        self.state.stroke_color = color;
    }

    /// When disabled, painted pixels replace the destination instead of
    /// being composited over it.
    pub fn set_alpha_blend(&mut self, alpha_blend: bool) {
        self.alpha_blend = alpha_blend;
    }

    /// Rasterizes a closed polygon into `self.mask`.
    fn cover(&mut self, polygon: &mut Vec<Point>) {
        self.mask.fill(0);
        if polygon.len() < 3 {
            return;
        }

        if let Some(first) = polygon.first().copied() {
            polygon.push(first);
        }

        fill::<SSAA, SSAA_SQ>(&polygon[..], &mut self.mask, Vec2::new(self.width, self.height));
    }

    /// Blends `color` wherever `self.mask` and the clip both cover.
    fn paint_mask(&mut self, color: Color) {
        let alpha_blend = self.alpha_blend;
        let clip = self.state.clip.as_deref();

        for (i, (dst, q)) in self.pixels.iter_mut().zip(self.mask.iter()).enumerate() {
            let q = clipped(*q, clip, i);
            if q != 0 {
                blend_pixel(dst, color, q, alpha_blend);
            }
        }
    }
}

impl<const SSAA: usize, const SSAA_SQ: usize> Surface for Canvas<SSAA, SSAA_SQ> {
    fn fill_ellipse(&mut self, rect: Rect) {
        let mut flat = Vec::new();
        push_arc(&mut flat, ORIGIN, 1.0, 0.0, TAU);

        let center = rect.center();
        let radii = rect.size * 0.5;
        for point in flat.iter_mut() {
            *point = center + *point * radii;
        }

        self.cover(&mut flat);
        self.paint_mask(self.state.fill_color);
    }

    fn stroke_arc(&mut self, arc: &ArcStroke) {
        let mut outline = stroke_outline(arc, arc.direction == Direction::CounterClockwise);
        self.cover(&mut outline);
        self.paint_mask(self.state.stroke_color);
    }

    fn clip_to_path(&mut self, path: &ArcStroke) {
        let mut outline = stroke_outline(path, path.direction == Direction::Clockwise);
        self.cover(&mut outline);

        let clip = match self.state.clip.take() {
            Some(mut clip) => {
                for (c, q) in clip.iter_mut().zip(self.mask.iter()) {
                    *c = ((*c as u32 * *q as u32) / 255) as u8;
                }
                clip
            }
            None => self.mask.clone(),
        };

        self.state.clip = Some(clip);
    }

    fn draw_linear_gradient(&mut self, colors: [Color; 2], start: Point, end: Point) {
        let axis = end - start;
        let length_sq = axis.dot(axis);
        if !(length_sq > 0.0) {
            log::trace!("empty gradient axis at {:?}", start);
            return;
        }

        let alpha_blend = self.alpha_blend;
        let clip = self.state.clip.as_deref();
        let [first, last] = colors;

        let mut i = 0;
        for y in 0..self.height {
            for x in 0..self.width {
                let q = clipped(255, clip, i);
                if q != 0 {
                    let point = Point::new(x as Float + 0.5, y as Float + 0.5);
                    let t = (point - start).dot(axis) / length_sq;
                    if t <= 1.0 {
                        let color = mix(first, last, t.max(0.0));
                        blend_pixel(&mut self.pixels[i], color, q, alpha_blend);
                    }
                }
                i += 1;
            }
        }
    }

    fn save_state(&mut self) {
        self.saved.push(self.state.clone());
    }

    fn restore_state(&mut self) {
        match self.saved.pop() {
            Some(state) => self.state = state,
            None => log::warn!("restore_state called without a matching save_state"),
        }
    }
}

/// Signed sweep from `start` to `end`: within `[0, 2π]` when `increasing`,
/// within `[-2π, 0]` otherwise.
fn sweep(start: Float, end: Float, increasing: bool) -> Float {
    let delta = end - start;
    if !delta.is_finite() {
        return 0.0;
    }

    let wrap = |d: Float| d - TAU * (d / TAU).floor();
    match increasing {
        true if delta > TAU => TAU,
        true if delta < 0.0 => wrap(delta),
        true => delta,
        false if delta < -TAU => -TAU,
        false if delta > 0.0 => wrap(delta) - TAU,
        false => delta,
    }
}

/// Flattens a circular arc, one cubic bezier per quarter turn at most.
fn push_arc(flat: &mut Vec<Point>, center: Point, radius: Float, start: Float, sweep: Float) {
    let at = |a: Float| {
        let (sin, cos) = a.sin_cos();
        center + Point::new(cos, sin) * radius
    };
    let tangent = |a: Float| {
        let (sin, cos) = a.sin_cos();
        Point::new(-sin, cos)
    };

    let chunks = (sweep.abs() / FRAC_PI_2).ceil().max(1.0) as usize;
    let delta = sweep / chunks as Float;
    // control point distance for a circular arc of `delta` radians
    let k = (4.0 / 3.0) * (delta / 4.0).tan() * radius;

    let mut a = start;
    flat.push(at(a));
    for _ in 0..chunks {
        let b = a + delta;
        let curve = CubicBezier2 {
            start: at(a),
            ctrl0: at(a) + tangent(a) * k,
            ctrl1: at(b) - tangent(b) * k,
            end: at(b),
        };
        push_cubic_bezier_segments::<8>(&curve, 0.4, flat);
        a = b;
    }
}

/// Closes one end of a stroke: goes from `at + from * half` to
/// `at - from * half`, bulging towards `bulge`.
fn push_cap(flat: &mut Vec<Point>, cap: LineCap, at: Point, from: Point, bulge: Point, half: Float) {
    match cap {
        LineCap::Butt => (),
        LineCap::Square => {
            flat.push(at + from * half + bulge * half);
            flat.push(at - from * half + bulge * half);
        }
        LineCap::Round => {
            let cross = from.x * bulge.y - from.y * bulge.x;
            let turn = if cross < 0.0 { -PI } else { PI };
            push_arc(flat, at, half, from.y.atan2(from.x), turn);
        }
    }
}

/// Polygon covered by stroking `arc`: outer edge, end cap, inner edge
/// backwards, start cap.
fn stroke_outline(arc: &ArcStroke, increasing: bool) -> Vec<Point> {
    let sweep = sweep(arc.start_angle, arc.end_angle, increasing);
    let start = arc.start_angle;
    let end = start + sweep;
    let half = 0.5 * arc.line_width;
    let travel = if sweep < 0.0 { -1.0 } else { 1.0 };

    let radial = |a: Float| {
        let (sin, cos) = a.sin_cos();
        Point::new(cos, sin)
    };
    let forward = |a: Float| {
        let (sin, cos) = a.sin_cos();
        Point::new(-sin, cos) * travel
    };
    let on_center_line = |a: Float| arc.center + radial(a) * arc.radius;

    let mut flat = Vec::new();
    push_arc(&mut flat, arc.center, outer_radius(arc.radius, arc.line_width), start, sweep);
    push_cap(&mut flat, arc.line_cap, on_center_line(end), radial(end), forward(end), half);
    push_arc(&mut flat, arc.center, inner_radius(arc.radius, arc.line_width), end, -sweep);
    push_cap(&mut flat, arc.line_cap, on_center_line(start), -radial(start), -forward(start), half);
    flat
}

fn clipped(coverage: u8, clip: Option<&[u8]>, i: usize) -> u8 {
    match clip {
        Some(clip) => ((coverage as u32 * clip[i] as u32) / 255) as u8,
        None => coverage,
    }
}

fn mix(a: Color, b: Color, t: Float) -> Color {
    let channel = |a: u8, b: u8| {
        let (a, b) = (a as Float, b as Float);
        (a + (b - a) * t).round() as u8
    };
    Color::new(channel(a.r, b.r), channel(a.g, b.g), channel(a.b, b.b), channel(a.a, b.a))
}

#[inline(always)]
fn blend_pixel(dst: &mut Color, src: Color, coverage: u8, alpha_blend: bool) {
    if src.a == 255 && coverage == 255 {
        *dst = src;
        return;
    }

    let src_alpha = ((src.a as u32) * (coverage as u32)) / 255;
    let dst_alpha = 255 - src_alpha;

    let channel = |s: u8, d: u8| match alpha_blend {
        true => (((s as u32) * src_alpha + (d as u32) * dst_alpha) / 255) as u8,
        false => (((s as u32) * src_alpha) / 255) as u8,
    };

    *dst = Color::new(
        channel(src.r, dst.r),
        channel(src.g, dst.g),
        channel(src.b, dst.b),
        channel(src.a, dst.a),
    );
}
