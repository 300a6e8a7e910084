//! Compass-angle trigonometry and arc drawing for circular progress rings.
//!
//! Angles handed to this crate's public functions are compass degrees
//! (0 = north, growing clockwise) unless a parameter says otherwise.
//! Drawing goes through the [`Surface`] trait; [`Canvas`] is a software
//! implementation of it and [`Recorder`] captures the calls.

#![no_std]
extern crate alloc;

pub mod trig;
pub mod surface;
pub mod drawing;
pub mod canvas;
pub mod recording;


#[doc(inline)]
pub use {
    trig::Float,
    trig::Point,
    trig::InvalidInput,
    trig::TrigResult,
    surface::Surface,
    surface::Color,
    surface::Rect,
    surface::LineCap,
    surface::Direction,
    surface::ArcStroke,
    drawing::ArcSpec,
    drawing::GradientSpec,
    canvas::Canvas,
    canvas::DefaultCanvas,
    recording::Recorder,
    recording::Command,
};
