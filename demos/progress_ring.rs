use std::env::args;
use std::fs::write;
use png::Encoder;
use png::ColorType::Rgba;
use png::BitDepth::Eight;
use rgb::ComponentBytes;
use ringtrig::*;
use ringtrig::drawing::*;
use ringtrig::trig::*;
use std::time::Instant;

fn main() {
	let progress: f32 = args().nth(1).and_then(|a| a.parse().ok()).unwrap_or(0.65);
	let png_name = args().nth(2).unwrap_or_else(|| "progress_ring.png".into());

	let (w, h) = (300, 300);
	let center = Point::new(150.0, 150.0);
	let radius = 110.0;
	let line_width = 24.0;

	let colors = [Color::new(255, 94, 58, 255), Color::new(255, 205, 0, 255)];
	let max_angle = 360.0 * progress.clamp(0.0, 1.0);

	let mut canvas = Canvas::<6, 36>::new(w, h);
	let now = Instant::now();

	// track
	canvas.set_stroke_color(Color::new(40, 40, 40, 255));
	draw_unfilled_circle(&mut canvas, center, radius, line_width, 360.0, LineCap::Butt);

	// progress
	draw_unfilled_gradient_circle(&mut canvas, center, radius, line_width, max_angle, &colors, LineCap::Round);

	// knob at the end of the progress arc
	let knob = center + point_on_radius(radius, max_angle);
	canvas.set_fill_color(Color::new(255, 255, 255, 255));
	let frame = draw_filled_circle(&mut canvas, knob, 0.5 * line_width - 2.0);

	// a 5px gap on the track, expressed as an angle
	let gap = degrees_for_arc_length(5.0, radius, 360.0).unwrap();

	println!("rendered in {}ms, knob frame {:?}, 5px = {:.2} degrees", now.elapsed().as_millis(), frame, gap);

	let mut png_buf = Vec::new();
	{
		let mut encoder = Encoder::new(&mut png_buf, w as u32, h as u32);
		encoder.set_color(Rgba);
		encoder.set_depth(Eight);
		let mut writer = encoder.write_header().unwrap();
		writer.write_image_data(canvas.pixels().as_bytes()).unwrap();
	}
	write(&png_name, &png_buf).unwrap();
}
