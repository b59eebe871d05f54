use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};

use super::input::Point;
use super::surface::Stroke;

/// Stroke colour. The background stays fully transparent, like an untouched
/// canvas.
pub const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Half the stroke width in pixels.
pub const BRUSH_RADIUS: f64 = 1.0;

pub(super) fn render<'a>(
    width: u32,
    height: u32,
    strokes: impl IntoIterator<Item = &'a Stroke>,
) -> RgbaImage {
    let mut image = RgbaImage::new(width, height);
    for stroke in strokes {
        for segment in stroke.points().windows(2) {
            draw_segment(&mut image, segment[0], segment[1]);
        }
    }
    image
}

pub(super) fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, image::ImageError> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Stamps the brush at unit intervals along the segment.
fn draw_segment(image: &mut RgbaImage, from: Point, to: Point) {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as u32;
    for step in 0..=steps {
        let t = f64::from(step) / f64::from(steps);
        stamp(image, from.x + dx * t, from.y + dy * t);
    }
}

fn stamp(image: &mut RgbaImage, cx: f64, cy: f64) {
    let (width, height) = (i64::from(image.width()), i64::from(image.height()));
    let reach = BRUSH_RADIUS * BRUSH_RADIUS + 0.25;

    let x0 = (cx - BRUSH_RADIUS).floor() as i64;
    let x1 = (cx + BRUSH_RADIUS).ceil() as i64;
    let y0 = (cy - BRUSH_RADIUS).floor() as i64;
    let y1 = (cy + BRUSH_RADIUS).ceil() as i64;

    for py in y0.max(0)..=y1.min(height - 1) {
        for px in x0.max(0)..=x1.min(width - 1) {
            let ox = px as f64 + 0.5 - cx;
            let oy = py as f64 + 0.5 - cy;
            if ox * ox + oy * oy <= reach {
                image.put_pixel(px as u32, py as u32, INK);
            }
        }
    }
}
