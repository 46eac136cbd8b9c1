//! In-place canvas composition from signed-distance coverage.
//!
//! Each fill walks the shape's padded bounding box, estimates per-pixel
//! coverage with a 2x2 supersample grid (1px anti-alias band around the
//! surface), and source-over blends the fill color.

use image::{Rgba, RgbaImage};

use crate::sdf::{self, Outline};

const SAMPLE_OFFSETS: [(f32, f32); 4] = [(0.25, 0.25), (0.75, 0.25), (0.25, 0.75), (0.75, 0.75)];

/// Fill every pixel whose signed distance is within the anti-alias band.
/// `bounds` is `(min_x, min_y, max_x, max_y)` in pixel coordinates; pixels
/// outside it (plus a 2px guard) are never touched.
pub fn fill_sdf<F>(img: &mut RgbaImage, bounds: (f32, f32, f32, f32), color: Rgba<u8>, sd: F)
where
    F: Fn(f32, f32) -> f32,
{
    let (w, h) = img.dimensions();
    let x0 = (bounds.0.floor() as i64 - 2).max(0);
    let y0 = (bounds.1.floor() as i64 - 2).max(0);
    let x1 = (bounds.2.ceil() as i64 + 2).min(w as i64 - 1);
    let y1 = (bounds.3.ceil() as i64 + 2).min(h as i64 - 1);
    if x1 < x0 || y1 < y0 {
        return;
    }
    for py in y0..=y1 {
        for px in x0..=x1 {
            let mut coverage = 0.0f32;
            for (ox, oy) in SAMPLE_OFFSETS {
                let d = sd(px as f32 + ox, py as f32 + oy);
                coverage += (0.5 - d).clamp(0.0, 1.0);
            }
            coverage *= 0.25;
            if coverage > 0.0 {
                let dst = img.get_pixel_mut(px as u32, py as u32);
                *dst = over(*dst, color, coverage);
            }
        }
    }
}

pub fn fill_outline(img: &mut RgbaImage, outline: &Outline, color: Rgba<u8>) {
    if outline.is_empty() {
        return;
    }
    fill_sdf(img, outline.bounds(), color, |x, y| outline.signed_distance(x, y));
}

pub fn fill_ring(
    img: &mut RgbaImage,
    cx: f32,
    cy: f32,
    r_outer: f32,
    r_inner: f32,
    color: Rgba<u8>,
) {
    let bounds = (cx - r_outer, cy - r_outer, cx + r_outer, cy + r_outer);
    fill_sdf(img, bounds, color, |x, y| sdf::sd_ring(x, y, cx, cy, r_outer, r_inner));
}

/// Standard source-over with coverage folded into the source alpha.
fn over(dst: Rgba<u8>, src: Rgba<u8>, coverage: f32) -> Rgba<u8> {
    let sa = (src.0[3] as f32 / 255.0) * coverage;
    let da = dst.0[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }
    let mix = |s: u8, d: u8| {
        let c = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
        c.round().clamp(0.0, 255.0) as u8
    };
    Rgba([
        mix(src.0[0], dst.0[0]),
        mix(src.0[1], dst.0[1]),
        mix(src.0[2], dst.0[2]),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    ])
}
