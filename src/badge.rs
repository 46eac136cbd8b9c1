//! Badge description and rendering.
//!
//! The default badge reproduces the project icon: opaque dark canvas, two
//! concentric gold rings, three gold stars across the top, and a centered
//! serif capital. Geometry is fixed at 256x256; the ICO variant is produced
//! by resizing the rendered canvas at export time.

use std::path::PathBuf;

use image::{Rgba, RgbaImage};

use crate::glyph;
use crate::paint;
use crate::sdf::Outline;
use crate::star::{self, star_points};

/// Canvas edge length in pixels.
pub const BADGE_SIZE: u32 = 256;

const CENTER: f32 = 128.0;

/// Outer ring: inscribed in [2, 254] with a 4px inward stroke.
/// Inner ring: inscribed in [10, 246] with a 2px inward stroke.
const RINGS: [(f32, f32); 2] = [(126.0, 122.0), (118.0, 116.0)];

/// `(cx, cy, outer_r)` for the large top star and the two flanking ones.
const STAR_LAYOUT: [(f32, f32, f32); 3] = [(128.0, 48.0, 18.0), (70.0, 73.0, 13.0), (186.0, 73.0, 13.0)];

/// Letter anchor sits below center so the glyph clears the stars.
const LETTER_ANCHOR: (f32, f32) = (CENTER, 140.0);

pub struct Badge {
    pub background: Rgba<u8>,
    pub ring_color: Rgba<u8>,
    pub star_color: Rgba<u8>,
    pub letter_color: Rgba<u8>,
    pub letter: char,
    pub letter_px: f32,
    /// Font files tried in order; empty list goes straight to the builtin letterform.
    pub font_paths: Vec<PathBuf>,
}

impl Default for Badge {
    fn default() -> Self {
        Self {
            background: Rgba([26, 26, 26, 255]),
            ring_color: Rgba([212, 175, 55, 255]),
            star_color: Rgba([255, 215, 0, 255]),
            letter_color: Rgba([218, 165, 32, 255]),
            letter: 'P',
            letter_px: 140.0,
            font_paths: glyph::STOCK_FONTS.iter().map(PathBuf::from).collect(),
        }
    }
}

impl Badge {
    /// Paint order matters: background, rings, stars, letter.
    pub fn render(&self) -> RgbaImage {
        let mut img = RgbaImage::from_pixel(BADGE_SIZE, BADGE_SIZE, self.background);
        for (r_outer, r_inner) in RINGS {
            paint::fill_ring(&mut img, CENTER, CENTER, r_outer, r_inner, self.ring_color);
        }
        for (cx, cy, r) in STAR_LAYOUT {
            let outline = Outline::from_polygon(&star_points(cx, cy, r, star::INNER_RATIO));
            paint::fill_outline(&mut img, &outline, self.star_color);
        }
        let source = glyph::resolve_font(&self.font_paths);
        let letter = glyph::letter_outline(&source, self.letter, self.letter_px, LETTER_ANCHOR);
        paint::fill_outline(&mut img, &letter, self.letter_color);
        img
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hermetic_badge() -> Badge {
        // No font lookup so results do not depend on installed system fonts.
        Badge { font_paths: Vec::new(), ..Badge::default() }
    }

    #[test]
    fn render_dimensions_and_background() {
        let img = hermetic_badge().render();
        assert_eq!(img.dimensions(), (BADGE_SIZE, BADGE_SIZE));
        let bg = Rgba([26, 26, 26, 255]);
        for (x, y) in [(0, 0), (255, 0), (0, 255), (255, 255)] {
            assert_eq!(img.get_pixel(x, y), &bg, "corner ({x},{y}) must be background");
        }
    }

    #[test]
    fn outer_ring_is_gold() {
        let img = hermetic_badge().render();
        // (128, 4) sits mid stroke of the outer ring (distance ~123.5 from center).
        assert_eq!(img.get_pixel(128, 4), &Rgba([212, 175, 55, 255]));
        // Between the rings the background shows through.
        assert_eq!(img.get_pixel(128, 8), &Rgba([26, 26, 26, 255]));
    }

    #[test]
    fn top_star_spike_is_gold() {
        let img = hermetic_badge().render();
        // On the vertical spike of the large star, between tip (y=30) and center (y=48).
        assert_eq!(img.get_pixel(128, 40), &Rgba([255, 215, 0, 255]));
    }

    #[test]
    fn letter_paints_near_anchor() {
        let img = hermetic_badge().render();
        // Builtin 'P' stem: ~13% into a 100.8x62.5 box centered at (128, 140).
        let p = img.get_pixel(105, 160);
        assert_eq!(p, &Rgba([218, 165, 32, 255]), "letter stem must be painted");
    }

    #[test]
    fn background_stays_opaque_everywhere() {
        let img = hermetic_badge().render();
        assert!(img.pixels().all(|p| p.0[3] == 255));
    }
}
