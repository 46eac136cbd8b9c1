//! Font resolution and letter outline extraction.
//!
//! The badge letter comes from the first usable TrueType font in a fallback
//! chain. Outlines are extracted with ttf-parser (quads/cubics flattened to
//! line segments) and mapped into pixel space so the em square equals the
//! requested pixel size, bounds centered on the anchor. If no font is usable
//! or the glyph has no outline, a blocky builtin letterform keeps the badge
//! rendering instead of failing the run.

use std::fs;
use std::path::PathBuf;

use ab_glyph::Font as _;
use anyhow::Context;
use log::{debug, warn};
use ttf_parser as ttf;

use crate::sdf::{polygon_segments, Outline, Point, Segment};

/// Stock serif fallback chain, tried in order before the builtin letterform.
pub const STOCK_FONTS: [&str; 2] = [
    "/usr/share/fonts/truetype/liberation/LiberationSerif-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSerif-Bold.ttf",
];

pub enum LetterSource {
    /// Owned bytes of a font that decoded successfully at resolve time.
    Font(Vec<u8>),
    Builtin,
}

/// Walk the fallback chain; every tier is best-effort and the builtin tier
/// always succeeds, so resolution itself never errors.
pub fn resolve_font(paths: &[PathBuf]) -> LetterSource {
    for path in paths {
        match fs::read(path) {
            Ok(data) => {
                let decodes = ab_glyph::FontRef::try_from_slice(&data).is_ok()
                    && ttf::Face::parse(&data, 0).is_ok();
                if decodes {
                    debug!("using font {}", path.display());
                    return LetterSource::Font(data);
                }
                warn!("font {} is not a usable TrueType face, trying next", path.display());
            }
            Err(err) => debug!("font {} unavailable: {err}", path.display()),
        }
    }
    warn!("no usable font found, falling back to builtin letterform");
    LetterSource::Builtin
}

/// Outline for `letter` at `px_size`, centered on `anchor`. Falls back to the
/// builtin letterform if the font cannot provide one.
pub fn letter_outline(
    source: &LetterSource,
    letter: char,
    px_size: f32,
    anchor: (f32, f32),
) -> Outline {
    if let LetterSource::Font(data) = source {
        match font_outline(data, letter, px_size, anchor) {
            Ok(Some(outline)) => return outline,
            Ok(None) => warn!("font has no outline for {letter:?}, using builtin letterform"),
            Err(err) => warn!("outline extraction failed ({err}), using builtin letterform"),
        }
    }
    builtin_outline(letter, px_size, anchor)
}

fn font_outline(
    data: &[u8],
    letter: char,
    px_size: f32,
    anchor: (f32, f32),
) -> anyhow::Result<Option<Outline>> {
    let font = ab_glyph::FontRef::try_from_slice(data).context("decode font")?;
    let face = ttf::Face::parse(data, 0).map_err(|e| anyhow::anyhow!("parse face: {e}"))?;
    let gid = font.glyph_id(letter);
    let mut tracer = OutlineTracer::new();
    face.outline_glyph(ttf::GlyphId(gid.0), &mut tracer);
    let (segs, bbox) = tracer.finish();
    if segs.is_empty() {
        return Ok(None);
    }
    // Map font units to pixels: em square -> px_size, glyph bounds centered on
    // the anchor, Y flipped (fonts are y-up, the canvas is y-down).
    let scale = px_size / face.units_per_em() as f32;
    let cx = (bbox.0 + bbox.2) * 0.5;
    let cy = (bbox.1 + bbox.3) * 0.5;
    let map = |(x, y): Point| (anchor.0 + (x - cx) * scale, anchor.1 - (y - cy) * scale);
    let mapped = segs.into_iter().map(|(a, b)| (map(a), map(b))).collect();
    Ok(Some(Outline::from_segments(mapped)))
}

/// Flattens ttf-parser outline callbacks into line segments, tracking bounds.
struct OutlineTracer {
    segs: Vec<Segment>,
    cursor: Point,
    contour_start: Point,
    bbox: (f32, f32, f32, f32),
    open: bool,
}

impl OutlineTracer {
    fn new() -> Self {
        Self {
            segs: Vec::new(),
            cursor: (0.0, 0.0),
            contour_start: (0.0, 0.0),
            bbox: (f32::MAX, f32::MAX, -f32::MAX, -f32::MAX),
            open: false,
        }
    }

    fn track(&mut self, x: f32, y: f32) {
        let b = &mut self.bbox;
        if x < b.0 {
            b.0 = x;
        }
        if y < b.1 {
            b.1 = y;
        }
        if x > b.2 {
            b.2 = x;
        }
        if y > b.3 {
            b.3 = y;
        }
    }

    fn push_to(&mut self, x: f32, y: f32) {
        self.segs.push((self.cursor, (x, y)));
        self.cursor = (x, y);
        self.track(x, y);
    }

    fn close_contour(&mut self) {
        // Avoid a zero-length closing segment when the contour already closed.
        if self.open && self.cursor != self.contour_start {
            self.segs.push((self.cursor, self.contour_start));
        }
        self.open = false;
    }

    fn finish(mut self) -> (Vec<Segment>, (f32, f32, f32, f32)) {
        self.close_contour();
        (self.segs, self.bbox)
    }
}

impl ttf::OutlineBuilder for OutlineTracer {
    fn move_to(&mut self, x: f32, y: f32) {
        self.close_contour();
        self.cursor = (x, y);
        self.contour_start = (x, y);
        self.open = true;
        self.track(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.push_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        const STEPS: usize = 12;
        let (sx, sy) = self.cursor;
        for i in 1..=STEPS {
            let t = i as f32 / STEPS as f32;
            let it = 1.0 - t;
            let px = it * it * sx + 2.0 * it * t * x1 + t * t * x;
            let py = it * it * sy + 2.0 * it * t * y1 + t * t * y;
            self.push_to(px, py);
        }
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        const STEPS: usize = 18;
        let (sx, sy) = self.cursor;
        for i in 1..=STEPS {
            let t = i as f32 / STEPS as f32;
            let it = 1.0 - t;
            let px = sx * it * it * it + 3.0 * x1 * it * it * t + 3.0 * x2 * it * t * t + x * t * t * t;
            let py = sy * it * it * it + 3.0 * y1 * it * it * t + 3.0 * y2 * it * t * t + y * t * t * t;
            self.push_to(px, py);
        }
    }

    fn close(&mut self) {
        self.close_contour();
    }
}

/// Blocky letterforms in a unit box (x right, y down, 0..1 both axes), scaled
/// so the box height is ~70% of the em like a serif capital. Only 'P' has a
/// dedicated shape; anything else renders as a plain block so the badge still
/// comes out visibly wrong rather than empty.
fn builtin_outline(letter: char, px_size: f32, anchor: (f32, f32)) -> Outline {
    let h = px_size * 0.72;
    let w = h * 0.62;
    let map = |(ux, uy): Point| (anchor.0 + (ux - 0.5) * w, anchor.1 + (uy - 0.5) * h);
    let contour = |pts: &[Point]| -> Vec<Segment> {
        let mapped: Vec<Point> = pts.iter().map(|&p| map(p)).collect();
        polygon_segments(&mapped)
    };
    let segs = match letter.to_ascii_uppercase() {
        'P' => {
            let mut segs = contour(&[
                (0.0, 0.0),
                (0.78, 0.0),
                (0.78, 0.52),
                (0.26, 0.52),
                (0.26, 1.0),
                (0.0, 1.0),
            ]);
            segs.extend(contour(&[(0.26, 0.18), (0.52, 0.18), (0.52, 0.34), (0.26, 0.34)]));
            segs
        }
        _ => contour(&[(0.1, 0.0), (0.9, 0.0), (0.9, 1.0), (0.1, 1.0)]),
    };
    Outline::from_segments(segs)
}
