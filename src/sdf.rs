//! Signed-distance primitives for the rasterizer.
//!
//! Convention throughout: distances are in pixels, negative inside the shape,
//! positive outside. Polygonal shapes use an even-odd parity inside test plus
//! minimum distance to the flattened segment list.

pub type Point = (f32, f32);
pub type Segment = (Point, Point);

/// Distance to a filled disc centered at `(cx, cy)` with radius `r`.
pub fn sd_disc(x: f32, y: f32, cx: f32, cy: f32, r: f32) -> f32 {
    let dx = x - cx;
    let dy = y - cy;
    (dx * dx + dy * dy).sqrt() - r
}

/// Distance to the annulus band between `r_inner` and `r_outer`.
pub fn sd_ring(x: f32, y: f32, cx: f32, cy: f32, r_outer: f32, r_inner: f32) -> f32 {
    let d = sd_disc(x, y, cx, cy, 0.0);
    (d - r_outer).max(r_inner - d)
}

/// Closed outline flattened to line segments, possibly several contours.
/// Holes come out naturally from the even-odd parity rule.
pub struct Outline {
    segs: Vec<Segment>,
    bbox: (f32, f32, f32, f32),
}

impl Outline {
    pub fn from_segments(segs: Vec<Segment>) -> Self {
        let mut bbox = (f32::MAX, f32::MAX, -f32::MAX, -f32::MAX);
        for &((ax, ay), (bx, by)) in &segs {
            for (x, y) in [(ax, ay), (bx, by)] {
                if x < bbox.0 {
                    bbox.0 = x;
                }
                if y < bbox.1 {
                    bbox.1 = y;
                }
                if x > bbox.2 {
                    bbox.2 = x;
                }
                if y > bbox.3 {
                    bbox.3 = y;
                }
            }
        }
        if segs.is_empty() {
            bbox = (0.0, 0.0, 0.0, 0.0);
        }
        Self { segs, bbox }
    }

    /// Single closed polygon; the closing edge back to the first vertex is implicit.
    pub fn from_polygon(points: &[Point]) -> Self {
        Self::from_segments(polygon_segments(points))
    }

    pub fn is_empty(&self) -> bool {
        self.segs.is_empty()
    }

    /// `(min_x, min_y, max_x, max_y)` over all segment endpoints.
    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        self.bbox
    }

    pub fn signed_distance(&self, x: f32, y: f32) -> f32 {
        if self.segs.is_empty() {
            return f32::MAX;
        }
        // Even-odd parity via horizontal ray cast
        let mut parity = false;
        for &((ax, ay), (bx, by)) in &self.segs {
            if ((ay > y) != (by > y)) && (x < (bx - ax) * (y - ay) / (by - ay + 1e-6) + ax) {
                parity = !parity;
            }
        }
        // Minimum squared distance to any segment
        let mut min_d2 = f32::MAX;
        for &((ax, ay), (bx, by)) in &self.segs {
            let vx = bx - ax;
            let vy = by - ay;
            let wx = x - ax;
            let wy = y - ay;
            let ll = vx * vx + vy * vy;
            let t = if ll <= 1e-6 { 0.0 } else { ((vx * wx + vy * wy) / ll).clamp(0.0, 1.0) };
            let dx = x - (ax + vx * t);
            let dy = y - (ay + vy * t);
            let d2 = dx * dx + dy * dy;
            if d2 < min_d2 {
                min_d2 = d2;
            }
        }
        let dist = min_d2.sqrt();
        if parity {
            -dist
        } else {
            dist
        }
    }
}

/// Segment list for one closed contour (used to assemble multi-contour outlines).
pub fn polygon_segments(points: &[Point]) -> Vec<Segment> {
    if points.len() < 2 {
        return Vec::new();
    }
    let mut segs = Vec::with_capacity(points.len());
    for pair in points.windows(2) {
        segs.push((pair[0], pair[1]));
    }
    let first = points[0];
    let last = points[points.len() - 1];
    if first != last {
        segs.push((last, first));
    }
    segs
}
