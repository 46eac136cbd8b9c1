//! Five-pointed star polygon construction.

use crate::sdf::Point;

/// Inner-vertex radius as a fraction of the outer radius.
pub const INNER_RATIO: f32 = 0.4;

/// Ten vertices alternating outer/inner radius, 36 degrees apart, starting at
/// the top tip `(cx, cy - outer_r)` and winding clockwise in image space.
pub fn star_points(cx: f32, cy: f32, outer_r: f32, inner_ratio: f32) -> [Point; 10] {
    let mut pts = [(0.0, 0.0); 10];
    for (i, p) in pts.iter_mut().enumerate() {
        let angle = (i as f32 * 36.0 - 90.0).to_radians();
        let r = if i % 2 == 0 { outer_r } else { outer_r * inner_ratio };
        *p = (cx + r * angle.cos(), cy + r * angle.sin());
    }
    pts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_tip_first() {
        let pts = star_points(128.0, 48.0, 18.0, INNER_RATIO);
        assert!((pts[0].0 - 128.0).abs() < 1e-3);
        assert!((pts[0].1 - 30.0).abs() < 1e-3);
    }

    #[test]
    fn alternating_radii() {
        let pts = star_points(0.0, 0.0, 10.0, 0.4);
        for (i, (x, y)) in pts.iter().enumerate() {
            let r = (x * x + y * y).sqrt();
            let expect = if i % 2 == 0 { 10.0 } else { 4.0 };
            assert!((r - expect).abs() < 1e-3, "vertex {i} radius {r} != {expect}");
        }
    }

    #[test]
    fn mirror_symmetry_about_center_x() {
        let pts = star_points(50.0, 50.0, 12.0, INNER_RATIO);
        // Vertex i and vertex 10-i mirror across x=50 (vertex 0 maps to itself).
        for i in 1..10 {
            let (xa, ya) = pts[i];
            let (xb, yb) = pts[10 - i];
            assert!((xa - 50.0 + (xb - 50.0)).abs() < 1e-3, "x mirror broken at {i}");
            assert!((ya - yb).abs() < 1e-3, "y mirror broken at {i}");
        }
    }
}
