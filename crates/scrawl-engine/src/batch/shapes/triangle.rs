use core::f32::consts::FRAC_PI_6;

use crate::backend::Backend;
use crate::batch::{InvalidState, ShapeBatch};
use crate::color::Color;
use crate::coords::Vec2;

/// Per-vertex triangle colors.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleStyle {
    /// Colors for the three vertices in the order they are passed. If the
    /// builder swaps vertices to fix the winding, the colors travel with
    /// their vertices.
    pub colors: [Color; 3],
}

impl TriangleStyle {
    #[inline]
    pub fn uniform(color: Color) -> Self {
        Self {
            colors: [color; 3],
        }
    }
}

impl Default for TriangleStyle {
    fn default() -> Self {
        Self::uniform(Color::WHITE)
    }
}

/// Reorders `points` (and their colors) to clockwise screen-space winding.
///
/// With +Y down, `cross((b-a), (c-a)) > 0` means the vertices already run
/// clockwise on screen; a negative cross is counter-clockwise and swaps the
/// second and third vertex.
fn wind_clockwise(mut points: [Vec2; 3], mut colors: [Color; 3]) -> ([Vec2; 3], [Color; 3]) {
    let cross = (points[1] - points[0]).cross(points[2] - points[0]);
    if cross < 0.0 {
        points.swap(1, 2);
        colors.swap(1, 2);
    }
    (points, colors)
}

/// Vertex positions of an equilateral triangle described by its height.
///
/// 30-degree geometry: the half-base is `height * tan(30deg)` and the
/// centroid splits the height into two thirds toward the apex and one third
/// toward the base. Offsets are rotated by `rotation` before being applied
/// to `center`. The resulting order (apex, base-right, base-left) is already
/// clockwise on screen.
fn equilateral_points(center: Vec2, height: f32, rotation: f32) -> [Vec2; 3] {
    let half_base = height * FRAC_PI_6.tan();
    let to_apex = height * (2.0 / 3.0);
    let to_base = height / 3.0;

    [
        center + Vec2::new(0.0, -to_apex).rotated(rotation),
        center + Vec2::new(half_base, to_base).rotated(rotation),
        center + Vec2::new(-half_base, to_base).rotated(rotation),
    ]
}

impl<B: Backend> ShapeBatch<B> {
    /// Draws a filled triangle.
    ///
    /// Winding is normalized to clockwise in screen space before emission
    /// (counter-clockwise input swaps the second and third vertex together
    /// with their colors), so downstream consumers can rely on it.
    pub fn fill_triangle(
        &mut self,
        a: Vec2,
        b: Vec2,
        c: Vec2,
        style: &TriangleStyle,
    ) -> Result<(), InvalidState> {
        self.ensure_session("fill_triangle")?;
        self.reserve_polygons();

        let (points, colors) = wind_clockwise([a, b, c], style.colors);
        let v0 = self.vertex(points[0], colors[0]);
        let v1 = self.vertex(points[1], colors[1]);
        let v2 = self.vertex(points[2], colors[2]);
        self.push_triangle(v0, v1, v2);

        self.advance_depth();
        Ok(())
    }

    /// Draws a triangle outline as three line segments connecting the
    /// vertices pairwise, after the same winding normalization as
    /// [`fill_triangle`](Self::fill_triangle).
    pub fn stroke_triangle(
        &mut self,
        a: Vec2,
        b: Vec2,
        c: Vec2,
        style: &TriangleStyle,
    ) -> Result<(), InvalidState> {
        self.ensure_session("stroke_triangle")?;
        self.reserve_lines();

        let (points, colors) = wind_clockwise([a, b, c], style.colors);
        for i in 0..3 {
            let j = (i + 1) % 3;
            let s = self.vertex(points[i], colors[i]);
            let e = self.vertex(points[j], colors[j]);
            self.push_segment(s, e);
        }

        self.advance_depth();
        Ok(())
    }

    /// Draws a filled equilateral triangle described by its center, height
    /// (apex to base distance) and rotation, delegating to
    /// [`fill_triangle`](Self::fill_triangle).
    pub fn fill_triangle_equilateral(
        &mut self,
        center: Vec2,
        height: f32,
        rotation: f32,
        style: &TriangleStyle,
    ) -> Result<(), InvalidState> {
        let [a, b, c] = equilateral_points(center, height, rotation);
        self.fill_triangle(a, b, c, style)
    }

    /// Outline form of [`fill_triangle_equilateral`](Self::fill_triangle_equilateral),
    /// reusing the same vertex derivation.
    pub fn stroke_triangle_equilateral(
        &mut self,
        center: Vec2,
        height: f32,
        rotation: f32,
        style: &TriangleStyle,
    ) -> Result<(), InvalidState> {
        let [a, b, c] = equilateral_points(center, height, rotation);
        self.stroke_triangle(a, b, c, style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::RecordingBackend;
    use crate::coords::{to_ndc, Viewport};

    fn batch() -> ShapeBatch<RecordingBackend> {
        let mut b = ShapeBatch::new(RecordingBackend::new());
        b.begin().unwrap();
        b
    }

    fn emitted_screen_cross(verts: &[crate::batch::Vertex], vp: Viewport) -> f32 {
        // Undo the NDC mapping signs: NDC Y is inverted, so screen-space
        // winding flips sign relative to NDC winding.
        let p = |v: &crate::batch::Vertex| {
            Vec2::new(
                (v.position[0] + 1.0) * 0.5 * vp.width,
                (1.0 - (v.position[1] + 1.0) * 0.5) * vp.height,
            )
        };
        let (a, b, c) = (p(&verts[0]), p(&verts[1]), p(&verts[2]));
        (b - a).cross(c - a)
    }

    #[test]
    fn counter_clockwise_input_is_swapped() {
        let mut b = batch();
        // a -> b -> c runs counter-clockwise on screen (+Y down).
        let a = Vec2::new(10.0, 10.0);
        let bb = Vec2::new(20.0, 40.0);
        let c = Vec2::new(50.0, 10.0);
        assert!((bb - a).cross(c - a) < 0.0);

        b.fill_triangle(a, bb, c, &TriangleStyle::default()).unwrap();
        let vp = b.backend().viewport();
        assert!(emitted_screen_cross(b.buffered_polygon_vertices(), vp) > 0.0);
    }

    #[test]
    fn clockwise_input_is_preserved() {
        let mut b = batch();
        let a = Vec2::new(10.0, 10.0);
        let bb = Vec2::new(50.0, 10.0);
        let c = Vec2::new(20.0, 40.0);
        assert!((bb - a).cross(c - a) > 0.0);

        b.fill_triangle(a, bb, c, &TriangleStyle::default()).unwrap();

        let vp = b.backend().viewport();
        let verts = b.buffered_polygon_vertices();
        assert!(emitted_screen_cross(verts, vp) > 0.0);
        // Unswapped: vertex order matches input order.
        assert_eq!(verts[0].position, to_ndc(a, 1.0, vp));
        assert_eq!(verts[1].position, to_ndc(bb, 1.0, vp));
        assert_eq!(verts[2].position, to_ndc(c, 1.0, vp));
    }

    #[test]
    fn colors_travel_with_swapped_vertices() {
        let mut b = batch();
        let style = TriangleStyle {
            colors: [Color::RED, Color::GREEN, Color::BLUE],
        };
        // Counter-clockwise input forces the swap.
        let a = Vec2::new(10.0, 10.0);
        let bb = Vec2::new(20.0, 40.0);
        let c = Vec2::new(50.0, 10.0);
        b.fill_triangle(a, bb, c, &style).unwrap();

        let vp = b.backend().viewport();
        let verts = b.buffered_polygon_vertices();
        assert_eq!(verts[0].color, Color::RED.to_array());
        assert_eq!(verts[1].position, to_ndc(c, 1.0, vp));
        assert_eq!(verts[1].color, Color::BLUE.to_array());
        assert_eq!(verts[2].color, Color::GREEN.to_array());
    }

    #[test]
    fn outline_is_three_segments() {
        let mut b = batch();
        b.stroke_triangle(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(5.0, 8.0),
            &TriangleStyle::default(),
        )
        .unwrap();
        assert_eq!(b.buffered_line_vertices().len(), 6);
        assert!(b.buffered_polygon_vertices().is_empty());
    }

    // ── equilateral derivation ──────────────────────────────────────────

    #[test]
    fn equilateral_vertices_are_equidistant_from_center() {
        let height = 10.0;
        let points = equilateral_points(Vec2::zero(), height, 0.0);
        let expected = height - height / 3.0;
        for p in points {
            assert!((p.distance(Vec2::zero()) - expected).abs() < 1e-4);
        }
    }

    #[test]
    fn equilateral_sides_are_equal() {
        let points = equilateral_points(Vec2::zero(), 10.0, 0.0);
        let ab = points[0].distance(points[1]);
        let bc = points[1].distance(points[2]);
        let ca = points[2].distance(points[0]);
        assert!((ab - bc).abs() < 1e-4);
        assert!((bc - ca).abs() < 1e-4);
    }

    #[test]
    fn equilateral_rotation_moves_the_apex() {
        let upright = equilateral_points(Vec2::zero(), 10.0, 0.0);
        let rotated = equilateral_points(Vec2::zero(), 10.0, core::f32::consts::PI);
        // Half a turn points the apex down.
        assert!((upright[0].y + rotated[0].y).abs() < 1e-4);
        assert!((upright[0].x - rotated[0].x).abs() < 1e-4);
    }

    #[test]
    fn equilateral_derivation_is_already_clockwise() {
        let [a, b, c] = equilateral_points(Vec2::new(50.0, 50.0), 20.0, 0.3);
        assert!((b - a).cross(c - a) > 0.0);
    }

    #[test]
    fn equilateral_fill_emits_one_triangle() {
        let mut b = batch();
        b.fill_triangle_equilateral(
            Vec2::new(50.0, 50.0),
            10.0,
            0.0,
            &TriangleStyle::default(),
        )
        .unwrap();
        assert_eq!(b.buffered_polygon_vertices().len(), 3);
    }

    #[test]
    fn equilateral_stroke_reuses_fill_vertices() {
        let mut fill = batch();
        fill.fill_triangle_equilateral(Vec2::new(50.0, 50.0), 10.0, 0.5, &TriangleStyle::default())
            .unwrap();
        let mut stroke = batch();
        stroke
            .stroke_triangle_equilateral(Vec2::new(50.0, 50.0), 10.0, 0.5, &TriangleStyle::default())
            .unwrap();

        let fill_verts = fill.buffered_polygon_vertices();
        let stroke_verts = stroke.buffered_line_vertices();
        // Segment starts are the fill triangle's vertices in order.
        assert_eq!(stroke_verts[0].position, fill_verts[0].position);
        assert_eq!(stroke_verts[2].position, fill_verts[1].position);
        assert_eq!(stroke_verts[4].position, fill_verts[2].position);
    }
}
