use crate::backend::Backend;
use crate::batch::{InvalidState, ShapeBatch};
use crate::color::Color;
use crate::coords::{Rect, Vec2};

/// Per-corner box colors with defaulted fields.
#[derive(Debug, Clone, PartialEq)]
pub struct RectStyle {
    pub top_left: Color,
    pub top_right: Color,
    pub bottom_right: Color,
    pub bottom_left: Color,
}

impl RectStyle {
    /// Single uniform color for all four corners.
    #[inline]
    pub fn uniform(color: Color) -> Self {
        Self {
            top_left: color,
            top_right: color,
            bottom_right: color,
            bottom_left: color,
        }
    }
}

impl Default for RectStyle {
    fn default() -> Self {
        Self::uniform(Color::WHITE)
    }
}

impl<B: Backend> ShapeBatch<B> {
    /// Draws a filled box as two triangles: (top-left, bottom-right,
    /// bottom-left) and (top-left, top-right, bottom-right), with per-corner
    /// colors.
    pub fn fill_rect(&mut self, rect: Rect, style: &RectStyle) -> Result<(), InvalidState> {
        self.ensure_session("fill_rect")?;
        self.reserve_polygons();

        let r = rect.normalized();
        let tl = self.vertex(r.top_left(), style.top_left);
        let tr = self.vertex(r.top_right(), style.top_right);
        let br = self.vertex(r.bottom_right(), style.bottom_right);
        let bl = self.vertex(r.bottom_left(), style.bottom_left);

        self.push_triangle(tl, br, bl);
        self.push_triangle(tl, tr, br);

        self.advance_depth();
        Ok(())
    }

    /// Draws a box outline as four line segments in top, right, bottom, left
    /// order, each interpolating between its two corner colors.
    ///
    /// The bottom-left corner is displaced one pixel down: line rasterization
    /// tends to drop the bottom row under top-left fill rules, so the bottom
    /// and left segments are extended to cover it.
    pub fn stroke_rect(&mut self, rect: Rect, style: &RectStyle) -> Result<(), InvalidState> {
        self.ensure_session("stroke_rect")?;
        self.reserve_lines();

        let r = rect.normalized();
        let tl = r.top_left();
        let tr = r.top_right();
        let br = r.bottom_right();
        let bl = r.bottom_left() + Vec2::new(0.0, 1.0);

        let segments = [
            (tl, style.top_left, tr, style.top_right),
            (tr, style.top_right, br, style.bottom_right),
            (br, style.bottom_right, bl, style.bottom_left),
            (bl, style.bottom_left, tl, style.top_left),
        ];
        for (p0, c0, p1, c1) in segments {
            let a = self.vertex(p0, c0);
            let b = self.vertex(p1, c1);
            self.push_segment(a, b);
        }

        self.advance_depth();
        Ok(())
    }
}
