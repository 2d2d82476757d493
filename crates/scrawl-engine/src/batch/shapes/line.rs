use crate::backend::Backend;
use crate::batch::{InvalidState, ShapeBatch};
use crate::color::Color;
use crate::coords::Vec2;

/// Line appearance with defaulted fields.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    /// Stroke width in logical pixels; clamped to a minimum of 1.
    pub width: f32,
    pub color_start: Color,
    pub color_end: Color,
}

impl LineStyle {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Self {
            width: 1.0,
            color_start: color,
            color_end: color,
        }
    }

    #[inline]
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::solid(Color::WHITE)
    }
}

impl<B: Backend> ShapeBatch<B> {
    /// Draws a line segment from `start` to `end`.
    ///
    /// Width 1 emits a plain line-list segment. A wider line is reinterpreted
    /// as a filled quad: the endpoints are offset along the perpendicular by
    /// half the width and the four corners go out as two triangles, colors
    /// interpolating from `color_start` to `color_end` along the length.
    ///
    /// Exactly one depth step per call, whichever buffer the geometry lands in.
    pub fn line(&mut self, start: Vec2, end: Vec2, style: &LineStyle) -> Result<(), InvalidState> {
        self.ensure_session("line")?;

        let width = style.width.max(1.0);

        // A zero-length segment has no perpendicular to expand along; it
        // falls back to the plain line-list form regardless of width.
        match (end - start).normalized() {
            Some(dir) if width > 1.0 => {
                self.reserve_polygons();
                let half = dir.perp() * (width * 0.5);

                let s0 = self.vertex(start + half, style.color_start);
                let s1 = self.vertex(start - half, style.color_start);
                let e0 = self.vertex(end + half, style.color_end);
                let e1 = self.vertex(end - half, style.color_end);

                // Both triangles share the start-color corners and end-color
                // corners so the quad interpolates smoothly along its length.
                self.push_triangle(s0, e0, e1);
                self.push_triangle(s0, e1, s1);
            }
            _ => {
                self.reserve_lines();
                let a = self.vertex(start, style.color_start);
                let b = self.vertex(end, style.color_end);
                self.push_segment(a, b);
            }
        }

        self.advance_depth();
        Ok(())
    }

    /// Polar overload: derives the endpoint from `length` and `angle`
    /// (radians from the +X axis; positive angles sweep upward on screen,
    /// hence the flipped sine) and delegates to [`line`](Self::line).
    ///
    /// Returns the computed endpoint so callers can chain segments.
    pub fn line_polar(
        &mut self,
        start: Vec2,
        length: f32,
        angle: f32,
        style: &LineStyle,
    ) -> Result<Vec2, InvalidState> {
        let end = start + Vec2::new(angle.cos(), -angle.sin()) * length;
        self.line(start, end, style)?;
        Ok(end)
    }
}
