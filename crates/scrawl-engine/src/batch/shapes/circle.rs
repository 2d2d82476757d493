use core::f32::consts::TAU;

use crate::backend::Backend;
use crate::batch::{InvalidState, ShapeBatch};
use crate::color::Color;
use crate::coords::Vec2;

/// Target arc-chord length, in logical pixels, for the automatic segment
/// count. Keeping the chord roughly constant makes visual smoothness
/// independent of radius: larger circles get more segments.
pub const DEFAULT_CHORD_LENGTH: f32 = 3.0;

/// Circle appearance with defaulted fields.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleStyle {
    /// Explicit segment count (clamped to >= 1); `None` derives the count
    /// from the radius via [`DEFAULT_CHORD_LENGTH`].
    pub segments: Option<u32>,
    /// Angular offset of the first segment, in radians.
    pub rotation: f32,
    /// Fill color at the center (filled form only).
    pub color_center: Color,
    /// Color at the rim; outlines use this color exclusively.
    pub color_edge: Color,
}

impl CircleStyle {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Self {
            segments: None,
            rotation: 0.0,
            color_center: color,
            color_edge: color,
        }
    }

    #[inline]
    pub fn with_segments(mut self, segments: u32) -> Self {
        self.segments = Some(segments);
        self
    }

    #[inline]
    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }
}

impl Default for CircleStyle {
    fn default() -> Self {
        Self::solid(Color::WHITE)
    }
}

/// Resolves the segment count for a circle of `radius`.
///
/// The automatic form solves `chord = 2r * sin(step / 2)` approximately as
/// `ceil(TAU / asin(chord / radius))`; the ratio is clamped to 1 so tiny
/// circles stay in asin's domain, and the result is floored at 3 (the
/// smallest count that encloses area).
fn segment_count(radius: f32, explicit: Option<u32>) -> u32 {
    match explicit {
        Some(n) => n.max(1),
        None => {
            let ratio = (DEFAULT_CHORD_LENGTH / radius).min(1.0);
            ((TAU / ratio.asin()).ceil() as u32).max(3)
        }
    }
}

#[inline]
fn rim_point(center: Vec2, radius: f32, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    center + Vec2::new(cos, sin) * radius
}

impl<B: Backend> ShapeBatch<B> {
    /// Draws a filled circle as a triangle fan: one slice per segment, the
    /// center vertex carrying `color_center` and both rim vertices
    /// `color_edge`.
    ///
    /// The whole circle advances the depth counter by exactly one step, not
    /// once per segment; every slice renders at the same depth.
    pub fn fill_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        style: &CircleStyle,
    ) -> Result<(), InvalidState> {
        self.ensure_session("fill_circle")?;
        if radius <= 0.0 {
            log::debug!("fill_circle: non-positive radius {radius}; skipped");
            return Ok(());
        }

        let segments = segment_count(radius, style.segments);
        self.reserve_polygons();

        let step = TAU / segments as f32;
        let hub = self.vertex(center, style.color_center);
        for i in 0..segments {
            let a0 = style.rotation + step * i as f32;
            let p0 = self.vertex(rim_point(center, radius, a0), style.color_edge);
            let p1 = self.vertex(rim_point(center, radius, a0 + step), style.color_edge);
            self.push_triangle(hub, p0, p1);
        }

        self.advance_depth();
        Ok(())
    }

    /// Draws a circle outline: the same angular subdivision as
    /// [`fill_circle`](Self::fill_circle), but each segment becomes a line
    /// between consecutive rim points and no center vertex is produced.
    pub fn stroke_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        style: &CircleStyle,
    ) -> Result<(), InvalidState> {
        self.ensure_session("stroke_circle")?;
        if radius <= 0.0 {
            log::debug!("stroke_circle: non-positive radius {radius}; skipped");
            return Ok(());
        }

        let segments = segment_count(radius, style.segments);
        self.reserve_lines();

        let step = TAU / segments as f32;
        for i in 0..segments {
            let a0 = style.rotation + step * i as f32;
            let p0 = self.vertex(rim_point(center, radius, a0), style.color_edge);
            let p1 = self.vertex(rim_point(center, radius, a0 + step), style.color_edge);
            self.push_segment(p0, p1);
        }

        self.advance_depth();
        Ok(())
    }
}
