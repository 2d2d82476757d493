use super::{Vec2, Viewport};

/// Maps a pixel-space position plus a depth scalar to normalized device
/// coordinates.
///
/// X maps `[0, width]` to `[-1, 1]`. Y gets the same mapping and is then
/// sign-inverted: pixel-space Y grows downward, NDC Y grows upward. Z is
/// passed through unchanged as the depth value.
///
/// Degenerate viewports are clamped to one pixel so the mapping stays finite.
#[inline]
pub fn to_ndc(p: Vec2, depth: f32, viewport: Viewport) -> [f32; 3] {
    let w = viewport.width.max(1.0);
    let h = viewport.height.max(1.0);
    [
        p.x / w * 2.0 - 1.0,
        -(p.y / h * 2.0 - 1.0),
        depth,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const VP: Viewport = Viewport::new(800.0, 600.0);

    #[test]
    fn origin_maps_to_top_left_corner() {
        assert_eq!(to_ndc(Vec2::zero(), 0.5, VP), [-1.0, 1.0, 0.5]);
    }

    #[test]
    fn full_extent_maps_to_bottom_right_corner() {
        assert_eq!(to_ndc(Vec2::new(800.0, 600.0), 0.5, VP), [1.0, -1.0, 0.5]);
    }

    #[test]
    fn center_maps_to_ndc_origin() {
        assert_eq!(to_ndc(Vec2::new(400.0, 300.0), 1.0, VP), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn depth_passes_through_unchanged() {
        let z = 0.123_f32;
        assert_eq!(to_ndc(Vec2::new(1.0, 1.0), z, VP)[2], z);
    }
}
