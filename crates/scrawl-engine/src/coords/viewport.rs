/// Viewport size in logical pixels.
///
/// The coordinate basis for converting logical pixel positions to NDC
/// (see [`super::to_ndc`]).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
