//! Coordinate and geometry types shared across the engine.
//!
//! Canonical CPU space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! The batch converts positions to NDC on the CPU (see [`to_ndc`]); the
//! shaders receive final clip-space vertices and apply no transform.

mod ndc;
mod rect;
mod vec2;
mod viewport;

pub use ndc::to_ndc;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
