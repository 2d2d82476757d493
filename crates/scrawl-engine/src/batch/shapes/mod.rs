//! Geometry builders, one file per shape type.
//!
//! Extending the batch:
//! - add a new shape module here
//! - define its style struct (named fields with defaults, not overload ladders)
//! - implement the canonical operation(s) in an `impl ShapeBatch` block
//!
//! Every operation checks the session, reserves buffer capacity (which may
//! flush), builds its vertices at the current depth, and advances the depth
//! exactly once.

pub(crate) mod circle;
pub(crate) mod line;
pub(crate) mod rect;
pub(crate) mod triangle;

pub use circle::CircleStyle;
pub use line::LineStyle;
pub use rect::RectStyle;
pub use triangle::TriangleStyle;
