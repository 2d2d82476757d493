//! Scrawl engine crate.
//!
//! Batched immediate-mode 2D shape rendering: callers submit lines, boxes,
//! circles and triangles between `begin()`/`end()`, and the batch turns them
//! into as few GPU draw calls as possible while preserving submission order
//! via per-shape depth values.

pub mod backend;
pub mod batch;
pub mod color;
pub mod coords;
pub mod device;
pub mod logging;
pub mod render;
pub mod time;
pub mod window;
