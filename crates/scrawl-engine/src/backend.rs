//! Rendering backend seam.
//!
//! The batch core is backend-agnostic: it accumulates final NDC vertices and
//! hands them to a [`Backend`] in bulk. The wgpu implementation lives in
//! [`crate::render`]; tests use an in-memory recorder.

use crate::batch::Vertex;
use crate::coords::Viewport;

/// Capability the batch flushes into.
///
/// This is intentionally small and stable. Submissions are immediate: a call
/// either queues the work on the device or fails at the backend's own level;
/// the batch never retries.
pub trait Backend {
    /// Current drawable size in logical pixels, used for NDC mapping.
    fn viewport(&self) -> Viewport;

    /// Draws `vertices` as a line list (consecutive pairs form segments).
    fn draw_lines(&mut self, vertices: &[Vertex]);

    /// Draws `vertices` as a triangle list (consecutive triples form triangles).
    fn draw_triangles(&mut self, vertices: &[Vertex]);

    /// Clears only the depth buffer, so the next flush cycle's depth range
    /// does not interact with this cycle's depth writes.
    fn clear_depth(&mut self);
}

#[cfg(test)]
pub(crate) use recording::{DrawCall, RecordingBackend};

#[cfg(test)]
mod recording {
    use super::*;

    /// Everything a backend was asked to do, in order.
    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum DrawCall {
        Lines(Vec<Vertex>),
        Triangles(Vec<Vertex>),
        ClearDepth,
    }

    /// Test double recording submissions instead of touching a GPU.
    #[derive(Debug)]
    pub(crate) struct RecordingBackend {
        pub viewport: Viewport,
        pub calls: Vec<DrawCall>,
    }

    impl RecordingBackend {
        pub(crate) fn new() -> Self {
            // Square viewport keeps NDC math symmetric in assertions.
            Self {
                viewport: Viewport::new(100.0, 100.0),
                calls: Vec::new(),
            }
        }

        /// Number of flushes observed (a flush always ends in a depth clear).
        pub(crate) fn flush_count(&self) -> usize {
            self.calls
                .iter()
                .filter(|c| matches!(c, DrawCall::ClearDepth))
                .count()
        }

        pub(crate) fn line_calls(&self) -> Vec<&Vec<Vertex>> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    DrawCall::Lines(v) => Some(v),
                    _ => None,
                })
                .collect()
        }

        pub(crate) fn triangle_calls(&self) -> Vec<&Vec<Vertex>> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    DrawCall::Triangles(v) => Some(v),
                    _ => None,
                })
                .collect()
        }
    }

    impl Backend for RecordingBackend {
        fn viewport(&self) -> Viewport {
            self.viewport
        }

        fn draw_lines(&mut self, vertices: &[Vertex]) {
            self.calls.push(DrawCall::Lines(vertices.to_vec()));
        }

        fn draw_triangles(&mut self, vertices: &[Vertex]) {
            self.calls.push(DrawCall::Triangles(vertices.to_vec()));
        }

        fn clear_depth(&mut self) {
            self.calls.push(DrawCall::ClearDepth);
        }
    }
}
