//! Shape batching core.
//!
//! Responsibilities:
//! - session control (`begin`/`end`, [`InvalidState`] on misuse)
//! - accumulation of per-shape geometry into line and polygon vertex lists
//! - per-shape depth assignment preserving submission order without sorting
//! - capacity-triggered implicit flush and the flush itself
//!
//! Shape-specific geometry builders live under `batch::shapes`, one file per
//! shape, each contributing an `impl ShapeBatch` block plus its style struct.

mod error;
mod vertex;

pub mod shapes;

pub use error::InvalidState;
pub use vertex::Vertex;

use crate::backend::Backend;
use crate::color::Color;
use crate::coords::{to_ndc, Vec2};

/// Default per-buffer capacity, in primitives (segments or triangles).
pub const DEFAULT_MAX_PRIMITIVES: usize = 1000;

/// Depth value shapes start at after `begin()` and after every flush.
///
/// 1.0 is the far plane in wgpu NDC; later shapes step toward the viewer.
const FAR_DEPTH: f32 = 1.0;

/// Fixed decrement applied after each shape submission.
///
/// Both buffers cap at [`DEFAULT_MAX_PRIMITIVES`]-order primitive counts, so
/// one flush cycle holds a few thousand shapes at most and the running depth
/// never leaves [0.9, 1.0]. The step is far above the f32 ulp at 1.0.
const DEPTH_STEP: f32 = 1.0 / 65_536.0;

/// Immediate-mode shape batcher.
///
/// Owns the rendering backend and two accumulation buffers. Callers wrap any
/// number of shape submissions in `begin()`/`end()`; geometry is flushed to
/// the backend in bulk when a buffer fills up or the session ends.
///
/// Visual layering: every shape submission decrements a running depth value,
/// so shapes submitted later render on top of earlier ones even though lines
/// and triangles go out as two separate draw calls. Ordering is only
/// guaranteed within one flush cycle; cycles themselves are sequenced by
/// submission order to the device.
///
/// Single-threaded and non-reentrant: one session at a time, no internal
/// locking.
#[derive(Debug)]
pub struct ShapeBatch<B: Backend> {
    backend: B,

    /// Line-list vertices; always an even count (pairs form segments).
    lines: Vec<Vertex>,
    /// Triangle-list vertices; always a multiple of three.
    polygons: Vec<Vertex>,

    /// Per-buffer capacity in primitives before an implicit flush.
    max_primitives: usize,

    depth: f32,
    active: bool,
}

impl<B: Backend> ShapeBatch<B> {
    /// Creates a batch bound to `backend` with the default capacity.
    ///
    /// Binding is one-time: the batch owns the backend for its whole life.
    pub fn new(backend: B) -> Self {
        Self::with_capacity(backend, DEFAULT_MAX_PRIMITIVES)
    }

    /// Creates a batch with a custom per-buffer primitive capacity.
    pub fn with_capacity(backend: B, max_primitives: usize) -> Self {
        debug_assert!(max_primitives > 0, "capacity must hold at least one primitive");
        Self {
            backend,
            lines: Vec::new(),
            polygons: Vec::new(),
            max_primitives: max_primitives.max(1),
            depth: FAR_DEPTH,
            active: false,
        }
    }

    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[inline]
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Vertices currently buffered for the line-list draw call.
    #[inline]
    pub fn buffered_line_vertices(&self) -> &[Vertex] {
        &self.lines
    }

    /// Vertices currently buffered for the triangle-list draw call.
    #[inline]
    pub fn buffered_polygon_vertices(&self) -> &[Vertex] {
        &self.polygons
    }

    // ── session control ─────────────────────────────────────────────────

    /// Starts a batching session.
    ///
    /// Fails with [`InvalidState`] if a session is already active.
    pub fn begin(&mut self) -> Result<(), InvalidState> {
        if self.active {
            return Err(InvalidState::requires_no_session("begin"));
        }
        self.active = true;
        self.depth = FAR_DEPTH;
        Ok(())
    }

    /// Ends the session, flushing any buffered geometry.
    ///
    /// Fails with [`InvalidState`] if no session is active.
    pub fn end(&mut self) -> Result<(), InvalidState> {
        if !self.active {
            return Err(InvalidState::requires_session("end"));
        }
        self.flush();
        self.active = false;
        Ok(())
    }

    // ── accumulation internals (used by batch::shapes) ──────────────────

    pub(crate) fn ensure_session(&self, operation: &'static str) -> Result<(), InvalidState> {
        if self.active {
            Ok(())
        } else {
            Err(InvalidState::requires_session(operation))
        }
    }

    /// Flushes if the line buffer has reached capacity, so the next shape
    /// starts a fresh buffer instead of exceeding the cap mid-shape.
    pub(crate) fn reserve_lines(&mut self) {
        if self.lines.len() / 2 >= self.max_primitives {
            self.flush();
        }
    }

    /// Polygon-buffer counterpart of [`reserve_lines`](Self::reserve_lines).
    pub(crate) fn reserve_polygons(&mut self) {
        if self.polygons.len() / 3 >= self.max_primitives {
            self.flush();
        }
    }

    /// Builds a vertex at `p` using the current depth.
    ///
    /// Must be called after any `reserve_*` for the shape: a reserve may
    /// flush, which resets the depth the vertex has to be built with.
    #[inline]
    pub(crate) fn vertex(&self, p: Vec2, color: Color) -> Vertex {
        Vertex::new(to_ndc(p, self.depth, self.backend.viewport()), color)
    }

    #[inline]
    pub(crate) fn push_segment(&mut self, a: Vertex, b: Vertex) {
        self.lines.push(a);
        self.lines.push(b);
    }

    #[inline]
    pub(crate) fn push_triangle(&mut self, a: Vertex, b: Vertex, c: Vertex) {
        self.polygons.push(a);
        self.polygons.push(b);
        self.polygons.push(c);
    }

    /// Steps the depth toward the viewer. Exactly once per shape submission,
    /// however many primitives the shape produced.
    #[inline]
    pub(crate) fn advance_depth(&mut self) {
        self.depth -= DEPTH_STEP;
    }

    /// Submits both buffers and resets for the next cycle.
    ///
    /// No-op when nothing is buffered. Otherwise: line-list draw call if the
    /// line buffer is non-empty, triangle-list draw call if the polygon
    /// buffer is non-empty, both buffers cleared (capacity kept), depth reset
    /// to the far plane, and the backend's depth buffer cleared so the next
    /// cycle's depth range starts clean.
    fn flush(&mut self) {
        if self.lines.is_empty() && self.polygons.is_empty() {
            return;
        }

        log::trace!(
            "flush: {} line vertices, {} polygon vertices",
            self.lines.len(),
            self.polygons.len()
        );

        if !self.lines.is_empty() {
            self.backend.draw_lines(&self.lines);
        }
        if !self.polygons.is_empty() {
            self.backend.draw_triangles(&self.polygons);
        }

        self.lines.clear();
        self.polygons.clear();
        self.depth = FAR_DEPTH;
        self.backend.clear_depth();
    }
}
