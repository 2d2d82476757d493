//! GPU rendering backend.
//!
//! [`WgpuBackend`] implements the batch's [`crate::backend::Backend`] seam on
//! top of wgpu. Submissions are immediate: every draw call records and
//! submits its own encoder, so flush cycles land on the queue in submission
//! order.
//!
//! Convention:
//! - vertices arrive in final NDC (the batch maps logical pixels on the CPU)
//! - the shader applies no transform beyond passing position and color through

mod wgpu_backend;

pub use wgpu_backend::WgpuBackend;
