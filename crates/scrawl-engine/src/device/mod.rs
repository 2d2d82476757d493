//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the Surface (swapchain)
//! - acquiring frames, clearing the background, presenting
//!
//! Unlike a one-encoder-per-frame design, every pass here submits its own
//! encoder: the shape batch flushes mid-frame with encoders of its own, and
//! queue submission order is what keeps the background behind the shapes.

mod gpu;

pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
