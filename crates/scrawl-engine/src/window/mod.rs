//! Windowing and the main loop.
//!
//! Owns the winit event loop and the single application window, drives the
//! frame clock, and hands the application a [`FrameCtx`] once per redraw.

mod runtime;

pub use runtime::{App, AppControl, FrameCtx, Runtime, RuntimeConfig};
