//! Dunning-Kruger Explorer Render Library
//!
//! Renderer abstraction and implementations for the explorer chart.
//! The default implementation uses Vello for GPU-accelerated rendering.

mod renderer;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use renderer::{
    pulse_ring, ChartPalette, GridStyle, RenderContext, RenderResult, Renderer, RendererError,
    GRID_SPACING, MARKER_RADIUS, PAGE_RADIUS, RING_RADIUS,
};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::{create_gpu_renderer, render_to_texture, VelloRenderer};
